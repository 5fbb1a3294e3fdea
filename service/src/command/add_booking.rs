//! [`Command`] for recording a new [`Booking`].

use common::{
    operations::{By, Insert, Select},
    Day, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{self, Booking, Channel, GuestsCount, Status},
        property, Property,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for recording a new [`Booking`].
///
/// Rejects an empty or inverted stay; it does not cross-check other
/// bookings, so overlapping records can still enter the calendar and the
/// layout engine renders through them.
#[derive(Clone, Debug)]
pub struct AddBooking {
    /// ID of the booked [`Property`].
    pub property_id: property::Id,

    /// Arrival [`Day`]: the first paid night.
    pub check_in: Day,

    /// Departure [`Day`], exclusive.
    pub check_out: Day,

    /// [`Channel`] the booking came through.
    pub channel: Channel,

    /// Name of the guest.
    pub guest: booking::GuestName,

    /// Number of guests staying.
    pub guests_count: GuestsCount,

    /// Agreed nightly rate.
    pub nightly_rate: Money,

    /// [`Status`] of the booking.
    pub status: Status,
}

impl<S> Command<AddBooking> for Service<S>
where
    S: Store<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<store::Error>,
        > + Store<Insert<Booking>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: AddBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddBooking {
            property_id,
            check_in,
            check_out,
            channel,
            guest,
            guests_count,
            nightly_rate,
            status,
        } = cmd;

        if check_in >= check_out {
            return Err(tracerr::new!(E::EmptyStay {
                check_in,
                check_out,
            }));
        }

        self.store()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let booking = Booking {
            id: booking::Id::new(),
            property_id,
            check_in,
            check_out,
            channel,
            guest,
            guests_count,
            nightly_rate,
            status,
        };
        self.store()
            .execute(Insert(booking.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!("recorded `Booking(id: {})`", booking.id);

        Ok(booking)
    }
}

/// Error of [`AddBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// The stay holds no nights.
    #[display("check-out {check_out} does not follow check-in {check_in}")]
    EmptyStay {
        /// Requested arrival day.
        check_in: Day,

        /// Requested departure day.
        check_out: Day,
    },
}
