//! Demo dataset standing in for the back-office mock store.

use common::{Day, DaySpan, Handler as _, Money, Percent};
use service::{
    command::{AddBlockedPeriod, AddBooking, AddProperty, CreateRule},
    domain::{
        blocked::{BlockReason, CleaningSchedule},
        booking::{Channel, Status},
        rule::{Action, NumNights, PromotionKind, Scope},
        Property,
    },
};

use crate::Service;

/// Seeds the demo dataset, anchored to the `first` visible day so the data
/// always lands in view.
///
/// Includes a same-day turnover, a start-truncated booking, an overlapping
/// booking pair (the data violation the layout renders through) and a mix
/// of rules, so every engine path shows up in the rendered grid.
///
/// # Panics
///
/// Panics if the statically-known demo data fails validation; it cannot.
#[must_use]
pub fn demo(service: &Service, first: Day) -> Vec<Property> {
    let span = |from: i32, to: i32| {
        DaySpan::new(first + from, first + to).expect("demo span is ordered")
    };
    let money = |s: &str| s.parse::<Money>().expect("demo price is valid");
    let percent = |s: &str| s.parse::<Percent>().expect("demo percent is valid");

    let seaview = add_property(service, "Seaview Loft", money("120EUR"));
    let old_town = add_property(service, "Old Town Studio", money("85EUR"));
    let harbour = add_property(service, "Harbour House", money("150EUR"));

    let rule = |name: &str, scope, priority: i32, span, action| {
        service
            .execute(CreateRule {
                name: name.parse().expect("demo rule name is valid"),
                scope,
                enabled: true,
                priority: priority.into(),
                span,
                action,
            })
            .map(drop)
            .expect("demo rule is valid");
    };
    rule(
        "Summer saver",
        Scope::AllProperties,
        30,
        span(0, 20),
        Action::Promotion {
            kind: PromotionKind::Seasonal,
            adjustment: percent("-10"),
        },
    );
    rule(
        "Harvest festival",
        Scope::Property(seaview.id),
        60,
        span(6, 8),
        Action::PriceOverride {
            adjustment: percent("25"),
        },
    );
    rule(
        "Facade repairs",
        Scope::Property(harbour.id),
        100,
        span(3, 5),
        Action::ClosingBlock {
            reason: BlockReason::Maintenance,
        },
    );
    rule(
        "Weekend minimum",
        Scope::AllProperties,
        50,
        span(0, 13),
        Action::MinStay {
            nights: NumNights::new(2).expect("demo nights are valid"),
        },
    );
    rule(
        "Direct launch",
        Scope::Property(old_town.id),
        40,
        span(10, 12),
        Action::ChannelRestriction {
            channels: vec![Channel::Direct],
        },
    );

    let booking = |property: &Property,
                   from: i32,
                   to: i32,
                   guest: &str,
                   channel,
                   rate: &str| {
        service
            .execute(AddBooking {
                property_id: property.id,
                check_in: first + from,
                check_out: first + to,
                channel,
                guest: guest.parse().expect("demo guest name is valid"),
                guests_count: 2,
                nightly_rate: money(rate),
                status: Status::Confirmed,
            })
            .map(drop)
            .expect("demo booking is valid");
    };
    // Same-day turnover on the Seaview Loft.
    booking(&seaview, 1, 4, "Anna Keller", Channel::Airbnb, "120EUR");
    booking(&seaview, 4, 7, "Piotr Nowak", Channel::BookingCom, "108EUR");
    // Starts before the window: truncated on the left.
    booking(&old_town, -2, 2, "Jo Miller", Channel::Direct, "85EUR");
    // Overlapping pair: bad data the grid renders through.
    booking(&harbour, 8, 12, "Mina Park", Channel::Vrbo, "150EUR");
    booking(&harbour, 10, 14, "Luis Ortega", Channel::Airbnb, "150EUR");

    service
        .execute(AddBlockedPeriod {
            property_id: old_town.id,
            span: span(5, 6),
            reason: BlockReason::OwnerStay,
            cleaning: Some(CleaningSchedule {
                day: first + 6,
                note: Some("deep clean after owner visit".to_owned()),
            }),
        })
        .map(drop)
        .expect("demo blocked period is valid");

    vec![seaview, old_town, harbour]
}

/// Registers one demo [`Property`].
fn add_property(service: &Service, name: &str, rate: Money) -> Property {
    service
        .execute(AddProperty {
            name: name.parse().expect("demo property name is valid"),
            nightly_rate: rate,
        })
        .expect("demo property is valid")
}
