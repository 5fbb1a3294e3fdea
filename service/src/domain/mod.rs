//! Domain entities of the back-office calendar.

pub mod blocked;
pub mod booking;
pub mod property;
pub mod rule;

pub use self::{
    blocked::BlockedPeriod, booking::Booking, property::Property,
    rule::PricingRule,
};
