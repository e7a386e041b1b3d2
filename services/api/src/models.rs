//! Request and response payloads for the hotel resources
//!
//! Field names follow the server's camelCase JSON; enum variants follow its
//! upper-case constants.

pub mod bookings;
pub mod feedbacks;
pub mod guests;
pub mod rooms;

pub use bookings::{Booking, BookingRequest, BookingStatus};
pub use feedbacks::{Feedback, FeedbackResponse, FeedbackSearch, HealthStatus};
pub use guests::{Guest, GuestRequest};
pub use rooms::{Room, RoomRequest, RoomStatus, RoomType};

use thiserror::Error;

/// A value outside a closed enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}', expected one of {expected}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
