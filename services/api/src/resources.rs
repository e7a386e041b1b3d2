//! Typed clients for the hotel resources
//!
//! Each client maps its operations one to one onto REST endpoints, sending
//! exactly one request per call through the shared [`ApiClient`].
//!
//! [`ApiClient`]: common::ApiClient

pub mod bookings;
pub mod feedbacks;
pub mod guests;
pub mod rooms;

pub use bookings::BookingsApi;
pub use feedbacks::FeedbacksApi;
pub use guests::GuestsApi;
pub use rooms::RoomsApi;
