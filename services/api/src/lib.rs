//! Hotel resource API
//!
//! Typed clients for rooms, guests, bookings and guest feedback, all sharing
//! one [`ApiClient`] and therefore one base address and one source of the
//! bearer token.

pub mod dates;
pub mod models;
pub mod resources;
pub mod validation;

use common::ApiClient;

pub use resources::{BookingsApi, FeedbacksApi, GuestsApi, RoomsApi};

/// Every resource client, built over a single shared HTTP client
#[derive(Clone)]
pub struct HotelApi {
    pub rooms: RoomsApi,
    pub guests: GuestsApi,
    pub bookings: BookingsApi,
    pub feedbacks: FeedbacksApi,
}

impl HotelApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            rooms: RoomsApi::new(client.clone()),
            guests: GuestsApi::new(client.clone()),
            bookings: BookingsApi::new(client.clone()),
            feedbacks: FeedbacksApi::new(client),
        }
    }
}
