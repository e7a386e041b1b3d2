//! Bookings resource
//!
//! Status transitions are requested through dedicated endpoints and answered
//! with plain text; the client never changes a booking's status itself.

use common::{ApiClient, ApiResult, PageRequest};
use tracing::info;

use crate::dates::normalize_booking_date;
use crate::models::{Booking, BookingRequest};

/// Client for `/bookings`
#[derive(Clone)]
pub struct BookingsApi {
    client: ApiClient,
}

impl BookingsApi {
    /// Create a new bookings client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Reserve a room for a guest
    pub async fn create(&self, request: &BookingRequest) -> ApiResult<Booking> {
        let payload = normalized(request)?;
        info!(
            "Creating booking for guest {} in room {}",
            payload.guest_id, payload.room_id
        );
        self.client.post("/bookings").json(&payload).send_json().await
    }

    /// First page of bookings
    pub async fn get_all(&self) -> ApiResult<Vec<Booking>> {
        self.get_page(PageRequest::default()).await
    }

    /// One page of bookings
    pub async fn get_page(&self, page: PageRequest) -> ApiResult<Vec<Booking>> {
        self.client.get("/bookings").query(&page).send_json().await
    }

    /// Get a booking by ID
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Booking> {
        self.client.get(&format!("/bookings/{id}")).send_json().await
    }

    /// One page of a guest's bookings
    pub async fn get_by_guest(&self, guest_id: i64, page: PageRequest) -> ApiResult<Vec<Booking>> {
        self.client
            .get(&format!("/bookings/guest/{guest_id}"))
            .query(&page)
            .send_json()
            .await
    }

    /// Replace a booking
    pub async fn update(&self, id: i64, request: &BookingRequest) -> ApiResult<Booking> {
        let payload = normalized(request)?;
        info!("Updating booking {}", id);
        self.client
            .put(&format!("/bookings/{id}"))
            .json(&payload)
            .send_json()
            .await
    }

    /// Delete a booking, returning the server's confirmation text
    pub async fn delete(&self, id: i64) -> ApiResult<String> {
        info!("Deleting booking {}", id);
        self.client
            .delete(&format!("/bookings/{id}"))
            .send_text()
            .await
    }

    pub async fn check_in(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "check-in").await
    }

    pub async fn check_out(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "check-out").await
    }

    pub async fn cancel(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "cancel").await
    }

    async fn transition(&self, id: i64, action: &str) -> ApiResult<String> {
        info!("Requesting {} for booking {}", action, id);
        self.client
            .patch(&format!("/bookings/{id}/{action}"))
            .send_text()
            .await
    }
}

fn normalized(request: &BookingRequest) -> ApiResult<BookingRequest> {
    Ok(BookingRequest {
        check_in_date: normalize_booking_date("checkInDate", &request.check_in_date)?,
        check_out_date: normalize_booking_date("checkOutDate", &request.check_out_date)?,
        ..request.clone()
    })
}
