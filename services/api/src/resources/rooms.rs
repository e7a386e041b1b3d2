//! Rooms resource

use common::{ApiClient, ApiResult, PageRequest};
use tracing::info;

use crate::models::{Room, RoomRequest};
use crate::validation::Validate;

/// Client for `/rooms`
#[derive(Clone)]
pub struct RoomsApi {
    client: ApiClient,
}

impl RoomsApi {
    /// Create a new rooms client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a room
    pub async fn create(&self, request: &RoomRequest) -> ApiResult<Room> {
        request.validate()?;
        info!("Creating room {}", request.room_number);
        self.client.post("/rooms").json(request).send_json().await
    }

    /// First page of rooms
    pub async fn get_all(&self) -> ApiResult<Vec<Room>> {
        self.get_page(PageRequest::default()).await
    }

    /// One page of rooms
    pub async fn get_page(&self, page: PageRequest) -> ApiResult<Vec<Room>> {
        self.client.get("/rooms").query(&page).send_json().await
    }

    /// One page of rooms currently available
    pub async fn get_available(&self, page: PageRequest) -> ApiResult<Vec<Room>> {
        self.client
            .get("/rooms/available")
            .query(&page)
            .send_json()
            .await
    }

    /// Get a room by ID
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Room> {
        self.client.get(&format!("/rooms/{id}")).send_json().await
    }

    /// Replace a room
    pub async fn update(&self, id: i64, request: &RoomRequest) -> ApiResult<Room> {
        request.validate()?;
        info!("Updating room {}", id);
        self.client
            .put(&format!("/rooms/{id}"))
            .json(request)
            .send_json()
            .await
    }

    /// Delete a room, returning the server's confirmation text
    pub async fn delete(&self, id: i64) -> ApiResult<String> {
        info!("Deleting room {}", id);
        self.client.delete(&format!("/rooms/{id}")).send_text().await
    }
}
