//! Guests resource

use common::http::encode_path_segment;
use common::{ApiClient, ApiResult, PageRequest, ValidationError};
use tracing::info;

use crate::models::{Guest, GuestRequest};
use crate::validation::Validate;

/// Client for `/guests`
#[derive(Clone)]
pub struct GuestsApi {
    client: ApiClient,
}

impl GuestsApi {
    /// Create a new guests client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a guest
    pub async fn create(&self, request: &GuestRequest) -> ApiResult<Guest> {
        request.validate()?;
        info!("Creating guest {}", request.name);
        self.client.post("/guests").json(request).send_json().await
    }

    /// First page of guests
    pub async fn get_all(&self) -> ApiResult<Vec<Guest>> {
        self.get_page(PageRequest::default()).await
    }

    /// One page of guests
    pub async fn get_page(&self, page: PageRequest) -> ApiResult<Vec<Guest>> {
        self.client.get("/guests").query(&page).send_json().await
    }

    /// Get a guest by ID
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Guest> {
        self.client.get(&format!("/guests/{id}")).send_json().await
    }

    /// Look a guest up by phone number
    pub async fn get_by_phone(&self, phone: &str) -> ApiResult<Guest> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::required("phone", "Phone number").into());
        }

        self.client
            .get(&format!("/guests/phone/{}", encode_path_segment(phone)))
            .send_json()
            .await
    }

    /// Replace a guest
    pub async fn update(&self, id: i64, request: &GuestRequest) -> ApiResult<Guest> {
        request.validate()?;
        info!("Updating guest {}", id);
        self.client
            .put(&format!("/guests/{id}"))
            .json(request)
            .send_json()
            .await
    }

    /// Delete a guest, returning the server's confirmation text
    pub async fn delete(&self, id: i64) -> ApiResult<String> {
        info!("Deleting guest {}", id);
        self.client.delete(&format!("/guests/{id}")).send_text().await
    }
}
