//! Auth and staff endpoints

use common::{ApiClient, ApiResult};
use tracing::info;

use crate::models::{AuthResponse, LoginRequest, RegisterRequest, StaffRequest, StaffUser};
use crate::validation;

/// Typed access to `/auth/*`
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        validation::validate_credentials(&request.username, &request.password)?;
        info!("Logging in as {}", request.username);

        self.client
            .post("/auth/login")
            .json(request)
            .send_json()
            .await
    }

    /// Create a self-service account and sign it in
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        validation::validate_registration(&request.username, &request.password)?;
        info!("Registering {}", request.username);

        self.client
            .post("/auth/register")
            .json(request)
            .send_json()
            .await
    }

    /// Create a staff account, returning the server's confirmation text
    pub async fn create_staff(&self, request: &StaffRequest) -> ApiResult<String> {
        validation::validate_staff(request, true)?;
        info!("Creating staff user {} as {}", request.username, request.role);

        self.client
            .post("/auth/create-staff")
            .json(request)
            .send_text()
            .await
    }

    pub async fn get_all_staff(&self) -> ApiResult<Vec<StaffUser>> {
        self.client.get("/auth/staff").send_json().await
    }

    /// Update a staff account, returning the server's confirmation text
    pub async fn update_staff(&self, id: i64, request: &StaffRequest) -> ApiResult<String> {
        validation::validate_staff(request, false)?;
        info!("Updating staff user {}", id);

        self.client
            .put(&format!("/auth/staff/{id}"))
            .json(request)
            .send_text()
            .await
    }

    /// Delete a staff account, returning the server's confirmation text
    pub async fn delete_staff(&self, id: i64) -> ApiResult<String> {
        info!("Deleting staff user {}", id);
        self.client
            .delete(&format!("/auth/staff/{id}"))
            .send_text()
            .await
    }
}
