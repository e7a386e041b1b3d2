//! Guest feedback resource
//!
//! Every endpoint except the health check answers with a
//! [`FeedbackResponse`] envelope.

use common::{ApiClient, ApiResult, PageRequest};
use tracing::info;

use crate::models::{Feedback, FeedbackResponse, FeedbackSearch, HealthStatus};
use crate::validation::Validate;

/// Client for `/feedbacks`
#[derive(Clone)]
pub struct FeedbacksApi {
    client: ApiClient,
}

impl FeedbacksApi {
    /// Create a new feedbacks client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Submit a guest's feedback
    pub async fn submit(&self, feedback: &Feedback) -> ApiResult<FeedbackResponse<Feedback>> {
        feedback.validate()?;
        info!("Submitting feedback from {}", feedback.guest_name);
        self.client
            .post("/feedbacks/submit")
            .json(feedback)
            .send_json()
            .await
    }

    /// First page of feedback
    pub async fn get_all(&self) -> ApiResult<FeedbackResponse<Vec<Feedback>>> {
        self.get_page(PageRequest::default()).await
    }

    /// One page of feedback
    pub async fn get_page(&self, page: PageRequest) -> ApiResult<FeedbackResponse<Vec<Feedback>>> {
        self.client.get("/feedbacks").query(&page).send_json().await
    }

    /// Get one feedback entry by ID
    pub async fn get_by_id(&self, id: i64) -> ApiResult<FeedbackResponse<Feedback>> {
        self.client
            .get(&format!("/feedbacks/{id}"))
            .send_json()
            .await
    }

    /// Search and filter feedback; unset filters are not sent
    pub async fn search(
        &self,
        filters: &FeedbackSearch,
    ) -> ApiResult<FeedbackResponse<Vec<Feedback>>> {
        self.client
            .get("/feedbacks/search")
            .query(filters)
            .send_json()
            .await
    }

    /// Replace a feedback entry
    pub async fn update(&self, id: i64, feedback: &Feedback) -> ApiResult<FeedbackResponse<Feedback>> {
        feedback.validate()?;
        info!("Updating feedback {}", id);
        self.client
            .put(&format!("/feedbacks/{id}"))
            .json(feedback)
            .send_json()
            .await
    }

    /// Delete a feedback entry
    pub async fn delete(&self, id: i64) -> ApiResult<FeedbackResponse<serde_json::Value>> {
        info!("Deleting feedback {}", id);
        self.client
            .delete(&format!("/feedbacks/{id}"))
            .send_json()
            .await
    }

    /// Liveness of the feedback service
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.client.get("/feedbacks/health").send_json().await
    }
}
