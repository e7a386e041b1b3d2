//! Guest feedback models

use serde::{Deserialize, Serialize};

/// Guest feedback record, used both as payload and response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<i64>,
    pub guest_name: String,
    pub guest_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub rating: u8,
    pub service_quality: String,
    pub room_cleanliness: String,
    pub amenities_feedback: String,
    pub overall_experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Envelope wrapping every feedback endpoint's payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Filters for the feedback search endpoint; unset filters are not sent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<u8>,
}

/// Body of the feedback health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_list_and_count() {
        let response: FeedbackResponse<Vec<Feedback>> = serde_json::from_value(json!({
            "success": true,
            "message": "Feedbacks retrieved successfully",
            "data": [{
                "feedbackId": 9,
                "guestName": "Ada",
                "guestEmail": "ada@example.com",
                "rating": 5,
                "serviceQuality": "Excellent service",
                "roomCleanliness": "Spotless room",
                "amenitiesFeedback": "Great pool area",
                "overallExperience": "Would come back",
                "createdAt": "2024-01-05T10:00:00"
            }],
            "count": 1
        }))
        .unwrap();

        assert!(response.success);
        assert_eq!(response.count, Some(1));
        let data = response.data.unwrap();
        assert_eq!(data[0].feedback_id, Some(9));
        assert_eq!(data[0].room_number, None);
    }

    #[test]
    fn test_envelope_without_data() {
        let response: FeedbackResponse<serde_json::Value> = serde_json::from_value(json!({
            "success": true,
            "message": "Feedback deleted successfully"
        }))
        .unwrap();
        assert_eq!(response.data, None);
        assert_eq!(response.message, "Feedback deleted successfully");
    }

    #[test]
    fn test_search_sends_only_set_filters() {
        let search = FeedbackSearch {
            room_number: Some("101".to_string()),
            min_rating: Some(4),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({"roomNumber": "101", "minRating": 4})
        );
    }
}
