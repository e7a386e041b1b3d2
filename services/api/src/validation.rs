//! Required-field checks run before a request is sent

use common::ValidationError;

use crate::models::{Feedback, GuestRequest, RoomRequest};

/// Payloads with locally checked required fields
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(field: &'static str, label: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field, label));
    }
    Ok(())
}

impl Validate for RoomRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("roomNumber", "Room number", &self.room_number)
    }
}

impl Validate for GuestRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", "Name", &self.name)?;
        require("email", "Email", &self.email)?;
        require("phoneNumber", "Phone number", &self.phone_number)?;
        require("idProofNumber", "ID proof number", &self.id_proof_number)?;
        require("address", "Address", &self.address)
    }
}

impl Validate for Feedback {
    fn validate(&self) -> Result<(), ValidationError> {
        require("guestName", "Guest name", &self.guest_name)?;
        require("guestEmail", "Guest email", &self.guest_email)?;
        require("serviceQuality", "Service quality", &self.service_quality)?;
        require("roomCleanliness", "Room cleanliness", &self.room_cleanliness)?;
        require("amenitiesFeedback", "Amenities feedback", &self.amenities_feedback)?;
        require("overallExperience", "Overall experience", &self.overall_experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomType;

    #[test]
    fn test_room_number_required() {
        let mut room = RoomRequest {
            room_number: "101".to_string(),
            room_type: RoomType::Single,
            price: 80.0,
        };
        assert!(room.validate().is_ok());

        room.room_number = " ".to_string();
        assert_eq!(room.validate().unwrap_err().to_string(), "Room number is required");
    }

    #[test]
    fn test_feedback_text_fields_required() {
        let feedback = Feedback {
            guest_name: "Ada".to_string(),
            guest_email: "ada@example.com".to_string(),
            rating: 4,
            service_quality: "Friendly staff".to_string(),
            room_cleanliness: "Very clean".to_string(),
            amenities_feedback: String::new(),
            overall_experience: "Pleasant".to_string(),
            ..Default::default()
        };
        assert_eq!(feedback.validate().unwrap_err().field, "amenitiesFeedback");
    }
}
