//! Input validation utilities
//!
//! Only presence and the registration password length are checked here. The
//! server remains the authority on everything else.

use common::ValidationError;

use crate::models::StaffRequest;

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Require a non-blank value
pub fn require(field: &'static str, label: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field, label));
    }
    Ok(())
}

/// Validate login credentials
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    require("username", "Username", username)?;
    require("password", "Password", password)
}

/// Validate registration input
pub fn validate_registration(username: &str, password: &str) -> Result<(), ValidationError> {
    validate_credentials(username, password)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    Ok(())
}

/// Validate a staff payload; a password is only required when creating
pub fn validate_staff(request: &StaffRequest, creating: bool) -> Result<(), ValidationError> {
    require("username", "Username", &request.username)?;
    if creating {
        require(
            "password",
            "Password",
            request.password.as_deref().unwrap_or_default(),
        )?;
    }
    require("email", "Email", &request.email)?;
    require("firstName", "First name", &request.first_name)?;
    require("lastName", "Last name", &request.last_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn staff(password: Option<&str>) -> StaffRequest {
        StaffRequest {
            username: "frontdesk".to_string(),
            password: password.map(str::to_string),
            email: "desk@hotel.test".to_string(),
            first_name: "Front".to_string(),
            last_name: "Desk".to_string(),
            role: Role::Receptionist,
        }
    }

    #[test]
    fn test_credentials_required() {
        assert!(validate_credentials("user", "pw").is_ok());

        let error = validate_credentials("", "pw").unwrap_err();
        assert_eq!(error.field, "username");
        assert_eq!(error.to_string(), "Username is required");

        let error = validate_credentials("user", "   ").unwrap_err();
        assert_eq!(error.field, "password");
    }

    #[test]
    fn test_registration_password_length() {
        assert!(validate_registration("newuser", "secret").is_ok());

        let error = validate_registration("newuser", "12345").unwrap_err();
        assert_eq!(error.to_string(), "Password must be at least 6 characters");

        // Counted in characters, not bytes
        assert!(validate_registration("newuser", "pässw").is_err());
        assert!(validate_registration("newuser", "pässwö").is_ok());
    }

    #[test]
    fn test_login_has_no_length_rule() {
        assert!(validate_credentials("user", "123").is_ok());
    }

    #[test]
    fn test_staff_password_only_required_on_create() {
        assert!(validate_staff(&staff(Some("secret1")), true).is_ok());
        assert!(validate_staff(&staff(None), false).is_ok());

        let error = validate_staff(&staff(None), true).unwrap_err();
        assert_eq!(error.field, "password");

        let mut missing_email = staff(None);
        missing_email.email.clear();
        assert_eq!(
            validate_staff(&missing_email, false).unwrap_err().field,
            "email"
        );
    }
}
