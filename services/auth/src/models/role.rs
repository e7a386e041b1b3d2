//! Role model and related functionality

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role granted to a user by the auth service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_RECEPTIONIST")]
    Receptionist,
    #[serde(rename = "ROLE_MANAGER")]
    Manager,
}

impl Role {
    /// Every role, lowest privilege first
    pub const ALL: [Role; 3] = [Role::User, Role::Receptionist, Role::Manager];

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Receptionist => "ROLE_RECEPTIONIST",
            Role::Manager => "ROLE_MANAGER",
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role name outside the known set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role '{0}', expected one of ROLE_USER, ROLE_RECEPTIONIST, ROLE_MANAGER")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts the wire name or the bare suffix, in any case
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match name {
            "USER" => Ok(Role::User),
            "RECEPTIONIST" => Ok(Role::Receptionist),
            "MANAGER" => Ok(Role::Manager),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        for role in Role::ALL {
            let encoded = serde_json::to_string(&role).unwrap();
            assert_eq!(encoded, format!("\"{}\"", role.as_str()));
            assert_eq!(serde_json::from_str::<Role>(&encoded).unwrap(), role);
        }
        assert!(serde_json::from_str::<Role>("\"ROLE_ADMIN\"").is_err());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("ROLE_MANAGER".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("receptionist".parse::<Role>().unwrap(), Role::Receptionist);
        assert_eq!("role_user".parse::<Role>().unwrap(), Role::User);
        assert_eq!(
            "admin".parse::<Role>(),
            Err(UnknownRole("admin".to_string()))
        );
    }

    #[test]
    fn test_only_manager_is_manager() {
        assert!(Role::Manager.is_manager());
        assert!(!Role::Receptionist.is_manager());
        assert!(!Role::User.is_manager());
    }
}
