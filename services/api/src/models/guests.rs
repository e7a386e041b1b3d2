//! Guest models

use serde::{Deserialize, Serialize};

/// Guest creation and update payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub id_proof_number: String,
    pub address: String,
}

/// Guest as returned by the server
///
/// Guests embedded in bookings spell the phone field `phone`; both spellings
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phone")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub id_proof_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}
