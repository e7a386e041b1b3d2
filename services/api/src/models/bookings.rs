//! Booking models

use serde::{Deserialize, Serialize};

use super::guests::Guest;
use super::rooms::Room;

/// Booking lifecycle state
///
/// Transitions are decided by the server; the client only requests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Reserved,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// Booking creation and update payload
///
/// Dates are taken as entered; the bookings resource normalizes them to full
/// UTC timestamps before sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub number_of_adults: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_children: Option<u32>,
}

/// Booking as returned by the server
///
/// `guest` and `room` are absent when the owning service could not be reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub total_amount: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub guest: Option<Guest>,
    #[serde(default)]
    pub room: Option<Room>,
}
