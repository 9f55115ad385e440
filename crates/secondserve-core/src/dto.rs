//! Data transfer objects at the backend API boundary.
//!
//! Canonical shapes for the JSON the backend sends and receives. Parsing is
//! forward-compatible: unknown fields are ignored and absent optional fields
//! deserialize to `None`. Quantities are exact decimals, never binary
//! floats. Dates and timestamps keep their calendar components verbatim,
//! with no timezone reinterpretation.

use chrono::{Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::session::UserRole;

/// Credentials sent to `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: UserRole,
}

/// Identity returned by login and registration endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub user_type: Option<UserRole>,
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization_name: Option<String>,
}

/// Condition of logged leftover food, as presented to kitchen staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCondition {
    Fresh,
    Good,
    NearExpiry,
}

impl FoodCondition {
    /// Returns the wire-format enum name.
    pub fn as_str(self) -> &'static str {
        match self {
            FoodCondition::Fresh => "FRESH",
            FoodCondition::Good => "GOOD",
            FoodCondition::NearExpiry => "NEAR_EXPIRY",
        }
    }

    /// Shelf life in days granted by this condition.
    fn shelf_life_days(self) -> u64 {
        match self {
            FoodCondition::Fresh => 3,
            FoodCondition::Good => 2,
            FoodCondition::NearExpiry => 1,
        }
    }

    /// Computes the expiry date for an item logged on `logged_on`.
    pub fn expiry_after(self, logged_on: NaiveDate) -> NaiveDate {
        logged_on
            .checked_add_days(Days::new(self.shelf_life_days()))
            .unwrap_or(logged_on)
    }
}

/// A surplus food item logged by kitchen staff.
///
/// `condition` and `category` stay as raw strings on the wire so a new
/// server-side enum variant cannot fail the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodItemDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    /// The server calls this `createdDate`.
    #[serde(rename = "createdDate", skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_request_status: Option<String>,
}

/// A donation request an NGO has placed against a food item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodRequestDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_status: Option<String>,
}

impl FoodRequestDto {
    /// Builds the submission payload for requesting the full available
    /// amount of an item. The backend infers the NGO from the auth token.
    pub fn for_item(item: &FoodItemDto) -> Self {
        Self {
            food_item_id: item.id,
            requested_quantity: item.quantity,
            ..Self::default()
        }
    }
}

/// Hotel profile, used for registration and the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only sent on registration; the server never echoes it back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_code: Option<String>,
}

/// NGO profile, used for registration and the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NgoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_food_received: Option<Decimal>,
}

/// Kitchen staff registration payload for `POST /api/staff/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterStaffRequest {
    pub staff_name: String,
    pub email: String,
    pub password: String,
    /// Code identifying the hotel the staff member belongs to.
    pub hotel_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Weekly statistics for the hotel manager's dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStatsDto {
    pub total_donated_this_week: Option<Decimal>,
    pub total_logged_this_week: Option<Decimal>,
    pub hotel_code: Option<String>,
}
