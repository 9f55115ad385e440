//! Typed endpoint wrappers over the generic client.
//!
//! Input validation happens here, before any round trip. Login and
//! registration are the only operations that touch the session store.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::client::{ApiClient, Auth};
use super::error::{ApiError, ApiResult};
use crate::dto::{
    AuthResponse, DashboardStatsDto, FoodItemDto, FoodRequestDto, HotelDto, LoginRequest, NgoDto,
    RegisterStaffRequest,
};
use crate::session::{Session, UserRole};

/// Parses a user-entered quantity into an exact decimal.
///
/// Fails fast with a validation error on malformed or non-positive input;
/// no network call is wasted on a bad form.
pub fn parse_quantity(input: &str) -> ApiResult<Decimal> {
    let quantity = Decimal::from_str(input.trim())
        .map_err(|_| ApiError::validation("Please enter a valid, positive quantity."))?;
    if quantity <= Decimal::ZERO {
        return Err(ApiError::validation(
            "Please enter a valid, positive quantity.",
        ));
    }
    Ok(quantity)
}

impl ApiClient {
    // --- auth ---

    /// Authenticates and stores the resulting session.
    pub async fn login(&self, email: &str, password: &str, role: UserRole) -> ApiResult<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::validation(
                "Please enter both email and password.",
            ));
        }

        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            user_type: role,
        };
        let auth: AuthResponse = self.post("/api/auth/login", &payload, Auth::None).await?;
        self.adopt_session(&auth)
    }

    /// Drops the local session. The backend holds no server-side state for
    /// it, so no network call is involved.
    pub fn logout(&self) {
        self.session().clear();
    }

    // --- registration ---

    pub async fn register_hotel(&self, hotel: &HotelDto) -> ApiResult<Session> {
        let auth: AuthResponse = self.post("/api/hotels/register", hotel, Auth::None).await?;
        self.adopt_session(&auth)
    }

    pub async fn register_ngo(&self, ngo: &NgoDto) -> ApiResult<Session> {
        let auth: AuthResponse = self.post("/api/ngos/register", ngo, Auth::None).await?;
        self.adopt_session(&auth)
    }

    pub async fn register_staff(&self, staff: &RegisterStaffRequest) -> ApiResult<Session> {
        let auth: AuthResponse = self.post("/api/staff/register", staff, Auth::None).await?;
        self.adopt_session(&auth)
    }

    // --- hotels ---

    pub async fn hotels(&self) -> ApiResult<Vec<HotelDto>> {
        self.get("/api/hotels", Auth::Required).await
    }

    pub async fn hotel(&self, id: i64) -> ApiResult<HotelDto> {
        self.get(&format!("/api/hotels/{id}"), Auth::Required).await
    }

    pub async fn update_hotel(&self, id: i64, hotel: &HotelDto) -> ApiResult<HotelDto> {
        self.put(&format!("/api/hotels/{id}"), hotel, Auth::Required)
            .await
    }

    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStatsDto> {
        self.get("/api/hotels/dashboard-stats", Auth::Required).await
    }

    // --- food items ---

    pub async fn food_items_for_hotel(&self, hotel_id: i64) -> ApiResult<Vec<FoodItemDto>> {
        self.get(&format!("/api/food-items/hotel/{hotel_id}"), Auth::Required)
            .await
    }

    pub async fn pending_food_items(&self, hotel_id: i64) -> ApiResult<Vec<FoodItemDto>> {
        self.get(
            &format!("/api/food-items/hotel/{hotel_id}/pending"),
            Auth::Required,
        )
        .await
    }

    pub async fn todays_food_items(&self, hotel_id: i64) -> ApiResult<Vec<FoodItemDto>> {
        self.get(
            &format!("/api/food-items/hotel/{hotel_id}/today"),
            Auth::Required,
        )
        .await
    }

    /// Logs a leftover item. The server answers 201 with the created item.
    pub async fn log_food_item(&self, item: &FoodItemDto) -> ApiResult<FoodItemDto> {
        self.post("/api/food-items", item, Auth::Required).await
    }

    pub async fn approve_food_item(&self, id: i64) -> ApiResult<()> {
        self.put_unit(&format!("/api/food-items/{id}/approve"), Auth::Required)
            .await
    }

    pub async fn delete_food_item(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/api/food-items/{id}"), Auth::Required)
            .await
    }

    // --- food requests ---

    /// Submits a donation request. The backend infers the requesting NGO
    /// from the auth token.
    pub async fn submit_food_request(&self, request: &FoodRequestDto) -> ApiResult<FoodRequestDto> {
        self.post("/api/food-requests", request, Auth::Required).await
    }

    pub async fn hotel_food_requests(&self, hotel_id: i64) -> ApiResult<Vec<FoodRequestDto>> {
        self.get(
            &format!("/api/food-requests/hotel/{hotel_id}"),
            Auth::Required,
        )
        .await
    }

    pub async fn pending_hotel_food_requests(
        &self,
        hotel_id: i64,
    ) -> ApiResult<Vec<FoodRequestDto>> {
        self.get(
            &format!("/api/food-requests/hotel/{hotel_id}?status=PENDING"),
            Auth::Required,
        )
        .await
    }

    pub async fn approve_food_request(&self, id: i64) -> ApiResult<()> {
        self.put_unit(&format!("/api/food-requests/{id}/approve"), Auth::Required)
            .await
    }

    pub async fn reject_food_request(&self, id: i64) -> ApiResult<()> {
        self.put_unit(&format!("/api/food-requests/{id}/reject"), Auth::Required)
            .await
    }

    pub async fn complete_food_request(&self, id: i64) -> ApiResult<()> {
        self.put_unit(&format!("/api/food-requests/{id}/complete"), Auth::Required)
            .await
    }

    pub async fn ngo_food_requests(&self, ngo_id: i64) -> ApiResult<Vec<FoodRequestDto>> {
        self.get(&format!("/api/food-requests/ngo/{ngo_id}"), Auth::Required)
            .await
    }

    // --- ngos ---

    pub async fn ngo(&self, id: i64) -> ApiResult<NgoDto> {
        self.get(&format!("/api/ngos/{id}"), Auth::Required).await
    }

    pub async fn update_ngo(&self, id: i64, ngo: &NgoDto) -> ApiResult<NgoDto> {
        self.put(&format!("/api/ngos/{id}"), ngo, Auth::Required)
            .await
    }

    /// Builds a session from an auth response and installs it.
    fn adopt_session(&self, auth: &AuthResponse) -> ApiResult<Session> {
        let session = Session::from_auth_response(auth).ok_or_else(|| {
            ApiError::parsing("auth response is missing token, user id, or role")
        })?;
        self.session().create(session.clone());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Quantity validation: malformed and non-positive input fail fast.
    #[test]
    fn test_parse_quantity_rejects_bad_input() {
        assert!(matches!(
            parse_quantity("abc"),
            Err(ApiError::Validation { .. })
        ));
        assert!(matches!(
            parse_quantity("0"),
            Err(ApiError::Validation { .. })
        ));
        assert!(matches!(
            parse_quantity("-1.5"),
            Err(ApiError::Validation { .. })
        ));
    }

    /// Quantity validation: exact decimal comes back for good input.
    #[test]
    fn test_parse_quantity_exact() {
        let q = parse_quantity(" 2.5 ").unwrap();
        assert_eq!(q, Decimal::from_str("2.5").unwrap());
    }
}
