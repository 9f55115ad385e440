//! Effects returned by screen reducers for the runtime to execute.
//!
//! Reducers never perform I/O or spawn tasks; they describe the work as
//! effects and the runtime carries them out. This is what keeps controllers
//! testable without a network or a UI framework.

use secondserve_core::ApiError;
use secondserve_core::dto::{FoodItemDto, FoodRequestDto, HotelDto, NgoDto, RegisterStaffRequest};
use secondserve_core::session::UserRole;

use crate::task::TaskKind;

/// Destination screens for navigation effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    KitchenMain,
    HotelDashboard,
    NgoPortal,
}

impl Route {
    /// The dashboard a freshly logged-in user lands on.
    pub fn dashboard_for(role: UserRole) -> Self {
        match role {
            UserRole::KitchenStaff => Route::KitchenMain,
            UserRole::HotelManager => Route::HotelDashboard,
            UserRole::Ngo => Route::NgoPortal,
        }
    }
}

/// Declarative description of an API operation a reducer wants performed.
#[derive(Debug, Clone)]
pub enum ApiCall {
    Login {
        email: String,
        password: String,
        role: UserRole,
    },
    RegisterHotel(HotelDto),
    RegisterNgo(NgoDto),
    RegisterStaff(RegisterStaffRequest),
    LoadHotels,
    LoadHotel { id: i64 },
    SaveHotel { id: i64, hotel: HotelDto },
    LoadDashboardStats,
    LoadFoodItems { hotel_id: i64 },
    LoadPendingFoodItems { hotel_id: i64 },
    LoadTodaysFoodItems { hotel_id: i64 },
    LogFoodItem(FoodItemDto),
    ApproveFoodItem { id: i64 },
    DeleteFoodItem { id: i64 },
    SubmitFoodRequest(FoodRequestDto),
    LoadHotelRequests { hotel_id: i64 },
    LoadPendingHotelRequests { hotel_id: i64 },
    ApproveFoodRequest { id: i64 },
    RejectFoodRequest { id: i64 },
    CompleteFoodRequest { id: i64 },
    LoadNgoRequests { ngo_id: i64 },
    LoadNgo { id: i64 },
    SaveNgo { id: i64, ngo: NgoDto },
}

/// Commands a reducer returns to the runtime.
#[derive(Debug)]
pub enum Effect {
    /// Spawn an API call as a background task of the given kind.
    Call { kind: TaskKind, call: ApiCall },
    /// Start this screen's periodic refresh for the given kind.
    StartRefresh { kind: TaskKind },
    /// Stop this screen's periodic refresh.
    StopRefresh,
    /// Show a modal notification.
    Alert { title: String, message: String },
    /// Switch to another screen.
    Navigate(Route),
}

impl Effect {
    /// Builds the standard notification for a pipeline error.
    pub fn alert_for(error: &ApiError) -> Self {
        Effect::Alert {
            title: error.title().to_string(),
            message: error.to_string(),
        }
    }
}
