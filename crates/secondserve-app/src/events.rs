//! Events delivered to screen reducers through the inbox.

use secondserve_core::dto::{
    DashboardStatsDto, FoodItemDto, FoodRequestDto, HotelDto, NgoDto,
};
use secondserve_core::{ApiResult, Session};

use crate::task::{TaskId, TaskKind, TaskStarted};

/// Typed payload of a finished background call.
#[derive(Debug)]
pub enum TaskOutcome {
    Auth(ApiResult<Session>),
    DashboardStats(ApiResult<DashboardStatsDto>),
    FoodItem(ApiResult<FoodItemDto>),
    FoodItems(ApiResult<Vec<FoodItemDto>>),
    FoodRequest(ApiResult<FoodRequestDto>),
    FoodRequests(ApiResult<Vec<FoodRequestDto>>),
    Hotel(ApiResult<HotelDto>),
    Hotels(ApiResult<Vec<HotelDto>>),
    Ngo(ApiResult<NgoDto>),
    /// Mutations whose success carries no payload (approve, reject, delete).
    Unit(ApiResult<()>),
}

/// Events the UI loop hands to reducers.
///
/// Completions for navigated-away screens still arrive; reducers decide
/// relevance via their task state (`finish_if_active`).
#[derive(Debug)]
pub enum UiEvent {
    /// A background task was spawned for `kind`.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// A background task finished.
    TaskCompleted {
        kind: TaskKind,
        id: TaskId,
        outcome: TaskOutcome,
    },
    /// A periodic refresh timer fired for `kind`.
    RefreshTick { kind: TaskKind },
}
