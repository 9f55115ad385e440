//! Hotel manager dashboard reducer.
//!
//! Drives the weekly stats card and the pending food-request queue. Both
//! loads refresh periodically while the screen is visible; background
//! refresh failures are demoted to log lines per the configured policy so a
//! flaky network does not stack modal alerts on an idle screen.

use secondserve_core::dto::{DashboardStatsDto, FoodRequestDto};
use secondserve_core::{ApiError, RefreshFailurePolicy, SessionStore};
use tracing::warn;

use crate::controllers::Controller;
use crate::effects::{ApiCall, Effect};
use crate::events::{TaskOutcome, UiEvent};
use crate::task::{TaskKind, Tasks};

#[derive(Debug)]
pub struct DashboardController {
    session: SessionStore,
    policy: RefreshFailurePolicy,
    tasks: Tasks,
    stats: Option<DashboardStatsDto>,
    pending_requests: Vec<FoodRequestDto>,
    stats_loaded_once: bool,
    requests_loaded_once: bool,
}

impl DashboardController {
    pub fn new(session: SessionStore, policy: RefreshFailurePolicy) -> Self {
        Self {
            session,
            policy,
            tasks: Tasks::default(),
            stats: None,
            pending_requests: Vec::new(),
            stats_loaded_once: false,
            requests_loaded_once: false,
        }
    }

    pub fn stats(&self) -> Option<&DashboardStatsDto> {
        self.stats.as_ref()
    }

    pub fn pending_requests(&self) -> &[FoodRequestDto] {
        &self.pending_requests
    }

    pub fn is_deciding(&self) -> bool {
        self.tasks.is_running(TaskKind::RequestDecide)
    }

    /// Entering the screen: initial loads plus the periodic refreshes.
    pub fn on_show(&self) -> Vec<Effect> {
        let mut effects = Vec::new();
        effects.extend(self.load(TaskKind::DashboardStats));
        effects.extend(self.load(TaskKind::RequestsLoad));
        effects.push(Effect::StartRefresh {
            kind: TaskKind::DashboardStats,
        });
        effects.push(Effect::StartRefresh {
            kind: TaskKind::RequestsLoad,
        });
        effects
    }

    /// Leaving the screen stops the refresh timers.
    pub fn on_hide(&self) -> Vec<Effect> {
        vec![Effect::StopRefresh]
    }

    pub fn approve_request(&self, request_id: i64) -> Vec<Effect> {
        self.decide(ApiCall::ApproveFoodRequest { id: request_id })
    }

    pub fn reject_request(&self, request_id: i64) -> Vec<Effect> {
        self.decide(ApiCall::RejectFoodRequest { id: request_id })
    }

    fn decide(&self, call: ApiCall) -> Vec<Effect> {
        if self.tasks.is_running(TaskKind::RequestDecide) {
            return Vec::new();
        }
        vec![Effect::Call {
            kind: TaskKind::RequestDecide,
            call,
        }]
    }

    fn load(&self, kind: TaskKind) -> Vec<Effect> {
        let Some(hotel_id) = self.session.hotel_id() else {
            return vec![Effect::alert_for(&ApiError::AuthenticationMissing)];
        };
        let call = match kind {
            TaskKind::DashboardStats => ApiCall::LoadDashboardStats,
            _ => ApiCall::LoadPendingHotelRequests { hotel_id },
        };
        vec![Effect::Call { kind, call }]
    }

    fn on_stats(&mut self, result: Result<DashboardStatsDto, ApiError>) -> Vec<Effect> {
        let initial = !self.stats_loaded_once;
        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                self.stats_loaded_once = true;
                Vec::new()
            }
            Err(error) => self.report_load_failure("dashboard stats", initial, &error),
        }
    }

    fn on_requests(&mut self, result: Result<Vec<FoodRequestDto>, ApiError>) -> Vec<Effect> {
        let initial = !self.requests_loaded_once;
        match result {
            Ok(requests) => {
                self.pending_requests = requests;
                self.requests_loaded_once = true;
                Vec::new()
            }
            Err(error) => self.report_load_failure("pending requests", initial, &error),
        }
    }

    fn report_load_failure(
        &self,
        what: &str,
        initial: bool,
        error: &ApiError,
    ) -> Vec<Effect> {
        if self.policy.should_alert(initial) {
            vec![Effect::alert_for(error)]
        } else {
            warn!(%error, "background refresh of {what} failed");
            Vec::new()
        }
    }
}

impl Controller for DashboardController {
    fn update(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::TaskStarted { kind, started } => {
                self.tasks.state_mut(kind).on_started(&started);
                Vec::new()
            }
            UiEvent::RefreshTick { kind } => {
                // A tick while the same load is still in flight is skipped.
                if self.tasks.is_running(kind) {
                    return Vec::new();
                }
                self.load(kind)
            }
            UiEvent::TaskCompleted { kind, id, outcome } => {
                if !self.tasks.state_mut(kind).finish_if_active(id) {
                    return Vec::new();
                }
                match (kind, outcome) {
                    (TaskKind::DashboardStats, TaskOutcome::DashboardStats(result)) => {
                        self.on_stats(result)
                    }
                    (TaskKind::RequestsLoad, TaskOutcome::FoodRequests(result)) => {
                        self.on_requests(result)
                    }
                    (TaskKind::RequestDecide, TaskOutcome::Unit(result)) => match result {
                        // Decisions change the queue server-side; reload it.
                        Ok(()) => self.load(TaskKind::RequestsLoad),
                        Err(error) => vec![Effect::alert_for(&error)],
                    },
                    _ => Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use secondserve_core::{Session, UserRole};

    use super::*;
    use crate::task::{TaskId, TaskStarted};

    fn manager_store() -> SessionStore {
        let store = SessionStore::new();
        store.create(Session {
            token: "tok-1".to_string(),
            user_id: 7,
            role: UserRole::HotelManager,
            display_name: "Grand Plaza".to_string(),
            email: None,
            organization_name: None,
        });
        store
    }

    fn connection_error(detail: &str) -> ApiError {
        ApiError::Connection {
            detail: detail.to_string(),
        }
    }

    fn started(kind: TaskKind, id: u64) -> UiEvent {
        UiEvent::TaskStarted {
            kind,
            started: TaskStarted {
                id: TaskId(id),
                cancel: None,
            },
        }
    }

    /// Entering the screen loads both panels and starts both refreshes.
    #[test]
    fn test_on_show_loads_and_starts_refresh() {
        let controller =
            DashboardController::new(manager_store(), RefreshFailurePolicy::InitialOnly);
        let effects = controller.on_show();
        assert_eq!(effects.len(), 4);
        assert!(matches!(
            effects[0],
            Effect::Call {
                kind: TaskKind::DashboardStats,
                call: ApiCall::LoadDashboardStats,
            }
        ));
        assert!(matches!(
            effects[1],
            Effect::Call {
                kind: TaskKind::RequestsLoad,
                call: ApiCall::LoadPendingHotelRequests { hotel_id: 7 },
            }
        ));
        assert!(matches!(effects[2], Effect::StartRefresh { .. }));
        assert!(matches!(effects[3], Effect::StartRefresh { .. }));
    }

    /// Initial load failure surfaces an alert under InitialOnly.
    #[test]
    fn test_initial_failure_alerts() {
        let mut controller =
            DashboardController::new(manager_store(), RefreshFailurePolicy::InitialOnly);
        controller.update(started(TaskKind::DashboardStats, 0));
        let effects = controller.update(UiEvent::TaskCompleted {
            kind: TaskKind::DashboardStats,
            id: TaskId(0),
            outcome: TaskOutcome::DashboardStats(Err(connection_error(
                "connection refused",
            ))),
        });
        match effects.as_slice() {
            [Effect::Alert { title, .. }] => assert_eq!(title, "Connection Error"),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    /// After a successful initial load, refresh failures are silent under
    /// InitialOnly.
    #[test]
    fn test_background_failure_suppressed() {
        let mut controller =
            DashboardController::new(manager_store(), RefreshFailurePolicy::InitialOnly);
        controller.update(started(TaskKind::DashboardStats, 0));
        controller.update(UiEvent::TaskCompleted {
            kind: TaskKind::DashboardStats,
            id: TaskId(0),
            outcome: TaskOutcome::DashboardStats(Ok(DashboardStatsDto::default())),
        });

        let effects = controller.update(UiEvent::RefreshTick {
            kind: TaskKind::DashboardStats,
        });
        assert!(matches!(effects.as_slice(), [Effect::Call { .. }]));

        controller.update(started(TaskKind::DashboardStats, 1));
        let effects = controller.update(UiEvent::TaskCompleted {
            kind: TaskKind::DashboardStats,
            id: TaskId(1),
            outcome: TaskOutcome::DashboardStats(Err(connection_error(
                "connection refused",
            ))),
        });
        assert!(effects.is_empty());
        assert!(controller.stats().is_some());
    }

    /// A refresh tick while the same load is in flight is skipped.
    #[test]
    fn test_tick_skipped_while_loading() {
        let mut controller =
            DashboardController::new(manager_store(), RefreshFailurePolicy::InitialOnly);
        controller.update(started(TaskKind::RequestsLoad, 0));
        let effects = controller.update(UiEvent::RefreshTick {
            kind: TaskKind::RequestsLoad,
        });
        assert!(effects.is_empty());
    }

    /// Approve is guarded to one in-flight decision; success reloads the
    /// queue.
    #[test]
    fn test_approve_guard_and_reload() {
        let mut controller =
            DashboardController::new(manager_store(), RefreshFailurePolicy::InitialOnly);

        let effects = controller.approve_request(41);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Call {
                kind: TaskKind::RequestDecide,
                call: ApiCall::ApproveFoodRequest { id: 41 },
            }]
        ));

        controller.update(started(TaskKind::RequestDecide, 0));
        assert!(controller.is_deciding());
        assert!(controller.reject_request(42).is_empty());

        let effects = controller.update(UiEvent::TaskCompleted {
            kind: TaskKind::RequestDecide,
            id: TaskId(0),
            outcome: TaskOutcome::Unit(Ok(())),
        });
        assert!(!controller.is_deciding());
        assert!(matches!(
            effects.as_slice(),
            [Effect::Call {
                kind: TaskKind::RequestsLoad,
                call: ApiCall::LoadPendingHotelRequests { hotel_id: 7 },
            }]
        ));
    }

    /// A stale completion id does not clobber the state of the newer task.
    #[test]
    fn test_stale_completion_ignored() {
        let mut controller =
            DashboardController::new(manager_store(), RefreshFailurePolicy::InitialOnly);
        controller.update(started(TaskKind::RequestsLoad, 0));
        controller.update(started(TaskKind::RequestsLoad, 1));

        let effects = controller.update(UiEvent::TaskCompleted {
            kind: TaskKind::RequestsLoad,
            id: TaskId(0),
            outcome: TaskOutcome::FoodRequests(Err(connection_error("reset"))),
        });
        assert!(effects.is_empty());
        assert!(controller.tasks.is_running(TaskKind::RequestsLoad));
    }
}
