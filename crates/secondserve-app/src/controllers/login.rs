//! Login screen reducer.

use secondserve_core::{ApiError, UserRole};

use crate::controllers::Controller;
use crate::effects::{ApiCall, Effect, Route};
use crate::events::{TaskOutcome, UiEvent};
use crate::task::{TaskKind, TaskState};

#[derive(Debug, Default)]
pub struct LoginController {
    task: TaskState,
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.task.is_running()
    }

    /// Handles the sign-in action.
    ///
    /// Empty credentials never reach the network; a second press while the
    /// first attempt is in flight is ignored.
    pub fn submit(&self, email: &str, password: &str, role: UserRole) -> Vec<Effect> {
        if self.task.is_running() {
            return Vec::new();
        }
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return vec![Effect::alert_for(&ApiError::validation(
                "Please enter both email and password",
            ))];
        }
        vec![Effect::Call {
            kind: TaskKind::Login,
            call: ApiCall::Login {
                email: email.to_string(),
                password: password.to_string(),
                role,
            },
        }]
    }
}

impl Controller for LoginController {
    fn update(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::TaskStarted {
                kind: TaskKind::Login,
                started,
            } => {
                self.task.on_started(&started);
                Vec::new()
            }
            UiEvent::TaskCompleted {
                kind: TaskKind::Login,
                id,
                outcome: TaskOutcome::Auth(result),
            } => {
                if !self.task.finish_if_active(id) {
                    return Vec::new();
                }
                match result {
                    // The client already stored the session; we only route.
                    Ok(session) => vec![Effect::Navigate(Route::dashboard_for(session.role))],
                    Err(error) => vec![Effect::alert_for(&error)],
                }
            }
            _ => Vec::new(),
        }
    }
}
