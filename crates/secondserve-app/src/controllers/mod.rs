//! Screen reducers.
//!
//! Controllers are pure over the inbox: they consume [`UiEvent`]s and
//! describe everything else as [`Effect`]s. The only ambient state they
//! read is the injected [`SessionStore`](secondserve_core::SessionStore).

mod dashboard;
mod login;

pub use dashboard::DashboardController;
pub use login::LoginController;

use crate::effects::Effect;
use crate::events::UiEvent;

pub trait Controller {
    /// Applies one inbox event to the screen state.
    fn update(&mut self, event: UiEvent) -> Vec<Effect>;
}
