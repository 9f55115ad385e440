//! UI-side pipeline for SecondServe screens.
//!
//! The shape is an Elm-style loop: controllers are pure reducers that
//! consume [`events::UiEvent`]s and return [`effects::Effect`]s; the
//! runtime executes effects, and background work reports back through the
//! inbox channel, which is drained only on the UI-owning task. That channel
//! is the single bridge between network completions and view state.

pub mod controllers;
pub mod dispatch;
pub mod effects;
pub mod events;
pub mod inbox;
pub mod refresh;
pub mod task;

pub use controllers::Controller;
pub use dispatch::Dispatcher;
pub use effects::{ApiCall, Effect, Route};
pub use events::{TaskOutcome, UiEvent};
pub use inbox::{UiEventReceiver, UiEventSender, inbox_channel};
pub use refresh::RefreshTimer;
pub use task::{TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
