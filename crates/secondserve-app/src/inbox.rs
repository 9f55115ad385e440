//! Inbox channel between background tasks and the UI-owning loop.
//!
//! Background handlers only ever send; the UI loop owns the receiver and
//! drains it between renders. Because the channel is FIFO, the UI updates
//! triggered by one operation are applied in the order they were sent.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Creates the inbox pair. The sender side is cheap to clone into every
/// spawned task.
pub fn inbox_channel() -> (UiEventSender, UiEventReceiver) {
    mpsc::unbounded_channel()
}
