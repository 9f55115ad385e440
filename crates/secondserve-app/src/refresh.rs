//! Periodic refresh timers scoped to a screen's lifetime.
//!
//! A timer only emits [`UiEvent::RefreshTick`] into the inbox; the owning
//! screen's reducer decides whether to actually reload (it skips the tick
//! when the same load is still in flight). Stopping the timer cancels the
//! loop immediately, and dropping the handle has the same effect, so a
//! navigated-away screen cannot keep ticking in the background.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;
use crate::inbox::UiEventSender;
use crate::task::TaskKind;

#[derive(Debug)]
pub struct RefreshTimer {
    kind: TaskKind,
    cancel: CancellationToken,
}

impl RefreshTimer {
    /// Spawns the tick loop. The first tick fires after one full `interval`;
    /// the initial load is the screen's own responsibility.
    pub fn start(interval: Duration, kind: TaskKind, tx: UiEventSender) -> Self {
        let cancel = CancellationToken::new();
        let child = cancel.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            ticker.tick().await;
            loop {
                tokio::select! {
                    () = child.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.send(UiEvent::RefreshTick { kind }).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self { kind, cancel }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbox::inbox_channel;

    /// Ticks arrive on the inbox at the configured cadence.
    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_periodically() {
        let (tx, mut rx) = inbox_channel();
        let _timer = RefreshTimer::start(Duration::from_secs(30), TaskKind::RequestsLoad, tx);

        tokio::time::advance(Duration::from_secs(31)).await;
        match rx.recv().await.unwrap() {
            UiEvent::RefreshTick { kind } => assert_eq!(kind, TaskKind::RequestsLoad),
            other => panic!("expected RefreshTick, got {other:?}"),
        }

        tokio::time::advance(Duration::from_secs(30)).await;
        assert!(matches!(
            rx.recv().await.unwrap(),
            UiEvent::RefreshTick { .. }
        ));
    }

    /// No ticks are delivered after `stop`.
    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticks() {
        let (tx, mut rx) = inbox_channel();
        let timer = RefreshTimer::start(Duration::from_secs(30), TaskKind::DashboardStats, tx);

        timer.stop();
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(120)).await;
        assert!(rx.try_recv().is_err());
    }

    /// Dropping the handle cancels the loop like an explicit stop.
    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = inbox_channel();
        let timer = RefreshTimer::start(Duration::from_secs(30), TaskKind::DashboardStats, tx);
        drop(timer);

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(120)).await;
        assert!(rx.try_recv().is_err());
    }
}
