//! Dashboard command handler.
//!
//! Drives the same dispatch pipeline the screens use: both loads run as
//! background tasks and report back through the inbox, which is drained
//! here on the calling task.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use secondserve_app::{ApiCall, Dispatcher, TaskKind, TaskOutcome, UiEvent, inbox_channel};
use secondserve_core::ApiClient;
use secondserve_core::dto::{DashboardStatsDto, FoodRequestDto};

pub async fn show(api: ApiClient) -> Result<()> {
    let Some(hotel_id) = api.session().hotel_id() else {
        bail!("the dashboard is only available to hotel managers");
    };

    let (tx, mut rx) = inbox_channel();
    let mut dispatcher = Dispatcher::new(Arc::new(api), tx);
    dispatcher.dispatch_call(TaskKind::DashboardStats, ApiCall::LoadDashboardStats);
    dispatcher.dispatch_call(
        TaskKind::RequestsLoad,
        ApiCall::LoadPendingHotelRequests { hotel_id },
    );

    let mut stats: Option<DashboardStatsDto> = None;
    let mut pending: Option<Vec<FoodRequestDto>> = None;
    while stats.is_none() || pending.is_none() {
        let event = rx.recv().await.context("inbox closed")?;
        match event {
            UiEvent::TaskCompleted {
                outcome: TaskOutcome::DashboardStats(result),
                ..
            } => stats = Some(result?),
            UiEvent::TaskCompleted {
                outcome: TaskOutcome::FoodRequests(result),
                ..
            } => pending = Some(result?),
            _ => {}
        }
    }

    let stats = stats.unwrap_or_default();
    let pending = pending.unwrap_or_default();

    if let Some(code) = &stats.hotel_code {
        println!("Hotel code: {code}");
    }
    println!(
        "Logged this week:  {}",
        stats.total_logged_this_week.unwrap_or_default()
    );
    println!(
        "Donated this week: {}",
        stats.total_donated_this_week.unwrap_or_default()
    );

    println!();
    if pending.is_empty() {
        println!("No pending requests.");
        return Ok(());
    }
    println!("Pending requests:");
    for request in &pending {
        println!(
            "  #{:<6} {:24} {} {}  from {}",
            request.id.unwrap_or_default(),
            request.food_item_name.as_deref().unwrap_or("-"),
            request.requested_quantity.unwrap_or_default(),
            request.unit.as_deref().unwrap_or(""),
            request.ngo_name.as_deref().unwrap_or("unknown NGO"),
        );
    }
    Ok(())
}
