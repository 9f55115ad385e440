//! Donation request command handlers.

use anyhow::{Result, bail};
use secondserve_core::{ApiClient, Session, UserRole};

pub async fn list(api: &ApiClient, session: &Session, pending: bool) -> Result<()> {
    let requests = match session.role {
        UserRole::HotelManager => {
            if pending {
                api.pending_hotel_food_requests(session.user_id).await?
            } else {
                api.hotel_food_requests(session.user_id).await?
            }
        }
        UserRole::Ngo => api.ngo_food_requests(session.user_id).await?,
        UserRole::KitchenStaff => {
            bail!("request listings are only available to hotel managers and NGOs")
        }
    };

    if requests.is_empty() {
        println!("No requests.");
        return Ok(());
    }
    for request in &requests {
        println!(
            "  #{:<6} {:24} {} {}  [{}]",
            request.id.unwrap_or_default(),
            request.food_item_name.as_deref().unwrap_or("-"),
            request.requested_quantity.unwrap_or_default(),
            request.unit.as_deref().unwrap_or(""),
            request.request_status.as_deref().unwrap_or("UNKNOWN"),
        );
    }
    Ok(())
}

pub async fn approve(api: &ApiClient, id: i64) -> Result<()> {
    api.approve_food_request(id).await?;
    println!("Request #{id} approved");
    Ok(())
}

pub async fn reject(api: &ApiClient, id: i64) -> Result<()> {
    api.reject_food_request(id).await?;
    println!("Request #{id} rejected");
    Ok(())
}

pub async fn complete(api: &ApiClient, id: i64) -> Result<()> {
    api.complete_food_request(id).await?;
    println!("Request #{id} completed");
    Ok(())
}
