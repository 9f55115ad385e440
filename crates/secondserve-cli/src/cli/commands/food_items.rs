//! Food item command handlers.

use anyhow::{Result, bail};
use secondserve_core::ApiClient;
use secondserve_core::api::parse_quantity;
use secondserve_core::dto::{FoodCondition, FoodItemDto};

pub async fn list(api: &ApiClient, pending: bool) -> Result<()> {
    let Some(hotel_id) = api.session().hotel_id() else {
        bail!("food item listings are only available to hotel managers");
    };

    let items = if pending {
        api.pending_food_items(hotel_id).await?
    } else {
        api.food_items_for_hotel(hotel_id).await?
    };

    if items.is_empty() {
        println!("No food items.");
        return Ok(());
    }
    for item in &items {
        println!(
            "  #{:<6} {:24} {} {}  expires {}",
            item.id.unwrap_or_default(),
            item.food_name.as_deref().unwrap_or("-"),
            item.quantity.unwrap_or_default(),
            item.unit.as_deref().unwrap_or(""),
            item.expiry_date
                .map_or_else(|| "-".to_string(), |d| d.to_string()),
        );
    }
    Ok(())
}

pub async fn log(
    api: &ApiClient,
    name: &str,
    quantity: &str,
    unit: &str,
    condition: FoodCondition,
    category: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let quantity = parse_quantity(quantity)?;
    let today = chrono::Local::now().date_naive();

    let item = FoodItemDto {
        food_name: Some(name.to_string()),
        quantity: Some(quantity),
        unit: Some(unit.to_string()),
        condition: Some(condition.as_str().to_string()),
        category,
        description,
        expiry_date: Some(condition.expiry_after(today)),
        ..FoodItemDto::default()
    };

    let created = api.log_food_item(&item).await?;
    println!(
        "Logged food item #{} (expires {})",
        created.id.unwrap_or_default(),
        created
            .expiry_date
            .or(item.expiry_date)
            .map_or_else(|| "-".to_string(), |d| d.to_string()),
    );
    Ok(())
}
