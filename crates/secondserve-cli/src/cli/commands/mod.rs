pub mod config;
pub mod dashboard;
pub mod food_items;
pub mod requests;
