//! Config command handlers.

use anyhow::{Context, Result};
use secondserve_core::config::{self, Config};

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn show() -> Result<()> {
    let config = Config::load().context("load config")?;
    println!("base_url = {}", config.resolve_base_url()?);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!("refresh_interval_secs = {}", config.refresh_interval_secs);
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    let config_path = config::paths::config_path();
    Config::save_base_url_to(&config_path, url)
        .with_context(|| format!("save base_url to {}", config_path.display()))?;
    println!("Set base_url to {url}");
    Ok(())
}
