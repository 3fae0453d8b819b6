//! Config command

use anyhow::Result;
use employee_utils::AppConfig;

pub fn handle(config: &AppConfig) -> Result<()> {
    println!("⚙️  Current Configuration:");
    println!("{}", config.to_json(config)?);

    Ok(())
}
