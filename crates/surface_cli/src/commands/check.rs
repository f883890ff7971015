//! Check command implementation
//!
//! Loads the engine configuration from the environment, validates it and
//! reports the effective settings.

use anyhow::Context;

use surface_engine::EngineConfig;

/// Run the check command
pub fn run() -> anyhow::Result<()> {
    let config = EngineConfig::from_env().context("loading engine configuration")?;

    println!("optsurface configuration");
    println!("  cache capacity : {} tensors", config.cache_capacity);
    println!(
        "  threads        : {}{}",
        config.effective_threads(),
        if config.threads.is_some() {
            " (dedicated pool)"
        } else {
            " (global pool)"
        }
    );
    println!("  grid resolution: {} steps per axis", config.grid_resolution);

    Ok(())
}
