use anyhow::Context;
use co2_rs::CONFIG;
use co2_rs::logging::{
    LogLevel, log_band_table, log_config_ok, log_config_problem, log_config_summary,
    log_message, print_splash_screen,
};

/// Preflight check for the baked-in configuration.
///
/// Run it (or flash it) before the rest of the firmware: it refuses to pass
/// while any credential is still a placeholder or the thresholds are out of order.
fn main() -> anyhow::Result<()> {
    init_logger();
    print_splash_screen();

    log_config_summary(&CONFIG);
    log_band_table(&CONFIG.thresholds);

    let problems = CONFIG.problems();
    if !problems.is_empty() {
        log_message(
            LogLevel::Warn,
            &format!("‼️ {} configuration problem(s) found", problems.len()),
        );
        for problem in &problems {
            log_config_problem(problem);
        }
    }

    CONFIG
        .validate()
        .context("Invalid device configuration, fix .env and rebuild")?;

    log_config_ok();
    Ok(())
}

#[cfg(target_os = "espidf")]
fn init_logger() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
}

#[cfg(not(target_os = "espidf"))]
fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // log_message already prefixes uptime and timestamp, as on the device.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}
