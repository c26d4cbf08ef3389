use crate::co2::{Co2Band, Co2Thresholds};
use crate::config::{Config, ConfigError};
use crate::time_utils::{get_formatted_timestamp, get_uptime_string};
use log::{error, info, warn};

const SPLASH_SCREEN: &str = r#"
   ____ ___ ____
  / ___/ _ \___ \      _ __ ___
 | |  | | | |__) |____| '__/ __|
 | |__| |_| / __/_____| |  \__ \
  \____\___/_____|    |_|  |___/"#;

pub enum LogLevel {
    Info,
    Warn,
    Error,
}

pub fn print_splash_screen() {
    info!("{}", SPLASH_SCREEN);
}

/// Logs the active configuration with secrets redacted.
pub fn log_config_summary(config: &Config) {
    log_message(LogLevel::Info, &format!("⚙️ {:?}", config));
}

pub fn log_band_table(thresholds: &Co2Thresholds) {
    for band in Co2Band::ALL {
        let range = match band {
            Co2Band::Low => format!("≤ {} ppm", thresholds.low_ppm),
            Co2Band::Medium => format!(
                "{} < CO2 ≤ {} ppm",
                thresholds.low_ppm, thresholds.medium_ppm
            ),
            Co2Band::High => format!("> {} ppm", thresholds.medium_ppm),
        };
        log_band(band, &range);
    }
}

pub fn log_config_problem(problem: &ConfigError) {
    log_message(LogLevel::Error, &format!("🚫 {}", problem));
}

pub fn log_config_ok() {
    log_message(LogLevel::Info, "✅ Configuration is valid, ready to flash");
}

pub fn log_message(level: LogLevel, message: &str) {
    let prefix = format!("{} [{}]", get_uptime_string(), get_formatted_timestamp());

    match level {
        LogLevel::Error => error!("\x1b[31m{} {}\x1b[0m", prefix, message),
        LogLevel::Warn => warn!("\x1b[38;5;11m{} {}\x1b[0m", prefix, message),
        LogLevel::Info => info!("\x1b[38;5;40m{} {}\x1b[0m", prefix, message),
    }
}

fn log_band(band: Co2Band, range: &str) {
    let color = band.indicator();
    let prefix = format!("{} [{}]", get_uptime_string(), get_formatted_timestamp());

    info!(
        "{}{} 💡 {:<6} {:<22} -> {:?}\x1b[0m",
        color.ansi(),
        prefix,
        band,
        range,
        color
    );
}
