//! Build-time device configuration.
//!
//! Every value is baked in by `build.rs` from the environment or a local
//! `.env` file. Keys that are not provided fall back to the placeholders
//! below, which [`Config::validate`] rejects.

use crate::co2::Co2Thresholds;
use chrono_tz::Tz;
use std::fmt;
use thiserror::Error;

macro_rules! env_or {
    ($key:literal, $default:expr) => {
        match option_env!($key) {
            Some(value) => value,
            None => $default,
        }
    };
}

pub const WIFI_SSID_PLACEHOLDER: &str = "your_wifi_ssid";
pub const WIFI_PASSWORD_PLACEHOLDER: &str = "your_wifi_password";
pub const THINGSPEAK_API_KEY_PLACEHOLDER: &str = "your_api_key";
pub const TELEGRAM_TOKEN_PLACEHOLDER: &str = "your_bot_token";
pub const TELEGRAM_CHAT_ID_PLACEHOLDER: &str = "your_chat_id";

// Wi-Fi
pub const WIFI_SSID: &str = env_or!("WIFI_SSID", WIFI_SSID_PLACEHOLDER);
pub const WIFI_PASSWORD: &str = env_or!("WIFI_PASSWORD", WIFI_PASSWORD_PLACEHOLDER);

// ThingSpeak channel write key
pub const THINGSPEAK_API_KEY: &str =
    env_or!("THINGSPEAK_API_KEY", THINGSPEAK_API_KEY_PLACEHOLDER);

// Telegram bot
pub const TELEGRAM_TOKEN: &str = env_or!("TELEGRAM_TOKEN", TELEGRAM_TOKEN_PLACEHOLDER);
pub const TELEGRAM_CHAT_ID: &str = env_or!("TELEGRAM_CHAT_ID", TELEGRAM_CHAT_ID_PLACEHOLDER);

/// Green up to and including this reading.
pub const CO2_LOW_THRESHOLD_PPM: u32 = parse_ppm(env_or!("CO2_LOW_THRESHOLD", "800"));
/// Blue up to and including this reading, red above.
pub const CO2_MEDIUM_THRESHOLD_PPM: u32 = parse_ppm(env_or!("CO2_MEDIUM_THRESHOLD", "1200"));

pub const TIMEZONE: &str = env_or!("TIMEZONE", "UTC");
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

pub const CONFIG: Config = Config {
    wifi_ssid: WIFI_SSID,
    wifi_password: WIFI_PASSWORD,
    thingspeak_api_key: THINGSPEAK_API_KEY,
    telegram_token: TELEGRAM_TOKEN,
    telegram_chat_id: TELEGRAM_CHAT_ID,
    thresholds: Co2Thresholds::new(CO2_LOW_THRESHOLD_PPM, CO2_MEDIUM_THRESHOLD_PPM),
    timezone: TIMEZONE,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} is empty")]
    Empty { name: &'static str },

    #[error("{name} is still set to its placeholder value, set it in .env before flashing")]
    Placeholder { name: &'static str },

    #[error("{name} must be greater than zero")]
    NonPositiveThreshold { name: &'static str },

    #[error(
        "CO2_LOW_THRESHOLD ({low} ppm) must be below CO2_MEDIUM_THRESHOLD ({medium} ppm)"
    )]
    ThresholdOrder { low: u32, medium: u32 },

    #[error("TIMEZONE `{0}` is not a known IANA time zone")]
    UnknownTimezone(String),
}

/// All firmware settings in one place, as handed to the collaborators.
///
/// `Debug` hides the Wi-Fi password, the API key and the bot token so the
/// value can go straight into the log.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub wifi_ssid: &'static str,
    pub wifi_password: &'static str,
    pub thingspeak_api_key: &'static str,
    pub telegram_token: &'static str,
    pub telegram_chat_id: &'static str,
    pub thresholds: Co2Thresholds,
    pub timezone: &'static str,
}

impl Config {
    /// Fails on the first problem, in declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    /// Every problem with this configuration, in declaration order.
    pub fn problems(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();

        for (name, value, placeholder) in self.credentials() {
            if value.is_empty() {
                problems.push(ConfigError::Empty { name });
            } else if value == placeholder {
                problems.push(ConfigError::Placeholder { name });
            }
        }

        if let Err(e) = self.thresholds.validate() {
            problems.push(e);
        }

        if self.timezone.parse::<Tz>().is_err() {
            problems.push(ConfigError::UnknownTimezone(self.timezone.to_string()));
        }

        problems
    }

    fn credentials(&self) -> [(&'static str, &'static str, &'static str); 5] {
        [
            ("WIFI_SSID", self.wifi_ssid, WIFI_SSID_PLACEHOLDER),
            ("WIFI_PASSWORD", self.wifi_password, WIFI_PASSWORD_PLACEHOLDER),
            (
                "THINGSPEAK_API_KEY",
                self.thingspeak_api_key,
                THINGSPEAK_API_KEY_PLACEHOLDER,
            ),
            ("TELEGRAM_TOKEN", self.telegram_token, TELEGRAM_TOKEN_PLACEHOLDER),
            (
                "TELEGRAM_CHAT_ID",
                self.telegram_chat_id,
                TELEGRAM_CHAT_ID_PLACEHOLDER,
            ),
        ]
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &Redacted(self.wifi_password))
            .field("thingspeak_api_key", &Redacted(self.thingspeak_api_key))
            .field("telegram_token", &Redacted(self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("thresholds", &self.thresholds)
            .field("timezone", &self.timezone)
            .finish()
    }
}

struct Redacted<'a>(&'a str);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<empty>")
        } else {
            f.write_str("<redacted>")
        }
    }
}

/// Parses a threshold override at compile time; a bad value fails the build.
const fn parse_ppm(value: &str) -> u32 {
    match u32::from_str_radix(value, 10) {
        Ok(ppm) => ppm,
        Err(_) => panic!("CO2 thresholds must be decimal integers (ppm)"),
    }
}
