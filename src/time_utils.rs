use crate::config::{TIMESTAMP_PATTERN, TIMEZONE};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::OnceLock;
use std::time::Duration;

pub(crate) fn get_uptime_string() -> String {
    format_uptime(uptime())
}

pub(crate) fn get_formatted_timestamp() -> String {
    let now = get_current_time_in_timezone();
    now.format(TIMESTAMP_PATTERN).to_string()
}

fn format_uptime(uptime: Duration) -> String {
    format!("[{:>4}.{:03}s]", uptime.as_secs(), uptime.subsec_millis())
}

#[cfg(target_os = "espidf")]
fn uptime() -> Duration {
    let micros = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
    Duration::from_micros(micros.max(0) as u64)
}

#[cfg(not(target_os = "espidf"))]
fn uptime() -> Duration {
    static BOOT: OnceLock<std::time::Instant> = OnceLock::new();
    BOOT.get_or_init(std::time::Instant::now).elapsed()
}

fn get_current_time_in_timezone() -> DateTime<Tz> {
    Utc::now().with_timezone(cached_timezone())
}

fn cached_timezone() -> &'static Tz {
    static TZ: OnceLock<Tz> = OnceLock::new();
    TZ.get_or_init(|| TIMEZONE.parse().unwrap_or(chrono_tz::UTC))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_pads_seconds() {
        assert_eq!(format_uptime(Duration::from_millis(3_042)), "[   3.042s]");
        assert_eq!(format_uptime(Duration::from_millis(12_345_600)), "[12345.600s]");
    }

    #[test]
    fn test_formatted_timestamp_matches_pattern() {
        let ts = get_formatted_timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_PATTERN).is_ok());
    }
}
