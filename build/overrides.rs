//! Decides which configuration values `build.rs` hands to `rustc`.
//!
//! Kept free of `cargo:` output so it can be exercised from `tests/`.

use std::error::Error;
use std::path::{Path, PathBuf};

/// Keys the firmware reads with `option_env!` in `src/config.rs`.
pub const CONFIG_KEYS: [&str; 8] = [
    "WIFI_SSID",
    "WIFI_PASSWORD",
    "THINGSPEAK_API_KEY",
    "TELEGRAM_TOKEN",
    "TELEGRAM_CHAT_ID",
    "CO2_LOW_THRESHOLD",
    "CO2_MEDIUM_THRESHOLD",
    "TIMEZONE",
];

#[derive(Debug, PartialEq, Eq)]
pub struct Override {
    pub key: String,
    pub value: String,
    /// `false` for keys the firmware never reads.
    pub known: bool,
}

/// The only `.env` the build looks at; parent directories are never searched.
pub fn dotenv_path(manifest_dir: &Path) -> PathBuf {
    manifest_dir.join(".env")
}

/// Reads `KEY=VALUE` pairs from `path`. A missing file yields no pairs.
pub fn read_dotenv(path: &Path) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    if !path.is_file() {
        return Ok(Vec::new());
    }

    let mut pairs = Vec::new();
    for item in dotenvy::from_path_iter(path)? {
        pairs.push(item?);
    }
    Ok(pairs)
}

/// Drops keys already set in the build environment, so they win over `.env`.
///
/// Multi-line values are rejected: `cargo:rustc-env` keeps only the first line.
pub fn overrides(
    pairs: Vec<(String, String)>,
    is_set: impl Fn(&str) -> bool,
) -> Result<Vec<Override>, Box<dyn Error>> {
    let mut forwarded = Vec::new();

    for (key, value) in pairs {
        if is_set(&key) {
            continue;
        }

        if value.contains('\n') || value.contains('\r') {
            return Err(format!(".env value for `{}` spans several lines", key).into());
        }

        let known = CONFIG_KEYS.contains(&key.as_str());
        forwarded.push(Override { key, value, known });
    }

    Ok(forwarded)
}
