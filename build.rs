use embuild::espidf;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

#[path = "build/overrides.rs"]
mod overrides;

use overrides::CONFIG_KEYS;

fn main() -> Result<(), Box<dyn Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    load_dotenv_variables(&manifest_dir)?;

    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        espidf::sysenv::output();
    }

    Ok(())
}

/// Bakes the device configuration into the binary at compile time.
///
/// The sensor has no file system to read `.env` from at runtime, so every
/// `KEY=VALUE` pair found in the `.env` next to `Cargo.toml` is forwarded to
/// `rustc` as `cargo:rustc-env=KEY=VALUE`, where `option_env!` in `config.rs`
/// picks it up. A key already exported in the build environment takes
/// precedence over the `.env` entry, which lets CI inject secrets without a file.
///
/// Keys that are set nowhere fall back to the placeholder values in
/// `config.rs`, and the preflight check refuses to start with them.
///
/// # Security Note
/// This method hard-codes secrets into the firmware image. For commercial products,
/// consider using ESP-IDF's **NVS (Non-Volatile Storage)** or **Wi-Fi Provisioning**
/// to allow users to set credentials without re-flashing.
fn load_dotenv_variables(manifest_dir: &Path) -> Result<(), Box<dyn Error>> {
    let path = overrides::dotenv_path(manifest_dir);

    println!("cargo:rerun-if-changed={}", path.display());
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let pairs = overrides::read_dotenv(&path)?;

    for item in overrides::overrides(pairs, |key| env::var_os(key).is_some())? {
        if !item.known {
            println!("cargo:warning=.env key `{}` is not used by the firmware", item.key);
        }

        println!("cargo:rustc-env={}={}", item.key, item.value);
    }

    Ok(())
}
