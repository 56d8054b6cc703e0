mod config;
mod session_store;

pub use config::{Config, DrawConfig, TimerConfig};
pub use session_store::SessionStore;

use std::path::PathBuf;

/// Returns the OpoSim data directory, creating it if needed.
///
/// `OPOSIM_DATA_DIR` wins when set. Otherwise `~/.config/oposim[-dev]/`,
/// with the `-dev` suffix selected by `OPOSIM_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("OPOSIM_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("OPOSIM_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("oposim-dev")
            } else {
                base_dir.join("oposim")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
