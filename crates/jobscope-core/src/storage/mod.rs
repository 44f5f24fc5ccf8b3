mod company_store;
mod config;
mod profile_store;
mod task_file;

pub use company_store::{slugify, CompanyStore};
pub use config::{Config, EvaluationConfig};
pub use profile_store::ProfileStore;
pub use task_file::{load_task_file, parse_task_file};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the jobscope data directory, creating it if needed.
///
/// `JOBSCOPE_DATA_DIR` overrides the location entirely. Otherwise the
/// directory is `~/.config/jobscope[-dev]/`, with `JOBSCOPE_ENV=dev`
/// selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("JOBSCOPE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("JOBSCOPE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("jobscope-dev")
            } else {
                base_dir.join("jobscope")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
