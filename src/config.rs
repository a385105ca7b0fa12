use crate::error::AppError;
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub output_directory: PathBuf,
    pub log_level: String,
    pub dedup: bool,
}

impl AppConfig {
    /// Defaults, then `config/default` if present, then `explicit` if given.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = Config::builder()
            .set_default("output_directory", ".")?
            .set_default("log_level", "info")?
            .set_default("dedup", false)?
            .add_source(File::with_name("config/default").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
