use clap::Parser;
use serde::Deserialize;
use snafu::{ResultExt, ensure};
use std::fs;
use std::path::PathBuf;

use crate::Result;
use crate::error::{ConfigFileSnafu, ConfigParseSnafu, ConfigSnafu};

pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub frontend_dir: PathBuf,

    /// Strapi base URL, without the `/api` prefix
    pub strapi_url: String,

    /// Fallback API token when the browser has not stored one
    pub strapi_token: Option<String>,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    pub ga_tag_id: Option<String>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Config {
    pub fn build(filename: &PathBuf) -> Result<Config> {
        let toml_string = fs::read_to_string(filename).context(ConfigFileSnafu)?;
        let config = Self::parse(toml_string.as_str())?;

        ensure!(
            config.frontend_dir.exists(),
            ConfigSnafu {
                msg: "Frontend directory does not exist.".to_string()
            }
        );

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Config> {
        let mut config: Config = toml::from_str(contents).context(ConfigParseSnafu)?;

        // Validate config values
        ensure!(
            config.port > 0,
            ConfigSnafu {
                msg: "Server port is required.".to_string()
            }
        );
        ensure!(
            config.strapi_url.len() > 0,
            ConfigSnafu {
                msg: "Strapi URL is required.".to_string()
            }
        );
        ensure!(
            config.strapi_url.starts_with("http://") || config.strapi_url.starts_with("https://"),
            ConfigSnafu {
                msg: "Strapi URL must start with http:// or https://".to_string()
            }
        );
        ensure!(
            config.page_size > 0 && config.page_size <= DEFAULT_PAGE_SIZE,
            ConfigSnafu {
                msg: "Page size must be between 1 and 100.".to_string()
            }
        );

        config.strapi_url = config.strapi_url.trim_end_matches('/').to_string();
        if let Some(token) = &config.strapi_token {
            if token.trim().is_empty() {
                config.strapi_token = None;
            }
        }

        Ok(config)
    }
}

/// passdeck-website Search your stored passwords
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, value_name = "config.toml")]
    pub config: PathBuf,
}
