use std::{path::PathBuf, time::Duration};

use duration_str::deserialize_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("nearspot.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub store: Option<Store>,
    pub moderation: Option<Moderation>,
    pub sweep: Option<Sweep>,
    pub geolocation: Option<Geolocation>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Store {
    pub snapshot: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Config::default().store.expect("Store configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Moderation {
    pub report_threshold: usize,
    #[serde(deserialize_with = "deserialize_duration")]
    pub report_window: Duration,
}

impl Default for Moderation {
    fn default() -> Self {
        Config::default()
            .moderation
            .expect("Moderation configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sweep {
    #[serde(deserialize_with = "deserialize_duration")]
    pub retention_period: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub task_interval_time: Duration,
}

impl Default for Sweep {
    fn default() -> Self {
        Config::default().sweep.expect("Sweep configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub default_position: Option<String>,
}
