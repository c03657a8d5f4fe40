use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};

use nearspot_core::{entities::MapPoint, usecases::ModerationPolicy};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "nearspot.toml";

const ENV_NAME_SNAPSHOT: &str = "NEARSPOT_SNAPSHOT";

pub struct Config {
    pub store: Store,
    pub moderation: ModerationPolicy,
    pub sweep: Sweep,
    pub geolocation: Geolocation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(snapshot) = env::var(ENV_NAME_SNAPSHOT) {
            cfg.store.snapshot = snapshot.into();
        }
        Ok(cfg)
    }
}

pub struct Store {
    /// JSON snapshot file backing the in-memory store.
    pub snapshot: PathBuf,
}

pub struct Sweep {
    pub retention_period: time::Duration,
    pub task_interval_time: std::time::Duration,
}

pub struct Geolocation {
    pub default_position: Option<MapPoint>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            store,
            moderation,
            sweep,
            geolocation,
        } = from;

        let raw::Store { snapshot } = store.unwrap_or_default();
        let store = Store { snapshot };

        let raw::Moderation {
            report_threshold,
            report_window,
        } = moderation.unwrap_or_default();
        if report_threshold == 0 {
            return Err(anyhow!("Report threshold must be positive"));
        }
        let moderation = ModerationPolicy {
            report_threshold,
            report_window: report_window.try_into()?,
        };

        let raw::Sweep {
            retention_period,
            task_interval_time,
        } = sweep.unwrap_or_default();
        let sweep = Sweep {
            retention_period: retention_period.try_into()?,
            task_interval_time,
        };

        let default_position = geolocation
            .and_then(|g| g.default_position)
            .map(|pos| {
                pos.parse::<MapPoint>()
                    .map_err(|err| anyhow!("Invalid default position: {err}"))
            })
            .transpose()?;
        let geolocation = Geolocation { default_position };

        Ok(Self {
            store,
            moderation,
            sweep,
            geolocation,
        })
    }
}
