use std::{
    collections::HashSet,
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Result};
use gfc_core::entities::TransitionKind;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geofencer.toml";

const ENV_NAME_STORE_DIR: &str = "GEOFENCER_STORE_DIR";

pub struct Config {
    pub store: Store,
    pub monitor: Monitor,
    pub gateway: Gateway,
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
        if let Ok(dir) = env::var(ENV_NAME_STORE_DIR) {
            cfg.store.dir = dir.into();
        }
        Ok(cfg)
    }
}

pub struct Store {
    /// File system directory for the cached map viewport.
    pub dir: PathBuf,
}

pub struct Monitor {
    pub poll_interval: Duration,
    pub notify_on: HashSet<TransitionKind>,
}

pub struct Gateway {
    pub alert: AlertGateway,
    pub location: LocationGateway,
}

pub enum AlertGateway {
    Console,
    /// For local testing purposes
    AlertToJsonFile {
        /// File system directory for writing alerts into JSON files.
        dir: PathBuf,
    },
}

pub enum LocationGateway {
    Fixed { latitude: f64, longitude: f64 },
    Track { positions: Vec<(f64, f64)> },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            store,
            monitor,
            gateway,
        } = from;

        let raw::Store { dir } = store.unwrap_or_default();
        let store = Store { dir };

        let raw::Monitor {
            poll_interval,
            notify_on,
        } = monitor.unwrap_or_default();
        let poll_interval = match poll_interval {
            Some(poll_interval) => poll_interval,
            None => raw::Monitor::default()
                .poll_interval
                .expect("Default poll interval"),
        };
        let notify_on = notify_on
            .unwrap_or_else(|| {
                raw::Monitor::default()
                    .notify_on
                    .expect("Default notification kinds")
            })
            .iter()
            .map(|s| {
                s.parse()
                    .map_err(|_| anyhow!("Invalid transition kind: {s}"))
            })
            .collect::<Result<_>>()?;
        let monitor = Monitor {
            poll_interval,
            notify_on,
        };

        let raw::Gateway {
            alert,
            location,
            fixed_position,
            alert_to_json_file,
            track,
        } = gateway.unwrap_or_default();
        let alert = match alert.unwrap_or(raw::AlertGateway::Console) {
            raw::AlertGateway::Console => AlertGateway::Console,
            raw::AlertGateway::AlertToJsonFile => {
                let raw::AlertToJsonFile { dir } = alert_to_json_file
                    .ok_or_else(|| anyhow!("Missing alert-to-json-file gateway configuration"))?;
                AlertGateway::AlertToJsonFile { dir }
            }
        };
        let location = match location.unwrap_or(raw::LocationGateway::Fixed) {
            raw::LocationGateway::Fixed => {
                let raw::FixedPosition {
                    latitude,
                    longitude,
                } = fixed_position
                    .ok_or_else(|| anyhow!("Missing fixed-position gateway configuration"))?;
                LocationGateway::Fixed {
                    latitude,
                    longitude,
                }
            }
            raw::LocationGateway::Track => {
                let raw::Track { positions } =
                    track.ok_or_else(|| anyhow!("Missing track gateway configuration"))?;
                LocationGateway::Track { positions }
            }
        };
        let gateway = Gateway { alert, location };

        Ok(Self {
            store,
            monitor,
            gateway,
        })
    }
}
