use std::{path::PathBuf, time::Duration};

use duration_str::deserialize_option_duration;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = include_str!("geofencer.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub store: Option<Store>,
    pub monitor: Option<Monitor>,
    pub gateway: Option<Gateway>,
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
    pub dir: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Config::default().store.expect("Store configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Monitor {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub poll_interval: Option<Duration>,
    pub notify_on: Option<Vec<String>>,
}

impl Default for Monitor {
    fn default() -> Self {
        Config::default().monitor.expect("Monitor configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub alert: Option<AlertGateway>,
    pub location: Option<LocationGateway>,
    pub fixed_position: Option<FixedPosition>,
    pub alert_to_json_file: Option<AlertToJsonFile>,
    pub track: Option<Track>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertGateway {
    Console,
    AlertToJsonFile,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationGateway {
    Fixed,
    Track,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FixedPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AlertToJsonFile {
    pub dir: PathBuf,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Track {
    pub positions: Vec<(f64, f64)>,
}
