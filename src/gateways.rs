use std::io;

use gfc_core::{
    entities::*,
    gateways::location::{LocationError, LocationGateway},
};
use gfc_gateways::{
    alert::{AlertToJsonFile, ConsoleAlert},
    location::{FixedPosition, ScriptedTrack},
    notify::Notify,
    viewport_store::JsonFileViewportStore,
};

use crate::config;

pub fn notification_gateway(gateway: &config::Gateway, monitor: &config::Monitor) -> Notify {
    let notify_on = monitor.notify_on.clone();
    match &gateway.alert {
        config::AlertGateway::Console => Notify::new(ConsoleAlert, notify_on),
        config::AlertGateway::AlertToJsonFile { dir } => match AlertToJsonFile::try_new(dir) {
            Ok(gw) => {
                log::info!("Writing alerts to JSON files in {}", gw.path().display());
                Notify::new(gw, notify_on)
            }
            Err(err) => {
                log::warn!(
                    "Unable to set up the JSON file alert gateway: {err}: use the terminal as fallback"
                );
                Notify::new(ConsoleAlert, notify_on)
            }
        },
    }
}

pub fn location_gateway(gateway: &config::Gateway) -> LocationGw {
    match &gateway.location {
        config::LocationGateway::Fixed {
            latitude,
            longitude,
        } => match MapPoint::try_from_lat_lng_deg(*latitude, *longitude) {
            Some(position) => {
                log::info!("Use fixed position {position}");
                LocationGw::new(FixedPosition::new(position))
            }
            None => {
                log::warn!("Invalid fixed position configured: position fixes will fail");
                LocationGw::new(UnavailableGw)
            }
        },
        config::LocationGateway::Track { positions } => {
            let track: Vec<_> = positions
                .iter()
                .filter_map(|&(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng))
                .collect();
            if track.len() < positions.len() {
                log::warn!("Ignoring track positions with out-of-range coordinates");
            }
            log::info!("Use scripted track with {} positions", track.len());
            LocationGw::new(ScriptedTrack::granted(track))
        }
    }
}

pub fn viewport_repo(store: &config::Store) -> io::Result<JsonFileViewportStore> {
    JsonFileViewportStore::try_new(&store.dir)
}

struct UnavailableGw;

impl LocationGateway for UnavailableGw {
    fn permission_state(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn request_permission(&self, _tier: PermissionTier) -> PermissionState {
        PermissionState::Granted
    }

    fn current_position(&self) -> Result<MapPoint, LocationError> {
        Err(LocationError::PositionUnavailable)
    }
}

pub struct LocationGw(Box<dyn LocationGateway + Send + Sync + 'static>);

impl LocationGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: LocationGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl LocationGateway for LocationGw {
    fn permission_state(&self) -> PermissionState {
        self.0.permission_state()
    }

    fn request_permission(&self, tier: PermissionTier) -> PermissionState {
        self.0.request_permission(tier)
    }

    fn current_position(&self) -> Result<MapPoint, LocationError> {
        self.0.current_position()
    }
}
