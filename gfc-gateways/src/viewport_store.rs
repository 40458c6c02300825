use std::{io, path::Path};

use jfs::Store;
use serde::{Deserialize, Serialize};

use gfc_core::{
    entities::*,
    repositories::{self, ViewportRepo},
};

const LAST_VIEWPORT_ID: &str = "last-viewport";

/// Single-slot viewport cache backed by a JSON file store.
pub struct JsonFileViewportStore {
    json_store: Store,
}

impl JsonFileViewportStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
struct JsonViewport {
    latitude: f64,
    longitude: f64,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl From<&Viewport> for JsonViewport {
    fn from(from: &Viewport) -> Self {
        let (latitude, longitude) = from.center.to_lat_lng_deg();
        Self {
            latitude,
            longitude,
            latitude_delta: from.span.lat_delta_deg,
            longitude_delta: from.span.lng_delta_deg,
        }
    }
}

impl TryFrom<JsonViewport> for Viewport {
    type Error = repositories::Error;
    fn try_from(from: JsonViewport) -> Result<Self, Self::Error> {
        let JsonViewport {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        } = from;
        let center = MapPoint::try_from_lat_lng_deg(latitude, longitude)
            .ok_or_else(|| anyhow::anyhow!("Invalid coordinates: {latitude},{longitude}"))?;
        Ok(Self {
            center,
            span: MapSpan {
                lat_delta_deg: latitude_delta,
                lng_delta_deg: longitude_delta,
            },
        })
    }
}

impl ViewportRepo for JsonFileViewportStore {
    fn save_last_viewport(&self, viewport: &Viewport) -> repositories::Result<()> {
        let json = JsonViewport::from(viewport);
        self.json_store.save_with_id(&json, LAST_VIEWPORT_ID)?;
        Ok(())
    }

    fn load_last_viewport(&self) -> repositories::Result<Viewport> {
        let json: JsonViewport = match self.json_store.get(LAST_VIEWPORT_ID) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(repositories::Error::NotFound);
            }
            Err(err) => return Err(err.into()),
        };
        json.try_into()
    }
}
