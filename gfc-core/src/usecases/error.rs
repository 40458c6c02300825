use thiserror::Error;

use crate::{
    repositories,
    util::validate::{RegionInvalidation, ViewportInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid region identifier")]
    RegionId,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid geofence radius")]
    InvalidRadius,
    #[error("Duplicate geofence identifier")]
    DuplicateRegion,
    #[error("Unknown geofence identifier")]
    UnknownRegion,
    #[error("Invalid transition event type")]
    InvalidTransition,
    #[error("Invalid viewport")]
    InvalidViewport,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<gfc_entities::region::DuplicateRegionId> for Error {
    fn from(_: gfc_entities::region::DuplicateRegionId) -> Self {
        Self::DuplicateRegion
    }
}

impl From<RegionInvalidation> for Error {
    fn from(err: RegionInvalidation) -> Self {
        match err {
            RegionInvalidation::Id => Self::RegionId,
            RegionInvalidation::Position => Self::InvalidPosition,
            RegionInvalidation::Radius => Self::InvalidRadius,
        }
    }
}

impl From<ViewportInvalidation> for Error {
    fn from(_: ViewportInvalidation) -> Self {
        Self::InvalidViewport
    }
}
