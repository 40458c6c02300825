use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Current position unavailable")]
    PositionUnavailable,
}

/// Access to the platform location service.
pub trait LocationGateway {
    /// The current permission state. The state can regress between
    /// calls when the user revokes access.
    fn permission_state(&self) -> PermissionState;

    /// Ask the user for access to the given tier and return the
    /// resulting state. Once determined, repeated requests do not
    /// prompt again.
    fn request_permission(&self, tier: PermissionTier) -> PermissionState;

    /// One-shot position fix. The permission is re-checked on every
    /// call.
    fn current_position(&self) -> Result<MapPoint, LocationError>;
}
