use gfc_core::{
    entities::*,
    gateways::location::{LocationError, LocationGateway},
};

/// Constant-position location source with all permissions granted.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    position: MapPoint,
}

impl FixedPosition {
    pub fn new(position: MapPoint) -> Self {
        Self { position }
    }
}

impl LocationGateway for FixedPosition {
    fn permission_state(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn request_permission(&self, _tier: PermissionTier) -> PermissionState {
        PermissionState::Granted
    }

    fn current_position(&self) -> Result<MapPoint, LocationError> {
        Ok(self.position)
    }
}
