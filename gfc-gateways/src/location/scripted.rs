use std::{
    collections::VecDeque,
    sync::Mutex,
};

use gfc_core::{
    entities::*,
    gateways::location::{LocationError, LocationGateway},
};

/// Location source replaying a fixed track, for local runs and
/// tests.
///
/// The permission prompt outcome is part of the script: the state
/// starts as `NotDetermined` and `request_permission` resolves it to
/// the configured grant. An exhausted track reports
/// `PositionUnavailable`.
#[derive(Debug)]
pub struct ScriptedTrack {
    grant: PermissionState,
    state: Mutex<PermissionState>,
    track: Mutex<VecDeque<MapPoint>>,
}

impl ScriptedTrack {
    pub fn new(track: Vec<MapPoint>, grant: PermissionState) -> Self {
        Self {
            grant,
            state: Mutex::new(PermissionState::NotDetermined),
            track: Mutex::new(track.into()),
        }
    }

    pub fn granted(track: Vec<MapPoint>) -> Self {
        Self::new(track, PermissionState::Granted)
    }
}

impl LocationGateway for ScriptedTrack {
    fn permission_state(&self) -> PermissionState {
        *self.state.lock().unwrap()
    }

    fn request_permission(&self, _tier: PermissionTier) -> PermissionState {
        let mut state = self.state.lock().unwrap();
        if !state.is_determined() {
            *state = self.grant;
        }
        *state
    }

    fn current_position(&self) -> Result<MapPoint, LocationError> {
        if !self.permission_state().allows(PermissionTier::Foreground) {
            return Err(LocationError::PermissionDenied);
        }
        self.track
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LocationError::PositionUnavailable)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn replays_track_in_order_until_exhausted() {
        let p1 = MapPoint::from_lat_lng_deg(14.5995, 120.9842);
        let p2 = MapPoint::from_lat_lng_deg(14.6005, 120.9842);
        let gw = ScriptedTrack::granted(vec![p1, p2]);
        gw.request_permission(PermissionTier::Foreground);

        assert_eq!(gw.current_position(), Ok(p1));
        assert_eq!(gw.current_position(), Ok(p2));
        assert_eq!(
            gw.current_position(),
            Err(LocationError::PositionUnavailable)
        );
    }

    #[test]
    fn undetermined_permission_denies_position_fixes() {
        let gw = ScriptedTrack::granted(vec![MapPoint::from_lat_lng_deg(0.0, 0.0)]);
        assert_eq!(gw.current_position(), Err(LocationError::PermissionDenied));
    }

    #[test]
    fn denied_permission_sticks() {
        let gw = ScriptedTrack::new(
            vec![MapPoint::from_lat_lng_deg(0.0, 0.0)],
            PermissionState::Denied,
        );
        assert_eq!(
            gw.request_permission(PermissionTier::Background),
            PermissionState::Denied
        );
        // Once determined, asking again does not prompt anew.
        assert_eq!(
            gw.request_permission(PermissionTier::Background),
            PermissionState::Denied
        );
        assert_eq!(gw.current_position(), Err(LocationError::PermissionDenied));
    }

    #[test]
    fn foreground_only_grant_denies_background_monitoring() {
        let gw = ScriptedTrack::new(
            vec![MapPoint::from_lat_lng_deg(0.0, 0.0)],
            PermissionState::ForegroundOnly,
        );
        let state = gw.request_permission(PermissionTier::Background);
        assert!(state.allows(PermissionTier::Foreground));
        assert!(!state.allows(PermissionTier::Background));
        assert!(gw.current_position().is_ok());
    }
}
