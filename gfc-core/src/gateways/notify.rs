use crate::entities::*;

/// Surfaces geofence transitions to the user and to the log.
///
/// Fire-and-forget: implementations must not block the caller and
/// must not let internal failures escape past this boundary. They
/// tolerate being invoked after logical shutdown.
pub trait NotificationGateway {
    fn notify(&self, event: &TransitionEvent);
}
