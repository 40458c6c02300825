use std::{collections::HashSet, sync::Arc};

use gfc_core::{
    entities::*,
    gateways::{alert::AlertGateway, notify::NotificationGateway},
};

use crate::user_communication;

#[derive(Clone)]
pub struct Notify {
    alert_gw: Arc<dyn AlertGateway + Send + Sync + 'static>,
    notify_on: HashSet<TransitionKind>,
}

impl Notify {
    pub fn new<G>(gw: G, notify_on: HashSet<TransitionKind>) -> Self
    where
        G: AlertGateway + Send + Sync + 'static,
    {
        Self {
            alert_gw: Arc::new(gw),
            notify_on,
        }
    }

    fn skip(&self, ev: &TransitionEvent) -> bool {
        !self.notify_on.contains(&ev.kind)
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: &TransitionEvent) {
        if self.skip(event) {
            log::debug!(
                "Skipping {} notification for geofence {}",
                event.kind,
                event.region
            );
            return;
        }
        match event.kind {
            TransitionKind::Enter => {
                log::info!("Entered geofence {} at {}", event.region, event.observed_at);
            }
            TransitionKind::Exit => {
                log::info!("Exited geofence {} at {}", event.region, event.observed_at);
            }
        }
        let content = user_communication::transition_alert(event);
        self.alert_gw.show_alert(&content);
    }
}

#[cfg(test)]
mod tests {

    use std::sync::Mutex;

    use super::*;

    #[derive(Default, Clone)]
    struct CollectingAlertGw {
        alerts: Arc<Mutex<Vec<AlertContent>>>,
    }

    impl AlertGateway for CollectingAlertGw {
        fn show_alert(&self, content: &AlertContent) {
            self.alerts.lock().unwrap().push(content.clone());
        }
    }

    fn event(kind: TransitionKind) -> TransitionEvent {
        TransitionEvent {
            region: "Location 1".into(),
            kind,
            observed_at: Timestamp::from_millis(1_700_000_000_000),
        }
    }

    #[test]
    fn notify_renders_alert_for_enabled_kinds() {
        let alert_gw = CollectingAlertGw::default();
        let notify = Notify::new(
            alert_gw.clone(),
            [TransitionKind::Enter, TransitionKind::Exit].into(),
        );

        notify.notify(&event(TransitionKind::Enter));
        notify.notify(&event(TransitionKind::Exit));

        let alerts = alert_gw.alerts.lock().unwrap();
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].body.contains("Location 1"));
    }

    #[test]
    fn notify_skips_disabled_kinds() {
        let alert_gw = CollectingAlertGw::default();
        let notify = Notify::new(alert_gw.clone(), [TransitionKind::Enter].into());

        notify.notify(&event(TransitionKind::Exit));

        assert!(alert_gw.alerts.lock().unwrap().is_empty());
    }

    #[test]
    fn notify_tolerates_invocation_after_shutdown() {
        // Cancellation is best-effort: a final in-flight event may
        // still arrive after the monitor has been torn down.
        let alert_gw = CollectingAlertGw::default();
        let notify = Notify::new(alert_gw.clone(), [TransitionKind::Enter].into());
        drop(notify.clone());

        notify.notify(&event(TransitionKind::Enter));

        assert_eq!(alert_gw.alerts.lock().unwrap().len(), 1);
    }
}
