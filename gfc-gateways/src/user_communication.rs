use gfc_entities::{alert::*, transition::*};

const ALERT_TITLE: &str = "Geofence Alert";

pub fn transition_alert(event: &TransitionEvent) -> AlertContent {
    let body = match event.kind {
        TransitionKind::Enter => format!("Entered: {}", event.region),
        TransitionKind::Exit => format!("Exited: {}", event.region),
    };
    AlertContent {
        title: ALERT_TITLE.to_owned(),
        body,
    }
}
