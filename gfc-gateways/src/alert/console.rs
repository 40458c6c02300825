use gfc_core::{entities::*, gateways::alert::AlertGateway};

/// Prints alerts to the terminal, the headless stand-in for the
/// platform alert dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlert;

impl AlertGateway for ConsoleAlert {
    fn show_alert(&self, content: &AlertContent) {
        eprintln!("[{}] {}", content.title, content.body);
    }
}
