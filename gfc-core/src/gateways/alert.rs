use crate::entities::*;

/// User-facing alert surface (dialog/toast equivalent).
pub trait AlertGateway {
    fn show_alert(&self, content: &AlertContent);
}
