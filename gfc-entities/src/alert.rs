/// User-facing alert payload handed to alert gateways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertContent {
    pub title: String,
    pub body: String,
}
