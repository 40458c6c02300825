//! Concrete adapters for the gateway traits of `gfc-core`.

pub mod alert;
pub mod location;
pub mod notify;
pub mod user_communication;
pub mod viewport_store;
