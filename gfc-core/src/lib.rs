//! Core logic of Geofencer: use cases plus the traits implemented
//! by the external collaborators (location service, notification
//! sinks, persistence).

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use gfc_entities::{
        alert::*, geo::*, permission::*, region::*, time::*, transition::*, viewport::*,
    };
}
