mod create_registry;
mod error;
mod evaluate_transitions;
mod last_viewport;
mod map_region_event;

pub use self::{
    create_registry::*, error::Error, evaluate_transitions::*, last_viewport::*,
    map_region_event::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
