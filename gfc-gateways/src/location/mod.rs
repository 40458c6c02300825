mod fixed;
mod scripted;

pub use self::{fixed::*, scripted::*};
