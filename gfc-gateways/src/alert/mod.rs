mod console;
mod to_json_file;

pub use self::{console::*, to_json_file::*};
