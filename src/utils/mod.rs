//! Shared utility functions.

mod text;

pub use text::{is_blank, json_for_script, non_blank};
