//! Data models shared by the simple logger, the redirecting sink and the
//! structured backends.

pub mod entry;
pub mod level;

pub use entry::{fields_to_json, CallerLocation, Entry, Field};
pub use level::Level;
