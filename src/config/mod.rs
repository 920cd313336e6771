//! Configuration for the portal engines.
//!
//! Settings are loaded from YAML files in a configuration directory and
//! passed explicitly into the engines; nothing in the crate reads global
//! mutable state. Changing the attendance settings and re-running a
//! classification is the supported way to retroactively re-derive
//! Present/Late labels.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceSettings, BlockMetrics, LayoutSettings, PageProfile};
