pub mod recorder;
pub mod teams;

// Re-export main utilities for use by test files
pub use recorder::{Recorded, RecordingListener};
#[allow(unused_imports)]
pub use teams::{fast_config, rostered_team, TeamBuilder};
