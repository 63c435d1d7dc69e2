//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_compare, resolve_strategy, validate_args};
pub use models::{CompareArgs, ParserKind, TestSource};
pub use utils::{display_layout, display_version};
