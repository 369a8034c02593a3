#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_load_transfer_eq, assert_within_friction_limit};

pub use fixtures::*;
