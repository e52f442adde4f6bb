//! Small utilities shared between the crates of this workspace:
//! stderr logging macros and a scope timing guard.

pub mod warn;
pub mod time_guard;
