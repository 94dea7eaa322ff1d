//! Core tenant logic — tiers, rendering, layout, store, planning.

pub mod codegen;
pub mod error;
pub mod layout;
pub mod planner;
pub mod prompt;
pub mod store;
pub mod tiers;
pub mod types;
