//! Archfolio draft CLI: inspect, clear, or seed the local draft slot.

pub mod cli;
pub mod commands;
pub mod utils;
