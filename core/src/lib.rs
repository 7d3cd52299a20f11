//! # Ignite Core
//!
//! In-memory models driven by the `ignite` CLI.
//!
//! * **[`endpoint`]**: The network endpoint record and its one-way activation.
//! * **[`vehicle`]**: Electric vehicles with per-variant charge reporting.

pub mod endpoint;
pub mod vehicle;
