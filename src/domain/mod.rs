//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains (where the domain needs them):
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod chart;
pub mod historical;
pub mod prediction;
pub mod profile;
pub mod quotes;
pub mod wishlist;
