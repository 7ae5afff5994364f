//! Gilded Rose Inventory Engine
//!
//! Advances a stock of items one day at a time. Each item ages under the
//! policy selected by its name; see [`systems::aging`] for the rules.

pub mod components;
pub mod systems;
pub mod world;
pub mod names;

pub use components::*;
pub use world::{Inventory, TickResult};
