//! Systems - process items each tick

pub mod aging;

pub use aging::{age_item, aging_system, aging_system_par};
