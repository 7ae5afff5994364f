//! Inventory - main orchestrator
//!
//! Owns the ordered stock and the day counter and runs the aging system
//! once per tick.

use serde::Serialize;
use tracing::{debug, trace};
use crate::components::*;
use crate::names;
use crate::systems;

pub struct Inventory {
    items: Vec<Item>,
    pub calendar: Calendar,
    /// Age items on the rayon pool instead of sequentially
    pub parallel: bool,
}

/// Summary of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickResult {
    pub day: u32,
    pub items: usize,
    /// Items whose sell-in went from 0 to -1 this tick
    pub newly_expired: usize,
    pub legendary: usize,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            calendar: Calendar::default(),
            parallel: false,
        }
    }

    /// The classic tavern stock
    pub fn standard_stock() -> Self {
        Self::new(vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new(APPRECIATING_NAME, 2, 0),
            Item::new("Elixir of the Mongoose", 5, 7),
            Item::new(LEGENDARY_NAME, 0, LEGENDARY_QUALITY),
            Item::new(LEGENDARY_NAME, -1, LEGENDARY_QUALITY),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
            Item::new("Conjured Mana Cake", 3, 6),
        ])
    }

    /// Random stock for benchmarking
    pub fn seed_random(count: usize) -> Self {
        Self::new(names::random_stock(count))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn day(&self) -> u32 {
        self.calendar.day
    }

    /// Run one tick (advances 1 day)
    pub fn tick(&mut self) -> TickResult {
        self.calendar.advance();

        let fresh: Vec<bool> = self.items.iter().map(|item| !item.is_expired()).collect();

        if self.parallel {
            systems::aging_system_par(&mut self.items);
        } else {
            systems::aging_system(&mut self.items);
        }

        let mut newly_expired = 0;
        let mut legendary = 0;
        for (item, was_fresh) in self.items.iter().zip(fresh) {
            if item.policy().is_legendary() {
                legendary += 1;
            } else if was_fresh && item.is_expired() {
                trace!(day = self.calendar.day, item = item.name(), "item expired");
                newly_expired += 1;
            }
        }

        let result = TickResult {
            day: self.calendar.day,
            items: self.items.len(),
            newly_expired,
            legendary,
        };
        debug!(?result, "tick complete");
        result
    }

    /// Run several ticks, collecting each summary
    pub fn run(&mut self, days: u32) -> Vec<TickResult> {
        (0..days).map(|_| self.tick()).collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
