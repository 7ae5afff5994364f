//! Aging System - advance every item by one day

use rayon::prelude::*;
use crate::components::{Item, Policy, QUALITY_MAX, QUALITY_MIN};

impl Policy {
    /// Quality after one day, given the already-decremented sell-in.
    ///
    /// Expired means `sell_in < 0`, so an item reaching -1 this tick takes
    /// the expired rate immediately.
    pub fn next_quality(self, sell_in: i32, quality: i32) -> i32 {
        let expired = sell_in < 0;
        let delta = match self {
            Policy::Legendary => return quality,
            Policy::Ordinary => if expired { -2 } else { -1 },
            Policy::Appreciating => if expired { 2 } else { 1 },
            Policy::EventTicket => match sell_in {
                s if s < 0 => return QUALITY_MIN,
                0..=4 => 3,
                5..=9 => 2,
                _ => 1,
            },
        };
        quality.saturating_add(delta).clamp(QUALITY_MIN, QUALITY_MAX)
    }
}

/// Age a single item in place
pub fn age_item(item: &mut Item) {
    let policy = item.policy();
    if policy.is_legendary() {
        return;
    }
    item.sell_in = item.sell_in.saturating_sub(1);
    item.quality = policy.next_quality(item.sell_in, item.quality);
}

/// Advance all items by one day
pub fn aging_system(items: &mut [Item]) {
    for item in items.iter_mut() {
        age_item(item);
    }
}

/// Same as [`aging_system`], spread across the rayon pool
pub fn aging_system_par(items: &mut [Item]) {
    items.par_iter_mut().for_each(age_item);
}
