//! Name Generation for Stock
//!
//! Random ordinary goods and mixed random stock for benchmarks.

use rand::Rng;
use crate::components::*;

/// Ordinary goods sold at the tavern
const ORDINARY_GOODS: &[&str] = &[
    "+5 Dexterity Vest", "Elixir of the Mongoose", "Conjured Mana Cake",
    "Paisley Pajama Pants", "Foo Butter", "Ragnaros", "Potion of Minor Healing",
    "Iron Shortsword", "Traveler's Backpack", "Linen Bandage", "Roasted Quail",
    "Moonberry Juice", "Tough Jerky", "Silk Cloth", "Hearthstone", "Torch",
    "Simple Wood", "Mote of Fire", "Copper Ore", "Runecloth Gloves",
];

/// Backstage pass events
const EVENTS: &[&str] = &[
    "a TAFKAL80ETC concert", "the Darkmoon Faire", "the Goblin Jam", "the Bard's Recital",
];

/// Pick a random ordinary item name
pub fn random_item_name() -> &'static str {
    let mut rng = rand::thread_rng();
    ORDINARY_GOODS[rng.gen_range(0..ORDINARY_GOODS.len())]
}

/// Build `count` random items across all policies, mostly ordinary goods
pub fn random_stock(count: usize) -> Vec<Item> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let sell_in = rng.gen_range(-5..30);
            let quality = rng.gen_range(QUALITY_MIN..=QUALITY_MAX);
            match rng.gen_range(0..10) {
                0 => Item::new(APPRECIATING_NAME, sell_in, quality),
                1 => {
                    let event = EVENTS[rng.gen_range(0..EVENTS.len())];
                    Item::new(format!("{} to {}", EVENT_TICKET_PREFIX, event), sell_in, quality)
                }
                2 => Item::new(LEGENDARY_NAME, sell_in, LEGENDARY_QUALITY),
                _ => Item::new(random_item_name(), sell_in, quality),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_generation() {
        let name = random_item_name();
        assert!(ORDINARY_GOODS.contains(&name));
        assert_eq!(Policy::from_name(name), Policy::Ordinary);
    }

    #[test]
    fn test_random_stock() {
        let stock = random_stock(500);
        assert_eq!(stock.len(), 500);

        for item in &stock {
            if item.policy().is_legendary() {
                assert_eq!(item.quality, LEGENDARY_QUALITY);
            } else {
                assert!((QUALITY_MIN..=QUALITY_MAX).contains(&item.quality));
            }
        }
        assert!(stock.iter().any(|i| i.policy() == Policy::EventTicket));
    }
}
