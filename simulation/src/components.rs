//! Components for Gilded Rose inventory items
//!
//! An item carries its aging policy alongside its mutable counters. The
//! policy is resolved from the name once, when the item is built.

use serde::Serialize;
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

pub const QUALITY_MIN: i32 = 0;
pub const QUALITY_MAX: i32 = 50;

/// Quality a legendary item is stocked at. Aging never touches it.
pub const LEGENDARY_QUALITY: i32 = 80;

pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub const APPRECIATING_NAME: &str = "Aged Brie";
pub const EVENT_TICKET_PREFIX: &str = "Backstage passes";

// ============================================================================
// Policy
// ============================================================================

/// Aging rule-set selected by an item's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Policy {
    Ordinary,
    Appreciating,
    EventTicket,
    Legendary,
}

impl Policy {
    /// Resolve the policy for a name. Unrecognized names are ordinary goods.
    pub fn from_name(name: &str) -> Self {
        if name == LEGENDARY_NAME {
            Policy::Legendary
        } else if name == APPRECIATING_NAME {
            Policy::Appreciating
        } else if name.starts_with(EVENT_TICKET_PREFIX) {
            Policy::EventTicket
        } else {
            Policy::Ordinary
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Policy::Legendary
    }
}

// ============================================================================
// Item
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    pub sell_in: i32,
    pub quality: i32,
    #[serde(skip)]
    policy: Policy,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let policy = Policy::from_name(&name);
        Self { name, sell_in, quality, policy }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Past its sell-by date
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

// ============================================================================
// Calendar
// ============================================================================

/// Discrete day counter. Day 0 is the stock as constructed.
#[derive(Debug, Clone, Copy, Serialize, Default)]
pub struct Calendar {
    pub day: u32,
}

impl Calendar {
    pub fn advance(&mut self) {
        self.day += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_name() {
        assert_eq!(Policy::from_name("Sulfuras, Hand of Ragnaros"), Policy::Legendary);
        assert_eq!(Policy::from_name("Aged Brie"), Policy::Appreciating);
        assert_eq!(
            Policy::from_name("Backstage passes to a TAFKAL80ETC concert"),
            Policy::EventTicket
        );
        assert_eq!(Policy::from_name("Backstage passes"), Policy::EventTicket);
        assert_eq!(Policy::from_name("Elixir of the Mongoose"), Policy::Ordinary);
    }

    #[test]
    fn test_sentinels_match_exactly() {
        // Exact-match sentinels do not match on prefix or case
        assert_eq!(Policy::from_name("Aged Brie, extra sharp"), Policy::Ordinary);
        assert_eq!(Policy::from_name("aged brie"), Policy::Ordinary);
        assert_eq!(Policy::from_name("Sulfuras"), Policy::Ordinary);
        assert_eq!(Policy::from_name("VIP Backstage passes"), Policy::Ordinary);
        assert_eq!(Policy::from_name(""), Policy::Ordinary);
    }

    #[test]
    fn test_item_display() {
        let item = Item::new("Foo Butter", -5, 40);
        assert_eq!(item.to_string(), "Foo Butter, -5, 40");
        assert!(item.is_expired());
    }

    #[test]
    fn test_calendar_advance() {
        let mut cal = Calendar::default();
        cal.advance();
        cal.advance();
        assert_eq!(cal.day, 2);
    }
}
