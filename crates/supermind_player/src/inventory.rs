//! The backpack: a weight-limited item multiset.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use supermind_foundation::{Error, ErrorKind, ItemId, Result};

/// Units of one item and the weight of each.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    /// Units held.
    pub count: u32,
    /// Weight of one unit, as of the latest pick-up.
    pub unit_weight: f64,
}

/// How much of an offered grant fit into the backpack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insertion {
    /// Units added.
    pub taken: u32,
    /// Units that did not fit.
    pub overflow: u32,
}

/// A capacity-constrained item multiset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: OrdMap<ItemId, Stack>,
    max_weight: f64,
}

impl Inventory {
    /// Creates an empty backpack holding up to `max_weight`.
    #[must_use]
    pub fn new(max_weight: f64) -> Self {
        Self {
            items: OrdMap::new(),
            max_weight,
        }
    }

    /// Capacity.
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Total weight carried.
    #[must_use]
    pub fn weight(&self) -> f64 {
        total_weight(&self.items)
    }

    /// Units of `item` held.
    #[must_use]
    pub fn count(&self, item: &ItemId) -> u32 {
        self.items.get(item).map_or(0, |s| s.count)
    }

    /// Iterates `(item, count)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.items.iter().map(|(id, s)| (id, s.count))
    }

    /// Returns true if nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds as many of `count` units as fit.
    ///
    /// `taken = floor(min(free_weight / item_weight, count))`; the carried
    /// weight never exceeds capacity afterwards. `item_weight` replaces the
    /// unit weight of units already held, so the capacity check follows the
    /// current content.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn insert(&mut self, item: &ItemId, count: u32, item_weight: f64) -> Insertion {
        if count == 0 || !(item_weight.is_finite() && item_weight > 0.0) {
            return Insertion {
                taken: 0,
                overflow: count,
            };
        }

        let held = self.count(item);
        let unit_weight = item_weight;
        let restacked = self.items.update(
            item.clone(),
            Stack {
                count: held,
                unit_weight,
            },
        );
        let free = (self.max_weight - total_weight(&restacked)).max(0.0);
        let fits = (free / unit_weight).floor().min(f64::from(count));
        let mut taken = fits.max(0.0) as u32;

        // Floating point division can round up onto the capacity boundary,
        // so check the exact total the backpack would report.
        while taken > 0 {
            let candidate = self.items.update(
                item.clone(),
                Stack {
                    count: held + taken,
                    unit_weight,
                },
            );
            if total_weight(&candidate) <= self.max_weight {
                self.items = candidate;
                break;
            }
            taken -= 1;
        }

        Insertion {
            taken,
            overflow: count - taken,
        }
    }

    /// Removes `count` units of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InsufficientItems`] if fewer than `count` are held;
    /// the backpack is left unchanged.
    pub fn remove(&mut self, item: &ItemId, count: u32) -> Result<()> {
        let held = self.count(item);
        if held < count {
            return Err(Error::new(ErrorKind::InsufficientItems {
                item: item.to_string(),
                held,
                requested: count,
            }));
        }
        if held == count {
            self.items.remove(item);
        } else if let Some(stack) = self.items.get_mut(item) {
            stack.count -= count;
        }
        Ok(())
    }
}

fn total_weight(items: &OrdMap<ItemId, Stack>) -> f64 {
    items
        .values()
        .map(|s| f64::from(s.count) * s.unit_weight)
        .sum()
}
