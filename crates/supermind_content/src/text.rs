//! Narrative texts and their outcomes.
//!
//! An event has one or more text variants. Each variant carries a
//! description and a set of options; each option draws one [`Outcome`].

use supermind_foundation::{ItemId, TextId, WeightedTable};

/// What an outcome hands to the player besides its message.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Reward {
    /// Grant of an item (id carries the item prefix).
    Item(ItemId),
    /// Literal text appended verbatim to the message.
    Text(String),
}

impl Reward {
    /// Classifies an authored outcome id by its prefix.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if ItemId::is_item_ref(raw) {
            Reward::Item(ItemId::new(raw))
        } else {
            Reward::Text(raw.to_string())
        }
    }
}

/// The terminal result of resolving an option.
///
/// Ordering is derived so that equal-probability outcomes sort
/// deterministically inside a [`WeightedTable`].
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Outcome {
    /// How many items an item reward grants.
    pub count: Option<u32>,
    /// Flavor message.
    pub message: Option<String>,
    /// Item grant or literal text; `None` when nothing happens.
    pub reward: Option<Reward>,
}

impl Outcome {
    /// Number of items granted, defaulting to one.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.count.unwrap_or(1)
    }
}

/// An option inside a text variant.
#[derive(Clone, Debug)]
pub struct TextOption {
    /// Button label.
    pub text: String,
    /// Outcomes the option can resolve to.
    pub outcomes: WeightedTable<Outcome>,
}

/// One narrative variant of an event.
#[derive(Clone, Debug)]
pub struct Text {
    /// Variant id.
    pub id: TextId,
    /// Narrative description.
    pub description: String,
    /// Options in display order.
    pub options: Vec<TextOption>,
}

impl Text {
    /// Returns the option labelled `text`.
    #[must_use]
    pub fn option(&self, text: &str) -> Option<&TextOption> {
        self.options.iter().find(|o| o.text == text)
    }
}

/// All variants of one event.
#[derive(Clone, Debug, Default)]
pub struct EventTexts {
    /// Variants, chosen uniformly at resolution time.
    pub variants: Vec<Text>,
}

impl EventTexts {
    /// Returns the variant with id `text`.
    #[must_use]
    pub fn variant(&self, text: &TextId) -> Option<&Text> {
        self.variants.iter().find(|v| &v.id == text)
    }
}
