//! The authored content document.
//!
//! Content is authored with plain (non-cumulative) probabilities. Converting
//! a [`RawContent`] into a [`ContentModel`] builds every weighted table, so
//! any probability that does not sum to one rejects the whole document.

use std::collections::BTreeMap;

use serde::Deserialize;
use supermind_foundation::{
    Direction, Error, EventId, ItemId, LocationId, ProgramId, Result, TextId, VenueId,
    WeightedTable,
};

use crate::catalog::{Item, Program};
use crate::location::{Location, Position, Transition, VenueSlot};
use crate::model::ContentModel;
use crate::text::{EventTexts, Outcome, Reward, Text, TextOption};
use crate::venue::{Venue, VenueOption};

/// Root of a content document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawContent {
    /// Map nodes.
    #[serde(default)]
    pub locations: Vec<RawLocation>,
    /// Venue table.
    #[serde(default)]
    pub venues: Vec<RawVenue>,
    /// Event text table.
    #[serde(default)]
    pub events: Vec<RawEvent>,
    /// Item table.
    #[serde(default)]
    pub items: Vec<RawItem>,
    /// Program table.
    #[serde(default)]
    pub programs: Vec<RawProgram>,
}

/// An authored location.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLocation {
    /// Location id.
    pub id: String,
    /// Map description.
    pub description: String,
    /// Authored size.
    #[serde(default)]
    pub size: f64,
    /// Research percent per exploration.
    #[serde(default)]
    pub research_rate: u32,
    /// Coordinates.
    #[serde(default)]
    pub position: RawPosition,
    /// Transitions keyed by direction code or name.
    #[serde(default)]
    pub adjacent: BTreeMap<String, RawTransition>,
    /// Venue slots in display order.
    #[serde(default)]
    pub venues: Vec<RawVenueSlot>,
    /// Wandering encounters.
    #[serde(default)]
    pub events: Vec<RawWeighted>,
}

/// Authored coordinates.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPosition {
    /// East-west coordinate.
    #[serde(default)]
    pub x: f64,
    /// North-south coordinate.
    #[serde(default)]
    pub y: f64,
    /// Vertical coordinate.
    #[serde(default)]
    pub z: f64,
}

/// An authored transition.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTransition {
    /// Destination id.
    pub to: String,
    /// Text shown when the direction is tried.
    #[serde(default)]
    pub description: String,
    /// Travel multiplier; missing means passable.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Button arrow; defaults to the direction's arrow.
    #[serde(default)]
    pub arrow: Option<String>,
    /// Button marker; defaults to a cross for impassable transitions.
    #[serde(default)]
    pub marker: Option<String>,
}

fn default_multiplier() -> f64 {
    1.0
}

/// An authored venue slot.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawVenueSlot {
    /// Venue id.
    pub venue: String,
    /// Location-specific description.
    #[serde(default)]
    pub description: String,
    /// Research percent required.
    #[serde(default)]
    pub research_threshold: u32,
}

/// A `(probability, id)` pair.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawWeighted {
    /// Referenced id.
    pub id: String,
    /// Probability, not cumulative.
    pub probability: f64,
}

/// An authored venue.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawVenue {
    /// Venue id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Events for explorations landing here.
    #[serde(default)]
    pub events: Vec<RawWeighted>,
    /// Menu options.
    #[serde(default)]
    pub options: Vec<RawVenueOption>,
}

/// An authored venue option.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawVenueOption {
    /// Button label.
    pub text: String,
    /// Message sent before the event resolves.
    #[serde(default)]
    pub message: String,
    /// Events the option can lead to.
    pub events: Vec<RawWeighted>,
}

/// An authored event with its text variants.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEvent {
    /// Event id.
    pub id: String,
    /// Text variants.
    pub texts: Vec<RawText>,
}

/// An authored text variant.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawText {
    /// Variant id.
    pub id: String,
    /// Narrative description.
    #[serde(default)]
    pub description: String,
    /// Options in display order.
    pub options: Vec<RawTextOption>,
}

/// An authored text option.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTextOption {
    /// Button label.
    pub text: String,
    /// Weighted outcomes.
    pub outcomes: Vec<RawOutcome>,
}

/// An authored outcome.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOutcome {
    /// Probability, not cumulative.
    pub probability: f64,
    /// Item count for item rewards.
    #[serde(default)]
    pub count: Option<u32>,
    /// Flavor message.
    #[serde(default)]
    pub message: Option<String>,
    /// Item id (prefixed) or literal text.
    #[serde(default)]
    pub outcome: Option<String>,
}

/// An authored item.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawItem {
    /// Item id, carrying the item prefix.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Card description.
    #[serde(default)]
    pub description: String,
    /// Unit weight.
    pub weight: f64,
}

/// An authored program.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProgram {
    /// Program id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Card description.
    #[serde(default)]
    pub description: String,
    /// CPU while running.
    pub cpu_usage: u64,
    /// RAM while running.
    pub ram_usage: u64,
    /// Compile effort in ticks at one CPU.
    pub compile_time: u64,
}

impl RawContent {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the document schema.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::malformed(e.to_string()))
    }

    /// Builds the content model.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, unknown directions, non-positive
    /// item weights, out-of-range research values, or any weighted table that
    /// fails to build.
    pub fn into_model(self) -> Result<ContentModel> {
        let mut locations = BTreeMap::new();
        for raw in self.locations {
            let location = convert_location(raw)?;
            insert_unique(&mut locations, location.id.clone(), location, "location")?;
        }

        let mut venues = BTreeMap::new();
        for raw in self.venues {
            let id = VenueId::new(raw.id.clone());
            insert_unique(&mut venues, id, convert_venue(raw)?, "venue")?;
        }

        let mut texts = BTreeMap::new();
        for raw in self.events {
            let id = EventId::new(raw.id.clone());
            insert_unique(&mut texts, id, convert_event(raw)?, "event")?;
        }

        let mut items = BTreeMap::new();
        for raw in self.items {
            if !ItemId::is_item_ref(&raw.id) {
                return Err(Error::malformed(format!(
                    "item id {} lacks the {} prefix",
                    raw.id,
                    ItemId::PREFIX
                )));
            }
            if !(raw.weight.is_finite() && raw.weight > 0.0) {
                return Err(Error::malformed(format!(
                    "item {} has non-positive weight {}",
                    raw.id, raw.weight
                )));
            }
            let item = Item {
                name: raw.name,
                description: raw.description,
                weight: raw.weight,
            };
            insert_unique(&mut items, ItemId::new(raw.id), item, "item")?;
        }

        let mut programs = BTreeMap::new();
        for raw in self.programs {
            let program = Program {
                name: raw.name,
                description: raw.description,
                cpu_usage: raw.cpu_usage,
                ram_usage: raw.ram_usage,
                compile_time: raw.compile_time,
            };
            insert_unique(&mut programs, ProgramId::new(raw.id), program, "program")?;
        }

        Ok(ContentModel::new(locations, venues, texts, items, programs))
    }
}

fn insert_unique<K: Ord + std::fmt::Display, V>(
    map: &mut BTreeMap<K, V>,
    key: K,
    value: V,
    what: &str,
) -> Result<()> {
    if map.contains_key(&key) {
        return Err(Error::malformed(format!("duplicate {what} id {key}")));
    }
    map.insert(key, value);
    Ok(())
}

fn weighted_ids<T: Ord>(
    table: &str,
    pairs: Vec<RawWeighted>,
    make: impl Fn(String) -> T,
) -> Result<WeightedTable<T>> {
    WeightedTable::build(
        table,
        pairs.into_iter().map(|w| (w.probability, make(w.id))),
    )
}

fn convert_location(raw: RawLocation) -> Result<Location> {
    if raw.research_rate > 100 {
        return Err(Error::malformed(format!(
            "location {} has research rate {} above 100",
            raw.id, raw.research_rate
        )));
    }

    let mut adjacent = BTreeMap::new();
    for (key, t) in raw.adjacent {
        let direction: Direction = key.parse()?;
        let marker = t
            .marker
            .unwrap_or_else(|| if t.multiplier > 0.0 { String::new() } else { "✖".to_string() });
        let transition = Transition {
            to: LocationId::new(t.to),
            description: t.description,
            multiplier: t.multiplier,
            arrow: t.arrow.unwrap_or_else(|| direction.arrow().to_string()),
            marker,
        };
        if adjacent.insert(direction, transition).is_some() {
            return Err(Error::malformed(format!(
                "location {} defines direction {direction} twice",
                raw.id
            )));
        }
    }

    let venues = raw
        .venues
        .into_iter()
        .map(|slot| VenueSlot {
            venue: VenueId::new(slot.venue),
            description: slot.description,
            research_threshold: slot.research_threshold,
        })
        .collect();

    let events = if raw.events.is_empty() {
        None
    } else {
        let name = format!("location {} events", raw.id);
        Some(weighted_ids(&name, raw.events, VenueId::new)?)
    };

    Ok(Location {
        id: LocationId::new(raw.id),
        description: raw.description,
        size: raw.size,
        research_rate: raw.research_rate,
        position: Position {
            x: raw.position.x,
            y: raw.position.y,
            z: raw.position.z,
        },
        adjacent,
        venues,
        events,
    })
}

fn convert_venue(raw: RawVenue) -> Result<Venue> {
    let events = if raw.events.is_empty() {
        None
    } else {
        let name = format!("venue {} events", raw.id);
        Some(weighted_ids(&name, raw.events, EventId::new)?)
    };
    let mut options: Vec<VenueOption> = Vec::with_capacity(raw.options.len());
    for option in raw.options {
        if options.iter().any(|o| o.text == option.text) {
            return Err(Error::malformed(format!(
                "venue {} repeats option {:?}",
                raw.id, option.text
            )));
        }
        let table = format!("venue {} option {:?}", raw.id, option.text);
        options.push(VenueOption {
            events: weighted_ids(&table, option.events, EventId::new)?,
            text: option.text,
            message: option.message,
        });
    }
    Ok(Venue {
        name: raw.name,
        events,
        options,
    })
}

fn convert_event(raw: RawEvent) -> Result<EventTexts> {
    if raw.texts.is_empty() {
        return Err(Error::malformed(format!("event {} has no texts", raw.id)));
    }
    let mut variants: Vec<Text> = Vec::with_capacity(raw.texts.len());
    for text in raw.texts {
        let text_id = TextId::new(text.id);
        if variants.iter().any(|v| v.id == text_id) {
            return Err(Error::malformed(format!(
                "event {} repeats text {text_id}",
                raw.id
            )));
        }
        if text.options.is_empty() {
            return Err(Error::malformed(format!(
                "event {} text {text_id} has no options",
                raw.id
            )));
        }
        let mut options: Vec<TextOption> = Vec::with_capacity(text.options.len());
        for option in text.options {
            if options.iter().any(|o| o.text == option.text) {
                return Err(Error::malformed(format!(
                    "event {} text {text_id} repeats option {:?}",
                    raw.id, option.text
                )));
            }
            let table = format!("event {} text {text_id} option {:?}", raw.id, option.text);
            let outcomes = WeightedTable::build(
                &table,
                option.outcomes.into_iter().map(|o| {
                    let outcome = Outcome {
                        count: o.count,
                        message: o.message.filter(|m| !m.is_empty()),
                        reward: o.outcome.filter(|id| !id.is_empty()).map(|id| Reward::parse(&id)),
                    };
                    (o.probability, outcome)
                }),
            )?;
            options.push(TextOption {
                text: option.text,
                outcomes,
            });
        }
        variants.push(Text {
            id: text_id,
            description: text.description,
            options,
        });
    }
    Ok(EventTexts { variants })
}
