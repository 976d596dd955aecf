use super::error::ChanceError;
use super::sampler;
use super::uniform_source::UniformSource;
use super::validator::{remaining, validate};
use super::weighted_item::WeightedItem;
use super::MAX_CHANCE;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

/// Order in which items get their turn when sampling.
///
/// Doesn't change the odds of any outcome, only how many draws a sample
/// tends to use and how the remaining chance shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleOrder {
    /// Heaviest first, equal weights in the order they were added.
    #[default]
    DescendingWeight,
    /// The order they were added.
    Insertion,
}

///
/// A set of outcomes with percentage chances, plus the default outcome that
/// gets whatever chance is left.
///
/// The total of all weights never goes over [`super::MAX_CHANCE`]; every way
/// of adding an item checks this before anything changes.
///
#[derive(Debug, Clone)]
pub struct WeightSet<T> {
    items: Vec<WeightedItem<T>>,
    default_payload: T,
    total: f64,
    order_policy: SampleOrder,
    /// Indices into `items`, built on first sample. Cleared by any mutation.
    order: OnceLock<Vec<usize>>,
}

impl<T> WeightSet<T> {
    pub fn new(default_payload: T) -> WeightSet<T> {
        WeightSet {
            items: Vec::new(),
            default_payload,
            total: 0.0,
            order_policy: SampleOrder::default(),
            order: OnceLock::new(),
        }
    }

    pub fn with_order(mut self, order_policy: SampleOrder) -> Self {
        self.order_policy = order_policy;
        self.order.take();
        self
    }

    /// Builds a whole set, stopping at the first item that doesn't fit.
    pub fn try_from_items<I>(default_payload: T, items: I) -> Result<Self, ChanceError>
    where
        I: IntoIterator<Item = (f64, T)>,
    {
        let mut set = WeightSet::new(default_payload);
        for (weight, payload) in items {
            set.add(weight, payload)?;
        }
        Ok(set)
    }

    pub fn with_item(mut self, weight: f64, payload: T) -> Result<Self, ChanceError> {
        self.add(weight, payload)?;
        Ok(self)
    }

    /// Adds an outcome. Nothing changes if it returns an error.
    pub fn add(&mut self, weight: f64, payload: T) -> Result<(), ChanceError> {
        let item = WeightedItem::new(weight, payload)
            .inspect_err(|e| warn!("Rejected weight {}: {}", weight, e))?;
        self.push(item)
    }

    pub fn push(&mut self, item: WeightedItem<T>) -> Result<(), ChanceError> {
        self.check_room(item.weight())?;
        self.commit(item);
        Ok(())
    }

    /// A set at or past the maximum takes nothing more, even within tolerance.
    fn check_room(&self, weight: f64) -> Result<(), ChanceError> {
        let room = if self.total >= MAX_CHANCE {
            Err(ChanceError::WeightOverflow {
                excess: self.total + weight - MAX_CHANCE,
            })
        } else {
            validate([self.total, weight])
        };
        room.inspect_err(|e| {
            warn!(
                "Rejected weight {} on a set already at {}: {}",
                weight, self.total, e
            )
        })
    }

    fn commit(&mut self, item: WeightedItem<T>) {
        let weight = item.weight();
        self.total += weight;
        self.items.push(item);
        self.order.take();
        debug!(
            "Added item {} with weight {}, {} chance remaining",
            self.items.len() - 1,
            weight,
            self.remaining_chance()
        );
    }

    /// Chance left for the default outcome, in percent. Once this is 0 no
    /// further item can be added.
    pub fn remaining_chance(&self) -> f64 {
        remaining([self.total]).max(0.0)
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &WeightedItem<T>> {
        self.items.iter()
    }

    pub fn default_payload(&self) -> &T {
        &self.default_payload
    }

    pub fn order_policy(&self) -> SampleOrder {
        self.order_policy
    }

    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> &T {
        sampler::sample(self, source)
    }

    /// Items in the order the sampler tests them.
    pub fn sampling_order(&self) -> impl Iterator<Item = &WeightedItem<T>> {
        self.order
            .get_or_init(|| self.build_order())
            .iter()
            .map(|&i| &self.items[i])
    }

    fn build_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        if self.order_policy == SampleOrder::DescendingWeight {
            // Stable, so ties keep insertion order
            order.sort_by(|&a, &b| self.items[b].weight().total_cmp(&self.items[a].weight()));
        }
        debug!("Built {:?} sampling order {:?}", self.order_policy, order);
        order
    }
}

impl<T: Serialize> WeightSet<T> {
    /// Snapshot of the set for structured log lines.
    pub fn loggable(&self) -> Value {
        serde_json::json!({
            "items": self.items,
            "default": self.default_payload,
            "remaining": self.remaining_chance(),
            "order": self.order_policy,
        })
    }
}
