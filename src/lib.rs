pub mod chance;

pub use chance::error::ChanceError;
pub use chance::sampler::{chance, sample};
pub use chance::uniform_source::{RngSource, UniformSource};
pub use chance::weight_set::{SampleOrder, WeightSet};
pub use chance::weighted_item::WeightedItem;
pub use chance::{MAX_CHANCE, WEIGHT_TOLERANCE};
