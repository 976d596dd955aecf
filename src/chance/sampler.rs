use super::uniform_source::UniformSource;
use super::weight_set::WeightSet;
use super::MAX_CHANCE;
use log::trace;

/// True with `percent` chance out of [`MAX_CHANCE`].
pub fn chance<S: UniformSource + ?Sized>(percent: f64, source: &mut S) -> bool {
    percent / MAX_CHANCE > source.next_uniform()
}

///
/// Picks one outcome from `set`.
///
/// Items are tested one at a time. Once an item has missed, its chance is
/// gone from the pool, so every later weight is scaled up by
/// `MAX_CHANCE / remaining` to become its chance given that everything
/// before it missed. That keeps each item's overall odds at exactly
/// `weight / MAX_CHANCE`. If every item misses, the default is returned.
///
/// Uses at most one draw per item and stops at the first hit.
///
pub fn sample<'a, T, S>(set: &'a WeightSet<T>, source: &mut S) -> &'a T
where
    S: UniformSource + ?Sized,
{
    let mut remaining = MAX_CHANCE;
    let mut multiplier = 1.0;
    for item in set.sampling_order() {
        let effective_chance = item.weight() * multiplier;
        let hit = chance(effective_chance, source);
        trace!(
            "Weight: {}, remaining: {}, effective chance: {}, hit: {}",
            item.weight(),
            remaining,
            effective_chance,
            hit
        );
        if hit {
            return item.payload();
        }
        remaining -= item.weight();
        if remaining <= 0.0 {
            break;
        }
        multiplier = MAX_CHANCE / remaining;
    }
    set.default_payload()
}
