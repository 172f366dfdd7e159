//! Spin planning: which item wins next, and how far the wheel turns to show it.

use crate::defaults;
use crate::geometry::{
    degrees_per_segment, normalize_degrees, target_rotation_for_index, FULL_TURN_DEG,
};
use crate::Item;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Jitter never exceeds this share of a slice, whatever the configured fraction,
/// so it cannot push the pointer across a slice boundary.
pub const MAX_JITTER_FRACTION: f64 = 0.49;

/// Fewest whole turns a spin may add. Alignment plus jitter can reach almost
/// -630°, so two turns keep every spin moving forward.
pub const MIN_ALLOWED_FULL_TURNS: u32 = 2;

/// Tunables for a spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinParams {
    /// Fewest whole turns added for show (inclusive).
    pub min_full_turns: u32,
    /// Most whole turns added for show (inclusive).
    pub max_full_turns: u32,
    /// Jitter amplitude as a fraction of one slice width.
    pub jitter_fraction: f64,
    pub pointer_reference_deg: f64,
}

impl SpinParams {
    /// Inclusive range of whole turns a spin adds, with the bounds put in
    /// order and raised to at least `MIN_ALLOWED_FULL_TURNS`.
    pub fn full_turns_range(&self) -> RangeInclusive<u32> {
        let lo = self
            .min_full_turns
            .min(self.max_full_turns)
            .max(MIN_ALLOWED_FULL_TURNS);
        let hi = self.min_full_turns.max(self.max_full_turns).max(lo);
        lo..=hi
    }
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            min_full_turns: defaults::MIN_FULL_TURNS,
            max_full_turns: defaults::MAX_FULL_TURNS,
            jitter_fraction: defaults::JITTER_FRACTION,
            pointer_reference_deg: defaults::POINTER_REFERENCE_DEG,
        }
    }
}

/// A fully decided spin: where it starts, which slice it targets, and the
/// three components of the rotation that gets it there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub target_index: usize,
    pub segment_count: usize,
    pub from_angle: f64,
    /// Whole turns, in degrees.
    pub full_turns: f64,
    /// Rotation that brings the target's center under the pointer from where
    /// the wheel currently rests. Between -630° and +90°.
    pub alignment: f64,
    pub jitter: f64,
}

impl SpinPlan {
    /// Build a plan from explicit turn count and jitter.
    ///
    /// For a wheel resting at a whole-turn angle, `delta()` is
    /// `360 * turns + target_rotation_for_index(target) + jitter`.
    pub fn forced(
        from_angle: f64,
        target_index: usize,
        segment_count: usize,
        turns: u32,
        jitter: f64,
        pointer_reference_deg: f64,
    ) -> Self {
        let target_rotation =
            target_rotation_for_index(target_index, segment_count, pointer_reference_deg);
        Self {
            target_index,
            segment_count,
            from_angle,
            full_turns: turns as f64 * FULL_TURN_DEG,
            alignment: target_rotation - normalize_degrees(from_angle),
            jitter,
        }
    }

    pub fn delta(&self) -> f64 {
        self.full_turns + self.alignment + self.jitter
    }

    pub fn to_angle(&self) -> f64 {
        self.from_angle + self.delta()
    }
}

/// Pick the index of the next winner.
///
/// With `exclude_most_recent` set and more than one item, every position whose
/// label equals `last_winner` is removed from the pool; the drawn position is
/// returned as-is, so duplicated labels keep their own slices. If exclusion
/// would leave nothing to draw from, it is ignored for this spin.
///
/// Returns `None` only for an empty list.
pub fn choose_target<R: Rng + ?Sized>(
    items: &[Item],
    exclude_most_recent: bool,
    last_winner: Option<&Item>,
    rng: &mut R,
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let every_position: Vec<usize> = (0..items.len()).collect();
    let pool = match last_winner {
        Some(last) if exclude_most_recent && items.len() > 1 => {
            let remaining: Vec<usize> = every_position
                .iter()
                .copied()
                .filter(|&i| items[i] != *last)
                .collect();
            if remaining.is_empty() {
                debug!("Every item equals last winner '{}', ignoring non-repeat", last);
                every_position
            } else {
                remaining
            }
        }
        _ => every_position,
    };

    pool.choose(rng).copied()
}

/// Largest absolute jitter for a wheel of `segment_count` slices.
pub fn jitter_bound(segment_count: usize, jitter_fraction: f64) -> f64 {
    jitter_fraction.clamp(0.0, MAX_JITTER_FRACTION) * degrees_per_segment(segment_count)
}

/// Uniform jitter in `[-bound, +bound]`.
pub fn draw_jitter<R: Rng + ?Sized>(
    segment_count: usize,
    jitter_fraction: f64,
    rng: &mut R,
) -> f64 {
    let bound = jitter_bound(segment_count, jitter_fraction);
    if bound <= 0.0 || !bound.is_finite() {
        return 0.0;
    }
    match Uniform::new_inclusive(-bound, bound) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    }
}

/// Whole turns to add, drawn uniformly from [`SpinParams::full_turns_range`].
pub fn draw_full_turns<R: Rng + ?Sized>(params: &SpinParams, rng: &mut R) -> u32 {
    rng.random_range(params.full_turns_range())
}

/// Clamp externally supplied turns and jitter into what a drawn plan could
/// have produced, so the wheel still moves forward and lands on its target.
pub fn clamp_plan_inputs(
    turns: u32,
    jitter: f64,
    segment_count: usize,
    params: &SpinParams,
) -> (u32, f64) {
    let range = params.full_turns_range();
    let turns = turns.clamp(*range.start(), *range.end());
    let bound = jitter_bound(segment_count, MAX_JITTER_FRACTION);
    let jitter = if jitter.is_finite() {
        jitter.clamp(-bound, bound)
    } else {
        0.0
    };
    (turns, jitter)
}

/// Plan a spin from `current_angle` that lands on slice `target_index`.
pub fn plan_spin<R: Rng + ?Sized>(
    current_angle: f64,
    target_index: usize,
    segment_count: usize,
    params: &SpinParams,
    rng: &mut R,
) -> SpinPlan {
    let turns = draw_full_turns(params, rng);
    let jitter = draw_jitter(segment_count, params.jitter_fraction, rng);
    let plan = SpinPlan::forced(
        current_angle,
        target_index,
        segment_count,
        turns,
        jitter,
        params.pointer_reference_deg,
    );

    debug!(
        "Planned spin to slice {}/{}: {} turns, alignment {:.2}°, jitter {:.2}°, {:.2}° -> {:.2}°",
        target_index,
        segment_count,
        turns,
        plan.alignment,
        plan.jitter,
        plan.from_angle,
        plan.to_angle()
    );

    plan
}
