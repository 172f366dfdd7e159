//! Spin state and its two-state machine.
//!
//! ```text
//! Idle --spin()--> Spinning --resolve_spin()--> Idle
//! ```
//!
//! `resolve_spin` must be driven by the animation-finished signal of the
//! front-end. The item list is snapshotted when a spin starts and the winner
//! is resolved against that snapshot, so edits made mid-spin cannot change
//! the outcome.

use crate::defaults;
use crate::error::SpinError;
use crate::geometry::{index_under_pointer, segment_count_for};
use crate::planner::{choose_target, clamp_plan_inputs, plan_spin, SpinParams, SpinPlan};
use crate::Item;
use log::{debug, info};
use rand::Rng;
use std::collections::VecDeque;

/// A spin in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSpin {
    /// Items as they were when the spin started.
    pub items: Vec<Item>,
    pub plan: SpinPlan,
}

impl PlannedSpin {
    pub fn segment_count(&self) -> usize {
        self.plan.segment_count
    }

    pub fn target(&self) -> &Item {
        &self.items[self.plan.target_index]
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Spinning(PlannedSpin),
}

#[derive(Debug, Clone)]
pub struct SpinSession {
    cumulative_angle: f64,
    phase: Phase,
    last_winner: Option<Item>,
    recent_winners: VecDeque<Item>,
    recent_capacity: usize,
    exclude_most_recent: bool,
    params: SpinParams,
}

impl Default for SpinSession {
    fn default() -> Self {
        Self::new(SpinParams::default())
    }
}

impl SpinSession {
    pub fn new(params: SpinParams) -> Self {
        Self {
            cumulative_angle: 0.0,
            phase: Phase::Idle,
            last_winner: None,
            recent_winners: VecDeque::with_capacity(defaults::RECENT_WINNERS_CAPACITY),
            recent_capacity: defaults::RECENT_WINNERS_CAPACITY,
            exclude_most_recent: true,
            params,
        }
    }

    pub fn with_recent_capacity(mut self, capacity: usize) -> Self {
        self.recent_capacity = capacity.max(1);
        self.recent_winners.truncate(self.recent_capacity);
        self
    }

    /// Total rotation applied so far. While spinning this is already the
    /// planned end angle, which is what the wheel animates toward.
    pub fn cumulative_angle(&self) -> f64 {
        self.cumulative_angle
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, Phase::Spinning(_))
    }

    pub fn planned(&self) -> Option<&PlannedSpin> {
        match &self.phase {
            Phase::Spinning(planned) => Some(planned),
            Phase::Idle => None,
        }
    }

    /// Winner of the last resolved spin. Cleared while a new spin is running.
    pub fn winner(&self) -> Option<&Item> {
        match self.phase {
            Phase::Idle => self.last_winner.as_ref(),
            Phase::Spinning(_) => None,
        }
    }

    pub fn last_winner(&self) -> Option<&Item> {
        self.last_winner.as_ref()
    }

    /// Most recent first.
    pub fn recent_winners(&self) -> impl ExactSizeIterator<Item = &Item> {
        self.recent_winners.iter()
    }

    pub fn exclude_most_recent(&self) -> bool {
        self.exclude_most_recent
    }

    pub fn set_exclude_most_recent(&mut self, exclude: bool) {
        self.exclude_most_recent = exclude;
    }

    /// Items the wheel should currently be drawn with: the spin's snapshot
    /// while spinning, `live` otherwise.
    pub fn wheel_items<'a>(&'a self, live: &'a [Item]) -> &'a [Item] {
        match &self.phase {
            Phase::Spinning(planned) => &planned.items,
            Phase::Idle => live,
        }
    }

    /// Start a spin over `items`, choosing the target at random.
    pub fn spin<R: Rng + ?Sized>(
        &mut self,
        items: &[Item],
        rng: &mut R,
    ) -> Result<&PlannedSpin, SpinError> {
        self.ensure_can_spin(items)?;

        let segment_count = segment_count_for(items.len());
        let target = choose_target(
            items,
            self.exclude_most_recent,
            self.last_winner.as_ref(),
            rng,
        )
        .ok_or(SpinError::NoItems)?;
        let plan = plan_spin(self.cumulative_angle, target, segment_count, &self.params, rng);

        self.begin(items, plan)
    }

    /// Start a spin with a plan decided elsewhere.
    ///
    /// The plan is rebased onto the current angle. The target is clamped to the
    /// last slice, turns into [`SpinParams::full_turns_range`] and jitter to
    /// less than half a slice, so the wheel still moves forward and lands on
    /// the target.
    pub fn spin_planned(
        &mut self,
        items: &[Item],
        target_index: usize,
        turns: u32,
        jitter: f64,
    ) -> Result<&PlannedSpin, SpinError> {
        self.ensure_can_spin(items)?;
        let segment_count = segment_count_for(items.len());
        let target_index = target_index.min(segment_count - 1);
        let (turns, jitter) = clamp_plan_inputs(turns, jitter, segment_count, &self.params);
        let plan = SpinPlan::forced(
            self.cumulative_angle,
            target_index,
            segment_count,
            turns,
            jitter,
            self.params.pointer_reference_deg,
        );
        self.begin(items, plan)
    }

    /// Finish the spin in flight and record its winner.
    pub fn resolve_spin(&mut self) -> Result<Item, SpinError> {
        let planned = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Spinning(planned) => planned,
            Phase::Idle => return Err(SpinError::NotSpinning),
        };

        let index = index_under_pointer(
            planned.plan.to_angle(),
            planned.segment_count(),
            self.params.pointer_reference_deg,
        );
        let winner = planned.items[index].clone();
        if index != planned.plan.target_index {
            debug!(
                "Resolved slice {} differs from planned target {}",
                index, planned.plan.target_index
            );
        }

        self.recent_winners.push_front(winner.clone());
        self.recent_winners.truncate(self.recent_capacity);
        self.last_winner = Some(winner.clone());

        info!("Spin resolved: '{}' at {:.2}°", winner, self.cumulative_angle);
        Ok(winner)
    }

    fn ensure_can_spin(&self, items: &[Item]) -> Result<(), SpinError> {
        if self.is_spinning() {
            return Err(SpinError::AlreadySpinning);
        }
        if items.is_empty() {
            return Err(SpinError::NoItems);
        }
        Ok(())
    }

    fn begin(&mut self, items: &[Item], plan: SpinPlan) -> Result<&PlannedSpin, SpinError> {
        info!(
            "Spinning {} items toward '{}' ({:.2}° -> {:.2}°)",
            items.len(),
            items[plan.target_index],
            plan.from_angle,
            plan.to_angle()
        );

        self.cumulative_angle = plan.to_angle();
        self.phase = Phase::Spinning(PlannedSpin {
            items: items.to_vec(),
            plan,
        });

        self.planned().ok_or(SpinError::NotSpinning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_items;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spin_on_empty_list_is_noop() {
        let mut session = SpinSession::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(session.spin(&[], &mut rng).unwrap_err(), SpinError::NoItems);
        assert!(!session.is_spinning());
        assert!(session.winner().is_none());
        assert_eq!(session.cumulative_angle(), 0.0);
    }

    #[test]
    fn test_spin_while_spinning_is_rejected() {
        let items = parse_items("A, B, C");
        let mut session = SpinSession::default();
        let mut rng = StdRng::seed_from_u64(2);
        session.spin(&items, &mut rng).unwrap();
        let angle = session.cumulative_angle();

        assert_eq!(
            session.spin(&items, &mut rng).unwrap_err(),
            SpinError::AlreadySpinning
        );
        assert_eq!(session.cumulative_angle(), angle);
    }

    #[test]
    fn test_resolve_when_idle_is_rejected() {
        let mut session = SpinSession::default();
        assert_eq!(session.resolve_spin().unwrap_err(), SpinError::NotSpinning);
    }

    #[test]
    fn test_duplicate_completion_signal_is_ignored() {
        let items = parse_items("A, B");
        let mut session = SpinSession::default();
        let mut rng = StdRng::seed_from_u64(4);
        session.spin(&items, &mut rng).unwrap();
        session.resolve_spin().unwrap();
        assert_eq!(session.resolve_spin().unwrap_err(), SpinError::NotSpinning);
        assert_eq!(session.recent_winners().len(), 1);
    }

    #[test]
    fn test_winner_hidden_while_spinning() {
        let items = parse_items("A, B");
        let mut session = SpinSession::default();
        let mut rng = StdRng::seed_from_u64(6);
        session.spin(&items, &mut rng).unwrap();
        session.resolve_spin().unwrap();
        assert!(session.winner().is_some());

        session.spin(&items, &mut rng).unwrap();
        assert!(session.winner().is_none());
        assert!(session.last_winner().is_some());
    }

    #[test]
    fn test_resolves_against_snapshot() {
        let items = parse_items("Kimchi, Pasta, Ramen, Salad");
        let mut session = SpinSession::default();
        session.spin_planned(&items, 2, 6, 0.0).unwrap();

        let edited = parse_items("Tacos");
        assert_eq!(session.wheel_items(&edited), items.as_slice());

        assert_eq!(session.resolve_spin().unwrap(), "Ramen");
        assert_eq!(session.wheel_items(&edited), edited.as_slice());
    }

    #[test]
    fn test_recent_winners_bounded_most_recent_first() {
        let items = parse_items("A, B, C, D");
        let mut session = SpinSession::default().with_recent_capacity(3);
        session.set_exclude_most_recent(false);
        for target in [0, 1, 2, 3] {
            session.spin_planned(&items, target, 6, 0.0).unwrap();
            session.resolve_spin().unwrap();
        }
        let recent: Vec<&str> = session.recent_winners().map(Item::label).collect();
        assert_eq!(recent, ["D", "C", "B"]);
    }

    #[test]
    fn test_default_recent_capacity() {
        let items = parse_items("A, B");
        let mut session = SpinSession::default();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            session.spin(&items, &mut rng).unwrap();
            session.resolve_spin().unwrap();
        }
        assert_eq!(session.recent_winners().len(), defaults::RECENT_WINNERS_CAPACITY);
    }

    #[test]
    fn test_spin_planned_clamps_target() {
        let items = parse_items("A, B");
        let mut session = SpinSession::default();
        let planned = session.spin_planned(&items, 9, 6, 0.0).unwrap();
        assert_eq!(planned.plan.target_index, 1);
        assert_eq!(planned.target(), "B");
    }

    #[test]
    fn test_spin_planned_clamps_turns_and_jitter() {
        let items = parse_items("Kimchi, Pasta, Ramen, Salad");
        let mut session = SpinSession::default();

        let planned = session.spin_planned(&items, 2, 0, 0.0).unwrap();
        assert_eq!(planned.plan.full_turns, 6.0 * 360.0);
        assert_eq!(session.cumulative_angle(), 2025.0);
        assert_eq!(session.resolve_spin().unwrap(), "Ramen");

        let before = session.cumulative_angle();
        let planned = session.spin_planned(&items, 2, 6, 100.0).unwrap();
        assert!(planned.plan.jitter < 45.0);
        assert!(session.cumulative_angle() > before);
        assert_eq!(session.resolve_spin().unwrap(), "Ramen");
    }

    #[test]
    fn test_zero_turn_params_keep_angle_increasing() {
        let items = parse_items("Kimchi, Pasta, Ramen, Salad");
        let mut session = SpinSession::new(SpinParams {
            min_full_turns: 0,
            max_full_turns: 0,
            ..SpinParams::default()
        });
        let mut rng = StdRng::seed_from_u64(13);
        for target in [2, 0, 3, 1, 2] {
            let before = session.cumulative_angle();
            session.spin_planned(&items, target, 0, -100.0).unwrap();
            assert!(session.cumulative_angle() > before);
            assert_eq!(session.resolve_spin().unwrap(), items[target]);

            let before = session.cumulative_angle();
            session.spin(&items, &mut rng).unwrap();
            assert!(session.cumulative_angle() > before);
            session.resolve_spin().unwrap();
        }
    }
}
