use lunch_roulette::geometry::{degrees_per_segment, index_under_pointer, target_rotation_for_index};
use lunch_roulette::planner::{draw_jitter, SpinPlan};
use lunch_roulette::{parse_items, Item, SpinError, SpinSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

const POINTER: f64 = 90.0;

#[test]
fn test_end_to_end_forced_ramen() {
    let items = parse_items("Kimchi, Pasta, Ramen, Salad");
    let mut session = SpinSession::default();
    let before = session.cumulative_angle();

    let planned = session.spin_planned(&items, 2, 6, 0.0).unwrap();
    assert_eq!(planned.segment_count(), 4);
    assert_eq!(planned.plan.delta(), 2025.0);
    assert_eq!(session.cumulative_angle() - before, 2025.0);
    assert!(session.is_spinning());

    let winner = session.resolve_spin().unwrap();
    assert_eq!(winner, "Ramen");
    assert_eq!(session.winner().map(Item::label), Some("Ramen"));
    assert!(!session.is_spinning());
}

#[test]
fn test_forced_plan_matches_geometry() {
    let plan = SpinPlan::forced(0.0, 2, 4, 6, 0.0, POINTER);
    assert_eq!(
        plan.delta(),
        2160.0 + target_rotation_for_index(2, 4, POINTER)
    );
    assert_eq!(index_under_pointer(plan.to_angle(), 4, POINTER), 2);
}

#[test]
fn test_non_repeat_never_picks_last_winner() {
    let items = parse_items("A, B, C");
    let b = Item::new("B").unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..1000 {
        let mut session = SpinSession::default();
        session.spin_planned(&items, 1, 6, 0.0).unwrap();
        assert_eq!(session.resolve_spin().unwrap(), b);

        session.spin(&items, &mut rng).unwrap();
        assert_ne!(session.resolve_spin().unwrap(), b);
    }
}

#[test]
fn test_non_repeat_across_consecutive_spins() {
    let items = parse_items("A, B, C");
    let mut session = SpinSession::default();
    let mut rng = StdRng::seed_from_u64(77);

    session.spin(&items, &mut rng).unwrap();
    let mut previous = session.resolve_spin().unwrap();
    for _ in 0..1000 {
        session.spin(&items, &mut rng).unwrap();
        let winner = session.resolve_spin().unwrap();
        assert_ne!(winner, previous);
        previous = winner;
    }
}

#[test]
fn test_degenerate_pool_still_spins() {
    let items = parse_items("A, A");
    let mut session = SpinSession::default();
    let mut rng = StdRng::seed_from_u64(3);

    session.spin_planned(&items, 0, 6, 0.0).unwrap();
    assert_eq!(session.resolve_spin().unwrap(), "A");

    assert!(session.spin(&items, &mut rng).is_ok());
    assert_eq!(session.resolve_spin().unwrap(), "A");
}

#[test]
fn test_angle_is_monotonic_with_full_turns() {
    let lists = [
        parse_items("Kimchi, Pasta, Ramen, Salad"),
        parse_items("Solo"),
        parse_items("A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R"),
        parse_items("A, B, A"),
    ];
    let mut session = SpinSession::default();
    let mut rng = StdRng::seed_from_u64(99);
    let mut last = session.cumulative_angle();

    for round in 0..400 {
        let items = &lists[round % lists.len()];
        let planned = session.spin(items, &mut rng).unwrap();
        assert!(planned.plan.full_turns >= 6.0 * 360.0);
        assert!(planned.plan.full_turns <= 8.0 * 360.0);
        assert_eq!(
            index_under_pointer(planned.plan.to_angle(), items.len(), POINTER),
            planned.plan.target_index
        );

        let angle = session.cumulative_angle();
        assert!(angle > last, "round {round}: {angle} <= {last}");
        last = angle;
        session.resolve_spin().unwrap();
        assert_eq!(session.cumulative_angle(), last);
    }
}

#[test]
fn test_jitter_alone_never_changes_slice() {
    let mut rng = StdRng::seed_from_u64(18);
    for n in 1..=18 {
        for i in 0..n {
            for _ in 0..50 {
                let jitter = draw_jitter(n, 0.1, &mut rng);
                assert!(jitter.abs() < 0.5 * degrees_per_segment(n));
                let angle = target_rotation_for_index(i, n, POINTER) + jitter;
                assert_eq!(index_under_pointer(angle, n, POINTER), i);
            }
        }
    }
}

#[test]
fn test_empty_input_never_spins() {
    let items = parse_items(" , ");
    let mut session = SpinSession::default();
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(session.spin(&items, &mut rng).unwrap_err(), SpinError::NoItems);
    assert!(!session.is_spinning());
    assert!(session.winner().is_none());
    assert_eq!(session.recent_winners().len(), 0);
    assert_eq!(session.resolve_spin().unwrap_err(), SpinError::NotSpinning);
}

#[test]
fn test_mid_spin_edit_resolves_original_list() {
    let items = parse_items("Kimchi, Pasta, Ramen, Salad");
    let mut session = SpinSession::default();
    let mut rng = StdRng::seed_from_u64(12);
    let target = session.spin(&items, &mut rng).unwrap().target().clone();

    // The user rewrites the list while the wheel is turning
    let edited = parse_items("Pizza, Sushi");
    assert_eq!(session.wheel_items(&edited).len(), 4);

    assert_eq!(session.resolve_spin().unwrap(), target);
}
