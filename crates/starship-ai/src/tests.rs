use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starship_core::angles;
use starship_core::config::EnemyTuning;
use starship_core::constants::*;
use starship_core::types::Vector2;

use crate::gunnery::{self, FiringGate};
use crate::pilot::{self, RetargetContext};

fn context(distance: f64, engaged: bool, slot_free: bool) -> RetargetContext {
    let player = Vector2::new(1280.0, 800.0);
    RetargetContext {
        position: Vector2::new(player.x - distance, player.y),
        player_position: player,
        target_angle: 123.0,
        engaged,
        slot_free,
    }
}

// ---- Re-targeting ----

#[test]
fn test_retarget_in_range_with_free_slot_engages() {
    let tuning = EnemyTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let ctx = context(500.0, false, true);
    let update = pilot::retarget(&ctx, &tuning, &mut rng);
    assert!(update.engaged);
    assert!((0.0..360.0).contains(&update.target_angle));
}

#[test]
fn test_retarget_heads_for_roam_point_around_player() {
    let tuning = EnemyTuning::default();
    let ctx = context(500.0, false, true);

    // Replay the same draws to reconstruct the roam destination.
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let update = pilot::retarget(&ctx, &tuning, &mut rng);

    let mut replay = ChaCha8Rng::seed_from_u64(9);
    let heading = rand::Rng::gen_range(&mut replay, 0..360) as f64;
    let dist = rand::Rng::gen_range(&mut replay, -ROAM_DISTANCE..=ROAM_DISTANCE) as f64;
    let destination = ctx.player_position + angles::offset(heading, dist);
    let expected = ctx.position.angle_to(&destination);

    assert!((update.target_angle - expected).abs() < 1e-9);
}

#[test]
fn test_retarget_capacity_full_keeps_heading_and_stays_disengaged() {
    let tuning = EnemyTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let ctx = context(500.0, false, false);
    let update = pilot::retarget(&ctx, &tuning, &mut rng);
    assert!(!update.engaged);
    assert_eq!(update.target_angle, 123.0);
}

#[test]
fn test_retarget_already_engaged_exempt_from_capacity() {
    let tuning = EnemyTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let ctx = context(500.0, true, false);
    let update = pilot::retarget(&ctx, &tuning, &mut rng);
    assert!(update.engaged, "engaged enemies are never evicted by the cap");
}

#[test]
fn test_retarget_out_of_range_disengages_and_wanders() {
    let tuning = EnemyTuning::default();
    let mut headings = Vec::new();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ctx = context(ENGAGE_RADIUS, true, true);
        let update = pilot::retarget(&ctx, &tuning, &mut rng);
        assert!(!update.engaged);
        assert_eq!(update.target_angle, update.target_angle.round());
        assert!((0.0..360.0).contains(&update.target_angle));
        headings.push(update.target_angle);
    }
    headings.dedup();
    assert!(headings.len() > 1, "wander headings should vary with the seed");
}

#[test]
fn test_retarget_deterministic_for_seed() {
    let tuning = EnemyTuning::default();
    let ctx = context(300.0, false, true);
    let a = pilot::retarget(&ctx, &tuning, &mut ChaCha8Rng::seed_from_u64(77));
    let b = pilot::retarget(&ctx, &tuning, &mut ChaCha8Rng::seed_from_u64(77));
    assert_eq!(a, b);
}

// ---- Flee ----

#[test]
fn test_flee_points_away_from_player() {
    let player = Vector2::new(1000.0, 1000.0);
    // Enemy 50 units left of the player: player is at heading 90, flee is 270.
    let enemy = Vector2::new(950.0, 1000.0);
    let heading = pilot::flee_heading(enemy, player, TOO_CLOSE_RADIUS).unwrap();
    assert!((heading - 270.0).abs() < 1e-9);
}

#[test]
fn test_flee_wraps_past_360() {
    let player = Vector2::new(1000.0, 1000.0);
    // Player is at heading 270 from the enemy; flee heading is 90.
    let enemy = Vector2::new(1050.0, 1000.0);
    let heading = pilot::flee_heading(enemy, player, TOO_CLOSE_RADIUS).unwrap();
    assert!((heading - 90.0).abs() < 1e-9);
}

#[test]
fn test_no_flee_outside_radius() {
    let player = Vector2::new(1000.0, 1000.0);
    let enemy = Vector2::new(1000.0, 1000.0 + TOO_CLOSE_RADIUS);
    assert!(pilot::flee_heading(enemy, player, TOO_CLOSE_RADIUS).is_none());
}

// ---- Edge escape ----

#[test]
fn test_edge_escape_points_back_toward_center() {
    let center = Vector2::new(1280.0, 800.0);
    // Stuck on the left seam: center lies at heading ~90.
    let position = Vector2::new(2.0, 800.0);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..200 {
        let heading = pilot::edge_escape_heading(position, center, EDGE_JITTER, &mut rng);
        let off = angles::diff(90.0, heading).abs();
        assert!(off <= EDGE_JITTER as f64 + 1e-9, "heading {heading} off by {off}");
    }
}

#[test]
fn test_edge_escape_normalizes() {
    let center = Vector2::new(1280.0, 800.0);
    // Stuck on the bottom seam: center lies at heading 0, jitter can go negative.
    let position = Vector2::new(1280.0, 1599.0);
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for _ in 0..200 {
        let heading = pilot::edge_escape_heading(position, center, EDGE_JITTER, &mut rng);
        assert!((0.0..360.0).contains(&heading));
    }
}

// ---- Gunnery ----

#[test]
fn test_gate_too_close_shoots_regardless_of_facing() {
    let tuning = EnemyTuning::default();
    let player = Vector2::new(1000.0, 1000.0);
    let enemy = Vector2::new(950.0, 1000.0);
    for facing in (0..360).step_by(15) {
        let gate = gunnery::evaluate(enemy, facing as f64, player, &tuning);
        assert!(gate.shoot, "facing {facing}");
        assert!(gate.start_charging, "facing {facing}");
    }
}

#[test]
fn test_gate_point_blank_charges_but_needs_aim_to_shoot() {
    let tuning = EnemyTuning::default();
    let player = Vector2::new(1000.0, 1000.0);
    // 150 units away, facing directly away (player at heading 90, facing 270).
    let enemy = Vector2::new(850.0, 1000.0);
    let gate = gunnery::evaluate(enemy, 270.0, player, &tuning);
    assert_eq!(
        gate,
        FiringGate {
            start_charging: true,
            shoot: false,
        }
    );
}

#[test]
fn test_gate_in_range_aim_tolerances() {
    let tuning = EnemyTuning::default();
    let player = Vector2::new(1000.0, 1000.0);
    let enemy = Vector2::new(500.0, 1000.0); // player at heading 90, 500 away

    let on_target = gunnery::evaluate(enemy, 95.0, player, &tuning);
    assert!(on_target.start_charging && on_target.shoot);

    let loose = gunnery::evaluate(enemy, 105.0, player, &tuning);
    assert!(loose.start_charging && !loose.shoot);

    let off = gunnery::evaluate(enemy, 120.0, player, &tuning);
    assert!(!off.start_charging && !off.shoot);
}

#[test]
fn test_gate_out_of_range_never_fires() {
    let tuning = EnemyTuning::default();
    let player = Vector2::new(2000.0, 1000.0);
    let enemy = Vector2::new(500.0, 1000.0);
    let gate = gunnery::evaluate(enemy, 90.0, player, &tuning);
    assert_eq!(gate, FiringGate::default());
}

#[test]
fn test_charge_and_release_cadence() {
    let tuning = EnemyTuning::default();
    let open = FiringGate {
        start_charging: true,
        shoot: true,
    };
    assert!(gunnery::should_begin_charge(open, false, 0, &tuning));
    assert!(gunnery::should_begin_charge(open, false, 30, &tuning));
    assert!(!gunnery::should_begin_charge(open, false, 31, &tuning));
    assert!(!gunnery::should_begin_charge(open, true, 30, &tuning));

    assert!(gunnery::should_release(open, true, 20, &tuning));
    assert!(!gunnery::should_release(open, true, 30, &tuning));
    assert!(!gunnery::should_release(open, false, 40, &tuning));
    assert!(!gunnery::should_release(FiringGate::default(), true, 40, &tuning));
}
