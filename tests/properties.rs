use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use space_dodge::consts::SIM_DT;
use space_dodge::sim::*;
use space_dodge::{Config, TravelAxis};

fn aabb() -> impl Strategy<Value = Aabb> {
    (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..200.0, 0.5f32..200.0)
        .prop_map(|(x, y, w, h)| Aabb::from_corner(Vec2::new(x, y), Vec2::new(w, h)))
}

fn axis() -> impl Strategy<Value = TravelAxis> {
    prop_oneof![Just(TravelAxis::Horizontal), Just(TravelAxis::Vertical)]
}

fn config_for(axis: TravelAxis) -> Config {
    match axis {
        TravelAxis::Horizontal => Config::sky_patrol(),
        TravelAxis::Vertical => Config::space_shootout(),
    }
}

// ── Collision ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn overlap_is_symmetric(a in aabb(), b in aabb()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn adjacent_boxes_never_overlap(a in aabb(), h in 0.5f32..200.0) {
        // Same-height box placed flush against the right edge
        let b = Aabb::new(Vec2::new(a.max.x, a.min.y), Vec2::new(a.max.x + 10.0, a.min.y + h));
        prop_assert!(!a.overlaps(&b));
        prop_assert!(!b.overlaps(&a));
    }

    #[test]
    fn player_hit_matches_pairwise_overlap(
        p in aabb(),
        boxes in prop::collection::vec(aabb(), 0..8),
    ) {
        let player = Entity::new(0, Category::Player, p.min, p.size());
        let enemies: Vec<Entity> = boxes
            .iter()
            .enumerate()
            .map(|(i, b)| Entity::new(i as u32 + 1, Category::Enemy, b.min, b.size()))
            .collect();
        let expected = enemies.iter().any(|e| player.aabb().overlaps(&e.aabb()));
        prop_assert_eq!(player_hits_any(&player, &enemies), expected);
    }
}

#[test]
fn touching_and_overlapping_examples() {
    let a = Aabb::from_corner(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let touching = Aabb::from_corner(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
    let overlapping = Aabb::from_corner(Vec2::new(5.0, 0.0), Vec2::new(10.0, 10.0));
    assert!(!a.overlaps(&touching));
    assert!(a.overlaps(&overlapping));
}

// ── Registry ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prune_leaves_no_exited_entity(
        axis in axis(),
        spots in prop::collection::vec((-300.0f32..900.0, -300.0f32..900.0, -12.0f32..0.0), 0..40),
    ) {
        let mut reg = EntityRegistry::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        for (x, y, speed) in spots {
            let vel = match axis {
                TravelAxis::Horizontal => Vec2::new(speed, 0.0),
                TravelAxis::Vertical => Vec2::new(0.0, speed),
            };
            reg.spawn(Category::Enemy, Vec2::new(x, y), Vec2::new(30.0, 15.0), vel);
        }
        let before = reg.count();

        reg.advance();
        let removed = reg.prune_offscreen(axis);

        prop_assert_eq!(reg.count(), before - removed);
        prop_assert!(reg.enemies().all(|e| !e.has_exited(axis)));
    }
}

#[test]
fn clamp_top_example() {
    let mut reg = EntityRegistry::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 40.0));
    reg.player_mut().set_top(850.0);
    reg.clamp_player_to_viewport(Vec2::new(800.0, 800.0), 10.0);
    assert_eq!(reg.player().top(), 790.0);
}

// ── Spawning ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn n_spawn_ticks_make_n_entities_outside(axis in axis(), n in 0u32..60, seed in any::<u64>()) {
        let config = config_for(axis);
        let mut reg = EntityRegistry::new(Vec2::new(10.0, 10.0), config.player_size);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut scheduler = SpawnScheduler::new(&config);

        let mut fired = 0;
        for _ in 0..n {
            let dt = config.enemy_spawn_interval;
            fired += scheduler.tick_enemy_spawn(dt, &mut reg, &config, &mut rng);
        }

        prop_assert_eq!(fired, n);
        prop_assert_eq!(reg.enemy_count(), n as usize);
        prop_assert_eq!(reg.decoration_count(), 0);
        for e in reg.enemies() {
            prop_assert!(e.is_outside(config.viewport()));
            prop_assert!(config.enemy_speed_range.contains((e.vel.x + e.vel.y).abs()));
        }
    }

    #[test]
    fn n_decoration_ticks_make_n_decorations_outside(
        axis in axis(),
        n in 0u32..40,
        seed in any::<u64>(),
    ) {
        let config = config_for(axis);
        let mut reg = EntityRegistry::new(Vec2::new(10.0, 10.0), config.player_size);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut scheduler = SpawnScheduler::new(&config);

        let mut fired = 0;
        for _ in 0..n {
            let dt = config.decoration_spawn_interval;
            fired += scheduler.tick_decoration_spawn(dt, &mut reg, &config, &mut rng);
        }

        prop_assert_eq!(fired, n);
        prop_assert_eq!(reg.decoration_count(), n as usize);
        prop_assert_eq!(reg.enemy_count(), 0);
        for d in reg.decorations() {
            prop_assert!(d.is_outside(config.viewport()));
            prop_assert!(config.decoration_speed_range.contains((d.vel.x + d.vel.y).abs()));
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pause_round_trip_keeps_elapsed(axis in axis(), before in 0usize..60, paused in 0usize..300) {
        let mut session = GameSession::with_seed(config_for(axis), 42).unwrap();
        for _ in 0..before {
            tick(&mut session, SIM_DT);
        }
        prop_assume!(session.is_playing());
        let elapsed = session.elapsed;

        key_down(&mut session, Key::Pause);
        for _ in 0..paused {
            tick(&mut session, SIM_DT);
        }
        key_down(&mut session, Key::Pause);

        prop_assert_eq!(session.phase, GamePhase::Playing);
        prop_assert_eq!(session.elapsed, elapsed);
    }

    #[test]
    fn game_over_is_frozen(seed in any::<u64>(), extra in 1usize..50) {
        let mut session = GameSession::with_seed(Config::default(), seed).unwrap();
        let at = session.registry.player().pos;
        session.registry.spawn(Category::Enemy, at, Vec2::new(5.0, 5.0), Vec2::ZERO);
        tick(&mut session, SIM_DT);
        prop_assert!(session.is_game_over());

        let elapsed = session.elapsed;
        let snapshot: Vec<(u32, Vec2)> = session.registry.all().map(|e| (e.id, e.pos)).collect();
        for _ in 0..extra {
            key_down(&mut session, Key::Down);
            tick(&mut session, 0.5);
        }
        let after: Vec<(u32, Vec2)> = session.registry.all().map(|e| (e.id, e.pos)).collect();
        prop_assert_eq!(session.elapsed, elapsed);
        prop_assert_eq!(snapshot, after);
    }
}

#[test]
fn survival_scores_ten_points_per_second() {
    let mut session = GameSession::with_seed(Config::default(), 7).unwrap();
    // Enemies cannot cross to the player's column within half a second
    for _ in 0..30 {
        tick(&mut session, SIM_DT);
    }
    assert!(session.is_playing());
    assert_eq!(session.score(), 5);
}

#[test]
fn confirm_only_quits_after_game_over() {
    let mut session = GameSession::new(Config::default()).unwrap();
    assert_eq!(key_down(&mut session, Key::Quit), InputOutcome::Quit);
    assert_eq!(key_down(&mut session, Key::Confirm), InputOutcome::Continue);
}
