//! End-to-end runs driven tick by tick

use arcade_runner::consts::*;
use arcade_runner::sim::{
    Archetype, GameEvent, GamePhase, GameState, TickInput, obstacle, scoring, tick,
};
use arcade_runner::{Clock, Tuning};

const IDLE: TickInput = TickInput {
    activate: false,
    restart: false,
};
const ACTIVATE: TickInput = TickInput {
    activate: true,
    restart: false,
};

/// Default balance with natural spawning pushed far out, so tests control
/// every obstacle on the field
fn quiet_tuning() -> Tuning {
    Tuning {
        initial_spawn_interval: 1_000_000,
        ..Tuning::default()
    }
}

fn started(tuning: Tuning) -> GameState {
    let mut state = GameState::new(2024, tuning);
    tick(&mut state, &ACTIVATE);
    assert_eq!(state.phase(), GamePhase::Playing);
    state
}

#[test]
fn scenario_a_idle_run_keeps_score_and_lives() {
    let mut state = started(Tuning::default());
    for _ in 0..120 {
        tick(&mut state, &IDLE);
    }
    assert!(state.obstacles.is_empty());
    assert_eq!(state.run.score, 0);
    assert_eq!(state.run.lives, 3);
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.time_ticks, 120);
}

#[test]
fn scenario_b_single_obstacle_passage() {
    let mut state = started(quiet_tuning());
    let id = state.push_obstacle(Archetype::Crate, 900.0);
    assert_eq!(state.obstacles[0].size.x, 40.0);
    let player_x = state.player.pos.x;
    assert_eq!(player_x, 50.0);
    let speed_before = state.run.speed;

    // Player stays put; only the generator and scoring run
    loop {
        obstacle::advance_and_cull(&mut state.obstacles, state.run.speed);
        let passed = scoring::update(
            &mut state.run,
            &mut state.obstacles,
            player_x,
            &state.tuning,
        );
        let o = &state.obstacles[0];
        if o.pos.x + 40.0 < 50.0 {
            assert_eq!(passed, vec![id]);
            break;
        }
        assert!(passed.is_empty());
        assert!(!o.passed);
    }

    assert_eq!(state.run.score, 1);
    assert_eq!(state.run.speed, speed_before + state.tuning.speed_step);
    assert!(state.obstacles[0].passed);
}

/// Jump whenever the next obstacle is 60 units or less from the player
fn jump_over(state: &GameState) -> TickInput {
    let lead = state.player.leading_edge();
    let due = !state.player.airborne
        && state
            .obstacles
            .iter()
            .any(|o| !o.passed && o.pos.x >= lead && o.pos.x - lead <= 60.0);
    TickInput {
        activate: due,
        restart: false,
    }
}

#[test]
fn clean_passages_score_one_each() {
    let mut state = started(quiet_tuning());
    let n = 5;
    for i in 0..n {
        state.push_obstacle(Archetype::Crate, PLAYFIELD_WIDTH + 450.0 * i as f32);
    }

    let mut input = IDLE;
    let mut ticks = 0;
    while state.run.score < n {
        tick(&mut state, &input);
        input = jump_over(&state);
        assert_eq!(state.run.lives, 3, "collided at tick {}", state.time_ticks);
        ticks += 1;
        assert!(ticks < 5_000, "obstacles never passed");
    }
    assert_eq!(state.run.score, n);
    assert_eq!(
        state.run.speed,
        state.tuning.initial_speed + n as f32 * state.tuning.speed_step
    );
}

#[test]
fn scenario_c_simultaneous_overlaps_cost_one_life() {
    let mut state = started(quiet_tuning());
    state.push_obstacle(Archetype::Crate, 60.0);
    state.push_obstacle(Archetype::Spike, 70.0);

    tick(&mut state, &IDLE);

    assert_eq!(state.run.lives, 2);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(state.hit_active());
    let hits = state
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::Hit { .. }))
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn scenario_d_three_hits_end_the_run() {
    let mut state = started(quiet_tuning());
    for expected_lives in [2, 1, 0] {
        state.push_obstacle(Archetype::Wall, 60.0);
        tick(&mut state, &IDLE);
        assert_eq!(state.run.lives, expected_lives);
    }
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert!(
        state
            .events
            .contains(&GameEvent::GameOver { final_score: 0 })
    );

    // Nothing simulates until restart
    let ticks = state.time_ticks;
    let player = state.player.clone();
    state.push_obstacle(Archetype::Crate, 300.0);
    for _ in 0..100 {
        tick(&mut state, &IDLE);
    }
    assert_eq!(state.time_ticks, ticks);
    assert_eq!(state.player, player);
    assert_eq!(state.obstacles[0].pos.x, 300.0);
    assert_eq!(state.run.lives, 0);

    tick(
        &mut state,
        &TickInput {
            activate: false,
            restart: true,
        },
    );
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.run.lives, 3);
}

#[test]
fn restart_is_idempotent() {
    let mut clock = Clock::new(77, Tuning::default());
    let signals = clock.signals();

    signals.activate();
    let initial = clock.step();
    assert_eq!(initial.phase, GamePhase::Playing);
    assert_eq!(initial.score, 0);
    assert_eq!(initial.lives, 3);
    assert!(initial.obstacles.is_empty());

    for round in 0..4 {
        // Play for a while, jumping now and then
        for i in 0..(150 + round * 40) {
            if i % 45 == 0 {
                signals.activate();
            }
            clock.step();
        }
        assert_eq!(clock.state().phase(), GamePhase::Playing);
        signals.restart();
        assert_eq!(clock.step(), initial);
    }
}

#[test]
fn same_seed_same_frames() {
    let run = |seed: u64| {
        let mut clock = Clock::new(seed, Tuning::default());
        let signals = clock.signals();
        let mut frames = Vec::new();
        for i in 0..3_000u64 {
            if i % 23 == 0 {
                signals.activate();
            }
            clock.frame(&mut frames);
        }
        frames
    };
    assert_eq!(run(31337), run(31337));
}

#[test]
fn spawns_accelerate_to_floor() {
    let mut state = started(Tuning::default());
    let mut spawn_ticks = Vec::new();
    for _ in 0..20_000 {
        tick(&mut state, &IDLE);
        if state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Spawned { .. }))
        {
            spawn_ticks.push(state.time_ticks);
        }
        if state.phase() == GamePhase::GameOver {
            break;
        }
        // Keep the player alive by clearing anything that got close
        state.obstacles.retain(|o| o.pos.x > 200.0);
    }
    let gaps: Vec<u64> = spawn_ticks.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(gaps.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(*gaps.last().unwrap(), 61);
    assert_eq!(state.run.spawn_interval, 60);
}

#[test]
fn fast_scroll_still_scores_every_obstacle() {
    let mut state = started(quiet_tuning());
    state.run.speed = 60.0;
    // Keep the player high above the field so nothing collides
    state.player.pos.y = 0.0;
    state.player.airborne = true;

    let id = state.push_obstacle(Archetype::Crate, 135.0);
    tick(&mut state, &IDLE);
    assert_eq!(state.obstacles[0].pos.x, 75.0);
    tick(&mut state, &IDLE);
    // Trailing edge 55: not yet past the player
    assert_eq!(state.obstacles[0].pos.x, 15.0);
    assert_eq!(state.run.score, 0);

    // One step carries the trailing edge from 55 to -5
    tick(&mut state, &IDLE);
    assert_eq!(state.run.score, 1);
    assert!(state.events.contains(&GameEvent::Passed { id, score: 1 }));

    tick(&mut state, &IDLE);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.run.score, 1);
    assert_eq!(state.run.lives, 3);
}
