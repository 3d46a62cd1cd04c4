//! Whole-round behaviour through the public API

use balloon_pop::sim::{self, GameEvent, Phase, Session};
use balloon_pop::{Game, GameConfig};
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[test]
fn untouched_round_misses_everything_and_scores_zero() {
    let mut game = Game::new(GameConfig::default(), 42).unwrap();
    game.start();

    let mut spawned = 0;
    let mut missed = 0;
    let mut ended = None;
    for event in game.advance(30_000) {
        match event {
            GameEvent::Spawned { .. } => spawned += 1,
            GameEvent::Missed { .. } => missed += 1,
            GameEvent::Ended { final_score } => ended = Some(final_score),
            _ => {}
        }
    }

    let snap = game.snapshot();
    assert_eq!(ended, Some(0));
    assert_eq!(snap.final_score, Some(0));
    assert_eq!(snap.phase, Phase::GameOver);
    assert_eq!(snap.missed_count, missed);
    assert_eq!(snap.popped_count, 0);
    // Spawn at 30s loses the tie to the final tick
    assert_eq!(spawned, 14);
    assert_eq!(snap.balloons.len() as u32 + missed, spawned);
}

#[test]
fn tapping_every_balloon_scores_each_one() {
    let mut game = Game::new(GameConfig::default(), 7).unwrap();
    game.start();

    let mut popped = 0;
    while game.is_running() {
        for event in game.advance(500) {
            if let GameEvent::Spawned { id } = event {
                assert_eq!(game.tap(id), Some(GameEvent::Popped { id }));
                popped += 1;
            }
        }
    }

    let snap = game.snapshot();
    assert_eq!(snap.popped_count, popped);
    assert_eq!(snap.missed_count, 0);
    assert_eq!(snap.final_score, Some(popped));
}

#[test]
fn tap_at_hits_the_balloon_under_the_finger() {
    let mut game = Game::new(GameConfig::default(), 3).unwrap();
    game.start();
    game.advance(2_000);

    let target = game.session().balloons[0].clone();
    let centre = target.pos + Vec2::splat(target.size / 2.0);
    assert_eq!(
        game.tap_at(centre),
        Some(GameEvent::Popped { id: target.id })
    );
    assert_eq!(game.tap_at(centre), None);
}

#[test]
fn spawn_cap_holds_when_balloons_never_leave() {
    let config = GameConfig {
        // Too slow to reach the top within the round
        min_speed: 0.01,
        max_speed: 0.02,
        ..GameConfig::default()
    };
    let mut game = Game::new(config, 11).unwrap();
    game.start();
    for _ in 0..30 {
        game.advance(1_000);
        assert!(game.session().balloons.len() <= 8);
    }
    assert_eq!(game.session().balloons.len(), 8);
}

#[test]
fn pop_one_then_let_two_escape() {
    let mut session = Session::new(GameConfig::default());
    let mut rng = Pcg32::seed_from_u64(1);
    sim::start_session(&mut session);

    let ids: Vec<u32> = (0..3)
        .map(|_| sim::on_spawn_tick(&mut session, &mut rng).unwrap())
        .collect();
    assert!(sim::on_object_tapped(&mut session, ids[0]));

    let mut escaped = Vec::new();
    while !session.balloons.is_empty() {
        escaped.extend(sim::on_motion_tick(&mut session));
    }

    escaped.sort_unstable();
    assert_eq!(escaped, vec![ids[1], ids[2]]);
    assert_eq!(session.popped_count, 1);
    assert_eq!(session.missed_count, 2);
    assert_eq!(session.score, 0);
}

#[test]
fn play_again_resets_after_a_full_round() {
    let mut game = Game::new(GameConfig::default(), 5).unwrap();
    game.start();
    game.advance(30_000);
    assert!(!game.is_running());

    assert_eq!(game.play_again(), Some(GameEvent::Started));
    let snap = game.snapshot();
    assert_eq!(
        (
            snap.score,
            snap.missed_count,
            snap.popped_count,
            snap.time_remaining,
            snap.running
        ),
        (0, 0, 0, 30, true)
    );
    assert_eq!(snap.final_score, None);
}

#[test]
fn custom_round_length_from_config() {
    let config = GameConfig::from_json_str(r#"{"sessionDurationSeconds": 5}"#).unwrap();
    let mut game = Game::new(config, 9).unwrap();
    game.start();
    game.advance(4_999);
    assert!(game.is_running());
    game.advance(1);
    assert!(!game.is_running());
    assert_eq!(game.snapshot().time_remaining, 0);
}

#[test]
fn inverted_speed_range_is_refused_before_any_spawn() {
    let config = GameConfig {
        min_speed: 10.0,
        max_speed: 5.0,
        ..GameConfig::default()
    };
    assert!(Game::new(config, 1).is_err());
}
