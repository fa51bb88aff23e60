//! Per-frame update
//!
//! One tick advances the session by the elapsed time since the previous
//! frame and resolves collisions in a fixed priority order: paddle, then
//! every live target, then walls. The caller owns the frame clock and must
//! skip the first callback (no elapsed time is known yet).

use glam::DVec2;

use super::bounce::BounceDirection;
use super::state::{GameEvent, GameState, Session};

/// External inputs consumed once per tick.
///
/// The pointer sample is a single-slot, last-writer-wins cell: only the
/// latest position matters, no queueing. `start` carries the one-shot click
/// that gates New -> Active.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer position, fed to the paddle before the physics step
    pub pointer: Option<DVec2>,
    /// Start click observed since the last tick
    pub start: bool,
}

/// Advance the session by one frame.
///
/// Won and Lost are returned as-is until the caller restarts; the physics
/// step only runs while Active.
pub fn tick(session: &mut Session, input: &TickInput, elapsed_ns: f64) -> GameState {
    // Pointer tracking is live in every state, matching the board's
    // always-registered mouse-move handler.
    if let Some(pointer) = input.pointer {
        session.paddle.move_to(pointer.x, pointer.y);
    }

    match session.state {
        GameState::New => {
            if input.start {
                session.begin();
            }
            session.state
        }
        GameState::Active => {
            let next = step(session, elapsed_ns);
            session.state = next;
            next
        }
        done => done,
    }
}

/// One physics/collision step. Priority order is fixed: integrate, paddle
/// (top strip before bottom), targets (full scan), win check, walls
/// (left, right, top, bottom - first match only), loss check.
fn step(session: &mut Session, elapsed_ns: f64) -> GameState {
    session.ball.integrate(elapsed_ns);
    let ball_bounds = session.ball.bounds();

    // Paddle: the top strip wins when the ball straddles both.
    if session.paddle.top_strip().intersects(&ball_bounds) {
        session.ball.trigger_bounce(
            BounceDirection::NoChange,
            BounceDirection::Negative,
            &mut session.events,
        );
    } else if session.paddle.bottom_strip().intersects(&ball_bounds) {
        session.ball.trigger_bounce(
            BounceDirection::NoChange,
            BounceDirection::Positive,
            &mut session.events,
        );
    }

    // Targets: scan the whole live set, collect hits, remove afterwards so
    // every target is visited exactly once regardless of removals.
    let mut hits: Vec<usize> = Vec::new();
    for (index, target) in session.targets.iter().enumerate() {
        if target.test_collide(&mut session.ball, &mut session.events) {
            target.teleport(&mut session.events);
            hits.push(index);
        }
    }
    if !hits.is_empty() {
        log::debug!("collected {} target(s)", hits.len());
        let multiplier = session.config.speed_multiplier;
        for _ in &hits {
            session.ball.increase_speed(multiplier, multiplier);
        }
        let mut index = 0;
        session.targets.retain(|_| {
            let keep = !hits.contains(&index);
            index += 1;
            keep
        });
    }

    if session.targets.is_empty() {
        log::info!("grid cleared, session won");
        session.events.push(GameEvent::Win);
        return GameState::Won;
    }

    // Walls: only the first breached wall bounces this frame.
    if ball_bounds.min_x <= 0.0 {
        session.ball.trigger_bounce(
            BounceDirection::Positive,
            BounceDirection::NoChange,
            &mut session.events,
        );
    } else if ball_bounds.max_x >= session.config.board_width {
        session.ball.trigger_bounce(
            BounceDirection::Negative,
            BounceDirection::NoChange,
            &mut session.events,
        );
    } else if ball_bounds.min_y <= 0.0 {
        session.ball.trigger_bounce(
            BounceDirection::NoChange,
            BounceDirection::Positive,
            &mut session.events,
        );
    } else if ball_bounds.max_y >= session.config.board_height {
        session.ball.trigger_bounce(
            BounceDirection::NoChange,
            BounceDirection::Negative,
            &mut session.events,
        );
        session.lives -= 1;
        log::debug!("bottom wall missed, {} live(s) left", session.lives);
        if session.lives == 0 {
            log::info!("out of lives, session lost");
            session.events.push(GameEvent::Lose);
            return GameState::Lost;
        }
    }

    GameState::Active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn active_session() -> Session {
        let mut session = Session::new(GameConfig::default(), 12345);
        session.begin();
        session
    }

    #[test]
    fn test_new_waits_for_start_click() {
        let mut session = Session::new(GameConfig::default(), 1);
        let pos = session.ball.pos;

        let state = tick(&mut session, &TickInput::default(), 1e9);
        assert_eq!(state, GameState::New);
        assert_eq!(session.ball.pos, pos);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        let state = tick(&mut session, &start, 1e9);
        assert_eq!(state, GameState::Active);
        // The starting tick itself does not move the ball.
        assert_eq!(session.ball.pos, pos);
    }

    #[test]
    fn test_pointer_tracks_paddle_in_every_state() {
        let mut session = Session::new(GameConfig::default(), 1);
        let input = TickInput {
            pointer: Some(DVec2::new(200.0, 480.0)),
            ..Default::default()
        };
        tick(&mut session, &input, 0.0);
        assert_eq!(session.paddle.center, DVec2::new(200.0, 480.0));
    }

    #[test]
    fn test_one_quiet_frame_integrates_and_stays_active() {
        let mut session = active_session();
        let state = tick(&mut session, &TickInput::default(), 1e6); // 1 ms
        assert_eq!(state, GameState::Active);
        assert!((session.ball.pos.x - 200.1).abs() < 1e-9);
        assert!((session.ball.pos.y - 300.1).abs() < 1e-9);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_clearing_every_target_wins_with_compounded_speed() {
        let mut session = active_session();
        let mut frames = 0;
        while !session.targets.is_empty() {
            // Park the ball on the next target's center; zero elapsed time
            // keeps it exactly there through the tick.
            let outer = session.targets[0].bounds();
            session.ball.pos = DVec2::new(
                (outer.min_x + outer.max_x) / 2.0,
                (outer.min_y + outer.max_y) / 2.0,
            );
            let state = tick(&mut session, &TickInput::default(), 0.0);
            frames += 1;
            if session.targets.is_empty() {
                assert_eq!(state, GameState::Won);
            } else {
                assert_eq!(state, GameState::Active);
            }
        }
        assert_eq!(frames, 16);

        // 1.1 per collected target, compounded 16 times. Target centers sit
        // in the bands' dead zone, so no bounce disturbed the magnitudes.
        let expected = 1e-7 * 1.1f64.powi(16);
        assert!((session.ball.vel.x.abs() - expected).abs() < 1e-15);
        assert!((session.ball.vel.y.abs() - expected).abs() < 1e-15);

        let events = session.drain_events();
        let teleports = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Teleport(_)))
            .count();
        assert_eq!(teleports, 16);
        assert_eq!(*events.last().unwrap(), GameEvent::Win);
    }

    #[test]
    fn test_full_scan_removes_simultaneous_hits_in_one_frame() {
        let mut session = active_session();
        // Blow the ball up to cover the entire grid: all 16 targets must be
        // visited and removed in a single frame, speed applied per hit.
        session.ball.radius = 300.0;
        session.ball.pos = DVec2::new(200.0, 150.0);
        session.ball.vel = DVec2::new(1e-7, 1e-7);

        let state = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(state, GameState::Won);
        assert!(session.targets.is_empty());

        let expected = 1e-7 * 1.1f64.powi(16);
        assert!((session.ball.vel.x.abs() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_last_life_bottom_breach_loses() {
        let mut session = active_session();
        session.lives = 1;
        session.ball.pos = DVec2::new(200.0, 600.0);
        session.ball.vel = DVec2::new(0.0, 1.0);

        let state = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(state, GameState::Lost);
        assert_eq!(session.lives, 0);
        // The bounce still applies on the losing breach.
        assert_eq!(session.ball.vel.y, -1.0);
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::Bounce, GameEvent::Lose]
        );
    }

    #[test]
    fn test_bottom_breach_with_lives_left_costs_one() {
        let mut session = active_session();
        session.ball.pos = DVec2::new(200.0, 600.0);
        session.ball.vel = DVec2::new(0.0, 1.0);

        let state = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(state, GameState::Active);
        assert_eq!(session.lives, 4);
        assert_eq!(session.ball.vel.y, -1.0);
    }

    #[test]
    fn test_ball_straddling_both_strips_takes_top_bounce_only() {
        let mut session = active_session();
        let input = TickInput {
            pointer: Some(DVec2::new(200.0, 480.0)),
            ..Default::default()
        };
        // Ball centered on the paddle overlaps both strips; only the top
        // branch may fire, pushing the ball upward.
        session.ball.pos = DVec2::new(200.0, 480.0);
        session.ball.vel = DVec2::new(0.0, 1.0);

        let state = tick(&mut session, &input, 0.0);
        assert_eq!(state, GameState::Active);
        assert_eq!(session.ball.vel.y, -1.0);
        assert_eq!(session.drain_events(), vec![GameEvent::Bounce]);
    }

    #[test]
    fn test_wall_priority_left_beats_top_in_corner() {
        let mut session = active_session();
        session.ball.pos = DVec2::new(0.0, 0.0);
        session.ball.vel = DVec2::new(-1.0, -1.0);

        let state = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(state, GameState::Active);
        assert_eq!(session.ball.vel.x, 1.0);
        // Top wall branch never ran.
        assert_eq!(session.ball.vel.y, -1.0);
        assert_eq!(session.drain_events(), vec![GameEvent::Bounce]);
    }

    #[test]
    fn test_left_breach_in_bottom_corner_spares_a_life() {
        let mut session = active_session();
        session.ball.pos = DVec2::new(0.0, 600.0);
        session.ball.vel = DVec2::new(-1.0, 1.0);

        let state = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(state, GameState::Active);
        // Left wall matched first, so the bottom-wall life decrement is
        // skipped this frame.
        assert_eq!(session.lives, 5);
        assert_eq!(session.ball.vel.x, 1.0);
        assert_eq!(session.ball.vel.y, 1.0);
    }

    #[test]
    fn test_finished_session_stays_terminal_until_restart() {
        let mut session = active_session();
        session.lives = 1;
        session.ball.pos = DVec2::new(200.0, 600.0);
        session.ball.vel = DVec2::new(0.0, 1.0);
        assert_eq!(
            tick(&mut session, &TickInput::default(), 0.0),
            GameState::Lost
        );

        // Further ticks are inert until the caller restarts.
        let state = tick(&mut session, &TickInput::default(), 1e9);
        assert_eq!(state, GameState::Lost);
        assert_eq!(session.ball.pos, DVec2::new(200.0, 600.0));

        session.restart(GameState::Lost);
        assert_eq!(session.state, GameState::New);
        assert_eq!(session.targets.len(), 16);
    }

    #[test]
    fn test_teleport_events_carry_the_collected_kind() {
        let mut session = active_session();
        let kind = session.targets[0].kind;
        let outer = session.targets[0].bounds();
        session.ball.pos = DVec2::new(
            (outer.min_x + outer.max_x) / 2.0,
            (outer.min_y + outer.max_y) / 2.0,
        );
        tick(&mut session, &TickInput::default(), 0.0);

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::Teleport(kind)));
        assert_eq!(session.targets.len(), 15);
    }
}
