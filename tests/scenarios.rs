//! End-to-end game scenarios through the public API

use brick_breaker::consts::*;
use brick_breaker::sim::{GameEvent, GamePhase, Paddle, serve_position};
use brick_breaker::{CommandOutcome, FrameDriver, Game};
use glam::Vec2;

/// Stage the ball so this tick's translation lands it on `pos`
fn aim(game: &mut Game, pos: Vec2, vel: Vec2) {
    game.stage_ball(pos - vel, vel);
}

#[test]
fn clearing_every_brick_wins_with_450_points() {
    let mut game = Game::with_seed(2024);
    game.start();
    assert_eq!(game.bricks_left(), 45);

    let mut score = game.score();
    for index in 0..45 {
        assert_eq!(game.phase(), GamePhase::Running);
        let target = game.bricks()[index].rect.center();
        aim(&mut game, target, Vec2::new(0.0, -BASE_SPEED));
        assert!(game.advance_frame());

        assert_eq!(game.bricks_left(), 44 - index);
        assert!(game.score() >= score);
        score = game.score();
        let live = game.bricks().iter().filter(|b| !b.destroyed).count();
        assert_eq!(live, game.bricks_left());
    }

    assert_eq!(game.score(), 450);
    assert_eq!(game.phase(), GamePhase::Won);
    let events = game.take_events();
    let destroyed = events
        .iter()
        .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 45);
    assert!(events.ends_with(&[GameEvent::BricksCleared, GameEvent::Won]));
}

#[test]
fn losing_a_ball_with_lives_left_pauses() {
    let mut game = Game::with_seed(7);
    game.start();
    aim(
        &mut game,
        Vec2::new(360.0, ARENA_HEIGHT + BALL_RADIUS + 5.0),
        Vec2::new(0.0, BASE_SPEED),
    );
    game.advance_frame();

    assert_eq!(game.take_events(), vec![GameEvent::LifeLost { remaining: 2 }]);
    assert_eq!(game.phase(), GamePhase::Paused);
    assert_eq!(game.lives(), 2);
    assert_eq!(game.ball().pos, serve_position());
    assert!((game.ball().speed() - BASE_SPEED).abs() < 1e-4);

    // Resume is allowed from here
    assert_eq!(game.start(), CommandOutcome::Applied);
}

#[test]
fn losing_the_last_ball_ends_the_game() {
    let mut game = Game::with_seed(7);
    game.start();
    for index in 0..7 {
        let target = game.bricks()[index].rect.center();
        aim(&mut game, target, Vec2::new(0.0, -BASE_SPEED));
        game.advance_frame();
    }
    game.take_events();

    let below_floor = Vec2::new(100.0, ARENA_HEIGHT + BALL_RADIUS + 5.0);
    for remaining in [2, 1] {
        aim(&mut game, below_floor, Vec2::new(1.0, BASE_SPEED));
        game.advance_frame();
        assert_eq!(game.take_events(), vec![GameEvent::LifeLost { remaining }]);
        assert_eq!(game.start(), CommandOutcome::Applied);
    }
    aim(&mut game, below_floor, Vec2::new(1.0, BASE_SPEED));
    game.advance_frame();

    let events = game.take_events();
    assert_eq!(events, vec![GameEvent::GameOver]);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.lives(), 0);
    assert_eq!(game.best_score(), 70);
    assert_eq!(game.start(), CommandOutcome::Ignored);
}

#[test]
fn centered_paddle_hit_goes_straight_up() {
    let mut game = Game::with_seed(11);
    game.start();
    let center = game.paddle().center_x();
    aim(
        &mut game,
        Vec2::new(center, Paddle::Y - BALL_RADIUS + 2.0),
        Vec2::new(0.0, BASE_SPEED),
    );
    game.advance_frame();

    assert_eq!(game.ball().vel.x, 0.0);
    assert_eq!(game.ball().vel.y, -BASE_SPEED);
    assert_eq!(game.take_events(), vec![GameEvent::PaddleBounce]);
}

#[test]
fn reset_after_win_restores_a_fresh_episode() {
    let mut game = Game::with_seed(99);
    game.start();
    for index in 0..45 {
        let target = game.bricks()[index].rect.center();
        aim(&mut game, target, Vec2::new(0.0, -BASE_SPEED));
        game.advance_frame();
    }
    assert_eq!(game.phase(), GamePhase::Won);
    assert_eq!(game.best_score(), 450);

    game.reset();
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), 3);
    assert_eq!(game.bricks_left(), 45);
    assert!(game.bricks().iter().all(|b| !b.destroyed));
    assert_eq!(game.best_score(), 450);
    assert_eq!(game.start(), CommandOutcome::Applied);
}

#[test]
fn best_score_is_running_max_across_episodes() {
    let mut game = Game::with_seed(5);
    game.start();
    for index in 0..3 {
        let target = game.bricks()[index].rect.center();
        aim(&mut game, target, Vec2::new(0.0, -BASE_SPEED));
        game.advance_frame();
    }
    assert_eq!(game.best_score(), 30);

    game.reset();
    game.start();
    let target = game.bricks()[0].rect.center();
    aim(&mut game, target, Vec2::new(0.0, -BASE_SPEED));
    game.advance_frame();
    assert_eq!(game.score(), 10);
    assert_eq!(game.best_score(), 30);
}

#[test]
fn driver_runs_a_full_demo_game() {
    use brick_breaker::sim::autopilot;

    let mut game = Game::with_seed(31337);
    let mut driver = FrameDriver::new();
    game.start();
    driver.sync(&game);

    let mut renders = 0u64;
    for _ in 0..50_000 {
        game.set_input(autopilot::steer(game.state()));
        driver.frame(&mut game, |g| {
            let paddle = g.paddle();
            assert!(paddle.x >= 0.0 && paddle.x <= Paddle::MAX_X);
            renders += 1;
        });
        match game.phase() {
            GamePhase::Paused => {
                game.start();
                driver.sync(&game);
            }
            GamePhase::GameOver | GamePhase::Won => break,
            _ => {}
        }
    }

    assert_eq!(renders, driver.frames());
    assert!(game.score() > 0);
    assert!(game.best_score() >= game.score());
}
