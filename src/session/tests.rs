use super::{RunState, Session};
use crate::{Config, Grid, GridError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

const SEED: u64 = 42;
const INTERVAL: Duration = Duration::from_millis(100);

fn session_with_blinker() -> Session {
    let mut session = Session::new(10, INTERVAL.as_millis() as u64).unwrap();
    for c in 3..6 {
        session.toggle_at(4, c);
    }
    session
}

#[test]
fn test_new_session() {
    let session = Session::new(Config::DEFAULT_SIZE, Config::DEFAULT_INTERVAL_MS).unwrap();
    assert_eq!(session.state(), RunState::Paused);
    assert_eq!(session.size(), Config::DEFAULT_SIZE);
    assert_eq!(session.grid().population(), 0);
    assert_eq!(session.generation(), 0);
    assert_eq!(
        session.interval(),
        Duration::from_millis(Config::DEFAULT_INTERVAL_MS)
    );
    assert_eq!(session.time_until_tick(Instant::now()), None);
}

#[test]
fn test_new_clamps_controls() {
    let session = Session::new(1, 0).unwrap();
    assert_eq!(session.size(), *Config::SIZE_RANGE.start());
    assert_eq!(
        session.interval(),
        Duration::from_millis(*Config::INTERVAL_MS_RANGE.start())
    );

    let session = Session::new(10_000, u64::MAX).unwrap();
    assert_eq!(session.size(), *Config::SIZE_RANGE.end());
}

#[test]
fn test_step_only_while_paused() {
    let mut session = session_with_blinker();
    let t0 = Instant::now();

    assert!(session.step());
    assert_eq!(session.generation(), 1);
    assert!(session.grid().is_alive(3, 4) && session.grid().is_alive(5, 4));

    session.play(t0);
    assert!(!session.step());
    assert_eq!(session.generation(), 1);
}

#[test]
fn test_tick_follows_interval() {
    let mut session = session_with_blinker();
    let t0 = Instant::now();

    assert!(!session.tick(t0 + INTERVAL));

    session.play(t0);
    assert!(session.is_running());
    assert!(!session.tick(t0 + INTERVAL / 2));
    assert!(session.tick(t0 + INTERVAL));
    assert!(!session.tick(t0 + INTERVAL));
    assert_eq!(session.generation(), 1);

    // a long stall yields one generation, not a burst
    let late = t0 + INTERVAL * 20;
    assert!(session.tick(late));
    assert!(!session.tick(late));
    assert_eq!(session.generation(), 2);

    session.pause();
    assert!(!session.tick(late + INTERVAL * 5));
    assert_eq!(session.generation(), 2);
}

#[test]
fn test_toggle_running() {
    let mut session = session_with_blinker();
    let t0 = Instant::now();
    session.toggle_running(t0);
    assert_eq!(session.state(), RunState::Running);
    assert_eq!(session.time_until_tick(t0), Some(INTERVAL));
    session.toggle_running(t0);
    assert_eq!(session.state(), RunState::Paused);
    assert_eq!(session.time_until_tick(t0), None);
}

#[test]
fn test_resize_while_running_restarts_ticker() {
    let mut session = session_with_blinker();
    let t0 = Instant::now();
    session.play(t0);

    let t1 = t0 + INTERVAL * 9 / 10;
    session.resize(20, t1).unwrap();
    assert_eq!(session.grid().dimensions(), (20, 20));
    assert_eq!(session.grid().population(), 0);
    assert_eq!(session.generation(), 0);
    assert!(session.is_running());

    // the tick scheduled for the old field is gone
    assert!(!session.tick(t0 + INTERVAL));
    assert!(session.tick(t1 + INTERVAL));
    assert_eq!(session.grid().dimensions(), (20, 20));
}

#[test]
fn test_resize_while_paused_stays_paused() {
    let mut session = session_with_blinker();
    let t0 = Instant::now();
    session.resize(5, t0).unwrap();
    assert_eq!(session.size(), *Config::SIZE_RANGE.start());
    assert!(!session.is_running());
    assert_eq!(session.time_until_tick(t0), None);
}

#[test]
fn test_set_interval_while_running() {
    let mut session = session_with_blinker();
    let t0 = Instant::now();
    session.play(t0);

    let t1 = t0 + INTERVAL / 2;
    session.set_interval(300, t1);
    assert_eq!(session.interval(), Duration::from_millis(300));
    assert!(!session.tick(t0 + INTERVAL));
    assert!(session.tick(t1 + Duration::from_millis(300)));

    session.pause();
    session.set_interval(50, t1);
    assert_eq!(session.time_until_tick(t1), None);
    session.play(t1);
    assert_eq!(session.time_until_tick(t1), Some(Duration::from_millis(50)));
}

#[test]
fn test_clear() {
    let mut session = session_with_blinker();
    session.step();
    session.clear();
    assert_eq!(session.grid(), &Grid::new(10, 10).unwrap());
    assert_eq!(session.generation(), 0);
}

#[test]
fn test_randomize_uses_probability() {
    let mut session = session_with_blinker();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    session.set_alive_probability(1.0).unwrap();
    session.randomize_with(&mut rng).unwrap();
    assert_eq!(session.grid().population(), 100);

    session.set_alive_probability(0.0).unwrap();
    session.randomize_with(&mut rng).unwrap();
    assert_eq!(session.grid().population(), 0);

    assert_eq!(
        session.set_alive_probability(2.0),
        Err(GridError::InvalidProbability(2.0))
    );
    assert_eq!(session.alive_probability(), 0.0);
}

#[test]
fn test_click_maps_pixels_to_cells() {
    let mut session = Session::new(10, 100).unwrap();
    // 10 columns on a 200 px board: 20 px per cell
    assert!(session.click(45., 25., 200.));
    assert!(session.grid().is_alive(1, 2));

    let before = session.grid().clone();
    assert!(!session.click(-1., 25., 200.));
    assert!(!session.click(45., 200., 200.));
    assert!(!session.click(45., 25., 0.));
    assert_eq!(session.grid(), &before);

    assert!(session.click(199.9, 199.9, 200.));
    assert!(session.grid().is_alive(9, 9));
}
