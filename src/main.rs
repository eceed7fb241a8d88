//! Atari Pong entry point
//!
//! Headless host driver: paces the simulation at 60 Hz, feeds it autopilot
//! input and reports bumps and points through the log. Drawing the field and
//! ringing a real bell belong to a windowed front end.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use atari_pong::consts::SCORE_LIMIT;
use atari_pong::sim::{MatchState, Side, TickEvents, TickInput, autopilot, tick};
use atari_pong::{FramePacer, Settings};

/// Game instance holding all host-side state
struct Game {
    state: MatchState,
    pacer: FramePacer,
    settings: Settings,
    /// Side already announced as reaching the score limit
    limit_announced: Option<Side>,
}

impl Game {
    fn new(settings: Settings, now: Instant) -> Self {
        Self {
            state: MatchState::new(),
            pacer: FramePacer::new(now),
            settings,
            limit_announced: None,
        }
    }

    fn input(&self) -> TickInput {
        autopilot(
            &self.state,
            self.settings.autopilot_left,
            self.settings.autopilot_right,
        )
    }

    /// Run one tick if the pacer says one is due. Returns true if it ran.
    fn update(&mut self, now: Instant) -> bool {
        if !self.pacer.poll(now) {
            return false;
        }

        let input = self.input();
        let events = tick(&mut self.state, &input);
        self.report(&events);
        true
    }

    fn report(&mut self, events: &TickEvents) {
        if self.settings.bell && events.bumped() {
            log::debug!(
                "Bump x{} at tick {} (left={} right={} wall={})",
                events.bumps(),
                self.state.time_ticks,
                events.left_paddle_hit,
                events.right_paddle_hit,
                events.wall_hit
            );
        }

        if let Some(side) = events.scored {
            log::info!(
                "Point {} - score {}:{}",
                side.as_str(),
                self.state.score.left,
                self.state.score.right
            );
        }

        // Scoreboard only: play continues past the limit
        if self.limit_announced.is_none() {
            if let Some(side) = self.state.score.reached(SCORE_LIMIT) {
                log::info!("{} side reached {} points", side.as_str(), SCORE_LIMIT);
                self.limit_announced = Some(side);
            }
        }

        let every = self.settings.snapshot_every;
        if every > 0 && self.state.time_ticks % every == 0 {
            log::info!(
                "tick {}: ball ({}, {}) paddles {}/{}",
                self.state.time_ticks,
                self.state.ball.column(),
                self.state.ball.scanline(),
                self.state.paddles.left,
                self.state.paddles.right
            );
        }
    }

    fn finished(&self) -> bool {
        let limit = self.settings.run_ticks;
        limit > 0 && self.state.time_ticks >= limit
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Atari Pong (headless) starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };
    if !settings.any_autopilot() {
        log::warn!("No autopilot enabled and no keyboard attached - paddles will stay put");
    }

    let mut game = Game::new(settings, Instant::now());
    while !game.finished() {
        if !game.update(Instant::now()) {
            // Same 1 ms reschedule as the cabinet loop
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    log::info!(
        "Stopped after {} ticks - final score {}:{}",
        game.state.time_ticks,
        game.state.score.left,
        game.state.score.right
    );

    if game.settings.print_final_snapshot {
        match serde_json::to_string_pretty(&game.state) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize final state: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web front ends drive `atari_pong::sim` directly
}
