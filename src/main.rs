//! Arcade Pong entry point
//!
//! Runs the fixed-rate loop: drain input, advance the match one tick, build
//! the scene, draw, then sleep to the next tick boundary. The tick rate
//! drops to 30 Hz on the menu, pause, and end screens.

use std::thread::sleep;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use arcade_pong::audio::{AudioManager, SilentBackend};
use arcade_pong::consts::{ACTIVE_TICK_HZ, IDLE_TICK_HZ};
use arcade_pong::scene::Scene;
use arcade_pong::settings::Settings;
use arcade_pong::sim::{BallEvent, MatchState, Phase, tick};
use arcade_pong::term::Terminal;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = MatchState::new(seed);
    log::info!("match initialized with seed {seed}");

    // No native music device is wired up yet; the silent backend keeps the
    // mute/volume plumbing honest and any real backend can drop in later.
    let mut audio = AudioManager::new(Box::new(SilentBackend), settings.music_volume);
    audio.start();
    if settings.start_muted {
        state.muted = true;
        audio.set_muted(true);
    }

    let mut term = Terminal::new()?;
    let mut fps = 0u32;

    loop {
        let hz = match state.phase {
            Phase::Countdown | Phase::Playing => ACTIVE_TICK_HZ,
            _ => IDLE_TICK_HZ,
        };
        let frame_dt = Duration::from_secs_f64(1.0 / hz as f64);
        let frame_start = Instant::now();

        let input = term.poll_input()?;
        let events = tick(&mut state, &input);
        for event in &events {
            if let BallEvent::Score(side) = event {
                log::debug!("point to {side:?}, score {}:{}", state.score.0, state.score.1);
            }
        }
        audio.set_muted(state.muted);

        if state.phase == Phase::Terminated {
            break;
        }

        let scene = Scene::from_state(&state, settings.show_fps.then_some(fps));
        term.draw(&scene)?;

        // Best-effort pacing: a slow frame lags but never corrupts state.
        let frame_time = frame_start.elapsed();
        let sleep_for = frame_dt.saturating_sub(frame_time);
        let total = frame_time + sleep_for;
        if !total.is_zero() {
            fps = (1.0 / total.as_secs_f64()).round() as u32;
        }
        sleep(sleep_for);
    }

    drop(term);
    // Write the settings file back so there is a template to edit.
    settings.save();
    log::info!("exited cleanly");
    Ok(())
}
