//! Terminal mission runner (default binary).
//!
//! Flies the demo world through the campaign: briefing line on stderr, the
//! mission itself on the half-block renderer, then the between-mission
//! bookkeeping. Without a terminal on stdout (or with `--headless`) it
//! flies one scripted smoke mission instead.
//!
//! Controls: arrows or WASD to fly, space to fire, P to pause, Q or Esc to
//! quit from the pause screen.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use starlance::demo::{DemoWorld, LogPresenter};
use starlance::engine::{
    run_mission, MissionContext, MissionOutcome, NullAudio, NullVideo, Platform, Stage,
    StockMissions,
};
use starlance::gfx::SystemClock;
use starlance::input::{PauseSignal, ScriptedInput, TermInput};
use starlance::save::JsonSave;
use starlance::term::TermPresenter;
use starlance::types::{Difficulty, Key, KeyState};

struct Options {
    difficulty: Difficulty,
    area: Option<u8>,
    seed: u32,
    headless: bool,
}

fn parse_args() -> Result<Options> {
    let mut opts = Options {
        difficulty: Difficulty::Normal,
        area: None,
        seed: 1,
        headless: false,
    };

    for arg in env::args().skip(1) {
        if arg == "--headless" {
            opts.headless = true;
        } else if let Some(value) = arg.strip_prefix("--area=") {
            opts.area = Some(value.parse()?);
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            opts.seed = value.parse()?;
        } else if let Some(value) = arg.strip_prefix("--difficulty=") {
            opts.difficulty = Difficulty::from_str(value)
                .ok_or_else(|| anyhow!("unknown difficulty: {value}"))?;
        } else {
            bail!("unknown argument: {arg} (try --difficulty=, --area=, --seed=, --headless)");
        }
    }

    Ok(opts)
}

fn save_dir() -> PathBuf {
    if let Some(dir) = env::var_os("STARLANCE_SAVE_DIR") {
        return dir.into();
    }
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".starlance").join("saves"),
        None => env::temp_dir().join("starlance-saves"),
    }
}

fn main() -> Result<()> {
    let opts = parse_args()?;

    if opts.headless || !TermPresenter::stdout_is_tty() {
        return run_headless(&opts);
    }

    let mut term = TermPresenter::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TermPresenter, opts: &Options) -> Result<()> {
    let mut ctx = MissionContext::new_campaign(opts.difficulty, opts.seed);
    if let Some(area) = opts.area {
        ctx.game.area = area;
    }

    let mut stage = Stage::new();
    let mut world = DemoWorld::new();
    let mut input = TermInput::new();
    // The terminal build is silent.
    let mut audio = NullAudio;
    let mut save = JsonSave::new(save_dir());
    let mut presenter = LogPresenter;
    let clock = SystemClock::new();

    loop {
        let outcome = run_mission(
            &mut ctx,
            &mut stage,
            &mut Platform {
                world: &mut world,
                input: &mut input,
                audio: &mut audio,
                persistence: &mut save,
                presenter: &mut presenter,
                video: &mut *term,
                missions: &StockMissions,
                clock: &clock,
            },
        )?;

        match outcome {
            MissionOutcome::Intermission => {
                // No shop or star map here; refit and fly the next sector.
                ctx.game.area += 1;
                ctx.player.shield = ctx.player.max_shield;
                term.invalidate();
            }
            MissionOutcome::Title => return Ok(()),
        }
    }
}

fn run_headless(opts: &Options) -> Result<()> {
    let mut ctx = MissionContext::new_campaign(opts.difficulty, opts.seed);
    if let Some(area) = opts.area {
        ctx.game.area = area;
    }

    // Scripted smoke flight: a couple of seconds under fire, then out
    // through the pause screen.
    let mut frames = Vec::new();
    for _ in 0..120 {
        let mut keys = KeyState::new();
        keys.set(Key::Fire, true);
        frames.push(keys);
    }
    let mut pause = KeyState::new();
    pause.set(Key::Pause, true);
    frames.push(pause);

    let mut stage = Stage::new();
    let mut world = DemoWorld::new();
    let mut input = ScriptedInput::new(frames).with_pause_verdicts(vec![PauseSignal::Quit]);
    let mut audio = NullAudio;
    let mut save = JsonSave::new(save_dir());
    let mut presenter = LogPresenter;
    let mut video = NullVideo;
    let clock = SystemClock::new();

    let outcome = run_mission(
        &mut ctx,
        &mut stage,
        &mut Platform {
            world: &mut world,
            input: &mut input,
            audio: &mut audio,
            persistence: &mut save,
            presenter: &mut presenter,
            video: &mut video,
            missions: &StockMissions,
            clock: &clock,
        },
    )?;

    eprintln!("[Headless] sector {} ended: {outcome:?}", ctx.game.area);
    Ok(())
}
