//! The mission loop: one sector of play from briefing to resolution.
//!
//! [`run_mission`] drives a fixed-order frame: present, arm/check the
//! end-of-mission timers, poll input (or steer the departure), restore the
//! previous frame's damage, advance the world through its nine phases,
//! service pause, drop mines and enemy waves, and pace to 60 Hz. The loop
//! ends through one of three doors: the mission-over deadline, a quit from
//! the pause screen, or the boss-escape set piece.

use std::io;

use anyhow::Result;

use starlance_core::{AreaTraits, Player};
use starlance_gfx::{Clock, CENTERED};
use starlance_input::{InputSource, PauseSignal};
use starlance_types::{
    FontColor, Key, Sfx, EVENT_TIMER_WRAP, MISSION_COMPLETE_DELAY_MS, MUSIC_FADE_STEP,
    PAUSE_TEXT_SLOT, SHIELD_DOWN_DELAY_MS, WHITE,
};

use crate::context::{LoopState, MissionContext};
use crate::stage::Stage;
use crate::traits::{
    AudioSink, EscortFormation, MissionSource, Persistence, Presenter, VideoOut, World, TICK_ORDER,
};

// Departure lane: x inside (w - 160, w - 150), y within 15 px of center.
const LANE_EDGE_FAR: i32 = 160;
const LANE_EDGE_NEAR: i32 = 150;
const LANE_HALF_HEIGHT: i32 = 15;

// Escort stations relative to the departing player.
const WINGMATE_OFFSET_X: f32 = -40.0;
const WINGMATE_LEAD_OFFSET_Y: f32 = -35.0;
const WINGMATE_WING_OFFSET_Y: f32 = 45.0;
const ENGINEER_OFFSET_X: f32 = -100.0;

// Minefield sectors sprinkle mines ahead of the scroll.
const MINE_DROP_CHANCE: u32 = 10;
const MINE_FIELD_X_MIN: i32 = 800;
const MINE_FIELD_X_MAX: i32 = 1498;
const MINE_VALUE: i32 = 25;
const MINE_LIFE_MIN: i32 = 180;
const MINE_LIFE_SPREAD: u32 = 60;

// Boss-escape set piece: ~3 s of explosion rolls, then a beat of silence.
const SET_PIECE_ROLLS: u32 = 300;
const SET_PIECE_ROLL_MS: u64 = 10;
const SET_PIECE_BURST_CHANCE: u32 = 25;
const SET_PIECE_TAIL_MS: u64 = 1000;

const ONE_SECOND_MS: u64 = 1000;

/// What the caller does after the mission returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    /// Carry on to the intermission map.
    Intermission,
    /// Back to the title: defeat, or the campaign is over.
    Title,
}

/// Every collaborator the loop drives, borrowed for one mission.
pub struct Platform<'a> {
    pub world: &'a mut dyn World,
    pub input: &'a mut dyn InputSource,
    pub audio: &'a mut dyn AudioSink,
    pub persistence: &'a mut dyn Persistence,
    pub presenter: &'a mut dyn Presenter,
    pub video: &'a mut dyn VideoOut,
    pub missions: &'a dyn MissionSource,
    pub clock: &'a dyn Clock,
}

/// Run the mission for the context's current area to completion.
pub fn run_mission(
    ctx: &mut MissionContext,
    stage: &mut Stage,
    platform: &mut Platform<'_>,
) -> Result<MissionOutcome> {
    platform.world.reset();

    let mission = platform.missions.mission_for(ctx.game.area);
    let traits = AreaTraits::for_area(ctx.game.area);

    platform.presenter.mission_brief(&mission, &ctx.game)?;

    platform.world.prepare(ctx, &mission);

    ctx.scroll_x = 0.0;
    ctx.scroll_y = 0.0;
    ctx.drift_x = 0.0;
    ctx.drift_y = 0.0;

    ctx.state = LoopState::Running;
    ctx.paused = false;
    ctx.second_tick_at = platform.clock.now_ms() + ONE_SECOND_MS;
    ctx.mission_over_at = 0;
    ctx.music_volume = 100.0;
    platform.audio.set_music_volume(100);
    ctx.add_aliens_timer = mission.add_aliens_interval;

    let mut allowable_aliens = mission.allowable_aliens();
    allowable_aliens -= platform.world.active_hostiles();

    stage.screen.draw_background();
    stage.screen.flush_damage();

    ctx.all_aliens_dead = false;

    ctx.keys.clear_fire();
    platform.input.flush()?;

    while ctx.state != LoopState::Finished {
        platform.video.present(stage.screen.surface())?;

        let now = platform.clock.now_ms();

        if platform.world.all_objectives_met() && ctx.mission_over_at == 0 {
            ctx.mission_over_at = now + MISSION_COMPLETE_DELAY_MS;
        }

        if platform.world.mission_failed()
            && ctx.mission_over_at == 0
            && !traits.failure_timer_exempt
        {
            ctx.mission_over_at = now + MISSION_COMPLETE_DELAY_MS;
        }

        if ctx.mission_over_at != 0 {
            if ctx.player.shield > 0 {
                if now >= ctx.mission_over_at {
                    if !platform.world.mission_failed() && !traits.final_area {
                        leave_sector(ctx, stage.screen.width(), stage.screen.height());
                        if ctx.state == LoopState::Departing && traits.escort_regroup {
                            let formation = escort_stations(&ctx.player, &traits);
                            platform.world.reposition_escorts(&formation);
                        }
                    } else if traits.final_area && ctx.music_volume > 0.0 {
                        fade_music(ctx, platform.audio);
                    } else {
                        ctx.state = LoopState::Finished;
                    }
                } else {
                    poll_input(ctx, platform.input)?;
                }
            } else {
                fade_music(ctx, platform.audio);
                if now >= ctx.mission_over_at {
                    ctx.state = LoopState::Finished;
                }
            }
        } else {
            poll_input(ctx, platform.input)?;
        }

        stage.screen.restore_damage();

        for phase in TICK_ORDER {
            platform.world.advance(phase, ctx, stage);
        }

        ctx.event_timer -= 1;
        if ctx.event_timer < 0 {
            ctx.event_timer = EVENT_TIMER_WRAP;
        }

        if ctx.paused {
            stage.text.render_cached(
                PAUSE_TEXT_SLOT,
                "PAUSED",
                CENTERED,
                stage.screen.height() / 2,
                FontColor::White,
                &stage.font,
            );
            stage.text.blit_text(PAUSE_TEXT_SLOT, &mut stage.screen);
            platform.video.present(stage.screen.surface())?;

            while ctx.paused {
                match platform.input.pause_poll()? {
                    PauseSignal::Hold => {}
                    PauseSignal::Resume => ctx.paused = false,
                    PauseSignal::Quit => {
                        ctx.paused = false;
                        ctx.state = LoopState::Finished;
                    }
                }
                stage.pacer.wait(platform.clock);
            }
        }

        if traits.mine_field && ctx.add_aliens_timer > -1 && ctx.rng.one_in(MINE_DROP_CHANCE) {
            let x = ctx.rng.between(MINE_FIELD_X_MIN, MINE_FIELD_X_MAX);
            let life = MINE_LIFE_MIN + ctx.rng.next_range(MINE_LIFE_SPREAD) as i32;
            platform
                .world
                .drop_mine(x, ctx.player.y as i32, MINE_VALUE, life);
        }

        if ctx.add_aliens_timer > -1 {
            ctx.add_aliens_timer -= 1;
            if ctx.add_aliens_timer < 0 {
                ctx.add_aliens_timer = mission.add_aliens_interval;
            }
            if ctx.add_aliens_timer == 0 && allowable_aliens > 0 {
                allowable_aliens -= platform.world.spawn_wave(ctx);
            }
        }

        if ctx.player.shield <= 0 && ctx.mission_over_at == 0 {
            ctx.mission_over_at = platform.clock.now_ms() + SHIELD_DOWN_DELAY_MS;
        }

        if traits.boss_rush && platform.world.boss_escaped() {
            let pan = platform.world.boss_pan();
            platform.audio.play(Sfx::Death, pan);
            stage.screen.clear(WHITE);
            platform.video.present(stage.screen.surface())?;
            for _ in 0..SET_PIECE_ROLLS {
                platform.clock.sleep_ms(SET_PIECE_ROLL_MS);
                if ctx.rng.one_in(SET_PIECE_BURST_CHANCE) {
                    platform.audio.play(Sfx::Explosion, pan);
                }
            }
            platform.clock.sleep_ms(SET_PIECE_TAIL_MS);
            break;
        }

        if platform.clock.now_ms() >= ctx.second_tick_at {
            ctx.second_tick_at = platform.clock.now_ms() + ONE_SECOND_MS;
            ctx.game.time_taken += 1;
        }

        stage.pacer.wait(platform.clock);
    }

    stage.screen.flush_damage();

    let outcome = if ctx.player.shield > 0 && !platform.world.mission_failed() {
        if !traits.final_area {
            platform.presenter.mission_finished(&ctx.game)?;
        }

        for &id in traits.cutscenes {
            platform.presenter.cutscene(id)?;
        }
        if traits.final_area {
            platform.presenter.credits()?;
        }

        if !traits.final_area {
            ctx.game.update_system_status(&traits);
            platform.persistence.save_game(0, &ctx.game)?;
            MissionOutcome::Intermission
        } else {
            MissionOutcome::Title
        }
    } else {
        platform.presenter.game_over()?;
        MissionOutcome::Title
    };

    platform.world.exit_player(ctx);

    Ok(outcome)
}

/// Steer the player into the departure lane, then off the right edge.
///
/// Overrides the four direction keys; the world's player phase does the
/// actual movement. Reaching the lane switches to [`LoopState::Departing`]
/// and stops the starfield scroll; crossing the right edge finishes the
/// loop.
fn leave_sector(ctx: &mut MissionContext, w: i32, h: i32) {
    ctx.keys.set(Key::Up, false);
    ctx.keys.set(Key::Down, false);
    ctx.keys.set(Key::Left, false);
    ctx.keys.set(Key::Right, false);

    if ctx.state == LoopState::Running {
        if ctx.player.x < (w - LANE_EDGE_FAR) as f32 {
            ctx.keys.set(Key::Right, true);
        }
        if ctx.player.x > (w - LANE_EDGE_NEAR) as f32 {
            ctx.keys.set(Key::Left, true);
        }
        if ctx.player.y > (h / 2 + LANE_HALF_HEIGHT) as f32 {
            ctx.keys.set(Key::Up, true);
        }
        if ctx.player.y < (h / 2 - LANE_HALF_HEIGHT) as f32 {
            ctx.keys.set(Key::Down, true);
        }

        if ctx.player.x > (w - LANE_EDGE_FAR) as f32
            && ctx.player.x < (w - LANE_EDGE_NEAR) as f32
            && ctx.player.y > (h / 2 - LANE_HALF_HEIGHT) as f32
            && ctx.player.y < (h / 2 + LANE_HALF_HEIGHT) as f32
        {
            ctx.state = LoopState::Departing;
            ctx.scroll_x = 0.0;
            ctx.scroll_y = 0.0;
        }
    }

    if ctx.state == LoopState::Departing {
        ctx.keys.set(Key::Right, true);
        if ctx.player.x > w as f32 {
            ctx.state = LoopState::Finished;
        }
    }
}

/// Departure stations for whichever escorts this sector regroups.
fn escort_stations(player: &Player, traits: &AreaTraits) -> EscortFormation {
    let mut formation = EscortFormation::default();

    if traits.wingmates_regroup {
        formation.wingmates = Some([
            (
                player.x + WINGMATE_OFFSET_X,
                player.y + WINGMATE_LEAD_OFFSET_Y,
            ),
            (
                player.x + WINGMATE_OFFSET_X,
                player.y + WINGMATE_WING_OFFSET_Y,
            ),
        ]);
    }

    if traits.engineer_regroups {
        formation.engineer = Some((player.x + ENGINEER_OFFSET_X, player.y));
    }

    formation
}

/// One fade step: drop the volume 0.2, clamp to [0, 100], tell the mixer.
fn fade_music(ctx: &mut MissionContext, audio: &mut dyn AudioSink) {
    ctx.music_volume = (ctx.music_volume - MUSIC_FADE_STEP).clamp(0.0, 100.0);
    audio.set_music_volume(ctx.music_volume as i32);
}

/// Refresh the held-key snapshot; a pause press is consumed here.
fn poll_input(ctx: &mut MissionContext, input: &mut dyn InputSource) -> io::Result<()> {
    ctx.keys = input.poll()?;
    if ctx.keys.is_down(Key::Pause) {
        ctx.keys.set(Key::Pause, false);
        ctx.paused = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use starlance_core::Mission;
    use starlance_input::ScriptedInput;
    use starlance_types::{Difficulty, KeyState, SCREEN_HEIGHT, SCREEN_WIDTH};

    use crate::traits::{NullAudio, NullVideo, StockMissions, TickPhase};

    struct FakeClock {
        now: Cell<u64>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self { now: Cell::new(0) }
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }

        fn sleep_ms(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        events: Vec<String>,
    }

    impl Presenter for RecordingPresenter {
        fn mission_brief(&mut self, mission: &Mission, _game: &starlance_core::Game) -> Result<()> {
            self.events.push(format!("brief {}", mission.name));
            Ok(())
        }

        fn mission_finished(&mut self, _game: &starlance_core::Game) -> Result<()> {
            self.events.push("finished".into());
            Ok(())
        }

        fn cutscene(&mut self, id: u8) -> Result<()> {
            self.events.push(format!("cutscene {id}"));
            Ok(())
        }

        fn credits(&mut self) -> Result<()> {
            self.events.push("credits".into());
            Ok(())
        }

        fn game_over(&mut self) -> Result<()> {
            self.events.push("game over".into());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemPersistence {
        saves: Vec<u8>,
    }

    impl Persistence for MemPersistence {
        fn save_game(&mut self, slot: u8, _game: &starlance_core::Game) -> Result<()> {
            self.saves.push(slot);
            Ok(())
        }
    }

    /// Scriptable world: flips its outcome flags at a given frame and moves
    /// the player by the held direction keys, nothing else.
    #[derive(Default)]
    struct TestWorld {
        frame: u32,
        complete_at: Option<u32>,
        fail_at: Option<u32>,
        shield_zero_at: Option<u32>,
        complete: bool,
        failed: bool,
        hostiles: i32,
        spawn_calls: u32,
        phases: Vec<TickPhase>,
        exited: bool,
    }

    const TEST_SPEED: f32 = 8.0;

    impl World for TestWorld {
        fn reset(&mut self) {
            self.frame = 0;
            self.phases.clear();
        }

        fn prepare(&mut self, _ctx: &mut MissionContext, _mission: &Mission) {}

        fn advance(&mut self, phase: TickPhase, ctx: &mut MissionContext, _stage: &mut Stage) {
            self.phases.push(phase);

            match phase {
                TickPhase::Starfield => {
                    self.frame += 1;
                    if self.complete_at.is_some_and(|at| self.frame > at) {
                        self.complete = true;
                    }
                    if self.fail_at.is_some_and(|at| self.frame > at) {
                        self.failed = true;
                    }
                    if self.shield_zero_at.is_some_and(|at| self.frame > at) {
                        ctx.player.shield = 0;
                    }
                }
                TickPhase::Player => {
                    if ctx.keys.is_down(Key::Right) {
                        ctx.player.x += TEST_SPEED;
                    }
                    if ctx.keys.is_down(Key::Left) {
                        ctx.player.x -= TEST_SPEED;
                    }
                    if ctx.keys.is_down(Key::Up) {
                        ctx.player.y -= TEST_SPEED;
                    }
                    if ctx.keys.is_down(Key::Down) {
                        ctx.player.y += TEST_SPEED;
                    }
                }
                _ => {}
            }
        }

        fn active_hostiles(&self) -> i32 {
            self.hostiles
        }

        fn spawn_wave(&mut self, _ctx: &mut MissionContext) -> i32 {
            self.spawn_calls += 1;
            1
        }

        fn all_objectives_met(&self) -> bool {
            self.complete
        }

        fn mission_failed(&self) -> bool {
            self.failed
        }

        fn exit_player(&mut self, _ctx: &mut MissionContext) {
            self.exited = true;
        }
    }

    fn lane_start() -> (f32, f32) {
        (
            (SCREEN_WIDTH - 155) as f32,
            (SCREEN_HEIGHT / 2) as f32,
        )
    }

    fn run(
        ctx: &mut MissionContext,
        world: &mut TestWorld,
        input: &mut ScriptedInput,
    ) -> (MissionOutcome, RecordingPresenter, MemPersistence, u64) {
        let mut stage = Stage::new();
        let clock = FakeClock::new();
        let mut audio = NullAudio;
        let mut video = NullVideo;
        let mut presenter = RecordingPresenter::default();
        let mut persistence = MemPersistence::default();
        let missions = StockMissions;

        let mut platform = Platform {
            world,
            input,
            audio: &mut audio,
            persistence: &mut persistence,
            presenter: &mut presenter,
            video: &mut video,
            missions: &missions,
            clock: &clock,
        };

        let outcome = run_mission(ctx, &mut stage, &mut platform).unwrap();
        (outcome, presenter, persistence, clock.now_ms())
    }

    #[test]
    fn test_completion_departs_after_four_seconds() {
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 42);
        (ctx.player.x, ctx.player.y) = lane_start();
        let mut world = TestWorld {
            complete_at: Some(0),
            ..Default::default()
        };
        let mut input = ScriptedInput::idle();

        let (outcome, presenter, persistence, elapsed) = run(&mut ctx, &mut world, &mut input);

        assert_eq!(outcome, MissionOutcome::Intermission);
        assert_eq!(persistence.saves, vec![0]);
        assert!(presenter.events.contains(&"finished".to_string()));
        // Four seconds of play plus the flight off the right edge.
        assert!(elapsed >= MISSION_COMPLETE_DELAY_MS);
        assert!(world.exited);
        assert_eq!(ctx.state, LoopState::Finished);
        assert!(ctx.player.x > SCREEN_WIDTH as f32);
    }

    #[test]
    fn test_failure_times_out_to_game_over_without_saving() {
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 42);
        ctx.game.area = 3;
        (ctx.player.x, ctx.player.y) = lane_start();
        let mut world = TestWorld {
            fail_at: Some(0),
            ..Default::default()
        };
        let mut input = ScriptedInput::idle();

        let (outcome, presenter, persistence, elapsed) = run(&mut ctx, &mut world, &mut input);

        assert_eq!(outcome, MissionOutcome::Title);
        assert!(persistence.saves.is_empty());
        assert!(presenter.events.contains(&"game over".to_string()));
        assert!(!presenter.events.contains(&"finished".to_string()));
        assert!(elapsed >= MISSION_COMPLETE_DELAY_MS);
        // The deadline ends the loop directly; no departure flight.
        assert!(elapsed < MISSION_COMPLETE_DELAY_MS + 200);
    }

    #[test]
    fn test_pause_quit_ends_the_mission_at_once() {
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 42);
        let mut pause = KeyState::new();
        pause.set(Key::Pause, true);
        let mut input =
            ScriptedInput::new(vec![pause]).with_pause_verdicts(vec![PauseSignal::Quit]);
        let mut world = TestWorld::default();

        let (outcome, _presenter, persistence, elapsed) = run(&mut ctx, &mut world, &mut input);

        // Quitting with shield intact and no failed objective resolves as a
        // completed sector.
        assert_eq!(outcome, MissionOutcome::Intermission);
        assert_eq!(persistence.saves, vec![0]);
        assert_eq!(world.frame, 1);
        assert!(elapsed < 100);
        assert!(!ctx.paused);
    }

    #[test]
    fn test_pause_holds_the_clock_until_resume() {
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 42);
        (ctx.player.x, ctx.player.y) = lane_start();
        let mut pause = KeyState::new();
        pause.set(Key::Pause, true);
        let mut input = ScriptedInput::new(vec![pause]).with_pause_verdicts(vec![
            PauseSignal::Hold,
            PauseSignal::Hold,
            PauseSignal::Resume,
        ]);
        let mut world = TestWorld {
            complete_at: Some(0),
            ..Default::default()
        };

        let (outcome, _presenter, _persistence, _elapsed) = run(&mut ctx, &mut world, &mut input);

        assert_eq!(outcome, MissionOutcome::Intermission);
        assert!(world.frame > 1);
    }

    #[test]
    fn test_every_frame_runs_the_phases_in_order() {
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 42);
        let mut pause = KeyState::new();
        pause.set(Key::Pause, true);
        let mut input =
            ScriptedInput::new(vec![pause]).with_pause_verdicts(vec![PauseSignal::Quit]);
        let mut world = TestWorld::default();

        run(&mut ctx, &mut world, &mut input);

        assert_eq!(world.phases, TICK_ORDER.to_vec());
    }

    #[test]
    fn test_spawn_budget_counts_standing_hostiles() {
        // Area 25's mission asks for 10 kills; 8 already active leaves a
        // budget of 2 waves.
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 42);
        ctx.game.area = 25;
        (ctx.player.x, ctx.player.y) = lane_start();
        let mut world = TestWorld {
            complete_at: Some(0),
            hostiles: 8,
            ..Default::default()
        };
        let mut input = ScriptedInput::idle();

        run(&mut ctx, &mut world, &mut input);

        assert_eq!(world.spawn_calls, 2);
    }

    #[test]
    fn test_leave_sector_steers_toward_the_lane() {
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 1);
        ctx.player.x = 100.0;
        ctx.player.y = 100.0;

        leave_sector(&mut ctx, SCREEN_WIDTH, SCREEN_HEIGHT);

        assert!(ctx.keys.is_down(Key::Right));
        assert!(ctx.keys.is_down(Key::Down));
        assert!(!ctx.keys.is_down(Key::Left));
        assert!(!ctx.keys.is_down(Key::Up));
        assert_eq!(ctx.state, LoopState::Running);
    }

    #[test]
    fn test_leave_sector_departs_from_inside_the_lane() {
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 1);
        ctx.scroll_x = 2.5;
        (ctx.player.x, ctx.player.y) = lane_start();

        leave_sector(&mut ctx, SCREEN_WIDTH, SCREEN_HEIGHT);

        assert_eq!(ctx.state, LoopState::Departing);
        assert_eq!(ctx.scroll_x, 0.0);
        assert!(ctx.keys.is_down(Key::Right));

        // Past the right edge the loop is done.
        ctx.player.x = (SCREEN_WIDTH + 1) as f32;
        leave_sector(&mut ctx, SCREEN_WIDTH, SCREEN_HEIGHT);
        assert_eq!(ctx.state, LoopState::Finished);
    }

    #[test]
    fn test_escort_stations_follow_area_rules() {
        let mut player = Player::new(Difficulty::Normal);
        player.x = 500.0;
        player.y = 300.0;

        let escorted = escort_stations(&player, &AreaTraits::for_area(9));
        assert_eq!(
            escorted.wingmates,
            Some([(460.0, 265.0), (460.0, 345.0)])
        );
        assert_eq!(escorted.engineer, Some((400.0, 300.0)));

        let plain = escort_stations(&player, &AreaTraits::for_area(3));
        assert!(plain.wingmates.is_some());
        assert!(plain.engineer.is_none());

        let solo = escort_stations(&player, &AreaTraits::for_area(25));
        assert!(solo.is_empty());
    }

    #[test]
    fn test_fade_music_steps_down_and_clamps() {
        struct VolumeLog(Vec<i32>);
        impl AudioSink for VolumeLog {
            fn play(&mut self, _sfx: Sfx, _pan_x: i32) {}
            fn set_music_volume(&mut self, volume: i32) {
                self.0.push(volume);
            }
        }

        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 1);
        let mut audio = VolumeLog(Vec::new());

        ctx.music_volume = 0.5;
        fade_music(&mut ctx, &mut audio);
        fade_music(&mut ctx, &mut audio);
        fade_music(&mut ctx, &mut audio);
        fade_music(&mut ctx, &mut audio);

        assert_eq!(ctx.music_volume, 0.0);
        assert_eq!(audio.0.last(), Some(&0));
    }
}
