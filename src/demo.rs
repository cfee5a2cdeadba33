//! A self-contained reference world: enough simulation to fly every path of
//! the mission loop from a plain terminal.
//!
//! This is deliberately not the full campaign. Drones drift in from the
//! right, the player shoots them down, and the sector objective counts
//! kills. It exists so the binaries (and the end-to-end tests) have a real
//! [`World`] behind the loop: starfield, sprites, collisions, HUD text and
//! damage-rect bookkeeping all run through the same code paths a complete
//! game would use.

use anyhow::Result;

use starlance_core::{Game, Mission, ObjectiveKind, Target};
use starlance_engine::{LoopState, MissionContext, Presenter, Stage, TickPhase, World};
use starlance_gfx::{circle, Surface};
use starlance_types::{
    rgb, FontColor, Key, Rect, GREEN, GREY, RED, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE, YELLOW,
};

const STAR_COUNT: usize = 200;

const PLAYER_SPEED: f32 = 4.0;
const BULLET_SPEED: f32 = 10.0;
const FIRE_COOLDOWN_FRAMES: i32 = 8;
const RAM_DAMAGE: i32 = 1;
const MINE_DAMAGE: i32 = 10;
const DRONE_SHIELD: i32 = 2;
const DEFAULT_KILL_QUOTA: i32 = 10;

// HUD text cache slots. Slot 22 belongs to the pause overlay.
const HUD_NAME_SLOT: usize = 0;
const HUD_KILLS_SLOT: usize = 1;
const HUD_SHIELD_SLOT: usize = 2;
const HUD_CLEAR_SLOT: usize = 3;

struct Star {
    x: f32,
    y: f32,
    speed: f32,
}

struct Bullet {
    x: f32,
    y: f32,
    dx: f32,
}

struct Drone {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    shield: i32,
}

impl Drone {
    fn rect(&self, sprite: &Surface) -> Rect {
        Rect::new(self.x as i32, self.y as i32, sprite.width(), sprite.height())
    }
}

/// A drifting mine. Public so the tests can watch the minefield sectors
/// seed them.
#[derive(Debug, Clone, Copy)]
pub struct Mine {
    pub x: f32,
    pub y: f32,
    pub value: i32,
    pub life: i32,
}

struct Burst {
    x: i32,
    y: i32,
    frame: i32,
}

/// The demo simulation behind the default binary.
pub struct DemoWorld {
    mission_name: String,
    kills: i32,
    kill_quota: i32,
    fire_cooldown: i32,

    stars: Vec<Star>,
    bullets: Vec<Bullet>,
    drones: Vec<Drone>,
    mines: Vec<Mine>,
    bursts: Vec<Burst>,

    player_sprite: Surface,
    drone_sprite: Surface,
    bullet_sprite: Surface,
    mine_sprite: Surface,
}

impl DemoWorld {
    pub fn new() -> Self {
        Self {
            mission_name: String::new(),
            kills: 0,
            kill_quota: DEFAULT_KILL_QUOTA,
            fire_cooldown: 0,
            stars: Vec::new(),
            bullets: Vec::new(),
            drones: Vec::new(),
            mines: Vec::new(),
            bursts: Vec::new(),
            player_sprite: player_sprite(),
            drone_sprite: drone_sprite(),
            bullet_sprite: bullet_sprite(),
            mine_sprite: mine_sprite(),
        }
    }

    pub fn kills(&self) -> i32 {
        self.kills
    }

    pub fn mines(&self) -> &[Mine] {
        &self.mines
    }

    fn spawn_drone(&mut self, ctx: &mut MissionContext) {
        self.drones.push(Drone {
            x: ctx.rng.between(820, 920) as f32,
            y: ctx.rng.between(40, SCREEN_HEIGHT - 60) as f32,
            dx: -(ctx.rng.between(1, 3) as f32),
            dy: ctx.rng.between(-2, 2) as f32,
            shield: DRONE_SHIELD,
        });
    }

    fn player_rect(&self, ctx: &MissionContext) -> Rect {
        Rect::new(
            ctx.player.x as i32,
            ctx.player.y as i32,
            self.player_sprite.width(),
            self.player_sprite.height(),
        )
    }

    fn advance_starfield(&mut self, ctx: &mut MissionContext, stage: &mut Stage) {
        let w = SCREEN_WIDTH as f32;
        let h = SCREEN_HEIGHT as f32;

        for star in &mut self.stars {
            star.x -= star.speed + ctx.scroll_x;
            star.y -= ctx.scroll_y;
            if star.x < 0.0 {
                star.x += w;
            } else if star.x >= w {
                star.x -= w;
            }
            if star.y < 0.0 {
                star.y += h;
            } else if star.y >= h {
                star.y -= h;
            }

            let shade = match star.speed as i32 {
                1 => rgb(0x60, 0x60, 0x60),
                2 => rgb(0xa0, 0xa0, 0xa0),
                _ => WHITE,
            };
            let (x, y) = (star.x as i32, star.y as i32);
            {
                let mut px = stage.screen.surface_mut().lock();
                px.put(x, y, shade);
                px.put(x + 1, y, shade);
                px.put(x, y + 1, shade);
                px.put(x + 1, y + 1, shade);
            }
            stage.screen.add_damage(Rect::new(x, y, 2, 2));
        }
    }

    fn advance_mines(&mut self, ctx: &mut MissionContext, stage: &mut Stage) {
        let player = self.player_rect(ctx);
        let mut i = 0;
        while i < self.mines.len() {
            let mine = &mut self.mines[i];
            mine.x -= 2.0 + ctx.drift_x;
            mine.life -= 1;

            let rect = Rect::new(
                mine.x as i32,
                mine.y as i32,
                self.mine_sprite.width(),
                self.mine_sprite.height(),
            );

            if overlaps(rect, player) && ctx.player.is_alive() {
                ctx.player.shield -= MINE_DAMAGE;
                self.bursts.push(Burst {
                    x: rect.x + rect.w / 2,
                    y: rect.y + rect.h / 2,
                    frame: 0,
                });
                self.mines.swap_remove(i);
                continue;
            }
            if mine.life <= 0 || mine.x < -16.0 {
                self.mines.swap_remove(i);
                continue;
            }

            stage.screen.blit(&self.mine_sprite, rect.x, rect.y);
            i += 1;
        }
    }

    fn advance_bullets(&mut self, ctx: &mut MissionContext, stage: &mut Stage) {
        let mut i = 0;
        while i < self.bullets.len() {
            let bullet = &mut self.bullets[i];
            bullet.x += bullet.dx;

            let rect = Rect::new(
                bullet.x as i32,
                bullet.y as i32,
                self.bullet_sprite.width(),
                self.bullet_sprite.height(),
            );

            let mut spent = bullet.x > (SCREEN_WIDTH + 16) as f32;
            if !spent {
                for drone in &mut self.drones {
                    if overlaps(rect, drone.rect(&self.drone_sprite)) {
                        drone.shield -= 1;
                        ctx.game.hits += 1;
                        spent = true;
                        break;
                    }
                }
            }

            if spent {
                self.bullets.swap_remove(i);
            } else {
                stage.screen.blit(&self.bullet_sprite, rect.x, rect.y);
                i += 1;
            }
        }

        ctx.game.accuracy = (ctx.game.hits * 100 / ctx.game.shots.max(1)) as i32;
    }

    fn advance_drones(&mut self, ctx: &mut MissionContext, stage: &mut Stage) {
        let player = self.player_rect(ctx);

        for drone in &mut self.drones {
            drone.x += drone.dx - ctx.drift_x;
            drone.y += drone.dy;
            if drone.y < 20.0 || drone.y > (SCREEN_HEIGHT - 40) as f32 {
                drone.dy = -drone.dy;
            }
            // Slipped past the player; swing back in from the right.
            if drone.x < -24.0 {
                drone.x = ctx.rng.between(810, 900) as f32;
                drone.y = ctx.rng.between(40, SCREEN_HEIGHT - 60) as f32;
            }

            if ctx.player.is_alive() && overlaps(drone.rect(&self.drone_sprite), player) {
                ctx.player.shield -= RAM_DAMAGE;
                drone.shield = 0;
            }
        }

        let mut i = 0;
        while i < self.drones.len() {
            if self.drones[i].shield <= 0 {
                let drone = self.drones.swap_remove(i);
                self.bursts.push(Burst {
                    x: drone.x as i32 + self.drone_sprite.width() / 2,
                    y: drone.y as i32 + self.drone_sprite.height() / 2,
                    frame: 0,
                });
                self.kills += 1;
                ctx.game.total_kills += 1;
            } else {
                i += 1;
            }
        }

        for drone in &self.drones {
            stage
                .screen
                .blit(&self.drone_sprite, drone.x as i32, drone.y as i32);
        }
    }

    fn advance_player(&mut self, ctx: &mut MissionContext, stage: &mut Stage) {
        if ctx.keys.is_down(Key::Up) {
            ctx.player.y -= PLAYER_SPEED;
        }
        if ctx.keys.is_down(Key::Down) {
            ctx.player.y += PLAYER_SPEED;
        }
        if ctx.keys.is_down(Key::Left) {
            ctx.player.x -= PLAYER_SPEED;
        }
        if ctx.keys.is_down(Key::Right) {
            ctx.player.x += PLAYER_SPEED;
        }

        // Departure steering needs the craft to cross the right edge, so
        // the play-area clamp only applies in normal play.
        if ctx.state == LoopState::Running {
            ctx.player.x = ctx.player.x.clamp(10.0, (SCREEN_WIDTH - 100) as f32);
            ctx.player.y = ctx.player.y.clamp(20.0, (SCREEN_HEIGHT - 40) as f32);
        }

        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
        if ctx.keys.is_down(Key::Fire) && self.fire_cooldown == 0 && ctx.player.is_alive() {
            self.bullets.push(Bullet {
                x: ctx.player.x + self.player_sprite.width() as f32,
                y: ctx.player.y + (self.player_sprite.height() / 2 - 1) as f32,
                dx: BULLET_SPEED,
            });
            ctx.game.shots += 1;
            self.fire_cooldown = FIRE_COOLDOWN_FRAMES;
        }

        if ctx.player.is_alive() {
            stage
                .screen
                .blit(&self.player_sprite, ctx.player.x as i32, ctx.player.y as i32);
        }
    }

    fn advance_bursts(&mut self, stage: &mut Stage) {
        let mut i = 0;
        while i < self.bursts.len() {
            let burst = &mut self.bursts[i];
            burst.frame += 1;
            if burst.frame > 8 {
                self.bursts.swap_remove(i);
                continue;
            }

            let radius = burst.frame * 2;
            let color = if burst.frame < 4 { YELLOW } else { RED };
            circle(stage.screen.surface_mut(), burst.x, burst.y, radius, color);
            stage.screen.add_damage(Rect::new(
                burst.x - radius - 1,
                burst.y - radius - 1,
                radius * 2 + 2,
                radius * 2 + 2,
            ));
            i += 1;
        }
    }

    fn draw_hud(&mut self, ctx: &mut MissionContext, stage: &mut Stage) {
        stage.text.render_cached(
            HUD_NAME_SLOT,
            &self.mission_name,
            5,
            3,
            FontColor::White,
            &stage.font,
        );

        let kills = format!("Kills {}/{}", self.kills.min(self.kill_quota), self.kill_quota);
        stage
            .text
            .render_cached(HUD_KILLS_SLOT, &kills, 620, 3, FontColor::Yellow, &stage.font);

        let shield = format!("Shield {}", ctx.player.shield.max(0));
        let tone = if ctx.player.shield * 2 > ctx.player.max_shield {
            FontColor::Green
        } else if ctx.player.shield * 4 > ctx.player.max_shield {
            FontColor::Yellow
        } else {
            FontColor::Red
        };
        stage
            .text
            .render_cached(HUD_SHIELD_SLOT, &shield, 5, 580, tone, &stage.font);

        stage.text.blit_text(HUD_NAME_SLOT, &mut stage.screen);
        stage.text.blit_text(HUD_KILLS_SLOT, &mut stage.screen);
        stage.text.blit_text(HUD_SHIELD_SLOT, &mut stage.screen);

        if ctx.all_aliens_dead && ctx.state == LoopState::Running {
            stage.text.render_cached(
                HUD_CLEAR_SLOT,
                "Sector clear",
                starlance_gfx::CENTERED,
                540,
                FontColor::Cyan,
                &stage.font,
            );
            stage.text.blit_text(HUD_CLEAR_SLOT, &mut stage.screen);
        }
    }
}

impl Default for DemoWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl World for DemoWorld {
    fn reset(&mut self) {
        self.bullets.clear();
        self.drones.clear();
        self.mines.clear();
        self.bursts.clear();
        self.kills = 0;
        self.kill_quota = DEFAULT_KILL_QUOTA;
        self.fire_cooldown = 0;
    }

    fn prepare(&mut self, ctx: &mut MissionContext, mission: &Mission) {
        self.mission_name = mission.name.clone();
        self.kill_quota = mission
            .objectives
            .iter()
            .filter(|o| o.kind == ObjectiveKind::DestroyTargetType && o.target == Target::Any)
            .map(|o| o.value)
            .max()
            .unwrap_or(DEFAULT_KILL_QUOTA);

        ctx.player.x = 200.0;
        ctx.player.y = (SCREEN_HEIGHT / 2) as f32;

        self.stars.clear();
        for _ in 0..STAR_COUNT {
            self.stars.push(Star {
                x: ctx.rng.between(0, SCREEN_WIDTH - 1) as f32,
                y: ctx.rng.between(0, SCREEN_HEIGHT - 1) as f32,
                speed: ctx.rng.between(1, 3) as f32,
            });
        }

        ctx.scroll_x = 1.0;
        for _ in 0..3 {
            self.spawn_drone(ctx);
        }
    }

    fn advance(&mut self, phase: TickPhase, ctx: &mut MissionContext, stage: &mut Stage) {
        match phase {
            TickPhase::Starfield => self.advance_starfield(ctx, stage),
            TickPhase::Collectables => self.advance_mines(ctx, stage),
            TickPhase::Bullets => self.advance_bullets(ctx, stage),
            TickPhase::Aliens => self.advance_drones(ctx, stage),
            TickPhase::Player => self.advance_player(ctx, stage),
            // No cargo or debris in the demo sectors.
            TickPhase::Cargo | TickPhase::Debris => {}
            TickPhase::Explosions => self.advance_bursts(stage),
            TickPhase::Info => {
                ctx.all_aliens_dead = self.kills >= self.kill_quota && self.drones.is_empty();
                self.draw_hud(ctx, stage);
            }
        }
    }

    fn active_hostiles(&self) -> i32 {
        self.drones.len() as i32
    }

    fn spawn_wave(&mut self, ctx: &mut MissionContext) -> i32 {
        let count = ctx.rng.between(1, 3);
        for _ in 0..count {
            self.spawn_drone(ctx);
        }
        count
    }

    fn all_objectives_met(&self) -> bool {
        self.kills >= self.kill_quota
    }

    fn mission_failed(&self) -> bool {
        false
    }

    fn drop_mine(&mut self, x: i32, y: i32, value: i32, life: i32) {
        self.mines.push(Mine {
            x: x as f32,
            y: y as f32,
            value,
            life,
        });
    }

    fn exit_player(&mut self, ctx: &mut MissionContext) {
        self.bullets.clear();
        self.bursts.clear();
        ctx.scroll_x = 0.0;
        ctx.scroll_y = 0.0;
    }
}

/// Text-only interludes for the terminal binary: one diagnostic line per
/// screen, written to stderr so a redirected run keeps a mission log.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn mission_brief(&mut self, mission: &Mission, game: &Game) -> Result<()> {
        // Raw mode needs the explicit carriage return.
        eprint!("[Sector {}] {}\r\n", game.area, mission.name);
        Ok(())
    }

    fn mission_finished(&mut self, game: &Game) -> Result<()> {
        eprint!(
            "[Sector {}] complete, {} kills, {}s flown\r\n",
            game.area, game.total_kills, game.time_taken
        );
        Ok(())
    }

    fn cutscene(&mut self, id: u8) -> Result<()> {
        eprint!("[Cutscene {id}]\r\n");
        Ok(())
    }

    fn credits(&mut self) -> Result<()> {
        eprint!("[Credits]\r\n");
        Ok(())
    }

    fn game_over(&mut self) -> Result<()> {
        eprint!("[Game over]\r\n");
        Ok(())
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

fn sprite(rows: &[&str], hull: u32, accent: u32) -> Surface {
    let w = rows[0].len() as i32;
    let h = rows.len() as i32;
    let mut image = Surface::new(w, h);
    {
        let mut px = image.lock();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let color = match ch {
                    '#' => hull,
                    '+' => accent,
                    _ => continue,
                };
                px.put(x as i32, y as i32, color);
            }
        }
    }
    image.set_transparent()
}

fn player_sprite() -> Surface {
    sprite(
        &[
            "##......................",
            "####....................",
            "..######................",
            "..##########++..........",
            "....############++++....",
            "....################++##",
            "....############++++....",
            "..##########++..........",
            "..######................",
            "####....................",
            "##......................",
        ],
        GREY,
        rgb(0x00, 0xc8, 0xff),
    )
}

fn drone_sprite() -> Surface {
    sprite(
        &[
            "......####......",
            "....########....",
            "..####++++####..",
            "####++++++++####",
            "..####++++####..",
            "....########....",
            "......####......",
        ],
        RED,
        YELLOW,
    )
}

fn bullet_sprite() -> Surface {
    sprite(&["######", "######"], GREEN, GREEN)
}

fn mine_sprite() -> Surface {
    sprite(
        &[
            "....#....",
            ".#..#..#.",
            "..#####..",
            ".##+++##.",
            "###+++###",
            ".##+++##.",
            "..#####..",
            ".#..#..#.",
            "....#....",
        ],
        GREY,
        RED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlance_types::Difficulty;

    fn world_in_sector(area: u8) -> (DemoWorld, MissionContext, Stage, Mission) {
        let mut world = DemoWorld::new();
        let mut ctx = MissionContext::new_campaign(Difficulty::Normal, 42);
        ctx.game.area = area;
        let stage = Stage::new();
        let mission = starlance_core::mission_for_area(area);
        world.reset();
        world.prepare(&mut ctx, &mission);
        (world, ctx, stage, mission)
    }

    #[test]
    fn test_prepare_seeds_stars_and_drones() {
        let (world, ctx, _stage, _mission) = world_in_sector(25);
        assert_eq!(world.stars.len(), STAR_COUNT);
        assert_eq!(world.active_hostiles(), 3);
        assert_eq!(world.kill_quota, 10);
        assert_eq!(ctx.player.x, 200.0);
    }

    #[test]
    fn test_bullet_kills_drone_after_two_hits() {
        let (mut world, mut ctx, mut stage, _mission) = world_in_sector(25);
        world.drones.clear();
        world.drones.push(Drone {
            x: 400.0,
            y: 300.0,
            dx: 0.0,
            dy: 0.0,
            shield: DRONE_SHIELD,
        });

        for _ in 0..2 {
            world.bullets.push(Bullet {
                x: 395.0,
                y: 301.0,
                dx: BULLET_SPEED,
            });
            ctx.game.shots += 1;
            world.advance(TickPhase::Bullets, &mut ctx, &mut stage);
        }
        assert_eq!(world.drones[0].shield, 0);
        assert_eq!(ctx.game.hits, 2);

        world.advance(TickPhase::Aliens, &mut ctx, &mut stage);
        assert!(world.drones.is_empty());
        assert_eq!(world.kills(), 1);
        assert_eq!(ctx.game.total_kills, 1);
        assert_eq!(world.bursts.len(), 1);
    }

    #[test]
    fn test_player_movement_clamps_in_normal_play() {
        let (mut world, mut ctx, mut stage, _mission) = world_in_sector(25);
        ctx.player.y = 25.0;
        ctx.keys.set(Key::Up, true);
        for _ in 0..10 {
            world.advance(TickPhase::Player, &mut ctx, &mut stage);
        }
        assert_eq!(ctx.player.y, 20.0);

        // Departure lifts the clamp so the craft can cross the edge.
        ctx.state = LoopState::Departing;
        ctx.keys.clear_all();
        ctx.keys.set(Key::Right, true);
        ctx.player.x = 690.0;
        for _ in 0..40 {
            world.advance(TickPhase::Player, &mut ctx, &mut stage);
        }
        assert!(ctx.player.x > SCREEN_WIDTH as f32);
    }

    #[test]
    fn test_dropped_mine_damages_player_on_contact() {
        let (mut world, mut ctx, mut stage, _mission) = world_in_sector(24);
        let shield = ctx.player.shield;

        world.drop_mine(ctx.player.x as i32 + 4, ctx.player.y as i32 + 4, 25, 200);
        assert_eq!(world.mines().len(), 1);

        world.advance(TickPhase::Collectables, &mut ctx, &mut stage);
        assert!(world.mines().is_empty());
        assert_eq!(ctx.player.shield, shield - MINE_DAMAGE);
        assert_eq!(world.bursts.len(), 1);
    }

    #[test]
    fn test_objective_tracks_kill_quota() {
        let (mut world, _ctx, _stage, _mission) = world_in_sector(25);
        assert!(!world.all_objectives_met());
        world.kills = 10;
        assert!(world.all_objectives_met());
        assert!(!world.mission_failed());
    }

    #[test]
    fn test_starfield_records_damage_for_every_star() {
        let (mut world, mut ctx, mut stage, _mission) = world_in_sector(25);
        stage.screen.flush_damage();
        world.advance(TickPhase::Starfield, &mut ctx, &mut stage);
        assert_eq!(stage.screen.damage().len(), STAR_COUNT);
    }
}
