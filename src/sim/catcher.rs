//! Star Catcher
//!
//! Each wave starts with the selector: the player stops a sliding marker to
//! choose the net's sideways speed and direction. The net then launches
//! upward, bouncing off the walls and floor, while three stars wander the
//! screen. Asteroids drift across above the selector and shove whatever
//! they touch. The wave ends when every star is gone or the net leaves
//! through the top.

use rand_pcg::Pcg32;

use super::catcher_asteroid::CatcherAsteroid;
use super::collision::{Axis, Dir, circle_push_apart};
use super::entity::Entity;
use super::frame::Frame;
use super::input::InputSnapshot;
use super::minigame::MinigameBase;
use super::player::Player;
use super::selector::Selector;
use super::star::{Star, StarSize};
use super::timer::Timer;
use crate::ScreenSize;
use crate::audio::SoundEffect;

/// Delay between asteroid spawns (ms)
pub const ASTEROID_MS: f32 = 1000.0;
/// Star/asteroid collisions are skipped this long after launch (ms)
pub const GRACE_MS: f32 = 1500.0;

#[derive(Debug, Clone)]
pub struct StarCatcher {
    base: MinigameBase,
    rng: Pcg32,
    selector: Selector,
    stars: Vec<Star>,
    asteroids: Vec<CatcherAsteroid>,
    asteroid_timer: Timer,
    wait_timer: Timer,
    launched: bool,
}

impl StarCatcher {
    pub fn new(screen: ScreenSize, mut rng: Pcg32) -> Self {
        let stars = StarSize::ALL
            .iter()
            .map(|&size| Star::new(size, screen, &mut rng))
            .collect();
        Self {
            base: MinigameBase::new(screen),
            rng,
            selector: Selector::new(screen),
            stars,
            asteroids: Vec::new(),
            asteroid_timer: Timer::new(ASTEROID_MS, false),
            wait_timer: Timer::new(GRACE_MS, false),
            launched: false,
        }
    }

    pub fn base(&self) -> &MinigameBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MinigameBase {
        &mut self.base
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn asteroids(&self) -> &[CatcherAsteroid] {
        &self.asteroids
    }

    /// The net has left the selector this wave
    pub fn is_launched(&self) -> bool {
        self.launched
    }

    pub fn update(&mut self, dt_ms: f32, player: &mut Player, input: &InputSnapshot) {
        let frame = self.base.frame(dt_ms);
        self.base.tick(dt_ms);
        self.asteroid_timer.update(dt_ms);
        self.wait_timer.update(dt_ms);

        self.selector.update(&frame, input);
        if self.selector.has_clicked() {
            if !self.launched {
                self.base.play(SoundEffect::Button);
                player.change_x_speed(self.selector.speed(), self.selector.dir());
                self.launched = true;
                self.wait_timer.reset(true);
                log::debug!("net launched at speed {:.2} {:?}", self.selector.speed(), self.selector.dir());
            }
            player.update(&frame, input);
            for star in self.stars.iter_mut().filter(|s| s.is_active()) {
                star.update(&frame, &mut self.rng);
            }
        }

        if !self.asteroid_timer.is_active() {
            let asteroid = CatcherAsteroid::spawn(self.base.screen(), self.selector.top(), &mut self.rng);
            self.asteroids.push(asteroid);
            self.asteroid_timer.reset(true);
        }
        for asteroid in self.asteroids.iter_mut() {
            asteroid.update(&frame);
        }

        self.collide(&frame, player);
    }

    fn collide(&mut self, frame: &Frame, player: &mut Player) {
        if self.launched {
            let all_gone = self.stars.iter().all(|s| !s.is_active());
            if player.rect().bottom() <= 0 || all_gone {
                self.reset_wave(player);
                return;
            }
            self.bounce_player(frame, player);
        }

        let width = frame.width();
        self.asteroids.retain(|a| !a.has_crossed(width));
        self.push_player(player);

        if self.launched {
            self.collide_stars(frame, player);
        }
    }

    /// Back to the selector with fresh stars
    fn reset_wave(&mut self, player: &mut Player) {
        log::debug!("catcher wave over, score {}", self.base.score());
        self.selector.reset_click();
        if let Some(game_type) = player.game_type() {
            player.setup(game_type, self.base.screen());
        }
        self.launched = false;
        let screen = self.base.screen();
        for star in self.stars.iter_mut() {
            star.reactivate(screen, &mut self.rng);
        }
        self.asteroids.clear();
        self.wait_timer.reset(false);
    }

    fn bounce_player(&mut self, frame: &Frame, player: &mut Player) {
        let rect = player.rect();
        let bounce = if rect.right() >= frame.width() {
            Some((Axis::X, Dir::Neg))
        } else if rect.left() <= 0 {
            Some((Axis::X, Dir::Pos))
        } else if rect.bottom() >= frame.height() {
            Some((Axis::Y, Dir::Neg))
        } else {
            None
        };
        if let Some((axis, dir)) = bounce {
            player.change_dir(axis, dir);
            self.base.play(SoundEffect::Bounce);
        }
    }

    fn push_player(&mut self, player: &mut Player) {
        for asteroid in &self.asteroids {
            let result = circle_push_apart(player.center(), player.radius(), asteroid.center(), asteroid.radius());
            if !result.hit {
                continue;
            }
            player.add_to_pos(result.push());
            let (dx, dy) = result.dirs();
            player.change_dir(Axis::X, dx);
            player.change_dir(Axis::Y, dy);
            self.base.play(SoundEffect::Bounce);
        }
    }

    fn collide_stars(&mut self, frame: &Frame, player: &Player) {
        let player_rect = player.rect();
        let grace = self.wait_timer.is_active();
        for star in self.stars.iter_mut().filter(|s| s.is_active()) {
            let rect = star.rect();
            if rect.intersects(&player_rect) {
                self.base.add_points(star.points());
                star.deactivate();
                self.base.play(SoundEffect::Catch);
            } else if rect.right() >= frame.width() {
                star.change_dir(Axis::X, Dir::Neg);
                self.base.play(SoundEffect::Bounce);
            } else if rect.left() <= 0 {
                star.change_dir(Axis::X, Dir::Pos);
                self.base.play(SoundEffect::Bounce);
            } else if rect.bottom() <= 0 {
                star.deactivate();
            } else if rect.bottom() >= frame.height() {
                star.change_dir(Axis::Y, Dir::Neg);
                self.base.play(SoundEffect::Bounce);
            }

            if grace || !star.is_active() {
                continue;
            }
            for asteroid in &self.asteroids {
                let center = star.rect().center().as_vec2();
                let result = circle_push_apart(center, star.radius(), asteroid.center(), asteroid.radius());
                if result.hit {
                    star.add_to_pos(result.push());
                    let (dx, dy) = result.dirs();
                    star.change_dir(Axis::X, dx);
                    star.change_dir(Axis::Y, dy);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameType;
    use crate::highscores::PlayerProfile;
    use crate::sim::input::MouseState;
    use glam::Vec2;
    use rand::SeedableRng;

    const DT: f32 = 1000.0 / 60.0;

    fn setup() -> (StarCatcher, Player) {
        let screen = ScreenSize::default();
        let game = StarCatcher::new(screen, Pcg32::seed_from_u64(30));
        let mut player = Player::new(PlayerProfile::new("ace", "pw"));
        player.setup(GameType::Catcher, screen);
        (game, player)
    }

    fn click_stop(game: &StarCatcher) -> InputSnapshot {
        let c = game.selector().button().center();
        InputSnapshot::fresh(&[], MouseState::at(c.x, c.y, true))
    }

    fn launch(game: &mut StarCatcher, player: &mut Player) {
        let click = click_stop(game);
        game.update(DT, player, &click);
        assert!(game.is_launched());
    }

    #[test]
    fn test_waits_on_selector() {
        let (mut game, mut player) = setup();
        let start = player.pos();
        let star_pos: Vec<Vec2> = game.stars().iter().map(|s| s.pos()).collect();
        for _ in 0..120 {
            game.update(DT, &mut player, &InputSnapshot::default());
        }
        assert!(!game.is_launched());
        assert_eq!(player.pos(), start);
        assert!(game.stars().iter().all(|s| s.is_active()));
        let now: Vec<Vec2> = game.stars().iter().map(|s| s.pos()).collect();
        assert_eq!(now, star_pos);
    }

    #[test]
    fn test_launch_sets_speed_and_grace() {
        let (mut game, mut player) = setup();
        launch(&mut game, &mut player);
        assert!(game.base.drain_sounds().contains(&SoundEffect::Button));
        assert!(game.wait_timer.is_active());
        assert_eq!(player.dir(Axis::X), Some(game.selector().dir()));
        let y = player.pos().y;
        game.update(DT, &mut player, &InputSnapshot::default());
        assert!(player.pos().y < y);
    }

    #[test]
    fn test_catching_a_star_scores() {
        let (mut game, mut player) = setup();
        launch(&mut game, &mut player);
        let target = player.center() - game.stars[2].rect().center().as_vec2();
        game.stars[2].add_to_pos(target);
        let frame = game.base.frame(DT);
        game.collide(&frame, &mut player);
        assert_eq!(game.base.score(), StarSize::Small.points());
        assert!(!game.stars[2].is_active());
        assert!(game.base.drain_sounds().contains(&SoundEffect::Catch));
    }

    #[test]
    fn test_net_leaving_top_resets_wave() {
        let (mut game, mut player) = setup();
        launch(&mut game, &mut player);
        game.stars[0].deactivate();
        player.add_to_pos(Vec2::new(0.0, -800.0));
        let frame = game.base.frame(DT);
        game.collide(&frame, &mut player);
        assert!(!game.is_launched());
        assert!(!game.selector().has_clicked());
        assert!(game.stars().iter().all(|s| s.is_active()));
        assert!(game.asteroids().is_empty());
        assert_eq!(player.rect().bottom(), 768 - 24);
    }

    #[test]
    fn test_all_stars_gone_resets_wave() {
        let (mut game, mut player) = setup();
        launch(&mut game, &mut player);
        for star in game.stars.iter_mut() {
            star.deactivate();
        }
        let frame = game.base.frame(DT);
        game.collide(&frame, &mut player);
        assert!(!game.is_launched());
    }

    #[test]
    fn test_wall_bounce_flips_net() {
        let (mut game, mut player) = setup();
        launch(&mut game, &mut player);
        game.base.drain_sounds();
        player.add_to_pos(Vec2::new(600.0, 0.0));
        let frame = game.base.frame(DT);
        game.bounce_player(&frame, &mut player);
        assert_eq!(player.dir(Axis::X), Some(Dir::Neg));
        assert_eq!(player.boosts().x, 0.5);
        assert_eq!(game.base.drain_sounds(), vec![SoundEffect::Bounce]);
    }

    #[test]
    fn test_asteroid_pushes_net_out_of_overlap() {
        let (mut game, mut player) = setup();
        let c = player.center();
        game.asteroids.push(CatcherAsteroid::new(Vec2::new(c.x - 64.0 - 40.0, c.y - 64.0), Dir::Pos));
        game.push_player(&mut player);

        let asteroid = &game.asteroids[0];
        let dist = player.center().distance(asteroid.center());
        assert!((dist - (player.radius() + asteroid.radius())).abs() < 1.0);
        assert_eq!(player.dir(Axis::X), Some(Dir::Pos));
        assert_eq!(player.dir(Axis::Y), Some(Dir::Pos));
    }

    #[test]
    fn test_grace_window_shields_stars() {
        let (mut game, mut player) = setup();
        launch(&mut game, &mut player);
        let star_center = Vec2::new(300.0, 300.0);
        let offset = star_center - game.stars[1].rect().center().as_vec2();
        game.stars[1].add_to_pos(offset);
        game.asteroids.clear();
        game.asteroids.push(CatcherAsteroid::new(Vec2::new(300.0 - 64.0 + 20.0, 300.0 - 64.0), Dir::Pos));

        let frame = game.base.frame(DT);
        let before = game.stars[1].pos();
        game.collide_stars(&frame, &player);
        assert_eq!(game.stars[1].pos(), before);

        game.wait_timer.deactivate();
        game.collide_stars(&frame, &player);
        assert!(game.stars[1].pos().x < before.x);
        assert_eq!(game.stars[1].dir(Axis::X), Dir::Neg);
    }

    #[test]
    fn test_asteroids_stay_above_selector() {
        let (mut game, mut player) = setup();
        for _ in 0..600 {
            game.update(DT, &mut player, &InputSnapshot::default());
            for asteroid in game.asteroids() {
                assert!(asteroid.rect().bottom() <= game.selector().top());
            }
        }
        assert!(!game.asteroids().is_empty());
    }
}
