//! Alien Shooter
//!
//! The ship slides along the bottom edge shooting upward. Aliens spawn on a
//! timer, up to a cap that rises as the round goes on. Poison aliens that
//! reach the ship stun it briefly.

use rand_pcg::Pcg32;

use super::alien::{Alien, AlienKind, AlienState};
use super::bullet::Bullet;
use super::entity::{Entity, sweep_dead};
use super::frame::Frame;
use super::input::InputSnapshot;
use super::minigame::MinigameBase;
use super::player::Player;
use super::timer::Timer;
use crate::audio::SoundEffect;
use crate::{ScreenSize, random_between};

/// Delay between spawns (ms)
pub const SPAWN_MS: f32 = 1200.0;
/// Player stun after a poison touch (ms)
pub const POISON_MS: f32 = 750.0;
/// Score lost to an enemy bullet or a poison touch
pub const DAMAGE: u32 = 10;
/// Cumulative spawn weights out of 100: ship, then splash, rest poison
const SHIP_CHANCE: i32 = 35;
const SPLASH_CHANCE: i32 = 75;
/// Elapsed time at which the alien cap rises (ms)
const FOUR_ALIENS_AT: f32 = 20_000.0;
const FIVE_ALIENS_AT: f32 = 40_000.0;

#[derive(Debug, Clone)]
pub struct AlienShooter {
    base: MinigameBase,
    rng: Pcg32,
    aliens: Vec<Alien>,
    enemy_bullets: Vec<Bullet>,
    spawn_timer: Timer,
    poison_timer: Timer,
}

impl AlienShooter {
    pub fn new(screen: ScreenSize, rng: Pcg32) -> Self {
        Self {
            base: MinigameBase::new(screen),
            rng,
            aliens: Vec::new(),
            enemy_bullets: Vec::new(),
            spawn_timer: Timer::new(SPAWN_MS, false),
            poison_timer: Timer::new(POISON_MS, false),
        }
    }

    pub fn base(&self) -> &MinigameBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MinigameBase {
        &mut self.base
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn enemy_bullets(&self) -> &[Bullet] {
        &self.enemy_bullets
    }

    /// Player input is ignored while poisoned
    pub fn is_player_stunned(&self) -> bool {
        self.poison_timer.is_active()
    }

    /// Concurrent alien cap for the current point in the round
    pub fn max_aliens(&self) -> usize {
        let elapsed = self.base.elapsed();
        if elapsed >= FIVE_ALIENS_AT {
            5
        } else if elapsed >= FOUR_ALIENS_AT {
            4
        } else {
            3
        }
    }

    pub fn update(&mut self, dt_ms: f32, player: &mut Player, input: &InputSnapshot) {
        let frame = self.base.frame(dt_ms);
        self.base.tick(dt_ms);
        self.spawn_timer.update(dt_ms);
        self.poison_timer.update(dt_ms);

        self.spawn_alien();
        if !self.poison_timer.is_active() {
            player.update(&frame, input);
        }
        self.update_aliens(&frame, player);
        self.update_enemy_bullets(&frame, player);
        self.update_player_bullets(&frame, player);
        self.collide(player);
    }

    fn spawn_alien(&mut self) {
        if self.spawn_timer.is_active() || self.aliens.len() >= self.max_aliens() {
            return;
        }
        let roll = random_between(&mut self.rng, 1, 100);
        let kind = if roll <= SHIP_CHANCE {
            AlienKind::Ship
        } else if roll <= SPLASH_CHANCE {
            AlienKind::Splash
        } else {
            AlienKind::Poison
        };
        let alien = Alien::spawn(kind, self.base.screen(), &mut self.rng);
        log::debug!("spawned {:?} alien at {:?}", kind, alien.pos());
        self.aliens.push(alien);
        self.spawn_timer.reset(true);
    }

    fn update_aliens(&mut self, frame: &Frame, player: &Player) {
        let target = player.pos();
        for alien in self.aliens.iter_mut() {
            if let Some(bullet) = alien.update(frame, target) {
                self.enemy_bullets.push(bullet);
                self.base.play(SoundEffect::EnemyShoot);
            }
        }
        sweep_dead(&mut self.aliens);
    }

    fn update_enemy_bullets(&mut self, frame: &Frame, player: &Player) {
        let player_rect = player.rect();
        let height = frame.height();
        let mut hits = 0;
        self.enemy_bullets.retain_mut(|bullet| {
            bullet.update(frame);
            if bullet.rect().intersects(&player_rect) {
                hits += 1;
                false
            } else {
                !bullet.is_off_screen(height)
            }
        });
        for _ in 0..hits {
            self.base.deduct(DAMAGE);
            self.base.play(SoundEffect::PlayerHit);
        }
    }

    fn update_player_bullets(&mut self, frame: &Frame, player: &mut Player) {
        let height = frame.height();
        player.bullets_mut().retain_mut(|bullet| {
            bullet.update(frame);
            !bullet.is_off_screen(height)
        });
    }

    fn collide(&mut self, player: &mut Player) {
        let player_rect = player.rect();
        for alien in self.aliens.iter_mut() {
            if alien.state() != AlienState::Active {
                continue;
            }

            if alien.kind() == AlienKind::Poison && alien.rect().intersects(&player_rect) {
                self.base.play(SoundEffect::Poisoned);
                self.base.deduct(DAMAGE);
                self.poison_timer.reset(true);
                alien.poison();
                continue;
            }

            let bullets = player.bullets_mut();
            let mut i = 0;
            while i < bullets.len() {
                if !bullets[i].rect().intersects(&alien.rect()) {
                    i += 1;
                    continue;
                }
                bullets.remove(i);
                self.base.play(alien.kind().hit_sound());
                alien.lower_hp();
                if alien.hp() == 0 {
                    self.base.add_points(alien.points());
                    alien.deactivate();
                    break;
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
    use crate::sim::bullet::BulletOwner;
    use crate::sim::input::{Key, MouseState};
    use crate::sim::rect::Rect;
    use glam::Vec2;
    use rand::SeedableRng;

    fn setup(seed: u64) -> (AlienShooter, Player) {
        let screen = ScreenSize::default();
        let game = AlienShooter::new(screen, Pcg32::seed_from_u64(seed));
        let mut player = Player::new(PlayerProfile::new("ace", "pw"));
        player.setup(GameType::Shooter, screen);
        (game, player)
    }

    fn bullet_into(target: Rect) -> Bullet {
        let launcher = Rect::new(target.center().x - 32, target.bottom() - 10, 64, 64);
        Bullet::fire(BulletOwner::Player, &launcher)
    }

    #[test]
    fn test_ship_alien_takes_four_hits_then_splats() {
        let (mut game, mut player) = setup(1);
        let mut rng = Pcg32::seed_from_u64(2);
        let alien = Alien::new(AlienKind::Ship, Vec2::new(400.0, 300.0), game.base.screen(), &mut rng);
        game.aliens.push(alien);

        for hit in 1..=4 {
            let target = game.aliens[0].rect();
            player.bullets_mut().push(bullet_into(target));
            game.collide(&mut player);
            assert_eq!(game.aliens[0].hp(), 4 - hit);
            assert!(player.bullets().is_empty());
            if hit < 4 {
                assert_eq!(game.aliens[0].state(), AlienState::Active);
                assert_eq!(game.base.score(), 0);
            }
        }
        assert_eq!(game.aliens[0].state(), AlienState::Splat);
        assert_eq!(game.base.score(), 30);
        let sounds = game.base.drain_sounds();
        assert_eq!(sounds.iter().filter(|s| **s == SoundEffect::ShipAlienHit).count(), 4);
    }

    #[test]
    fn test_splat_alien_ignores_bullets() {
        let (mut game, mut player) = setup(3);
        let mut rng = Pcg32::seed_from_u64(4);
        let mut alien = Alien::new(AlienKind::Splash, Vec2::new(400.0, 300.0), game.base.screen(), &mut rng);
        let target = alien.rect();
        alien.deactivate();
        game.aliens.push(alien);
        player.bullets_mut().push(bullet_into(target));
        game.collide(&mut player);
        assert_eq!(player.bullets().len(), 1);
    }

    #[test]
    fn test_poison_touch_stuns_and_penalizes() {
        let (mut game, mut player) = setup(5);
        game.base.set_score(25);
        let mut rng = Pcg32::seed_from_u64(6);
        let at = player.pos();
        game.aliens.push(Alien::new(AlienKind::Poison, at, game.base.screen(), &mut rng));
        game.spawn_timer.reset(true);

        game.collide(&mut player);
        assert_eq!(game.base.score(), 15);
        assert_eq!(game.aliens[0].state(), AlienState::Poisoned);
        assert!(game.is_player_stunned());
        assert_eq!(game.base.drain_sounds(), vec![SoundEffect::Poisoned]);

        // Input ignored while stunned
        let x = player.pos().x;
        let left = InputSnapshot::fresh(&[Key::Left], MouseState::default());
        game.update(100.0, &mut player, &left);
        assert_eq!(player.pos().x, x);

        game.update(POISON_MS, &mut player, &left);
        game.update(1000.0 / 60.0, &mut player, &left);
        assert!(player.pos().x < x);
    }

    #[test]
    fn test_enemy_bullet_hit_floors_score() {
        let (mut game, mut player) = setup(7);
        game.base.set_score(5);
        game.spawn_timer.reset(true);
        let above = Rect::new(player.rect().x, player.rect().y - 30, 64, 10);
        game.enemy_bullets.push(Bullet::fire(BulletOwner::Enemy, &above));
        game.update(1000.0 / 60.0, &mut player, &InputSnapshot::default());
        assert_eq!(game.base.score(), 0);
        assert!(game.enemy_bullets().is_empty());
        assert!(game.base.drain_sounds().contains(&SoundEffect::PlayerHit));
    }

    #[test]
    fn test_alien_cap_rises_over_time() {
        let (mut game, _) = setup(8);
        assert_eq!(game.max_aliens(), 3);
        game.base.fast_forward(20_000.0);
        assert_eq!(game.max_aliens(), 4);
        game.base.fast_forward(20_000.0);
        assert_eq!(game.max_aliens(), 5);
    }

    #[test]
    fn test_spawning_respects_cap() {
        let (mut game, mut player) = setup(9);
        let input = InputSnapshot::default();
        for _ in 0..(15 * 60) {
            game.update(1000.0 / 60.0, &mut player, &input);
            assert!(game.aliens().len() <= 3);
        }
        assert!(!game.aliens().is_empty());
    }

    #[test]
    fn test_same_seed_same_round() {
        let run = |seed| {
            let (mut game, mut player) = setup(seed);
            let mut input = InputSnapshot::default();
            for i in 0..1800 {
                let keys: &[Key] = if i % 20 < 10 { &[Key::Space, Key::Left] } else { &[Key::Right] };
                input = input.advance(keys, MouseState::default());
                game.update(1000.0 / 60.0, &mut player, &input);
            }
            (game.base.score(), game.aliens().len(), player.pos())
        };
        assert_eq!(run(77), run(77));
    }
}
