//! Arcade session: login, pack scheduling and result bookkeeping
//!
//! The session owns the roster, the score store and the logged-in player.
//! A pack is one, three or four distinct minigames queued up front; each is
//! built with its own seed drawn from the session RNG so a seeded session
//! replays exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::audio::SoundEffect;
use crate::highscores::{LoginOutcome, Roster};
use crate::persistence::{ScoreStore, load_roster, save_roster};
use crate::settings::ArcadeSettings;
use crate::sim::{GameQueue, InputSnapshot, Minigame, PackKind, Player};
use crate::GameType;

/// Where the session is between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No pack running
    Idle,
    /// A minigame is in progress
    Playing,
    /// A minigame just ended and more are queued
    Results,
    /// The last minigame of the pack ended and scores were saved
    Finished,
}

/// Errors from pack selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no player is logged in")]
    NotLoggedIn,
    #[error("a pack is already running")]
    PackInProgress,
    #[error("packs hold 1, 3 or 4 minigames, not {0}")]
    InvalidPackSize(usize),
    #[error("{} appears more than once in the pack", .0.display_name())]
    DuplicateGame(GameType),
    #[error("{} is a pack total, not a minigame", .0.display_name())]
    NotAMinigame(GameType),
}

/// The arcade shell's state, minus drawing
pub struct Arcade<S: ScoreStore> {
    settings: ArcadeSettings,
    store: S,
    roster: Roster,
    player: Option<Player>,
    rng: Pcg32,
    queue: GameQueue,
    current: Option<Minigame>,
    pack: Option<PackKind>,
    pack_games: Vec<GameType>,
    phase: SessionPhase,
    sounds: Vec<SoundEffect>,
}

impl<S: ScoreStore> Arcade<S> {
    /// Open a session; the roster is loaded from `store` right away
    pub fn new(settings: ArcadeSettings, mut store: S) -> Self {
        let roster = load_roster(&mut store);
        let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
        log::info!("Arcade session seed {}", seed);
        Self {
            settings,
            store,
            roster,
            player: None,
            rng: Pcg32::seed_from_u64(seed),
            queue: GameQueue::new(0),
            current: None,
            pack: None,
            pack_games: Vec::new(),
            phase: SessionPhase::Idle,
            sounds: Vec::new(),
        }
    }

    pub fn settings(&self) -> &ArcadeSettings {
        &self.settings
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_game(&self) -> Option<&Minigame> {
        self.current.as_ref()
    }

    /// Minigames still waiting in the pack
    pub fn games_remaining(&self) -> usize {
        self.queue.len()
    }

    /// Sum of this pack's finished minigame scores
    pub fn pack_total(&self) -> u32 {
        let Some(player) = &self.player else {
            return 0;
        };
        self.pack_games.iter().map(|&g| player.current_score(g)).sum()
    }

    /// Log in or register; a successful login replaces the current player.
    /// Refused while a pack is running.
    pub fn login(&mut self, username: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        if matches!(self.phase, SessionPhase::Playing | SessionPhase::Results) {
            return Err(SessionError::PackInProgress);
        }
        let outcome = self.roster.login(username, password);
        if let LoginOutcome::Returning(profile) | LoginOutcome::Created(profile) = &outcome {
            self.player = Some(Player::new(profile.clone()));
        }
        Ok(outcome)
    }

    /// Queue up a pack and start its first minigame
    pub fn start_pack(&mut self, games: &[GameType]) -> Result<(), SessionError> {
        if self.player.is_none() {
            return Err(SessionError::NotLoggedIn);
        }
        if matches!(self.phase, SessionPhase::Playing | SessionPhase::Results) {
            return Err(SessionError::PackInProgress);
        }
        let kind = PackKind::from_len(games.len()).ok_or(SessionError::InvalidPackSize(games.len()))?;
        for (i, &game_type) in games.iter().enumerate() {
            if !game_type.is_minigame() {
                return Err(SessionError::NotAMinigame(game_type));
            }
            if games[..i].contains(&game_type) {
                return Err(SessionError::DuplicateGame(game_type));
            }
        }

        let screen = self.settings.screen;
        let mut queue = GameQueue::new(kind.capacity());
        for &game_type in games {
            let seed: u64 = self.rng.random();
            if let Some(game) = Minigame::new(game_type, screen, seed) {
                queue.enqueue(game);
            }
        }
        self.queue = queue;
        self.pack = Some(kind);
        self.pack_games = games.to_vec();
        if let Some(player) = self.player.as_mut() {
            player.clear_current();
        }
        log::info!(
            "Starting {:?} pack: {}",
            kind,
            games.iter().map(|g| g.display_name()).collect::<Vec<_>>().join(", ")
        );
        self.next_game();
        Ok(())
    }

    fn next_game(&mut self) {
        let Some(game) = self.queue.dequeue() else {
            self.phase = SessionPhase::Idle;
            return;
        };
        let Some(player) = self.player.as_mut() else {
            self.phase = SessionPhase::Idle;
            return;
        };
        player.setup(game.game_type(), self.settings.screen);
        log::info!("Now playing {}", game.game_type().display_name());
        self.current = Some(game);
        self.phase = SessionPhase::Playing;
    }

    /// Advance the running minigame by one frame
    pub fn update(&mut self, dt_ms: f32, input: &InputSnapshot) -> SessionPhase {
        if self.phase != SessionPhase::Playing {
            return self.phase;
        }
        let (Some(game), Some(player)) = (self.current.as_mut(), self.player.as_mut()) else {
            return self.phase;
        };

        game.update(dt_ms, player, input);
        self.sounds.extend(game.drain_sounds());

        if !game.is_active() {
            let game_type = game.game_type();
            let score = game.score();
            player.set_points(game_type, score);
            log::info!("{} over: {} points", game_type.display_name(), score);

            if self.queue.is_empty() {
                self.finish_pack();
            } else {
                self.phase = SessionPhase::Results;
            }
        }
        self.phase
    }

    /// Leave the results screen for the next queued minigame
    pub fn continue_pack(&mut self) -> SessionPhase {
        if self.phase == SessionPhase::Results {
            self.next_game();
        }
        self.phase
    }

    fn finish_pack(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        match (self.pack.and_then(PackKind::aggregate), self.pack_games.as_slice()) {
            (Some(GameType::Tri), &[a, b, c]) => player.save_tri(a, b, c),
            (Some(GameType::Quad), _) => player.save_quad(),
            _ => {}
        }
        player.save_points();
        self.roster.upsert(player.profile());
        save_roster(&mut self.store, &self.roster);
        log::info!("Pack finished for {}", player.username());

        self.current = None;
        self.pack = None;
        self.phase = SessionPhase::Finished;
    }

    /// Take queued sound cues
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryScoreStore;
    use crate::{PlayerProfile, ScoreTable};

    fn arcade(seed: u64) -> Arcade<MemoryScoreStore> {
        let settings = ArcadeSettings {
            seed: Some(seed),
            ..Default::default()
        };
        Arcade::new(settings, MemoryScoreStore::new())
    }

    fn play_out(arcade: &mut Arcade<MemoryScoreStore>) -> SessionPhase {
        let input = InputSnapshot::default();
        for _ in 0..10_000 {
            match arcade.update(50.0, &input) {
                SessionPhase::Playing => {}
                SessionPhase::Results => {
                    arcade.continue_pack();
                }
                phase => return phase,
            }
        }
        arcade.phase()
    }

    #[test]
    fn test_pack_needs_login() {
        let mut a = arcade(1);
        assert_eq!(a.start_pack(&[GameType::Shooter]), Err(SessionError::NotLoggedIn));
    }

    #[test]
    fn test_pack_validation() {
        let mut a = arcade(1);
        a.login("ann", "pw").unwrap();
        assert_eq!(
            a.start_pack(&[GameType::Shooter, GameType::Runner]),
            Err(SessionError::InvalidPackSize(2))
        );
        assert_eq!(
            a.start_pack(&[GameType::Shooter, GameType::Runner, GameType::Shooter]),
            Err(SessionError::DuplicateGame(GameType::Shooter))
        );
        assert_eq!(a.start_pack(&[GameType::Tri]), Err(SessionError::NotAMinigame(GameType::Tri)));
        assert_eq!(a.phase(), SessionPhase::Idle);

        a.start_pack(&[GameType::Whacker]).unwrap();
        assert_eq!(a.start_pack(&[GameType::Runner]), Err(SessionError::PackInProgress));
    }

    #[test]
    fn test_single_pack_saves_scores() {
        let mut a = arcade(2);
        a.login("ann", "pw").unwrap();
        a.start_pack(&[GameType::Catcher]).unwrap();
        assert_eq!(a.phase(), SessionPhase::Playing);
        assert_eq!(play_out(&mut a), SessionPhase::Finished);

        let player = a.player().unwrap();
        let score = player.current_score(GameType::Catcher);
        assert_eq!(player.high_score(GameType::Catcher), score);
        assert_eq!(a.store().saves(), 1);
        assert_eq!(a.store().players()[0].username, "ann");
        assert_eq!(a.store().players()[0].high_scores.get(GameType::Catcher), score);
    }

    #[test]
    fn test_triathlon_totals_three_games() {
        let mut a = arcade(3);
        a.login("ann", "pw").unwrap();
        let games = [GameType::Runner, GameType::Whacker, GameType::Shooter];
        a.start_pack(&games).unwrap();
        assert_eq!(a.games_remaining(), 2);

        let input = InputSnapshot::default();
        let mut results = 0;
        loop {
            match a.update(100.0, &input) {
                SessionPhase::Playing => {}
                SessionPhase::Results => {
                    results += 1;
                    a.continue_pack();
                }
                _ => break,
            }
        }
        assert_eq!(results, 2);
        assert_eq!(a.phase(), SessionPhase::Finished);

        let player = a.player().unwrap();
        let sum: u32 = games.iter().map(|&g| player.current_score(g)).sum();
        assert_eq!(player.current_score(GameType::Tri), sum);
        assert_eq!(a.pack_total(), sum);
        assert_eq!(player.current_score(GameType::Quad), 0);
    }

    #[test]
    fn test_quad_pack_and_replay() {
        let mut a = arcade(4);
        a.login("ann", "pw").unwrap();
        a.start_pack(&GameType::MINIGAMES).unwrap();
        assert_eq!(play_out(&mut a), SessionPhase::Finished);
        let quad = a.player().unwrap().current_score(GameType::Quad);
        assert_eq!(quad, a.pack_total());

        // A finished session can start another pack
        a.start_pack(&[GameType::Runner]).unwrap();
        assert_eq!(a.phase(), SessionPhase::Playing);
        assert_eq!(a.player().unwrap().current_score(GameType::Quad), 0);
    }

    #[test]
    fn test_high_scores_never_drop() {
        let store = MemoryScoreStore::with_players(vec![PlayerProfile::with_scores(
            "ann",
            "pw",
            ScoreTable::new([0, 0, 0, 100_000, 0, 0]),
        )]);
        let settings = ArcadeSettings {
            seed: Some(5),
            ..Default::default()
        };
        let mut a = Arcade::new(settings, store);
        assert!(matches!(a.login("ann", "pw"), Ok(LoginOutcome::Returning(_))));
        a.start_pack(&[GameType::Whacker]).unwrap();
        play_out(&mut a);
        assert_eq!(a.roster().find("ann").unwrap().high_scores.get(GameType::Whacker), 100_000);
    }

    #[test]
    fn test_seeded_sessions_replay() {
        let run = || {
            let mut a = arcade(6);
            a.login("ann", "pw").unwrap();
            a.start_pack(&GameType::MINIGAMES).unwrap();
            play_out(&mut a);
            *a.player().unwrap().current_scores()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_wrong_password_keeps_player_out() {
        let mut a = arcade(7);
        a.login("ann", "pw").unwrap();
        let mut b = Arcade::new(ArcadeSettings::default(), a.store().clone());
        assert!(b.roster().is_empty());
        assert_eq!(b.login("ann", "x"), Ok(LoginOutcome::Created(PlayerProfile::new("ann", "x"))));

        assert_eq!(a.login("ann", "nope"), Ok(LoginOutcome::WrongPassword));
        assert_eq!(a.player().unwrap().username(), "ann");
    }

    #[test]
    fn test_login_refused_mid_pack() {
        let mut a = arcade(8);
        a.login("ann", "pw").unwrap();
        let games = [GameType::Shooter, GameType::Runner, GameType::Whacker];
        a.start_pack(&games).unwrap();
        let input = InputSnapshot::default();
        for _ in 0..100 {
            a.update(50.0, &input);
        }

        assert_eq!(a.login("bob", "pw"), Err(SessionError::PackInProgress));
        assert_eq!(a.player().unwrap().username(), "ann");
        assert!(a.roster().find("bob").is_none());

        assert_eq!(play_out(&mut a), SessionPhase::Finished);
        let player = a.player().unwrap();
        let sum: u32 = games.iter().map(|&g| player.current_score(g)).sum();
        assert_eq!(player.current_score(GameType::Tri), sum);
        assert_eq!(a.roster().find("ann").unwrap().high_scores.get(GameType::Tri), sum);

        assert!(matches!(a.login("bob", "pw"), Ok(LoginOutcome::Created(_))));
        assert_eq!(a.player().unwrap().username(), "bob");
    }
}
