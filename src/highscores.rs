//! Player roster and high score leaderboards
//!
//! Every player keeps one best score per game type. The roster is loaded
//! from the score store at startup and written back after each pack.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_USERNAME_LEN;
use crate::{GameType, ScoreTable};

/// Separator used by the flat score file; banned inside names and passwords
pub const FIELD_SEPARATOR: char = ',';

/// A registered player and their best scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub username: String,
    /// Stored as entered
    pub password: String,
    pub high_scores: ScoreTable,
}

impl PlayerProfile {
    pub fn new(username: &str, password: &str) -> Self {
        Self::with_scores(username, password, ScoreTable::default())
    }

    pub fn with_scores(username: &str, password: &str, high_scores: ScoreTable) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            high_scores,
        }
    }
}

/// Whether `attempt` unlocks `profile`
///
/// All credential checks go through here.
pub fn credentials_match(profile: &PlayerProfile, attempt: &str) -> bool {
    profile.password == attempt
}

/// Why a login was refused before any lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyUsername,
    UsernameTooLong,
    /// Contains the score file separator
    InvalidCharacter,
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Known player, password accepted
    Returning(PlayerProfile),
    /// Known player, password refused
    WrongPassword,
    /// New player registered
    Created(PlayerProfile),
    Rejected(RejectReason),
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-indexed
    pub rank: usize,
    pub username: String,
    pub score: u32,
}

/// All known players, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerProfile>,
}

impl Roster {
    pub fn new() -> Self {
        Self { players: Vec::new() }
    }

    pub fn from_profiles(players: Vec<PlayerProfile>) -> Self {
        Self { players }
    }

    pub fn profiles(&self) -> &[PlayerProfile] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, username: &str) -> Option<&PlayerProfile> {
        self.players.iter().find(|p| p.username == username)
    }

    fn validate(username: &str, password: &str) -> Result<(), RejectReason> {
        if username.is_empty() {
            return Err(RejectReason::EmptyUsername);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(RejectReason::UsernameTooLong);
        }
        if username.contains(FIELD_SEPARATOR) || password.contains(FIELD_SEPARATOR) {
            return Err(RejectReason::InvalidCharacter);
        }
        Ok(())
    }

    /// Log in an existing player or register a new one
    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        if let Err(reason) = Self::validate(username, password) {
            log::debug!("login rejected: {:?}", reason);
            return LoginOutcome::Rejected(reason);
        }

        match self.find(username) {
            Some(profile) if credentials_match(profile, password) => {
                log::info!("Welcome back, {}", username);
                LoginOutcome::Returning(profile.clone())
            }
            Some(_) => {
                log::info!("Wrong password for {}", username);
                LoginOutcome::WrongPassword
            }
            None => {
                let profile = PlayerProfile::new(username, password);
                self.players.push(profile.clone());
                log::info!("Registered new player {}", username);
                LoginOutcome::Created(profile)
            }
        }
    }

    /// Replace the stored profile with the same username (or add it)
    pub fn upsert(&mut self, profile: &PlayerProfile) {
        match self.players.iter_mut().find(|p| p.username == profile.username) {
            Some(existing) => *existing = profile.clone(),
            None => self.players.push(profile.clone()),
        }
    }

    /// Ranked scores for one game type, best first; ties keep roster order
    pub fn leaderboard(&self, game_type: GameType) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<&PlayerProfile> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.high_scores.get(game_type).cmp(&a.high_scores.get(game_type)));
        ranked
            .into_iter()
            .enumerate()
            .map(|(i, p)| LeaderboardEntry {
                rank: i + 1,
                username: p.username.clone(),
                score: p.high_scores.get(game_type),
            })
            .collect()
    }

    /// Best score for a game type, if anyone has played
    pub fn top_score(&self, game_type: GameType) -> Option<u32> {
        self.players.iter().map(|p| p.high_scores.get(game_type)).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_profiles(vec![
            PlayerProfile::with_scores("ann", "a", ScoreTable::new([10, 0, 50, 0, 0, 0])),
            PlayerProfile::with_scores("bob", "b", ScoreTable::new([30, 0, 50, 0, 0, 0])),
            PlayerProfile::with_scores("cy", "c", ScoreTable::new([20, 5, 70, 0, 0, 0])),
        ])
    }

    #[test]
    fn test_login_returning_and_wrong_password() {
        let mut r = roster();
        match r.login("bob", "b") {
            LoginOutcome::Returning(p) => assert_eq!(p.high_scores.get(GameType::Shooter), 30),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(r.login("bob", "nope"), LoginOutcome::WrongPassword);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_login_registers_new_player() {
        let mut r = roster();
        assert!(matches!(r.login("dee", "pw"), LoginOutcome::Created(_)));
        assert_eq!(r.len(), 4);
        assert!(matches!(r.login("dee", "pw"), LoginOutcome::Returning(_)));
    }

    #[test]
    fn test_login_rejects_bad_names() {
        let mut r = Roster::new();
        assert_eq!(r.login("", "pw"), LoginOutcome::Rejected(RejectReason::EmptyUsername));
        assert_eq!(
            r.login("abcdefghijklmnopq", "pw"),
            LoginOutcome::Rejected(RejectReason::UsernameTooLong)
        );
        assert!(matches!(r.login("abcdefghijklmnop", "pw"), LoginOutcome::Created(_)));
        assert_eq!(r.login("a,b", "pw"), LoginOutcome::Rejected(RejectReason::InvalidCharacter));
        assert_eq!(r.login("ab", "p,w"), LoginOutcome::Rejected(RejectReason::InvalidCharacter));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_leaderboard_descending_and_stable() {
        let board = roster().leaderboard(GameType::Catcher);
        let names: Vec<&str> = board.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["cy", "ann", "bob"]);
        assert_eq!(board.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(board[0].score, 70);
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut r = roster();
        let updated = PlayerProfile::with_scores("ann", "a", ScoreTable::new([99, 0, 0, 0, 0, 0]));
        r.upsert(&updated);
        assert_eq!(r.len(), 3);
        assert_eq!(r.top_score(GameType::Shooter), Some(99));
        assert_eq!(r.leaderboard(GameType::Shooter)[0].username, "ann");
    }

    #[test]
    fn test_empty_roster() {
        let r = Roster::new();
        assert!(r.leaderboard(GameType::Quad).is_empty());
        assert_eq!(r.top_score(GameType::Quad), None);
    }
}
