//! Flat score file
//!
//! One player per line, eight comma-separated fields:
//! `username,password,shooter,runner,catcher,whacker,tri,quad`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ScoreStore, ScoreStoreError};
use crate::highscores::{FIELD_SEPARATOR, PlayerProfile};
use crate::{GameType, ScoreTable};

/// Fields per line: two names plus one score per game type
pub const FIELDS_PER_LINE: usize = 2 + GameType::ALL.len();

/// Parse one line into a profile
pub fn parse_line(line: &str, line_no: usize) -> Result<PlayerProfile, ScoreStoreError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(ScoreStoreError::Malformed {
            line: line_no,
            reason: format!("expected {} fields, found {}", FIELDS_PER_LINE, fields.len()),
        });
    }

    let mut scores = [0u32; 6];
    for (slot, raw) in scores.iter_mut().zip(&fields[2..]) {
        *slot = raw.trim().parse().map_err(|_| ScoreStoreError::Malformed {
            line: line_no,
            reason: format!("score {:?} is not a number", raw),
        })?;
    }

    Ok(PlayerProfile::with_scores(fields[0], fields[1], ScoreTable::new(scores)))
}

/// Render one profile as a line (no newline)
pub fn format_line(profile: &PlayerProfile) -> String {
    let mut line = format!("{},{}", profile.username, profile.password);
    for score in profile.high_scores.as_array() {
        line.push(FIELD_SEPARATOR);
        line.push_str(&score.to_string());
    }
    line
}

/// Parse a whole file; any bad line rejects the lot
pub fn parse_scores(contents: &str) -> Result<Vec<PlayerProfile>, ScoreStoreError> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| parse_line(line, line_no))
        .collect()
}

/// Score file on disk
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Vec<PlayerProfile>, ScoreStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ScoreStoreError::Missing(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        parse_scores(&contents)
    }

    fn save(&mut self, players: &[PlayerProfile]) -> Result<(), ScoreStoreError> {
        let mut contents = String::new();
        for profile in players {
            contents.push_str(&format_line(profile));
            contents.push('\n');
        }
        std::fs::write(&self.path, contents)?;
        log::debug!("wrote {} players to {}", players.len(), self.path.display());
        Ok(())
    }
}
