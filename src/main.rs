//! Space Arcade - headless native runner
//!
//! Logs in, plays one pack with a scripted input driver at a fixed 60 Hz
//! step, then prints the leaderboards and saves the score file.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use space_arcade::audio::{AudioManager, AudioPlayer};
use space_arcade::consts::NOMINAL_FRAME_MS;
use space_arcade::persistence::FileScoreStore;
use space_arcade::sim::{HoleState, InputSnapshot, Key, Minigame, MouseState};
use space_arcade::{Arcade, ArcadeSettings, GameType, LoginOutcome, SessionPhase};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a pack of space minigames headless", long_about = None)]
struct Args {
    /// Settings JSON (defaults apply when missing)
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
    #[arg(long, default_value = "pilot")]
    user: String,
    #[arg(long, default_value = "")]
    password: String,
    /// Comma separated minigames: shooter, runner, catcher, whacker
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_game,
        default_values = ["shooter", "runner", "catcher", "whacker"]
    )]
    games: Vec<GameType>,
    /// Overrides the settings seed
    #[arg(long)]
    seed: Option<u64>,
    /// Safety cap on simulated frames
    #[arg(long, default_value_t = 60 * 60 * 10)]
    max_frames: u64,
}

fn parse_game(s: &str) -> Result<GameType, String> {
    s.parse()
}

/// Scripted inputs for one frame of the current minigame
fn script(game: &Minigame, frame: u64) -> (Vec<Key>, MouseState) {
    // Press on even frames so edge-triggered inputs keep firing
    let press = frame % 2 == 0;
    match game {
        Minigame::Shooter(_) => {
            let side = if (frame / 45) % 2 == 0 { Key::Left } else { Key::Right };
            let keys = if press { vec![side, Key::Space] } else { vec![side] };
            (keys, MouseState::default())
        }
        Minigame::Runner(_) => {
            let keys = if (frame / 30) % 2 == 0 { vec![Key::Space] } else { Vec::new() };
            (keys, MouseState::default())
        }
        Minigame::Catcher(catcher) => {
            let button = catcher.selector().button().center();
            (Vec::new(), MouseState::at(button.x, button.y, press))
        }
        Minigame::Whacker(whacker) => {
            let target = whacker
                .holes()
                .iter()
                .find(|hole| hole.state() == HoleState::Active)
                .map(|hole| hole.crater().center())
                .unwrap_or_default();
            (Vec::new(), MouseState::at(target.x, target.y, press))
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Space Arcade (headless) starting...");

    let mut settings = ArcadeSettings::load(&args.settings);
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let mut audio = AudioManager::from_settings(&settings);
    let store = FileScoreStore::new(settings.scores_path.clone());
    let mut arcade = Arcade::new(settings, store);

    match arcade.login(&args.user, &args.password).context("could not log in")? {
        LoginOutcome::Returning(_) | LoginOutcome::Created(_) => {}
        LoginOutcome::WrongPassword => bail!("wrong password for {}", args.user),
        LoginOutcome::Rejected(reason) => bail!("username {:?} rejected: {:?}", args.user, reason),
    }
    arcade.start_pack(&args.games).context("could not start pack")?;

    let mut input = InputSnapshot::default();
    let mut frame = 0u64;
    loop {
        if frame >= args.max_frames {
            bail!("pack did not finish within {} frames", args.max_frames);
        }
        let Some(game) = arcade.current_game() else {
            break;
        };
        let (keys, mouse) = script(game, frame);
        input = input.advance(&keys, mouse);

        let phase = arcade.update(NOMINAL_FRAME_MS, &input);
        for effect in arcade.drain_sounds() {
            audio.play_once(effect);
        }
        if frame % 600 == 0 {
            if let Some(game) = arcade.current_game() {
                log::info!("{} | {}", game.time_label(), game.score_label());
            }
        }
        frame += 1;

        match phase {
            SessionPhase::Results => {
                log::info!("Pack total so far: {}", arcade.pack_total());
                arcade.continue_pack();
            }
            SessionPhase::Finished | SessionPhase::Idle => break,
            SessionPhase::Playing => {}
        }
    }

    log::info!("Simulated {} frames, {} sound cues", frame, audio.played());
    if let Some(player) = arcade.player() {
        for (game_type, score) in player.current_scores().iter() {
            if score > 0 {
                println!("{:<8} {:>6}  (best {})", game_type.display_name(), score, player.high_score(game_type));
            }
        }
    }
    for game_type in GameType::ALL {
        let board = arcade.roster().leaderboard(game_type);
        println!("\n== {} ==", game_type.display_name());
        for entry in board.iter().take(5) {
            println!("{:>2}. {:<16} {:>6}", entry.rank, entry.username, entry.score);
        }
    }
    Ok(())
}
