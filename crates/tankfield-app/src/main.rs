//! TANKFIELD command-line frontend.
//!
//! `tankfield <LEVEL>` plays the level headless, reading player
//! commands from stdin; `tankfield <LEVEL> --editor` opens the level
//! in the line-oriented editor instead and writes it back on quit.

mod editor_shell;
mod game_loop;

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use tankfield_core::commands::PlayerCommand;
use tankfield_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use tankfield_core::enums::{Facing, Outcome};
use tankfield_core::level::{load_level, write_level, LevelError};
use tankfield_core::types::Rect;
use tankfield_sim::EditorSession;

use game_loop::GameLoopCommand;

const USAGE: &str = "usage: tankfield <LEVEL> [-e | --editor] [--seed N]";

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Shell(#[from] editor_shell::ShellError),
}

#[derive(Debug, PartialEq)]
struct Args {
    level: PathBuf,
    editor: bool,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let result = if args.editor {
        run_editor(&args)
    } else {
        run_game(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut level = None;
    let mut editor = false;
    let mut seed = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-e" | "--editor" => editor = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse().map_err(|_| format!("bad seed: {value}"))?);
            }
            _ if arg.starts_with('-') => return Err(format!("unknown option: {arg}")),
            _ => {
                if level.is_some() {
                    return Err(format!("unexpected argument: {arg}"));
                }
                level = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(Args {
        level: level.ok_or("missing level file")?,
        editor,
        seed,
    })
}

fn field() -> Rect {
    Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT)
}

/// Play a level: spawn a stdin reader feeding the command channel and
/// run the tick loop on this thread until the game ends.
fn run_game(args: &Args) -> Result<(), AppError> {
    let placements = load_level(&args.level)?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    std::thread::Builder::new()
        .name("tankfield-input".into())
        .spawn(move || read_player_input(&cmd_tx))
        .expect("Failed to spawn input thread");

    let snapshot = game_loop::play(&placements, seed, &cmd_rx)?;
    match snapshot.outcome {
        Outcome::Victory => println!("victory"),
        Outcome::Defeat => println!("defeat"),
        Outcome::Playing => {}
    }
    Ok(())
}

/// Translate stdin lines into game-loop commands until quit or EOF.
fn read_player_input(cmd_tx: &mpsc::Sender<GameLoopCommand>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let command = match parse_play_command(&line) {
            Some(command) => command,
            None => {
                if !line.trim().is_empty() {
                    log::warn!("ignoring input: {line}");
                }
                continue;
            }
        };
        let shutdown = matches!(command, GameLoopCommand::Shutdown);
        if cmd_tx.send(command).is_err() || shutdown {
            break;
        }
    }
}

fn parse_play_command(line: &str) -> Option<GameLoopCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let command = match tokens.as_slice() {
        ["turn", "up"] => GameLoopCommand::Player(PlayerCommand::Turn { facing: Facing::Up }),
        ["turn", "left"] => GameLoopCommand::Player(PlayerCommand::Turn {
            facing: Facing::Left,
        }),
        ["turn", "down"] => GameLoopCommand::Player(PlayerCommand::Turn {
            facing: Facing::Down,
        }),
        ["turn", "right"] => GameLoopCommand::Player(PlayerCommand::Turn {
            facing: Facing::Right,
        }),
        ["stop"] => GameLoopCommand::Player(PlayerCommand::Stop),
        ["shoot"] => GameLoopCommand::Player(PlayerCommand::Shoot),
        ["quit"] => GameLoopCommand::Shutdown,
        _ => return None,
    };
    Some(command)
}

/// Edit a level: a missing file starts an empty session instead of
/// aborting. The level is written back when the session ends.
fn run_editor(args: &Args) -> Result<(), AppError> {
    let placements = match load_level(&args.level) {
        Ok(placements) => placements,
        Err(err) if err.is_not_found() => {
            log::info!("{}: starting a new level", args.level.display());
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };

    let mut session = EditorSession::new(field(), &placements)?;
    let placements = editor_shell::run(&mut session, io::stdin().lock())?;
    write_level(&args.level, &placements)?;
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args_play_mode() {
        let args = parse(&["level01.txt"]).unwrap();
        assert_eq!(args.level, PathBuf::from("level01.txt"));
        assert!(!args.editor);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_parse_args_editor_flags() {
        assert!(parse(&["level01.txt", "-e"]).unwrap().editor);
        assert!(parse(&["--editor", "level01.txt"]).unwrap().editor);
    }

    #[test]
    fn test_parse_args_seed() {
        let args = parse(&["level01.txt", "--seed", "42"]).unwrap();
        assert_eq!(args.seed, Some(42));
        assert!(parse(&["level01.txt", "--seed", "nope"]).is_err());
        assert!(parse(&["level01.txt", "--seed"]).is_err());
    }

    #[test]
    fn test_parse_args_rejects_garbage() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
        assert!(parse(&["a.txt", "--bogus"]).is_err());
    }

    #[test]
    fn test_parse_play_commands() {
        assert!(matches!(
            parse_play_command("turn right"),
            Some(GameLoopCommand::Player(PlayerCommand::Turn {
                facing: Facing::Right
            }))
        ));
        assert!(matches!(
            parse_play_command("shoot"),
            Some(GameLoopCommand::Player(PlayerCommand::Shoot))
        ));
        assert!(matches!(
            parse_play_command("quit"),
            Some(GameLoopCommand::Shutdown)
        ));
        assert!(parse_play_command("dance").is_none());
    }
}
