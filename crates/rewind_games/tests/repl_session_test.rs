//! End-to-end tests driving the REPL through its public API.

use rewind_games::{Repl, RewindConfig, SessionManager};
use rewind_tictactoe::{GameStatus, Player};
use std::io::{Cursor, Write};

fn play(config: RewindConfig, script: &str) -> (String, SessionManager) {
    let sessions = SessionManager::new();
    let mut output = Vec::new();
    let mut repl = Repl::new(
        Cursor::new(script.to_string()),
        &mut output,
        sessions.clone(),
        config,
        "main".to_string(),
    )
    .expect("Fresh session");
    repl.run().expect("REPL run");
    (String::from_utf8(output).expect("UTF-8 output"), sessions)
}

#[test]
fn test_tie_game_with_zero_based_config() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(
        file,
        "[display]\ncoordinates_one_based = false\nshow_history = false\nempty_symbol = \"_\""
    )
    .expect("Write config");
    let config = RewindConfig::from_file(file.path()).expect("Valid config");

    let script = "move 0 0\nmove 0 1\nmove 0 2\nmove 1 1\nmove 1 0\nmove 1 2\nmove 2 1\nmove 2 0\nmove 2 2\n";
    let (out, sessions) = play(config, script);

    assert!(out.contains("No winner: Tie"));
    assert!(out.contains("0 _  _  _"));
    assert!(!out.contains("Go to game start"));
    let game = sessions.get_session("main").expect("Session").game;
    assert_eq!(game.status(), GameStatus::Tied);
}

#[test]
fn test_rewind_from_win_reopens_play() {
    let script = "m 1 1\nm 2 1\nm 1 2\nm 2 2\nm 1 3\nm 3 3\njump 4\nm 3 3\n";
    let (out, sessions) = play(RewindConfig::default(), script);

    assert!(out.contains("Winner is: X"));
    assert!(out.contains("Rejected: Game is already over"));
    let game = sessions.get_session("main").expect("Session").game;
    assert_eq!(game.history_len(), 6);
    assert_eq!(
        game.status(),
        GameStatus::InProgress {
            next_player: Player::O
        }
    );
}

#[test]
fn test_help_lists_commands() {
    let (out, _) = play(RewindConfig::default(), "help\n");
    for command in [
        "move", "jump", "history", "new", "use", "drop", "sessions", "quit",
    ] {
        assert!(out.contains(command), "missing {}", command);
    }
}

#[test]
fn test_zero_based_rejections_match_input() {
    let config = RewindConfig::from_toml("[display]\ncoordinates_one_based = false").expect("Valid config");
    let (out, _) = play(config, "move 0 0\nmove 0 0\nmove 3 3\n");
    assert!(out.contains("Rejected: Cell (0, 0) is already occupied"));
    assert!(out.contains("Rejected: Coordinate (3, 3) is outside the 3x3 board"));
}
