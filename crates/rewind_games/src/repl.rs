//! Interactive line-based front end.
//!
//! Reads intents from any `BufRead`, writes boards to any `Write`. Rejected
//! intents are reported to the user and play continues.

use crate::config::{DisplayConfig, RewindConfig};
use crate::render::{describe_rejection, render_game, render_history};
use crate::session::{SessionError, SessionId, SessionManager};
use derive_more::{Display, Error};
use rewind_tictactoe::{Coord, GameError};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  move <row> <col>   place the next mark (also: m, or `move row,col`)
  jump <step>        show the board after move <step>; 0 is the game start
  history            list recorded moves
  board              show the current board
  new [name]         start a fresh game in a new session
  use <name>         switch to another session
  drop <name>        discard another session
  sessions           list sessions with their status
  help               show this text
  quit               leave";

/// A parsed REPL line.
///
/// Coordinates are as typed; conversion to board indices happens when the
/// command runs, using the display config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Place a mark.
    Move {
        /// Row as typed.
        row: usize,
        /// Column as typed.
        col: usize,
    },
    /// Select a recorded step.
    Jump {
        /// History step.
        step: usize,
    },
    /// Print the move list.
    History,
    /// Print the board and status.
    Board,
    /// Create a session and switch to it.
    New {
        /// Session name; generated when absent.
        name: Option<String>,
    },
    /// Switch session.
    Use {
        /// Session name.
        name: String,
    },
    /// Discard a session other than the active one.
    Drop {
        /// Session name.
        name: String,
    },
    /// List sessions.
    Sessions,
    /// Print help.
    Help,
    /// Leave the REPL.
    Quit,
}

/// Unparseable input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,
    /// First word is not a command.
    #[display("Unknown command '{}' (type 'help')", input)]
    Unknown {
        /// The unrecognised word.
        input: String,
    },
    /// Wrong arguments for a known command.
    #[display("Usage: {}", usage)]
    Usage {
        /// Expected form.
        usage: &'static str,
    },
    /// Argument is not a non-negative integer.
    #[display("'{}' is not a number", value)]
    InvalidNumber {
        /// Offending argument.
        value: String,
    },
    /// A `row,col` pair is malformed.
    #[display("'{}' is not a row,col pair", value)]
    InvalidPair {
        /// Offending argument.
        value: String,
    },
    /// `0` entered while coordinates are one-based.
    #[display("Coordinates start at 1")]
    ZeroCoordinate,
}

fn parse_number(value: &str) -> Result<usize, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
    })
}

fn parse_pair(value: &str) -> Result<(usize, usize), CommandError> {
    match value.split_once(',') {
        Some((row, col)) => Ok((parse_number(row.trim())?, parse_number(col.trim())?)),
        None => Err(CommandError::InvalidPair {
            value: value.to_string(),
        }),
    }
}

impl FromStr for ReplCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match (head.to_lowercase().as_str(), args.as_slice()) {
            ("move" | "m", [row, col]) => Ok(ReplCommand::Move {
                row: parse_number(row)?,
                col: parse_number(col)?,
            }),
            ("move" | "m", [pair]) => {
                let (row, col) = parse_pair(pair)?;
                Ok(ReplCommand::Move { row, col })
            }
            ("move" | "m", _) => Err(CommandError::Usage {
                usage: "move <row> <col>",
            }),
            ("jump" | "j", [step]) => Ok(ReplCommand::Jump {
                step: parse_number(step)?,
            }),
            ("jump" | "j", _) => Err(CommandError::Usage {
                usage: "jump <step>",
            }),
            ("history" | "h", []) => Ok(ReplCommand::History),
            ("board" | "b", []) => Ok(ReplCommand::Board),
            ("new", []) => Ok(ReplCommand::New { name: None }),
            ("new", [name]) => Ok(ReplCommand::New {
                name: Some(name.to_string()),
            }),
            ("new", _) => Err(CommandError::Usage { usage: "new [name]" }),
            ("use", [name]) => Ok(ReplCommand::Use {
                name: name.to_string(),
            }),
            ("use", _) => Err(CommandError::Usage { usage: "use <name>" }),
            ("drop", [name]) => Ok(ReplCommand::Drop {
                name: name.to_string(),
            }),
            ("drop", _) => Err(CommandError::Usage { usage: "drop <name>" }),
            ("sessions", []) => Ok(ReplCommand::Sessions),
            ("help" | "?", _) => Ok(ReplCommand::Help),
            ("quit" | "exit" | "q", _) => Ok(ReplCommand::Quit),
            _ => Err(CommandError::Unknown {
                input: head.to_string(),
            }),
        }
    }
}

/// Parses a space-separated list of `row,col` pairs into board coordinates.
///
/// Pairs are read in the display config's numbering.
#[instrument(skip(display))]
pub fn parse_moves(input: &str, display: &DisplayConfig) -> Result<Vec<Coord>, CommandError> {
    input.split_whitespace()
        .map(|pair| {
            let (row, col) = parse_pair(pair)?;
            to_coord(row, col, display)
        })
        .collect()
}

fn to_coord(row: usize, col: usize, display: &DisplayConfig) -> Result<Coord, CommandError> {
    match (display.to_index(row), display.to_index(col)) {
        (Some(row), Some(col)) => Ok(Coord::new(row, col)),
        _ => Err(CommandError::ZeroCoordinate),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session over arbitrary input and output streams.
pub struct Repl<R, W> {
    input: R,
    output: W,
    sessions: SessionManager,
    active: SessionId,
    config: RewindConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a REPL bound to `session`, registering it if needed.
    #[instrument(skip(input, output, sessions, config))]
    pub fn new(
        input: R,
        output: W,
        sessions: SessionManager,
        config: RewindConfig,
        session: SessionId,
    ) -> Result<Self, SessionError> {
        if !sessions.contains(&session) {
            sessions.create_session(session.clone())?;
        }
        Ok(Self {
            input,
            output,
            sessions,
            active: session,
            config,
        })
    }

    /// Name of the session intents are sent to.
    pub fn active_session(&self) -> &str {
        &self.active
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self), fields(session = %self.active))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("REPL started");
        writeln!(self.output, "Type 'help' for commands.")?;
        self.show_game()?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}> ", self.active)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ReplCommand>() {
                Ok(command) => {
                    if self.execute(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }

        info!("REPL finished");
        Ok(())
    }

    fn execute(&mut self, command: ReplCommand) -> anyhow::Result<Flow> {
        debug!(?command, "Executing");
        match command {
            ReplCommand::Move { row, col } => {
                match to_coord(row, col, self.config.display()) {
                    Ok(coord) => {
                        let result = self
                            .sessions
                            .with_session(&self.active, |s| s.game.apply_move(coord.row, coord.col))?;
                        match result {
                            Ok(_) => self.show_game()?,
                            Err(err) => self.reject(&err)?,
                        }
                    }
                    Err(err) => writeln!(self.output, "{}", err)?,
                }
            }
            ReplCommand::Jump { step } => {
                let result = self
                    .sessions
                    .with_session(&self.active, |s| s.game.jump_to(step))?;
                match result {
                    Ok(()) => self.show_game()?,
                    Err(err) => self.reject(&err)?,
                }
            }
            ReplCommand::History => {
                let history = self
                    .sessions
                    .with_session(&self.active, |s| render_history(&s.game, self.config.display()))?;
                writeln!(self.output, "{}", history)?;
            }
            ReplCommand::Board => self.show_game()?,
            ReplCommand::New { name } => {
                let name = name.unwrap_or_else(|| self.fresh_name());
                match self.sessions.create_session(name) {
                    Ok(id) => {
                        self.active = id;
                        self.show_game()?;
                    }
                    Err(err) => writeln!(self.output, "{}", err)?,
                }
            }
            ReplCommand::Use { name } => {
                if self.sessions.contains(&name) {
                    self.active = name;
                    self.show_game()?;
                } else {
                    writeln!(self.output, "{}", SessionError::NotFound { id: name })?;
                }
            }
            ReplCommand::Drop { name } => {
                if name == self.active {
                    writeln!(self.output, "Cannot drop the active session '{}'", name)?;
                } else {
                    match self.sessions.remove_session(&name) {
                        Ok(session) => writeln!(self.output, "Dropped session '{}'", session.id)?,
                        Err(err) => writeln!(self.output, "{}", err)?,
                    }
                }
            }
            ReplCommand::Sessions => {
                for id in self.sessions.list_sessions() {
                    let marker = if id == self.active { '*' } else { ' ' };
                    // Another handle may drop the session between listing and lookup.
                    if let Some(session) = self.sessions.get_session(&id) {
                        writeln!(self.output, "{} {}  {}", marker, id, session.game.status())?;
                    }
                }
            }
            ReplCommand::Help => writeln!(self.output, "{}", HELP)?,
            ReplCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn reject(&mut self, err: &GameError) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Rejected: {}",
            describe_rejection(err, self.config.display())
        )?;
        Ok(())
    }

    fn show_game(&mut self) -> anyhow::Result<()> {
        let text = self
            .sessions
            .with_session(&self.active, |s| render_game(&s.game, self.config.display()))?;
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn fresh_name(&self) -> SessionId {
        (1..)
            .map(|n| format!("game-{}", n))
            .find(|name| !self.sessions.contains(name))
            .unwrap_or_default()
    }
}
