//! Drives an engine from input lines and reports back as text.

use std::io::{self, BufRead, Write};

use morris_core::{Engine, Pos};
use tracing::{debug, warn};

use crate::input::{parse_line, Command};
use crate::render::{draw, symbol};

/// Why a session stopped reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    GameOver,
    Quit,
    EndOfInput,
}

pub struct Session<W> {
    engine: Engine,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(engine: Engine, out: W) -> Self {
        Session { engine, out }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Print the board, then apply commands until the game ends, the player
    /// quits, or input runs out.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<Finish> {
        write!(self.out, "{}", draw(&self.engine))?;

        for (lineno, line) in input.lines().enumerate() {
            let line = line?;
            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!(line = lineno + 1, "unreadable input: {e}");
                    writeln!(self.out, "Could not read {line:?}: {e}")?;
                    continue;
                }
            };
            debug!(?command, "input");

            if command == Command::Quit {
                return Ok(Finish::Quit);
            }
            self.apply(command)?;
            if self.engine.is_over() {
                return Ok(Finish::GameOver);
            }
        }
        Ok(Finish::EndOfInput)
    }

    /// Apply one command and print what happened.
    pub fn apply(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Click(i, j) if self.is_own_stone(i, j) => self.select(i, j),
            Command::Click(i, j) | Command::Move(i, j) => self.move_stone(i, j),
            Command::Select(i, j) => self.select(i, j),
            Command::Quit => Ok(()),
        }
    }

    fn is_own_stone(&self, i: i32, j: i32) -> bool {
        self.engine.occupant(i, j) == Some(self.engine.current_player())
    }

    fn select(&mut self, i: i32, j: i32) -> io::Result<()> {
        if self.engine.select(i, j) {
            writeln!(self.out, "Selected stone at ({i}, {j}).")
        } else {
            let player = symbol(self.engine.current_player());
            writeln!(self.out, "No stone of player {player} at ({i}, {j}).")
        }
    }

    fn move_stone(&mut self, i: i32, j: i32) -> io::Result<()> {
        let outcome = self.engine.move_stone(i, j);
        if outcome.still_selected {
            let hint = match self.engine.selected() {
                Some(stone) => match stone.pos {
                    Some(pos) => format!("stone at {pos} is still selected"),
                    None => "a new stone is ready to place".to_string(),
                },
                None => "select one of your stones first".to_string(),
            };
            writeln!(self.out, "Invalid move to ({i}, {j}): {hint}.")?;
            return Ok(());
        }

        write!(self.out, "{}", draw(&self.engine))?;
        if let Some(line) = self.engine.winning_line() {
            let cells: Vec<String> = line.iter().map(Pos::to_string).collect();
            writeln!(self.out, "Winning line: {}", cells.join(" "))?;
        }
        Ok(())
    }
}
