//! Command-line parsing for the play loop.
//!
//! One command per line:
//!
//! ```text
//! 1 2          click cell (1,2)
//! 1,2  (1,2)   same
//! select 1 2   s 1 2
//! move 1 2     m 1 2
//! quit         q
//! # comment    (blank lines and comments are skipped)
//! ```

/// A parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Select or move, decided by what is on the cell.
    Click(i32, i32),
    Select(i32, i32),
    Move(i32, i32),
    Quit,
}

/// Parse one line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" if rest.trim().is_empty() => Ok(Some(Command::Quit)),
        "s" | "select" => {
            let (i, j) = parse_coords(rest)?;
            Ok(Some(Command::Select(i, j)))
        }
        "m" | "move" => {
            let (i, j) = parse_coords(rest)?;
            Ok(Some(Command::Move(i, j)))
        }
        _ => {
            let (i, j) = parse_coords(line)?;
            Ok(Some(Command::Click(i, j)))
        }
    }
}

/// Parse "r c", "r,c" or "(r,c)" into (row, col).
fn parse_coords(s: &str) -> Result<(i32, i32), String> {
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => {
            let row = row.parse().map_err(|_| format!("bad row: {row:?}"))?;
            let col = col.parse().map_err(|_| format!("bad column: {col:?}"))?;
            Ok((row, col))
        }
        _ => Err(format!("expected two coordinates, got {s:?}")),
    }
}
