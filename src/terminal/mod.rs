//! Terminal output and keypress input.
//!
//! Styling is a pure function (`render`); only `Console` writes anything and
//! only `TerminalInput` reads anything, so the workflow can be driven with an
//! in-memory buffer and scripted keys in tests.

use ::console::Term;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Foreground styles used by the transcript. The `Dark*` variants are the
/// normal-intensity ANSI colors, the others the bright ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Cyan,
    DarkCyan,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
}

/// Returns `text` wrapped in the escape codes for `style`, or unchanged when
/// colors are off.
pub fn render(text: &str, style: Style, colors: bool) -> String {
    if !colors {
        return text.to_string();
    }
    match style {
        Style::Plain => text.to_string(),
        Style::Cyan => text.bright_cyan().to_string(),
        Style::DarkCyan => text.cyan().to_string(),
        Style::Green => text.bright_green().to_string(),
        Style::DarkGreen => text.green().to_string(),
        Style::Yellow => text.bright_yellow().to_string(),
        Style::DarkYellow => text.yellow().to_string(),
    }
}

/// Whether stdout is a terminal that understands colors.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Line-oriented output sink.
pub struct Console<W: Write> {
    out: W,
    colors: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Console { out, colors }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn styled_line(&mut self, text: &str, style: Style) -> io::Result<()> {
        writeln!(self.out, "{}", render(text, style, self.colors))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Console<io::Stdout> {
    pub fn stdout(colors: bool) -> Self {
        Console::new(io::stdout(), colors)
    }
}

/// Source of operator decisions.
pub trait KeyReader {
    /// Blocks for one keypress. `None` when input is exhausted.
    fn read_key(&mut self) -> io::Result<Option<char>>;

    /// Blocks until a full line has been entered (or input ends).
    fn read_line(&mut self) -> io::Result<String>;
}

/// Reads from the controlling terminal. When stdin is not a terminal (piped
/// input) a keypress is the first character of the next line.
pub struct TerminalInput {
    term: Term,
}

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput {
            term: Term::stdout(),
        }
    }

    fn read_stdin_line() -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyReader for TerminalInput {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        if self.term.is_term() {
            return self.term.read_char().map(Some);
        }
        Ok(Self::read_stdin_line()?.and_then(|line| line.chars().next()))
    }

    fn read_line(&mut self) -> io::Result<String> {
        if self.term.is_term() {
            return self.term.read_line();
        }
        Ok(Self::read_stdin_line()?.unwrap_or_default())
    }
}

/// Replays a fixed sequence of keys, then reports end of input.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: Vec<char>,
    pub keys_read: usize,
    pub lines_read: usize,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(keys: &[char]) -> Self {
        ScriptedInput {
            keys: keys.to_vec(),
            keys_read: 0,
            lines_read: 0,
        }
    }
}

#[cfg(test)]
impl KeyReader for ScriptedInput {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        let key = self.keys.get(self.keys_read).copied();
        if key.is_some() {
            self.keys_read += 1;
        }
        Ok(key)
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.lines_read += 1;
        Ok(String::new())
    }
}
