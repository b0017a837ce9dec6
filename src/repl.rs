//! Line-oriented terminal front end.
//!
//! Each input line is either a `:command` or a run of keypad tokens. Tokens
//! go to the calculator one at a time; the display is printed after the
//! line (or after every token with `echo_tokens`). End of input ends the
//! session.

use std::io::{BufRead, Write};

use crate::calculator::{
    Calculator, DisplaySnapshot, Token, copy_to_clipboard, looks_like_tokens, tokenize,
};
use crate::config::ReplConfig;
use crate::error::Result;

const HELP: &str = "\
keys:     0-9 . + - * / = %   +/- (or neg) to toggle sign
          c clears the entry, ac clears everything
commands: :copy   copy the displayed value
          :state  show the calculator phase
          :help   show this text
          :quit   leave";

/// A REPL command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Copy,
    State,
    Help,
    Quit,
}

impl Command {
    /// Parse a `:command` line. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().strip_prefix(':')? {
            "copy" | "y" => Some(Self::Copy),
            "state" | "s" => Some(Self::State),
            "help" | "h" | "?" => Some(Self::Help),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whether the session should go on after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    calculator: Calculator,
    config: ReplConfig,
}

impl Repl {
    pub fn new(calculator: Calculator, config: ReplConfig) -> Self {
        Self { calculator, config }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Run until end of input or `:quit`.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        writeln!(output, "{}", self.render(&self.calculator.display()))?;

        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                break;
            }

            if self.handle_line(&line, &mut output)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if line.starts_with(':') {
            return match Command::parse(line) {
                Some(command) => self.run_command(command, output),
                None => {
                    writeln!(output, "unknown command {line:?}, try :help")?;
                    Ok(Flow::Continue)
                }
            };
        }

        if !looks_like_tokens(line) {
            writeln!(output, "not calculator input, try :help")?;
            return Ok(Flow::Continue);
        }

        match tokenize(line) {
            Ok(tokens) => self.press_tokens(tokens, output)?,
            Err(e) => writeln!(output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn press_tokens(
        &mut self,
        tokens: impl IntoIterator<Item = Token>,
        output: &mut impl Write,
    ) -> Result<()> {
        if self.config.echo_tokens {
            for token in tokens {
                let snapshot = self.calculator.press(token);
                let key = token.to_string();
                writeln!(output, "{key:>4}  {}", self.render(&snapshot))?;
            }
        } else {
            let snapshot = self.calculator.press_all(tokens);
            writeln!(output, "{}", self.render(&snapshot))?;
        }
        Ok(())
    }

    fn run_command(&mut self, command: Command, output: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Copy => {
                let snapshot = self.calculator.display();
                match copy_to_clipboard(snapshot.text_for_clipboard()) {
                    Ok(()) => writeln!(output, "copied {}", snapshot.text_for_clipboard())?,
                    Err(e) => {
                        tracing::warn!(error = %e, "copy failed");
                        writeln!(output, "{e}")?;
                    }
                }
            }
            Command::State => writeln!(output, "{}", self.calculator.phase())?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render(&self, snapshot: &DisplaySnapshot) -> String {
        if self.config.show_operator {
            snapshot.render()
        } else {
            snapshot.text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, config: ReplConfig) -> String {
        let mut repl = Repl::new(Calculator::new(), config);
        let mut output = Vec::new();
        repl.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn quiet() -> ReplConfig {
        ReplConfig {
            prompt: String::new(),
            ..ReplConfig::default()
        }
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse(":copy"), Some(Command::Copy));
        assert_eq!(Command::parse(" :q "), Some(Command::Quit));
        assert_eq!(Command::parse(":state"), Some(Command::State));
        assert_eq!(Command::parse(":nope"), None);
        assert_eq!(Command::parse("copy"), None);
    }

    #[test]
    fn test_session_prints_display_per_line() {
        let output = session("5 + 3\n=\n", quiet());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["0", "+ 3", "8"]);
    }

    #[test]
    fn test_session_echo_tokens() {
        let config = ReplConfig {
            echo_tokens: true,
            ..quiet()
        };
        let output = session("12*\n", config);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["0", "   1  1", "   2  12", "   *  × 12"]);
    }

    #[test]
    fn test_session_without_operator_glyph() {
        let config = ReplConfig {
            show_operator: false,
            ..quiet()
        };
        let output = session("6/\n", config);
        assert_eq!(output.lines().last(), Some("6"));
    }

    #[test]
    fn test_session_stops_at_quit() {
        let output = session("1\n:quit\n2\n", quiet());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["0", "1"]);
    }

    #[test]
    fn test_session_reports_bad_input() {
        let output = session("hello\n:what\n", quiet());
        assert!(output.contains("not calculator input"));
        assert!(output.contains("unknown command"));
    }

    #[test]
    fn test_session_state_command() {
        let output = session("5+\n:state\n", quiet());
        assert!(output.contains("operator pending"));
    }

    #[test]
    fn test_session_error_display() {
        let output = session("5/0=\n", quiet());
        assert_eq!(output.lines().last(), Some("Error"));
    }
}
