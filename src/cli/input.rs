use std::io::{self, BufRead, Write};

/// Seam between the menu flows and the input mechanism: every prompt
/// expects exactly one line back. Tests drive the flows with a
/// scripted implementation.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Line-oriented prompting over the real terminal.
pub struct StdPrompter {
    input: io::BufReader<io::Stdin>,
}

impl StdPrompter {
    pub fn new() -> Self {
        Self {
            input: io::BufReader::new(io::stdin()),
        }
    }
}

impl Default for StdPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Reads an integer menu choice, re-prompting on anything that does not
/// parse. Never returns until a number is entered; input-stream errors
/// (EOF included) propagate so the session can end instead of spinning.
pub fn read_choice(prompter: &mut dyn Prompter) -> io::Result<i32> {
    loop {
        let line = prompter.read_line("Please make your choice: ")?;
        match line.trim().parse::<i32>() {
            Ok(choice) => return Ok(choice),
            Err(_) => println!("Your input is invalid!"),
        }
    }
}

#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub(crate) fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Prompter, ScriptedPrompter, read_choice};

    #[test]
    fn read_choice_skips_invalid_input() {
        let mut prompter = ScriptedPrompter::new(["not a number", "", "  2  "]);
        assert_eq!(read_choice(&mut prompter).unwrap(), 2);
    }

    #[test]
    fn read_choice_accepts_negative_numbers() {
        let mut prompter = ScriptedPrompter::new(["-1"]);
        assert_eq!(read_choice(&mut prompter).unwrap(), -1);
    }

    #[test]
    fn exhausted_script_surfaces_eof() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        assert!(prompter.read_line("x: ").is_err());
        assert!(read_choice(&mut prompter).is_err());
    }
}
