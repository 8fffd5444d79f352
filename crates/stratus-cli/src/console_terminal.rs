//! Terminal backed by the process console.
//!
//! On a TTY prompts go through dialoguer; otherwise answers are read one line
//! at a time from the input stream so the binary can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Input, Password};
use stratus_core::Terminal;

pub fn is_interactive_terminal() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl ConsoleTerminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), is_interactive_terminal())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed while waiting for {label}"),
            ));
        }
        writeln!(self.output)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn prompt_error(error: dialoguer::Error) -> io::Error {
    io::Error::other(error.to_string())
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        if !self.interactive {
            return self.read_line(label);
        }
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        if !self.interactive {
            return self.read_line(label);
        }
        Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }

    fn say(&mut self, message: &str) {
        if let Err(error) = writeln!(self.output, "{message}") {
            tracing::debug!(%error, "failed to write terminal output");
        }
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn ok(&mut self) {
        self.say("OK");
    }
}
