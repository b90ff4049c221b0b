use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Write};

use rustyline::error::ReadlineError;

use crate::parse::{parse_bool, parse_double, parse_int};

#[derive(Debug)]
pub enum ConsoleError {
    /// The input stream ended (EOF, or Ctrl-C / Ctrl-D in the editor).
    /// There is no recovery; propagate it out of the program.
    Closed,
    Io(io::Error),
    Readline(ReadlineError),
}

/// One line of dialogue: show `prompt` (no trailing newline), block until a
/// full line is available, return it without its line terminator.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write) -> Result<String, ConsoleError>;
}

/// The interactive session: typed reads loop until the input satisfies the
/// requested grammar, emitting a one-line diagnostic per rejected attempt.
/// The loops are unbounded by contract; callers wanting bounded retries must
/// count attempts themselves.
pub struct Console {
    source: Box<dyn LineSource>,
    output: Box<dyn Write>,
}

impl Console {
    /// Line-edited session on the terminal, with history for non-empty lines.
    pub fn interactive() -> Result<Self, ConsoleError> {
        let editor = rustyline::DefaultEditor::new().map_err(ConsoleError::Readline)?;
        Ok(Self {
            source: Box::new(Interactive { editor }),
            output: Box::new(io::stdout()),
        })
    }

    /// Plain line-at-a-time session over arbitrary streams. Prompts are echoed
    /// to `output`. Suits redirected stdin and tests.
    pub fn piped(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            source: Box::new(Piped { input }),
            output: Box::new(output),
        }
    }

    pub fn stdio() -> Self {
        Self::piped(BufReader::new(io::stdin()), io::stdout())
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.source.read_line(prompt, &mut *self.output)
    }

    pub fn read_bool(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_bool(&line) {
                Some(value) => return Ok(value),
                None => self.println("Please enter true or false.")?,
            }
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i32, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_int(&line) {
                Some(value) => return Ok(value),
                None => self.println("Please enter a valid integer.")?,
            }
        }
    }

    pub fn read_double(&mut self, prompt: &str) -> Result<f64, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_double(&line) {
                Some(value) => return Ok(value),
                None => self.println("Please enter a valid number.")?,
            }
        }
    }

    /// Writes without a line terminator and flushes, so partial lines show up.
    pub fn print(&mut self, value: impl Display) -> Result<(), ConsoleError> {
        write!(self.output, "{}", value)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, value: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", value)?;
        Ok(())
    }

    /// The no-argument `println`: exactly one line terminator.
    pub fn newline(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }
}

struct Interactive {
    editor: rustyline::DefaultEditor,
}

impl LineSource for Interactive {
    fn read_line(&mut self, prompt: &str, _output: &mut dyn Write) -> Result<String, ConsoleError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(&line);
                }
                Ok(line)
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Err(ConsoleError::Closed),
            Err(err) => Err(ConsoleError::Readline(err)),
        }
    }
}

struct Piped<R> {
    input: R,
}

impl<R: BufRead> LineSource for Piped<R> {
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write) -> Result<String, ConsoleError> {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Closed => write!(f, "input stream closed"),
            ConsoleError::Io(err) => write!(f, "console i/o failed: {}", err),
            ConsoleError::Readline(err) => write!(f, "readline failed: {}", err),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Closed => None,
            ConsoleError::Io(err) => Some(err),
            ConsoleError::Readline(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(value: io::Error) -> Self {
        ConsoleError::Io(value)
    }
}

/// Scripted sessions for tests: a piped console reading from a fixed input,
/// with everything it writes captured in a shared transcript.
#[cfg(test)]
pub mod testing {

    use super::*;

    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct Transcript(Rc<RefCell<Vec<u8>>>);

    impl Write for Transcript {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Transcript {
        pub fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    pub fn scripted(input: &str) -> (Console, Transcript) {
        let transcript = Transcript::default();
        let console = Console::piped(Cursor::new(input.to_string()), transcript.clone());
        (console, transcript)
    }
}
