//! Console input/output primitives.
//!
//! # Responsibility
//! - Read lines from stdin, re-prompting until the input is usable.
//! - Frame output so message kinds stay visually distinct.
//!
//! # Invariants
//! - Read helpers only return values that satisfy their constraint.
//! - A closed input stream surfaces as an error, never as a busy loop.

use std::io::{self, BufRead, Write};

/// Console primitives over any buffered reader/writer pair.
///
/// Generic so tests can drive it with in-memory buffers.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn print(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    pub fn print_info(&mut self, text: &str) {
        let _ = writeln!(self.output, "|| {text} ||");
    }

    pub fn print_header(&mut self, text: &str) {
        let _ = writeln!(self.output, "/| {text} |\\");
    }

    /// Footer width follows the text it closes off.
    pub fn print_footer(&mut self, basis: &str) {
        let _ = writeln!(self.output, "\\| {} |/", "-".repeat(basis.len()));
    }

    pub fn print_solicitation(&mut self, text: &str) {
        let _ = writeln!(self.output, "-- {text} --");
    }

    pub fn print_error(&mut self, text: &str) {
        let _ = writeln!(self.output, "!! {text} !!");
    }

    /// Reads one line, without its trailing newline.
    ///
    /// # Errors
    /// - The underlying stream fails or has reached end of input.
    pub fn read_string(&mut self) -> io::Result<String> {
        let mut buffer = String::new();
        let read = self.input.read_line(&mut buffer)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads lines until one is non-empty.
    pub fn read_nonempty_string(&mut self) -> io::Result<String> {
        loop {
            let value = self.read_string()?;
            if !value.is_empty() {
                return Ok(value);
            }
            self.print_error("The input must not be empty");
            self.print_solicitation("Please provide nonempty input");
        }
    }

    /// Reads lines until one parses as an integer.
    pub fn read_int(&mut self) -> io::Result<i32> {
        loop {
            match self.read_string()?.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    self.print_error("The input could not be converted to an integer");
                    self.print_solicitation("Please provide an integer");
                }
            }
        }
    }

    /// Reads integers until one lies within `min..=max`.
    pub fn read_int_in_range(&mut self, min: i32, max: i32) -> io::Result<i32> {
        loop {
            let value = self.read_int()?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.print_error(&format!("The input must be between {min} and {max}"));
            self.print_solicitation("Please provide such input");
        }
    }
}
