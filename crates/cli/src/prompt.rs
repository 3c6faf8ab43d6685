//! Interactive prompting for inputs not given on the command line.

use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::error::CliError;

/// Reads values line by line, re-asking until one parses.
///
/// A prompt ends in one of two ways: a line that parses into the requested
/// type, or the end of input, which is an error.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer that prompts and reports go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompts for a value until a line parses as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::EndOfInput`] if input ends first, or
    /// [`CliError::Io`] if reading or writing fails.
    pub fn ask<T>(&mut self, label: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let mut line = String::new();
        loop {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(CliError::EndOfInput(label.to_owned()));
            }

            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(error) => writeln!(self.output, "Invalid input ({error}). Please try again.")?,
            }
        }
    }

    /// Uses `given` if present, otherwise prompts for the value.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Prompter::ask`].
    pub fn or_ask<T>(&mut self, given: Option<T>, label: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match given {
            Some(value) => Ok(value),
            None => self.ask(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<&[u8]>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output).expect("prompts are UTF-8")
    }

    #[test]
    fn parses_first_valid_line() {
        let mut prompter = prompter("  2.5  \n");
        let value: f64 = prompter.ask("Enter pipe length (m)").expect("valid input");

        assert!((value - 2.5).abs() < f64::EPSILON);
        assert_eq!(transcript(prompter), "Enter pipe length (m): ");
    }

    #[test]
    fn retries_until_valid() {
        let mut prompter = prompter("abc\n\n7\n");
        let value: u32 = prompter.ask("Count").expect("eventually valid");

        assert_eq!(value, 7);
        let transcript = transcript(prompter);
        assert_eq!(transcript.matches("Count: ").count(), 3);
        assert_eq!(transcript.matches("Please try again.").count(), 2);
    }

    #[test]
    fn end_of_input_aborts() {
        let mut prompter = prompter("oops\n");
        let result: Result<f64, _> = prompter.ask("Enter fluid density (kg/m^3)");

        match result {
            Err(CliError::EndOfInput(label)) => assert_eq!(label, "Enter fluid density (kg/m^3)"),
            other => panic!("expected end of input, got {other:?}"),
        }
    }

    #[test]
    fn given_value_skips_prompt() {
        let mut prompter = prompter("");
        let value = prompter.or_ask(Some(3_i32), "Unused").expect("given");

        assert_eq!(value, 3);
        assert!(transcript(prompter).is_empty());
    }
}
