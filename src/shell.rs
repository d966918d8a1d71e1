//! Interactive prompt loop.
//!
//! Each cycle asks for a layer type, the input dimensions and the
//! hyperparameters, then prints the resulting dimensions. Bad input is
//! reported and the same prompt is asked again. The loop ends on EOF or when
//! `quit`/`exit` is entered at the layer-type prompt.

use std::io::{BufRead, Write};

use crate::{
    dims::{parse_values, Dimensions},
    layers::{compute_output_dimensions, LayerKind},
    Error, Result,
};

pub const BANNER: &str = "Welcome to the NN layer dimensionality analyzer";
pub const KIND_PROMPT: &str = "Which layer type are you interested in? [Conv/Pool]: ";
pub const INPUT_PROMPT: &str = "Please enter the input dimensions separated by a space: ";
pub const HYPER_PROMPT: &str = "Please enter the hyperparameters separated by a space: ";

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the input is exhausted. Returns how many results were printed.
    pub fn run(&mut self) -> Result<usize> {
        let mut completed = 0;

        loop {
            writeln!(self.output, "{}", BANNER)?;

            let Some(kind) = self.read_kind()? else {
                break;
            };
            let Some(input) = self.read_input_dims()? else {
                break;
            };
            let Some(output) = self.read_hyperparameters(kind, input)? else {
                break;
            };

            writeln!(
                self.output,
                "The output dimensions for your requested layer are {}.",
                output
            )?;
            completed += 1;
        }

        self.output.flush()?;
        Ok(completed)
    }

    fn read_kind(&mut self) -> Result<Option<LayerKind>> {
        loop {
            let Some(line) = self.prompt(KIND_PROMPT)? else {
                return Ok(None);
            };

            let token = line.trim();
            if token.eq_ignore_ascii_case("quit") || token.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }

            match token.parse::<LayerKind>() {
                Ok(kind) => return Ok(Some(kind)),
                Err(e) => {
                    tracing::warn!("{}", e);
                    writeln!(self.output, "Invalid layer type")?;
                }
            }
        }
    }

    fn read_input_dims(&mut self) -> Result<Option<Dimensions>> {
        loop {
            let Some(line) = self.prompt(INPUT_PROMPT)? else {
                return Ok(None);
            };

            match parse_values(&line).and_then(|values| Dimensions::from_slice(&values)) {
                Ok(dims) => return Ok(Some(dims)),
                Err(e) => self.reject(e)?,
            }
        }
    }

    fn read_hyperparameters(
        &mut self,
        kind: LayerKind,
        input: Dimensions,
    ) -> Result<Option<Dimensions>> {
        loop {
            let Some(line) = self.prompt(HYPER_PROMPT)? else {
                return Ok(None);
            };

            let result = parse_values(&line)
                .and_then(|values| compute_output_dimensions(kind, &input.to_array(), &values));

            match result {
                Ok(output) => return Ok(Some(output)),
                Err(e @ Error::ArityMismatch { .. }) => {
                    self.reject(e)?;
                    writeln!(
                        self.output,
                        "{} expects {} values: {}",
                        kind,
                        kind.hyperparameter_count(),
                        kind.hyperparameter_help()
                    )?;
                }
                Err(e) => self.reject(e)?,
            }
        }
    }

    fn reject(&mut self, error: Error) -> Result<()> {
        if let Error::Io(_) = error {
            return Err(error);
        }
        tracing::warn!("rejected input: {}", error);
        writeln!(self.output, "{}", error)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (usize, String) {
        let mut shell = Shell::new(Cursor::new(script.as_bytes()), Vec::new());
        let completed = shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (completed, output)
    }

    #[test]
    fn test_empty_input_exits() {
        let (completed, output) = run_script("");
        assert_eq!(completed, 0);
        assert!(output.starts_with(BANNER));
    }

    #[test]
    fn test_quit_command() {
        let (completed, output) = run_script("quit\nConv\n");
        assert_eq!(completed, 0);
        assert!(!output.contains(INPUT_PROMPT));
    }
}
