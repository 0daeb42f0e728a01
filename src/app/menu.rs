use crate::core::transformer::FileTransformer;
use crate::core::Choice;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const INVALID_CHOICE: &str = "ERROR! Enter a valid value!";
pub const EMPTY_INPUT: &str = "ERROR! Empty Input Not Allowed!";
pub const INVALID_SHIFT: &str = "ERROR! Enter a valid shift amount!";

/// One file job collected from the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRequest {
    pub input: String,
    pub output: String,
    pub shift: i32,
}

/// Interactive encode/decode loop over any line-oriented input and output.
///
/// End of input is treated like choosing Quit.
pub struct Menu<R, W> {
    input: R,
    output: W,
    transformer: FileTransformer,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, transformer: FileTransformer) -> Self {
        Self {
            input,
            output,
            transformer,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits. Only terminal I/O errors are returned;
    /// failed file transforms are reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        self.display_menu()?;
        let mut choice = self.get_choice()?;

        while choice != Choice::Quit {
            let Some(request) = self.prompt_for_request()? else {
                break;
            };
            self.apply(choice, &request)?;

            writeln!(self.output, "Finished writing to file.")?;
            writeln!(self.output)?;

            self.display_menu()?;
            choice = self.get_choice()?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "[E]ncode a file")?;
        writeln!(self.output, "[D]ecode a file")?;
        writeln!(self.output, "[Q]uit")?;
        Ok(())
    }

    /// Reprompts until one of E, D or Q (any case) is entered.
    pub fn get_choice(&mut self) -> Result<Choice> {
        loop {
            self.prompt("Enter your choice: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(Choice::Quit);
            };

            match Choice::parse(&line) {
                Some(choice) => return Ok(choice),
                None => writeln!(self.output, "{}", INVALID_CHOICE)?,
            }
        }
    }

    /// Reprompts with `prompt_msg` until a non-empty line is entered.
    /// Returns `None` once input is exhausted.
    pub fn prompt_for_string(&mut self, prompt_msg: &str) -> Result<Option<String>> {
        loop {
            self.prompt(prompt_msg)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            if line.is_empty() {
                writeln!(self.output, "{}", EMPTY_INPUT)?;
            } else {
                return Ok(Some(line));
            }
        }
    }

    fn prompt_for_shift(&mut self) -> Result<Option<i32>> {
        loop {
            let Some(line) = self.prompt_for_string("Enter a shift amount: ")? else {
                return Ok(None);
            };

            match line.trim().parse::<i32>() {
                Ok(shift) => return Ok(Some(shift)),
                Err(_) => writeln!(self.output, "{}", INVALID_SHIFT)?,
            }
        }
    }

    fn prompt_for_request(&mut self) -> Result<Option<ShiftRequest>> {
        let Some(input) = self.prompt_for_string("Enter an input file: ")? else {
            return Ok(None);
        };
        let Some(output) = self.prompt_for_string("Enter an output file: ")? else {
            return Ok(None);
        };
        let Some(shift) = self.prompt_for_shift()? else {
            return Ok(None);
        };

        Ok(Some(ShiftRequest {
            input,
            output,
            shift,
        }))
    }

    fn apply(&mut self, choice: Choice, request: &ShiftRequest) -> Result<()> {
        let shift = choice.directed_shift(request.shift);
        tracing::debug!("{:?} requested: {:?}", choice, request);

        match self
            .transformer
            .transform_file(&request.input, &request.output, shift)
        {
            Ok(summary) => {
                tracing::info!("✅ {} lines written to {}", summary.lines, request.output);
            }
            Err(e) => {
                tracing::error!("❌ Transform failed: {}", e);
                writeln!(self.output, "{}", e.user_friendly_message())?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, msg: &str) -> Result<()> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
