use crate::core::cipher;
use crate::domain::model::{LineEnding, TransformSummary};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CipherError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Shifts a text file line by line into another file.
#[derive(Debug, Clone, Default)]
pub struct FileTransformer {
    line_ending: LineEnding,
}

impl FileTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::with_line_ending(config.line_ending())
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Reads `input`, shifts every line by `shift` and writes the result to
    /// `output`, creating missing parent directories of `output`.
    ///
    /// Every line but the last is followed by a terminator. The last line only
    /// gets one when `shift` is positive (encoding); decoding leaves it bare.
    ///
    /// Any failure to open, read, create or write is reported as
    /// [`CipherError::ResourceAccess`] naming both files.
    pub fn transform_file(&self, input: &str, output: &str, shift: i64) -> Result<TransformSummary> {
        let access = |e: std::io::Error| CipherError::resource_access(input, output, e);

        tracing::debug!("Shifting {} -> {} by {}", input, output, shift);

        let reader = BufReader::new(File::open(input).map_err(access)?);

        if let Some(parent) = Path::new(output).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(access)?;
            }
        }
        let mut writer = BufWriter::new(File::create(output).map_err(access)?);

        let encoding = shift > 0;
        let terminator = self.line_ending.as_str().as_bytes();
        let mut summary = TransformSummary {
            lines: 0,
            trailing_newline: false,
        };

        let mut lines = reader.lines().peekable();
        while let Some(line) = lines.next() {
            let line = line.map_err(access)?;
            writer
                .write_all(cipher::shift(&line, shift).as_bytes())
                .map_err(access)?;
            summary.lines += 1;

            let is_last = lines.peek().is_none();
            if !is_last || encoding {
                writer.write_all(terminator).map_err(access)?;
                summary.trailing_newline = is_last;
            }
        }

        writer.flush().map_err(access)?;

        tracing::debug!("Wrote {} lines to {}", summary.lines, output);
        Ok(summary)
    }

    /// Like [`transform_file`](Self::transform_file) but reports a failure on
    /// stdout and returns `false` instead of an error.
    pub fn transform(&self, input: &str, output: &str, shift: i64) -> bool {
        match self.transform_file(input, output, shift) {
            Ok(summary) => {
                tracing::info!("✅ {} lines written to {}", summary.lines, output);
                true
            }
            Err(e) => {
                tracing::error!("❌ Transform failed: {} ({:?})", e, std::error::Error::source(&e));
                println!("{}", e.user_friendly_message());
                false
            }
        }
    }
}
