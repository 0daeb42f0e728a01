use crate::core::{Choice, ConfigProvider, LineEnding};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "shift-cipher")]
#[command(about = "Encode and decode text files with a Caesar shift")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write CRLF line terminators
    #[arg(long)]
    pub crlf: bool,

    /// Run once without the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shift the input forward into the output file
    Encode(ShiftArgs),
    /// Shift the input backward into the output file
    Decode(ShiftArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ShiftArgs {
    #[arg(short, long)]
    pub input: String,

    #[arg(short, long)]
    pub output: String,

    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: i32,
}

impl Command {
    pub fn choice(&self) -> Choice {
        match self {
            Command::Encode(_) => Choice::Encode,
            Command::Decode(_) => Choice::Decode,
        }
    }

    pub fn args(&self) -> &ShiftArgs {
        match self {
            Command::Encode(args) | Command::Decode(args) => args,
        }
    }

    /// Shift to apply, negated for decoding.
    pub fn directed_shift(&self) -> i64 {
        self.choice().directed_shift(self.args().shift)
    }
}

impl CliConfig {
    /// Command line flags override settings loaded from file.
    pub fn line_ending_over<C: ConfigProvider>(&self, file: Option<&C>) -> LineEnding {
        if self.crlf {
            LineEnding::CrLf
        } else {
            file.map(|c| c.line_ending()).unwrap_or_default()
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(command) = &self.command {
            let args = command.args();
            validation::validate_path("input", &args.input)?;
            validation::validate_path("output", &args.output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;

    #[test]
    fn test_no_subcommand_means_interactive() {
        let config = CliConfig::try_parse_from(["shift-cipher"]).unwrap();
        assert!(config.command.is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_encode() {
        let config = CliConfig::try_parse_from([
            "shift-cipher", "-v", "encode", "--input", "in.txt", "--output", "out/enc.txt",
            "--shift", "3",
        ])
        .unwrap();

        assert!(config.verbose);
        let command = config.command.as_ref().unwrap();
        assert_eq!(command.choice(), Choice::Encode);
        assert_eq!(command.args().output, "out/enc.txt");
        assert_eq!(command.directed_shift(), 3);
    }

    #[test]
    fn test_decode_negates_negative_shift() {
        let config = CliConfig::try_parse_from([
            "shift-cipher", "decode", "-i", "in.txt", "-o", "out.txt", "-s", "-5",
        ])
        .unwrap();

        assert_eq!(config.command.unwrap().directed_shift(), 5);
    }

    #[test]
    fn test_non_numeric_shift_is_rejected() {
        let result = CliConfig::try_parse_from([
            "shift-cipher", "encode", "-i", "in.txt", "-o", "out.txt", "-s", "three",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_path_fails_validation() {
        let config = CliConfig::try_parse_from([
            "shift-cipher", "encode", "-i", "", "-o", "out.txt", "-s", "1",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_crlf_flag_overrides_file_setting() {
        let file = TomlConfig::from_toml_str("[output]\nline_ending = \"lf\"\n").unwrap();

        let flagged = CliConfig::try_parse_from(["shift-cipher", "--crlf"]).unwrap();
        assert_eq!(flagged.line_ending_over(Some(&file)), LineEnding::CrLf);

        let plain = CliConfig::try_parse_from(["shift-cipher"]).unwrap();
        assert_eq!(plain.line_ending_over(Some(&file)), LineEnding::Lf);
        assert_eq!(plain.line_ending_over::<TomlConfig>(None), LineEnding::Lf);
    }
}
