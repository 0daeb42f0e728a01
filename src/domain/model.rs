/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Encode,
    Decode,
    Quit,
}

impl Choice {
    /// Parses a single-character selection, ignoring case. Anything longer
    /// than one character is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_uppercase().as_str() {
            "E" => Some(Choice::Encode),
            "D" => Some(Choice::Decode),
            "Q" => Some(Choice::Quit),
            _ => None,
        }
    }

    /// Shift handed to the file transform: decoding reverses the direction.
    pub fn directed_shift(self, shift: i32) -> i64 {
        let shift = i64::from(shift);
        match self {
            Choice::Decode => -shift,
            _ => shift,
        }
    }
}

/// Terminator written after each emitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub const NAMES: [&'static str; 2] = ["lf", "crlf"];

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Outcome of a successful file transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    pub lines: usize,
    pub trailing_newline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parse_is_case_insensitive() {
        assert_eq!(Choice::parse("e"), Some(Choice::Encode));
        assert_eq!(Choice::parse("D"), Some(Choice::Decode));
        assert_eq!(Choice::parse("q"), Some(Choice::Quit));
    }

    #[test]
    fn test_choice_parse_rejects_other_input() {
        assert_eq!(Choice::parse(""), None);
        assert_eq!(Choice::parse("x"), None);
        assert_eq!(Choice::parse("encode"), None);
        assert_eq!(Choice::parse("EE"), None);
        assert_eq!(Choice::parse(" E"), None);
    }

    #[test]
    fn test_decode_negates_shift() {
        assert_eq!(Choice::Encode.directed_shift(3), 3);
        assert_eq!(Choice::Decode.directed_shift(3), -3);
        assert_eq!(Choice::Decode.directed_shift(-4), 4);
        assert_eq!(
            Choice::Decode.directed_shift(i32::MIN),
            -i64::from(i32::MIN)
        );
    }

    #[test]
    fn test_line_ending_terminators() {
        assert_eq!(LineEnding::default(), LineEnding::Lf);
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }
}
