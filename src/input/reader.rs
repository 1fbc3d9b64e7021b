use std::io::{self, IsTerminal, Read};

use crate::error::AppError;

pub struct InputReader;

impl InputReader {
    /// Assembles the text to translate from `args` and piped stdin.
    ///
    /// Stdin is only read when it is not a terminal.
    pub fn read(args: &[String]) -> Result<String, AppError> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            Self::assemble(args, None::<io::Empty>)
        } else {
            Self::assemble(args, Some(stdin.lock()))
        }
    }

    /// Joins `args` with single spaces and appends everything read from `piped`.
    ///
    /// The result is returned untrimmed, but must contain more than whitespace.
    pub fn assemble<R: Read>(args: &[String], piped: Option<R>) -> Result<String, AppError> {
        let mut text = args.join(" ");

        if let Some(reader) = piped {
            text.push_str(&Self::read_stream(reader)?);
        }

        if text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "no valid text to translate".to_string(),
            ));
        }

        Ok(text)
    }

    fn read_stream<R: Read>(mut reader: R) -> Result<String, AppError> {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(AppError::InputRead)?;

        String::from_utf8(buffer)
            .map_err(|_| AppError::InvalidInput("input is not valid UTF-8".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_assemble_joins_args() {
        let text = InputReader::assemble(&args(&["Hallo", "Welt"]), None::<&[u8]>).unwrap();
        assert_eq!(text, "Hallo Welt");
    }

    #[test]
    fn test_assemble_appends_piped_input() {
        let piped: &[u8] = b"second part\n";
        let text = InputReader::assemble(&args(&["first", "part"]), Some(piped)).unwrap();
        assert_eq!(text, "first partsecond part\n");
    }

    #[test]
    fn test_assemble_piped_only() {
        let piped: &[u8] = "こんにちは世界\n日本語テスト".as_bytes();
        let text = InputReader::assemble(&[], Some(piped)).unwrap();
        assert_eq!(text, "こんにちは世界\n日本語テスト");
    }

    #[test]
    fn test_assemble_preserves_whitespace() {
        let piped: &[u8] = b"  indented\n\n";
        let text = InputReader::assemble(&[], Some(piped)).unwrap();
        assert_eq!(text, "  indented\n\n");
    }

    #[test]
    fn test_assemble_empty_is_rejected() {
        let result = InputReader::assemble(&[], None::<&[u8]>);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_assemble_whitespace_only_is_rejected() {
        let piped: &[u8] = b" \n\t ";
        let result = InputReader::assemble(&args(&["", " "]), Some(piped));

        let Err(err) = result else {
            panic!("expected an error");
        };
        assert_eq!(err.to_string(), "no valid text to translate");
    }

    #[test]
    fn test_large_piped_input_is_read_in_full() {
        let content = "a".repeat(4 * 1024 * 1024 + 10);
        let text = InputReader::assemble(&args(&["prefix"]), Some(content.as_bytes())).unwrap();
        assert_eq!(text.len(), "prefix".len() + content.len());
        assert!(text.ends_with("aaa"));
    }

    #[test]
    fn test_failing_reader_is_input_read_error() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("pipe closed"))
            }
        }

        let result = InputReader::assemble(&args(&["hi"]), Some(Broken));
        assert!(matches!(result, Err(AppError::InputRead(_))));
    }

    #[test]
    fn test_piped_input_invalid_utf8() {
        let piped: &[u8] = &[0x66, 0x6f, 0xff, 0xfe];
        let result = InputReader::assemble(&[], Some(piped));

        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("UTF-8"));
    }
}
