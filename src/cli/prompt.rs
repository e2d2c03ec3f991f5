//! Line-based prompts over any reader/writer pair

use crate::error::AppError;
use std::io::{BufRead, Write};

/// Print `prompt` and read one line.
///
/// The line terminator is stripped but other whitespace is kept, so callers
/// decide whether to trim. Bytes that are not UTF-8 are replaced rather than
/// rejected. End of input maps to [`AppError::InputClosed`].
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, AppError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Err(AppError::InputClosed);
    }

    let line = String::from_utf8_lossy(&bytes);
    let stripped = line.strip_suffix('\n').unwrap_or(&line);
    let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
    Ok(stripped.to_string())
}

/// Print `prompt` and wait for Enter
pub fn wait_for_enter<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<(), AppError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    prompt_line(input, output, prompt).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_strips_terminator_only() {
        let mut input = Cursor::new("  best \r\nnext\n");
        let mut output = Vec::<u8>::new();
        let line = prompt_line(&mut input, &mut output, "Format: ").unwrap();
        assert_eq!(line, "  best ");
        assert_eq!(String::from_utf8(output).unwrap(), "Format: ");

        let line = prompt_line(&mut input, &mut Vec::<u8>::new(), "").unwrap();
        assert_eq!(line, "next");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("q");
        assert_eq!(prompt_line(&mut input, &mut Vec::<u8>::new(), "").unwrap(), "q");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut input = Cursor::new(b"/tmp/caf\xe9\nq\n".to_vec());
        let line = prompt_line(&mut input, &mut Vec::<u8>::new(), "Path > ").unwrap();
        assert_eq!(line, "/tmp/caf\u{FFFD}");
        assert_eq!(prompt_line(&mut input, &mut Vec::<u8>::new(), "").unwrap(), "q");
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut input = Cursor::new("");
        let err = prompt_line(&mut input, &mut Vec::<u8>::new(), "> ").unwrap_err();
        assert!(matches!(err, AppError::InputClosed));
        assert!(matches!(
            wait_for_enter(&mut input, &mut Vec::<u8>::new(), "> "),
            Err(AppError::InputClosed)
        ));
    }
}
