//! Interactive name prompting.
//!
//! # Responsibility
//! - Resolve missing positional arguments through an interactive prompt
//!   loop with inline validation.
//!
//! # Invariants
//! - Invalid input never leaves this module; the loop re-asks until the
//!   validator accepts or the input stream ends.
//! - Arguments supplied on the command line are never prompted for.

use roster_core::validate_full_name;
use std::io::{self, BufRead, Write};

/// Resolves the two name fields from optional arguments and a prompt loop.
///
/// # Contract
/// - Both arguments present: returned as-is, nothing is read or written.
/// - Each missing argument is prompted for on `output` and read from
///   `input`, re-prompting until `validate_full_name` accepts.
pub fn resolve_names<R: BufRead, W: Write>(
    first_name: Option<String>,
    last_name: Option<String>,
    input: &mut R,
    output: &mut W,
) -> io::Result<(String, String)> {
    let first = match first_name {
        Some(value) => value,
        None => prompt_name(input, output, "First name")?,
    };
    let last = match last_name {
        Some(value) => value,
        None => prompt_name(input, output, "Last name")?,
    };
    Ok((first, last))
}

/// Prompts for a single name until it passes validation.
///
/// Fails with `UnexpectedEof` when the input stream ends before a valid
/// name was entered.
pub fn prompt_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    loop {
        write!(output, "{label}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed before a valid {} was entered", label.to_lowercase()),
            ));
        }

        let candidate = line.trim();
        match validate_full_name(candidate) {
            Ok(()) => return Ok(candidate.to_string()),
            Err(reason) => writeln!(output, "error: {reason}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{prompt_name, resolve_names};
    use std::io::Cursor;

    #[test]
    fn both_arguments_present_skips_prompting() {
        let mut input = Cursor::new("should not be read\n");
        let mut output = Vec::new();

        let (first, last) = resolve_names(
            Some("Ada".to_string()),
            Some("Lovelace".to_string()),
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(first, "Ada");
        assert_eq!(last, "Lovelace");
        assert!(output.is_empty());
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn missing_arguments_are_prompted_in_order() {
        let mut input = Cursor::new("Ada\nLovelace\n");
        let mut output = Vec::new();

        let (first, last) = resolve_names(None, None, &mut input, &mut output).unwrap();

        assert_eq!(first, "Ada");
        assert_eq!(last, "Lovelace");
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript, "First name: Last name: ");
    }

    #[test]
    fn only_missing_argument_is_prompted() {
        let mut input = Cursor::new("Lovelace\n");
        let mut output = Vec::new();

        let (first, last) =
            resolve_names(Some("Ada".to_string()), None, &mut input, &mut output).unwrap();

        assert_eq!(first, "Ada");
        assert_eq!(last, "Lovelace");
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("Last name:"));
    }

    #[test]
    fn invalid_input_is_rejected_and_reasked() {
        let mut input = Cursor::new("\nAda2\nAda\n");
        let mut output = Vec::new();

        let name = prompt_name(&mut input, &mut output, "First name").unwrap();

        assert_eq!(name, "Ada");
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("First name: ").count(), 3);
        assert_eq!(transcript.matches("error:").count(), 2);
    }

    #[test]
    fn prompted_input_is_trimmed() {
        let mut input = Cursor::new("  Ada  \n");
        let mut output = Vec::new();

        let name = prompt_name(&mut input, &mut output, "First name").unwrap();
        assert_eq!(name, "Ada");
    }

    #[test]
    fn closed_input_fails_instead_of_looping() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_name(&mut input, &mut output, "First name").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
