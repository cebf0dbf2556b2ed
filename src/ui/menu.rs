//! Numbered-list menus read from a line-based input

use crate::core::error::{Result, SiegeError};
use std::fmt::Display;
use std::io::{BufRead, Write};

pub const CHOOSE_PROMPT: &str = "Choose: ";
pub const INVALID_CHOICE: &str = "Invalid choice.";

/// Parse a 1-based menu entry into a 0-based index
pub fn parse_selection(text: &str, count: usize) -> Result<usize> {
    let trimmed = text.trim();
    let invalid = || SiegeError::InvalidSelection {
        input: trimmed.to_string(),
        max: count,
    };

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(invalid()),
    }
}

/// Show `prompt` and a numbered list, then read until a valid entry arrives
///
/// Invalid entries print `Invalid choice.` and ask again. The only error
/// that escapes is the input closing (or failing) before a valid entry.
pub fn choose_option<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    options: &[T],
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    T: Display,
{
    writeln!(output, "{}", prompt)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, option)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", CHOOSE_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(SiegeError::InputClosed);
        }

        match parse_selection(&line, options.len()) {
            Ok(index) => return Ok(index),
            Err(e) => {
                tracing::debug!("Rejected menu input: {}", e);
                writeln!(output, "{}", INVALID_CHOICE)?;
            }
        }
    }
}
