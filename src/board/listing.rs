use crate::prelude::*;

use anyhow::Context;

/// Contiguous runs of ASCII digits; every other character is a separator.
pub fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
}

pub fn parse_values<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<u16>, ValidationError> {
    tokens
        .into_iter()
        .map(|token| {
            token.parse().map_err(|_| ValidationError::BadToken {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Reads one start layout per non-blank line, taking the first `size * size`
/// numbers on each line.
pub fn parse_listing(text: &str, size: usize) -> anyhow::Result<Vec<Board>> {
    let needed = size * size;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let tokens = digit_runs(line).take(needed).collect::<Vec<_>>();
            let board = if tokens.len() < needed {
                Err(ValidationError::TooFewTokens {
                    found: tokens.len(),
                    needed,
                })
            } else {
                parse_values(tokens).and_then(|values| Board::new(values))
            };
            board.with_context(|| format!("Invalid layout on line {}", index + 1))
        })
        .collect()
}
