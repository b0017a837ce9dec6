//! Splitting a line of typed input into keypad tokens.
//!
//! The terminal front end accepts whole lines such as `12.5 * 4 =` and
//! feeds the resulting tokens to the calculator one at a time.

use lazy_static::lazy_static;
use regex::Regex;

use super::token::Token;
use crate::error::{CalcError, Result};

lazy_static! {
    /// Matches strings made only of characters that can appear in a token line.
    static ref TOKEN_SAFE_CHARS: Regex = Regex::new(
        r"^[\d\s\.,\+\-\*/×÷xX=%±aAcCnNeEgG]+$"
    ).unwrap();

    /// Matches one token at the start of the remaining input.
    /// Multi-character words come first so `ac` is not read as `a` + `c`.
    static ref LEADING_TOKEN: Regex = Regex::new(
        r"^(?i:ac|neg|\+/-|c|[0-9]|\.|[-+*/×÷x=%±])"
    ).unwrap();
}

/// Cheap check whether a line is meant as calculator input.
///
/// Returns `false` for empty lines and anything containing characters that
/// can never form a token (REPL commands, prose).
pub fn looks_like_tokens(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && TOKEN_SAFE_CHARS.is_match(trimmed)
}

/// Tokenize a line of input.
///
/// Whitespace and `,` thousands separators are skipped. The first character
/// that cannot begin a token produces [`CalcError::Tokenize`] with its
/// 1-based column.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut column = 1;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() || c == ',' {
            rest = &rest[c.len_utf8()..];
            column += 1;
            continue;
        }

        let Some(found) = LEADING_TOKEN.find(rest) else {
            return Err(CalcError::Tokenize {
                position: column,
                found: c,
            });
        };

        tokens.push(found.as_str().parse()?);
        column += found.as_str().chars().count();
        rest = &rest[found.end()..];
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::token::{Digit, Operator};

    fn digit(d: u8) -> Token {
        Token::Digit(Digit::new(d).unwrap())
    }

    #[test]
    fn test_tokenize_simple_sum() {
        let tokens = tokenize("5+3=").unwrap();
        assert_eq!(
            tokens,
            vec![
                digit(5),
                Token::Operator(Operator::Add),
                digit(3),
                Token::Equals
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_separators_and_whitespace() {
        let tokens = tokenize(" 1,234.5 × 2 ").unwrap();
        assert_eq!(
            tokens,
            vec![
                digit(1),
                digit(2),
                digit(3),
                digit(4),
                Token::Point,
                digit(5),
                Token::Operator(Operator::Multiply),
                digit(2),
            ]
        );
    }

    #[test]
    fn test_tokenize_words() {
        let tokens = tokenize("9 neg c AC +/- %").unwrap();
        assert_eq!(
            tokens,
            vec![
                digit(9),
                Token::ToggleSign,
                Token::Clear,
                Token::AllClear,
                Token::ToggleSign,
                Token::Percent,
            ]
        );
    }

    #[test]
    fn test_tokenize_reports_column() {
        match tokenize("12 ^ 3") {
            Err(CalcError::Tokenize { position, found }) => {
                assert_eq!(position, 4);
                assert_eq!(found, '^');
            }
            other => panic!("expected tokenize error, got {other:?}"),
        }
    }

    #[test]
    fn test_looks_like_tokens() {
        assert!(looks_like_tokens("12 + 3"));
        assert!(looks_like_tokens("ac"));
        assert!(looks_like_tokens("1,000 ÷ 8 ="));
        assert!(!looks_like_tokens(""));
        assert!(!looks_like_tokens("   "));
        assert!(!looks_like_tokens(":copy"));
        assert!(!looks_like_tokens("hello world"));
    }
}
