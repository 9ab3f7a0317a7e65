//! Parsing for drag-and-drop payload strings.
//!
//! Some drop sources deliver all dragged files as a single string of
//! space-separated paths, wrapping any path that itself contains spaces in
//! `{}`. This module splits such a payload back into discrete paths.

use thiserror::Error;

/// Errors produced while splitting a drop payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// An opening `{` was never closed before the payload ended.
    #[error("Unterminated '{{' group starting at byte {start} of drop payload")]
    UnterminatedGroup {
        /// Byte offset of the opening brace.
        start: usize,
    },
}

/// Split a raw drop payload into individual path tokens.
///
/// Tokens are delimited by spaces; a `{...}` group is taken verbatim (no
/// nested groups, no escape for a literal `}`). Emitted tokens never contain
/// the braces themselves. No attempt is made to validate that tokens are
/// well-formed paths; suffix filtering is up to the caller.
pub fn split_payload(raw: &str) -> Result<Vec<String>, PayloadError> {
    let mut tokens = Vec::new();
    let mut pending = String::new();
    let mut chars = raw.char_indices();
    while let Some((offset, ch)) = chars.next() {
        match ch {
            '{' => {
                let mut closed = false;
                for (_, grouped) in chars.by_ref() {
                    if grouped == '}' {
                        closed = true;
                        break;
                    }
                    pending.push(grouped);
                }
                if !closed {
                    return Err(PayloadError::UnterminatedGroup { start: offset });
                }
                tokens.push(std::mem::take(&mut pending));
            }
            ' ' => {
                if !pending.is_empty() {
                    tokens.push(std::mem::take(&mut pending));
                }
            }
            _ => pending.push(ch),
        }
    }
    if !pending.is_empty() {
        tokens.push(pending);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_yields_no_tokens() {
        assert_eq!(split_payload("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn splits_plain_paths_on_spaces() {
        assert_eq!(split_payload("a.csv b.csv").unwrap(), vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn braced_group_keeps_embedded_spaces() {
        assert_eq!(
            split_payload("{a b.csv} c.csv").unwrap(),
            vec!["a b.csv", "c.csv"]
        );
    }

    #[test]
    fn repeated_spaces_do_not_emit_empty_tokens() {
        assert_eq!(split_payload("a.csv   b.csv ").unwrap(), vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn tokens_never_contain_braces() {
        let tokens = split_payload("{x y.csv} z.csv").unwrap();
        assert!(tokens.iter().all(|t| !t.contains(['{', '}'])));
    }

    #[test]
    fn unterminated_group_is_an_error() {
        assert_eq!(
            split_payload("{a b.csv"),
            Err(PayloadError::UnterminatedGroup { start: 0 })
        );
    }
}
