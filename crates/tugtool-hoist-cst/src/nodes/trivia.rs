// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Formatting trivia: whitespace, line breaks and comments attached to nodes.
//!
//! Trivia is never interpreted, only carried. A [`Trivia`] value is an ordered
//! list of [`TriviaPiece`]s whose concatenated text is exactly the source text
//! it was built from.

use serde::{Deserialize, Serialize};

use crate::error::{CstError, Result};
use crate::nodes::traits::{Codegen, CodegenState};

/// A line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Newline {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl Newline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
            Newline::Cr => "\r",
        }
    }
}

/// A single trivia element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriviaPiece {
    /// A run of spaces and tabs.
    Whitespace(String),
    /// A line terminator.
    Newline(Newline),
    /// A `// line` comment (without its terminator) or a `/* block */` comment.
    Comment(String),
}

impl Codegen for TriviaPiece {
    fn codegen(&self, state: &mut CodegenState) {
        match self {
            TriviaPiece::Whitespace(ws) => state.add_token(ws),
            TriviaPiece::Newline(nl) => state.add_token(nl.as_str()),
            TriviaPiece::Comment(text) => state.add_token(text),
        }
    }
}

/// An ordered run of trivia pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trivia {
    pieces: Vec<TriviaPiece>,
}

impl Trivia {
    /// Empty trivia.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Split raw trivia text into pieces.
    ///
    /// # Errors
    ///
    /// Returns [`CstError::InvalidTrivia`] at the first byte that is neither
    /// whitespace, a line terminator, nor part of a comment.
    pub fn from_text(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let mut pieces = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            match bytes[pos] {
                b' ' | b'\t' => {
                    let start = pos;
                    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
                        pos += 1;
                    }
                    pieces.push(TriviaPiece::Whitespace(text[start..pos].to_string()));
                }
                b'\n' => {
                    pieces.push(TriviaPiece::Newline(Newline::Lf));
                    pos += 1;
                }
                b'\r' => {
                    if bytes.get(pos + 1) == Some(&b'\n') {
                        pieces.push(TriviaPiece::Newline(Newline::CrLf));
                        pos += 2;
                    } else {
                        pieces.push(TriviaPiece::Newline(Newline::Cr));
                        pos += 1;
                    }
                }
                b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                    let start = pos;
                    while pos < bytes.len() && !matches!(bytes[pos], b'\n' | b'\r') {
                        pos += 1;
                    }
                    pieces.push(TriviaPiece::Comment(text[start..pos].to_string()));
                }
                b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                    let start = pos;
                    let end = text[pos + 2..]
                        .find("*/")
                        .map(|rel| pos + 2 + rel + 2)
                        .ok_or(CstError::UnterminatedComment { offset: start })?;
                    pos = end;
                    pieces.push(TriviaPiece::Comment(text[start..pos].to_string()));
                }
                _ => return Err(CstError::InvalidTrivia { offset: pos }),
            }
        }

        Ok(Self { pieces })
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns a new trivia with `other` appended after `self`.
    pub fn concat(&self, other: &Trivia) -> Trivia {
        let mut pieces = self.pieces.clone();
        pieces.extend(other.pieces.iter().cloned());
        Trivia { pieces }
    }

    /// Returns a new trivia with one line terminator appended.
    pub fn with_newline(mut self, newline: Newline) -> Trivia {
        self.pieces.push(TriviaPiece::Newline(newline));
        self
    }

    /// Number of line terminators in this trivia.
    pub fn newline_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, TriviaPiece::Newline(_)))
            .count()
    }

    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().filter_map(|p| match p {
            TriviaPiece::Comment(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Codegen for Trivia {
    fn codegen(&self, state: &mut CodegenState) {
        self.pieces.codegen(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_pieces() {
        let trivia = Trivia::from_text("// header\n    ").unwrap();
        assert_eq!(
            trivia.pieces(),
            &[
                TriviaPiece::Comment("// header".to_string()),
                TriviaPiece::Newline(Newline::Lf),
                TriviaPiece::Whitespace("    ".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_text_renders_verbatim() {
        let text = "/* license\n * text */\r\n\t// note\r\n\n  ";
        let trivia = Trivia::from_text(text).unwrap();
        assert_eq!(trivia.to_source(), text);
        assert_eq!(trivia.newline_count(), 3);
        assert_eq!(trivia.comments().count(), 2);
    }

    #[test]
    fn test_from_text_lone_carriage_return() {
        let trivia = Trivia::from_text("\r").unwrap();
        assert_eq!(trivia.pieces(), &[TriviaPiece::Newline(Newline::Cr)]);
    }

    #[test]
    fn test_from_text_rejects_tokens() {
        let err = Trivia::from_text("  x").unwrap_err();
        assert_eq!(err, CstError::InvalidTrivia { offset: 2 });
    }

    #[test]
    fn test_from_text_unterminated_block_comment() {
        let err = Trivia::from_text("\n/* open").unwrap_err();
        assert_eq!(err, CstError::UnterminatedComment { offset: 1 });
    }

    #[test]
    fn test_concat_and_newline() {
        let a = Trivia::from_text("  ").unwrap();
        let b = Trivia::from_text("// c").unwrap();
        let joined = a.concat(&b).with_newline(Newline::CrLf);
        assert_eq!(joined.to_source(), "  // c\r\n");
        assert!(Trivia::empty().is_empty());
        assert!(!joined.is_empty());
    }
}
