// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for tree construction and structural replacement.

use thiserror::Error;

use crate::nodes::NodeId;

/// Errors raised by the tree API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CstError {
    /// Structural replacement targeted an id that is not a top-level member.
    #[error("no top-level member with {id}")]
    NodeNotFound { id: NodeId },

    /// Structural replacement targeted a member position past the end.
    #[error("member index {index} out of range for {len} top-level members")]
    MemberIndexOutOfRange { index: usize, len: usize },

    /// Trivia text contained a non-trivia byte.
    #[error("invalid trivia at byte offset {offset}")]
    InvalidTrivia { offset: usize },

    /// A `/*` comment without a closing `*/`.
    #[error("unterminated block comment starting at byte offset {offset}")]
    UnterminatedComment { offset: usize },
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, CstError>;
