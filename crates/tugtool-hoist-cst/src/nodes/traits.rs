// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Core traits and types for CST nodes.
//!
//! # Node Identity
//!
//! [`NodeId`] provides stable identity for CST nodes. Identities are assigned
//! by [`crate::TreeBuilder`] in pre-order (parent before children,
//! left-to-right) and survive structural replacement: a node that is moved or
//! rebuilt with different children keeps its id.
//!
//! ```text
//! Given code:
//!   namespace App { using System; class C {} }
//! NodeId assignment order:
//!   NodeId(0) -> File
//!   NodeId(1) -> Scope "App"
//!   NodeId(2) -> ImportDirective "System"
//!   NodeId(3) -> Declaration "class C {}"
//! ```
//!
//! # Code Generation
//!
//! Every node implements [`Codegen`]. Rendering a tree that was built from
//! source text reproduces that text byte for byte, trivia included.

use serde::{Deserialize, Serialize};

// ============================================================================
// Node Identity
// ============================================================================

/// A stable, unique identifier for a CST node.
///
/// NodeIds are the handle used by structural replacement
/// ([`crate::File::replace_member`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId with the given value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

// ============================================================================
// NodeId Generator
// ============================================================================

/// Generator for assigning sequential [`NodeId`]s.
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    next_id: u32,
}

impl NodeIdGenerator {
    /// Create a new generator starting from NodeId(0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next NodeId.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Get the current count of generated NodeIds.
    pub fn count(&self) -> u32 {
        self.next_id
    }
}

// ============================================================================
// Code Generation
// ============================================================================

/// Accumulates rendered source text.
#[derive(Debug, Default)]
pub struct CodegenState {
    tokens: String,
}

impl CodegenState {
    /// Append a token (or any verbatim text) to the output.
    pub fn add_token(&mut self, tok: &str) {
        self.tokens.push_str(tok);
    }

    /// Consume the state and return the rendered text.
    pub fn into_string(self) -> String {
        self.tokens
    }
}

impl std::fmt::Display for CodegenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens)
    }
}

/// Render a node back to source text.
pub trait Codegen {
    fn codegen(&self, state: &mut CodegenState);

    /// Convenience wrapper that renders into a fresh [`CodegenState`].
    fn to_source(&self) -> String {
        let mut state = CodegenState::default();
        self.codegen(&mut state);
        state.into_string()
    }
}

impl<T: Codegen> Codegen for Vec<T> {
    fn codegen(&self, state: &mut CodegenState) {
        for node in self {
            node.codegen(state);
        }
    }
}
