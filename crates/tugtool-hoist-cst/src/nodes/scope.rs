// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Member nodes: scopes (namespace blocks) and opaque declarations.

use serde::{Deserialize, Serialize};

use crate::nodes::import::ImportDirective;
use crate::nodes::traits::{Codegen, CodegenState, NodeId};
use crate::nodes::trivia::Trivia;

/// A named block such as `namespace App.Core { ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub leading_trivia: Trivia,
    /// The introducing keyword, e.g. `namespace`.
    pub keyword: String,
    /// Trivia between the keyword and the name.
    pub whitespace_after_keyword: Trivia,
    /// Dotted scope name.
    pub name: String,
    /// Trivia between the name and `{`.
    pub whitespace_before_open: Trivia,
    /// Trivia following `{`.
    pub whitespace_after_open: Trivia,
    /// Directives declared directly inside this scope.
    pub imports: Vec<ImportDirective>,
    pub members: Vec<Member>,
    /// Trivia preceding `}`.
    pub whitespace_before_close: Trivia,
    pub trailing_trivia: Trivia,

    pub(crate) node_id: NodeId,
}

impl Scope {
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Returns this scope with its directive list replaced. All other content
    /// and the scope's identity are kept.
    pub fn with_imports(self, imports: Vec<ImportDirective>) -> Self {
        Self { imports, ..self }
    }
}

impl Codegen for Scope {
    fn codegen(&self, state: &mut CodegenState) {
        self.leading_trivia.codegen(state);
        state.add_token(&self.keyword);
        self.whitespace_after_keyword.codegen(state);
        state.add_token(&self.name);
        self.whitespace_before_open.codegen(state);
        state.add_token("{");
        self.whitespace_after_open.codegen(state);
        self.imports.codegen(state);
        self.members.codegen(state);
        self.whitespace_before_close.codegen(state);
        state.add_token("}");
        self.trailing_trivia.codegen(state);
    }
}

/// Any member this crate does not model further, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub leading_trivia: Trivia,
    pub text: String,
    pub trailing_trivia: Trivia,

    pub(crate) node_id: NodeId,
}

impl Declaration {
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }
}

impl Codegen for Declaration {
    fn codegen(&self, state: &mut CodegenState) {
        self.leading_trivia.codegen(state);
        state.add_token(&self.text);
        self.trailing_trivia.codegen(state);
    }
}

/// A member of a file or scope.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Scope(Scope),
    Declaration(Declaration),
}

impl Member {
    pub fn node_id(&self) -> NodeId {
        match self {
            Member::Scope(scope) => scope.node_id,
            Member::Declaration(decl) => decl.node_id,
        }
    }

    pub fn as_scope(&self) -> Option<&Scope> {
        match self {
            Member::Scope(scope) => Some(scope),
            Member::Declaration(_) => None,
        }
    }

    /// The directive list of this member, if it is a kind of member that can
    /// own directives.
    pub fn nested_imports(&self) -> Option<&[ImportDirective]> {
        self.as_scope().map(|scope| scope.imports.as_slice())
    }

    /// Returns true if this member owns at least one directive.
    pub fn has_nested_imports(&self) -> bool {
        self.nested_imports()
            .is_some_and(|imports| !imports.is_empty())
    }
}

impl From<Scope> for Member {
    fn from(scope: Scope) -> Self {
        Member::Scope(scope)
    }
}

impl From<Declaration> for Member {
    fn from(decl: Declaration) -> Self {
        Member::Declaration(decl)
    }
}

impl Codegen for Member {
    fn codegen(&self, state: &mut CodegenState) {
        match self {
            Member::Scope(scope) => scope.codegen(state),
            Member::Declaration(decl) => decl.codegen(state),
        }
    }
}
