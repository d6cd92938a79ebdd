// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Import directive nodes.

use serde::{Deserialize, Serialize};

use crate::nodes::traits::{Codegen, CodegenState, NodeId};
use crate::nodes::trivia::Trivia;

/// The local rebinding name of an aliased directive (`using Alias = Target;`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
}

/// An import directive: `using Target;`, `using static Target;` or
/// `using Alias = Target;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDirective {
    /// Trivia preceding the `using` keyword (indentation, comments, blank lines).
    pub leading_trivia: Trivia,
    pub is_static: bool,
    pub alias: Option<Alias>,
    /// Dotted path of the imported entity.
    pub target: String,
    /// Trivia following the `;`, normally ending with a line terminator.
    pub trailing_trivia: Trivia,

    pub(crate) node_id: NodeId,
}

impl ImportDirective {
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_ref().map(|alias| alias.name.as_str())
    }

    pub fn with_leading_trivia(self, leading_trivia: Trivia) -> Self {
        Self {
            leading_trivia,
            ..self
        }
    }

    pub fn with_trailing_trivia(self, trailing_trivia: Trivia) -> Self {
        Self {
            trailing_trivia,
            ..self
        }
    }
}

impl Codegen for ImportDirective {
    fn codegen(&self, state: &mut CodegenState) {
        self.leading_trivia.codegen(state);
        state.add_token("using ");
        if self.is_static {
            state.add_token("static ");
        }
        if let Some(alias) = &self.alias {
            state.add_token(&alias.name);
            state.add_token(" = ");
        }
        state.add_token(&self.target);
        state.add_token(";");
        self.trailing_trivia.codegen(state);
    }
}
