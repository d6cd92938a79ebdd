// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The file (compilation unit) node and the top-level [`SyntaxNode`] variant.

use serde::{Deserialize, Serialize};

use crate::error::{CstError, Result};
use crate::nodes::import::ImportDirective;
use crate::nodes::scope::Member;
use crate::nodes::traits::{Codegen, CodegenState, NodeId};
use crate::nodes::trivia::Trivia;

/// Root of one source file.
///
/// Rendering order is: leading trivia, file-scope directives, members,
/// end-of-file trivia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Trivia preceding the first token of the file.
    pub leading_trivia: Trivia,
    pub imports: Vec<ImportDirective>,
    pub members: Vec<Member>,
    pub end_of_file_trivia: Trivia,

    pub(crate) node_id: NodeId,
}

impl File {
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn with_leading_trivia(self, leading_trivia: Trivia) -> Self {
        Self {
            leading_trivia,
            ..self
        }
    }

    pub fn with_imports(self, imports: Vec<ImportDirective>) -> Self {
        Self { imports, ..self }
    }

    /// Returns this file with `imports` appended after the existing
    /// file-scope directives.
    pub fn add_imports(mut self, imports: impl IntoIterator<Item = ImportDirective>) -> Self {
        self.imports.extend(imports);
        self
    }

    pub fn member(&self, id: NodeId) -> Option<&Member> {
        self.members.iter().find(|member| member.node_id() == id)
    }

    /// Returns a new file in which the top-level member identified by `id` is
    /// replaced with `replacement`. Every other member is carried over
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CstError::NodeNotFound`] if no top-level member has `id`.
    pub fn replace_member(&self, id: NodeId, replacement: Member) -> Result<File> {
        let index = self
            .members
            .iter()
            .position(|member| member.node_id() == id)
            .ok_or(CstError::NodeNotFound { id })?;
        self.replace_member_at(index, replacement)
    }

    /// Returns a new file in which the top-level member at `index` is
    /// replaced with `replacement`.
    ///
    /// Ids are only unique within one [`crate::TreeBuilder`]; callers that
    /// found the member by position should replace it by position.
    ///
    /// # Errors
    ///
    /// Returns [`CstError::MemberIndexOutOfRange`] if `index` is past the end.
    pub fn replace_member_at(&self, index: usize, replacement: Member) -> Result<File> {
        if index >= self.members.len() {
            return Err(CstError::MemberIndexOutOfRange {
                index,
                len: self.members.len(),
            });
        }

        let mut members = self.members.clone();
        members[index] = replacement;
        Ok(File {
            leading_trivia: self.leading_trivia.clone(),
            imports: self.imports.clone(),
            members,
            end_of_file_trivia: self.end_of_file_trivia.clone(),
            node_id: self.node_id,
        })
    }
}

impl Codegen for File {
    fn codegen(&self, state: &mut CodegenState) {
        self.leading_trivia.codegen(state);
        self.imports.codegen(state);
        self.members.codegen(state);
        self.end_of_file_trivia.codegen(state);
    }
}

/// Any node a rule can be handed.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxNode {
    File(File),
    Member(Member),
    Import(ImportDirective),
}

impl SyntaxNode {
    pub fn node_id(&self) -> NodeId {
        match self {
            SyntaxNode::File(file) => file.node_id,
            SyntaxNode::Member(member) => member.node_id(),
            SyntaxNode::Import(import) => import.node_id,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            SyntaxNode::File(file) => Some(file),
            _ => None,
        }
    }
}

impl From<File> for SyntaxNode {
    fn from(file: File) -> Self {
        SyntaxNode::File(file)
    }
}

impl From<Member> for SyntaxNode {
    fn from(member: Member) -> Self {
        SyntaxNode::Member(member)
    }
}

impl From<ImportDirective> for SyntaxNode {
    fn from(import: ImportDirective) -> Self {
        SyntaxNode::Import(import)
    }
}

impl Codegen for SyntaxNode {
    fn codegen(&self, state: &mut CodegenState) {
        match self {
            SyntaxNode::File(file) => file.codegen(state),
            SyntaxNode::Member(member) => member.codegen(state),
            SyntaxNode::Import(import) => import.codegen(state),
        }
    }
}
