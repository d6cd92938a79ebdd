// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tree construction with deterministic node identity.
//!
//! [`TreeBuilder`] hands out [`NodeId`]s in the order nodes are started, so
//! starting a parent before its children yields pre-order ids. Trivia is given
//! as raw text and validated when each node is built.
//!
//! ```
//! use tugtool_hoist_cst::{Codegen, TreeBuilder};
//!
//! let mut tree = TreeBuilder::new();
//! let file = tree.file();
//! let scope = tree.scope("namespace", "App");
//! let import = tree.import("System").leading("    ").build().unwrap();
//! let scope = scope.import(import).build().unwrap();
//! let file = file.member(scope).build().unwrap();
//!
//! assert_eq!(file.to_source(), "namespace App\n{\n    using System;\n}\n");
//! ```

use crate::error::Result;
use crate::nodes::{
    Alias, Declaration, File, ImportDirective, Member, NodeId, NodeIdGenerator, Scope, Trivia,
};

/// Allocates node identities and starts node builders.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    ids: NodeIdGenerator,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&mut self) -> FileBuilder {
        FileBuilder {
            node_id: self.ids.next_id(),
            leading: String::new(),
            imports: Vec::new(),
            members: Vec::new(),
            end_of_file: String::new(),
        }
    }

    pub fn scope(&mut self, keyword: &str, name: &str) -> ScopeBuilder {
        ScopeBuilder {
            node_id: self.ids.next_id(),
            keyword: keyword.to_string(),
            after_keyword: " ".to_string(),
            name: name.to_string(),
            leading: String::new(),
            before_open: "\n".to_string(),
            after_open: "\n".to_string(),
            imports: Vec::new(),
            members: Vec::new(),
            before_close: String::new(),
            trailing: "\n".to_string(),
        }
    }

    pub fn import(&mut self, target: &str) -> ImportBuilder {
        ImportBuilder {
            node_id: self.ids.next_id(),
            target: target.to_string(),
            alias: None,
            is_static: false,
            leading: String::new(),
            trailing: "\n".to_string(),
        }
    }

    pub fn declaration(&mut self, text: &str) -> DeclarationBuilder {
        DeclarationBuilder {
            node_id: self.ids.next_id(),
            text: text.to_string(),
            leading: String::new(),
            trailing: "\n".to_string(),
        }
    }

    /// Number of ids handed out so far.
    pub fn node_count(&self) -> u32 {
        self.ids.count()
    }
}

/// Builder for a [`File`].
#[derive(Debug)]
pub struct FileBuilder {
    node_id: NodeId,
    leading: String,
    imports: Vec<ImportDirective>,
    members: Vec<Member>,
    end_of_file: String,
}

impl FileBuilder {
    pub fn leading(mut self, trivia: &str) -> Self {
        self.leading = trivia.to_string();
        self
    }

    pub fn import(mut self, import: ImportDirective) -> Self {
        self.imports.push(import);
        self
    }

    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn end_of_file(mut self, trivia: &str) -> Self {
        self.end_of_file = trivia.to_string();
        self
    }

    pub fn build(self) -> Result<File> {
        Ok(File {
            leading_trivia: Trivia::from_text(&self.leading)?,
            imports: self.imports,
            members: self.members,
            end_of_file_trivia: Trivia::from_text(&self.end_of_file)?,
            node_id: self.node_id,
        })
    }
}

/// Builder for a [`Scope`].
///
/// Defaults render as `keyword name\n{\n...}\n`.
#[derive(Debug)]
pub struct ScopeBuilder {
    node_id: NodeId,
    keyword: String,
    after_keyword: String,
    name: String,
    leading: String,
    before_open: String,
    after_open: String,
    imports: Vec<ImportDirective>,
    members: Vec<Member>,
    before_close: String,
    trailing: String,
}

impl ScopeBuilder {
    pub fn leading(mut self, trivia: &str) -> Self {
        self.leading = trivia.to_string();
        self
    }

    pub fn after_keyword(mut self, trivia: &str) -> Self {
        self.after_keyword = trivia.to_string();
        self
    }

    pub fn before_open(mut self, trivia: &str) -> Self {
        self.before_open = trivia.to_string();
        self
    }

    pub fn after_open(mut self, trivia: &str) -> Self {
        self.after_open = trivia.to_string();
        self
    }

    pub fn import(mut self, import: ImportDirective) -> Self {
        self.imports.push(import);
        self
    }

    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn before_close(mut self, trivia: &str) -> Self {
        self.before_close = trivia.to_string();
        self
    }

    pub fn trailing(mut self, trivia: &str) -> Self {
        self.trailing = trivia.to_string();
        self
    }

    pub fn build(self) -> Result<Scope> {
        Ok(Scope {
            leading_trivia: Trivia::from_text(&self.leading)?,
            keyword: self.keyword,
            whitespace_after_keyword: Trivia::from_text(&self.after_keyword)?,
            name: self.name,
            whitespace_before_open: Trivia::from_text(&self.before_open)?,
            whitespace_after_open: Trivia::from_text(&self.after_open)?,
            imports: self.imports,
            members: self.members,
            whitespace_before_close: Trivia::from_text(&self.before_close)?,
            trailing_trivia: Trivia::from_text(&self.trailing)?,
            node_id: self.node_id,
        })
    }
}

/// Builder for an [`ImportDirective`].
#[derive(Debug)]
pub struct ImportBuilder {
    node_id: NodeId,
    target: String,
    alias: Option<String>,
    is_static: bool,
    leading: String,
    trailing: String,
}

impl ImportBuilder {
    pub fn alias(mut self, name: &str) -> Self {
        self.alias = Some(name.to_string());
        self
    }

    pub fn static_import(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn leading(mut self, trivia: &str) -> Self {
        self.leading = trivia.to_string();
        self
    }

    pub fn trailing(mut self, trivia: &str) -> Self {
        self.trailing = trivia.to_string();
        self
    }

    pub fn build(self) -> Result<ImportDirective> {
        Ok(ImportDirective {
            leading_trivia: Trivia::from_text(&self.leading)?,
            is_static: self.is_static,
            alias: self.alias.map(|name| Alias { name }),
            target: self.target,
            trailing_trivia: Trivia::from_text(&self.trailing)?,
            node_id: self.node_id,
        })
    }
}

/// Builder for a [`Declaration`].
#[derive(Debug)]
pub struct DeclarationBuilder {
    node_id: NodeId,
    text: String,
    leading: String,
    trailing: String,
}

impl DeclarationBuilder {
    pub fn leading(mut self, trivia: &str) -> Self {
        self.leading = trivia.to_string();
        self
    }

    pub fn trailing(mut self, trivia: &str) -> Self {
        self.trailing = trivia.to_string();
        self
    }

    pub fn build(self) -> Result<Declaration> {
        Ok(Declaration {
            leading_trivia: Trivia::from_text(&self.leading)?,
            text: self.text,
            trailing_trivia: Trivia::from_text(&self.trailing)?,
            node_id: self.node_id,
        })
    }
}
