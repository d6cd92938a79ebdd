// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! ImportCollector visitor for import directive extraction.
//!
//! Collects every directive in a file, at file scope and inside scopes at any
//! depth, in rendering order, together with the path of scopes enclosing it.
//!
//! ```
//! use tugtool_hoist_cst::{ImportCollector, TreeBuilder};
//!
//! let mut tree = TreeBuilder::new();
//! let file = tree.file();
//! let scope = tree.scope("namespace", "App");
//! let import = tree.import("System").build().unwrap();
//! let file = file.member(scope.import(import).build().unwrap()).build().unwrap();
//!
//! let imports = ImportCollector::collect(&file);
//! assert_eq!(imports[0].target, "System");
//! assert_eq!(imports[0].scope_path, vec!["App".to_string()]);
//! ```

use super::dispatch::walk_file;
use super::traits::{VisitResult, Visitor};
use crate::nodes::{File, ImportDirective, NodeId, Scope};

/// Information about a single directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInfo {
    pub node_id: NodeId,
    /// Dotted path of the imported entity.
    pub target: String,
    pub alias: Option<String>,
    pub is_static: bool,
    /// Names of the enclosing scopes, outermost first. Empty at file scope.
    pub scope_path: Vec<String>,
}

impl ImportInfo {
    pub fn is_file_scope(&self) -> bool {
        self.scope_path.is_empty()
    }
}

/// Visitor that collects [`ImportInfo`] for every directive in a file.
#[derive(Debug, Default)]
pub struct ImportCollector {
    imports: Vec<ImportInfo>,
    scope_path: Vec<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect all directives in `file`.
    pub fn collect(file: &File) -> Vec<ImportInfo> {
        let mut collector = Self::new();
        walk_file(&mut collector, file);
        collector.imports
    }
}

impl Visitor for ImportCollector {
    fn visit_scope(&mut self, node: &Scope) -> VisitResult {
        self.scope_path.push(node.name.clone());
        VisitResult::Continue
    }

    fn leave_scope(&mut self, _node: &Scope) {
        self.scope_path.pop();
    }

    fn visit_import(&mut self, node: &ImportDirective) -> VisitResult {
        self.imports.push(ImportInfo {
            node_id: node.node_id(),
            target: node.target.clone(),
            alias: node.alias_name().map(str::to_string),
            is_static: node.is_static,
            scope_path: self.scope_path.clone(),
        });
        VisitResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;

    fn nested_file() -> File {
        let mut tree = TreeBuilder::new();
        let file = tree.file();
        let top = tree.import("System").build().unwrap();
        let outer = tree.scope("namespace", "Outer");
        let a = tree.import("A").alias("Ax").build().unwrap();
        let inner = tree.scope("namespace", "Inner");
        let b = tree.import("B").static_import().build().unwrap();
        let inner = inner.import(b).build().unwrap();
        let outer = outer.import(a).member(inner).build().unwrap();
        let decl = tree.declaration("class C {}").build().unwrap();
        file.import(top).member(outer).member(decl).build().unwrap()
    }

    #[test]
    fn test_collects_in_rendering_order() {
        let imports = ImportCollector::collect(&nested_file());
        let targets: Vec<&str> = imports.iter().map(|i| i.target.as_str()).collect();
        assert_eq!(targets, vec!["System", "A", "B"]);
    }

    #[test]
    fn test_tracks_scope_path() {
        let imports = ImportCollector::collect(&nested_file());
        assert!(imports[0].is_file_scope());
        assert_eq!(imports[1].scope_path, vec!["Outer".to_string()]);
        assert_eq!(
            imports[2].scope_path,
            vec!["Outer".to_string(), "Inner".to_string()]
        );
    }

    #[test]
    fn test_records_alias_and_static() {
        let imports = ImportCollector::collect(&nested_file());
        assert_eq!(imports[1].alias.as_deref(), Some("Ax"));
        assert!(!imports[1].is_static);
        assert!(imports[2].is_static);
        assert_eq!(imports[2].alias, None);
    }
}
