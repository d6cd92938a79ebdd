//! End-to-end tests for the import hoisting rule.
//!
//! Trees are built with `TreeBuilder` and checked both structurally and by
//! their rendered source text.

use tugtool_hoist::{transform, HoistConfig, HoistOutcome, Hoister, LineEnding};
use tugtool_hoist_cst::{Codegen, File, ImportCollector, SyntaxNode, TreeBuilder, Trivia};

// =============================================================================
// Helpers
// =============================================================================

fn lf_hoister() -> Hoister {
    Hoister::new(HoistConfig::default().with_line_ending(LineEnding::Lf))
}

fn hoist_lf(file: &File) -> File {
    match lf_hoister().transform(SyntaxNode::File(file.clone())) {
        SyntaxNode::File(file) => file,
        other => panic!("expected a file node, got {other:?}"),
    }
}

fn file_targets(file: &File) -> Vec<String> {
    file.imports.iter().map(|i| i.target.clone()).collect()
}

fn all_targets_sorted(file: &File) -> Vec<String> {
    let mut targets: Vec<String> = ImportCollector::collect(file)
        .into_iter()
        .map(|info| info.target)
        .collect();
    targets.sort();
    targets
}

fn scope_import_count(file: &File, index: usize) -> usize {
    file.members[index]
        .nested_imports()
        .expect("member is a scope")
        .len()
}

/// One scope holding `targets`, with a class after the directives.
fn single_scope_file(header: &str, targets: &[&str]) -> File {
    let mut tree = TreeBuilder::new();
    let file = tree.file().leading(header);
    let mut scope = tree.scope("namespace", "App");
    for target in targets {
        let import = tree.import(target).leading("    ").build().unwrap();
        scope = scope.import(import);
    }
    let class = tree
        .declaration("class C {}")
        .leading("\n    ")
        .build()
        .unwrap();
    let scope = scope.member(class).build().unwrap();
    file.member(scope).build().unwrap()
}

/// Two sibling scopes, each holding its own targets.
fn two_scope_file(first: &[&str], second: &[(&str, Option<&str>)]) -> File {
    let mut tree = TreeBuilder::new();
    let file = tree.file();
    let mut scope_a = tree.scope("namespace", "First");
    for target in first {
        scope_a = scope_a.import(tree.import(target).leading("    ").build().unwrap());
    }
    let scope_a = scope_a.build().unwrap();
    let mut scope_b = tree.scope("namespace", "Second").leading("\n");
    for (target, alias) in second {
        let mut import = tree.import(target).leading("    ");
        if let Some(alias) = alias {
            import = import.alias(alias);
        }
        scope_b = scope_b.import(import.build().unwrap());
    }
    let scope_b = scope_b.build().unwrap();
    file.member(scope_a).member(scope_b).build().unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scope_directives_move_to_empty_file_scope() {
    let file = single_scope_file("", &["A", "B"]);
    let out = hoist_lf(&file);

    assert_eq!(file_targets(&out), vec!["A", "B"]);
    assert_eq!(scope_import_count(&out, 0), 0);
    let scope = out.members[0].as_scope().unwrap();
    assert_eq!(scope.members.len(), 1);
    assert_eq!(scope.members[0].to_source(), "\n    class C {}\n");
}

#[test]
fn test_scope_directives_append_after_existing() {
    let mut tree = TreeBuilder::new();
    let file = tree.file();
    let z = tree.import("Z").build().unwrap();
    let scope = tree.scope("namespace", "App");
    let a = tree.import("A").leading("    ").build().unwrap();
    let scope = scope.import(a).build().unwrap();
    let file = file.import(z).member(scope).build().unwrap();

    let out = hoist_lf(&file);
    assert_eq!(file_targets(&out), vec!["Z", "A"]);
    // No header transplant or extra separator when directives already existed.
    assert_eq!(out.imports[1].to_source(), "    using A;\n");
}

#[test]
fn test_aliased_directive_abstains() {
    let mut tree = TreeBuilder::new();
    let file = tree.file();
    let scope = tree.scope("namespace", "App");
    let a = tree.import("A").leading("    ").build().unwrap();
    let b = tree.import("B").alias("Bx").leading("    ").build().unwrap();
    let scope = scope.import(a).import(b).build().unwrap();
    let file = file.member(scope).build().unwrap();

    let out = hoist_lf(&file);
    assert_eq!(out, file);
    assert!(matches!(
        lf_hoister().hoist(&file).unwrap(),
        HoistOutcome::Abstained(_)
    ));
}

#[test]
fn test_header_trivia_moves_to_first_directive() {
    let file = single_scope_file("// header\n", &["A"]);
    let out = hoist_lf(&file);

    assert_eq!(
        out.imports[0].leading_trivia,
        Trivia::from_text("// header\n").unwrap()
    );
    assert!(out.leading_trivia.is_empty());
}

#[test]
fn test_sibling_scopes_hoist_in_order() {
    let file = two_scope_file(&["A"], &[("B", None)]);
    let out = hoist_lf(&file);

    assert_eq!(file_targets(&out), vec!["A", "B"]);
    assert_eq!(scope_import_count(&out, 0), 0);
    assert_eq!(scope_import_count(&out, 1), 0);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_transform_is_idempotent() {
    let inputs = vec![
        single_scope_file("// header\n", &["A", "B", "C"]),
        single_scope_file("", &[]),
        two_scope_file(&["A", "B"], &[("C", None), ("D", None)]),
        two_scope_file(&["A"], &[("B", Some("Bx"))]),
    ];

    for input in inputs {
        let once = hoist_lf(&input);
        let twice = hoist_lf(&once);
        assert_eq!(once, twice);
        assert_eq!(once.to_source(), twice.to_source());
    }
}

#[test]
fn test_directives_are_conserved() {
    let file = two_scope_file(&["A", "B"], &[("C", None), ("A", None)]);
    let out = hoist_lf(&file);

    assert_eq!(all_targets_sorted(&out), all_targets_sorted(&file));
    assert!(ImportCollector::collect(&out)
        .iter()
        .all(|info| info.is_file_scope()));
}

#[test]
fn test_alias_in_later_scope_blocks_earlier_scopes() {
    // The first scope alone would be safe to hoist; the alias in the second
    // scope still makes the whole file a no-op.
    let file = two_scope_file(&["A", "B"], &[("C", Some("Cx"))]);
    let out = hoist_lf(&file);

    assert_eq!(out, file);
    assert_eq!(out.to_source(), file.to_source());
}

#[test]
fn test_order_within_and_across_scopes() {
    let file = two_scope_file(&["C", "A", "B"], &[("Z", None), ("Y", None)]);
    let out = hoist_lf(&file);

    assert_eq!(file_targets(&out), vec!["C", "A", "B", "Z", "Y"]);
}

#[test]
fn test_non_file_input_is_returned_unchanged() {
    let mut tree = TreeBuilder::new();
    let scope = tree.scope("namespace", "App");
    let a = tree.import("A").build().unwrap();
    let scope = scope.import(a).build().unwrap();
    let node = SyntaxNode::Member(scope.into());

    assert_eq!(transform(node.clone()), node);
}

#[test]
fn test_empty_file_is_unchanged() {
    let mut tree = TreeBuilder::new();
    let file = tree.file().end_of_file("\n").build().unwrap();

    assert_eq!(lf_hoister().hoist(&file).unwrap(), HoistOutcome::Unchanged);
    assert_eq!(hoist_lf(&file), file);
}

#[test]
fn test_scopes_sharing_an_id_are_each_drained() {
    // Members merged from two separately built trees carry the same ids.
    let mut file = single_scope_file("", &["A"]);
    let other = single_scope_file("", &["B"]);
    file.members.push(other.members[0].clone());
    assert_eq!(file.members[0].node_id(), file.members[1].node_id());

    let outcome = lf_hoister().hoist(&file).unwrap();
    assert_eq!(outcome.report().map(|r| r.moved_count()), Some(2));

    let out = hoist_lf(&file);
    assert_eq!(file_targets(&out), vec!["A", "B"]);
    assert_eq!(scope_import_count(&out, 0), 0);
    assert_eq!(scope_import_count(&out, 1), 0);
    assert_eq!(hoist_lf(&out), out);
}

// =============================================================================
// Rendered output
// =============================================================================

#[test]
fn test_rendered_output_with_header_and_two_scopes() {
    let mut tree = TreeBuilder::new();
    let file = tree.file().leading("// Copyright (c) Contoso.\n\n");
    let app = tree.scope("namespace", "App");
    let system = tree.import("System").leading("    ").build().unwrap();
    let linq = tree.import("System.Linq").leading("    ").build().unwrap();
    let program = tree
        .declaration("class Program {}")
        .leading("\n    ")
        .build()
        .unwrap();
    let app = app.import(system).import(linq).member(program).build().unwrap();
    let tests = tree.scope("namespace", "App.Tests").leading("\n");
    let xunit = tree.import("Xunit").leading("    ").build().unwrap();
    let fixture = tree
        .declaration("class ProgramTests {}")
        .leading("\n    ")
        .build()
        .unwrap();
    let tests = tests.import(xunit).member(fixture).build().unwrap();
    let file = file.member(app).member(tests).build().unwrap();

    let before = "\
// Copyright (c) Contoso.

namespace App
{
    using System;
    using System.Linq;

    class Program {}
}

namespace App.Tests
{
    using Xunit;

    class ProgramTests {}
}
";
    assert_eq!(file.to_source(), before);

    let after = "\
// Copyright (c) Contoso.

using System;
    using System.Linq;

    using Xunit;
namespace App
{

    class Program {}
}

namespace App.Tests
{

    class ProgramTests {}
}
";
    let out = hoist_lf(&file);
    assert_eq!(out.to_source(), after);
}

#[test]
fn test_rendered_output_appends_after_existing_block() {
    let mut tree = TreeBuilder::new();
    let file = tree.file();
    let system = tree.import("System").trailing("\n\n").build().unwrap();
    let app = tree.scope("namespace", "App");
    let linq = tree.import("System.Linq").leading("    ").build().unwrap();
    let app = app.import(linq).build().unwrap();
    let file = file.import(system).member(app).build().unwrap();

    let out = hoist_lf(&file);
    assert_eq!(
        out.to_source(),
        "using System;\n\n    using System.Linq;\nnamespace App\n{\n}\n"
    );
}
