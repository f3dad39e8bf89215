//! Parser tests for Pastel.
//!
//! Covers: tree shape, bare atoms, empty programs, paren balance errors,
//! leaf counts, parent links, source round-trips, and determinism.

use pastel_lexer::{analyze as lex, TokenKind};
use pastel_parser::{analyze, format_program, stringify, stringify_forms, treefy, Tree};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Parse source and return the tree, panicking on errors.
fn parse_ok(source: &str) -> Tree {
    match analyze(source) {
        Ok(tree) => tree,
        Err(e) => panic!("unexpected parse error: {e} at {:?}", e.origin()),
    }
}

/// Parse source and return the error message.
fn parse_err(source: &str) -> String {
    match analyze(source) {
        Ok(tree) => panic!("expected an error, got {}", stringify(&tree, tree.root())),
        Err(e) => e.message,
    }
}

/// Collapse whitespace runs to single spaces.
fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ─────────────────────────────────────────────────────────────────────
// Shape
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_input_is_empty_container() {
    let tree = parse_ok("");
    assert!(tree.token(tree.root()).is_none());
    assert!(tree.children(tree.root()).is_empty());
}

#[test]
fn test_whitespace_only_input() {
    let tree = parse_ok("  \n\t ");
    assert!(tree.children(tree.root()).is_empty());
}

#[test]
fn test_bare_atoms_are_sibling_leaves() {
    let tree = parse_ok("a 1 'b'");
    let forms = tree.children(tree.root());
    assert_eq!(forms.len(), 3);
    assert!(forms.iter().all(|&f| tree.is_leaf(f)));
    let kinds: Vec<TokenKind> = forms
        .iter()
        .map(|&f| tree.token(f).unwrap().kind)
        .collect();
    assert_eq!(kinds, vec![TokenKind::Id, TokenKind::Number, TokenKind::Str]);
}

#[test]
fn test_atoms_between_forms() {
    let tree = parse_ok("(a) b (c)");
    let forms = tree.children(tree.root());
    assert_eq!(forms.len(), 3);
    assert!(!tree.is_leaf(forms[0]));
    assert!(tree.is_leaf(forms[1]));
    assert!(!tree.is_leaf(forms[2]));
}

#[test]
fn test_empty_parens_make_empty_container() {
    let tree = parse_ok("()");
    let forms = tree.children(tree.root());
    assert_eq!(forms.len(), 1);
    assert!(!tree.is_leaf(forms[0]));
    assert!(tree.children(forms[0]).is_empty());
}

#[test]
fn test_children_keep_argument_order() {
    let tree = parse_ok("(- 10 3 2)");
    let form = tree.children(tree.root())[0];
    let data: Vec<&str> = tree
        .children(form)
        .iter()
        .map(|&c| tree.token(c).unwrap().data.as_str())
        .collect();
    assert_eq!(data, vec!["-", "10", "3", "2"]);
}

#[test]
fn test_every_child_points_to_its_parent() {
    let tree = parse_ok("(a (b (c d)) e)");
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        for &child in tree.children(id) {
            assert_eq!(tree.parent(child), Some(id));
            stack.push(child);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Balance
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_surplus_close() {
    assert_eq!(parse_err(")"), "Surplus ')' exists");
    assert_eq!(parse_err("(a) b)"), "Surplus ')' exists");
}

#[test]
fn test_unclosed_open() {
    assert_eq!(parse_err("("), "'(' not closed");
    assert_eq!(parse_err("(a (b)"), "'(' not closed");
}

#[test]
fn test_close_before_open_is_surplus_even_if_balanced_overall() {
    assert_eq!(parse_err(")("), "Surplus ')' exists");
}

#[test]
fn test_surplus_close_location() {
    let err = analyze("(a)\n(b))").unwrap_err();
    let origin = err.origin().unwrap();
    assert_eq!(origin.line, 2);
    assert_eq!(origin.text, "(b))");
}

#[test]
fn test_balance_against_depth_scan() {
    let cases = [
        "(a)", "((a))", "(a))", "((a)", ")", "(", "a b", "(a)(b)", "())(", "(()())",
        "(a (b) (c (d)))", "a)", "(a (b c)",
    ];
    for source in cases {
        let tokens = lex(source);
        let mut depth: i64 = 0;
        let mut surplus = false;
        for token in &tokens {
            match token.kind {
                TokenKind::Open => depth += 1,
                TokenKind::Close => {
                    depth -= 1;
                    if depth < 0 {
                        surplus = true;
                        break;
                    }
                }
                _ => {}
            }
        }
        match treefy(&tokens) {
            Ok(tree) => {
                assert!(!surplus && depth == 0, "'{source}' should fail");
                let atoms = tokens.iter().filter(|t| !t.is_paren()).count();
                assert_eq!(tree.leaf_count(), atoms, "leaf count for '{source}'");
            }
            Err(e) if surplus => assert!(e.message.contains("Surplus ')'"), "'{source}'"),
            Err(e) => {
                assert!(depth > 0, "'{source}' failed unexpectedly: {e}");
                assert!(e.message.contains("'(' not closed"), "'{source}'");
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Round-trips
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_round_trip_forms() {
    let sources = [
        "(+ 1 2)",
        "(define factorial n (if (< n 2) 1 (* n (factorial (- n 1)))))  (factorial 5)",
        "(define plus (a b) (+ a b))\n(print (plus 1 2))",
        "(print 'hello world')",
        "x (y) ((z))",
        "()",
    ];
    for source in sources {
        let once = stringify_forms(&parse_ok(source));
        assert_eq!(squash(&once), squash(source), "round trip of '{source}'");
        let twice = stringify_forms(&parse_ok(&once));
        assert_eq!(once, twice, "stability of '{source}'");
    }
}

#[test]
fn test_format_program_round_trip() {
    let source = "(define x 1)\n(define y 2)\n(print (+ x y))";
    let formatted = format_program(&parse_ok(source));
    assert_eq!(formatted, "(define x 1)\n\n(define y 2)\n\n(print (+ x y))");
    assert_eq!(format_program(&parse_ok(&formatted)), formatted);
}

#[test]
fn test_string_contents_survive_round_trip() {
    let tree = parse_ok("(print \"a  (b)  c\")");
    assert_eq!(stringify_forms(&tree), "(print \"a  (b)  c\")");
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_determinism_100_iterations() {
    let source = "(define fib n (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2)))))\n(fib 10)";
    let first = parse_ok(source);
    for i in 0..100 {
        let tree = parse_ok(source);
        assert_eq!(first, tree, "Determinism failure at iteration {i}");
    }
}
