//! Lexer tests for Pastel.
//!
//! Covers: token classification, paren splitting, whitespace runs, string
//! mode with both quote characters, line tracking through `;`, unterminated
//! strings, and determinism.

use pastel_lexer::{analyze, TokenKind};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex source text and return just the token kinds.
fn kinds(source: &str) -> Vec<TokenKind> {
    analyze(source).into_iter().map(|t| t.kind).collect()
}

/// Lex source text and return just the raw token text.
fn data(source: &str) -> Vec<String> {
    analyze(source).into_iter().map(|t| t.data).collect()
}

// ─────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_simple_form() {
    assert_eq!(
        kinds("(+ 1 2)"),
        vec![
            TokenKind::Open,
            TokenKind::Id,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Close,
        ]
    );
    assert_eq!(data("(+ 1 2)"), vec!["(", "+", "1", "2", ")"]);
}

#[test]
fn test_string_keeps_quotes() {
    let tokens = analyze("(print \"hello\")");
    assert_eq!(tokens[2].kind, TokenKind::Str);
    assert_eq!(tokens[2].data, "\"hello\"");
}

#[test]
fn test_single_quoted_string() {
    let tokens = analyze("'abc'");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].data, "'abc'");
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("1 -2 3.5 1e2 0x10"),
        vec![TokenKind::Number; 5]
    );
}

#[test]
fn test_true_false_are_identifiers() {
    assert_eq!(kinds("true false"), vec![TokenKind::Id, TokenKind::Id]);
}

// ─────────────────────────────────────────────────────────────────────
// Delimiters
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_parens_are_own_tokens() {
    assert_eq!(data("((a)b)"), vec!["(", "(", "a", ")", "b", ")"]);
}

#[test]
fn test_space_runs_flush_once() {
    assert_eq!(data("a     b"), vec!["a", "b"]);
}

#[test]
fn test_leading_and_trailing_spaces() {
    assert_eq!(data("   a b   "), vec!["a", "b"]);
}

#[test]
fn test_tabs_fold_to_spaces() {
    assert_eq!(data("a\t\tb"), vec!["a", "b"]);
}

#[test]
fn test_empty_input() {
    assert!(analyze("").is_empty());
    assert!(analyze("   \n\n  ").is_empty());
}

#[test]
fn test_string_mode_keeps_spaces_and_parens() {
    assert_eq!(data("(print 'a (b) c')"), vec!["(", "print", "'a (b) c'", ")"]);
}

#[test]
fn test_other_quote_inside_string() {
    assert_eq!(data("\"it's\" x"), vec!["\"it's\"", "x"]);
}

#[test]
fn test_string_flushes_pending_buffer() {
    assert_eq!(data("ab\"cd\"ef"), vec!["ab", "\"cd\"", "ef"]);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = analyze("(print \"oops )");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].data, "\"oops )");
    assert_eq!(tokens[2].kind, TokenKind::Str);
}

#[test]
fn test_newline_separates_tokens_without_a_token() {
    // A line break alone is not a delimiter.
    assert_eq!(data("ab\ncd"), vec!["abcd"]);
    assert_eq!(data("ab \ncd"), vec!["ab", "cd"]);
}

// ─────────────────────────────────────────────────────────────────────
// Locations
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_line_numbers_advance_on_newlines() {
    let tokens = analyze("(a \nb \r\nc)");
    let lines: Vec<u32> = tokens.iter().map(|t| t.location.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 3, 3]);
}

#[test]
fn test_line_break_alone_does_not_split() {
    let tokens = analyze("(a\nb)");
    assert_eq!(tokens[1].data, "ab");
    assert_eq!(tokens[1].location.line, 2);
}

#[test]
fn test_location_holds_line_text_so_far() {
    let tokens = analyze("(define x 1)\n(print x)");
    let x = &tokens[2];
    assert_eq!(x.data, "x");
    assert_eq!(x.location.line, 1);
    assert_eq!(x.location.text, "(define x ");

    let print = &tokens[6];
    assert_eq!(print.data, "print");
    assert_eq!(print.location.line, 2);
    assert_eq!(print.location.text, "(print ");
}

#[test]
fn test_semicolon_counts_as_line_end() {
    let tokens = analyze("a ;b");
    assert_eq!(tokens[1].location.line, 2);
}

#[test]
fn test_newline_inside_string_is_kept_as_separator() {
    let tokens = analyze("'a\nb' c");
    assert_eq!(tokens[0].data, "'a;b'");
    assert_eq!(tokens[0].location.line, 1);
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_determinism_100_iterations() {
    let source = "(define factorial n (if (< n 2) 1 (* n (factorial (- n 1)))))\n(factorial 5)";
    let first = analyze(source);
    for i in 0..100 {
        let tokens = analyze(source);
        assert_eq!(first, tokens, "Determinism failure at iteration {i}");
    }
}
