//! Token stream to node tree.
//!
//! A single left-to-right pass with a depth counter. Tokens inside a
//! top-level bracket pair are collected and handed to a recursive call once
//! the pair closes; tokens at depth 0 become leaves of the current container.

use pastel_lexer::{Lexer, Token, TokenKind};
use pastel_types::{PastelError, PastelResult};

use crate::tree::{NodeId, Tree};

/// Lex and parse `text`.
pub fn analyze(text: &str) -> PastelResult<Tree> {
    Parser::new().analyze(text)
}

/// Build a tree from a token sequence.
///
/// Fails with a `Syntax` error on a surplus `)` or an unclosed `(`. No
/// partial tree is returned.
pub fn treefy(tokens: &[Token]) -> PastelResult<Tree> {
    let mut tree = Tree::unrooted();
    treefy_into(&mut tree, tokens)?;
    Ok(tree)
}

fn treefy_into(tree: &mut Tree, tokens: &[Token]) -> PastelResult<NodeId> {
    let container = tree.push_container();

    let mut depth: usize = 0;
    let mut start = 0;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Open => {
                depth += 1;
                if depth == 1 {
                    start = index + 1;
                }
            }
            TokenKind::Close => {
                if depth == 0 {
                    return Err(PastelError::syntax(
                        "Surplus ')' exists",
                        token.location.clone(),
                    ));
                }
                depth -= 1;
                if depth == 0 {
                    // Nested failures already carry the deepest location.
                    let subtree = treefy_into(tree, &tokens[start..index])?;
                    tree.attach(container, subtree);
                }
            }
            _ if depth == 0 => {
                let leaf = tree.push_leaf(token.clone());
                tree.attach(container, leaf);
            }
            _ => {}
        }
    }

    if depth > 0 {
        let location = tokens
            .last()
            .map(|t| t.location.clone())
            .unwrap_or_default();
        return Err(PastelError::syntax("'(' not closed", location));
    }

    Ok(container)
}

/// The Pastel parser.
///
/// Owns a [`Lexer`] so repeated calls reuse its buffers.
#[derive(Debug, Default)]
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lex and parse `text` into a tree.
    pub fn analyze(&mut self, text: &str) -> PastelResult<Tree> {
        let tokens = self.lexer.lex(text);
        treefy(&tokens)
    }
}
