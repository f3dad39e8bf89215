//! Core form evaluator.

use pastel_lexer::{parse_number, Token, TokenKind};
use pastel_parser::{Node, NodeId, Parser, Tree};
use pastel_types::{PastelError, PastelResult};

use crate::builtins::Builtin;
use crate::config::EvalConfig;
use crate::definitions::{Bindings, Definition, Definitions};
use crate::value::Value;

/// The Pastel evaluator. Walks a tree and produces a [`Value`].
///
/// All state is reset at the start of [`Evaluator::evaluate_text`], so one
/// instance can serve every edit. Definitions made by earlier forms are
/// visible to later forms of the same program.
#[derive(Debug)]
pub struct Evaluator {
    parser: Parser,
    definitions: Definitions,
    config: EvalConfig,
    /// Captured `print` output of the last evaluation.
    pub log_output: Vec<String>,
    /// Number of `print` calls in the last evaluation, including those past
    /// the log limit.
    pub total_printed: usize,
}

impl Evaluator {
    /// Create an evaluator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            parser: Parser::new(),
            definitions: Definitions::new(),
            config,
            log_output: Vec::new(),
            total_printed: 0,
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// The definition table as left by the last evaluation.
    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    fn reset(&mut self) {
        self.definitions.reset();
        self.log_output.clear();
        self.total_printed = 0;
    }

    // ══════════════════════════════════════════════════════════════════════
    // Entry points
    // ══════════════════════════════════════════════════════════════════════

    /// Parse and evaluate a whole program.
    pub fn evaluate_text(&mut self, text: &str) -> PastelResult<Value> {
        let tree = self.parser.analyze(text).map_err(|e| {
            log::debug!(target: "pastel::eval", "parse failed: {e}");
            e
        })?;
        self.evaluate_tree(&tree)
    }

    /// Evaluate an already parsed program from a clean state.
    pub fn evaluate_tree(&mut self, tree: &Tree) -> PastelResult<Value> {
        self.reset();
        self.evaluate_node(tree, tree.root(), None)
    }

    /// Evaluate one node.
    ///
    /// User definitions refer to nodes by id, so `tree` must be the tree the
    /// current definitions were made from.
    pub fn evaluate_node(
        &mut self,
        tree: &Tree,
        id: NodeId,
        params: Option<&Bindings>,
    ) -> PastelResult<Value> {
        match tree.node(id) {
            Node::Leaf(token) => self.evaluate_leaf(tree, token, params),
            Node::Container(children) => self.evaluate_form(tree, children, params),
        }
    }

    // ── Leaves ───────────────────────────────────────────────────────────

    fn evaluate_leaf(
        &mut self,
        tree: &Tree,
        token: &Token,
        params: Option<&Bindings>,
    ) -> PastelResult<Value> {
        let text = token.data.as_str();
        match (token.kind, text) {
            (TokenKind::Number, _) => {
                return Ok(Value::Number(parse_number(text).unwrap_or(f64::NAN)));
            }
            (_, "true") => return Ok(Value::Number(1.0)),
            (_, "false") => return Ok(Value::Number(0.0)),
            _ => {}
        }

        // Parameters shadow definitions.
        if let Some(value) = params.and_then(|p| p.get(text)) {
            return Ok(value.clone());
        }

        // A parameterless definition reads as its value.
        if let Some(body) = self.definitions.get(text).and_then(Definition::constant_body) {
            return self
                .evaluate_node(tree, body, None)
                .map_err(|e| e.after(token.location.clone()));
        }

        Ok(match token.kind {
            TokenKind::Str => Value::Str(text.to_string()),
            _ => Value::Name(text.to_string()),
        })
    }

    // ── Forms ────────────────────────────────────────────────────────────

    fn evaluate_form(
        &mut self,
        tree: &Tree,
        children: &[NodeId],
        params: Option<&Bindings>,
    ) -> PastelResult<Value> {
        let Some(&head_id) = children.first() else {
            return Ok(Value::Undefined);
        };

        let head = self
            .evaluate_node(tree, head_id, params)
            .map_err(|e| e.after(tree.location(head_id)))?;

        if head.is_name("define") {
            return self.evaluate_define(tree, children, params);
        }
        if head.is_name("if") {
            return self.evaluate_if(tree, children, params);
        }

        let mut list = vec![head];
        for &child in &children[1..] {
            // First failure wins; it already carries its own call chain.
            let value = self.evaluate_node(tree, child, params)?;
            if !value.is_nothing() {
                list.push(value);
            }
        }

        let name = list[0].to_string();
        match self.definitions.get(&name).cloned() {
            Some(Definition::Builtin(builtin)) => self
                .call_builtin(builtin, &list[1..])
                .map_err(|e| e.after(tree.location(head_id))),
            Some(Definition::User { params: names, body }) => {
                if list.len() - 1 != names.len() {
                    return Err(PastelError::syntax(
                        format!("Definition {name} needs {} parameters", names.len()),
                        tree.location(head_id),
                    ));
                }
                let bindings: Bindings = names.into_iter().zip(list.drain(1..)).collect();
                self.evaluate_node(tree, body, Some(&bindings))
                    .map_err(|e| e.after(tree.location(head_id)))
            }
            None => {
                list.retain(|v| !v.is_nothing());
                if list.len() == 1 {
                    Ok(list.remove(0))
                } else {
                    Ok(Value::List(list))
                }
            }
        }
    }

    /// `(define name body)` or `(define name params body)`.
    fn evaluate_define(
        &mut self,
        tree: &Tree,
        children: &[NodeId],
        params: Option<&Bindings>,
    ) -> PastelResult<Value> {
        if children.len() < 3 {
            return Err(PastelError::syntax(
                "Define clause needs at least 3 parameters",
                tree.location(children[0]),
            ));
        }

        let name = self
            .evaluate_node(tree, children[1], params)
            .map_err(|e| e.after(tree.location(children[1])))?
            .to_string();

        if self.definitions.contains(&name) {
            return Ok(Value::Null);
        }

        let definition = if children.len() > 3 {
            // The parameter list is read as plain names, outside any call.
            let names = self
                .evaluate_node(tree, children[2], None)
                .map_err(|e| e.after(tree.location(children[2])))?;
            Definition::User {
                params: parameter_names(names),
                body: children[3],
            }
        } else {
            Definition::User {
                params: Vec::new(),
                body: children[2],
            }
        };

        log::debug!(target: "pastel::eval", "define {name}");
        self.definitions.define(name, definition);
        Ok(Value::Null)
    }

    /// `(if condition then [else])`. Only the chosen branch is evaluated.
    fn evaluate_if(
        &mut self,
        tree: &Tree,
        children: &[NodeId],
        params: Option<&Bindings>,
    ) -> PastelResult<Value> {
        if children.len() < 3 {
            return Err(PastelError::syntax(
                "If clause needs at least 3 parameters",
                tree.location(children[0]),
            ));
        }

        let condition = self
            .evaluate_node(tree, children[1], params)
            .map_err(|e| e.after(tree.location(children[1])))?;

        let branch = if condition.is_truthy() {
            children[2]
        } else if let Some(&otherwise) = children.get(3) {
            otherwise
        } else {
            return Ok(Value::Undefined);
        };

        self.evaluate_node(tree, branch, params)
            .map_err(|e| e.after(tree.location(branch)))
    }

    // ── Built-ins ────────────────────────────────────────────────────────

    fn call_builtin(&mut self, builtin: Builtin, args: &[Value]) -> PastelResult<Value> {
        let value = builtin.call(args)?;
        if builtin == Builtin::Print {
            self.record_print(&value);
        }
        Ok(value)
    }

    fn record_print(&mut self, value: &Value) {
        let line = value.to_string();
        log::info!(target: "pastel::print", "{line}");
        if self.log_output.len() < self.config.log_limit {
            self.log_output.push(line);
        }
        self.total_printed += 1;
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Read an evaluated parameter list as names.
///
/// `(a b)` evaluates to a list; a lone `n` or `(n)` to a single name; `()`
/// to nothing.
fn parameter_names(value: Value) -> Vec<String> {
    match value {
        Value::List(items) => items
            .iter()
            .filter(|v| !v.is_nothing())
            .map(Value::to_string)
            .collect(),
        Value::Null | Value::Undefined => Vec::new(),
        other => vec![other.to_string()],
    }
}
