//! Occurrence extraction: walk one file's AST and collect every
//! `process.env` access.
//!
//! Recognition is purely structural. `process.env.<ident>` and
//! `process.env["literal"]` yield static occurrences; a computed subscript
//! with a non-literal expression yields one [`DYNAMIC_KEY`] occurrence.
//! Nothing is ever evaluated.

use std::sync::LazyLock;

use regex::Regex;
use swc_ecma_ast::{
    BinExpr, BinaryOp, CondExpr, Expr, Lit, MemberExpr, MemberProp, Program, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::catalog::{DYNAMIC_KEY, EnvOccurrence};

static SENSITIVE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)secret|token|key|pwd|password|private").unwrap());

/// Whether a key name suggests the value is a credential.
///
/// A pure function of the key text; the default value and file of origin
/// never influence the classification.
pub fn looks_sensitive(key: &str) -> bool {
    SENSITIVE_KEY_REGEX.is_match(key)
}

/// Extract all environment-variable occurrences from a parsed program.
pub fn extract_occurrences(program: &Program, file_path: &str) -> Vec<EnvOccurrence> {
    let mut visitor = EnvVisitor::new(file_path);
    program.visit_with(&mut visitor);
    visitor.occurrences
}

enum EnvAccess {
    Static(String),
    Dynamic,
}

struct EnvVisitor<'a> {
    file_path: &'a str,
    occurrences: Vec<EnvOccurrence>,
    /// Default inferred from an enclosing `|| lit`, `?? lit` or ternary,
    /// consumed by the outermost matching member access beneath it.
    pending_default: Option<String>,
}

impl<'a> EnvVisitor<'a> {
    fn new(file_path: &'a str) -> Self {
        Self {
            file_path,
            occurrences: Vec::new(),
            pending_default: None,
        }
    }

    fn record(&mut self, access: EnvAccess, default_value: Option<String>) {
        let occurrence = match access {
            EnvAccess::Static(key) => EnvOccurrence {
                looks_sensitive: looks_sensitive(&key),
                default_value,
                key,
                source_file: self.file_path.to_string(),
            },
            // The dynamic bucket is a diagnostic counter: no default, no
            // sensitivity bit (the sentinel text itself would match the
            // key pattern).
            EnvAccess::Dynamic => EnvOccurrence {
                key: DYNAMIC_KEY.to_string(),
                default_value: None,
                looks_sensitive: false,
                source_file: self.file_path.to_string(),
            },
        };
        self.occurrences.push(occurrence);
    }
}

fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        _ => expr,
    }
}

/// Match the `process.env` object itself.
fn is_process_env(expr: &Expr) -> bool {
    let Expr::Member(member) = unwrap_paren(expr) else {
        return false;
    };
    let Expr::Ident(obj) = unwrap_paren(&member.obj) else {
        return false;
    };
    if obj.sym.as_str() != "process" {
        return false;
    }
    match &member.prop {
        MemberProp::Ident(prop) => prop.sym.as_str() == "env",
        MemberProp::Computed(computed) => {
            matches!(&*computed.expr, Expr::Lit(Lit::Str(s)) if s.value.as_str() == Some("env"))
        }
        MemberProp::PrivateName(_) => false,
    }
}

fn exprless_template_text(tpl: &Tpl) -> Option<String> {
    if !tpl.exprs.is_empty() {
        return None;
    }
    tpl.quasis
        .first()
        .and_then(|q| q.cooked.as_ref())
        .and_then(|s| s.as_str())
        .map(|s| s.to_string())
}

/// Match one member access against `process.env.<key>` shapes.
fn match_env_member(member: &MemberExpr) -> Option<EnvAccess> {
    if !is_process_env(&member.obj) {
        return None;
    }
    match &member.prop {
        MemberProp::Ident(prop) => Some(EnvAccess::Static(prop.sym.to_string())),
        MemberProp::Computed(computed) => match unwrap_paren(&computed.expr) {
            Expr::Lit(Lit::Str(s)) => Some(match s.value.as_str() {
                Some(key) => EnvAccess::Static(key.to_string()),
                None => EnvAccess::Dynamic,
            }),
            Expr::Tpl(tpl) => Some(match exprless_template_text(tpl) {
                Some(key) => EnvAccess::Static(key),
                None => EnvAccess::Dynamic,
            }),
            _ => Some(EnvAccess::Dynamic),
        },
        MemberProp::PrivateName(_) => None,
    }
}

fn is_env_access(expr: &Expr) -> bool {
    match unwrap_paren(expr) {
        Expr::Member(member) => match_env_member(member).is_some(),
        _ => false,
    }
}

fn number_to_string(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Stringified literal usable as a fallback after `||` / `??`.
fn coalesce_default(expr: &Expr) -> Option<String> {
    match unwrap_paren(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|v| v.to_string()),
        Expr::Lit(Lit::Num(n)) => Some(number_to_string(n.value)),
        Expr::Lit(Lit::Bool(b)) => Some(b.value.to_string()),
        _ => None,
    }
}

/// Stringified literal usable as a ternary alternate. Booleans are not
/// accepted here: `process.env.X ? y : false` is a flag pattern, not a
/// declared fallback value.
fn ternary_default(expr: &Expr) -> Option<String> {
    match unwrap_paren(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|v| v.to_string()),
        Expr::Lit(Lit::Num(n)) => Some(number_to_string(n.value)),
        _ => None,
    }
}

impl Visit for EnvVisitor<'_> {
    fn visit_member_expr(&mut self, node: &MemberExpr) {
        if let Some(access) = match_env_member(node) {
            let default_value = self.pending_default.take();
            self.record(access, default_value);
        }
        node.visit_children_with(self);
    }

    fn visit_bin_expr(&mut self, node: &BinExpr) {
        if matches!(node.op, BinaryOp::LogicalOr | BinaryOp::NullishCoalescing)
            && is_env_access(&node.left)
            && let Some(default) = coalesce_default(&node.right)
        {
            let prev = self.pending_default.replace(default);
            node.left.visit_with(self);
            self.pending_default = prev;
            node.right.visit_with(self);
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_cond_expr(&mut self, node: &CondExpr) {
        if is_env_access(&node.test)
            && let Some(default) = ternary_default(&node.alt)
        {
            let prev = self.pending_default.replace(default);
            node.test.visit_with(self);
            self.pending_default = prev;
            node.cons.visit_with(self);
            node.alt.visit_with(self);
            return;
        }
        node.visit_children_with(self);
    }
}
