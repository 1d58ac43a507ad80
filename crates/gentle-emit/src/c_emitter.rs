use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
use gentle_core::target::{
    Assignment, Conditional, Declaration, Expr, ForLoop, FunctionDefinition, Literal, Stmt,
    TargetNode,
};
use std::io::Write;

/// Renders target IR as C. Binary, ternary and index operands that are not atoms are wrapped in
/// parentheses, so no precedence table is needed.
#[derive(Debug, Clone, Default)]
pub struct CEmitter {
    config: EmitterConfig,
}

impl CEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn render(&self, node: &TargetNode) -> String {
        let mut out = String::new();
        let mut context = self.context();
        self.write_node(&mut out, node, &mut context);
        out
    }

    pub fn render_function(&self, def: &FunctionDefinition) -> String {
        let mut out = String::new();
        let mut context = self.context();
        self.write_function(&mut out, def, &mut context);
        out
    }

    fn write_node(&self, out: &mut String, node: &TargetNode, context: &mut EmitContext) {
        match node {
            TargetNode::Function(def) => self.write_function(out, def, context),
            TargetNode::Stmt(stmt) => self.write_stmt(out, stmt, context),
            TargetNode::Expr(expr) => out.push_str(&self.expr(expr)),
        }
    }

    fn write_function(&self, out: &mut String, def: &FunctionDefinition, context: &mut EmitContext) {
        let params = if def.params.is_empty() {
            "void".to_string()
        } else {
            def.params
                .iter()
                .map(|p| p.ty.declarator(&p.name))
                .collect::<Vec<_>>()
                .join(", ")
        };

        EmitHelper::write_line(
            out,
            context,
            &format!("{}({})", def.return_type.declarator(&def.name), params),
        );
        self.write_body(out, &def.body, context);
    }

    fn write_body(&self, out: &mut String, body: &[Stmt], context: &mut EmitContext) {
        EmitHelper::write_block(out, context, |out, context| {
            for stmt in body {
                self.write_stmt(out, stmt, context);
            }
        });
    }

    fn write_stmt(&self, out: &mut String, stmt: &Stmt, context: &mut EmitContext) {
        match stmt {
            Stmt::Declaration(decl) => {
                EmitHelper::write_line(out, context, &format!("{};", self.declaration(decl)))
            }
            Stmt::Assignment(assignment) => {
                EmitHelper::write_line(out, context, &format!("{};", self.assignment(assignment)))
            }
            Stmt::Return(None) => EmitHelper::write_line(out, context, "return;"),
            Stmt::Return(Some(value)) => {
                EmitHelper::write_line(out, context, &format!("return {};", self.expr(value)))
            }
            Stmt::Conditional(conditional) => {
                self.write_conditional(out, conditional, "if", context)
            }
            Stmt::ForLoop(for_loop) => self.write_for(out, for_loop, context),
        }
    }

    fn write_conditional(
        &self,
        out: &mut String,
        conditional: &Conditional,
        keyword: &str,
        context: &mut EmitContext,
    ) {
        EmitHelper::write_line(
            out,
            context,
            &format!("{} ({})", keyword, self.expr(&conditional.cond)),
        );
        self.write_body(out, &conditional.then_branch, context);

        match conditional.else_branch.as_deref() {
            None => {}
            Some([Stmt::Conditional(nested)]) => {
                self.write_conditional(out, nested, "else if", context)
            }
            Some(else_branch) => {
                EmitHelper::write_line(out, context, "else");
                self.write_body(out, else_branch, context);
            }
        }
    }

    fn write_for(&self, out: &mut String, for_loop: &ForLoop, context: &mut EmitContext) {
        EmitHelper::write_line(
            out,
            context,
            &format!(
                "for ({}; {}; {})",
                self.declaration(&for_loop.init),
                self.expr(&for_loop.cond),
                self.assignment(&for_loop.next)
            ),
        );
        self.write_body(out, &for_loop.body, context);
    }

    fn declaration(&self, decl: &Declaration) -> String {
        let declarator = decl.ty.declarator(&decl.name);
        match &decl.init {
            Some(init) => format!("{} = {}", declarator, self.expr(init)),
            None => declarator,
        }
    }

    fn assignment(&self, assignment: &Assignment) -> String {
        format!(
            "{} {}= {}",
            self.expr(&assignment.target),
            assignment.operator,
            self.expr(&assignment.value)
        )
    }

    pub fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Identifier(name) => name.clone(),
            Expr::Literal(literal) => literal_text(literal),
            Expr::BinaryExpr { op, left, right } => {
                format!("{} {} {}", self.operand(left), op, self.operand(right))
            }
            Expr::IndexExpr { base, index } => {
                format!("{}[{}]", self.operand(base), self.expr(index))
            }
            Expr::CallExpr { callee, args } => format!("{}({})", callee, self.list(args)),
            Expr::TernaryExpr {
                cond,
                then_expr,
                else_expr,
            } => format!(
                "{} ? {} : {}",
                self.operand(cond),
                self.operand(then_expr),
                self.operand(else_expr)
            ),
            Expr::CompoundLiteralExpr { ty, elements } => {
                format!("({}){{{}}}", ty, self.list(elements))
            }
        }
    }

    fn operand(&self, expr: &Expr) -> String {
        if expr.is_atom() {
            self.expr(expr)
        } else {
            format!("({})", self.expr(expr))
        }
    }

    fn list(&self, exprs: &[Expr]) -> String {
        exprs
            .iter()
            .map(|e| self.expr(e))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Emitter for CEmitter {
    type Item = TargetNode;

    fn emit<W: Write>(
        &self,
        item: &Self::Item,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let mut out = String::new();
        self.write_node(&mut out, item, context);
        writer.write_all(out.as_bytes())?;
        Ok(())
    }

    fn context(&self) -> EmitContext {
        EmitContext::from_config(&self.config)
    }
}

fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Int(v) => v.to_string(),
        Literal::Float(v) => float_text(*v),
        Literal::Bool(true) => "1".to_string(),
        Literal::Bool(false) => "0".to_string(),
        Literal::Str(s) => string_text(s),
    }
}

/// Always keeps a decimal point or exponent so the literal stays a `double`.
fn float_text(v: f64) -> String {
    if v.is_nan() {
        "NAN".to_string()
    } else if v == f64::INFINITY {
        "INFINITY".to_string()
    } else if v == f64::NEG_INFINITY {
        "-INFINITY".to_string()
    } else {
        format!("{:?}", v)
    }
}

fn string_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_text_keeps_double_form() {
        assert_eq!(float_text(12.0), "12.0");
        assert_eq!(float_text(0.5), "0.5");
        assert_eq!(float_text(f64::INFINITY), "INFINITY");
        assert_eq!(float_text(f64::NAN), "NAN");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(string_text("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
        assert_eq!(string_text("\u{1}"), "\"\\001\"");
    }
}
