use gentle_core::target::{
    Assignment, BinaryOp, Conditional, Declaration, Expr, ForLoop, FunctionDefinition, Literal,
    Stmt, TargetNode,
};
use gentle_core::TargetType;
use gentle_emit::{CEmitter, EmitterConfig, Emitter, IndentStyle};
use pretty_assertions::assert_eq;

fn ident(name: &str) -> Expr {
    Expr::ident(name)
}

fn float(v: f64) -> Expr {
    Expr::Literal(Literal::Float(v))
}

fn return_12() -> FunctionDefinition {
    FunctionDefinition {
        name: "return_12".to_string(),
        return_type: TargetType::Int32,
        params: vec![],
        body: vec![Stmt::Return(Some(Expr::int(12)))],
    }
}

fn for_loop() -> FunctionDefinition {
    FunctionDefinition {
        name: "for_loop".to_string(),
        return_type: TargetType::Int32,
        params: vec![Declaration::new("c", TargetType::Int32, None)],
        body: vec![
            Stmt::Declaration(Declaration::new("y", TargetType::Int32, Some(Expr::int(0)))),
            Stmt::ForLoop(ForLoop {
                init: Declaration::new("a", TargetType::Int32, Some(ident("c"))),
                cond: Expr::binary(
                    BinaryOp::Lt,
                    ident("a"),
                    Expr::binary(BinaryOp::Add, ident("c"), Expr::int(10)),
                ),
                next: Assignment {
                    operator: BinaryOp::Add,
                    target: ident("a"),
                    value: Expr::int(2),
                },
                body: vec![
                    Stmt::Assignment(Assignment {
                        operator: BinaryOp::Add,
                        target: ident("y"),
                        value: ident("a"),
                    }),
                    Stmt::Assignment(Assignment {
                        operator: BinaryOp::Sub,
                        target: ident("y"),
                        value: Expr::int(2),
                    }),
                ],
            }),
            Stmt::Return(Some(ident("y"))),
        ],
    }
}

#[test]
fn test_function_without_parameters() {
    let emitter = CEmitter::new();
    assert_eq!(
        emitter.render_function(&return_12()),
        "int return_12(void)\n{\n  return 12;\n}\n"
    );
}

#[test]
fn test_for_loop() {
    let emitter = CEmitter::new();
    let expected = "\
int for_loop(int c)
{
  int y = 0;
  for (int a = c; a < (c + 10); a += 2)
  {
    y += a;
    y -= 2;
  }
  return y;
}
";
    assert_eq!(emitter.render_function(&for_loop()), expected);
}

#[test]
fn test_pointer_parameter_and_index() {
    let def = FunctionDefinition {
        name: "simple_kernel".to_string(),
        return_type: TargetType::Double,
        params: vec![
            Declaration::new("a", TargetType::pointer_to(TargetType::Double), None),
            Declaration::new("i", TargetType::Int32, None),
        ],
        body: vec![Stmt::Return(Some(Expr::IndexExpr {
            base: Box::new(ident("a")),
            index: Box::new(ident("i")),
        }))],
    };

    assert_eq!(
        CEmitter::new().render_function(&def),
        "double simple_kernel(double *a, int i)\n{\n  return a[i];\n}\n"
    );
}

#[test]
fn test_elif_chain_renders_else_if() {
    let ret = |v| Stmt::Return(Some(Expr::int(v)));
    let def = FunctionDefinition {
        name: "if_statement".to_string(),
        return_type: TargetType::Int32,
        params: vec![Declaration::new("c", TargetType::Int32, None)],
        body: vec![Stmt::Conditional(Conditional {
            cond: ident("c"),
            then_branch: vec![ret(13)],
            else_branch: Some(vec![Stmt::Conditional(Conditional {
                cond: Expr::binary(BinaryOp::Add, ident("c"), Expr::int(1)),
                then_branch: vec![ret(14)],
                else_branch: Some(vec![ret(15)]),
            })]),
        })],
    };

    let expected = "\
int if_statement(int c)
{
  if (c)
  {
    return 13;
  }
  else if (c + 1)
  {
    return 14;
  }
  else
  {
    return 15;
  }
}
";
    assert_eq!(CEmitter::new().render_function(&def), expected);
}

#[test]
fn test_expressions() {
    let emitter = CEmitter::new();

    let ternary_call = Expr::CallExpr {
        callee: "sqrt".to_string(),
        args: vec![Expr::TernaryExpr {
            cond: Box::new(ident("c")),
            then_expr: Box::new(Expr::binary(
                BinaryOp::Add,
                Expr::binary(BinaryOp::Add, float(5.0), float(6.0)),
                ident("x"),
            )),
            else_expr: Box::new(float(7.0)),
        }],
    };
    assert_eq!(emitter.expr(&ternary_call), "sqrt(c ? ((5.0 + 6.0) + x) : 7.0)");

    let compound = Expr::CompoundLiteralExpr {
        ty: TargetType::Unsupported,
        elements: vec![ident("z"), Expr::int(2)],
    };
    assert_eq!(emitter.expr(&compound), "(TUPLE){z, 2}");

    let nested_index = Expr::IndexExpr {
        base: Box::new(ident("a")),
        index: Box::new(Expr::binary(BinaryOp::Add, ident("i"), Expr::int(1))),
    };
    assert_eq!(emitter.expr(&nested_index), "a[i + 1]");

    assert_eq!(emitter.expr(&Expr::Literal(Literal::Bool(true))), "1");
    assert_eq!(
        emitter.expr(&Expr::Literal(Literal::Str("hi\n".to_string()))),
        "\"hi\\n\""
    );
}

#[test]
fn test_declarations() {
    let emitter = CEmitter::new();

    let bare = TargetNode::Stmt(Stmt::Declaration(Declaration::new(
        "acc",
        TargetType::Double,
        None,
    )));
    assert_eq!(emitter.render(&bare), "double acc;\n");

    let tuple = TargetNode::Stmt(Stmt::Declaration(Declaration::new(
        "m",
        TargetType::Unsupported,
        Some(Expr::CompoundLiteralExpr {
            ty: TargetType::Unsupported,
            elements: vec![ident("z"), Expr::int(2)],
        }),
    )));
    assert_eq!(emitter.render(&tuple), "TUPLE m = (TUPLE){z, 2};\n");

    assert_eq!(emitter.render(&TargetNode::Stmt(Stmt::Return(None))), "return;\n");
}

#[test]
fn test_compact_output() {
    let emitter = CEmitter::with_config(EmitterConfig::compact());
    assert_eq!(
        emitter.render_function(&return_12()),
        "int return_12(void){return 12;}"
    );
    assert!(!emitter.render_function(&for_loop()).contains('\n'));
}

#[test]
fn test_tab_indentation() {
    let emitter = CEmitter::with_config(EmitterConfig {
        indent_style: IndentStyle::Tabs,
        line_breaks: true,
    });
    assert_eq!(
        emitter.render_function(&return_12()),
        "int return_12(void)\n{\n\treturn 12;\n}\n"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let emitter = CEmitter::new();
    let node = TargetNode::Function(for_loop());
    assert_eq!(emitter.render(&node), emitter.render(&node));
}

#[test]
fn test_emit_trait_matches_render() {
    let emitter = CEmitter::new();
    let node = TargetNode::Function(for_loop());
    assert_eq!(emitter.emit_to_string(&node).unwrap(), emitter.render(&node));
}

#[test]
fn test_config_serializes() {
    let config = EmitterConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: EmitterConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
