use crate::source::{Annotation, BinOp, Expr, ExprKind, Item, Literal, Module, Stmt, StmtKind};
use pretty_assertions::assert_eq;

const RETURN_12: &str = r#"{
    "filename": "demo.py",
    "body": [
        {"type": "Other", "construct": "ImportFrom", "line": 1},
        {
            "type": "FunctionDef",
            "name": "return_12",
            "line": 5,
            "returns": {"name": "int"},
            "body": [
                {"type": "Return", "line": 6, "value": {"type": "Constant", "line": 6, "value": {"int": 12}}}
            ]
        }
    ]
}"#;

#[test]
fn test_module_from_json() {
    let module = Module::from_json(RETURN_12).unwrap();
    assert_eq!(module.filename.as_deref(), Some("demo.py"));
    assert_eq!(module.body.len(), 2);
    assert!(matches!(&module.body[0], Item::Other { construct, line: 1 } if construct == "ImportFrom"));

    let functions: Vec<_> = module.functions().collect();
    assert_eq!(functions.len(), 1);
    assert_eq!(functions[0].name, "return_12");
    assert_eq!(functions[0].returns, Some(Annotation::int()));
    assert_eq!(functions[0].body, vec![Stmt::ret(Expr::int(12).at(6)).at(6)]);
}

#[test]
fn test_nested_statements_from_json() {
    let json = r#"{
        "type": "For",
        "line": 3,
        "target": "a",
        "iter": {
            "type": "Call",
            "func": "range",
            "args": [
                {"type": "Name", "id": "c"},
                {"type": "BinOp", "op": "Add", "left": {"type": "Name", "id": "c"}, "right": {"type": "Constant", "value": {"int": 10}}}
            ]
        },
        "body": [
            {"type": "AugAssign", "line": 4, "target": {"type": "Name", "id": "y"}, "op": "Add", "value": {"type": "Name", "id": "a"}}
        ]
    }"#;

    let stmt: Stmt = serde_json::from_str(json).unwrap();
    assert_eq!(stmt.line, 3);
    let StmtKind::For { target, iter, body, orelse } = stmt.kind else {
        panic!("expected a for statement");
    };
    assert_eq!(target, "a");
    assert!(orelse.is_empty());
    assert_eq!(
        iter,
        Expr::call(
            "range",
            vec![
                Expr::name("c"),
                Expr::binop(BinOp::Add, Expr::name("c"), Expr::int(10)),
            ]
        )
    );
    assert_eq!(
        body,
        vec![Stmt::aug_assign(Expr::name("y"), BinOp::Add, Expr::name("a")).at(4)]
    );
}

#[test]
fn test_annotation_forms_from_json() {
    let array: Annotation =
        serde_json::from_str(r#"{"subscript": {"base": "Array", "index": {"name": "float"}}}"#).unwrap();
    assert_eq!(array, Annotation::array(Annotation::float()));

    let null: Annotation = serde_json::from_str(r#""null""#).unwrap();
    assert_eq!(null, Annotation::Null);

    let tuple: Annotation = serde_json::from_str(
        r#"{"subscript": {"base": "tuple", "index": {"tuple": [{"name": "float"}, {"name": "int"}]}}}"#,
    )
    .unwrap();
    assert_eq!(tuple, Annotation::tuple_of(vec![Annotation::float(), Annotation::int()]));
}

#[test]
fn test_literals_from_json() {
    let expr: Expr = serde_json::from_str(r#"{"type": "Constant", "value": {"float": 12.0}}"#).unwrap();
    assert_eq!(expr.kind, ExprKind::Constant { value: Literal::Float(12.0) });

    let none: Expr = serde_json::from_str(r#"{"type": "Constant", "value": "none"}"#).unwrap();
    assert_eq!(none.kind, ExprKind::Constant { value: Literal::None });
}

#[test]
fn test_unsupported_nodes_keep_their_name() {
    let stmt: Stmt = serde_json::from_str(r#"{"type": "Unsupported", "construct": "While", "line": 9}"#).unwrap();
    assert_eq!(stmt.construct(), "While");
    assert_eq!(stmt.line, 9);

    let expr = Expr::unsupported("Compare");
    assert_eq!(expr.construct(), "Compare");
}

#[test]
fn test_annotation_display() {
    assert_eq!(Annotation::int().to_string(), "int");
    assert_eq!(Annotation::Null.to_string(), "None");
    assert_eq!(Annotation::array(Annotation::float()).to_string(), "Array[float]");
    assert_eq!(
        Annotation::tuple_of(vec![Annotation::float(), Annotation::int()]).to_string(),
        "tuple[float, int]"
    );
}

#[test]
fn test_module_json_survives_serialization() {
    let module = Module::from_json(RETURN_12).unwrap();
    let json = serde_json::to_string(&module).unwrap();
    assert_eq!(Module::from_json(&json).unwrap(), module);
}
