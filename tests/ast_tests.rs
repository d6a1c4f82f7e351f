use lispint::ast::{Ast, BoolExpr, NumExpr, OpCode, Statement};
use lispint::errors::LispResult;
use lispint::semantic::TreePrinter;

#[test]
fn test_arenas_start_empty() {
    let ast = Ast::new();
    assert_eq!(ast.node_count(), 0);
    assert!(ast.num_exprs.is_empty());
    assert!(ast.programs.is_empty());
}

#[test]
fn test_make_returns_distinct_handles() {
    let mut ast = Ast::new();
    let first = ast.num_exprs.make_number(1);
    let second = ast.num_exprs.make_number(1);
    assert_ne!(first, second);
    assert_eq!(ast.num_exprs.len(), 2);
    assert_eq!(ast.num_exprs[first], ast.num_exprs[second]);
}

#[test]
fn test_variable_handle_only_for_variables() {
    let mut ast = Ast::new();
    let number = ast.num_exprs.make_number(3);
    let name = ast.num_exprs.make_variable("total");
    let sum = ast.num_exprs.make_operator(OpCode::Add, name, number);

    assert!(ast.num_exprs.variable_handle(number).is_none());
    assert!(ast.num_exprs.variable_handle(sum).is_none());

    let handle = ast.num_exprs.variable_handle(name);
    assert_eq!(handle.map(|id| id.expr()), Some(name));
    let variable = handle.and_then(|id| ast.num_exprs.variable(id));
    assert_eq!(variable.map(|v| v.name()), Some("total"));
}

#[test]
fn test_nodes_are_read_through_handles() -> LispResult<()> {
    let mut ast = Ast::new();
    let truth = ast.bool_exprs.make_bool_const(true);
    let negated = ast.bool_exprs.make_not(truth);
    let seven = ast.num_exprs.make_number(7);
    let print = ast.statements.make_print_stmt(seven);
    let then_block = ast.blocks.make_block(vec![print]);
    let eight = ast.num_exprs.make_number(8);
    let other = ast.statements.make_print_stmt(eight);
    let else_block = ast.blocks.make_block(vec![other]);
    let branch = ast.statements.make_if_stmt(negated, then_block, else_block);
    let main = ast.blocks.make_block(vec![branch]);
    let program = ast.programs.make_program(main);

    assert!(matches!(ast.bool_exprs[negated], BoolExpr::BoolOp(_)));
    assert!(matches!(ast.num_exprs[seven], NumExpr::Number(_)));
    match &ast.statements[branch] {
        Statement::If(stmt) => {
            assert_eq!(stmt.condition(), negated);
            assert_eq!(stmt.then_block(), then_block);
            assert_eq!(stmt.else_block(), else_block);
        }
        other => panic!("Expected an IF statement, but got: {:?}", other),
    }
    assert_eq!(ast.node_count(), 11);

    let text = TreePrinter::new(&ast).render(program)?;
    assert_eq!(text, "(BLOCK (IF (NOT TRUE) (BLOCK (PRINT 7)) (BLOCK (PRINT 8))))");
    Ok(())
}
