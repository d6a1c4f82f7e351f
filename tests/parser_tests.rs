use lispint::ast::{Ast, BoolExpr, BoolOpCode, NumExpr, OpCode, ProgramId, Statement};
use lispint::errors::{LispError, LispResult};
use lispint::frontend::lexer::scan;
use lispint::frontend::parser::{parse_program, Parser};
use lispint::frontend::token::{Token, TokenTag};
use lispint::semantic::TreePrinter;
use lispint::utils::config::parser::MAX_NESTING_DEPTH;
use lispint::LineNumber;

fn parse_source(source: &str, ast: &mut Ast) -> LispResult<ProgramId> {
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    parse_program(&tokens, ast)
}

fn render(source: &str) -> LispResult<String> {
    let mut ast = Ast::new();
    let program = parse_source(source, &mut ast)?;
    TreePrinter::new(&ast).render(program)
}

#[test]
fn test_explicit_block() -> LispResult<()> {
    let mut ast = Ast::new();
    let program = parse_source("(BLOCK (SET x 5) (PRINT x))", &mut ast)?;

    let main = ast.programs[program].main_block();
    let statements = ast.blocks[main].statements();
    assert_eq!(statements.len(), 2);

    match &ast.statements[statements[0]] {
        Statement::Set(set) => {
            let target = ast.num_exprs.variable(set.target()).map(|variable| variable.name());
            assert_eq!(target, Some("x"));
            assert!(matches!(ast.num_exprs[set.expr()], NumExpr::Number(ref n) if n.value() == 5));
        }
        other => panic!("Expected a SET statement, but got: {:?}", other),
    }
    assert!(matches!(ast.statements[statements[1]], Statement::Print(_)));
    Ok(())
}

#[test]
fn test_bare_statement_is_single_statement_block() -> LispResult<()> {
    let mut ast = Ast::new();
    let program = parse_source("(PRINT 7)", &mut ast)?;
    let main = ast.programs[program].main_block();
    assert_eq!(ast.blocks[main].statements().len(), 1);

    assert_eq!(render("(PRINT 7)")?, render("(BLOCK (PRINT 7))")?);
    Ok(())
}

#[test]
fn test_if_with_bare_branches() -> LispResult<()> {
    let source = "(IF (GT x 0) (PRINT 1) (BLOCK (PRINT 2) (PRINT 3)))";
    assert_eq!(
        render(source)?,
        "(BLOCK (IF (GT x 0) (BLOCK (PRINT 1)) (BLOCK (PRINT 2) (PRINT 3))))"
    );
    Ok(())
}

#[test]
fn test_nested_expressions() -> LispResult<()> {
    let mut ast = Ast::new();
    let program = parse_source("(PRINT (ADD 1 (MUL 2 3)))", &mut ast)?;
    let main = ast.programs[program].main_block();
    let print = match &ast.statements[ast.blocks[main].statements()[0]] {
        Statement::Print(print) => print.expr(),
        other => panic!("Expected a PRINT statement, but got: {:?}", other),
    };
    match &ast.num_exprs[print] {
        NumExpr::Operator(add) => {
            assert_eq!(add.code(), OpCode::Add);
            assert!(matches!(&ast.num_exprs[add.right()], NumExpr::Operator(mul) if mul.code() == OpCode::Mul));
        }
        other => panic!("Expected an ADD operator, but got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_boolean_operators() -> LispResult<()> {
    let mut ast = Ast::new();
    let program = parse_source("(WHILE (AND (NOT FALSE) (EQ x 1)) (SET x 0))", &mut ast)?;
    let main = ast.programs[program].main_block();
    let condition = match &ast.statements[ast.blocks[main].statements()[0]] {
        Statement::While(stmt) => stmt.condition(),
        other => panic!("Expected a WHILE statement, but got: {:?}", other),
    };
    match &ast.bool_exprs[condition] {
        BoolExpr::BoolOp(and) => {
            assert_eq!(and.code(), BoolOpCode::And);
            assert!(and.right().is_some());
            match &ast.bool_exprs[and.left()] {
                BoolExpr::BoolOp(not) => {
                    assert_eq!(not.code(), BoolOpCode::Not);
                    assert!(not.right().is_none());
                }
                other => panic!("Expected a NOT operator, but got: {:?}", other),
            }
        }
        other => panic!("Expected an AND operator, but got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_printed_tree_parses_back() -> LispResult<()> {
    let source = "(BLOCK (INPUT n) (SET i 0) \
                  (WHILE (OR (LT i n) FALSE) (BLOCK (PRINT (SUB (DIV i 2) -1)) (SET i (ADD i 1)))) \
                  (IF (NOT (EQ i n)) (PRINT 0) (PRINT i)))";
    let first = render(source)?;
    let second = render(&first)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_node_count() -> LispResult<()> {
    let mut ast = Ast::new();
    parse_source("(SET x (ADD 1 2))", &mut ast)?;
    // x, 1, 2, ADD, SET, block, program
    assert_eq!(ast.node_count(), 7);
    assert_eq!(ast.num_exprs.len(), 4);
    Ok(())
}

#[test]
fn test_trailing_tokens() {
    let mut ast = Ast::new();
    let result = parse_source("(PRINT 1) (PRINT 2)", &mut ast);
    match result {
        Err(LispError::ParseError { message, word, position }) => {
            assert_eq!(message, "Unexpected premature ending");
            assert_eq!(word, "(");
            assert_eq!(position, 5);
        }
        other => panic!("Expected a ParseError for trailing tokens, but got: {:?}", other),
    }
}

#[test]
fn test_mismatched_tag() {
    let mut ast = Ast::new();
    let result = parse_source("(BLOCK (PRINT TRUE))", &mut ast);
    match result {
        Err(LispError::ParseError { message, word, position }) => {
            assert_eq!(message, "Unexpected initial token for a numeric expression");
            assert_eq!(word, "TRUE");
            assert_eq!(position, 5);
        }
        other => panic!("Expected a ParseError for TRUE in PRINT, but got: {:?}", other),
    }
}

#[test]
fn test_set_requires_variable_target() {
    let mut ast = Ast::new();
    let result = parse_source("(SET (ADD x 1) 5)", &mut ast);
    match result {
        Err(LispError::ParseError { message, word, position }) => {
            assert_eq!(message, "Unrecognized variable");
            assert_eq!(word, "(");
            assert_eq!(position, 3);
        }
        other => panic!("Expected a ParseError for a non-variable target, but got: {:?}", other),
    }

    let mut ast = Ast::new();
    let result = parse_source("(INPUT 3)", &mut ast);
    assert!(matches!(result, Err(LispError::ParseError { .. })));
}

#[test]
fn test_missing_close_paren() {
    let mut ast = Ast::new();
    let result = parse_source("(BLOCK (PRINT 1 2))", &mut ast);
    match result {
        Err(LispError::ParseError { message, word, .. }) => {
            assert_eq!(message, "Mismatched parenthesis");
            assert_eq!(word, "2");
        }
        other => panic!("Expected a ParseError for an extra operand, but got: {:?}", other),
    }
}

#[test]
fn test_unexpected_end_of_input() {
    let mut ast = Ast::new();
    let result = parse_source("(BLOCK (PRINT 1)", &mut ast);
    match result {
        Err(LispError::UnexpectedEndOfInput { position }) => assert_eq!(position, 7),
        other => panic!("Expected UnexpectedEndOfInput, but got: {:?}", other),
    }

    let mut ast = Ast::new();
    let result = parse_program(&[], &mut ast);
    assert!(matches!(result, Err(LispError::UnexpectedEndOfInput { position: 1 })));
}

#[test]
fn test_empty_block_rejected() {
    let mut ast = Ast::new();
    let result = parse_source("(BLOCK)", &mut ast);
    assert!(result.unwrap_err().is_parse_error());
}

#[test]
fn test_invalid_block_head() {
    let mut ast = Ast::new();
    let result = parse_source("(ADD 1 2)", &mut ast);
    match result {
        Err(LispError::ParseError { message, word, position }) => {
            assert_eq!(message, "Invalid block definition");
            assert_eq!(word, "ADD");
            assert_eq!(position, 2);
        }
        other => panic!("Expected a ParseError for (ADD ...) as a block, but got: {:?}", other),
    }
}

#[test]
fn test_program_must_start_with_paren() {
    let mut ast = Ast::new();
    let result = parse_source("x", &mut ast);
    assert!(matches!(
        result,
        Err(LispError::ParseError { ref message, .. }) if message == "Unexpected initial token for a block"
    ));
}

#[test]
fn test_unrecognized_operators() {
    let mut ast = Ast::new();
    let result = parse_source("(PRINT (LT 1 2))", &mut ast);
    assert!(matches!(
        result,
        Err(LispError::ParseError { ref message, .. }) if message == "Unrecognized operator"
    ));

    let mut ast = Ast::new();
    let result = parse_source("(IF (ADD 1 2) (PRINT 1) (PRINT 2))", &mut ast);
    assert!(matches!(
        result,
        Err(LispError::ParseError { ref message, .. }) if message == "Unrecognized operator in boolean expression"
    ));
}

#[test]
fn test_hand_built_tokens() -> LispResult<()> {
    let tokens = vec![
        Token::symbol(TokenTag::Lp),
        Token::symbol(TokenTag::Print),
        Token::number(42),
        Token::symbol(TokenTag::Rp),
    ];
    let mut ast = Ast::new();
    let program = Parser::new(&tokens, &mut ast).parse()?;
    assert_eq!(TreePrinter::new(&ast).render(program)?, "(BLOCK (PRINT 42))");
    Ok(())
}

#[test]
fn test_malformed_number_token() {
    let tokens = vec![
        Token::symbol(TokenTag::Lp),
        Token::symbol(TokenTag::Print),
        Token::new(TokenTag::Number, "12a"),
        Token::symbol(TokenTag::Rp),
    ];
    let mut ast = Ast::new();
    let result = parse_program(&tokens, &mut ast);
    assert!(matches!(
        result,
        Err(LispError::ParseError { ref message, .. }) if message == "Invalid numeric literal"
    ));
}

#[test]
fn test_opcode_conversion_error() {
    let result = OpCode::from_tag(TokenTag::Lt);
    match result {
        Err(err @ LispError::ConversionError { .. }) => {
            assert_eq!(err.to_string(), "Token to OpCode conversion error: LT");
        }
        other => panic!("Expected a ConversionError, but got: {:?}", other),
    }
}

// (PRINT (ADD 1 (ADD 1 ... 0))) with `levels` ADD operators.
fn nested_sum(levels: usize) -> String {
    format!("(PRINT {}0{})", "(ADD 1 ".repeat(levels), ")".repeat(levels))
}

#[test]
fn test_nesting_limit() -> LispResult<()> {
    let mut ast = Ast::new();
    parse_source(&nested_sum(150), &mut ast)?;
    assert_eq!(ast.num_exprs.len(), 301);

    for levels in [MAX_NESTING_DEPTH, 2000, 30000] {
        let mut ast = Ast::new();
        let result = parse_source(&nested_sum(levels), &mut ast);
        match result {
            Err(LispError::ParseError { message, .. }) => assert_eq!(message, "Nesting too deep"),
            other => panic!("Expected a ParseError at {} levels, but got: {:?}", levels, other),
        }
    }
    Ok(())
}

#[test]
fn test_nesting_limit_counts_blocks() {
    let source = format!("{}(PRINT 1){}", "(WHILE (NOT FALSE) ".repeat(250), ")".repeat(250));
    let mut ast = Ast::new();
    let result = parse_source(&source, &mut ast);
    assert!(matches!(
        result,
        Err(LispError::ParseError { ref message, .. }) if message == "Nesting too deep"
    ));
}
