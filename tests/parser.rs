use sabdastra::{ast::Statement, error::ParseError, parse_source};

fn print(value: &str) -> Statement {
    Statement::Print { value: value.to_string() }
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match parse_source(src) {
        Ok(ast) => panic!("Script parsed but was expected to fail: {ast:?}"),
        Err(e) => assert_eq!(&e, expected, "wrong error for {src:?}"),
    }
}

#[test]
fn print_keeps_expression_text() {
    assert_eq!(parse_source("ch 1 + 2 * 3").unwrap(), vec![print("1 + 2 * 3")]);
}

#[test]
fn conditional_with_else() {
    let src = "yadi 1 == 1:\n    ch 'True'\nanya:\n    ch 'False'";

    assert_eq!(parse_source(src).unwrap(),
               vec![Statement::If { test:   "1 == 1".to_string(),
                                    body:   vec![print("'True'")],
                                    orelse: vec![print("'False'")], }]);
}

#[test]
fn conditional_without_else() {
    let src = "yadi x > 2:\n    ch x\nch 'after'";

    assert_eq!(parse_source(src).unwrap(),
               vec![Statement::If { test:   "x > 2".to_string(),
                                    body:   vec![print("x")],
                                    orelse: vec![], },
                    print("'after'")]);
}

#[test]
fn else_after_nested_block() {
    let src = "yadi x > 1:\n    yugma i in 2:\n        ch i\nanya:\n    ch 0";

    let ast = parse_source(src).unwrap();
    let [Statement::If { body, orelse, .. }] = ast.as_slice() else {
        panic!("expected a single conditional, got {ast:?}");
    };
    assert!(matches!(body.as_slice(), [Statement::For { .. }]));
    assert_eq!(orelse, &vec![print("0")]);
}

#[test]
fn counted_loop() {
    assert_eq!(parse_source("yugma i in 3:\n    ch i").unwrap(),
               vec![Statement::For { var:   "i".to_string(),
                                     bound: "3".to_string(),
                                     body:  vec![print("i")], }]);
}

#[test]
fn while_loop() {
    assert_eq!(parse_source("yatra n < 3:\n    n = n + 1").unwrap(),
               vec![Statement::While { test: "n < 3".to_string(),
                                       body: vec![Statement::Assign { target: "n".to_string(),
                                                                      value:  "n + 1".to_string(), }], }]);
}

#[test]
fn labeled_block() {
    assert_eq!(parse_source("bhava pranam:\n    ch 'Namaste'").unwrap(),
               vec![Statement::LabeledBlock { label: "pranam".to_string(),
                                              body:  vec![print("'Namaste'")], }]);
}

#[test]
fn function_definition_with_parameters() {
    assert_eq!(parse_source("kar greet(nama, mitra):\n    ch nama").unwrap(),
               vec![Statement::FunctionDef { name:   "greet".to_string(),
                                             params: vec!["nama".to_string(), "mitra".to_string()],
                                             body:   vec![print("nama")], }]);
}

#[test]
fn forward_declaration_has_empty_body() {
    assert_eq!(parse_source("kar protect\nch 1").unwrap(),
               vec![Statement::FunctionDef { name:   "protect".to_string(),
                                             params: vec![],
                                             body:   vec![], },
                    print("1")]);
}

#[test]
fn bare_calls() {
    assert_eq!(parse_source("protect\ngreet('Arjuna')").unwrap(),
               vec![Statement::Call { text: "protect".to_string() },
                    Statement::Call { text: "greet 'Arjuna'".to_string() },]);
}

#[test]
fn parsing_is_deterministic() {
    let src = "bhava a:\n    yugma i in 2:\n        yadi i == 1:\n            ch i\n        anya:\n            ch 'zero'";

    assert_eq!(parse_source(src).unwrap(), parse_source(src).unwrap());
}

#[test]
fn missing_colon() {
    assert_parse_error("yadi 1 == 1\n    ch 1",
                       &ParseError::ExpectedColon { keyword: "yadi".to_string(),
                                                    line:    1, });
    assert_parse_error("ch 0\nyatra 1\n    ch 1",
                       &ParseError::ExpectedColon { keyword: "yatra".to_string(),
                                                    line:    2, });
}

#[test]
fn missing_in() {
    assert_parse_error("yugma i 3:\n    ch i", &ParseError::ExpectedIn { line: 1 });
}

#[test]
fn missing_loop_bound() {
    assert_parse_error("yugma i in:\n    ch i", &ParseError::ExpectedLoopBound { line: 1 });
}

#[test]
fn malformed_else() {
    assert_parse_error("yadi 1:\n    ch 1\nanya 2:\n    ch 2",
                       &ParseError::MalformedElse { line: 3 });
}

#[test]
fn dangling_else() {
    assert_parse_error("anya:\n    ch 1", &ParseError::DanglingElse { line: 1 });
    assert_parse_error("ch 1\nanya:\n    ch 2", &ParseError::DanglingElse { line: 2 });
}

#[test]
fn missing_block() {
    assert_parse_error("yadi 1:\nch 2",
                       &ParseError::ExpectedBlock { keyword: "yadi".to_string(),
                                                    line:    1, });
    assert_parse_error("kar f:",
                       &ParseError::ExpectedBlock { keyword: "kar".to_string(),
                                                    line:    1, });
}

#[test]
fn stray_indentation() {
    assert_parse_error("ch 1\n    ch 2", &ParseError::UnexpectedIndent { line: 2 });
    assert_parse_error("yadi 1:\n        ch 1\n    ch 2",
                       &ParseError::UnexpectedIndent { line: 3 });
}

#[test]
fn invalid_names() {
    assert_parse_error("kar 3:\n    ch 1",
                       &ParseError::ExpectedName { keyword: "kar".to_string(),
                                                   line:    1, });
    assert_parse_error("kar f 2:\n    ch 1",
                       &ParseError::InvalidParameter { token: "2".to_string(),
                                                       line:  1, });
    assert_parse_error("bhava:\n    ch 1",
                       &ParseError::ExpectedName { keyword: "bhava".to_string(),
                                                   line:    1, });
}

#[test]
fn invalid_assignment() {
    assert_parse_error("1 = x", &ParseError::InvalidAssignment { line: 1 });
    assert_parse_error("x =", &ParseError::InvalidAssignment { line: 1 });
}

#[test]
fn error_messages_name_the_line() {
    let err = parse_source("ch 1\nyugma i 3:\n    ch i").unwrap_err();

    assert_eq!(err.line(), 2);
    assert!(err.to_string().starts_with("Error on line 2:"));
}
