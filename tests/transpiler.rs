use sabdastra::{ast::Statement, mantra, toolchain::transpiler::transpile, transpile_source};

fn assert_transpiles(src: &str, expected: &str) {
    match transpile_source(src) {
        Ok(text) => assert_eq!(text, expected, "wrong rendering for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

#[test]
fn print_and_assignment() {
    assert_transpiles("x = 1 + 2\nch x", "x = 1 + 2\nprint(x)");
}

#[test]
fn conditional_with_else() {
    assert_transpiles("yadi 1 == 1:\n    ch 'True'\nanya:\n    ch 'False'",
                      "if 1 == 1:\n    print('True')\nelse:\n    print('False')");
}

#[test]
fn counted_loop_over_range() {
    assert_transpiles("yugma i in 3:\n    ch i", "for i in range(3):\n    print(i)");
}

#[test]
fn while_loop() {
    assert_transpiles("yatra n < 3:\n    n = n + 1", "while n < 3:\n    n = n + 1");
}

#[test]
fn labeled_block_keeps_its_label_as_a_comment() {
    assert_transpiles("bhava pranam:\n    ch 'Namaste'",
                      "if True:  # bhava pranam\n    print('Namaste')");
}

#[test]
fn functions_and_calls() {
    assert_transpiles("kar greet(nama):\n    ch nama\ngreet('Arjuna')\nprotect",
                      "def greet(nama):\n    print(nama)\ngreet('Arjuna')\nprotect()");
}

#[test]
fn empty_bodies_render_as_pass() {
    assert_transpiles("kar protect", "def protect():\n    pass");
}

#[test]
fn nested_blocks_indent_one_level_each() {
    let src = "bhava outer:\n    yugma i in 2:\n        yadi i == 1:\n            ch i\nch 'done'";
    let expected = "if True:  # bhava outer\n    for i in range(2):\n        if i == 1:\n            print(i)\nprint('done')";

    assert_transpiles(src, expected);
}

#[test]
fn empty_program_renders_nothing() {
    assert_transpiles("", "");
}

#[test]
fn hand_built_ast_with_empty_conditional_body() {
    let ast = vec![Statement::If { test:   "x".to_string(),
                                   body:   vec![],
                                   orelse: vec![Statement::Print { value: "x".to_string() }], }];

    assert_eq!(transpile(&ast), "if x:\n    pass\nelse:\n    print(x)");
}

#[test]
fn mantras() {
    assert_eq!(transpile(&mantra::lookup("gayatri").unwrap()), "print('Wisdom unlocked')");
    assert_eq!(transpile(&mantra::lookup("mahamrityunjaya").unwrap()),
               "def protect():\n    print('Protection invoked')\nprotect()");
}
