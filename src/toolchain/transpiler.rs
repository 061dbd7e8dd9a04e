use crate::{
    ast::Statement,
    toolchain::lexer::{Token, lex_line},
};

/// Width of one indentation level in the rendered text.
const INDENT: &str = "    ";

/// Renders a program as indentation-structured scripting source.
///
/// Each statement kind maps to exactly one construct:
///
/// | Statement        | Rendering                         |
/// |------------------|-----------------------------------|
/// | labeled block    | `if True:  # bhava <label>`       |
/// | function def     | `def <name>(<params>):`           |
/// | conditional      | `if <test>:` / `else:`            |
/// | counted loop     | `for <var> in range(<bound>):`    |
/// | while loop       | `while <test>:`                   |
/// | print            | `print(<value>)`                  |
/// | assignment       | `<target> = <value>`              |
/// | call             | `<callee>(<args>)`                |
///
/// A call line is re-read as a callee followed by argument lexemes, so a bare
/// `protect` renders as `protect()`. Nested blocks are indented one level
/// deeper. An empty block renders as `pass`, and the `else:` line is omitted
/// when the else-branch is empty.
/// Lines are joined with `\n`, without a trailing newline.
///
/// # Example
/// ```
/// use sabdastra::{ast::Statement, toolchain::transpiler::transpile};
///
/// let program = vec![Statement::If { test:   "x > 1".to_string(),
///                                    body:   vec![Statement::Print { value: "'big'".to_string() }],
///                                    orelse: vec![], }];
///
/// assert_eq!(transpile(&program), "if x > 1:\n    print('big')");
/// ```
#[must_use]
pub fn transpile(statements: &[Statement]) -> String {
    let mut out = Vec::new();
    render_block(statements, 0, &mut out);
    out.join("\n")
}

fn render_block(statements: &[Statement], depth: usize, out: &mut Vec<String>) {
    for statement in statements {
        render_statement(statement, depth, out);
    }
}

/// Renders a nested block, standing in `pass` when it has no statements.
fn render_body(body: &[Statement], depth: usize, out: &mut Vec<String>) {
    if body.is_empty() {
        out.push(format!("{}pass", INDENT.repeat(depth)));
    } else {
        render_block(body, depth, out);
    }
}

fn render_statement(statement: &Statement, depth: usize, out: &mut Vec<String>) {
    let pad = INDENT.repeat(depth);

    match statement {
        Statement::LabeledBlock { label, body } => {
            out.push(format!("{pad}if True:  # bhava {label}"));
            render_body(body, depth + 1, out);
        },
        Statement::FunctionDef { name, params, body } => {
            out.push(format!("{pad}def {name}({}):", params.join(", ")));
            render_body(body, depth + 1, out);
        },
        Statement::If { test, body, orelse } => {
            out.push(format!("{pad}if {test}:"));
            render_body(body, depth + 1, out);
            if !orelse.is_empty() {
                out.push(format!("{pad}else:"));
                render_block(orelse, depth + 1, out);
            }
        },
        Statement::For { var, bound, body } => {
            out.push(format!("{pad}for {var} in range({bound}):"));
            render_body(body, depth + 1, out);
        },
        Statement::While { test, body } => {
            out.push(format!("{pad}while {test}:"));
            render_body(body, depth + 1, out);
        },
        Statement::Print { value } => out.push(format!("{pad}print({value})")),
        Statement::Assign { target, value } => out.push(format!("{pad}{target} = {value}")),
        Statement::Call { text } => out.push(format!("{pad}{}", render_call(text))),
    }
}

fn render_call(text: &str) -> String {
    let tokens = lex_line(text);

    match tokens.split_first() {
        Some((Token::Identifier(callee), args)) => {
            let args = args.iter().map(ToString::to_string).collect::<Vec<_>>();
            format!("{callee}({})", args.join(", "))
        },
        _ => format!("{text}()"),
    }
}
