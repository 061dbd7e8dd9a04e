use sabdastra::toolchain::lexer::{LogicalLine, Token, join_tokens, lex_line, tokenize};

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn count_markers(lines: &[LogicalLine]) -> (usize, usize) {
    let indents = lines.iter().filter(|l| matches!(l, LogicalLine::Indent { .. })).count();
    let dedents = lines.iter().filter(|l| matches!(l, LogicalLine::Dedent { .. })).count();
    (indents, dedents)
}

#[test]
fn one_tuple_per_line() {
    let lines = tokenize("x = 4\nch x + 1");

    assert_eq!(lines,
               vec![LogicalLine::Tokens { tokens: vec![ident("x"), Token::Equals, Token::Integer(4)],
                                          line:   1, },
                    LogicalLine::Tokens { tokens: vec![Token::Ch, ident("x"), Token::Plus, Token::Integer(1)],
                                          line:   2, },]);
}

#[test]
fn nested_block_closes_with_two_dedents() {
    let source = "bhava outer:\n    yadi 1 == 1:\n        ch 'deep'\nch 'done'\n";
    let lines = tokenize(source);

    let last = lines.len() - 1;
    assert!(matches!(lines[last], LogicalLine::Tokens { line: 4, .. }));
    assert!(matches!(lines[last - 1], LogicalLine::Dedent { line: 4 }));
    assert!(matches!(lines[last - 2], LogicalLine::Dedent { line: 4 }));
    assert!(matches!(lines[last - 3], LogicalLine::Tokens { line: 3, .. }));
    assert_eq!(count_markers(&lines), (2, 2));
}

#[test]
fn open_levels_are_flushed_at_end_of_input() {
    let lines = tokenize("yatra 1:\n    yatra 1:\n        ch 1");

    assert!(matches!(lines[lines.len() - 1], LogicalLine::Dedent { line: 4 }));
    assert!(matches!(lines[lines.len() - 2], LogicalLine::Dedent { line: 4 }));
    assert_eq!(count_markers(&lines), (2, 2));
}

#[test]
fn markers_are_balanced_for_any_indentation() {
    let sources = ["",
                   "ch 1",
                   "a = 1\n        b = 2\n    c = 3\n",
                   "  ch 1\nch 2\n      ch 3\n   ch 4",
                   "yadi 1:\n    ch 1\n\n\n    ch 2\nanya:\n  ch 3",
                   "\tch 1\n\t\tch 2\n"];

    for source in sources {
        let (indents, dedents) = count_markers(&tokenize(source));
        assert_eq!(indents, dedents, "unbalanced markers for {source:?}");
    }
}

#[test]
fn dedent_between_levels_reopens_a_level() {
    let lines = tokenize("a = 1\n        b = 2\n    c = 3");

    assert!(matches!(lines[1], LogicalLine::Indent { line: 2 }));
    assert!(matches!(lines[3], LogicalLine::Dedent { line: 3 }));
    assert!(matches!(lines[4], LogicalLine::Indent { line: 3 }));
}

#[test]
fn blank_and_unrecognized_lines_are_dropped() {
    let lines = tokenize("x = 1\n\n   \n        ()\nch x");

    assert_eq!(lines.len(), 2);
    assert!(matches!(lines[1], LogicalLine::Tokens { line: 5, .. }));
}

#[test]
fn keywords_need_the_whole_word() {
    assert_eq!(lex_line("bhavana chai in inner kar"),
               vec![ident("bhavana"), ident("chai"), Token::In, ident("inner"), Token::Kar]);
}

#[test]
fn string_literals_keep_their_spaces() {
    assert_eq!(lex_line("ch 'Om Namah Shivaya'"),
               vec![Token::Ch, Token::Str("Om Namah Shivaya".to_string())]);
}

#[test]
fn operators() {
    assert_eq!(lex_line("a == b != c < d > e = f + g - h * i / j :"),
               vec![ident("a"),
                    Token::EqualEqual,
                    ident("b"),
                    Token::BangEqual,
                    ident("c"),
                    Token::Less,
                    ident("d"),
                    Token::Greater,
                    ident("e"),
                    Token::Equals,
                    ident("f"),
                    Token::Plus,
                    ident("g"),
                    Token::Minus,
                    ident("h"),
                    Token::Star,
                    ident("i"),
                    Token::Slash,
                    ident("j"),
                    Token::Colon]);
}

#[test]
fn punctuation_is_dropped() {
    assert_eq!(lex_line("kar greet(nama, mitra):"),
               vec![Token::Kar, ident("greet"), ident("nama"), ident("mitra"), Token::Colon]);
}

#[test]
fn joined_text_is_space_separated() {
    assert_eq!(join_tokens(&lex_line("x=1+  'a b'")), "x = 1 + 'a b'");
}

#[test]
fn logical_lines_display() {
    let lines = tokenize("yadi x:\n    ch x");
    let rendered = lines.iter().map(ToString::to_string).collect::<Vec<_>>();

    assert_eq!(rendered, vec!["   1: (yadi x :)", "INDENT", "   2: (ch x)", "DEDENT"]);
}
