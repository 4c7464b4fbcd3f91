// tests/lexer_tests.rs

use atomsel::ast::Token;
use atomsel::lexer::Lexer;

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize().unwrap()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_comparison_operators() {
    let test_cases = vec![
        ("==", Token::EqEq),
        ("!=", Token::NotEq),
        ("<", Token::Lt),
        ("<=", Token::LtEq),
        (">", Token::Gt),
        (">=", Token::GtEq),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokens(input), vec![expected, Token::Eof], "Failed for input: {}", input);
    }
}

#[test]
fn test_single_equals_is_equality() {
    assert_eq!(tokens("="), vec![Token::EqEq, Token::Eof]);
    assert_eq!(
        tokens("name = O"),
        vec![ident("name"), Token::EqEq, ident("O"), Token::Eof]
    );
}

#[test]
fn test_two_char_vs_single_char() {
    assert_eq!(tokens("< <="), vec![Token::Lt, Token::LtEq, Token::Eof]);
    assert_eq!(tokens("><="), vec![Token::Gt, Token::LtEq, Token::Eof]);
}

#[test]
fn test_bare_exclamation_is_invalid() {
    let err = Lexer::new("! name == O").tokenize().unwrap_err();
    assert_eq!(err.text, "!");
    assert_eq!(err.position.offset, 0);
    assert!(err.to_string().contains("unexpected '!'"));
}

#[test]
fn test_parentheses() {
    assert_eq!(
        tokens("(not)"),
        vec![Token::LParen, Token::Not, Token::RParen, Token::Eof]
    );
}

// ============================================================================
// Keywords and Identifiers
// ============================================================================

#[test]
fn test_keywords() {
    assert_eq!(
        tokens("and or not"),
        vec![Token::And, Token::Or, Token::Not, Token::Eof]
    );
}

#[test]
fn test_keywords_vs_identifiers() {
    assert_eq!(
        tokens("android order nothing AND"),
        vec![
            ident("android"),
            ident("order"),
            ident("nothing"),
            ident("AND"),
            Token::Eof
        ]
    );
}

#[test]
fn test_identifiers_are_case_sensitive() {
    assert_eq!(tokens("CA ca"), vec![ident("CA"), ident("ca"), Token::Eof]);
}

#[test]
fn test_identifier_characters() {
    assert_eq!(
        tokens("H1 _x O_W2"),
        vec![ident("H1"), ident("_x"), ident("O_W2"), Token::Eof]
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("42", 42.0),
        ("3.5", 3.5),
        ("-1", -1.0),
        ("+2.5", 2.5),
        (".5", 0.5),
        ("-.25", -0.25),
        ("1.", 1.0),
        ("1e3", 1000.0),
        ("2.5E-2", 0.025),
        ("-1e+2", -100.0),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            tokens(input),
            vec![Token::Number(expected), Token::Eof],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_signed_number_after_operator() {
    assert_eq!(
        tokens("x<-1.5"),
        vec![ident("x"), Token::Lt, Token::Number(-1.5), Token::Eof]
    );
}

#[test]
fn test_malformed_numbers() {
    for input in ["1.2.3", "1e", "3abc", "2e+", "1_0"] {
        let err = Lexer::new(input).tokenize().unwrap_err();
        assert_eq!(err.text, input, "Failed for input: {}", input);
        assert!(err.message.contains("malformed number"));
    }
}

#[test]
fn test_number_out_of_range() {
    let err = Lexer::new("x < 1e999").tokenize().unwrap_err();
    assert_eq!(err.text, "1e999");
    assert!(err.message.contains("out of range"));
}

#[test]
fn test_lone_sign_is_invalid() {
    let err = Lexer::new("x < -").tokenize().unwrap_err();
    assert_eq!(err.text, "-");
    assert_eq!(err.position.column, 5);
}

// ============================================================================
// Whitespace and Errors
// ============================================================================

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(tokens("name==O"), tokens("  name \t==\n O  "));
}

#[test]
fn test_empty_input() {
    assert_eq!(tokens(""), vec![Token::Eof]);
    assert_eq!(tokens("   "), vec![Token::Eof]);
}

#[test]
fn test_unexpected_character() {
    let err = Lexer::new("name == O and index # 3").tokenize().unwrap_err();
    assert_eq!(err.text, "#");
    assert_eq!(err.position.offset, 20);
    assert_eq!(err.position.line, 1);
    assert_eq!(err.position.column, 21);
    assert_eq!(
        err.to_string(),
        "unexpected character '#' at line 1, column 21"
    );
}

#[test]
fn test_streaming_matches_tokenize() {
    let mut lexer = Lexer::new("index >= 5");
    assert_eq!(lexer.next_token().unwrap(), ident("index"));
    assert_eq!(lexer.next_token().unwrap(), Token::GtEq);
    assert_eq!(lexer.next_token().unwrap(), Token::Number(5.0));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
