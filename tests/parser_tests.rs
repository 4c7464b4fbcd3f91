// tests/parser_tests.rs

use atomsel::ast::{Axis, BinOp, Expr};
use atomsel::lexer::Lexer;
use atomsel::parser::{MAX_DEPTH, ParseError, Parser};

fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = Lexer::new(input).tokenize().unwrap();
    Parser::new(tokens).parse()
}

fn parse_err(input: &str) -> String {
    parse(input).unwrap_err().to_string()
}

fn name(value: &str) -> Expr {
    Expr::Name {
        name: value.to_string(),
        equals: true,
    }
}

fn index(op: BinOp, value: u64) -> Expr {
    Expr::Index { op, value }
}

// ============================================================================
// Leaf Predicates
// ============================================================================

#[test]
fn test_name() {
    assert_eq!(parse("name == O").unwrap(), name("O"));
    assert_eq!(
        parse("name != CA").unwrap(),
        Expr::Name {
            name: "CA".to_string(),
            equals: false
        }
    );
}

#[test]
fn test_name_operand_may_look_like_a_keyword() {
    assert_eq!(parse("name == x").unwrap(), name("x"));
    assert_eq!(parse("name == index").unwrap(), name("index"));
}

#[test]
fn test_index_operators() {
    let test_cases = vec![
        ("index == 3", BinOp::Equal),
        ("index != 3", BinOp::NotEqual),
        ("index < 3", BinOp::LessThan),
        ("index <= 3", BinOp::LessEqual),
        ("index > 3", BinOp::GreaterThan),
        ("index >= 3", BinOp::GreaterEqual),
    ];

    for (input, op) in test_cases {
        assert_eq!(parse(input).unwrap(), index(op, 3), "Failed for input: {}", input);
    }
}

#[test]
fn test_index_accepts_integral_floats() {
    assert_eq!(parse("index < 10.0").unwrap(), index(BinOp::LessThan, 10));
    assert_eq!(parse("index < 1e2").unwrap(), index(BinOp::LessThan, 100));
}

#[test]
fn test_positions() {
    assert_eq!(
        parse("x < 1.5").unwrap(),
        Expr::Position {
            axis: Axis::X,
            op: BinOp::LessThan,
            value: 1.5
        }
    );
    assert_eq!(
        parse("y >= -2").unwrap(),
        Expr::Position {
            axis: Axis::Y,
            op: BinOp::GreaterEqual,
            value: -2.0
        }
    );
    assert_eq!(
        parse("z != 0").unwrap(),
        Expr::Position {
            axis: Axis::Z,
            op: BinOp::NotEqual,
            value: 0.0
        }
    );
}

#[test]
fn test_velocities() {
    assert_eq!(
        parse("vx > 0").unwrap(),
        Expr::Velocity {
            axis: Axis::X,
            op: BinOp::GreaterThan,
            value: 0.0
        }
    );
    assert_eq!(
        parse("vz <= 0.5").unwrap(),
        Expr::Velocity {
            axis: Axis::Z,
            op: BinOp::LessEqual,
            value: 0.5
        }
    );
}

#[test]
fn test_other_properties() {
    assert_eq!(
        parse("type != H").unwrap(),
        Expr::Type {
            name: "H".to_string(),
            equals: false
        }
    );
    assert_eq!(
        parse("resname == WAT").unwrap(),
        Expr::Resname {
            name: "WAT".to_string(),
            equals: true
        }
    );
    assert_eq!(
        parse("resid > 4").unwrap(),
        Expr::Resid {
            op: BinOp::GreaterThan,
            value: 4
        }
    );
    assert_eq!(
        parse("mass < 2.1").unwrap(),
        Expr::Mass {
            op: BinOp::LessThan,
            value: 2.1
        }
    );
    assert_eq!(parse("all").unwrap(), Expr::All);
    assert_eq!(parse("none").unwrap(), Expr::None);
}

#[test]
fn test_numeric_type_and_resname_labels() {
    assert_eq!(
        parse("type == 45").unwrap(),
        Expr::Type {
            name: "45".to_string(),
            equals: true
        }
    );
    assert_eq!(
        parse("resname != -3").unwrap(),
        Expr::Resname {
            name: "-3".to_string(),
            equals: false
        }
    );
    assert_eq!(
        parse("resname == 1.5").unwrap(),
        Expr::Resname {
            name: "1.5".to_string(),
            equals: true
        }
    );
}

// ============================================================================
// Precedence and Associativity
// ============================================================================

#[test]
fn test_and_binds_tighter_than_or() {
    // name == H or (name == O and index < 3)
    assert_eq!(
        parse("name == H or name == O and index < 3").unwrap(),
        Expr::or(name("H"), Expr::and(name("O"), index(BinOp::LessThan, 3)))
    );
    // (name == O and index < 3) or name == H
    assert_eq!(
        parse("name == O and index < 3 or name == H").unwrap(),
        Expr::or(Expr::and(name("O"), index(BinOp::LessThan, 3)), name("H"))
    );
}

#[test]
fn test_not_binds_tighter_than_and() {
    assert_eq!(
        parse("not name == H and index < 3").unwrap(),
        Expr::and(Expr::not(name("H")), index(BinOp::LessThan, 3))
    );
    assert_eq!(
        parse("not name == H or name == O").unwrap(),
        Expr::or(Expr::not(name("H")), name("O"))
    );
}

#[test]
fn test_left_associative_chains() {
    assert_eq!(
        parse("name == A and name == B and name == C").unwrap(),
        Expr::and(Expr::and(name("A"), name("B")), name("C"))
    );
    assert_eq!(
        parse("name == A or name == B or name == C").unwrap(),
        Expr::or(Expr::or(name("A"), name("B")), name("C"))
    );
}

#[test]
fn test_double_negation() {
    assert_eq!(
        parse("not not name == H").unwrap(),
        Expr::not(Expr::not(name("H")))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        parse("(name == H or name == O) and index < 3").unwrap(),
        Expr::and(Expr::or(name("H"), name("O")), index(BinOp::LessThan, 3))
    );
    assert_eq!(
        parse("not (name == H or name == O)").unwrap(),
        Expr::not(Expr::or(name("H"), name("O")))
    );
    assert_eq!(parse("((name == H))").unwrap(), name("H"));
}

#[test]
fn test_prefix_connectives() {
    assert_eq!(
        parse("and name == H index < 3").unwrap(),
        Expr::and(name("H"), index(BinOp::LessThan, 3))
    );
    assert_eq!(
        parse("or not name == H name == O").unwrap(),
        Expr::or(Expr::not(name("H")), name("O"))
    );
    // prefix operands bind like `not` operands
    assert_eq!(
        parse("and name == A name == B or name == C").unwrap(),
        Expr::or(Expr::and(name("A"), name("B")), name("C"))
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_comparand() {
    let err = parse("name =").unwrap_err();
    assert!(err.context.is_empty());
    assert!(err.message.starts_with("Name selection must follow the pattern"));
    assert!(err.message.ends_with("found <end of selection>"));
}

#[test]
fn test_name_rejects_ordering_operators() {
    let err = parse_err("name < O");
    assert!(err.contains("Name selection must follow the pattern 'name == <value>'"));
    assert!(err.ends_with("found <"));
}

#[test]
fn test_name_requires_identifier() {
    assert!(parse_err("name == 3").contains("found 3"));
    assert!(parse_err("name == 45").starts_with("Name selection must follow the pattern"));
    assert!(parse_err("name == and").contains("found and"));
}

#[test]
fn test_index_requires_integer() {
    assert_eq!(parse_err("index < 1.5"), "Index selection should contain an integer");
    assert_eq!(parse_err("index < O"), "Index selection should contain an integer");
    assert_eq!(
        parse_err("index > -1"),
        "Index selection should contain a non-negative integer"
    );
    assert_eq!(parse_err("resid == 0.5"), "Resid selection should contain an integer");
}

#[test]
fn test_integer_too_large() {
    assert_eq!(
        parse_err("index < 1e20"),
        "Index selection value is too large, it must be below 2^64"
    );
    assert_eq!(
        parse_err("resid == 18446744073709551616"),
        "Resid selection value is too large, it must be below 2^64"
    );
    assert_eq!(
        parse("index < 1e18").unwrap(),
        index(BinOp::LessThan, 1_000_000_000_000_000_000)
    );
}

#[test]
fn test_numeric_operand_required() {
    assert_eq!(
        parse_err("x < O"),
        "Position selection can only contain a number as criterion"
    );
    assert_eq!(
        parse_err("vy > fast"),
        "Velocity selection can only contain a number as criterion"
    );
    assert_eq!(
        parse_err("mass == C"),
        "Mass selection can only contain a number as criterion"
    );
}

#[test]
fn test_missing_operator() {
    assert_eq!(
        parse_err("index 3"),
        "expected a comparison operator after 'index', found 3"
    );
    assert_eq!(
        parse_err("vx"),
        "expected a comparison operator after 'vx', found <end of selection>"
    );
}

#[test]
fn test_unknown_keyword() {
    assert_eq!(parse_err("foo == 3"), "unknown selection keyword 'foo'");
    assert_eq!(parse_err("== 3"), "unexpected token '=='");
    assert_eq!(parse_err(")"), "unexpected token ')'");
}

#[test]
fn test_empty_selection() {
    assert_eq!(parse_err(""), "empty selection");
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(
        parse_err("name == O name == H"),
        "additional data after the end of the selection: name == H"
    );
    assert_eq!(
        parse_err("name == O )"),
        "additional data after the end of the selection: )"
    );
}

#[test]
fn test_mismatched_parenthesis() {
    assert_eq!(parse_err("(name == O"), "mismatched parenthesis");
}

#[test]
fn test_missing_operands() {
    assert_eq!(parse_err("name == O and"), "Missing right-hand side operand to 'and'");
    assert_eq!(parse_err("name == O or"), "Missing right-hand side operand to 'or'");
    assert_eq!(parse_err("not"), "Missing operand of 'not'");
    assert_eq!(parse_err("and name == O"), "Missing right-hand side operand to 'and'");
}

#[test]
fn test_nested_errors_keep_context() {
    let err = parse("name == O and not index < 1.5").unwrap_err();
    assert_eq!(err.message, "Index selection should contain an integer");
    assert_eq!(
        err.context,
        vec![
            "Error in operand of 'not'".to_string(),
            "Error in right-hand side operand to 'and'".to_string(),
        ]
    );
    assert_eq!(
        err.to_string(),
        "Error in right-hand side operand to 'and': Error in operand of 'not': \
         Index selection should contain an integer"
    );
}

#[test]
fn test_prefix_errors_name_the_side() {
    assert_eq!(
        parse_err("or foo == 1 name == O"),
        "Error in left-hand side operand to 'or': unknown selection keyword 'foo'"
    );
    assert_eq!(
        parse_err("or name == O x < y"),
        "Error in right-hand side operand to 'or': \
         Position selection can only contain a number as criterion"
    );
}

#[test]
fn test_parser_appends_missing_eof() {
    use atomsel::ast::Token;

    let tokens = vec![
        Token::Identifier("name".to_string()),
        Token::EqEq,
        Token::Identifier("O".to_string()),
    ];
    assert_eq!(Parser::new(tokens).parse().unwrap(), name("O"));
}

// ============================================================================
// Nesting Limits
// ============================================================================

fn negations(count: usize) -> String {
    "not ".repeat(count) + "all"
}

#[test]
fn test_nesting_up_to_the_limit() {
    let mut expected = Expr::All;
    for _ in 0..MAX_DEPTH - 1 {
        expected = Expr::not(expected);
    }
    assert_eq!(parse(&negations(MAX_DEPTH - 1)).unwrap(), expected);
}

#[test]
fn test_deep_negation_is_rejected() {
    for count in [MAX_DEPTH, 20_000] {
        let err = parse(&negations(count)).unwrap_err();
        assert_eq!(err.message, "selection is nested too deeply", "Failed for depth: {}", count);
    }
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let input = "(".repeat(20_000) + "all" + &")".repeat(20_000);
    assert_eq!(parse_err(&input), "selection is nested too deeply");

    let input = "(".repeat(100) + "all" + &")".repeat(100);
    assert_eq!(parse(&input).unwrap(), Expr::All);
}

#[test]
fn test_long_chains_are_bounded() {
    let chain = |terms: usize| vec!["name == O"; terms].join(" or ");

    assert!(parse(&chain(MAX_DEPTH)).is_ok());
    assert_eq!(
        parse(&chain(MAX_DEPTH + 1)).unwrap_err().message,
        "selection is nested too deeply"
    );
    assert!(parse(&chain(10_000)).is_err());
}
