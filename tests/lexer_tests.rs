// tests/lexer_tests.rs

use atomsel::ast::Token;
use atomsel::lexer::{LexError, Lexer};

fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize().unwrap()
}

// ============================================================================
// Punctuation and operators
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", Token::LParen),
        (")", Token::RParen),
        (",", Token::Comma),
        ("<", Token::Lt),
        (">", Token::Gt),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), Ok(Some(expected)), "input: {}", input);
        assert_eq!(lexer.next_token(), Ok(None));
    }
}

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", Token::EqEq),
        ("!=", Token::NotEq),
        ("<=", Token::LtEq),
        (">=", Token::GtEq),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), Ok(Some(expected)), "input: {}", input);
        assert_eq!(lexer.next_token(), Ok(None));
    }
}

#[test]
fn test_lone_equal_is_an_error() {
    let mut lexer = Lexer::new("name = CA");
    assert_eq!(lexer.next_token(), Ok(Some(Token::Ident("name".into()))));
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter {
            character: '=',
            position: 5,
        })
    );
}

#[test]
fn test_lone_exclamation_is_an_error() {
    let mut lexer = Lexer::new("!");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter { character: '!', .. })
    ));
}

// ============================================================================
// Keywords and identifiers
// ============================================================================

#[test]
fn test_keywords() {
    assert_eq!(tokenize("and or not"), vec![Token::And, Token::Or, Token::Not]);
}

#[test]
fn test_identifiers() {
    assert_eq!(
        tokenize("name CA _internal H1"),
        vec![
            Token::Ident("name".into()),
            Token::Ident("CA".into()),
            Token::Ident("_internal".into()),
            Token::Ident("H1".into()),
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    // Only lowercase `and`/`or`/`not` are operators.
    assert_eq!(tokenize("AND"), vec![Token::Ident("AND".into())]);
}

#[test]
fn test_quoted_identifiers() {
    assert_eq!(
        tokenize("name == \"C gamma\""),
        vec![
            Token::Ident("name".into()),
            Token::EqEq,
            Token::Ident("C gamma".into()),
        ]
    );
    assert_eq!(tokenize("'O 1*'"), vec![Token::Ident("O 1*".into())]);
}

#[test]
fn test_unterminated_quote() {
    let result = Lexer::new("name == \"CA").tokenize();
    assert_eq!(result, Err(LexError::UnterminatedString { position: 8 }));

    let result = Lexer::new("'").tokenize();
    assert_eq!(result, Err(LexError::UnterminatedString { position: 0 }));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("42", 42.0),
        ("3.14", 3.14),
        ("0.5", 0.5),
        ("-1.5", -1.5),
        ("+7", 7.0),
        ("2e3", 2000.0),
        ("1.5e-2", 0.015),
        ("1E2", 100.0),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokenize(input), vec![Token::Number(expected)], "input: {}", input);
    }
}

#[test]
fn test_malformed_numbers() {
    let test_cases = vec![("1.2.3", "1.2.3"), ("12ab", "12ab"), ("1e", "1e")];

    for (input, literal) in test_cases {
        assert_eq!(
            Lexer::new(input).tokenize(),
            Err(LexError::MalformedNumber {
                literal: literal.into(),
                position: 0,
            }),
            "input: {}",
            input
        );
    }
}

#[test]
fn test_minus_without_digit_is_an_error() {
    assert!(matches!(
        Lexer::new("x > -").tokenize(),
        Err(LexError::UnexpectedCharacter { character: '-', .. })
    ));
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variables() {
    assert_eq!(
        tokenize("#1 #2"),
        vec![Token::Variable(1), Token::Variable(2)]
    );
}

#[test]
fn test_bare_hash_is_an_error() {
    assert!(matches!(
        Lexer::new("#").tokenize(),
        Err(LexError::UnexpectedCharacter { character: '#', .. })
    ));
}

// ============================================================================
// Whole selections
// ============================================================================

#[test]
fn test_full_selection() {
    assert_eq!(
        tokenize("(name == CA or index < 10) and not vx >= 0.5"),
        vec![
            Token::LParen,
            Token::Ident("name".into()),
            Token::EqEq,
            Token::Ident("CA".into()),
            Token::Or,
            Token::Ident("index".into()),
            Token::Lt,
            Token::Number(10.0),
            Token::RParen,
            Token::And,
            Token::Not,
            Token::Ident("vx".into()),
            Token::GtEq,
            Token::Number(0.5),
        ]
    );
}

#[test]
fn test_whitespace_only() {
    assert_eq!(tokenize("   \t\n  "), vec![]);
    assert_eq!(tokenize(""), vec![]);
}

#[test]
fn test_whitespace_is_not_significant() {
    assert_eq!(tokenize("mass>12"), tokenize("mass  >  12"));
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        Lexer::new("name @ CA").tokenize(),
        Err(LexError::UnexpectedCharacter {
            character: '@',
            position: 5,
        })
    );
}
