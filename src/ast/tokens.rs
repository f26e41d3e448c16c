use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// -1.5
    /// 2e3
    /// ```
    Number(f64),

    /// Identifier: a property name or a user comparison value
    ///
    /// Bare identifiers start with a letter or underscore. Quoted
    /// identifiers (`"..."` or `'...'`) carry arbitrary content.
    ///
    /// # Examples
    /// ```text
    /// name
    /// CA
    /// "C gamma"
    /// ```
    Ident(String),

    /// Positional atom reference for multi-atom predicates (`#1`, `#2`)
    ///
    /// Reserved for bond/angle selections over atom pairs and triplets;
    /// single-atom selections never use it.
    Variable(u8),

    // Comparison operators
    /// Equality operator (`==`)
    EqEq,

    /// Inequality operator (`!=`)
    NotEq,

    /// Less than (`<`)
    Lt,

    /// Less than or equal (`<=`)
    LtEq,

    /// Greater than (`>`)
    Gt,

    /// Greater than or equal (`>=`)
    GtEq,

    // Boolean operators
    /// Logical AND (word, not symbol)
    ///
    /// # Examples
    /// ```text
    /// name == CA and mass > 12
    /// ```
    And,

    /// Logical OR (word, not symbol)
    ///
    /// # Examples
    /// ```text
    /// name == O or name == H
    /// ```
    Or,

    /// Logical negation (word, not symbol)
    ///
    /// Binds tighter than `and` and `or`.
    Not,

    // Delimiters
    /// Left parenthesis for grouping or function-call syntax
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma separating function arguments
    Comma,
}

impl Token {
    /// Is this token a numeric literal?
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// Is this token a positional atom reference?
    pub fn is_variable(&self) -> bool {
        matches!(self, Token::Variable(_))
    }

    /// Is this token an identifier?
    pub fn is_ident(&self) -> bool {
        matches!(self, Token::Ident(_))
    }

    /// Is this token a boolean operator (`and`, `or`, `not`)?
    pub fn is_boolean_op(&self) -> bool {
        matches!(self, Token::And | Token::Or | Token::Not)
    }

    /// Is this token a binary comparison operator?
    pub fn is_binary_op(&self) -> bool {
        matches!(
            self,
            Token::EqEq | Token::NotEq | Token::Lt | Token::LtEq | Token::Gt | Token::GtEq
        )
    }

    /// Is this token an operator of any kind (comparison or boolean)?
    pub fn is_operator(&self) -> bool {
        self.is_binary_op() || self.is_boolean_op()
    }

    /// Operator precedence used by the shunting-yard reduction.
    ///
    /// Identifiers outrank comparison operators, which outrank `not`, then
    /// `and`, then `or`. Parentheses and literals report 0 so the uniform
    /// left-associative pop rule never removes them from the stack.
    pub fn precedence(&self) -> usize {
        match self {
            Token::Ident(_) => 40,
            Token::EqEq | Token::NotEq | Token::Lt | Token::LtEq | Token::Gt | Token::GtEq => 30,
            Token::Not => 20,
            Token::And => 10,
            Token::Or => 5,
            _ => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(s) => write!(f, "{}", s),
            Token::Variable(n) => write!(f, "#{}", n),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Lt => write!(f, "<"),
            Token::LtEq => write!(f, "<="),
            Token::Gt => write!(f, ">"),
            Token::GtEq => write!(f, ">="),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Not => write!(f, "not"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}

#[test]
fn test_classification() {
    assert!(Token::Number(1.0).is_number());
    assert!(Token::Variable(2).is_variable());
    assert!(Token::Ident("name".into()).is_ident());

    assert!(Token::LtEq.is_binary_op());
    assert!(!Token::LtEq.is_boolean_op());
    assert!(Token::Not.is_boolean_op());
    assert!(!Token::Not.is_binary_op());
    assert!(Token::And.is_operator() && Token::EqEq.is_operator());
    assert!(!Token::LParen.is_operator() && !Token::Ident("CA".into()).is_operator());
}

#[test]
fn test_precedence_ordering() {
    assert!(Token::Ident("name".into()).precedence() > Token::EqEq.precedence());
    assert!(Token::EqEq.precedence() > Token::Not.precedence());
    assert!(Token::Not.precedence() > Token::And.precedence());
    assert!(Token::And.precedence() > Token::Or.precedence());
    assert_eq!(Token::LParen.precedence(), 0);
}
