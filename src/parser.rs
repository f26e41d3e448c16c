use std::fmt;

use crate::ast::{Axis, BinOp, Expr, Token};
use crate::lexer::{LexError, Lexer};

/// Error produced while parsing a selection string.
///
/// Lexical, structural and semantic failures all surface as this one type,
/// carrying a human-readable message. Parsing is fail-fast: the first error
/// aborts the whole parse and no partial AST is ever returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionError {
    message: String,
}

impl SelectionError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        SelectionError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "selection error: {}", self.message)
    }
}

impl std::error::Error for SelectionError {}

impl From<LexError> for SelectionError {
    fn from(error: LexError) -> Self {
        SelectionError::new(error.to_string())
    }
}

/// Property functions and their arity, i.e. how many atom references each
/// one consumes. Every property is arity 1 today; the field is a
/// forward-compatible slot for multi-atom predicates (bonds, angles).
const FUNCTIONS: &[(&str, usize)] = &[
    ("name", 1),
    ("mass", 1),
    ("index", 1),
    ("x", 1),
    ("y", 1),
    ("z", 1),
    ("vx", 1),
    ("vy", 1),
    ("vz", 1),
];

/// Properties that may appear bare before a literal, meaning equality.
const SHORT_FORMS: &[&str] = &["name", "index", "mass"];

/// Arity of a property function, if `name` is one.
pub fn function_arity(name: &str) -> Option<usize> {
    FUNCTIONS
        .iter()
        .find(|(function, _)| *function == name)
        .map(|(_, arity)| *arity)
}

fn is_function(token: &Token) -> bool {
    matches!(token, Token::Ident(name) if function_arity(name).is_some())
}

/// Rewrite short-form predicates (`name foo`, `index 3`, `mass 12`) into
/// canonical binary-comparison form by inserting `==` after the property.
///
/// The rewrite looks ahead exactly one token: a short-form identifier that
/// is already followed by an operator, or that ends the stream, is left
/// untouched.
fn rewrite_short_forms(stream: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(stream.len());
    let mut tokens = stream.into_iter().peekable();
    while let Some(token) = tokens.next() {
        let short_form =
            matches!(&token, Token::Ident(name) if SHORT_FORMS.contains(&name.as_str()));
        out.push(token);
        if short_form && tokens.peek().is_some_and(|next| !next.is_operator()) {
            out.push(Token::EqEq);
        }
    }
    out
}

/// Shunting-yard reduction of the infix token stream to Reverse Polish
/// Notation.
///
/// Two extensions over the plain infix algorithm: property identifiers are
/// treated as functions and pushed on the operator stack so they end up
/// after their arguments in the output, and commas separate function
/// arguments inside parentheses. All operators are left-associative.
///
/// `name == CA and x <= 5` reduces to `and == CA name <= 5 x` after the
/// final reversal.
fn shunting_yard(stream: Vec<Token>) -> Result<Vec<Token>, SelectionError> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::new();

    for token in stream {
        match token {
            Token::Number(_) | Token::Variable(_) => output.push(token),
            Token::Ident(_) => {
                if is_function(&token) {
                    operators.push(token);
                } else {
                    output.push(token);
                }
            }
            Token::Comma => {
                while !matches!(operators.last(), Some(Token::LParen)) {
                    match operators.pop() {
                        Some(op) => output.push(op),
                        None => {
                            return Err(SelectionError::new(
                                "mismatched parentheses or additional comma",
                            ));
                        }
                    }
                }
            }
            Token::EqEq
            | Token::NotEq
            | Token::Lt
            | Token::LtEq
            | Token::Gt
            | Token::GtEq
            | Token::And
            | Token::Or
            | Token::Not => {
                while operators
                    .last()
                    .is_some_and(|top| token.precedence() <= top.precedence())
                {
                    if let Some(op) = operators.pop() {
                        output.push(op);
                    }
                }
                operators.push(token);
            }
            Token::LParen => operators.push(token),
            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some(Token::LParen) => break,
                        Some(op) => output.push(op),
                        None => return Err(SelectionError::new("mismatched parentheses")),
                    }
                }
                // A function just below the parenthesis belongs after its
                // arguments in the output.
                if operators.last().is_some_and(is_function) {
                    if let Some(function) = operators.pop() {
                        output.push(function);
                    }
                }
            }
        }
    }

    while let Some(op) = operators.pop() {
        if matches!(op, Token::LParen | Token::RParen) {
            return Err(SelectionError::new("mismatched parentheses"));
        }
        output.push(op);
    }

    // The output comes out in reverse polish notation; one reversal makes
    // it readable left to right for the recursive dispatch below.
    output.reverse();
    Ok(output)
}

/// Recursive dispatcher consuming the reversed RPN stream.
///
/// Each call inspects the token at the cursor, builds one AST node and
/// advances past everything that node consumed. Binary operators read their
/// property name from two positions ahead: the reversed RPN for
/// `name == CA` is `== CA name`.
pub struct Parser {
    rpn: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(rpn: Vec<Token>) -> Self {
        Parser { rpn, pos: 0 }
    }

    pub fn parse(mut self) -> Result<Expr, SelectionError> {
        if self.rpn.is_empty() {
            return Err(SelectionError::new("empty selection"));
        }
        let ast = self.dispatch()?;
        if self.pos != self.rpn.len() {
            return Err(SelectionError::new(
                "could not parse the end of the selection",
            ));
        }
        Ok(ast)
    }

    fn dispatch(&mut self) -> Result<Expr, SelectionError> {
        let token = match self.rpn.get(self.pos) {
            Some(token) => token.clone(),
            None => return Err(SelectionError::new("could not parse the selection")),
        };

        match token {
            Token::And => {
                self.pos += 1;
                // The reversal put the right operand first.
                let rhs = self.operand("and")?;
                let lhs = self.operand("and")?;
                Ok(Expr::And(Box::new(lhs), Box::new(rhs)))
            }
            Token::Or => {
                self.pos += 1;
                let rhs = self.operand("or")?;
                let lhs = self.operand("or")?;
                Ok(Expr::Or(Box::new(lhs), Box::new(rhs)))
            }
            Token::Not => {
                self.pos += 1;
                let inner = self.operand("not")?;
                Ok(Expr::Not(Box::new(inner)))
            }
            op @ (Token::EqEq
            | Token::NotEq
            | Token::Lt
            | Token::LtEq
            | Token::Gt
            | Token::GtEq) => {
                if self.rpn.len() - self.pos < 3 {
                    return Err(SelectionError::new(format!(
                        "bad binary operation around '{}'",
                        op
                    )));
                }
                let property = match &self.rpn[self.pos + 2] {
                    Token::Ident(name) => name.clone(),
                    _ => {
                        return Err(SelectionError::new(format!(
                            "bad binary operation around '{}'",
                            op
                        )));
                    }
                };
                match property.as_str() {
                    "name" => self.parse_name(),
                    "index" => self.parse_index(),
                    "mass" => self.parse_mass(),
                    "x" => self.parse_position(Axis::X),
                    "y" => self.parse_position(Axis::Y),
                    "z" => self.parse_position(Axis::Z),
                    "vx" => self.parse_velocity(Axis::X),
                    "vy" => self.parse_velocity(Axis::Y),
                    "vz" => self.parse_velocity(Axis::Z),
                    other => Err(SelectionError::new(format!(
                        "unknown operation: '{}'",
                        other
                    ))),
                }
            }
            Token::Ident(ident) => match ident.as_str() {
                "all" => {
                    self.pos += 1;
                    Ok(Expr::All)
                }
                "none" => {
                    self.pos += 1;
                    Ok(Expr::None)
                }
                other => Err(SelectionError::new(format!(
                    "unknown operation: '{}'",
                    other
                ))),
            },
            Token::Number(_)
            | Token::Variable(_)
            | Token::LParen
            | Token::RParen
            | Token::Comma => Err(SelectionError::new("could not parse the selection")),
        }
    }

    fn operand(&mut self, op: &str) -> Result<Expr, SelectionError> {
        if self.pos >= self.rpn.len() {
            return Err(SelectionError::new(format!("missing operand to '{}'", op)));
        }
        self.dispatch()
    }

    fn comparison(&self) -> Result<BinOp, SelectionError> {
        BinOp::from_token(&self.rpn[self.pos])
            .ok_or_else(|| SelectionError::new("could not parse the selection"))
    }

    fn parse_name(&mut self) -> Result<Expr, SelectionError> {
        const PATTERN: &str =
            "name selection must follow the pattern 'name == <value>' or 'name != <value>'";
        let op = match self.rpn[self.pos] {
            Token::EqEq => BinOp::Equal,
            Token::NotEq => BinOp::NotEqual,
            _ => return Err(SelectionError::new(PATTERN)),
        };
        let value = match &self.rpn[self.pos + 1] {
            Token::Ident(value) => value.clone(),
            _ => return Err(SelectionError::new(PATTERN)),
        };
        self.pos += 3;
        Ok(Expr::Name { op, value })
    }

    fn parse_index(&mut self) -> Result<Expr, SelectionError> {
        let op = self.comparison()?;
        let value = match self.rpn[self.pos + 1] {
            Token::Number(n) if n >= 0.0 && n.fract() == 0.0 => n as usize,
            _ => {
                return Err(SelectionError::new(
                    "index selection should contain an integer",
                ));
            }
        };
        self.pos += 3;
        Ok(Expr::Index { op, value })
    }

    fn parse_mass(&mut self) -> Result<Expr, SelectionError> {
        let op = self.comparison()?;
        let value = match self.rpn[self.pos + 1] {
            Token::Number(n) => n,
            _ => {
                return Err(SelectionError::new(
                    "mass selection should contain a number",
                ));
            }
        };
        self.pos += 3;
        Ok(Expr::Mass { op, value })
    }

    fn parse_position(&mut self, axis: Axis) -> Result<Expr, SelectionError> {
        let op = self.comparison()?;
        let value = match self.rpn[self.pos + 1] {
            Token::Number(n) => n,
            _ => {
                return Err(SelectionError::new(
                    "position selection can only compare against a number",
                ));
            }
        };
        self.pos += 3;
        Ok(Expr::Position { axis, op, value })
    }

    fn parse_velocity(&mut self, axis: Axis) -> Result<Expr, SelectionError> {
        let op = self.comparison()?;
        let value = match self.rpn[self.pos + 1] {
            Token::Number(n) => n,
            _ => {
                return Err(SelectionError::new(
                    "velocity selection can only compare against a number",
                ));
            }
        };
        self.pos += 3;
        Ok(Expr::Velocity { axis, op, value })
    }
}

/// Parse a selection string into an AST.
pub fn parse(selection: &str) -> Result<Expr, SelectionError> {
    let tokens = Lexer::new(selection).tokenize()?;
    let tokens = rewrite_short_forms(tokens);
    let rpn = shunting_yard(tokens)?;
    Parser::new(rpn).parse()
}

#[test]
fn test_short_form_rewrite() {
    let tokens = Lexer::new("name CA").tokenize().unwrap();
    let tokens = rewrite_short_forms(tokens);
    assert_eq!(
        tokens,
        vec![
            Token::Ident("name".into()),
            Token::EqEq,
            Token::Ident("CA".into()),
        ]
    );

    // An explicit operator disables the rewrite.
    let tokens = Lexer::new("mass < 2").tokenize().unwrap();
    let rewritten = rewrite_short_forms(tokens.clone());
    assert_eq!(rewritten, tokens);
}

#[test]
fn test_shunting_yard_order() {
    let tokens = Lexer::new("name == CA and x <= 5").tokenize().unwrap();
    let rpn = shunting_yard(tokens).unwrap();
    assert_eq!(
        rpn,
        vec![
            Token::And,
            Token::LtEq,
            Token::Number(5.0),
            Token::Ident("x".into()),
            Token::EqEq,
            Token::Ident("CA".into()),
            Token::Ident("name".into()),
        ]
    );
}
