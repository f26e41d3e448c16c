use std::fmt;

use crate::ast::Token;

/// Errors produced while tokenizing a selection string.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that can never start a token
    UnexpectedCharacter { character: char, position: usize },

    /// A quoted identifier missing its closing quote
    UnterminatedString { position: usize },

    /// A numeric literal that does not parse as a number
    MalformedNumber { literal: String, position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "unexpected character '{}' at position {}",
                character, position
            ),
            LexError::UnterminatedString { position } => write!(
                f,
                "unterminated quoted identifier starting at position {}",
                position
            ),
            LexError::MalformedNumber { literal, position } => write!(
                f,
                "malformed number '{}' at position {}",
                literal, position
            ),
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_quoted(&mut self, quote: char) -> Result<String, LexError> {
        let start = self.position;
        self.advance(); // consume opening quote

        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch == quote {
                self.advance();
                return Ok(result);
            }
            result.push(ch);
            self.advance();
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut literal = String::new();

        if let Some(sign @ ('+' | '-')) = self.current_char() {
            literal.push(sign);
            self.advance();
        }
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                literal.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        if self.current_char() == Some('.') {
            literal.push('.');
            self.advance();
            while let Some(ch) = self.current_char() {
                if ch.is_ascii_digit() {
                    literal.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }
        if let Some(e @ ('e' | 'E')) = self.current_char() {
            let next = self.peek_char(1);
            let exponent_follows = match next {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.peek_char(2).is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if exponent_follows {
                literal.push(e);
                self.advance();
                if let Some(sign @ ('+' | '-')) = self.current_char() {
                    literal.push(sign);
                    self.advance();
                }
                while let Some(ch) = self.current_char() {
                    if ch.is_ascii_digit() {
                        literal.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        // A number running straight into more word characters is a single
        // malformed literal, not two tokens.
        if self
            .current_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.')
        {
            while let Some(ch) = self.current_char() {
                if ch.is_alphanumeric() || ch == '_' || ch == '.' {
                    literal.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
            return Err(LexError::MalformedNumber {
                literal,
                position: start,
            });
        }

        match literal.parse::<f64>() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => Err(LexError::MalformedNumber {
                literal,
                position: start,
            }),
        }
    }

    fn read_variable(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.advance(); // consume '#'

        let mut digits = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        if digits.is_empty() {
            return Err(LexError::UnexpectedCharacter {
                character: '#',
                position: start,
            });
        }
        match digits.parse::<u8>() {
            Ok(value) => Ok(Token::Variable(value)),
            Err(_) => Err(LexError::MalformedNumber {
                literal: format!("#{}", digits),
                position: start,
            }),
        }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => return Ok(None),
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::EqEq
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        character: '=',
                        position: self.position,
                    });
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        character: '!',
                        position: self.position,
                    });
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::LtEq
                } else {
                    self.advance();
                    Token::Lt
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::GtEq
                } else {
                    self.advance();
                    Token::Gt
                }
            }
            Some('"') => Token::Ident(self.read_quoted('"')?),
            Some('\'') => Token::Ident(self.read_quoted('\'')?),
            Some('#') => self.read_variable()?,
            Some(ch) if ch.is_ascii_digit() => self.read_number()?,
            Some('+' | '-') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.read_number()?
            }
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    "not" => Token::Not,
                    _ => Token::Ident(ident),
                }
            }
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    character: ch,
                    position: self.position,
                });
            }
        };
        Ok(Some(token))
    }

    /// Tokenize the whole input.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or not");
    assert_eq!(lexer.next_token(), Ok(Some(Token::And)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Or)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Not)));
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn test_comparison() {
    let mut lexer = Lexer::new("mass >= 12.5");
    assert_eq!(lexer.next_token(), Ok(Some(Token::Ident("mass".into()))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::GtEq)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Number(12.5))));
}
