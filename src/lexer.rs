//! Splits script text into a stream of classified tokens.
//!
//! A token is a maximal run of non-whitespace characters; whitespace is
//! anything [`char::is_whitespace`] agrees is whitespace. Each token is
//! classified by inspecting its shape, in the fixed order the language
//! defines: label, then reference, then integer, then identifier.

use crate::parser::ParseError;
use crate::Word;
use std::fmt;

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The classified contents of one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `name:` — names the operator index that follows it.
    Label(String),
    /// `@name` — resolved at parse time to an operator index.
    Reference(String),
    /// A base-10 literal, already folded into its 32-bit bit pattern.
    Integer(Word),
    /// Anything else; may or may not name a known operator.
    Identifier(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

/// Iterator over the tokens of a script. Produces one `Err` and then stops
/// on the first malformed integer literal.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: u32,
    column: u32,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
            done: false,
        }
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let item = self.chars.next();
        if let Some((_, c)) = item {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        item
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn classify(text: &str, position: Position) -> Result<TokenKind, ParseError> {
        if text.ends_with(':') && text.chars().count() >= 2 {
            let name = &text[..text.len() - 1];
            return Ok(TokenKind::Label(name.to_string()));
        }
        if text.starts_with('@') && text.chars().count() >= 2 {
            let name = &text[1..];
            return Ok(TokenKind::Reference(name.to_string()));
        }
        if let Some(word) = Self::classify_integer(text, position)? {
            return Ok(TokenKind::Integer(word));
        }
        Ok(TokenKind::Identifier(text.to_string()))
    }

    /// Returns `Ok(Some(word))` for a well-formed integer, `Ok(None)` if
    /// `text` doesn't even have the shape of one (so the caller should try
    /// the next classification rule), and `Err` if it has the shape but is
    /// out of the representable range.
    fn classify_integer(text: &str, position: Position) -> Result<Option<Word>, ParseError> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(None);
        }
        let magnitude: i128 = match digits.parse() {
            Ok(m) => m,
            Err(_) => {
                return Err(ParseError::MalformedInteger {
                    text: text.to_string(),
                    position,
                })
            }
        };
        let value: i128 = if negative { -magnitude } else { magnitude };
        const MIN: i128 = -(1i128 << 31);
        const MAX: i128 = (1i128 << 32) - 1;
        if value < MIN || value > MAX {
            return Err(ParseError::MalformedInteger {
                text: text.to_string(),
                position,
            });
        }
        Ok(Some(value as u32))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.skip_whitespace();
        let start = self.chars.peek().copied();
        let (start_byte, _) = start?;
        let position = Position {
            line: self.line,
            column: self.column,
        };
        let mut end_byte = start_byte;
        while let Some(&(idx, c)) = self.chars.peek() {
            if c.is_whitespace() {
                break;
            }
            end_byte = idx + c.len_utf8();
            self.advance();
        }
        let text = &self.source[start_byte..end_byte];
        match Self::classify(text, position) {
            Ok(kind) => Some(Ok(Token { kind, position })),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).map(|t| t.unwrap().kind).collect()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            tokens("1   2\t+\n"),
            vec![
                TokenKind::Integer(1),
                TokenKind::Integer(2),
                TokenKind::Identifier("+".to_string()),
            ]
        );
    }

    #[test]
    fn classifies_label() {
        assert_eq!(tokens("loop:"), vec![TokenKind::Label("loop".to_string())]);
    }

    #[test]
    fn single_colon_is_not_a_label() {
        assert_eq!(tokens(":"), vec![TokenKind::Identifier(":".to_string())]);
    }

    #[test]
    fn classifies_reference() {
        assert_eq!(
            tokens("@loop"),
            vec![TokenKind::Reference("loop".to_string())]
        );
    }

    #[test]
    fn bare_at_is_not_a_reference() {
        assert_eq!(tokens("@"), vec![TokenKind::Identifier("@".to_string())]);
    }

    #[test]
    fn negative_integer() {
        assert_eq!(tokens("-1"), vec![TokenKind::Integer(u32::MAX)]);
    }

    #[test]
    fn leading_plus_is_not_accepted() {
        assert_eq!(tokens("+1"), vec![TokenKind::Identifier("+1".to_string())]);
    }

    #[test]
    fn unsigned_bit_pattern_accepted() {
        assert_eq!(tokens("4294967295"), vec![TokenKind::Integer(u32::MAX)]);
    }

    #[test]
    fn out_of_range_integer_is_malformed() {
        let mut lexer = Lexer::new("4294967296");
        assert!(matches!(
            lexer.next(),
            Some(Err(ParseError::MalformedInteger { .. }))
        ));
    }

    #[test]
    fn below_min_is_malformed() {
        let mut lexer = Lexer::new("-2147483649");
        assert!(matches!(
            lexer.next(),
            Some(Err(ParseError::MalformedInteger { .. }))
        ));
    }

    #[test]
    fn arbitrary_symbol_is_identifier() {
        assert_eq!(
            tokens(">="),
            vec![TokenKind::Identifier(">=".to_string())]
        );
    }
}
