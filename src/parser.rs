//! Turns a token stream into a [`Program`]: an operator vector with every
//! label reference already resolved to an operator index.
//!
//! Parsing is two passes, as the language requires: the first pass collects
//! operators and records, for every label, the index of the operator that
//! follows it; the second pass resolves every reference against that table.
//! Labels themselves never become operators — by the time a [`Program`]
//! exists, there is no "is this a label?" branch left to take at evaluation
//! time.

use crate::identifier::Identifier;
use crate::lexer::{Lexer, Position, Token, TokenKind};
use crate::Word;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// A static error discovered while parsing a script, before any evaluation
/// takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed integer literal {text:?} at {position}")]
    MalformedInteger { text: String, position: Position },

    #[error("duplicate label {name:?} at {position}")]
    DuplicateLabel { name: String, position: Position },

    #[error("label at {position} has no following operator")]
    DanglingLabel { position: Position },

    #[error("reference to undefined label {name:?} at {position}")]
    UnresolvedReference { name: String, position: Position },
}

/// An identifier that resolved to a known operator, or the original text of
/// one that didn't. Evaluating the latter raises `UnknownIdentifier` — the
/// language's own rule that unknown identifiers are a runtime, not a parse,
/// condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIdentifier {
    Known(Identifier),
    Unknown(String),
}

/// One element of a parsed program. Labels do not appear here: they are
/// elided once the resolver has recorded what they point to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    Integer(Word),
    Reference(u32),
    Identifier(ResolvedIdentifier),
}

/// An immutable, resolved script. Cheap to clone (it's an `Arc` underneath
/// in normal use) and safe to share across execution states and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    operators: Vec<Operator>,
}

impl Program {
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

enum RawKind {
    Integer(Word),
    Reference(String),
    Identifier(ResolvedIdentifier),
}

struct Raw {
    position: Position,
    kind: RawKind,
}

/// Parses script text into a [`Program`].
///
/// ```
/// use stasm::parse;
/// let program = parse("1 2 +").unwrap();
/// assert_eq!(program.len(), 3);
/// ```
pub fn parse(text: &str) -> Result<Program, ParseError> {
    let mut raw = Vec::new();
    let mut labels: HashMap<String, u32> = HashMap::new();
    let mut seen_label_names: HashSet<String> = HashSet::new();
    let mut pending_labels: Vec<(String, Position)> = Vec::new();
    let mut last_label_position: Option<Position> = None;

    for token in Lexer::new(text) {
        let Token { kind, position } = token?;
        match kind {
            TokenKind::Label(name) => {
                if !seen_label_names.insert(name.clone()) {
                    return Err(ParseError::DuplicateLabel { name, position });
                }
                last_label_position = Some(position);
                pending_labels.push((name, position));
            }
            TokenKind::Reference(name) => {
                let index = raw.len() as u32;
                for (label_name, _) in pending_labels.drain(..) {
                    labels.insert(label_name, index);
                }
                raw.push(Raw {
                    position,
                    kind: RawKind::Reference(name),
                });
            }
            TokenKind::Integer(word) => {
                let index = raw.len() as u32;
                for (label_name, _) in pending_labels.drain(..) {
                    labels.insert(label_name, index);
                }
                raw.push(Raw {
                    position,
                    kind: RawKind::Integer(word),
                });
            }
            TokenKind::Identifier(text) => {
                let index = raw.len() as u32;
                for (label_name, _) in pending_labels.drain(..) {
                    labels.insert(label_name, index);
                }
                let resolved = match text.parse::<Identifier>() {
                    Ok(id) => ResolvedIdentifier::Known(id),
                    Err(_) => ResolvedIdentifier::Unknown(text),
                };
                raw.push(Raw {
                    position,
                    kind: RawKind::Identifier(resolved),
                });
            }
        }
    }

    if !pending_labels.is_empty() {
        return Err(ParseError::DanglingLabel {
            position: last_label_position.expect("pending label implies a recorded position"),
        });
    }

    let mut operators = Vec::with_capacity(raw.len());
    for entry in raw {
        let operator = match entry.kind {
            RawKind::Integer(word) => Operator::Integer(word),
            RawKind::Identifier(resolved) => Operator::Identifier(resolved),
            RawKind::Reference(name) => match labels.get(&name) {
                Some(&index) => Operator::Reference(index),
                None => {
                    return Err(ParseError::UnresolvedReference {
                        name,
                        position: entry.position,
                    })
                }
            },
        };
        operators.push(operator);
    }

    log::trace!(
        "parsed program: {} operators, {} labels",
        operators.len(),
        labels.len()
    );

    Ok(Program { operators })
}

impl From<Program> for Arc<Program> {
    fn from(program: Program) -> Self {
        Arc::new(program)
    }
}
