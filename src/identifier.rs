//! The fixed set of known identifiers and their textual spellings.

use std::fmt;
use std::str::FromStr;

/// An operator identifier the evaluator knows how to execute.
///
/// Unrecognized text is not represented by this type at all — the parser
/// keeps the original string alongside a failed lookup so the evaluator can
/// raise `UnknownIdentifier` at the point the script actually reaches it,
/// rather than at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    CountOnes,
    LeadingZeros,
    TrailingZeros,
    RotateLeft,
    RotateRight,
    ShiftLeft,
    ShiftRight,
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
    Jump,
    JumpIf,
    Read,
    Write,
    Copy,
    Drop,
    Yield,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIdentifierName;

impl FromStr for Identifier {
    type Err = UnknownIdentifierName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Identifier::Add),
            "-" => Ok(Identifier::Sub),
            "*" => Ok(Identifier::Mul),
            "/" => Ok(Identifier::Div),
            "and" => Ok(Identifier::And),
            "or" => Ok(Identifier::Or),
            "xor" => Ok(Identifier::Xor),
            "count_ones" => Ok(Identifier::CountOnes),
            "leading_zeros" => Ok(Identifier::LeadingZeros),
            "trailing_zeros" => Ok(Identifier::TrailingZeros),
            "rotate_left" => Ok(Identifier::RotateLeft),
            "rotate_right" => Ok(Identifier::RotateRight),
            "shift_left" => Ok(Identifier::ShiftLeft),
            "shift_right" => Ok(Identifier::ShiftRight),
            "=" => Ok(Identifier::Eq),
            ">" => Ok(Identifier::Gt),
            ">=" => Ok(Identifier::Ge),
            "<" => Ok(Identifier::Lt),
            "<=" => Ok(Identifier::Le),
            "jump" => Ok(Identifier::Jump),
            "jump_if" => Ok(Identifier::JumpIf),
            "read" => Ok(Identifier::Read),
            "write" => Ok(Identifier::Write),
            "copy" => Ok(Identifier::Copy),
            "drop" => Ok(Identifier::Drop),
            "yield" => Ok(Identifier::Yield),
            _ => Err(UnknownIdentifierName),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Identifier::Add => "+",
            Identifier::Sub => "-",
            Identifier::Mul => "*",
            Identifier::Div => "/",
            Identifier::And => "and",
            Identifier::Or => "or",
            Identifier::Xor => "xor",
            Identifier::CountOnes => "count_ones",
            Identifier::LeadingZeros => "leading_zeros",
            Identifier::TrailingZeros => "trailing_zeros",
            Identifier::RotateLeft => "rotate_left",
            Identifier::RotateRight => "rotate_right",
            Identifier::ShiftLeft => "shift_left",
            Identifier::ShiftRight => "shift_right",
            Identifier::Eq => "=",
            Identifier::Gt => ">",
            Identifier::Ge => ">=",
            Identifier::Lt => "<",
            Identifier::Le => "<=",
            Identifier::Jump => "jump",
            Identifier::JumpIf => "jump_if",
            Identifier::Read => "read",
            Identifier::Write => "write",
            Identifier::Copy => "copy",
            Identifier::Drop => "drop",
            Identifier::Yield => "yield",
        };
        f.write_str(text)
    }
}
