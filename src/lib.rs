//! `stasm` is the interpreter engine for StackAssembly, a minimalist,
//! stack-based assembly-like language meant to be embedded in a host
//! application.
//!
//! The engine is split into the same pipeline the language itself goes
//! through on its way from text to running state:
//!
//! 1. [`lexer`] turns script text into a stream of tokens.
//! 2. [`parser`] turns tokens into a [`parser::Program`]: an operator
//!    vector with every label reference already resolved to an index.
//! 3. [`state`] and [`evaluator`] drive a [`state::ExecutionState`]
//!    through that program one operator at a time.
//! 4. [`effect`] is the channel the evaluator uses to tell the host why
//!    it stopped.
//!
//! A host never touches a partially-built program: [`parse`] either
//! returns a complete, immutable [`parser::Program`] or a
//! [`parser::ParseError`]. From there, [`ExecutionState::new`] creates a
//! fresh run, and [`ExecutionState::step`] / [`ExecutionState::run`]
//! drive it.
//!
//! ```
//! use stasm::{parse, ExecutionState, Effect};
//!
//! let program = parse("1 2 +").unwrap();
//! let mut state = ExecutionState::new(program.into());
//! assert_eq!(state.run(), Effect::Finished);
//! assert_eq!(state.stack_view(), &[3]);
//! ```

pub mod constants;
pub mod effect;
pub mod error;
pub mod evaluator;
pub mod identifier;
pub mod lexer;
pub mod memory;
pub mod parser;
pub mod stack;
pub mod state;

#[cfg(test)]
mod properties;

/// A 32-bit value with no stored type tag. Operators choose whether to read
/// it as signed two's-complement, as an unsigned index, or as a raw bit
/// pattern.
pub type Word = u32;

pub use effect::Effect;
pub use error::LibraryMisuseError;
pub use parser::{parse, ParseError, Program};
pub use state::{ExecutionState, Limits};
