//! # robot-maze
//!
//! A tiny robot-control language and the machine that runs it.
//!
//! Programs are strings over `< > + - ? ! a-z A-Z`. They pass through a [`Validator`], are
//! turned into a [`Program`] by [`compile`], and are executed by an [`Interpreter`] against a
//! [`Maze`] built from a [`MazeLayout`]. [`evaluate`] strings the whole pipeline together and
//! reports the result as data.
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `+` / `-` | step forward / backward |
//! | `<` / `>` | turn left / right |
//! | `?` | skip the next instruction if the cell ahead is free |
//! | `!` | skip the next instruction if the cell ahead is a wall |
//! | `a`-`z` | label the next instruction |
//! | `A`-`Z` | jump to the matching label |

pub mod compiler;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod instruction;
pub mod interpreter;
pub mod maze;
pub mod validator;

pub use compiler::*;
pub use config::*;
pub use error::*;
pub use evaluate::*;
pub use instruction::*;
pub use interpreter::*;
pub use maze::*;
pub use validator::*;
