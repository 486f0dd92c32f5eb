//! Source checks that run before anything is compiled.
//!
//! Validation short-circuits in three stages: the character set, the length cap, and the
//! structure of labels and conditionals. Only source that survives all three can be turned
//! into a [`ValidSource`], which is the sole input the compiler accepts.

use crate::config::LanguageConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Symbols that carry meaning besides letters.
pub const COMMAND_SYMBOLS: &str = "<>+-?!";

/// Structural classification of a program's labels and conditionals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxClass {
    Valid,
    /// Two conditionals back to back; a conditional cannot be the skipped instruction.
    MoreConditionsInRow,
    /// The last symbol is a conditional with nothing left to skip.
    EndsWithCondition,
    /// A lowercase anchor is declared more than once.
    UncertainJumpGoal,
    /// An uppercase reference has no matching anchor.
    NoJumpGoal,
    /// An anchor is never referenced. The program still runs.
    UnnecessaryJumpGoal,
}

impl SyntaxClass {
    /// Whether the program must be refused.
    pub fn is_fatal(self) -> bool {
        !matches!(self, SyntaxClass::Valid | SyntaxClass::UnnecessaryJumpGoal)
    }
}

/// Why a program was refused before compilation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("character {character:?} at position {position} is not allowed")]
    DisallowedCharacter { character: char, position: usize },

    #[error("program is {length} characters long, the limit is {limit}")]
    TooLong { length: usize, limit: usize },

    #[error("malformed program: {0:?}")]
    Syntax(SyntaxClass),
}

/// Source text that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidSource<'a> {
    text: &'a str,
    syntax: SyntaxClass,
}

impl<'a> ValidSource<'a> {
    /// The accepted program text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Either [`SyntaxClass::Valid`] or the non-fatal [`SyntaxClass::UnnecessaryJumpGoal`].
    pub fn syntax(&self) -> SyntaxClass {
        self.syntax
    }
}

/// Whether `c` may appear in a program at all.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphabetic() || COMMAND_SYMBOLS.contains(c)
}

fn is_condition(c: char) -> bool {
    c == '?' || c == '!'
}

/// Fails on the first character outside `< > + - ? ! a-z A-Z`.
pub fn check_symbols(source: &str) -> Result<(), Rejection> {
    match source.chars().enumerate().find(|&(_, c)| !is_allowed(c)) {
        Some((position, character)) => Err(Rejection::DisallowedCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Fails when `source` has more than `limit` characters.
pub fn check_length(source: &str, limit: usize) -> Result<(), Rejection> {
    let length = source.chars().count();
    if length > limit {
        return Err(Rejection::TooLong { length, limit });
    }
    Ok(())
}

/// Classifies the label and conditional structure of `source`.
///
/// Conditional adjacency and duplicate anchors are caught during the scan. Trailing
/// conditionals, dangling references and unused anchors are judged once it is done, in that
/// order.
pub fn classify_syntax(source: &str) -> SyntaxClass {
    let mut seen: HashSet<char> = HashSet::new();
    let mut after_condition = false;

    for c in source.chars() {
        if c.is_ascii_alphabetic() && !seen.insert(c) && c.is_ascii_lowercase() {
            return SyntaxClass::UncertainJumpGoal;
        }
        if is_condition(c) {
            if after_condition {
                return SyntaxClass::MoreConditionsInRow;
            }
            after_condition = true;
        } else {
            after_condition = false;
        }
    }

    if after_condition {
        return SyntaxClass::EndsWithCondition;
    }
    if seen
        .iter()
        .any(|c| c.is_ascii_uppercase() && !seen.contains(&c.to_ascii_lowercase()))
    {
        return SyntaxClass::NoJumpGoal;
    }
    if seen
        .iter()
        .any(|c| c.is_ascii_lowercase() && !seen.contains(&c.to_ascii_uppercase()))
    {
        return SyntaxClass::UnnecessaryJumpGoal;
    }
    SyntaxClass::Valid
}

/// Runs the validation stages with the limits from a [`LanguageConfig`].
#[derive(Clone, Debug, Default)]
pub struct Validator {
    config: LanguageConfig,
}

impl Validator {
    /// Creates a validator enforcing `config.max_source_len`.
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    /// Runs every stage and stops at the first failure.
    pub fn validate<'a>(&self, source: &'a str) -> Result<ValidSource<'a>, Rejection> {
        check_symbols(source)?;
        check_length(source, self.config.max_source_len)?;
        let syntax = classify_syntax(source);
        if syntax.is_fatal() {
            return Err(Rejection::Syntax(syntax));
        }
        Ok(ValidSource {
            text: source,
            syntax,
        })
    }
}
