//! Translates validated source into a [`Program`].
//!
//! Movement symbols and conditionals map one-to-one onto instructions. Letters implement
//! labels: a lowercase letter marks the index of the next emitted instruction, and an
//! uppercase letter emits an unconditional jump back (or forward) to it. References are
//! compiled to placeholders first and patched once every anchor is known.

use crate::instruction::{Instruction, Program};
use crate::validator::ValidSource;
use std::collections::HashMap;

/// Compiles `source` into an instruction sequence.
///
/// # Panics
///
/// Panics if a reference has no anchor or a character has no meaning. [`crate::Validator`]
/// refuses such source, so this only fires if the two disagree.
pub fn compile(source: &ValidSource<'_>) -> Program {
    let mut instructions: Vec<Instruction> = Vec::with_capacity(source.text().len());
    let mut anchors: HashMap<char, usize> = HashMap::new();
    let mut references: Vec<(usize, char)> = Vec::new();

    for c in source.text().chars() {
        let here = instructions.len();
        match c {
            '?' => instructions.push(Instruction::JumpIfNotWall(here + 2)),
            '!' => instructions.push(Instruction::JumpIfWall(here + 2)),
            c if c.is_ascii_lowercase() => {
                anchors.insert(c, here);
            }
            c if c.is_ascii_uppercase() => {
                references.push((here, c.to_ascii_lowercase()));
                instructions.push(Instruction::Jump(here));
            }
            c => match Instruction::from_movement(c) {
                Some(op) => instructions.push(op),
                None => unreachable!("validated source contains {c:?}"),
            },
        }
    }

    // A conditional followed only by anchors would skip past the end; pin it to the end.
    let end = instructions.len();
    for instruction in &mut instructions {
        match instruction {
            Instruction::JumpIfWall(t) | Instruction::JumpIfNotWall(t) => *t = (*t).min(end),
            _ => {}
        }
    }

    for (slot, letter) in references {
        let Some(&target) = anchors.get(&letter) else {
            panic!("reference {letter:?} at instruction {slot} has no anchor");
        };
        instructions[slot] = Instruction::Jump(target);
    }

    tracing::debug!(
        source = source.text(),
        instructions = instructions.len(),
        "compiled program"
    );
    Program::from_instructions(instructions)
}
