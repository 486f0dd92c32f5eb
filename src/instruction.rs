//! Compiled instructions and the program that holds them.

use serde::{Deserialize, Serialize};

/// Operations the robot machine can execute.
///
/// Jump targets are indices into the owning [`Program`]. A target equal to the program length
/// means "fall off the end", which finishes the run normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // --- Movement ---
    /// Step one cell in the facing direction (`+`).
    Forward,
    /// Step one cell behind without changing heading (`-`).
    Backward,
    /// Quarter turn counter-clockwise (`<`).
    TurnLeft,
    /// Quarter turn clockwise (`>`).
    TurnRight,

    // --- Flow Control ---
    /// Unconditional jump, compiled from an uppercase reference.
    Jump(usize),
    /// Jump when the cell ahead is a wall (`!`).
    JumpIfWall(usize),
    /// Jump when the cell ahead is free (`?`).
    JumpIfNotWall(usize),
}

impl Instruction {
    /// Maps a movement symbol to its instruction.
    pub fn from_movement(symbol: char) -> Option<Self> {
        match symbol {
            '<' => Some(Instruction::TurnLeft),
            '>' => Some(Instruction::TurnRight),
            '+' => Some(Instruction::Forward),
            '-' => Some(Instruction::Backward),
            _ => None,
        }
    }

    /// The jump target, if this is a jump of any kind.
    pub fn target(&self) -> Option<usize> {
        match *self {
            Instruction::Jump(t) | Instruction::JumpIfWall(t) | Instruction::JumpIfNotWall(t) => {
                Some(t)
            }
            _ => None,
        }
    }
}

/// A compiled, immutable instruction sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub(crate) fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// All instructions in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The instruction at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Number of instructions; also the "fall off the end" jump target.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
