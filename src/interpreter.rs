//! Step-bounded execution of a [`Program`] against a [`Maze`].
//!
//! The entry point is [`Interpreter`]. Configure it with a [`LanguageConfig`], then call
//! [`Interpreter::run`] with a compiled program and a freshly created maze.

use crate::config::LanguageConfig;
use crate::instruction::{Instruction, Program};
use crate::maze::{Maze, Robot, StepResult};
use serde::{Deserialize, Serialize};

/// How a run ended. Exactly one applies to every run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The robot stepped onto the goal cell.
    GoalReached,
    /// The robot tried to move into a wall.
    WallHit,
    /// The instruction pointer left the program.
    ProgramEnded,
    /// The step budget ran out first.
    TerminatedAfterLimit,
}

/// Result of a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Instructions executed, including the one that ended the run.
    pub steps: usize,
    /// Where the robot stood, and which way it faced, when the run ended.
    pub robot: Robot,
}

/// Runs compiled programs.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    config: LanguageConfig,
}

impl Interpreter {
    /// Creates an interpreter enforcing `config.step_limit`.
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    /// The limits this interpreter runs with.
    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// Executes `program` on `maze` until a terminal condition or the step limit.
    ///
    /// Each loop iteration spends one unit of the budget, including the one that notices the
    /// pointer has left the program. A program that ends exactly as the budget runs out is
    /// therefore reported as [`Outcome::TerminatedAfterLimit`].
    pub fn run(&self, program: &Program, maze: &mut Maze<'_>) -> RunReport {
        let mut pointer = 0usize;

        for step in 0..self.config.step_limit {
            let Some(&instruction) = program.get(pointer) else {
                return self.finish(Outcome::ProgramEnded, step, maze);
            };
            tracing::trace!(step, pointer, ?instruction, robot = ?maze.robot(), "execute");

            let moved = match instruction {
                Instruction::Forward => Some(maze.step_forward()),
                Instruction::Backward => Some(maze.step_backward()),
                Instruction::TurnLeft => {
                    maze.turn_left();
                    None
                }
                Instruction::TurnRight => {
                    maze.turn_right();
                    None
                }
                Instruction::Jump(target) => {
                    pointer = target;
                    continue;
                }
                Instruction::JumpIfWall(target) => {
                    if maze.is_wall_ahead() {
                        pointer = target;
                        continue;
                    }
                    None
                }
                Instruction::JumpIfNotWall(target) => {
                    if !maze.is_wall_ahead() {
                        pointer = target;
                        continue;
                    }
                    None
                }
            };

            match moved {
                Some(StepResult::GoalReached) => {
                    return self.finish(Outcome::GoalReached, step + 1, maze);
                }
                Some(StepResult::WallHit) => {
                    return self.finish(Outcome::WallHit, step + 1, maze);
                }
                Some(StepResult::Normal) | None => {}
            }
            pointer += 1;
        }

        self.finish(Outcome::TerminatedAfterLimit, self.config.step_limit, maze)
    }

    fn finish(&self, outcome: Outcome, steps: usize, maze: &Maze<'_>) -> RunReport {
        let robot = maze.robot();
        tracing::debug!(?outcome, steps, ?robot, "run finished");
        RunReport {
            outcome,
            steps,
            robot,
        }
    }
}
