//! The boundary used by whatever transport sits in front of the crate: text in, verdict out.

use crate::compiler::compile;
use crate::config::LanguageConfig;
use crate::interpreter::{Interpreter, Outcome, RunReport};
use crate::maze::{Maze, MazeLayout};
use crate::validator::{Rejection, SyntaxClass, Validator};
use serde::{Deserialize, Serialize};

/// Verdict for one submitted program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// The program never ran.
    Rejected(Rejection),
    /// The program ran to a terminal outcome.
    Completed {
        report: RunReport,
        /// Set when some anchor was never referenced. Useful for explaining a
        /// [`Outcome::ProgramEnded`] to the player.
        unused_anchor: bool,
    },
}

impl Evaluation {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Evaluation::Completed { report, .. } => Some(report.outcome),
            Evaluation::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Evaluation::Rejected(r) => Some(*r),
            Evaluation::Completed { .. } => None,
        }
    }
}

/// Validates, compiles and runs programs against one layout.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    validator: Validator,
    interpreter: Interpreter,
    layout: MazeLayout,
}

impl Evaluator {
    /// An evaluator over the reference maze.
    pub fn new(config: LanguageConfig) -> Self {
        Self {
            validator: Validator::new(config.clone()),
            interpreter: Interpreter::new(config),
            layout: MazeLayout::reference(),
        }
    }

    /// Swaps in a different layout (builder pattern).
    pub fn with_layout(mut self, layout: MazeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The layout every evaluation starts from.
    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    /// Evaluates one submission.
    ///
    /// A single trailing `=` is dropped first; form-encoded bodies append one. Every call
    /// works on its own maze, so results never depend on earlier calls.
    pub fn evaluate(&self, source: &str) -> Evaluation {
        let source = source.strip_suffix('=').unwrap_or(source);

        let checked = match self.validator.validate(source) {
            Ok(checked) => checked,
            Err(rejection) => {
                tracing::debug!(source, %rejection, "program rejected");
                return Evaluation::Rejected(rejection);
            }
        };

        let program = compile(&checked);
        let mut maze = Maze::new(&self.layout);
        let report = self.interpreter.run(&program, &mut maze);

        Evaluation::Completed {
            report,
            unused_anchor: checked.syntax() == SyntaxClass::UnnecessaryJumpGoal,
        }
    }
}

/// Evaluates `source` on the reference maze with default limits.
pub fn evaluate(source: &str) -> Evaluation {
    Evaluator::default().evaluate(source)
}
