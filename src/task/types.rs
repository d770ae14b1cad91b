use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::answer::Answer;
use super::kind::TaskKind;

/// Largest factor paired with a table number in multiplication tasks
pub const MULTIPLIER_MAX: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("numeric limit must be at least 2 for {kind}, got {limit}")]
    LimitTooSmall { kind: TaskKind, limit: u32 },
    #[error("no table numbers configured for multiplication")]
    EmptyTables,
}

/// One arithmetic problem.
///
/// The operand pair is fixed at construction. The expected result is never
/// stored; it is recomputed from these same operands whenever an answer is
/// validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    kind: TaskKind,
    operand1: i64,
    operand2: i64,
}

impl Task {
    pub fn new(kind: TaskKind, operand1: i64, operand2: i64) -> Self {
        Self {
            kind,
            operand1,
            operand2,
        }
    }

    /// Generate a task of the given kind.
    ///
    /// # Errors
    ///
    /// - `LimitTooSmall` if `limit < 2` for addition or subtraction, where no
    ///   positive operand range exists
    /// - `EmptyTables` if `tables` is empty for multiplication
    pub fn generate<R: Rng>(
        kind: TaskKind,
        limit: u32,
        tables: &[u8],
        rng: &mut R,
    ) -> Result<Self, TaskError> {
        if kind.uses_limit() && limit < 2 {
            return Err(TaskError::LimitTooSmall { kind, limit });
        }
        let n = i64::from(limit);

        let (operand1, operand2) = match kind {
            TaskKind::Addition => {
                let a = rng.gen_range(1..=n - 1);
                let b = rng.gen_range(1..=n - a);
                (a, b)
            }
            TaskKind::Subtraction => {
                let a = rng.gen_range(2..=n);
                let b = rng.gen_range(1..=a - 1);
                (a, b)
            }
            TaskKind::Multiplication => {
                let table = i64::from(*tables.choose(rng).ok_or(TaskError::EmptyTables)?);
                let factor = rng.gen_range(0..=MULTIPLIER_MAX);
                // Shuffle sides so the table number is not always on the left
                if rng.gen_bool(0.5) {
                    (table, factor)
                } else {
                    (factor, table)
                }
            }
        };

        Ok(Self::new(kind, operand1, operand2))
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn operands(&self) -> (i64, i64) {
        (self.operand1, self.operand2)
    }

    /// The prompt shown to the user, e.g. `"12 + 30 = "`
    pub fn prompt(&self) -> String {
        format!(
            "{} {} {} = ",
            self.operand1,
            self.kind.symbol(),
            self.operand2
        )
    }

    pub fn expected(&self) -> i64 {
        self.kind.apply(self.operand1, self.operand2)
    }

    pub fn validate(&self, answer: Answer) -> bool {
        answer.value() == Some(self.expected())
    }
}
