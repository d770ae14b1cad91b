use std::fmt;
use std::ops::{Add, Mul, Sub};

/// The arithmetic operation a task exercises.
///
/// Ordering follows the symbol order of the selection prompt (`+-*`), so a
/// `BTreeSet<TaskKind>` iterates in a stable, user-recognisable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskKind {
    Addition,
    Subtraction,
    Multiplication,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [
        TaskKind::Addition,
        TaskKind::Subtraction,
        TaskKind::Multiplication,
    ];

    /// Symbol typed at the selection prompt and shown in task prompts
    pub fn symbol(self) -> char {
        match self {
            TaskKind::Addition => '+',
            TaskKind::Subtraction => '-',
            TaskKind::Multiplication => '*',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == c)
    }

    /// The operator applied to a task's operand pair
    pub fn operator(self) -> fn(i64, i64) -> i64 {
        match self {
            TaskKind::Addition => <i64 as Add>::add,
            TaskKind::Subtraction => <i64 as Sub>::sub,
            TaskKind::Multiplication => <i64 as Mul>::mul,
        }
    }

    pub fn apply(self, x: i64, y: i64) -> i64 {
        (self.operator())(x, y)
    }

    /// Whether operand generation for this kind depends on the numeric limit
    pub fn uses_limit(self) -> bool {
        !matches!(self, TaskKind::Multiplication)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskKind::Addition => "addition",
            TaskKind::Subtraction => "subtraction",
            TaskKind::Multiplication => "multiplication",
        };
        write!(f, "{}", name)
    }
}
