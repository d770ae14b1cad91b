pub mod answer;
pub mod kind;
pub mod types;

pub use answer::Answer;
pub use kind::TaskKind;
pub use types::{Task, TaskError, MULTIPLIER_MAX};
