pub mod controller;
pub mod selection;

pub use controller::{collect_selection, run, FinishReason, Outcome};
pub use selection::{parse_kinds, parse_tables, Selection};

use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::config::{parse_time_limit, Config};
use crate::task::{Answer, Task, TaskError, TaskKind};

/// Running tally. `correct <= asked` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub asked: u64,
    pub correct: u64,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.asked += 1;
        if correct {
            self.correct += 1;
        }
    }
}

/// What happens after a wrong answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// Move on to a new random task after every attempt
    #[default]
    Advance,
    /// Ask the same task again until it is answered correctly
    RepeatUntilCorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub limit: u32,
    pub time_limit: Option<Duration>,
    pub policy: AnswerPolicy,
    pub celebrate: bool,
    pub use_colors: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            limit: crate::config::DEFAULT_LIMIT,
            time_limit: None,
            policy: AnswerPolicy::Advance,
            celebrate: true,
            use_colors: false,
        }
    }
}

impl SessionSettings {
    /// Resolve settings from an already validated config
    pub fn from_config(config: &Config, use_colors: bool) -> Result<Self> {
        let time_limit = config
            .time_limit
            .as_deref()
            .map(parse_time_limit)
            .transpose()?;
        let policy = if config.repeat_until_correct.unwrap_or(false) {
            AnswerPolicy::RepeatUntilCorrect
        } else {
            AnswerPolicy::Advance
        };
        Ok(Self {
            limit: config.effective_limit(),
            time_limit,
            policy,
            celebrate: config.celebrate.unwrap_or(true),
            use_colors,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no operations selected")]
    NoKinds,
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// One practice run: the enabled kinds, the score so far, and the random
/// source every task is drawn from.
pub struct Session<R = StdRng> {
    settings: SessionSettings,
    kinds: Vec<TaskKind>,
    tables: Vec<u8>,
    score: Score,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Create a session, rejecting any selection that could not generate a
    /// valid task before a single one is asked.
    pub fn new(
        settings: SessionSettings,
        selection: Selection,
        rng: R,
    ) -> Result<Self, SessionError> {
        if selection.kinds.is_empty() {
            return Err(SessionError::NoKinds);
        }
        for kind in &selection.kinds {
            if kind.uses_limit() && settings.limit < 2 {
                return Err(TaskError::LimitTooSmall {
                    kind: *kind,
                    limit: settings.limit,
                }
                .into());
            }
        }
        if selection.kinds.contains(&TaskKind::Multiplication) && selection.tables.is_empty() {
            return Err(TaskError::EmptyTables.into());
        }

        Ok(Self {
            settings,
            kinds: selection.kinds.into_iter().collect(),
            tables: selection.tables.into_iter().collect(),
            score: Score::default(),
            rng,
        })
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Pick a uniformly random enabled kind and generate a fresh task
    pub fn next_task(&mut self) -> Result<Task, SessionError> {
        let kind = *self.kinds.choose(&mut self.rng).ok_or(SessionError::NoKinds)?;
        let task = Task::generate(kind, self.settings.limit, &self.tables, &mut self.rng)?;
        Ok(task)
    }

    /// Judge an answer and count it
    pub fn record(&mut self, task: &Task, answer: Answer) -> bool {
        let correct = task.validate(answer);
        self.score.record(correct);
        correct
    }

    /// Pick a celebratory emoji if enabled
    pub fn celebration(&mut self) -> Option<&'static str> {
        if self.settings.celebrate {
            crate::output::CELEBRATIONS.choose(&mut self.rng).copied()
        } else {
            None
        }
    }

    /// Whether `elapsed` has used up the configured time limit
    pub fn time_is_up(&self, elapsed: Duration) -> bool {
        match self.settings.time_limit {
            Some(limit) => elapsed >= limit,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::{BTreeSet, HashSet};

    fn session(kinds: &str, tables: &str, limit: u32) -> Session<StdRng> {
        let settings = SessionSettings {
            limit,
            ..SessionSettings::default()
        };
        let selection = Selection {
            kinds: parse_kinds(kinds),
            tables: parse_tables(tables),
        };
        Session::new(settings, selection, StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_score_record() {
        let mut score = Score::default();
        score.record(true);
        score.record(false);
        score.record(true);
        assert_eq!(score, Score { asked: 3, correct: 2 });
    }

    #[test]
    fn test_new_rejects_empty_kinds() {
        let result = Session::new(
            SessionSettings::default(),
            Selection::default(),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(result.err(), Some(SessionError::NoKinds));
    }

    #[test]
    fn test_new_rejects_small_limit() {
        let settings = SessionSettings {
            limit: 1,
            ..SessionSettings::default()
        };
        let selection = Selection {
            kinds: parse_kinds("-"),
            tables: BTreeSet::new(),
        };
        let result = Session::new(settings, selection, StdRng::seed_from_u64(1));
        assert!(matches!(
            result.err(),
            Some(SessionError::Task(TaskError::LimitTooSmall { .. }))
        ));
    }

    #[test]
    fn test_small_limit_is_fine_for_multiplication_only() {
        let settings = SessionSettings {
            limit: 1,
            ..SessionSettings::default()
        };
        let selection = Selection {
            kinds: parse_kinds("*"),
            tables: parse_tables("3"),
        };
        assert!(Session::new(settings, selection, StdRng::seed_from_u64(1)).is_ok());
    }

    #[test]
    fn test_new_rejects_missing_tables() {
        let selection = Selection {
            kinds: parse_kinds("+*"),
            tables: BTreeSet::new(),
        };
        let result = Session::new(SessionSettings::default(), selection, StdRng::seed_from_u64(1));
        assert_eq!(result.err(), Some(SessionError::Task(TaskError::EmptyTables)));
    }

    #[test]
    fn test_addition_only_with_correct_answers() {
        let mut session = session("+", "", 10);
        for k in 1..=50u64 {
            let task = session.next_task().unwrap();
            assert_eq!(task.kind(), TaskKind::Addition);
            let (a, b) = task.operands();
            assert!(a + b <= 10);
            assert!(session.record(&task, Answer::Number(a + b)));
            assert_eq!(session.score(), Score { asked: k, correct: k });
        }
    }

    #[test]
    fn test_counters_after_mixed_answers() {
        let mut session = session("+-", "", 100);
        for k in 1..=30u64 {
            let task = session.next_task().unwrap();
            let answer = if k % 3 == 0 {
                Answer::Unparsed
            } else {
                Answer::Number(task.expected())
            };
            session.record(&task, answer);
            let score = session.score();
            assert_eq!(score.asked, k);
            assert!(score.correct <= score.asked);
        }
        assert_eq!(session.score(), Score { asked: 30, correct: 20 });
    }

    #[test]
    fn test_all_kinds_appear_and_tables_respected() {
        let mut session = session("+-*", "7", 100);
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            let task = session.next_task().unwrap();
            seen.insert(task.kind());
            if task.kind() == TaskKind::Multiplication {
                let (a, b) = task.operands();
                assert!(a == 7 || b == 7);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_time_is_up() {
        let mut session = session("+", "", 10);
        assert!(!session.time_is_up(Duration::from_secs(3600)));

        session.settings.time_limit = Some(Duration::ZERO);
        assert!(session.time_is_up(Duration::ZERO));

        session.settings.time_limit = Some(Duration::from_secs(60));
        assert!(!session.time_is_up(Duration::from_secs(59)));
        assert!(session.time_is_up(Duration::from_secs(60)));
    }

    #[test]
    fn test_celebration_toggle() {
        let mut session = session("+", "", 10);
        let emoji = session.celebration().unwrap();
        assert!(crate::output::CELEBRATIONS.contains(&emoji));

        session.settings.celebrate = false;
        assert_eq!(session.celebration(), None);
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            limit: Some(20),
            time_limit: Some("2m".to_string()),
            repeat_until_correct: Some(true),
            celebrate: Some(false),
            ..Config::default()
        };
        let settings = SessionSettings::from_config(&config, true).unwrap();
        assert_eq!(settings.limit, 20);
        assert_eq!(settings.time_limit, Some(Duration::from_secs(120)));
        assert_eq!(settings.policy, AnswerPolicy::RepeatUntilCorrect);
        assert!(!settings.celebrate);
        assert!(settings.use_colors);

        let defaults = SessionSettings::from_config(&Config::default(), false).unwrap();
        assert_eq!(defaults, SessionSettings::default());
    }
}
