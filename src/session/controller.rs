use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;

use super::selection::{parse_kinds, parse_tables, Selection};
use super::{AnswerPolicy, Score, Session};
use crate::console::{Console, Reply};
use crate::output::{format_feedback, format_summary, format_time_up};
use crate::task::{Answer, Task};

pub const KINDS_PROMPT: &str = "Which operations do you want to practice (+-*)? ";
pub const TABLES_PROMPT: &str = "Which times tables (digits, e.g. 7 or 378)? ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    TimeUp,
    Interrupted,
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub score: Score,
    pub reason: FinishReason,
    pub elapsed: Duration,
}

/// Ask for whatever `preset` is still missing: the operations to practice,
/// then the times tables if multiplication was picked.
///
/// Unrecognised input is re-prompted. Returns `None` if the user interrupts
/// or input ends before the selection is complete.
pub async fn collect_selection<C: Console + ?Sized>(
    console: &mut C,
    preset: Selection,
) -> Result<Option<Selection>> {
    let mut selection = preset;

    while selection.kinds.is_empty() {
        match console.ask(KINDS_PROMPT).await? {
            Reply::Line(line) => {
                selection.kinds = parse_kinds(&line);
                if selection.kinds.is_empty() {
                    tracing::debug!("No operation symbol in {:?}, asking again", line);
                }
            }
            Reply::Interrupted | Reply::Closed => return Ok(None),
        }
    }

    while selection.needs_tables() {
        match console.ask(TABLES_PROMPT).await? {
            Reply::Line(line) => selection.tables = parse_tables(&line),
            Reply::Interrupted | Reply::Closed => return Ok(None),
        }
    }

    tracing::debug!(
        "Practicing {:?} with tables {:?}",
        selection.kinds,
        selection.tables
    );
    Ok(Some(selection))
}

/// Drive the question loop until time runs out, the user interrupts, or
/// input ends, then print the summary.
///
/// The time limit is only checked between answers; a prompt never times out.
pub async fn run<C: Console + ?Sized, R: Rng>(
    session: &mut Session<R>,
    console: &mut C,
) -> Result<Outcome> {
    let started = Instant::now();

    let reason = loop {
        let task = session.next_task()?;
        tracing::debug!(kind = %task.kind(), "Asking {}", task.prompt().trim_end());

        if let Some(reason) = work_task(session, console, &task, started).await? {
            break reason;
        }
    };

    let elapsed = started.elapsed();
    let score = session.score();

    let use_colors = session.settings().use_colors;
    if reason == FinishReason::TimeUp {
        console.say(&format_time_up(use_colors))?;
    }
    console.say(&format_summary(&score, use_colors))?;

    Ok(Outcome {
        score,
        reason,
        elapsed,
    })
}

/// Ask one task (repeatedly, under `RepeatUntilCorrect`). Returns the reason
/// to stop the session, if any.
async fn work_task<C: Console + ?Sized, R: Rng>(
    session: &mut Session<R>,
    console: &mut C,
    task: &Task,
    started: Instant,
) -> Result<Option<FinishReason>> {
    let prompt = task.prompt();
    loop {
        let answer = match console.ask(&prompt).await? {
            Reply::Line(line) => Answer::parse(&line),
            Reply::Interrupted => return Ok(Some(FinishReason::Interrupted)),
            Reply::Closed => return Ok(Some(FinishReason::InputClosed)),
        };

        let correct = session.record(task, answer);
        let celebration = if correct { session.celebration() } else { None };
        console.say(&format_feedback(
            correct,
            celebration,
            session.settings().use_colors,
        ))?;

        if session.time_is_up(started.elapsed()) {
            return Ok(Some(FinishReason::TimeUp));
        }
        if correct || session.settings().policy == AnswerPolicy::Advance {
            return Ok(None);
        }
    }
}
