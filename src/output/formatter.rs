use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::session::Score;

pub const SUCCESS_MESSAGE: &str = "Correct!";
pub const FAILURE_MESSAGE: &str = "Sorry, that's wrong. 😒";

/// Celebratory emoji, one of which may follow the success message
pub const CELEBRATIONS: [&str; 10] = [
    "😀", "😃", "😄", "😁", "😆", "😅", "🤣", "🙃", "😉", "😊",
];

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the line printed after every answer
pub fn format_feedback(correct: bool, celebration: Option<&str>, use_colors: bool) -> String {
    if correct {
        let message = if use_colors {
            SUCCESS_MESSAGE.green().bold().to_string()
        } else {
            SUCCESS_MESSAGE.to_string()
        };
        match celebration {
            Some(emoji) => format!("{} {}", message, emoji),
            None => message,
        }
    } else if use_colors {
        FAILURE_MESSAGE.red().to_string()
    } else {
        FAILURE_MESSAGE.to_string()
    }
}

/// Format the final score: "7 of 10 correct"
pub fn format_summary(score: &Score, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{} of {} correct",
            score.correct.bold(),
            score.asked.bold()
        )
    } else {
        format!("{} of {} correct", score.correct, score.asked)
    }
}

pub fn format_time_up(use_colors: bool) -> String {
    if use_colors {
        "Time is up!".yellow().bold().to_string()
    } else {
        "Time is up!".to_string()
    }
}
