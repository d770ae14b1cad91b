pub mod formatter;

pub use formatter::{
    format_feedback, format_summary, format_time_up, should_use_colors, CELEBRATIONS,
    FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
