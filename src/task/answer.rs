/// A submitted answer, as typed by the user.
///
/// Anything that does not parse as an integer becomes `Unparsed`. It is
/// scored like any other wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Number(i64),
    Unparsed,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) => Answer::Number(n),
            Err(_) => Answer::Unparsed,
        }
    }

    pub fn value(self) -> Option<i64> {
        match self {
            Answer::Number(n) => Some(n),
            Answer::Unparsed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(Answer::parse("42"), Answer::Number(42));
        assert_eq!(Answer::parse("  7\n"), Answer::Number(7));
        assert_eq!(Answer::parse("-3"), Answer::Number(-3));
        assert_eq!(Answer::parse("+5"), Answer::Number(5));
    }

    #[test]
    fn test_parse_garbage_is_unparsed() {
        assert_eq!(Answer::parse(""), Answer::Unparsed);
        assert_eq!(Answer::parse("twelve"), Answer::Unparsed);
        assert_eq!(Answer::parse("4.5"), Answer::Unparsed);
        assert_eq!(Answer::parse("1 2"), Answer::Unparsed);
        assert_eq!(Answer::parse("99999999999999999999999"), Answer::Unparsed);
    }

    #[test]
    fn test_value() {
        assert_eq!(Answer::Number(3).value(), Some(3));
        assert_eq!(Answer::Unparsed.value(), None);
    }
}
