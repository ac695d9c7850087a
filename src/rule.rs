use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

const DAILY_TAGS: [&str; 2] = ["毎日", "every day"];
const MONTH_START_TAGS: [&str; 2] = ["月初", "month start"];
const MONTH_END_TAGS: [&str; 2] = ["月末", "month end"];
const WEEKLY_PREFIX_JA: &str = "毎週";
const WEEKLY_PREFIX_EN: &str = "weekly on ";

/// How often a task template recurs within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatRule {
    /// Every business day.
    Daily,
    /// First business day of the month.
    MonthStart,
    /// Last business day of the month.
    MonthEnd,
    /// Every occurrence of the weekday; a holiday moves to the previous business day.
    Weekly(Weekday),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The tag asks for a weekly rule but names no known weekday.
    UnknownWeekday { tag: String, token: String },
    /// The tag matches none of the supported rules.
    UnknownRule(String),
}

impl RuleError {
    /// Whether the offending template can be skipped instead of aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RuleError::UnknownWeekday { .. })
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::UnknownWeekday { tag, token } => {
                write!(f, "unknown weekday '{token}' in repeat rule '{tag}'")
            }
            RuleError::UnknownRule(tag) => write!(f, "unsupported repeat rule '{tag}'"),
        }
    }
}

impl std::error::Error for RuleError {}

impl RepeatRule {
    /// Resolve a repeat tag from a template file.
    ///
    /// Japanese tags must match exactly; English tags are trimmed and compared
    /// case-insensitively.
    pub fn parse(tag: &str) -> Result<Self, RuleError> {
        if DAILY_TAGS.iter().any(|t| tag_matches(tag, t)) {
            return Ok(RepeatRule::Daily);
        }
        if MONTH_START_TAGS.iter().any(|t| tag_matches(tag, t)) {
            return Ok(RepeatRule::MonthStart);
        }
        if MONTH_END_TAGS.iter().any(|t| tag_matches(tag, t)) {
            return Ok(RepeatRule::MonthEnd);
        }

        if let Some(token) = tag.strip_prefix(WEEKLY_PREFIX_JA) {
            return weekday_from_ja(token)
                .map(RepeatRule::Weekly)
                .ok_or_else(|| RuleError::UnknownWeekday {
                    tag: tag.to_string(),
                    token: token.to_string(),
                });
        }

        let normalized = tag.trim().to_lowercase();
        if let Some(token) = normalized.strip_prefix(WEEKLY_PREFIX_EN) {
            return weekday_from_en(token.trim())
                .map(RepeatRule::Weekly)
                .ok_or_else(|| RuleError::UnknownWeekday {
                    tag: tag.to_string(),
                    token: token.trim().to_string(),
                });
        }

        Err(RuleError::UnknownRule(tag.to_string()))
    }
}

impl FromStr for RepeatRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepeatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatRule::Daily => write!(f, "every day"),
            RepeatRule::MonthStart => write!(f, "month start"),
            RepeatRule::MonthEnd => write!(f, "month end"),
            RepeatRule::Weekly(weekday) => {
                write!(f, "{WEEKLY_PREFIX_EN}{}", english_name(*weekday))
            }
        }
    }
}

fn tag_matches(tag: &str, expected: &str) -> bool {
    if expected.is_ascii() {
        tag.trim().eq_ignore_ascii_case(expected)
    } else {
        tag == expected
    }
}

fn weekday_from_ja(token: &str) -> Option<Weekday> {
    match token {
        "月曜日" => Some(Weekday::Mon),
        "火曜日" => Some(Weekday::Tue),
        "水曜日" => Some(Weekday::Wed),
        "木曜日" => Some(Weekday::Thu),
        "金曜日" => Some(Weekday::Fri),
        "土曜日" => Some(Weekday::Sat),
        "日曜日" => Some(Weekday::Sun),
        _ => None,
    }
}

fn weekday_from_en(token: &str) -> Option<Weekday> {
    match token {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn english_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_tags_resolve() {
        assert_eq!(RepeatRule::parse("毎日"), Ok(RepeatRule::Daily));
        assert_eq!(RepeatRule::parse("月初"), Ok(RepeatRule::MonthStart));
        assert_eq!(RepeatRule::parse("月末"), Ok(RepeatRule::MonthEnd));
        assert_eq!(
            RepeatRule::parse("毎週金曜日"),
            Ok(RepeatRule::Weekly(Weekday::Fri))
        );
    }

    #[test]
    fn english_tags_are_case_insensitive() {
        assert_eq!(RepeatRule::parse(" Every Day "), Ok(RepeatRule::Daily));
        assert_eq!(RepeatRule::parse("MONTH END"), Ok(RepeatRule::MonthEnd));
        assert_eq!(
            RepeatRule::parse("Weekly on Mon"),
            Ok(RepeatRule::Weekly(Weekday::Mon))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for rule in [
            RepeatRule::Daily,
            RepeatRule::MonthStart,
            RepeatRule::MonthEnd,
            RepeatRule::Weekly(Weekday::Wed),
            RepeatRule::Weekly(Weekday::Sun),
        ] {
            assert_eq!(rule.to_string().parse::<RepeatRule>(), Ok(rule));
        }
    }

    #[test]
    fn unknown_weekday_is_recoverable() {
        let err = RepeatRule::parse("毎週祝日").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(
            err,
            RuleError::UnknownWeekday {
                tag: "毎週祝日".into(),
                token: "祝日".into()
            }
        );

        let err = RepeatRule::parse("weekly on funday").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn unknown_rule_is_fatal() {
        for tag in ["every quarter", "", "毎月", "weekly"] {
            let err = RepeatRule::parse(tag).unwrap_err();
            assert!(!err.is_recoverable(), "{tag} should be fatal");
            assert_eq!(err, RuleError::UnknownRule(tag.to_string()));
        }
    }
}
