use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;
// Average Gregorian month and year.
const MONTH_MS: u64 = 2_629_746 * SECOND_MS;
const YEAR_MS: u64 = 31_556_952 * SECOND_MS;

const SECOND_STEPS: &[u32] = &[1, 5, 10, 15, 30, 45];
const MINUTE_STEPS: &[u32] = &[1, 2, 3, 5, 10, 15, 30, 45];

/// Chart timeframe token such as `15m`, `4h`, `3M`, or `max`.
///
/// Suffixes are case-sensitive: `m` is minutes and `M` is months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    Seconds(u32),
    Minutes(u32),
    Hours(u32),
    Days(u32),
    Months(u32),
    Years(u32),
    /// "Since existence". Has no fixed step in the table.
    Max,
}

impl Timeframe {
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        let token = token.trim();
        if token == "max" {
            return Ok(Self::Max);
        }
        if token.len() < 2 {
            return Err(CoreError::invalid(format!(
                "invalid timeframe '{}': expected format like '1h'",
                token
            )));
        }

        let (num_str, suffix) = token.split_at(token.len() - 1);
        let n: u32 = num_str.parse().map_err(|_| {
            CoreError::invalid(format!(
                "invalid timeframe '{}': quantity must be a positive integer",
                token
            ))
        })?;

        let tf = match suffix {
            "s" => Self::Seconds(n),
            "m" => Self::Minutes(n),
            "h" => Self::Hours(n),
            "d" => Self::Days(n),
            "M" => Self::Months(n),
            "Y" => Self::Years(n),
            _ => {
                return Err(CoreError::invalid(format!(
                    "invalid timeframe '{}': unsupported suffix '{}', expected one of s/m/h/d/M/Y",
                    token, suffix
                )))
            }
        };
        if !tf.is_listed() {
            return Err(CoreError::invalid(format!(
                "unsupported timeframe '{}'",
                token
            )));
        }
        Ok(tf)
    }

    fn is_listed(&self) -> bool {
        match *self {
            Self::Seconds(n) => SECOND_STEPS.contains(&n),
            Self::Minutes(n) => MINUTE_STEPS.contains(&n),
            Self::Hours(n) => (1..=23).contains(&n),
            Self::Days(n) => (1..=29).contains(&n),
            Self::Months(n) => (1..=11).contains(&n),
            Self::Years(n) => (1..=4).contains(&n),
            Self::Max => true,
        }
    }

    /// Step between candles in milliseconds. `Max` reports 0.
    pub fn step_ms(&self) -> u64 {
        match *self {
            Self::Seconds(n) => n as u64 * SECOND_MS,
            Self::Minutes(n) => n as u64 * MINUTE_MS,
            Self::Hours(n) => n as u64 * HOUR_MS,
            Self::Days(n) => n as u64 * DAY_MS,
            Self::Months(n) => n as u64 * MONTH_MS,
            Self::Years(n) => n as u64 * YEAR_MS,
            Self::Max => 0,
        }
    }

    pub fn label(&self) -> String {
        fn plural(n: u32, unit: &str) -> String {
            if n == 1 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", n, unit)
            }
        }
        match *self {
            Self::Seconds(n) => plural(n, "second"),
            Self::Minutes(n) => plural(n, "minute"),
            Self::Hours(n) => plural(n, "hour"),
            Self::Days(n) => plural(n, "day"),
            Self::Months(n) => plural(n, "month"),
            Self::Years(n) => plural(n, "year"),
            Self::Max => "Since existence".to_string(),
        }
    }

    /// How many candles a chart for this timeframe shows by default.
    pub fn default_point_count(&self) -> usize {
        let hours = self.step_ms() as f64 / HOUR_MS as f64;
        match self {
            Self::Max => 100,
            _ if hours <= 1.0 => 60,
            _ if hours <= 24.0 => 96,
            _ if hours <= 168.0 => 168,
            _ if hours <= 720.0 => 120,
            _ => 100,
        }
    }

    /// Every supported timeframe, shortest first, `Max` last.
    pub fn all() -> Vec<Timeframe> {
        let mut out: Vec<Timeframe> = SECOND_STEPS.iter().map(|&n| Self::Seconds(n)).collect();
        out.extend(MINUTE_STEPS.iter().map(|&n| Self::Minutes(n)));
        out.extend((1..=23).map(Self::Hours));
        out.extend((1..=29).map(Self::Days));
        out.extend((1..=11).map(Self::Months));
        out.extend((1..=4).map(Self::Years));
        out.push(Self::Max);
        out
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Seconds(n) => write!(f, "{}s", n),
            Self::Minutes(n) => write!(f, "{}m", n),
            Self::Hours(n) => write!(f, "{}h", n),
            Self::Days(n) => write!(f, "{}d", n),
            Self::Months(n) => write!(f, "{}M", n),
            Self::Years(n) => write!(f, "{}Y", n),
            Self::Max => f.write_str("max"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timeframe {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timeframe> for String {
    fn from(value: Timeframe) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_through_display() {
        for tf in Timeframe::all() {
            assert_eq!(Timeframe::parse(&tf.to_string()).unwrap(), tf);
        }
    }

    #[test]
    fn month_and_minute_are_distinct() {
        assert_eq!(Timeframe::parse("1m").unwrap().step_ms(), 60_000);
        assert_eq!(Timeframe::parse("1M").unwrap().step_ms(), 2_629_746_000);
    }
}
