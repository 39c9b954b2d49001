use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::BudgetError;

/// Requested selection size(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSpec {
    /// A single `k`.
    Single(usize),
    /// Every `k` from `start` to `end`, inclusive.
    Range { start: usize, end: usize },
}

impl BudgetSpec {
    /// Budgets in ascending order.
    pub fn budgets(&self) -> RangeInclusive<usize> {
        match *self {
            BudgetSpec::Single(k) => k..=k,
            BudgetSpec::Range { start, end } => start..=end,
        }
    }

    /// Largest requested budget.
    pub fn max(&self) -> usize {
        match *self {
            BudgetSpec::Single(k) => k,
            BudgetSpec::Range { end, .. } => end,
        }
    }

    /// Number of independent runs this spec asks for.
    pub fn count(&self) -> usize {
        match *self {
            BudgetSpec::Single(_) => 1,
            BudgetSpec::Range { start, end } => end - start + 1,
        }
    }

    fn parse_positive(value: &str) -> Result<usize, BudgetError> {
        let trimmed = value.trim();
        let parsed: usize = trimmed.parse().map_err(|_| BudgetError::InvalidNumber {
            value: value.to_string(),
        })?;

        if parsed == 0 {
            return Err(BudgetError::NonPositive {
                value: value.to_string(),
            });
        }

        Ok(parsed)
    }
}

impl FromStr for BudgetSpec {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BudgetError::Empty);
        }

        match s.split_once('-') {
            Some((start, end)) => {
                if start.trim().is_empty() || end.contains('-') {
                    return Err(BudgetError::InvalidNumber {
                        value: s.to_string(),
                    });
                }
                let start = Self::parse_positive(start)?;
                let end = Self::parse_positive(end)?;
                if end < start {
                    return Err(BudgetError::InvertedRange { start, end });
                }
                Ok(BudgetSpec::Range { start, end })
            }
            None => Self::parse_positive(s).map(BudgetSpec::Single),
        }
    }
}

impl fmt::Display for BudgetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetSpec::Single(k) => write!(f, "{}", k),
            BudgetSpec::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}
