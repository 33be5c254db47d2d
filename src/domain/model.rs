use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// Outcome of comparing two integers. `Display` renders the result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater { larger: i64, smaller: i64 },
    Equal(i64),
}

impl Comparison {
    pub fn of(first: i64, second: i64) -> Self {
        match first.cmp(&second) {
            Ordering::Greater => Comparison::Greater {
                larger: first,
                smaller: second,
            },
            Ordering::Less => Comparison::Greater {
                larger: second,
                smaller: first,
            },
            Ordering::Equal => Comparison::Equal(first),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Greater { larger, smaller } => {
                write!(f, "{} is greater than {}", larger, smaller)
            }
            Comparison::Equal(value) => write!(f, "Both numbers are equal: {} = {}", value, value),
        }
    }
}
