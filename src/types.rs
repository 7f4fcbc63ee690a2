//! Core types - item values and the inert nesting sample.
//!
//! These are the leaf value types held by a [`StateRecord`](crate::state::StateRecord).

use std::fmt;

// =============================================================================
// Item - a single heterogeneous list value
// =============================================================================

/// A scalar stored in the record's item sequence.
///
/// The sequence mixes integers, floats and strings, so each entry carries
/// its own tag. Rendering goes through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Item {
    /// The literal appended by every `push_foo`.
    pub fn foo() -> Self {
        Item::Str("foo".to_string())
    }
}

impl fmt::Display for Item {
    /// Default string conversion: `2.0` renders as `2`, `1.5` as `1.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Int(n) => write!(f, "{}", n),
            Item::Float(x) => write!(f, "{}", x),
            Item::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Int(n)
    }
}

impl From<i32> for Item {
    fn from(n: i32) -> Self {
        Item::Int(n as i64)
    }
}

impl From<f64> for Item {
    fn from(x: f64) -> Self {
        Item::Float(x)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Str(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Str(s)
    }
}

// =============================================================================
// Nesting - recursive sample data
// =============================================================================

/// Optional self-referential chain. Carried as sample data only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Nesting {
    #[default]
    Empty,
    Nested(Box<Nesting>),
}

impl Nesting {
    /// Levels in the fixed sample chain.
    pub const SAMPLE_DEPTH: usize = 3;

    /// Build the sample chain: three levels, terminating in `Empty`.
    pub fn sample() -> Self {
        (0..Self::SAMPLE_DEPTH).fold(Nesting::Empty, |inner, _| Nesting::Nested(Box::new(inner)))
    }

    /// Number of `Nested` levels before reaching `Empty`.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Nesting::Nested(inner) = current {
            depth += 1;
            current = inner;
        }
        depth
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display_matches_default_conversion() {
        assert_eq!(Item::from(1).to_string(), "1");
        assert_eq!(Item::from(2.0).to_string(), "2");
        assert_eq!(Item::from(1.5).to_string(), "1.5");
        assert_eq!(Item::from(-3).to_string(), "-3");
        assert_eq!(Item::from("baz").to_string(), "baz");
    }

    #[test]
    fn test_item_foo_literal() {
        assert_eq!(Item::foo(), Item::Str("foo".to_string()));
    }

    #[test]
    fn test_int_and_float_are_distinct() {
        assert_ne!(Item::from(2), Item::from(2.0));
    }

    #[test]
    fn test_nesting_sample_depth() {
        let sample = Nesting::sample();
        assert_eq!(sample.depth(), 3);
        assert_eq!(
            sample,
            Nesting::Nested(Box::new(Nesting::Nested(Box::new(Nesting::Nested(Box::new(
                Nesting::Empty
            ))))))
        );
        assert_eq!(Nesting::default().depth(), 0);
    }
}
