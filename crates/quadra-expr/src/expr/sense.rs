use serde::{Deserialize, Serialize};

/// Comparison sense of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl ConstraintSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintSense::LessEqual => "le",
            ConstraintSense::GreaterEqual => "ge",
            ConstraintSense::Equal => "eq",
        }
    }

    /// The operator as it appears in rendered constraints.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintSense::LessEqual => "<=",
            ConstraintSense::GreaterEqual => ">=",
            ConstraintSense::Equal => "==",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConstraintSense;

    #[test]
    fn sense_strings_are_stable() {
        assert_eq!(ConstraintSense::LessEqual.as_str(), "le");
        assert_eq!(ConstraintSense::GreaterEqual.as_str(), "ge");
        assert_eq!(ConstraintSense::Equal.as_str(), "eq");
        assert_eq!(ConstraintSense::LessEqual.symbol(), "<=");
        assert_eq!(ConstraintSense::GreaterEqual.symbol(), ">=");
        assert_eq!(ConstraintSense::Equal.symbol(), "==");
    }
}
