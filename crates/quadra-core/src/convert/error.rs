//! Conversion error types.

use crate::problem::ProblemError;

/// Errors that can occur while converting a problem or interpreting a
/// solution of the converted problem.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Integer slack mode requested for a constraint with non-integral
    /// coefficients; an integer slack variable cannot absorb fractional
    /// slack amounts.
    IncompatibleSlackMode { constraint: String },
    /// A mode string outside {"integer", "continuous", "auto"}.
    UnsupportedMode { mode: String },
    /// The solution vector length does not match the converted problem.
    SolutionLength { expected: usize, actual: usize },
    /// A source variable is missing from the converted problem; indicates an
    /// invariant violation upstream.
    MissingVariable { name: String },
    /// Building the converted problem failed.
    Problem(ProblemError),
}

impl ConvertError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::IncompatibleSlackMode { .. } => "CONVERT_INCOMPATIBLE_SLACK_MODE",
            ConvertError::UnsupportedMode { .. } => "CONVERT_UNSUPPORTED_MODE",
            ConvertError::SolutionLength { .. } => "CONVERT_SOLUTION_LENGTH",
            ConvertError::MissingVariable { .. } => "CONVERT_MISSING_VARIABLE",
            ConvertError::Problem(inner) => inner.code(),
        }
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::IncompatibleSlackMode { constraint } => write!(
                f,
                "[{}] Constraint '{}' has non-integral coefficients; \
                 an integer slack variable cannot be used",
                self.code(),
                constraint
            ),
            ConvertError::UnsupportedMode { mode } => write!(
                f,
                "[{}] Unsupported slack mode '{}' (expected integer, continuous, or auto)",
                self.code(),
                mode
            ),
            ConvertError::SolutionLength { expected, actual } => write!(
                f,
                "[{}] Solution has {} values but the converted problem has {} variables",
                self.code(),
                actual,
                expected
            ),
            ConvertError::MissingVariable { name } => write!(
                f,
                "[{}] Variable '{}' is missing from the converted problem",
                self.code(),
                name
            ),
            ConvertError::Problem(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Problem(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<ProblemError> for ConvertError {
    fn from(error: ProblemError) -> Self {
        ConvertError::Problem(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_is_stable() {
        assert_eq!(
            ConvertError::IncompatibleSlackMode {
                constraint: "c".to_string()
            }
            .code(),
            "CONVERT_INCOMPATIBLE_SLACK_MODE"
        );
        assert_eq!(
            ConvertError::UnsupportedMode {
                mode: "fast".to_string()
            }
            .code(),
            "CONVERT_UNSUPPORTED_MODE"
        );
        assert_eq!(
            ConvertError::SolutionLength {
                expected: 3,
                actual: 2
            }
            .code(),
            "CONVERT_SOLUTION_LENGTH"
        );
    }

    #[test]
    fn display_prefixes_error_code_and_names_the_constraint() {
        let rendered = ConvertError::IncompatibleSlackMode {
            constraint: "cap".to_string(),
        }
        .to_string();
        assert!(rendered.starts_with("[CONVERT_INCOMPATIBLE_SLACK_MODE]"));
        assert!(rendered.contains("cap"));
    }

    #[test]
    fn problem_errors_pass_through_with_their_own_code() {
        let inner = ProblemError::DuplicateVariable {
            name: "x".to_string(),
        };
        let error = ConvertError::from(inner.clone());
        assert_eq!(error.code(), inner.code());
        assert_eq!(error.to_string(), inner.to_string());
    }

    #[test]
    fn solution_length_message_reports_both_sizes() {
        let rendered = ConvertError::SolutionLength {
            expected: 4,
            actual: 2,
        }
        .to_string();
        assert!(rendered.contains('4'));
        assert!(rendered.contains('2'));
    }
}
