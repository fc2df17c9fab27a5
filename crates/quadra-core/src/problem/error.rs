//! Problem container error types.

use quadra_expr::VariableId;

/// Errors that can occur while building or querying a problem.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// A variable with this name already exists.
    DuplicateVariable { name: String },
    /// A constraint with this name already exists in the same family.
    DuplicateConstraint { name: String },
    /// An expression references a variable id that is not declared.
    UnknownVariable(VariableId),
    /// No variable with this name exists.
    UnknownName { name: String },
    /// No constraint with this name exists.
    UnknownConstraint { name: String },
    /// Variable bounds are NaN or inverted.
    InvalidVariableBounds { lower: f64, upper: f64 },
    /// A coefficient or objective constant is not finite.
    InvalidCoefficient { coefficient: f64 },
    /// A constraint right-hand side is NaN.
    InvalidRhs { rhs: f64 },
}

impl ProblemError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ProblemError::DuplicateVariable { .. } => "VARIABLE_DUPLICATE_NAME",
            ProblemError::DuplicateConstraint { .. } => "CONSTRAINT_DUPLICATE_NAME",
            ProblemError::UnknownVariable(_) => "VARIABLE_UNKNOWN_ID",
            ProblemError::UnknownName { .. } => "VARIABLE_UNKNOWN_NAME",
            ProblemError::UnknownConstraint { .. } => "CONSTRAINT_UNKNOWN_NAME",
            ProblemError::InvalidVariableBounds { .. } => "VARIABLE_INVALID_BOUNDS",
            ProblemError::InvalidCoefficient { .. } => "COEFFICIENT_NOT_FINITE",
            ProblemError::InvalidRhs { .. } => "CONSTRAINT_INVALID_RHS",
        }
    }
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::DuplicateVariable { name } => {
                write!(f, "[{}] Variable '{}' already exists", self.code(), name)
            }
            ProblemError::DuplicateConstraint { name } => {
                write!(f, "[{}] Constraint '{}' already exists", self.code(), name)
            }
            ProblemError::UnknownVariable(id) => write!(
                f,
                "[{}] Variable id {} is not declared",
                self.code(),
                id.inner()
            ),
            ProblemError::UnknownName { name } => {
                write!(f, "[{}] No variable named '{}'", self.code(), name)
            }
            ProblemError::UnknownConstraint { name } => {
                write!(f, "[{}] No constraint named '{}'", self.code(), name)
            }
            ProblemError::InvalidVariableBounds { lower, upper } => write!(
                f,
                "[{}] Variable bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            ProblemError::InvalidCoefficient { coefficient } => write!(
                f,
                "[{}] Coefficient must be finite (got {})",
                self.code(),
                coefficient
            ),
            ProblemError::InvalidRhs { rhs } => write!(
                f,
                "[{}] Constraint right-hand side must not be NaN (got {})",
                self.code(),
                rhs
            ),
        }
    }
}

impl std::error::Error for ProblemError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_is_stable() {
        assert_eq!(
            ProblemError::DuplicateVariable {
                name: "x".to_string()
            }
            .code(),
            "VARIABLE_DUPLICATE_NAME"
        );
        assert_eq!(
            ProblemError::UnknownVariable(VariableId::new(3)).code(),
            "VARIABLE_UNKNOWN_ID"
        );
        assert_eq!(
            ProblemError::InvalidVariableBounds {
                lower: 1.0,
                upper: 0.0
            }
            .code(),
            "VARIABLE_INVALID_BOUNDS"
        );
    }

    #[test]
    fn display_prefixes_error_code() {
        let rendered = ProblemError::DuplicateConstraint {
            name: "cap".to_string(),
        }
        .to_string();
        assert!(rendered.starts_with("[CONSTRAINT_DUPLICATE_NAME]"));
        assert!(rendered.contains("cap"));
    }

    #[test]
    fn display_names_the_offending_id() {
        let rendered = ProblemError::UnknownVariable(VariableId::new(42)).to_string();
        assert!(rendered.contains("42"));
    }
}
