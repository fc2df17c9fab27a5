//! Per-variable and per-constraint metadata attachments.

use std::collections::BTreeMap;

use crate::problem::error::ProblemError;
use crate::problem::Problem;

impl Problem {
    /// Attach metadata to a variable, keyed by its name.
    pub fn set_variable_metadata(
        &mut self,
        name: &str,
        metadata: serde_json::Value,
    ) -> Result<(), ProblemError> {
        if self.variable_by_name(name).is_none() {
            return Err(ProblemError::UnknownName {
                name: name.to_string(),
            });
        }
        self.variable_metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), metadata);
        Ok(())
    }

    /// Get metadata for a variable.
    pub fn get_variable_metadata(&self, name: &str) -> Option<&serde_json::Value> {
        self.variable_metadata
            .as_ref()
            .and_then(|meta| meta.get(name))
    }

    /// Attach metadata to a constraint (either family), keyed by its name.
    pub fn set_constraint_metadata(
        &mut self,
        name: &str,
        metadata: serde_json::Value,
    ) -> Result<(), ProblemError> {
        if self.linear_constraint_by_name(name).is_none()
            && self.quadratic_constraint_by_name(name).is_none()
        {
            return Err(ProblemError::UnknownConstraint {
                name: name.to_string(),
            });
        }
        self.constraint_metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), metadata);
        Ok(())
    }

    /// Get metadata for a constraint.
    pub fn get_constraint_metadata(&self, name: &str) -> Option<&serde_json::Value> {
        self.constraint_metadata
            .as_ref()
            .and_then(|meta| meta.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_expr::{ConstraintSense, LinearExpr};

    #[test]
    fn variable_metadata_roundtrip() {
        let mut problem = Problem::new("p");
        problem.continuous_var("x", 0.0, 1.0).unwrap();

        problem
            .set_variable_metadata("x", serde_json::json!({"unit": "MW"}))
            .unwrap();
        assert_eq!(
            problem.get_variable_metadata("x"),
            Some(&serde_json::json!({"unit": "MW"}))
        );
        assert!(problem.get_variable_metadata("y").is_none());
    }

    #[test]
    fn metadata_rejects_unknown_names() {
        let mut problem = Problem::new("p");
        let result = problem.set_variable_metadata("ghost", serde_json::json!(1));
        assert_eq!(
            result,
            Err(ProblemError::UnknownName {
                name: "ghost".to_string()
            })
        );

        let result = problem.set_constraint_metadata("ghost", serde_json::json!(1));
        assert_eq!(
            result,
            Err(ProblemError::UnknownConstraint {
                name: "ghost".to_string()
            })
        );
    }

    #[test]
    fn constraint_metadata_covers_both_families() {
        let mut problem = Problem::new("p");
        let x = problem.continuous_var("x", 0.0, 1.0).unwrap();
        problem
            .linear_constraint(
                LinearExpr::from_terms([(x, 1.0)]),
                ConstraintSense::LessEqual,
                1.0,
                "cap",
            )
            .unwrap();

        problem
            .set_constraint_metadata("cap", serde_json::json!({"source": "import"}))
            .unwrap();
        assert!(problem.get_constraint_metadata("cap").is_some());
    }
}
