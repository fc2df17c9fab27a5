//! Accessors and derived interval bounds.

use quadra_expr::{Bounds, Interval, LinearExpr, QuadraticExpr, VariableId};

use super::error::ProblemError;
use super::Problem;

use crate::types::{LinearConstraint, QuadraticConstraint, Variable};

impl Problem {
    /// Get the number of variables.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Get the total number of constraints (linear plus quadratic).
    pub fn num_constraints(&self) -> usize {
        self.linear_constraints.len() + self.quadratic_constraints.len()
    }

    /// Variables in insertion order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Get a variable by id.
    pub fn get_variable(&self, id: VariableId) -> Result<&Variable, ProblemError> {
        self.variables
            .get(id.index())
            .ok_or(ProblemError::UnknownVariable(id))
    }

    /// Lookup a variable id by name.
    pub fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_index.get(name).copied()
    }

    /// Linear constraints in insertion order.
    pub fn linear_constraints(&self) -> &[LinearConstraint] {
        &self.linear_constraints
    }

    /// Quadratic constraints in insertion order.
    pub fn quadratic_constraints(&self) -> &[QuadraticConstraint] {
        &self.quadratic_constraints
    }

    /// Lookup a linear constraint by name.
    pub fn linear_constraint_by_name(&self, name: &str) -> Option<&LinearConstraint> {
        self.linear_constraints.iter().find(|c| c.name == name)
    }

    /// Lookup a quadratic constraint by name.
    pub fn quadratic_constraint_by_name(&self, name: &str) -> Option<&QuadraticConstraint> {
        self.quadratic_constraints.iter().find(|c| c.name == name)
    }

    /// Bounds of every variable, indexed by variable id.
    pub fn variable_bounds(&self) -> Vec<Bounds> {
        self.variables.iter().map(|v| v.bounds).collect()
    }

    /// Achievable range of a linear expression under this problem's bounds.
    pub fn linear_interval(&self, linear: &LinearExpr) -> Interval {
        linear.interval(&self.variable_bounds())
    }

    /// Achievable range of a quadratic expression under this problem's bounds.
    pub fn quadratic_interval(&self, quadratic: &QuadraticExpr) -> Interval {
        quadratic.interval(&self.variable_bounds())
    }
}
