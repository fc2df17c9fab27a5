//! Builder methods for adding variables, constraints, and objectives.

use quadra_expr::{Bounds, ConstraintSense, LinearExpr, QuadraticExpr, VariableId};

use crate::problem::error::ProblemError;
use crate::problem::Problem;
use crate::types::{LinearConstraint, Objective, ObjectiveSense, QuadraticConstraint, Variable};

impl Problem {
    /// Add a binary variable with bounds [0, 1].
    pub fn binary_var(&mut self, name: impl Into<String>) -> Result<VariableId, ProblemError> {
        self.push_variable(Variable::binary(name))
    }

    /// Add an integer variable with the given bounds.
    pub fn integer_var(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Result<VariableId, ProblemError> {
        self.push_variable(Variable::integer(name, Bounds::new(lower, upper)))
    }

    /// Add a continuous variable with the given bounds.
    pub fn continuous_var(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Result<VariableId, ProblemError> {
        self.push_variable(Variable::continuous(name, Bounds::new(lower, upper)))
    }

    fn push_variable(&mut self, variable: Variable) -> Result<VariableId, ProblemError> {
        if variable.bounds.lower.is_nan()
            || variable.bounds.upper.is_nan()
            || variable.bounds.lower > variable.bounds.upper
        {
            return Err(ProblemError::InvalidVariableBounds {
                lower: variable.bounds.lower,
                upper: variable.bounds.upper,
            });
        }
        if self.variable_index.contains_key(&variable.name) {
            return Err(ProblemError::DuplicateVariable {
                name: variable.name.clone(),
            });
        }

        let id = VariableId::new(self.variables.len() as u32);
        self.variable_index.insert(variable.name.clone(), id);
        self.variables.push(variable);
        Ok(id)
    }

    /// Add a linear constraint.
    ///
    /// Fails on a duplicate name, an undeclared variable reference, a
    /// non-finite coefficient, or a NaN right-hand side.
    pub fn linear_constraint(
        &mut self,
        linear: LinearExpr,
        sense: ConstraintSense,
        rhs: f64,
        name: impl Into<String>,
    ) -> Result<(), ProblemError> {
        let name = name.into();
        if self.linear_constraints.iter().any(|c| c.name == name) {
            return Err(ProblemError::DuplicateConstraint { name });
        }
        self.check_linear_expr(&linear)?;
        self.check_rhs(rhs)?;

        tracing::debug!(
            component = "problem",
            operation = "add_linear_constraint",
            status = "ok",
            name = %name,
            sense = sense.as_str(),
            terms = linear.len(),
            "Added linear constraint"
        );
        self.linear_constraints.push(LinearConstraint {
            name,
            linear,
            sense,
            rhs,
        });
        Ok(())
    }

    /// Add a quadratic constraint.
    ///
    /// Same validation as [`Problem::linear_constraint`], applied to both the
    /// linear and quadratic expressions.
    pub fn quadratic_constraint(
        &mut self,
        linear: LinearExpr,
        quadratic: QuadraticExpr,
        sense: ConstraintSense,
        rhs: f64,
        name: impl Into<String>,
    ) -> Result<(), ProblemError> {
        let name = name.into();
        if self.quadratic_constraints.iter().any(|c| c.name == name) {
            return Err(ProblemError::DuplicateConstraint { name });
        }
        self.check_linear_expr(&linear)?;
        self.check_quadratic_expr(&quadratic)?;
        self.check_rhs(rhs)?;

        tracing::debug!(
            component = "problem",
            operation = "add_quadratic_constraint",
            status = "ok",
            name = %name,
            sense = sense.as_str(),
            linear_terms = linear.len(),
            quadratic_terms = quadratic.len(),
            "Added quadratic constraint"
        );
        self.quadratic_constraints.push(QuadraticConstraint {
            name,
            linear,
            quadratic,
            sense,
            rhs,
        });
        Ok(())
    }

    /// Set the objective to minimize `constant + linear + quadratic`.
    pub fn minimize(
        &mut self,
        constant: f64,
        linear: LinearExpr,
        quadratic: QuadraticExpr,
    ) -> Result<(), ProblemError> {
        self.set_objective(ObjectiveSense::Minimize, constant, linear, quadratic)
    }

    /// Set the objective to maximize `constant + linear + quadratic`.
    pub fn maximize(
        &mut self,
        constant: f64,
        linear: LinearExpr,
        quadratic: QuadraticExpr,
    ) -> Result<(), ProblemError> {
        self.set_objective(ObjectiveSense::Maximize, constant, linear, quadratic)
    }

    /// Replaces any previously registered objective.
    fn set_objective(
        &mut self,
        sense: ObjectiveSense,
        constant: f64,
        linear: LinearExpr,
        quadratic: QuadraticExpr,
    ) -> Result<(), ProblemError> {
        if !constant.is_finite() {
            return Err(ProblemError::InvalidCoefficient {
                coefficient: constant,
            });
        }
        self.check_linear_expr(&linear)?;
        self.check_quadratic_expr(&quadratic)?;

        tracing::debug!(
            component = "problem",
            operation = "set_objective",
            status = "ok",
            sense = sense.as_str(),
            linear_terms = linear.len(),
            quadratic_terms = quadratic.len(),
            "Set objective function"
        );
        self.objective = Objective {
            sense,
            constant,
            linear,
            quadratic,
        };
        Ok(())
    }

    fn check_linear_expr(&self, linear: &LinearExpr) -> Result<(), ProblemError> {
        for (var_id, coeff) in linear.iter() {
            self.ensure_variable_exists(var_id)?;
            if !coeff.is_finite() {
                return Err(ProblemError::InvalidCoefficient { coefficient: coeff });
            }
        }
        Ok(())
    }

    fn check_quadratic_expr(&self, quadratic: &QuadraticExpr) -> Result<(), ProblemError> {
        for (x, y, coeff) in quadratic.iter() {
            self.ensure_variable_exists(x)?;
            self.ensure_variable_exists(y)?;
            if !coeff.is_finite() {
                return Err(ProblemError::InvalidCoefficient { coefficient: coeff });
            }
        }
        Ok(())
    }

    fn check_rhs(&self, rhs: f64) -> Result<(), ProblemError> {
        if rhs.is_nan() {
            return Err(ProblemError::InvalidRhs { rhs });
        }
        Ok(())
    }
}
