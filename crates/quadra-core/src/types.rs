use quadra_expr::{Bounds, ConstraintSense, LinearExpr, QuadraticExpr};
use serde::{Deserialize, Serialize};

/// Numeric domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarKind {
    Binary,
    Integer,
    Continuous,
}

impl VarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Binary => "binary",
            VarKind::Integer => "integer",
            VarKind::Continuous => "continuous",
        }
    }
}

/// A named decision variable with a kind and bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
    pub bounds: Bounds,
}

impl Variable {
    /// Create a binary variable with bounds [0, 1].
    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VarKind::Binary,
            bounds: Bounds::new(0.0, 1.0),
        }
    }

    /// Create an integer variable with the given bounds.
    pub fn integer(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            kind: VarKind::Integer,
            bounds,
        }
    }

    /// Create a continuous variable with the given bounds.
    pub fn continuous(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            kind: VarKind::Continuous,
            bounds,
        }
    }
}

/// A linear constraint: `linear (sense) rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub name: String,
    pub linear: LinearExpr,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

/// A quadratic constraint: `linear + quadratic (sense) rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticConstraint {
    pub name: String,
    pub linear: LinearExpr,
    pub quadratic: QuadraticExpr,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

/// Optimization sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

impl ObjectiveSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveSense::Minimize => "minimize",
            ObjectiveSense::Maximize => "maximize",
        }
    }
}

/// Objective function: constant + linear part + quadratic part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub sense: ObjectiveSense,
    pub constant: f64,
    pub linear: LinearExpr,
    pub quadratic: QuadraticExpr,
}

impl Default for Objective {
    /// Minimize the zero function.
    fn default() -> Self {
        Self {
            sense: ObjectiveSense::Minimize,
            constant: 0.0,
            linear: LinearExpr::new(),
            quadratic: QuadraticExpr::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn binary_variable_has_unit_bounds() {
        let var = Variable::binary("flag");
        assert_eq!(var.kind, VarKind::Binary);
        assert_eq!(var.bounds.lower, 0.0);
        assert_eq!(var.bounds.upper, 1.0);
    }

    #[test]
    fn kind_strings_are_stable() {
        assert_eq!(VarKind::Binary.as_str(), "binary");
        assert_eq!(VarKind::Integer.as_str(), "integer");
        assert_eq!(VarKind::Continuous.as_str(), "continuous");
    }

    #[test]
    fn default_objective_minimizes_zero() {
        let objective = Objective::default();
        assert_eq!(objective.sense, ObjectiveSense::Minimize);
        assert_eq!(objective.constant, 0.0);
        assert!(objective.linear.is_empty());
        assert!(objective.quadratic.is_empty());
    }
}
