//! Rewriting inequality constraints into equalities with bounded slack
//! variables, and mapping solutions of the rewritten problem back to the
//! original.
//!
//! The rewrite is per-constraint and kind-agnostic: linear and quadratic
//! constraints go through the same planning path, differing only in which
//! expressions contribute to the left-hand-side interval and to the
//! coefficient-integrality probe.

mod error;
mod slack;

use std::collections::BTreeMap;
use std::time::Instant;

use quadra_expr::{ConstraintSense, LinearExpr, QuadraticExpr};

use crate::problem::Problem;
use crate::types::{LinearConstraint, ObjectiveSense, QuadraticConstraint, VarKind};

use slack::{plan_slack, Inequality};

pub use error::ConvertError;
pub use slack::{SlackMode, SLACK_SEPARATOR};

/// Rewrites every `<=` / `>=` constraint of a problem into an equality by
/// introducing one bounded slack variable per constraint.
///
/// Slack bounds are derived by interval arithmetic over the constraint's
/// left-hand side; the numeric domain of each slack variable follows the
/// configured [`SlackMode`]. Equality constraints, variables, and the
/// objective are copied unchanged. The input problem is never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InequalityToEquality {
    mode: SlackMode,
}

impl InequalityToEquality {
    pub fn new(mode: SlackMode) -> Self {
        Self { mode }
    }

    /// The configured slack mode.
    pub fn mode(&self) -> SlackMode {
        self.mode
    }

    /// Change the slack mode for subsequent conversions.
    pub fn set_mode(&mut self, mode: SlackMode) {
        self.mode = mode;
    }

    /// Convert a problem with inequality constraints into one with only
    /// equality constraints.
    ///
    /// Returns the completed [`Conversion`]; no partially built problem is
    /// ever observable on failure.
    pub fn convert(&self, problem: &Problem) -> Result<Conversion, ConvertError> {
        let started = Instant::now();
        let mode = self.mode;

        let source = problem.clone();
        let mut converted = Problem::new(source.name());

        // All source variables come first; slack variables are registered
        // during planning, and constraints only after every variable exists.
        for variable in source.variables() {
            match variable.kind {
                VarKind::Binary => converted.binary_var(variable.name.clone())?,
                VarKind::Integer => converted.integer_var(
                    variable.name.clone(),
                    variable.bounds.lower,
                    variable.bounds.upper,
                )?,
                VarKind::Continuous => converted.continuous_var(
                    variable.name.clone(),
                    variable.bounds.lower,
                    variable.bounds.upper,
                )?,
            };
        }

        let mut linear_rewrites = Vec::with_capacity(source.linear_constraints().len());
        for constraint in source.linear_constraints() {
            linear_rewrites.push(rewrite_linear(&source, &mut converted, mode, constraint)?);
        }

        let mut quadratic_rewrites = Vec::with_capacity(source.quadratic_constraints().len());
        for constraint in source.quadratic_constraints() {
            quadratic_rewrites.push(rewrite_quadratic(&source, &mut converted, mode, constraint)?);
        }

        let objective = source.objective();
        match objective.sense {
            ObjectiveSense::Minimize => converted.minimize(
                objective.constant,
                objective.linear.clone(),
                objective.quadratic.clone(),
            )?,
            ObjectiveSense::Maximize => converted.maximize(
                objective.constant,
                objective.linear.clone(),
                objective.quadratic.clone(),
            )?,
        }

        for (linear, rhs, name) in linear_rewrites {
            converted.linear_constraint(linear, ConstraintSense::Equal, rhs, name)?;
        }
        for (linear, quadratic, rhs, name) in quadratic_rewrites {
            converted.quadratic_constraint(linear, quadratic, ConstraintSense::Equal, rhs, name)?;
        }

        tracing::debug!(
            component = "convert",
            operation = "inequality_to_equality",
            status = "success",
            mode = mode.as_str(),
            variables = source.num_variables(),
            slack_variables = converted.num_variables() - source.num_variables(),
            constraints = source.num_constraints(),
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Rewrote inequality constraints as equalities"
        );

        Ok(Conversion { source, converted })
    }
}

fn rewrite_linear(
    source: &Problem,
    converted: &mut Problem,
    mode: SlackMode,
    constraint: &LinearConstraint,
) -> Result<(LinearExpr, f64, String), ConvertError> {
    let name = constraint.name.clone();
    match Inequality::of(constraint.sense) {
        None => Ok((constraint.linear.clone(), constraint.rhs, name)),
        Some(direction) => {
            let plan = plan_slack(
                converted,
                mode,
                &name,
                direction,
                constraint.rhs,
                source.linear_interval(&constraint.linear),
                constraint.linear.any_fractional(),
            )?;
            let mut linear = constraint.linear.clone();
            if let Some((slack_id, sign)) = plan.term {
                linear.add_term(slack_id, sign);
            }
            Ok((linear, plan.rhs, name))
        }
    }
}

fn rewrite_quadratic(
    source: &Problem,
    converted: &mut Problem,
    mode: SlackMode,
    constraint: &QuadraticConstraint,
) -> Result<(LinearExpr, QuadraticExpr, f64, String), ConvertError> {
    let name = constraint.name.clone();
    match Inequality::of(constraint.sense) {
        None => Ok((
            constraint.linear.clone(),
            constraint.quadratic.clone(),
            constraint.rhs,
            name,
        )),
        Some(direction) => {
            let lhs = source
                .linear_interval(&constraint.linear)
                .add(source.quadratic_interval(&constraint.quadratic));
            let any_fractional =
                constraint.linear.any_fractional() || constraint.quadratic.any_fractional();
            let plan = plan_slack(
                converted,
                mode,
                &name,
                direction,
                constraint.rhs,
                lhs,
                any_fractional,
            )?;
            let mut linear = constraint.linear.clone();
            if let Some((slack_id, sign)) = plan.term {
                linear.add_term(slack_id, sign);
            }
            Ok((linear, constraint.quadratic.clone(), plan.rhs, name))
        }
    }
}

/// One completed conversion: the source/converted pair needed to map a
/// solution of the converted problem back to the source problem.
///
/// The pair is frozen once returned; each conversion yields its own
/// independent `Conversion`, so concurrent conversions share no state.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    source: Problem,
    converted: Problem,
}

impl Conversion {
    /// The copy of the original problem this conversion was built from.
    pub fn source(&self) -> &Problem {
        &self.source
    }

    /// The equality-only problem.
    pub fn converted(&self) -> &Problem {
        &self.converted
    }

    /// Map a solution of the converted problem back to the source problem.
    ///
    /// `x` has one entry per converted-problem variable, in that problem's
    /// variable order. The result has one entry per source variable, in
    /// source order; slack values are dropped. Lookup is by variable name,
    /// never by position, so source values survive regardless of how slack
    /// variables were interleaved.
    pub fn interpret(&self, x: &[f64]) -> Result<Vec<f64>, ConvertError> {
        if x.len() != self.converted.num_variables() {
            return Err(ConvertError::SolutionLength {
                expected: self.converted.num_variables(),
                actual: x.len(),
            });
        }

        let values: BTreeMap<&str, f64> = self
            .converted
            .variables()
            .iter()
            .zip(x)
            .map(|(variable, &value)| (variable.name.as_str(), value))
            .collect();

        self.source
            .variables()
            .iter()
            .map(|variable| {
                values
                    .get(variable.name.as_str())
                    .copied()
                    .ok_or_else(|| ConvertError::MissingVariable {
                        name: variable.name.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_auto() {
        let converter = InequalityToEquality::default();
        assert_eq!(converter.mode(), SlackMode::Auto);
    }

    #[test]
    fn set_mode_applies_to_later_conversions() {
        let mut problem = Problem::new("p");
        let x = problem.continuous_var("x", 0.0, 10.0).unwrap();
        problem
            .linear_constraint(
                LinearExpr::from_terms([(x, 1.0)]),
                ConstraintSense::LessEqual,
                7.0,
                "cap",
            )
            .unwrap();

        let mut converter = InequalityToEquality::new(SlackMode::Continuous);
        let conversion = converter.convert(&problem).unwrap();
        let slack = conversion
            .converted()
            .variable_by_name("cap@continuous_slack");
        assert!(slack.is_some());

        converter.set_mode(SlackMode::Integer);
        let conversion = converter.convert(&problem).unwrap();
        let slack = conversion.converted().variable_by_name("cap@int_slack");
        assert!(slack.is_some());
    }

    #[test]
    fn convert_does_not_mutate_the_input() {
        let mut problem = Problem::new("p");
        let x = problem.continuous_var("x", 0.0, 10.0).unwrap();
        problem
            .linear_constraint(
                LinearExpr::from_terms([(x, 1.0)]),
                ConstraintSense::LessEqual,
                7.0,
                "cap",
            )
            .unwrap();
        let before = problem.clone();

        InequalityToEquality::default().convert(&problem).unwrap();
        assert_eq!(problem, before);
    }

    #[test]
    fn interpret_rejects_wrong_length() {
        let mut problem = Problem::new("p");
        let x = problem.continuous_var("x", 0.0, 10.0).unwrap();
        problem
            .linear_constraint(
                LinearExpr::from_terms([(x, 1.0)]),
                ConstraintSense::LessEqual,
                7.0,
                "cap",
            )
            .unwrap();

        let conversion = InequalityToEquality::default().convert(&problem).unwrap();
        let result = conversion.interpret(&[1.0]);
        assert_eq!(
            result,
            Err(ConvertError::SolutionLength {
                expected: 2,
                actual: 1
            })
        );
    }
}
