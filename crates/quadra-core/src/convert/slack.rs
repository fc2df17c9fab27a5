//! Slack-variable planning: mode resolution, rhs tightening, and
//! interval-derived bound computation for one inequality constraint.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use quadra_expr::{ConstraintSense, Interval, VariableId};

use crate::problem::Problem;

use super::error::ConvertError;

/// Separator between a constraint name and the slack tag in generated
/// variable names. Model variable names are expected not to contain it.
pub const SLACK_SEPARATOR: char = '@';

/// Numeric-domain policy for generated slack variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlackMode {
    /// Every slack variable is an integer variable; constraints with
    /// non-integral coefficients are rejected.
    Integer,
    /// Every slack variable is a continuous variable.
    Continuous,
    /// Integer slack where every coefficient is integral, continuous
    /// otherwise.
    #[default]
    Auto,
}

impl SlackMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SlackMode::Integer => "integer",
            SlackMode::Continuous => "continuous",
            SlackMode::Auto => "auto",
        }
    }

    /// Resolve the slack kind for one constraint.
    ///
    /// `any_fractional` reports coefficient integrality only; the right-hand
    /// side never participates in the decision.
    fn resolve(self, any_fractional: bool, constraint: &str) -> Result<SlackKind, ConvertError> {
        match self {
            SlackMode::Integer if any_fractional => Err(ConvertError::IncompatibleSlackMode {
                constraint: constraint.to_string(),
            }),
            SlackMode::Integer => Ok(SlackKind::Integer),
            SlackMode::Continuous => Ok(SlackKind::Continuous),
            SlackMode::Auto => Ok(if any_fractional {
                SlackKind::Continuous
            } else {
                SlackKind::Integer
            }),
        }
    }
}

impl FromStr for SlackMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(SlackMode::Integer),
            "continuous" => Ok(SlackMode::Continuous),
            "auto" => Ok(SlackMode::Auto),
            other => Err(ConvertError::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Resolved numeric domain of one slack variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlackKind {
    Integer,
    Continuous,
}

impl SlackKind {
    /// Tag appended after the separator in the generated variable name.
    fn tag(self) -> &'static str {
        match self {
            SlackKind::Integer => "int_slack",
            SlackKind::Continuous => "continuous_slack",
        }
    }

    /// Integer slack tightens the rhs toward feasibility (floor for `<=`,
    /// ceil for `>=`); continuous slack keeps it unchanged.
    fn adjust_rhs(self, direction: Inequality, rhs: f64) -> f64 {
        match self {
            SlackKind::Continuous => rhs,
            SlackKind::Integer => match direction {
                Inequality::AtMost => rhs.floor(),
                Inequality::AtLeast => rhs.ceil(),
            },
        }
    }
}

/// The two rewritable senses. `Equal` constraints never reach slack planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inequality {
    /// `<=`
    AtMost,
    /// `>=`
    AtLeast,
}

impl Inequality {
    pub(crate) fn of(sense: ConstraintSense) -> Option<Self> {
        match sense {
            ConstraintSense::LessEqual => Some(Inequality::AtMost),
            ConstraintSense::GreaterEqual => Some(Inequality::AtLeast),
            ConstraintSense::Equal => None,
        }
    }

    /// Room the slack variable must absorb: the distance from the reachable
    /// side of the lhs interval to the adjusted rhs.
    fn slack_bound(self, lhs: Interval, rhs: f64) -> f64 {
        match self {
            Inequality::AtMost => rhs - lhs.lower,
            Inequality::AtLeast => lhs.upper - rhs,
        }
    }

    /// Coefficient of the slack term in the rewritten equality.
    fn sign(self) -> f64 {
        match self {
            Inequality::AtMost => 1.0,
            Inequality::AtLeast => -1.0,
        }
    }
}

/// Outcome of planning one inequality: the adjusted rhs and, when the
/// constraint is not already tight, the slack term to append.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SlackPlan {
    pub rhs: f64,
    pub term: Option<(VariableId, f64)>,
}

/// Plan the rewrite of one inequality constraint, registering the slack
/// variable (if any) in `destination`.
pub(crate) fn plan_slack(
    destination: &mut Problem,
    mode: SlackMode,
    constraint: &str,
    direction: Inequality,
    rhs: f64,
    lhs: Interval,
    any_fractional: bool,
) -> Result<SlackPlan, ConvertError> {
    let kind = mode.resolve(any_fractional, constraint)?;
    let rhs = kind.adjust_rhs(direction, rhs);
    let bound = direction.slack_bound(lhs, rhs);
    if bound <= 0.0 {
        // Already tight in this direction; the constraint becomes a bare
        // equality at the adjusted rhs.
        return Ok(SlackPlan { rhs, term: None });
    }

    let name = format!("{constraint}{SLACK_SEPARATOR}{}", kind.tag());
    let var_id = match kind {
        SlackKind::Integer => destination.integer_var(name, 0.0, bound)?,
        SlackKind::Continuous => destination.continuous_var(name, 0.0, bound)?,
    };
    Ok(SlackPlan {
        rhs,
        term: Some((var_id, direction.sign())),
    })
}
