//! Human-readable ASCII problem rendering.

use std::fmt::Write as _;

use quadra_expr::{LinearExpr, QuadraticExpr, VariableId};

use super::Problem;

use crate::types::VarKind;

fn append_term(line: &mut String, coeff: f64, term: &str) {
    if line.is_empty() {
        if coeff < 0.0 {
            line.push('-');
        }
    } else if coeff < 0.0 {
        line.push_str(" - ");
    } else {
        line.push_str(" + ");
    }
    let magnitude = coeff.abs();
    if magnitude == 1.0 {
        line.push_str(term);
    } else {
        let _ = write!(line, "{magnitude} {term}");
    }
}

impl Problem {
    fn variable_name(&self, id: VariableId) -> &str {
        &self.variables[id.index()].name
    }

    fn expression_line(
        &self,
        constant: f64,
        linear: &LinearExpr,
        quadratic: &QuadraticExpr,
    ) -> String {
        let mut line = String::new();
        for (var_id, coeff) in linear.iter() {
            append_term(&mut line, coeff, self.variable_name(var_id));
        }
        for (x, y, coeff) in quadratic.iter() {
            let term = if x == y {
                format!("{}^2", self.variable_name(x))
            } else {
                format!("{}*{}", self.variable_name(x), self.variable_name(y))
            };
            append_term(&mut line, coeff, &term);
        }
        if constant != 0.0 || line.is_empty() {
            if line.is_empty() {
                let _ = write!(line, "{constant}");
            } else if constant < 0.0 {
                let _ = write!(line, " - {}", -constant);
            } else {
                let _ = write!(line, " + {constant}");
            }
        }
        line
    }

    /// Render the problem to ASCII: objective, constraints, bounds, and
    /// variable domains.
    pub fn format_ascii(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "problem: {}", self.name);

        let objective = &self.objective;
        let _ = writeln!(
            out,
            "{} {}",
            objective.sense.as_str(),
            self.expression_line(objective.constant, &objective.linear, &objective.quadratic)
        );

        let _ = writeln!(out, "s.t.");
        for constraint in &self.linear_constraints {
            let _ = writeln!(
                out,
                "  {}: {} {} {}",
                constraint.name,
                self.expression_line(0.0, &constraint.linear, &QuadraticExpr::new()),
                constraint.sense.symbol(),
                constraint.rhs
            );
        }
        for constraint in &self.quadratic_constraints {
            let _ = writeln!(
                out,
                "  {}: {} {} {}",
                constraint.name,
                self.expression_line(0.0, &constraint.linear, &constraint.quadratic),
                constraint.sense.symbol(),
                constraint.rhs
            );
        }

        let bounded: Vec<&crate::types::Variable> = self
            .variables
            .iter()
            .filter(|v| v.kind != VarKind::Binary)
            .collect();
        if !bounded.is_empty() {
            let _ = writeln!(out, "bounds");
            for variable in bounded {
                let lower_open = variable.bounds.lower == f64::NEG_INFINITY;
                let upper_open = variable.bounds.upper == f64::INFINITY;
                let line = match (lower_open, upper_open) {
                    (true, true) => format!("{} free", variable.name),
                    (false, true) => format!("{} >= {}", variable.name, variable.bounds.lower),
                    (true, false) => format!("{} <= {}", variable.name, variable.bounds.upper),
                    (false, false) => format!(
                        "{} <= {} <= {}",
                        variable.bounds.lower, variable.name, variable.bounds.upper
                    ),
                };
                let _ = writeln!(out, "  {line}");
            }
        }

        for (heading, kind) in [("integers", VarKind::Integer), ("binaries", VarKind::Binary)] {
            let names: Vec<&str> = self
                .variables
                .iter()
                .filter(|v| v.kind == kind)
                .map(|v| v.name.as_str())
                .collect();
            if !names.is_empty() {
                let _ = writeln!(out, "{heading}");
                let _ = writeln!(out, "  {}", names.join(" "));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_expr::ConstraintSense;

    #[test]
    fn format_ascii_renders_all_sections() {
        let mut problem = Problem::new("diet");
        let x = problem.continuous_var("x", 0.0, 10.0).unwrap();
        let y = problem.integer_var("y", -2.0, 3.0).unwrap();
        let z = problem.binary_var("z").unwrap();

        problem
            .minimize(
                5.0,
                LinearExpr::from_terms([(x, 2.0), (y, -1.0)]),
                QuadraticExpr::from_terms([(x, y, 0.5)]),
            )
            .unwrap();
        problem
            .linear_constraint(
                LinearExpr::from_terms([(x, 1.0), (z, 1.0)]),
                ConstraintSense::LessEqual,
                7.0,
                "cap",
            )
            .unwrap();
        problem
            .quadratic_constraint(
                LinearExpr::new(),
                QuadraticExpr::from_terms([(x, x, 1.0)]),
                ConstraintSense::GreaterEqual,
                4.0,
                "power",
            )
            .unwrap();

        let rendered = problem.format_ascii();
        assert!(rendered.contains("problem: diet"));
        assert!(rendered.contains("minimize 2 x - y + 0.5 x*y + 5"));
        assert!(rendered.contains("cap: x + z <= 7"));
        assert!(rendered.contains("power: x^2 >= 4"));
        assert!(rendered.contains("0 <= x <= 10"));
        assert!(rendered.contains("integers\n  y"));
        assert!(rendered.contains("binaries\n  z"));
    }

    #[test]
    fn format_ascii_handles_free_variables_and_empty_objective() {
        let mut problem = Problem::new("p");
        problem
            .continuous_var("w", f64::NEG_INFINITY, f64::INFINITY)
            .unwrap();

        let rendered = problem.format_ascii();
        assert!(rendered.contains("minimize 0"));
        assert!(rendered.contains("w free"));
    }
}
