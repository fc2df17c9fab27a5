//! Sparse linear expressions keyed by variable id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::VariableId;
use crate::interval::{linear_term_interval, Bounds, Interval};

/// A linear expression: one coefficient per variable.
///
/// Zero coefficients are dropped on insertion; inserting a term for a
/// variable that already has one accumulates into the existing coefficient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearExpr {
    terms: BTreeMap<VariableId, f64>,
}

impl LinearExpr {
    // ── Constructors ────────────────────────────────────────

    /// Empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expression from (variable, coefficient) pairs.
    pub fn from_terms(terms: impl IntoIterator<Item = (VariableId, f64)>) -> Self {
        let mut expr = Self::new();
        for (var_id, coeff) in terms {
            expr.add_term(var_id, coeff);
        }
        expr
    }

    /// Expression from a dense coefficient array; index = variable id.
    pub fn from_dense(values: &[f64]) -> Self {
        Self::from_terms(
            values
                .iter()
                .enumerate()
                .map(|(index, &coeff)| (VariableId::new(index as u32), coeff)),
        )
    }

    // ── Accessors ───────────────────────────────────────────

    /// Coefficient of a variable; zero when the variable has no term.
    pub fn coefficient(&self, var_id: VariableId) -> f64 {
        self.terms.get(&var_id).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, f64)> + '_ {
        self.terms.iter().map(|(&var_id, &coeff)| (var_id, coeff))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest variable id referenced by any term.
    pub fn max_variable_id(&self) -> Option<VariableId> {
        self.terms.keys().next_back().copied()
    }

    /// Dense coefficient array of length `num_variables`.
    pub fn to_dense(&self, num_variables: usize) -> Vec<f64> {
        let mut dense = vec![0.0; num_variables];
        for (var_id, coeff) in self.iter() {
            dense[var_id.index()] = coeff;
        }
        dense
    }

    // ── Operations ──────────────────────────────────────────

    /// Accumulate `coeff * var` into the expression.
    pub fn add_term(&mut self, var_id: VariableId, coeff: f64) {
        if coeff == 0.0 {
            return;
        }
        let entry = self.terms.entry(var_id).or_insert(0.0);
        *entry += coeff;
        if *entry == 0.0 {
            self.terms.remove(&var_id);
        }
    }

    /// Whether any coefficient has a fractional part.
    pub fn any_fractional(&self) -> bool {
        self.terms.values().any(|coeff| coeff.fract() != 0.0)
    }

    /// Achievable range of the expression under the given variable bounds.
    ///
    /// `bounds` is indexed by variable id. Panics if a term references a
    /// variable outside `bounds`.
    pub fn interval(&self, bounds: &[Bounds]) -> Interval {
        self.iter().fold(Interval::ZERO, |acc, (var_id, coeff)| {
            acc.add(linear_term_interval(coeff, bounds[var_id.index()]))
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn x() -> VariableId {
        VariableId::new(0)
    }

    fn y() -> VariableId {
        VariableId::new(1)
    }

    #[test]
    fn add_term_accumulates_duplicates() {
        let mut expr = LinearExpr::new();
        expr.add_term(x(), 2.0);
        expr.add_term(x(), 3.0);
        assert_eq!(expr.coefficient(x()), 5.0);
        assert_eq!(expr.len(), 1);
    }

    #[test]
    fn add_term_drops_zeroed_terms() {
        let mut expr = LinearExpr::new();
        expr.add_term(x(), 2.0);
        expr.add_term(x(), -2.0);
        assert!(expr.is_empty());
    }

    #[test]
    fn from_terms_filters_zero_coefficients() {
        let expr = LinearExpr::from_terms([(x(), 0.0), (y(), 3.5)]);
        assert_eq!(expr.len(), 1);
        assert_eq!(expr.coefficient(y()), 3.5);
    }

    #[test]
    fn missing_term_has_zero_coefficient() {
        let expr = LinearExpr::new();
        assert_eq!(expr.coefficient(x()), 0.0);
    }

    #[test]
    fn dense_roundtrip() {
        let expr = LinearExpr::from_dense(&[1.0, 0.0, -2.5]);
        assert_eq!(expr.len(), 2);
        assert_eq!(expr.to_dense(3), vec![1.0, 0.0, -2.5]);
    }

    #[test]
    fn max_variable_id_tracks_largest_term() {
        let expr = LinearExpr::from_terms([(y(), 1.0), (x(), 1.0)]);
        assert_eq!(expr.max_variable_id(), Some(y()));
        assert_eq!(LinearExpr::new().max_variable_id(), None);
    }

    #[test]
    fn any_fractional_detects_non_integral_coefficients() {
        assert!(!LinearExpr::from_terms([(x(), 2.0), (y(), -3.0)]).any_fractional());
        assert!(LinearExpr::from_terms([(x(), 2.0), (y(), 0.5)]).any_fractional());
    }

    #[test]
    fn interval_sums_term_ranges() {
        let expr = LinearExpr::from_terms([(x(), 1.0), (y(), -2.0)]);
        let bounds = [Bounds::new(0.0, 10.0), Bounds::new(-1.0, 3.0)];
        assert_eq!(expr.interval(&bounds), Interval::new(-6.0, 12.0));
    }

    #[test]
    fn interval_of_empty_expression_is_zero() {
        assert_eq!(LinearExpr::new().interval(&[]), Interval::ZERO);
    }
}
