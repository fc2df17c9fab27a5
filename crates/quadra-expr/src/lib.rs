//! Expression layer for quadratic programming models.

pub mod expr;
pub mod ids;
pub mod interval;

pub use expr::{ConstraintSense, LinearExpr, QuadraticExpr};
pub use ids::VariableId;
pub use interval::{Bounds, Interval};
