mod linear;
mod quadratic;
mod sense;

pub use linear::LinearExpr;
pub use quadratic::QuadraticExpr;
pub use sense::ConstraintSense;
