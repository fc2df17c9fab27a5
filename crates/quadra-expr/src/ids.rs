use serde::{Deserialize, Serialize};

/// Position of a variable within its owning problem.
///
/// Ids are dense: the id of a variable equals its insertion index, so a
/// problem with `n` variables uses exactly the ids `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    /// Create an ID from a u32 value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the inner u32 value.
    pub fn inner(self) -> u32 {
        self.0
    }

    /// The id as a slice index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::VariableId;

    #[test]
    fn variable_id_roundtrip() {
        let id = VariableId::new(7);
        assert_eq!(id.inner(), 7);
        assert_eq!(id.index(), 7);
    }

    #[test]
    fn variable_id_orders_by_value() {
        assert!(VariableId::new(1) < VariableId::new(2));
    }
}
