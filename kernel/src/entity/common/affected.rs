use vodca::{AsRefln, Fromln};

/// Row count reported by a write statement. Zero means the target row did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct RowsAffected(u64);

impl RowsAffected {
    pub fn new(value: impl Into<u64>) -> Self {
        Self(value.into())
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
