//! Password hashing capability

use crate::error::DashboardResult;

/// Opaque hash/verify capability used by login
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> DashboardResult<String>;

    /// `Ok(false)` on mismatch; `Err` only when the primitive itself fails
    fn verify(&self, password: &str, hash: &str) -> DashboardResult<bool>;
}

/// bcrypt with a configurable work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub const DEFAULT_COST: u32 = 10;

    /// Cheapest work factor bcrypt accepts
    pub const MIN_COST: u32 = 4;

    /// Most expensive work factor bcrypt accepts
    pub const MAX_COST: u32 = 31;

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> DashboardResult<String> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    fn verify(&self, password: &str, hash: &str) -> DashboardResult<bool> {
        Ok(bcrypt::verify(password, hash)?)
    }
}
