//! Money types for menu pricing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative amount in whole currency units
///
/// Menu prices are always whole units, so the amount is stored as an
/// unsigned integer and negative totals are unrepresentable. All
/// arithmetic saturates at the representable bounds instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Price(pub u32);

impl Price {
    /// The zero price
    pub const ZERO: Self = Self(0);

    /// Create a price from whole currency units
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Get the amount in whole currency units
    pub const fn amount(self) -> u32 {
        self.0
    }

    /// Subtract another price, clamping at zero
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
