//! Money type for representing prices and totals.
//!
//! Amounts are whole units of the smallest denomination the storefront
//! prices in (rubles). Integer arithmetic avoids the floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A non-negative monetary amount in minor units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(0);

    /// Largest representable amount; used as the open upper price bound.
    pub const MAX: Money = Money(u64::MAX);

    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "\u{20bd}";

    /// Create a new Money value from minor units.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Amount in minor units.
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating at [`Money::MAX`].
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Add another amount, saturating at [`Money::MAX`].
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Sum an iterator of amounts.
    pub fn sum(iter: impl IntoIterator<Item = Money>) -> Money {
        iter.into_iter().fold(Money::ZERO, Money::saturating_add)
    }

    /// Format as a display string (e.g., "2499 ₽").
    pub fn display(self) -> String {
        format!("{} {}", self.0, Self::SYMBOL)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
