use serde::{Deserialize, Serialize};

/// Money amount in minor currency units to avoid floating point issues.
///
/// Prices in the catalog are non-negative, so the amount is unsigned;
/// subtraction is not offered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a money amount from minor units.
    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity, saturating at the representable maximum.
    ///
    /// Quantities come from persisted data, so arithmetic must not wrap on
    /// hostile input.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_minor_preserves_value() {
        let money = Money::from_minor(1234);
        assert_eq!(money.minor(), 1234);
    }

    #[test]
    fn zero_is_zero() {
        assert!(Money::zero().is_zero());
        assert!(!Money::from_minor(1).is_zero());
    }

    #[test]
    fn multiply_by_quantity() {
        let price = Money::from_minor(150);
        assert_eq!(price.multiply(3).minor(), 450);
        assert_eq!(price.multiply(0).minor(), 0);
    }

    #[test]
    fn add_and_add_assign() {
        let mut total = Money::from_minor(100);
        total += Money::from_minor(50);
        assert_eq!((total + Money::from_minor(25)).minor(), 175);
    }

    #[test]
    fn sum_over_iterator() {
        let total: Money = [150, 150, 300].iter().map(|&m| Money::from_minor(m)).sum();
        assert_eq!(total.minor(), 600);
    }

    #[test]
    fn arithmetic_saturates_instead_of_wrapping() {
        let huge = Money::from_minor(u64::MAX / 2);
        assert_eq!(huge.multiply(u32::MAX), Money::from_minor(u64::MAX));
        assert_eq!(huge + huge + huge, Money::from_minor(u64::MAX));

        let mut total = Money::from_minor(u64::MAX);
        total += Money::from_minor(1);
        assert_eq!(total, Money::from_minor(u64::MAX));
    }

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&Money::from_minor(300)).unwrap(), "300");
        let back: Money = serde_json::from_str("300").unwrap();
        assert_eq!(back.minor(), 300);
    }

    #[test]
    fn ordering_follows_amount() {
        assert!(Money::from_minor(150) < Money::from_minor(300));
    }
}
