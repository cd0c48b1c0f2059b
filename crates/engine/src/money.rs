use std::{
    fmt,
    ops::{Add, Sub},
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Signed money amount backed by an exact decimal.
///
/// Use this type for **all** monetary values in the engine (expense amounts,
/// shares, debt edges) to avoid floating-point drift. Shares produced by
/// [`Money::split`] are *not* rounded: rounding to cents happens only when a
/// report is produced (see [`Money::round_cents`]).
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::from_cents(12_34);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(Decimal);

/// Debts at or below one cent are considered paid off.
pub const SETTLED_THRESHOLD: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Wraps an arbitrary decimal value.
    #[must_use]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying decimal, unrounded.
    #[must_use]
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `true` once the amount no longer counts as an outstanding
    /// debt (`<= 0.01`).
    #[must_use]
    pub fn is_settled(self) -> bool {
        self <= SETTLED_THRESHOLD
    }

    /// Exact share of this amount divided among `parts` people.
    ///
    /// Returns `None` when `parts` is 0.
    #[must_use]
    pub fn split(self, parts: usize) -> Option<Money> {
        if parts == 0 {
            return None;
        }
        self.0.checked_div(Decimal::from(parts)).map(Money)
    }

    /// Rounds to the nearest cent, half away from zero.
    #[must_use]
    pub fn round_cents(self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.round_cents().0;
        rounded.rescale(2);
        write!(f, "{rounded}")
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}
