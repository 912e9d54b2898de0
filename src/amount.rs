use std::fmt;

/// Fixed-point currency amount with 2 decimal places, stored as scaled cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 100;

    pub fn from_float(value: f64) -> Self {
        Amount((value * Self::SCALE as f64).round() as i64)
    }

    /// Construct from raw cents.
    pub fn from_cents(value: i64) -> Self {
        Amount(value)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let whole = abs / Self::SCALE;
        let frac = abs % Self::SCALE;
        write!(f, "{sign}{whole}.{frac:02}")
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cents_preserves_value() {
        let amount = Amount::from_cents(123_456);
        assert_eq!(amount, Amount(123_456));
    }

    #[test]
    fn from_float_converts_correctly() {
        assert_eq!(Amount::from_float(100.0), Amount::from_cents(10_000));
        assert_eq!(Amount::from_float(1.5), Amount::from_cents(150));
        assert_eq!(Amount::from_float(0.01), Amount::from_cents(1));
    }

    #[test]
    fn from_float_rounds_correctly() {
        assert_eq!(Amount::from_float(1.234), Amount::from_cents(123));
        assert_eq!(Amount::from_float(1.235), Amount::from_cents(124));
    }

    #[test]
    fn from_float_handles_negative() {
        assert_eq!(Amount::from_float(-50.25), Amount::from_cents(-5_025));
    }

    #[test]
    fn display_formats_positive() {
        assert_eq!(Amount::from_cents(10_000).to_string(), "100.00");
        assert_eq!(Amount::from_cents(150).to_string(), "1.50");
        assert_eq!(Amount::from_cents(1).to_string(), "0.01");
        assert_eq!(Amount::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn display_formats_negative() {
        assert_eq!(Amount::from_cents(-5_025).to_string(), "-50.25");
        assert_eq!(Amount::from_cents(-1).to_string(), "-0.01");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::from_cents(0));
    }

    #[test]
    fn add() {
        let a = Amount::from_cents(100);
        let b = Amount::from_cents(50);
        assert_eq!(a + b, Amount::from_cents(150));
    }

    #[test]
    fn add_assign() {
        let mut a = Amount::from_cents(100);
        a += Amount::from_cents(50);
        assert_eq!(a, Amount::from_cents(150));
    }

    #[test]
    fn sub_assign() {
        let mut a = Amount::from_cents(100);
        a -= Amount::from_cents(30);
        assert_eq!(a, Amount::from_cents(70));
    }

    #[test]
    fn is_negative() {
        assert!(Amount::from_cents(-1).is_negative());
        assert!(!Amount::from_cents(0).is_negative());
        assert!(!Amount::from_cents(1).is_negative());
    }

    #[test]
    fn ordering() {
        let small = Amount::from_cents(100);
        let large = Amount::from_cents(200);
        assert!(small < large);
        assert!(large > small);
    }

    #[test]
    fn negative_ordering() {
        let negative = Amount::from_cents(-100);
        let zero = Amount::from_cents(0);
        let positive = Amount::from_cents(100);
        assert!(negative < zero);
        assert!(zero < positive);
        assert!(negative < positive);
    }
}
