quantity!(
    /// Signed percentage, `100.0` being the whole.
    Percentage,
    "%"
);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    pub const fn from_ratio(ratio: f64) -> Self {
        Self(ratio * 100.0)
    }

    /// Convert the percentage back into a ratio, `1.0` being the whole.
    pub const fn to_ratio(self) -> f64 {
        0.01 * self.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_ratio() {
        assert_abs_diff_eq!(Percentage::from_ratio(0.25).0, 25.0);
        assert_abs_diff_eq!(Percentage(12.5).to_ratio(), 0.125);
    }
}
