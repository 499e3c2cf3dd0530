use std::fmt::{Debug, Display, Formatter};

use ecometrics_analytics::ratios::Trend;
use ecometrics_quantities::ratio::Percentage;

/// Signed variation with its trend arrow, for example `↑ +12.5%`.
pub struct FormattedVariation(pub Percentage);

impl FormattedVariation {
    pub fn trend(&self) -> Trend {
        Trend::from(self.0)
    }
}

impl Debug for FormattedVariation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedVariation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let arrow = match self.trend() {
            Trend::Increase => '↑',
            Trend::Decrease => '↓',
            Trend::Stable => '→',
        };
        let variation = if self.0.0.is_nan() { 0.0 } else { self.0.0 };
        write!(f, "{arrow} {variation:+.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase() {
        assert_eq!(FormattedVariation(Percentage(12.49)).to_string(), "↑ +12.5%");
    }

    #[test]
    fn test_decrease() {
        assert_eq!(FormattedVariation(Percentage(-4.0)).to_string(), "↓ -4.0%");
    }

    #[test]
    fn test_stable() {
        assert_eq!(FormattedVariation(Percentage(0.4)).to_string(), "→ +0.4%");
        assert_eq!(FormattedVariation(Percentage(f64::NAN)).to_string(), "→ +0.0%");
    }
}
