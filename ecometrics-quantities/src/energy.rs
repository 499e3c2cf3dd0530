use std::ops::{Div, Mul};

use crate::{
    cost::{Euros, EurosPerKilowattHour},
    power::Kilowatts,
    time::Hours,
};

quantity!(KilowattHours, "kWh");
quantity!(MegawattHours, "MWh");

impl From<KilowattHours> for MegawattHours {
    fn from(kilowatt_hours: KilowattHours) -> Self {
        Self(kilowatt_hours.0 * 0.001)
    }
}

impl From<MegawattHours> for KilowattHours {
    fn from(megawatt_hours: MegawattHours) -> Self {
        Self(megawatt_hours.0 * 1000.0)
    }
}

impl Div<Hours> for KilowattHours {
    type Output = Kilowatts;

    fn div(self, hours: Hours) -> Self::Output {
        Kilowatts(self.0 / hours.0)
    }
}

impl Mul<EurosPerKilowattHour> for KilowattHours {
    type Output = Euros;

    fn mul(self, rate: EurosPerKilowattHour) -> Self::Output {
        Euros(self.0 * rate.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_megawatt_hours() {
        assert_abs_diff_eq!(MegawattHours::from(KilowattHours(2500.0)).0, 2.5);
    }

    #[test]
    fn test_average_power() {
        assert_abs_diff_eq!((KilowattHours(12.0) / Hours(4.0)).0, 3.0);
    }

    #[test]
    fn test_cost() {
        assert_abs_diff_eq!((KilowattHours(100.0) * EurosPerKilowattHour(0.19)).0, 19.0);
    }
}
