use std::ops::{Div, Mul};

use crate::{energy::KilowattHours, time::Hours};

quantity!(Kilowatts, "kW");
quantity!(Megawatts, "MW");

impl From<Kilowatts> for Megawatts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 * 0.001)
    }
}

impl From<Megawatts> for Kilowatts {
    fn from(megawatts: Megawatts) -> Self {
        Self(megawatts.0 * 1000.0)
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        KilowattHours(self.0 * hours.0)
    }
}

impl Div<Kilowatts> for KilowattHours {
    type Output = Hours;

    fn div(self, power: Kilowatts) -> Self::Output {
        Hours(self.0 / power.0)
    }
}
