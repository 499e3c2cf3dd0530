quantity!(Euros, "€");

quantity!(
    /// Cost of one kilowatt-hour, or of one kilowatt-hour equivalent.
    EurosPerKilowattHour,
    "€/kWh"
);

impl Euros {
    pub const ONE_CENT: Self = Self(0.01);
}
