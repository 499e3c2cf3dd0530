quantity!(
    /// Mass of emitted carbon dioxide.
    KilogramsCo2,
    "kg CO₂"
);

quantity!(TonnesCo2, "t CO₂");

impl From<KilogramsCo2> for TonnesCo2 {
    fn from(kilograms: KilogramsCo2) -> Self {
        Self(kilograms.0 * 0.001)
    }
}
