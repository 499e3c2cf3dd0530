#[macro_use]
mod macros;

pub mod area;
pub mod cost;
pub mod emissions;
pub mod energy;
pub mod power;
pub mod ratio;
pub mod time;

#[cfg(test)]
mod tests {
    use crate::power::Kilowatts;

    #[test]
    fn test_min() {
        assert_eq!(Kilowatts(1.0).min(Kilowatts(2.0)), Kilowatts(1.0));
        assert_eq!(Kilowatts(2.0).min(Kilowatts(1.0)), Kilowatts(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Kilowatts(1.0).max(Kilowatts(2.0)), Kilowatts(2.0));
        assert_eq!(Kilowatts(2.0).max(Kilowatts(1.0)), Kilowatts(2.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Kilowatts(1.0).clamp(Kilowatts(2.0), Kilowatts(3.0)), Kilowatts(2.0));
        assert_eq!(Kilowatts(4.0).clamp(Kilowatts(2.0), Kilowatts(3.0)), Kilowatts(3.0));
        assert_eq!(Kilowatts(2.0).clamp(Kilowatts(1.0), Kilowatts(3.0)), Kilowatts(2.0));
    }

    #[test]
    fn test_nan_is_ordered() {
        assert!(Kilowatts(f64::NAN) > Kilowatts(f64::INFINITY));
        assert_eq!(Kilowatts(f64::NAN), Kilowatts(f64::NAN));
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.1}", Kilowatts(1.26)), "1.3 kW");
        assert_eq!(format!("{:?}", Kilowatts(2.0)), "2.0kW");
    }

    #[test]
    fn test_sum() {
        let total: Kilowatts = [Kilowatts(1.0), Kilowatts(2.5)].into_iter().sum();
        assert_eq!(total, Kilowatts(3.5));
    }
}
