use chrono::TimeDelta;

quantity!(Hours, "h");

impl Hours {
    pub const ONE: Self = Self(1.0);
    pub const ONE_DAY: Self = Self(24.0);
}

impl From<TimeDelta> for Hours {
    fn from(time_delta: TimeDelta) -> Self {
        Self(time_delta.as_seconds_f64() / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_time_delta() {
        assert_abs_diff_eq!(Hours::from(TimeDelta::minutes(90)).0, 1.5);
    }
}
