/// 시간 단위. 내부 기준은 분이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Minute,
    Second,
    Hour,
    Day,
}

fn to_minute(value: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Minute => value,
        DurationUnit::Second => value / 60.0,
        DurationUnit::Hour => value * 60.0,
        DurationUnit::Day => value * 1440.0,
    }
}

fn from_minute(value_min: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Minute => value_min,
        DurationUnit::Second => value_min * 60.0,
        DurationUnit::Hour => value_min / 60.0,
        DurationUnit::Day => value_min / 1440.0,
    }
}

/// 시간을 변환한다.
pub fn convert_duration(value: f64, from: DurationUnit, to: DurationUnit) -> f64 {
    let min = to_minute(value, from);
    from_minute(min, to)
}
