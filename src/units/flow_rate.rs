/// 유량 단위. 내부 기준은 분당 리터(LPM)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRateUnit {
    LiterPerMinute,
    LiterPerSecond,
    CubicMeterPerHour,
    CubicMeterPerMinute,
    GallonPerMinute,
}

fn to_liter_per_minute(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::LiterPerMinute => value,
        FlowRateUnit::LiterPerSecond => value * 60.0,
        FlowRateUnit::CubicMeterPerHour => value * 1000.0 / 60.0,
        FlowRateUnit::CubicMeterPerMinute => value * 1000.0,
        FlowRateUnit::GallonPerMinute => value * 3.785411784,
    }
}

fn from_liter_per_minute(value_lpm: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::LiterPerMinute => value_lpm,
        FlowRateUnit::LiterPerSecond => value_lpm / 60.0,
        FlowRateUnit::CubicMeterPerHour => value_lpm * 60.0 / 1000.0,
        FlowRateUnit::CubicMeterPerMinute => value_lpm / 1000.0,
        FlowRateUnit::GallonPerMinute => value_lpm / 3.785411784,
    }
}

/// 유량을 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> f64 {
    let lpm = to_liter_per_minute(value, from);
    from_liter_per_minute(lpm, to)
}
