/// 체적 단위. 내부 기준은 입방미터이다.
///
/// 집수정 용량 입력에 쓰이는 킬로리터(kL)는 입방미터와 같은 크기이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    CubicMeter,
    Kiloliter,
    Liter,
    Milliliter,
    CubicFoot,
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Kiloliter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::Milliliter => value / 1_000_000.0,
        VolumeUnit::CubicFoot => value * 0.0283168,
    }
}

fn from_cubic_meter(value_m3: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value_m3,
        VolumeUnit::Kiloliter => value_m3,
        VolumeUnit::Liter => value_m3 * 1000.0,
        VolumeUnit::Milliliter => value_m3 * 1_000_000.0,
        VolumeUnit::CubicFoot => value_m3 / 0.0283168,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
