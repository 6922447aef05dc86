use crate::pump::HP_TO_KW;

/// 동력 단위. 내부 기준은 킬로와트이다.
///
/// 마력은 펌프 모델명 표기와 같은 기계 마력(1 HP = 0.7457 kW)을 쓰며
/// 정격 출력 계산과 동일한 환산 계수를 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUnit {
    Kilowatt,
    Watt,
    Horsepower,
}

fn to_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Horsepower => value * HP_TO_KW,
    }
}

fn from_kilowatt(value_kw: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value_kw,
        PowerUnit::Watt => value_kw * 1000.0,
        PowerUnit::Horsepower => value_kw / HP_TO_KW,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = to_kilowatt(value, from);
    from_kilowatt(kw, to)
}
