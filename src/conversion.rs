use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m`, `kL`, `LPM`, `m3/h`, `kW`, `HP`, `min`, `day` 등을
/// 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::FlowRate => {
            let from = parse_flow_rate_unit(from_unit_str)?;
            let to = parse_flow_rate_unit(to_unit_str)?;
            Ok(convert_flow_rate(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Duration => {
            let from = parse_duration_unit(from_unit_str)?;
            let to = parse_duration_unit(to_unit_str)?;
            Ok(convert_duration(value, from, to))
        }
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "kl" | "kiloliter" | "kilolitre" => Ok(VolumeUnit::Kiloliter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_flow_rate_unit(s: &str) -> Result<FlowRateUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "lpm" | "l/min" => Ok(FlowRateUnit::LiterPerMinute),
        "lps" | "l/s" => Ok(FlowRateUnit::LiterPerSecond),
        "m3/h" | "m^3/h" | "cmh" => Ok(FlowRateUnit::CubicMeterPerHour),
        "m3/min" | "m^3/min" => Ok(FlowRateUnit::CubicMeterPerMinute),
        "gpm" | "gal/min" => Ok(FlowRateUnit::GallonPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "w" | "watt" => Ok(PowerUnit::Watt),
        "hp" | "horsepower" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_duration_unit(s: &str) -> Result<DurationUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "min" | "minute" => Ok(DurationUnit::Minute),
        "s" | "sec" | "second" => Ok(DurationUnit::Second),
        "h" | "hr" | "hour" => Ok(DurationUnit::Hour),
        "d" | "day" => Ok(DurationUnit::Day),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
