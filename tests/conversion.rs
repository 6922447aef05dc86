//! 단위 변환 회귀 테스트.
use pump_performance_toolbox::conversion::{convert, ConversionError};
use pump_performance_toolbox::pump::rated_power::rated_kw_from_model;
use pump_performance_toolbox::quantity::QuantityKind;
use pump_performance_toolbox::units::{
    convert_duration, convert_flow_rate, convert_length, convert_power, convert_volume,
    DurationUnit, FlowRateUnit, LengthUnit, PowerUnit, VolumeUnit,
};

#[test]
fn length_meter_foot_roundtrip() {
    let ft = convert_length(1.0, LengthUnit::Meter, LengthUnit::Foot);
    assert!((ft - 3.280_839_895).abs() < 1e-6);
    let m = convert_length(ft, LengthUnit::Foot, LengthUnit::Meter);
    assert!((m - 1.0).abs() < 1e-12);
}

#[test]
fn kiloliter_equals_cubic_meter() {
    let m3 = convert_volume(1000.0, VolumeUnit::Kiloliter, VolumeUnit::CubicMeter);
    assert!((m3 - 1000.0).abs() < 1e-12);
    let liters = convert_volume(2.5, VolumeUnit::Kiloliter, VolumeUnit::Liter);
    assert!((liters - 2500.0).abs() < 1e-12);
}

#[test]
fn flow_lpm_to_cubic_meter_per_hour() {
    // 3840 LPM = 230.4 m3/h. 결과 출력에 쓰는 환산이다.
    let cmh = convert_flow_rate(
        3840.0,
        FlowRateUnit::LiterPerMinute,
        FlowRateUnit::CubicMeterPerHour,
    );
    assert!((cmh - 230.4).abs() < 1e-9);
    let lps = convert_flow_rate(60.0, FlowRateUnit::LiterPerMinute, FlowRateUnit::LiterPerSecond);
    assert!((lps - 1.0).abs() < 1e-12);
}

#[test]
fn power_horsepower_to_kilowatt() {
    let kw = convert_power(30.0, PowerUnit::Horsepower, PowerUnit::Kilowatt);
    assert!((kw - 22.371).abs() < 1e-9);
    let w = convert_power(1.5, PowerUnit::Kilowatt, PowerUnit::Watt);
    assert!((w - 1500.0).abs() < 1e-12);
}

#[test]
fn horsepower_factor_matches_rated_power_chain() {
    // 변환기와 정격 출력 계산은 같은 환산 계수를 공유한다.
    let chain = rated_kw_from_model("DJ-3006 30HP").expect("rated kw");
    let converter = convert_power(30.0, PowerUnit::Horsepower, PowerUnit::Kilowatt);
    assert_eq!(converter, chain);
}

#[test]
fn duration_minutes_days() {
    let days = convert_duration(1440.0, DurationUnit::Minute, DurationUnit::Day);
    assert!((days - 1.0).abs() < 1e-12);
    let minutes = convert_duration(1.5, DurationUnit::Hour, DurationUnit::Minute);
    assert!((minutes - 90.0).abs() < 1e-12);
}

#[test]
fn string_api_accepts_common_spellings() {
    let l = convert(QuantityKind::Volume, 1.0, "kL", "L").expect("kL->L");
    assert!((l - 1000.0).abs() < 1e-12);
    let cmh = convert(QuantityKind::FlowRate, 1000.0, "LPM", "m3/h").expect("LPM->m3/h");
    assert!((cmh - 60.0).abs() < 1e-9);
    let kw = convert(QuantityKind::Power, 1.0, "hp", "kw").expect("hp->kw");
    assert!((kw - 0.7457).abs() < 1e-12);
}

#[test]
fn unknown_unit_is_reported() {
    let err = convert(QuantityKind::Length, 1.0, "furlong", "m").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(u) if u == "furlong"));
}
