//! 배수 성능 계산 회귀 테스트. 기대값은 성능 곡선 표에서 손으로 계산한 값이다.
use pump_performance_toolbox::pump::{
    self, curve_db, Advisory, PerformanceError, PerformanceInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn base_input(model: &str) -> PerformanceInput {
    PerformanceInput {
        model: model.to_string(),
        head_m: 30.0,
        sump_volume_kl: 1000.0,
        pump_count: 2,
        cost_per_kwh: 10.0,
        efficiency_percent: 80.0,
    }
}

#[test]
fn exact_chart_point_full_chain() {
    // DJ-3006 30HP: 양정 30 m은 도표 샘플 (2400, 30)과 정확히 일치한다.
    let res = pump::calculate(&base_input("DJ-3006 30HP")).expect("calculate");
    assert_close("per_pump", res.per_pump_discharge_lpm, 1920.0, 1e-9);
    assert_close("total", res.total_discharge_lpm, 3840.0, 1e-9);

    let time = res.emptying_time.expect("emptying time");
    assert_close("minutes", time.minutes, 1_000_000.0 / 3840.0, 1e-9);
    assert_close("days", time.days, 1_000_000.0 / 3840.0 / 1440.0, 1e-9);

    let power = res.power_cost.expect("power cost");
    assert_close("rated_kw", power.rated_kw, 30.0 * 0.7457, 1e-9);
    assert_close("per_pump_kw", power.per_pump_kw, 17.8968, 1e-9);
    assert_close("total_kw", power.total_kw, 35.7936, 1e-9);
    assert_close("total_cost", power.total_cost, 1553.541_666_666_7, 1e-9);

    assert!(res.advisories.is_empty(), "advisories={:?}", res.advisories);
}

#[test]
fn interpolates_between_chart_points() {
    // DJ-3006 30HP: 양정 37 m은 (1800, 38)과 (2000, 35) 사이 지점.
    let curve = curve_db::find_pump("DJ-3006 30HP").expect("model");
    let flow = pump::interpolate_flow(curve, 37.0).expect("interpolate");
    assert_close("flow", flow.flow_lpm, 1866.666_666_666_7, 1e-9);
    assert!(!flow.extrapolated);
    assert!(!flow.clamped_negative);
}

#[test]
fn canonical_midrange_reading_interpolates_exactly() {
    // DJ-7506 75HP의 (4350, 30) 판독치가 양정 30 m 조회로 그대로 나와야 한다.
    let curve = curve_db::find_pump("DJ-7506 75HP").expect("model");
    let flow = pump::interpolate_flow(curve, 30.0).expect("interpolate");
    assert_close("flow", flow.flow_lpm, 4350.0, 1e-9);
    assert!(!flow.extrapolated);
}

#[test]
fn extrapolates_below_curve_range() {
    // DJ-1506 15HP: 최소 측정 양정 5 m 아래는 (2400, 5)-(2000, 11) 구간
    // 기울기로 외삽한다. 양정 0 m → 2733.33 LPM.
    let curve = curve_db::find_pump("DJ-1506 15HP").expect("model");
    let flow = pump::interpolate_flow(curve, 0.0).expect("interpolate");
    assert_close("flow", flow.flow_lpm, 2733.333_333_333_3, 1e-9);
    assert!(flow.extrapolated);
    assert!(!flow.clamped_negative);
}

#[test]
fn clamps_negative_extrapolation_to_zero() {
    // DJ-10006 100HP: 양정 100 m 외삽 결과는 -3600 LPM이라 0으로 처리된다.
    let curve = curve_db::find_pump("DJ-10006 100HP").expect("model");
    let flow = pump::interpolate_flow(curve, 100.0).expect("interpolate");
    assert_close("flow", flow.flow_lpm, 0.0, 1e-9);
    assert!(flow.extrapolated);
    assert!(flow.clamped_negative);
}

#[test]
fn out_of_range_clamp_keeps_partial_result() {
    // 외삽 + 음수 클램프 + 토출량 0: 배수 시간과 전력은 생략되지만
    // 토출량 결과와 주의 플래그는 그대로 반환된다.
    let mut input = base_input("DJ-3006 30HP");
    input.head_m = 50.0;
    let res = pump::calculate(&input).expect("calculate");
    assert_close("per_pump", res.per_pump_discharge_lpm, 0.0, 1e-9);
    assert_close("total", res.total_discharge_lpm, 0.0, 1e-9);
    assert!(res.emptying_time.is_none());
    assert!(res.power_cost.is_none());

    let has_range = res.advisories.iter().any(|a| {
        matches!(
            a,
            Advisory::HeadOutOfRange { min_head_m, max_head_m, .. }
                if *min_head_m == 10.0 && *max_head_m == 47.5
        )
    });
    assert!(has_range, "advisories={:?}", res.advisories);
    assert!(res.advisories.contains(&Advisory::NegativeFlowClamped));
    assert!(res.advisories.contains(&Advisory::IndeterminateTime));
}

#[test]
fn zero_pump_count_degrades_gracefully() {
    let mut input = base_input("DJ-3006 30HP");
    input.pump_count = 0;
    let res = pump::calculate(&input).expect("calculate");
    assert_close("per_pump", res.per_pump_discharge_lpm, 1920.0, 1e-9);
    assert_close("total", res.total_discharge_lpm, 0.0, 1e-9);
    assert!(res.emptying_time.is_none());
    assert!(res.power_cost.is_none());
    assert_eq!(res.advisories, vec![Advisory::IndeterminateTime]);
}

#[test]
fn zero_sump_volume_empties_instantly() {
    let mut input = base_input("DJ-3006 30HP");
    input.sump_volume_kl = 0.0;
    let res = pump::calculate(&input).expect("calculate");
    let time = res.emptying_time.expect("emptying time");
    assert_close("minutes", time.minutes, 0.0, 1e-9);
    assert_close("days", time.days, 0.0, 1e-9);
    let power = res.power_cost.expect("power cost");
    assert_close("cost", power.total_cost, 0.0, 1e-9);
    assert_close("total_kw", power.total_kw, 35.7936, 1e-9);
}

#[test]
fn rejects_non_positive_efficiency() {
    let mut input = base_input("DJ-3006 30HP");
    input.efficiency_percent = 0.0;
    assert!(matches!(
        pump::calculate(&input),
        Err(PerformanceError::InvalidEfficiency(e)) if e == 0.0
    ));

    input.efficiency_percent = -5.0;
    assert!(matches!(
        pump::calculate(&input),
        Err(PerformanceError::InvalidEfficiency(_))
    ));
}

#[test]
fn discharge_scales_linearly_with_pump_count() {
    let mut two = base_input("DJ-3006 30HP");
    two.pump_count = 2;
    let mut four = base_input("DJ-3006 30HP");
    four.pump_count = 4;
    let res2 = pump::calculate(&two).expect("calculate x2");
    let res4 = pump::calculate(&four).expect("calculate x4");
    assert_close(
        "doubled total",
        res4.total_discharge_lpm,
        res2.total_discharge_lpm * 2.0,
        1e-9,
    );
}

#[test]
fn single_pump_full_efficiency_is_identity() {
    // 1대, 효율 100 %면 합산 토출량이 보간 원값과 같아야 한다.
    let mut input = base_input("DJ-3006 30HP");
    input.pump_count = 1;
    input.efficiency_percent = 100.0;
    let res = pump::calculate(&input).expect("calculate");
    assert_close("per_pump", res.per_pump_discharge_lpm, 2400.0, 1e-9);
    assert_close("total", res.total_discharge_lpm, 2400.0, 1e-9);
}

#[test]
fn efficiency_above_100_scales_up() {
    let mut input = base_input("DJ-3006 30HP");
    input.efficiency_percent = 120.0;
    let res = pump::calculate(&input).expect("calculate");
    assert_close("per_pump", res.per_pump_discharge_lpm, 2880.0, 1e-9);
    assert_close("total", res.total_discharge_lpm, 5760.0, 1e-9);
}

#[test]
fn unknown_model_is_fatal() {
    let input = base_input("DJ-9999 90HP");
    assert!(matches!(
        pump::calculate(&input),
        Err(PerformanceError::ModelNotFound(m)) if m == "DJ-9999 90HP"
    ));
}

#[test]
fn model_lookup_ignores_case_and_whitespace() {
    let res = pump::calculate(&base_input("  dj-3006 30hp  ")).expect("calculate");
    assert_close("per_pump", res.per_pump_discharge_lpm, 1920.0, 1e-9);
    // 정격 마력은 수록된 정식 모델명에서 읽으므로 소문자 입력도 전력이 계산된다.
    assert!(res.power_cost.is_some());
}

#[test]
fn power_cost_requires_hp_token_in_model_name() {
    assert!(pump::compute_power_and_cost("DJ-0000 PUMP", 80.0, 2, 260.0, 10.0).is_none());

    // 60분 = 1시간이므로 요금은 합산 전력 x 단가.
    let pc = pump::compute_power_and_cost("DJ-3006 30HP", 80.0, 2, 60.0, 10.0).expect("power");
    assert_close("rated_kw", pc.rated_kw, 22.371, 1e-9);
    assert_close("total_kw", pc.total_kw, 35.7936, 1e-9);
    assert_close("cost", pc.total_cost, 357.936, 1e-9);
}

#[test]
fn missing_hp_token_skips_power_cost() {
    // 마력 토큰이 없는 모델명: 토출량과 배수 시간은 정상 계산하고
    // 전력/요금만 생략하면서 주의 플래그를 남긴다.
    const NO_HP_POINTS: &[curve_db::CurvePoint] = &[
        curve_db::CurvePoint::new(2400.0, 10.0),
        curve_db::CurvePoint::new(1200.0, 30.0),
    ];
    let curve = curve_db::PumpCurveData {
        model: "TEST PUMP",
        notes: "",
        points: NO_HP_POINTS,
    };
    let mut input = base_input("TEST PUMP");
    input.head_m = 20.0;
    let res = pump::calculate_with_curve(&curve, &input).expect("calculate");
    assert_close("per_pump", res.per_pump_discharge_lpm, 1440.0, 1e-9);
    assert_close("total", res.total_discharge_lpm, 2880.0, 1e-9);
    let time = res.emptying_time.expect("emptying time");
    assert_close("minutes", time.minutes, 1_000_000.0 / 2880.0, 1e-9);
    assert!(res.power_cost.is_none());
    assert_eq!(res.advisories, vec![Advisory::NoRatedPower]);
}

#[test]
fn duplicate_heads_last_reading_wins() {
    const DUP_POINTS: &[curve_db::CurvePoint] = &[
        curve_db::CurvePoint::new(1000.0, 10.0),
        curve_db::CurvePoint::new(1200.0, 20.0),
        curve_db::CurvePoint::new(1400.0, 20.0),
        curve_db::CurvePoint::new(1600.0, 30.0),
    ];
    let curve = curve_db::PumpCurveData {
        model: "TEST 5HP",
        notes: "",
        points: DUP_POINTS,
    };
    // 같은 양정 20 m의 두 판독치 중 나중 값 (1400, 20)이 남는다.
    let exact = pump::interpolate_flow(&curve, 20.0).expect("interpolate");
    assert_close("exact", exact.flow_lpm, 1400.0, 1e-9);
    let mid = pump::interpolate_flow(&curve, 15.0).expect("interpolate");
    assert_close("mid", mid.flow_lpm, 1200.0, 1e-9);
}

#[test]
fn fewer_than_two_distinct_heads_is_fatal() {
    const ONE_POINT: &[curve_db::CurvePoint] = &[curve_db::CurvePoint::new(1000.0, 10.0)];
    let single = curve_db::PumpCurveData {
        model: "TEST-SINGLE",
        notes: "",
        points: ONE_POINT,
    };
    assert!(matches!(
        pump::interpolate_flow(&single, 10.0),
        Err(PerformanceError::InsufficientData(_))
    ));

    const SAME_HEAD: &[curve_db::CurvePoint] = &[
        curve_db::CurvePoint::new(1000.0, 10.0),
        curve_db::CurvePoint::new(1200.0, 10.0),
    ];
    let flat = curve_db::PumpCurveData {
        model: "TEST-FLAT",
        notes: "",
        points: SAME_HEAD,
    };
    assert!(matches!(
        pump::interpolate_flow(&flat, 10.0),
        Err(PerformanceError::InsufficientData(_))
    ));
}

#[test]
fn emptying_time_near_zero_discharge_is_indeterminate() {
    assert!(pump::compute_emptying_time(1000.0, 0.0).is_none());
    assert!(pump::compute_emptying_time(1000.0, 1e-12).is_none());
    let time = pump::compute_emptying_time(1000.0, 1e-6).expect("above threshold");
    assert_close("minutes", time.minutes, 1e9, 1e-9);
}

#[test]
fn head_range_reports_chart_extremes() {
    let big = curve_db::find_pump("DJ-10006 100HP").expect("model");
    assert_eq!(pump::head_range(big), Some((32.0, 88.0)));
    let mid = curve_db::find_pump("DJ-3006 30HP").expect("model");
    assert_eq!(pump::head_range(mid), Some((10.0, 47.5)));
}
