use super::curve_db::{self, CurvePoint, PumpCurveData};
use super::rated_power;

/// 합산 토출량이 이 값 이하이면 배수 시간을 산정하지 않는다. [LPM]
pub const MIN_DISCHARGE_LPM: f64 = 1e-9;

/// 1 kL = 1000 L.
pub const LITERS_PER_KILOLITER: f64 = 1000.0;

/// 하루 = 1440분.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// 성능 계산 입력.
#[derive(Debug, Clone)]
pub struct PerformanceInput {
    /// 펌프 모델명 (대소문자 무시 조회)
    pub model: String,
    /// 운전 양정 [m]
    pub head_m: f64,
    /// 집수정 용량 [kL]
    pub sump_volume_kl: f64,
    /// 동시 운전 펌프 대수
    pub pump_count: u32,
    /// 전력 단가 [통화단위/kWh]
    pub cost_per_kwh: f64,
    /// 펌프 효율 [%]. 0보다 커야 한다.
    pub efficiency_percent: f64,
}

/// 곡선 보간 결과.
#[derive(Debug, Clone, Copy)]
pub struct InterpolatedFlow {
    /// 보간(외삽)된 토출량 [LPM]. 음수는 0으로 클램프된다.
    pub flow_lpm: f64,
    /// true면 입력 양정이 측정 범위 밖이라 외삽되었음을 의미한다.
    pub extrapolated: bool,
    /// true면 외삽 결과가 음수여서 0으로 잘렸음을 의미한다.
    pub clamped_negative: bool,
}

/// 효율·대수 반영 토출량.
#[derive(Debug, Clone, Copy)]
pub struct Discharge {
    /// 1대당 토출량 [LPM]
    pub per_pump_lpm: f64,
    /// 합산 토출량 [LPM]
    pub total_lpm: f64,
}

/// 집수정 배수 소요 시간.
#[derive(Debug, Clone, Copy)]
pub struct EmptyingTime {
    pub minutes: f64,
    pub days: f64,
}

/// 소비 전력과 배수 완료까지의 전력 요금.
#[derive(Debug, Clone, Copy)]
pub struct PowerCost {
    /// 정격 출력 [kW]
    pub rated_kw: f64,
    /// 1대당 소비 전력 [kW]
    pub per_pump_kw: f64,
    /// 합산 소비 전력 [kW]
    pub total_kw: f64,
    /// 전력 요금 [통화단위]
    pub total_cost: f64,
}

/// 정상 결과에 첨부되는 주의/안내 플래그.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// 입력 양정이 곡선의 측정 범위 밖이라 외삽되었다.
    HeadOutOfRange {
        head_m: f64,
        min_head_m: f64,
        max_head_m: f64,
    },
    /// 외삽 토출량이 음수로 계산되어 0으로 처리되었다.
    NegativeFlowClamped,
    /// 모델명에서 정격 마력을 찾지 못해 전력/요금을 계산하지 않았다.
    NoRatedPower,
    /// 합산 토출량이 0에 가까워 배수 시간을 산정할 수 없다.
    IndeterminateTime,
}

/// 성능 계산 전체 결과.
///
/// 치명 오류가 아닌 조건은 해당 필드만 None으로 두고 나머지 값은
/// 그대로 반환한다. 부분 결과를 버리지 않는다.
#[derive(Debug, Clone)]
pub struct PerformanceResult {
    /// 효율 반영 1대당 토출량 [LPM]
    pub per_pump_discharge_lpm: f64,
    /// 효율 반영 합산 토출량 [LPM]
    pub total_discharge_lpm: f64,
    /// 배수 시간. 합산 토출량이 0에 가까우면 None.
    pub emptying_time: Option<EmptyingTime>,
    /// 소비 전력/요금. 정격 마력이 없거나 배수 시간이 없으면 None.
    pub power_cost: Option<PowerCost>,
    /// 주의/안내 플래그 모음
    pub advisories: Vec<Advisory>,
}

/// 성능 계산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum PerformanceError {
    /// 저장소에 없는 모델명
    ModelNotFound(String),
    /// 곡선의 서로 다른 양정 점이 2개 미만
    InsufficientData(String),
    /// 효율이 0 이하
    InvalidEfficiency(f64),
}

impl std::fmt::Display for PerformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceError::ModelNotFound(m) => write!(f, "등록되지 않은 펌프 모델: {m}"),
            PerformanceError::InsufficientData(m) => {
                write!(f, "보간에 필요한 곡선 데이터 부족: {m}")
            }
            PerformanceError::InvalidEfficiency(e) => write!(f, "효율은 0보다 커야 함: {e}"),
        }
    }
}

impl std::error::Error for PerformanceError {}

/// 곡선의 측정 양정 범위(최소, 최대)를 반환한다. 점이 없으면 None.
pub fn head_range(curve: &PumpCurveData) -> Option<(f64, f64)> {
    let first = curve.points.first()?;
    let mut min = first.head_m;
    let mut max = first.head_m;
    for p in curve.points {
        min = min.min(p.head_m);
        max = max.max(p.head_m);
    }
    Some((min, max))
}

/// 곡선을 양정 오름차순으로 선형 보간해 토출량을 구한다.
///
/// 입력 양정이 측정 범위 밖이면 가장자리 구간의 기울기로 외삽한다.
/// 음수 결과는 물리적으로 불가능하므로 0으로 클램프한다.
pub fn interpolate_flow(
    curve: &PumpCurveData,
    head_m: f64,
) -> Result<InterpolatedFlow, PerformanceError> {
    let points = sorted_points(curve)?;
    let min_head = points[0].head_m;
    let max_head = points[points.len() - 1].head_m;
    let extrapolated = head_m < min_head || head_m > max_head;

    let segment = points
        .windows(2)
        .find(|win| head_m >= win[0].head_m && head_m <= win[1].head_m);
    let (a, b) = match segment {
        Some(win) => (win[0], win[1]),
        // 범위 밖: 가장 가까운 가장자리 구간으로 외삽
        None if head_m < min_head => (points[0], points[1]),
        None => (points[points.len() - 2], points[points.len() - 1]),
    };

    let raw = segment_flow(a, b, head_m);
    let clamped_negative = raw < 0.0;
    Ok(InterpolatedFlow {
        flow_lpm: if clamped_negative { 0.0 } else { raw },
        extrapolated,
        clamped_negative,
    })
}

/// 효율과 운전 대수를 반영한 토출량을 계산한다.
pub fn compute_discharge(
    flow_lpm: f64,
    efficiency_percent: f64,
    pump_count: u32,
) -> Result<Discharge, PerformanceError> {
    if efficiency_percent <= 0.0 {
        return Err(PerformanceError::InvalidEfficiency(efficiency_percent));
    }
    let per_pump_lpm = flow_lpm * (efficiency_percent / 100.0);
    Ok(Discharge {
        per_pump_lpm,
        total_lpm: per_pump_lpm * f64::from(pump_count),
    })
}

/// 집수정 용량과 합산 토출량으로 배수 시간을 계산한다.
/// 합산 토출량이 0에 가까우면 None(산정 불가)을 반환한다.
pub fn compute_emptying_time(
    sump_volume_liters: f64,
    total_discharge_lpm: f64,
) -> Option<EmptyingTime> {
    if total_discharge_lpm <= MIN_DISCHARGE_LPM {
        return None;
    }
    let minutes = sump_volume_liters / total_discharge_lpm;
    Some(EmptyingTime {
        minutes,
        days: minutes / MINUTES_PER_DAY,
    })
}

/// 정격 마력 기반 소비 전력과 배수 완료까지의 전력 요금을 계산한다.
/// 모델명에 정격 마력 토큰이 없으면 None을 반환한다.
pub fn compute_power_and_cost(
    model: &str,
    efficiency_percent: f64,
    pump_count: u32,
    time_to_empty_minutes: f64,
    cost_per_kwh: f64,
) -> Option<PowerCost> {
    let rated_kw = rated_power::rated_kw_from_model(model)?;
    let per_pump_kw = rated_kw * (efficiency_percent / 100.0);
    let total_kw = per_pump_kw * f64::from(pump_count);
    let hours = time_to_empty_minutes / 60.0;
    Some(PowerCost {
        rated_kw,
        per_pump_kw,
        total_kw,
        total_cost: total_kw * hours * cost_per_kwh,
    })
}

/// 성능 계산 단일 진입점. 모델명으로 곡선을 조회한 뒤 계산한다.
pub fn calculate(input: &PerformanceInput) -> Result<PerformanceResult, PerformanceError> {
    let curve = curve_db::find_pump(&input.model)
        .ok_or_else(|| PerformanceError::ModelNotFound(input.model.clone()))?;
    calculate_with_curve(curve, input)
}

/// 조회를 마친 곡선으로 성능을 계산한다. `input.model`은 무시한다.
///
/// 곡선 보간 → 효율·대수 반영 → 배수 시간 → 전력/요금 순으로 이어
/// 계산하고 주의 플래그를 수집한다. 뒤 단계가 산정 불가여도 앞 단계
/// 결과는 그대로 반환한다.
pub fn calculate_with_curve(
    curve: &PumpCurveData,
    input: &PerformanceInput,
) -> Result<PerformanceResult, PerformanceError> {
    let flow = interpolate_flow(curve, input.head_m)?;
    let mut advisories = Vec::new();
    if flow.extrapolated {
        if let Some((min_head_m, max_head_m)) = head_range(curve) {
            advisories.push(Advisory::HeadOutOfRange {
                head_m: input.head_m,
                min_head_m,
                max_head_m,
            });
        }
    }
    if flow.clamped_negative {
        advisories.push(Advisory::NegativeFlowClamped);
    }

    let discharge = compute_discharge(flow.flow_lpm, input.efficiency_percent, input.pump_count)?;
    let sump_volume_liters = input.sump_volume_kl * LITERS_PER_KILOLITER;
    let emptying_time = compute_emptying_time(sump_volume_liters, discharge.total_lpm);

    let power_cost = match emptying_time {
        Some(time) => {
            // 마력은 곡선에 수록된 정식 모델명에서 추출한다.
            let pc = compute_power_and_cost(
                curve.model,
                input.efficiency_percent,
                input.pump_count,
                time.minutes,
                input.cost_per_kwh,
            );
            if pc.is_none() {
                advisories.push(Advisory::NoRatedPower);
            }
            pc
        }
        None => {
            advisories.push(Advisory::IndeterminateTime);
            None
        }
    };

    Ok(PerformanceResult {
        per_pump_discharge_lpm: discharge.per_pump_lpm,
        total_discharge_lpm: discharge.total_lpm,
        emptying_time,
        power_cost,
        advisories,
    })
}

/// 양정 오름차순 정렬(안정 정렬) 후 동일 양정은 마지막 값만 남긴다.
fn sorted_points(curve: &PumpCurveData) -> Result<Vec<CurvePoint>, PerformanceError> {
    if curve.points.len() < 2 {
        return Err(PerformanceError::InsufficientData(curve.model.to_string()));
    }
    let mut pts = curve.points.to_vec();
    pts.sort_by(|a, b| a.head_m.total_cmp(&b.head_m));
    let mut deduped: Vec<CurvePoint> = Vec::with_capacity(pts.len());
    for p in pts {
        match deduped.last_mut() {
            Some(last) if last.head_m == p.head_m => *last = p,
            _ => deduped.push(p),
        }
    }
    if deduped.len() < 2 {
        return Err(PerformanceError::InsufficientData(curve.model.to_string()));
    }
    Ok(deduped)
}

fn segment_flow(a: CurvePoint, b: CurvePoint, head_m: f64) -> f64 {
    let frac = (head_m - a.head_m) / (b.head_m - a.head_m);
    a.flow_lpm + frac * (b.flow_lpm - a.flow_lpm)
}
