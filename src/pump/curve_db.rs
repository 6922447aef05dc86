/// 펌프 모델별 성능 곡선(토출량-양정) 테이블을 제공한다.
/// 값은 제조사 성능 곡선 도표를 읽어 정리한 참고치이다.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub flow_lpm: f64,
    pub head_m: f64,
}

impl CurvePoint {
    pub const fn new(flow_lpm: f64, head_m: f64) -> Self {
        Self { flow_lpm, head_m }
    }
}

#[derive(Debug)]
pub struct PumpCurveData {
    /// 모델명. 말미의 "nnHP" 토큰이 정격 마력을 나타낸다.
    pub model: &'static str,
    pub notes: &'static str,
    /// 도표 판독 순서(토출량 오름차순) 그대로 저장한 샘플 점들.
    pub points: &'static [CurvePoint],
}

pub fn pump_curves() -> &'static [PumpCurveData] {
    PUMP_CURVES
}

/// 모델명을 데이터 수록 순서대로 반환한다. UI 선택 목록용.
pub fn model_names() -> Vec<&'static str> {
    PUMP_CURVES.iter().map(|c| c.model).collect()
}

pub fn find_pump(model: &str) -> Option<&'static PumpCurveData> {
    PUMP_CURVES
        .iter()
        .find(|c| c.model.eq_ignore_ascii_case(model.trim()))
}

const PUMP_CURVES: &[PumpCurveData] = &[
    PumpCurveData {
        model: "DJ-10006 100HP",
        notes: "DJ 시리즈 100HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 88.0),
            cp(600.0, 86.0),
            cp(1200.0, 84.0),
            cp(1800.0, 82.0),
            cp(2400.0, 80.0),
            cp(3000.0, 78.0),
            cp(3600.0, 74.0),
            cp(4200.0, 68.0),
            cp(4800.0, 58.0),
            cp(5000.0, 48.0),
            cp(5200.0, 40.0),
            cp(5400.0, 32.0),
        ],
    },
    PumpCurveData {
        model: "DJ-7506 75HP",
        notes: "DJ 시리즈 75HP; (4350, 30) 점은 NOTE 참조",
        points: &[
            cp(0.0, 68.0),
            cp(600.0, 66.0),
            cp(1200.0, 65.0),
            cp(1800.0, 63.0),
            cp(2400.0, 61.0),
            cp(3000.0, 58.0),
            cp(3600.0, 50.0),
            cp(4200.0, 38.0),
            cp(4350.0, 30.0),
            cp(4500.0, 24.0),
            cp(4650.0, 20.0),
            cp(4700.0, 16.0),
        ],
    },
    PumpCurveData {
        model: "DJ-5006 50HP",
        notes: "DJ 시리즈 50HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 60.0),
            cp(600.0, 59.0),
            cp(1200.0, 57.0),
            cp(1800.0, 53.0),
            cp(2400.0, 51.0),
            cp(3000.0, 50.0),
            cp(3600.0, 43.0),
            cp(3600.0, 39.0),
            cp(4200.0, 32.0),
            cp(4500.0, 20.0),
            cp(4650.0, 13.0),
        ],
    },
    PumpCurveData {
        model: "DJ-4006 40HP",
        notes: "DJ 시리즈 40HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 50.0),
            cp(600.0, 49.0),
            cp(1200.0, 47.0),
            cp(1800.0, 44.0),
            cp(2400.0, 40.0),
            cp(3000.0, 34.0),
            cp(3600.0, 26.0),
            cp(4000.0, 18.0),
        ],
    },
    PumpCurveData {
        model: "DJ-3506 35HP",
        notes: "DJ 시리즈 35HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 45.0),
            cp(600.0, 44.0),
            cp(1200.0, 42.0),
            cp(1800.0, 39.0),
            cp(2400.0, 34.0),
            cp(3000.0, 28.0),
            cp(3400.0, 20.0),
        ],
    },
    PumpCurveData {
        model: "DJ-3006 30HP",
        notes: "DJ 시리즈 30HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 47.5),
            cp(400.0, 47.0),
            cp(600.0, 46.0),
            cp(1200.0, 41.0),
            cp(1600.0, 40.0),
            cp(1800.0, 38.0),
            cp(2000.0, 35.0),
            cp(2400.0, 30.0),
            cp(2600.0, 24.0),
            cp(2800.0, 21.0),
            cp(3000.0, 16.0),
            cp(3100.0, 10.0),
        ],
    },
    PumpCurveData {
        model: "DJ-2506 25HP",
        notes: "DJ 시리즈 25HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 43.0),
            cp(400.0, 42.0),
            cp(800.0, 40.0),
            cp(1200.0, 37.0),
            cp(1600.0, 33.0),
            cp(2000.0, 28.0),
            cp(2400.0, 21.0),
            cp(2800.0, 12.0),
        ],
    },
    PumpCurveData {
        model: "DJ-2006 20HP",
        notes: "DJ 시리즈 20HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 37.0),
            cp(400.0, 36.0),
            cp(800.0, 34.0),
            cp(1200.0, 31.0),
            cp(1600.0, 27.0),
            cp(2000.0, 21.0),
            cp(2400.0, 14.0),
            cp(2800.0, 6.0),
        ],
    },
    PumpCurveData {
        model: "DJ-1506 15HP",
        notes: "DJ 시리즈 15HP; 참고용 도표 판독치",
        points: &[
            cp(0.0, 26.0),
            cp(400.0, 25.0),
            cp(800.0, 23.0),
            cp(1200.0, 20.0),
            cp(1600.0, 16.0),
            cp(2000.0, 11.0),
            cp(2400.0, 5.0),
        ],
    },
];

const fn cp(flow_lpm: f64, head_m: f64) -> CurvePoint {
    CurvePoint::new(flow_lpm, head_m)
}

// NOTE:
// - Points are chart readings (flow ascending, head descending); the lookup
//   side sorts by head before interpolating, so the storage order here matches
//   the vendor chart for easy cross-checking.
// - The 75HP point at (4350, 30) appears as flow 43500 in one reprint of the
//   source sheet; 4350 is the only reading consistent with the neighboring
//   points (4200, 38) and (4500, 24), so it is kept as canonical.
// - DJ-5006 lists two readings at flow 3600 (heads 43 and 39); both are kept
//   as printed.
