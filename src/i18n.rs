use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PERFORMANCE: &str = "main_menu.performance";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PERF_HEADING: &str = "performance.heading";
    pub const PERF_MODEL_LIST_HEADING: &str = "performance.model_list_heading";
    pub const PERF_MODEL_RANGE: &str = "performance.model_range";
    pub const PERF_PROMPT_MODEL: &str = "performance.prompt_model";
    pub const PERF_UNKNOWN_MODEL_RETRY: &str = "performance.unknown_model_retry";
    pub const PERF_PROMPT_HEAD: &str = "performance.prompt_head";
    pub const PERF_PROMPT_SUMP_VOLUME: &str = "performance.prompt_sump_volume";
    pub const PERF_PROMPT_PUMP_COUNT: &str = "performance.prompt_pump_count";
    pub const PERF_PROMPT_COST_RATE: &str = "performance.prompt_cost_rate";
    pub const PERF_PROMPT_EFFICIENCY: &str = "performance.prompt_efficiency";
    pub const PERF_RESULT_HEADING: &str = "performance.result_heading";
    pub const PERF_RESULT_MODEL: &str = "performance.result_model";
    pub const PERF_RESULT_PER_PUMP_FLOW: &str = "performance.result_per_pump_flow";
    pub const PERF_RESULT_TOTAL_FLOW: &str = "performance.result_total_flow";
    pub const PERF_RESULT_EMPTYING_TIME: &str = "performance.result_emptying_time";
    pub const PERF_RESULT_POWER: &str = "performance.result_power";
    pub const PERF_RESULT_ENERGY_COST: &str = "performance.result_energy_cost";
    pub const PERF_NOTE_EXTRAPOLATED: &str = "performance.note_extrapolated";
    pub const PERF_NOTE_CLAMPED: &str = "performance.note_clamped";
    pub const PERF_NOTE_NO_RATED_POWER: &str = "performance.note_no_rated_power";
    pub const PERF_NOTE_INDETERMINATE: &str = "performance.note_indeterminate";
    pub const UNIT_MINUTES: &str = "unit.minutes";
    pub const UNIT_DAYS: &str = "unit.days";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_DEFAULTS: &str = "settings.current_defaults";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 활성 언어 코드(ko/en)를 반환한다.
    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩에서 키를 조회한다. 팩에 없는 키는 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 우선, 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(v) = self.lookup(key) {
            return Box::leak(v.into_boxed_str());
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pump Performance Toolbox ===",
        MAIN_MENU_PERFORMANCE => "1) 배수 성능 계산",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PERF_HEADING => "\n-- 배수 성능 계산 --",
        PERF_MODEL_LIST_HEADING => "사용 가능한 펌프 모델:",
        PERF_MODEL_RANGE => "양정",
        PERF_PROMPT_MODEL => "모델 번호 또는 모델명: ",
        PERF_UNKNOWN_MODEL_RETRY => "목록에 없는 모델입니다. 다시 선택하세요.",
        PERF_PROMPT_HEAD => "양정 [m]",
        PERF_PROMPT_SUMP_VOLUME => "집수정 용량 [kL]",
        PERF_PROMPT_PUMP_COUNT => "가동 펌프 대수",
        PERF_PROMPT_COST_RATE => "전력 요금",
        PERF_PROMPT_EFFICIENCY => "펌프 효율 [%]",
        PERF_RESULT_HEADING => "\n계산 결과:",
        PERF_RESULT_MODEL => "모델:",
        PERF_RESULT_PER_PUMP_FLOW => "대당 배수량:",
        PERF_RESULT_TOTAL_FLOW => "총 배수량:",
        PERF_RESULT_EMPTYING_TIME => "배수 소요 시간:",
        PERF_RESULT_POWER => "총 소비 동력:",
        PERF_RESULT_ENERGY_COST => "예상 전력 비용:",
        PERF_NOTE_EXTRAPOLATED => "참고: 입력 양정이 곡선 범위를 벗어나 외삽으로 추정했습니다.",
        PERF_NOTE_CLAMPED => "참고: 추정 유량이 음수여서 0으로 처리했습니다.",
        PERF_NOTE_NO_RATED_POWER => "참고: 모델명에서 정격 마력을 읽지 못해 동력/비용을 생략합니다.",
        PERF_NOTE_INDETERMINATE => "참고: 배수량이 0에 가까워 배수 시간을 계산할 수 없습니다.",
        UNIT_MINUTES => "분",
        UNIT_DAYS => "일",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 길이  2) 체적  3) 유량  4) 동력  5) 시간",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: m, kL, LPM): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: ft, m3, m3/h): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_DEFAULTS => "현재 기본 입력값:",
        SETTINGS_CURRENT_CURRENCY => "현재 통화 기호:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => {
            "1) 기본 양정  2) 기본 집수정 용량  3) 기본 펌프 대수  4) 기본 전력 요금  5) 기본 펌프 효율  6) 통화 기호  7) 언어"
        }
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_CURRENCY => "통화 기호: ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(ko/en/auto): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pump Performance Toolbox ===",
        MAIN_MENU_PERFORMANCE => "1) Drainage Performance",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit Converter",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PERF_HEADING => "\n-- Drainage Performance --",
        PERF_MODEL_LIST_HEADING => "Available pump models:",
        PERF_MODEL_RANGE => "head",
        PERF_PROMPT_MODEL => "Model number or name: ",
        PERF_UNKNOWN_MODEL_RETRY => "Model not in the list. Please try again.",
        PERF_PROMPT_HEAD => "Head [m]",
        PERF_PROMPT_SUMP_VOLUME => "Sump volume [kL]",
        PERF_PROMPT_PUMP_COUNT => "Pumps in operation",
        PERF_PROMPT_COST_RATE => "Electricity rate",
        PERF_PROMPT_EFFICIENCY => "Pump efficiency [%]",
        PERF_RESULT_HEADING => "\nResults:",
        PERF_RESULT_MODEL => "Model:",
        PERF_RESULT_PER_PUMP_FLOW => "Flow per pump:",
        PERF_RESULT_TOTAL_FLOW => "Total flow:",
        PERF_RESULT_EMPTYING_TIME => "Time to empty:",
        PERF_RESULT_POWER => "Total power:",
        PERF_RESULT_ENERGY_COST => "Estimated energy cost:",
        PERF_NOTE_EXTRAPOLATED => "Note: head is outside the curve range; flow was extrapolated.",
        PERF_NOTE_CLAMPED => "Note: estimated flow was negative and has been clamped to 0.",
        PERF_NOTE_NO_RATED_POWER => {
            "Note: no rated HP found in the model name; power/cost omitted."
        }
        PERF_NOTE_INDETERMINATE => "Note: discharge is near zero; emptying time is indeterminate.",
        UNIT_MINUTES => "min",
        UNIT_DAYS => "days",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Length  2) Volume  3) Flow Rate  4) Power  5) Duration",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: m, kL, LPM): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: ft, m3, m3/h): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_DEFAULTS => "Current default inputs:",
        SETTINGS_CURRENT_CURRENCY => "Current currency symbol:",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => {
            "1) Default head  2) Default sump volume  3) Default pump count  4) Default rate  5) Default efficiency  6) Currency symbol  7) Language"
        }
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_CURRENCY => "Currency symbol: ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en/auto): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
