use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 배수 성능 계산의 기본 입력값을 담는다.
///
/// 대화형 메뉴에서 엔터만 입력하면 이 값이 사용된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultInputs {
    /// 기본 양정 [m]
    pub head_m: f64,
    /// 기본 집수정 용량 [kL]
    pub sump_volume_kl: f64,
    /// 기본 가동 펌프 대수
    pub pump_count: u32,
    /// 기본 전력 요금 [통화/kWh]
    pub cost_per_kwh: f64,
    /// 기본 펌프 효율 [%]
    pub efficiency_percent: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            head_m: 30.0,
            sump_volume_kl: 1000.0,
            pump_count: 2,
            cost_per_kwh: 10.0,
            efficiency_percent: 80.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드(ko/en). None이면 시스템 로케일을 따른다.
    pub language: Option<String>,
    /// 전력 비용 표시에 쓰는 통화 기호
    pub currency_symbol: String,
    pub default_inputs: DefaultInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            currency_symbol: "₹".to_string(),
            default_inputs: DefaultInputs::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
