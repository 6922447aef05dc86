//! 펌프 성능 곡선과 배수 성능 계산 모듈 모음.

pub mod curve_db;
pub mod performance;
pub mod rated_power;

pub use performance::*;
pub use rated_power::HP_TO_KW;
