//! 단위 정의 및 변환 모듈 모음.

pub mod duration;
pub mod flow_rate;
pub mod length;
pub mod power;
pub mod volume;

pub use duration::{convert_duration, DurationUnit};
pub use flow_rate::{convert_flow_rate, FlowRateUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use volume::{convert_volume, VolumeUnit};
