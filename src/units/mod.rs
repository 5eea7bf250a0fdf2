//! 단위 정의 및 변환 모듈 모음.

pub mod flow_rate;
pub mod pressure;
pub mod productivity_index;

pub use flow_rate::{convert_flow_rate, FlowRateUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use productivity_index::{convert_productivity_index, ProductivityIndexUnit};
