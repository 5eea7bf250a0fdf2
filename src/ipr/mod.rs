//! 유정 유입 성능(IPR) 계산 모듈을 모아둔다.
//! Vogel 곡선, 선형 생산성 지수(PI), 기포점 기준 복합 IPR, Fetkovich 배압식으로 구성한다.
//!
//! 모든 함수는 psia, STB/day, STB/day/psi 기준으로 동작하며 단위 환산은 호출 측에서 처리한다.

pub mod backpressure;
pub mod composite;
pub mod curve;
pub mod error;
pub mod productivity_index;
pub mod vogel;

pub use backpressure::BackpressureConstants;
pub use composite::{composite_rates, CompositeRates, FlowRegime};
pub use curve::{ipr_curve, InflowModel, IprPoint, DEFAULT_CURVE_POINTS};
pub use error::IprError;
pub use productivity_index::productivity_index;
