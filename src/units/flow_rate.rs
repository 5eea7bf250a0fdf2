use serde::{Deserialize, Serialize};

/// 액체 체적 유량 단위. 내부 기준은 STB/day(= bbl/day, 표준 상태)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRateUnit {
    StbPerDay,
    M3PerDay,
    M3PerHour,
}

pub(crate) const BBL_PER_M3: f64 = 6.289_810_770_432_1;

impl FlowRateUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowRateUnit::StbPerDay => "STB/d",
            FlowRateUnit::M3PerDay => "m3/d",
            FlowRateUnit::M3PerHour => "m3/h",
        }
    }
}

/// 주어진 유량을 STB/day 로 변환한다.
pub fn to_stb_per_day(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::StbPerDay => value,
        FlowRateUnit::M3PerDay => value * BBL_PER_M3,
        FlowRateUnit::M3PerHour => value * 24.0 * BBL_PER_M3,
    }
}

/// STB/day 값을 원하는 단위로 변환한다.
pub fn from_stb_per_day(value_stb_d: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::StbPerDay => value_stb_d,
        FlowRateUnit::M3PerDay => value_stb_d / BBL_PER_M3,
        FlowRateUnit::M3PerHour => value_stb_d / (24.0 * BBL_PER_M3),
    }
}

/// 유량을 원하는 단위로 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> f64 {
    from_stb_per_day(to_stb_per_day(value, from), to)
}
