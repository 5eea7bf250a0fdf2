use serde::{Deserialize, Serialize};

use super::flow_rate::BBL_PER_M3;
use super::pressure::PSI_PER_BAR;

/// 생산성 지수 단위. 내부 기준은 STB/day/psi 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductivityIndexUnit {
    StbPerDayPerPsi,
    M3PerDayPerBar,
    M3PerDayPerKiloPascal,
}

impl ProductivityIndexUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            ProductivityIndexUnit::StbPerDayPerPsi => "STB/d/psi",
            ProductivityIndexUnit::M3PerDayPerBar => "m3/d/bar",
            ProductivityIndexUnit::M3PerDayPerKiloPascal => "m3/d/kPa",
        }
    }

    // 1 [unit] 이 몇 STB/day/psi 인지
    fn factor(&self) -> f64 {
        match self {
            ProductivityIndexUnit::StbPerDayPerPsi => 1.0,
            ProductivityIndexUnit::M3PerDayPerBar => BBL_PER_M3 / PSI_PER_BAR,
            ProductivityIndexUnit::M3PerDayPerKiloPascal => BBL_PER_M3 / (PSI_PER_BAR / 100.0),
        }
    }
}

/// 주어진 생산성 지수를 STB/day/psi 로 변환한다.
pub fn to_field(value: f64, unit: ProductivityIndexUnit) -> f64 {
    value * unit.factor()
}

/// STB/day/psi 값을 원하는 단위로 변환한다.
pub fn from_field(value: f64, unit: ProductivityIndexUnit) -> f64 {
    value / unit.factor()
}

pub fn convert_productivity_index(
    value: f64,
    from: ProductivityIndexUnit,
    to: ProductivityIndexUnit,
) -> f64 {
    from_field(to_field(value, from), to)
}
