use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 psia(절대압)이다.
/// IPR 식의 압력은 모두 절대압이므로 게이지 보정은 하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    Bar,
    KiloPascal,
    MegaPascal,
    Atm,
}

pub(crate) const PSI_PER_BAR: f64 = 14.503_773_8;
const PSI_PER_ATM: f64 = 14.695_948_8;

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Psi => "psia",
            PressureUnit::Bar => "bar",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Atm => "atm",
        }
    }
}

/// 주어진 압력을 psia 로 변환한다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Bar => value * PSI_PER_BAR,
        PressureUnit::KiloPascal => value * PSI_PER_BAR / 100.0,
        PressureUnit::MegaPascal => value * PSI_PER_BAR * 10.0,
        PressureUnit::Atm => value * PSI_PER_ATM,
    }
}

/// psia 값을 원하는 단위로 변환한다.
pub fn from_psi(value_psi: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_psi,
        PressureUnit::Bar => value_psi / PSI_PER_BAR,
        PressureUnit::KiloPascal => value_psi * 100.0 / PSI_PER_BAR,
        PressureUnit::MegaPascal => value_psi / (PSI_PER_BAR * 10.0),
        PressureUnit::Atm => value_psi / PSI_PER_ATM,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let psi = to_psi(value, from);
    from_psi(psi, to)
}
