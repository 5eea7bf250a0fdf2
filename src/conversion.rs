use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `psi`, `bar`, `kPa`, `stb/d`, `m3/d`, `m3/d/bar` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::FlowRate => {
            let from = parse_flow_rate_unit(from_unit_str)?;
            let to = parse_flow_rate_unit(to_unit_str)?;
            Ok(convert_flow_rate(value, from, to))
        }
        QuantityKind::ProductivityIndex => {
            let from = parse_productivity_index_unit(from_unit_str)?;
            let to = parse_productivity_index_unit(to_unit_str)?;
            Ok(convert_productivity_index(value, from, to))
        }
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "psi" | "psia" => Ok(PressureUnit::Psi),
        "bar" | "bara" => Ok(PressureUnit::Bar),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "atm" => Ok(PressureUnit::Atm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_flow_rate_unit(s: &str) -> Result<FlowRateUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "stb/d" | "stb/day" | "bbl/d" | "bbl/day" | "bopd" | "blpd" => {
            Ok(FlowRateUnit::StbPerDay)
        }
        "m3/d" | "m^3/d" | "m3/day" | "sm3/d" => Ok(FlowRateUnit::M3PerDay),
        "m3/h" | "m^3/h" | "m3/hr" => Ok(FlowRateUnit::M3PerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_productivity_index_unit(s: &str) -> Result<ProductivityIndexUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "stb/d/psi" | "stb/day/psi" | "bbl/d/psi" => Ok(ProductivityIndexUnit::StbPerDayPerPsi),
        "m3/d/bar" | "m^3/d/bar" => Ok(ProductivityIndexUnit::M3PerDayPerBar),
        "m3/d/kpa" | "m^3/d/kpa" => Ok(ProductivityIndexUnit::M3PerDayPerKiloPascal),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
