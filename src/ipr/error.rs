use thiserror::Error;

/// IPR 계산 중 발생 가능한 입력 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IprError {
    /// 양수여야 하는 압력이 0 이하이거나, 0 이상이어야 하는 유동압이 음수
    #[error("pressures must be positive: {name} = {value}")]
    NegativeOrZeroPressure { name: &'static str, value: f64 },
    /// 유동 저부압이 저류층 압력보다 큼
    #[error("bottomhole pressure must not exceed reservoir pressure (p_wf = {p_wf}, p_r = {p_r})")]
    PressureOrderingViolation { p_wf: f64, p_r: f64 },
    /// 수분율이 [0, 1] 범위를 벗어남
    #[error("water cut must be within [0, 1], got {0}")]
    WaterCutOutOfRange(f64),
    /// 역산식의 분모가 0
    #[error("degenerate calibration point: {0}")]
    DegenerateCalibration(&'static str),
    /// 로그에 들어가는 유량이 0 이하
    #[error("flow rates must be positive: {name} = {value}")]
    NonPositiveRate { name: &'static str, value: f64 },
    /// NaN 또는 무한대 입력
    #[error("{0} must be a finite number")]
    NonFiniteInput(&'static str),
    /// 곡선 분할 수가 2 미만
    #[error("an IPR curve needs at least 2 points, got {0}")]
    InvalidCurvePoints(usize),
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), IprError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IprError::NonFiniteInput(name))
    }
}

/// 유동압/저류층 압력 쌍의 공통 전제조건을 검사한다.
/// 0 <= p_wf <= p_r, p_r > 0 이어야 한다.
pub(crate) fn check_pressures(
    wf_name: &'static str,
    p_wf: f64,
    p_r: f64,
) -> Result<(), IprError> {
    check_pressure_levels(wf_name, p_wf, p_r)?;
    check_ordering(p_wf, p_r)
}

/// 순서 검사를 제외한 압력 값 자체의 검사. 유효 범위: p_wf >= 0, p_r > 0.
pub(crate) fn check_pressure_levels(
    wf_name: &'static str,
    p_wf: f64,
    p_r: f64,
) -> Result<(), IprError> {
    ensure_finite(wf_name, p_wf)?;
    ensure_finite("p_r", p_r)?;
    if p_wf < 0.0 {
        return Err(IprError::NegativeOrZeroPressure {
            name: wf_name,
            value: p_wf,
        });
    }
    check_positive_pressure("p_r", p_r)
}

pub(crate) fn check_positive_pressure(name: &'static str, value: f64) -> Result<(), IprError> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(IprError::NegativeOrZeroPressure { name, value });
    }
    Ok(())
}

pub(crate) fn check_ordering(p_wf: f64, p_r: f64) -> Result<(), IprError> {
    if p_wf > p_r {
        return Err(IprError::PressureOrderingViolation { p_wf, p_r });
    }
    Ok(())
}
