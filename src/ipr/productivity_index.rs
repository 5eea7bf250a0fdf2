//! 단상 유동의 선형 생산성 지수(PI) 모델.
use super::error::{check_pressures, ensure_finite, IprError};

/// 시험 자료 (q1, p_wf1) 로부터 생산성 지수 PI = q1 / (p_r − p_wf1) 를 계산한다. 단위: STB/day/psi.
pub fn productivity_index(q1: f64, p_r: f64, p_wf1: f64) -> Result<f64, IprError> {
    check_pressures("p_wf1", p_wf1, p_r)?;
    ensure_finite("q1", q1)?;
    let delta_p = p_r - p_wf1;
    if delta_p == 0.0 {
        return Err(IprError::DegenerateCalibration(
            "pressure difference cannot be zero",
        ));
    }
    Ok(q1 / delta_p)
}

/// 선형 IPR 유량 q = PI · (p_r − p_wf).
pub fn rate(p_wf: f64, p_r: f64, pi: f64) -> Result<f64, IprError> {
    check_pressures("p_wf", p_wf, p_r)?;
    ensure_finite("pi", pi)?;
    Ok(pi * (p_r - p_wf))
}
