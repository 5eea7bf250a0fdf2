//! Fetkovich 배압식 IPR: q = C · (p_r² − p_wf²)^n
use serde::{Deserialize, Serialize};

use super::error::{check_pressures, ensure_finite, IprError};

/// 두 점 시험 자료로 구한 배압식 상수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackpressureConstants {
    /// 유량 계수 C (STB/day/psi^(2n))
    pub c: f64,
    /// 지수 n
    pub n: f64,
}

fn check_rate(name: &'static str, q: f64) -> Result<(), IprError> {
    ensure_finite(name, q)?;
    if q <= 0.0 {
        return Err(IprError::NonPositiveRate { name, value: q });
    }
    Ok(())
}

/// 두 시험점 (q1, p_wf1), (q2, p_wf2) 로부터 C 와 n 을 구한다.
///
/// n = ln(q1/q2) / (ln(p_r² − p_wf1²) − ln(p_r² − p_wf2²)), C = q1 / (p_r² − p_wf1²)^n
pub fn match_constants(
    q1: f64,
    p_wf1: f64,
    q2: f64,
    p_wf2: f64,
    p_r: f64,
) -> Result<BackpressureConstants, IprError> {
    check_pressures("p_wf1", p_wf1, p_r)?;
    check_pressures("p_wf2", p_wf2, p_r)?;
    check_rate("q1", q1)?;
    check_rate("q2", q2)?;

    let drawdown1 = p_r * p_r - p_wf1 * p_wf1;
    let drawdown2 = p_r * p_r - p_wf2 * p_wf2;
    if drawdown1 <= 0.0 || drawdown2 <= 0.0 {
        return Err(IprError::DegenerateCalibration(
            "test pressure equals reservoir pressure, cannot take log of zero drawdown",
        ));
    }
    let denominator = drawdown1.ln() - drawdown2.ln();
    if denominator == 0.0 {
        return Err(IprError::DegenerateCalibration(
            "both test points share the same flowing pressure",
        ));
    }
    let n = (q1 / q2).ln() / denominator;
    if !n.is_finite() || n <= 0.0 {
        return Err(IprError::DegenerateCalibration(
            "rates must decrease as flowing pressure rises",
        ));
    }
    let c = q1 / drawdown1.powf(n);
    if !c.is_finite() {
        return Err(IprError::DegenerateCalibration(
            "flow coefficient C is not a finite number",
        ));
    }
    Ok(BackpressureConstants { c, n })
}

/// 배압식으로 유동 저부압 `p_wf` 에서의 유량을 계산한다.
/// n 은 양수여야 한다. n <= 0 이면 p_wf = p_r 에서 0^n 이 발산한다.
pub fn rate(c: f64, n: f64, p_r: f64, p_wf: f64) -> Result<f64, IprError> {
    check_pressures("p_wf", p_wf, p_r)?;
    ensure_finite("c", c)?;
    ensure_finite("n", n)?;
    if n <= 0.0 {
        return Err(IprError::DegenerateCalibration(
            "back-pressure exponent n must be positive",
        ));
    }
    let q = c * (p_r * p_r - p_wf * p_wf).powf(n);
    ensure_finite("q", q)?;
    Ok(q)
}

impl BackpressureConstants {
    pub fn rate(&self, p_r: f64, p_wf: f64) -> Result<f64, IprError> {
        rate(self.c, self.n, p_r, p_wf)
    }
}
