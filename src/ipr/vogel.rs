//! Vogel(1968) 용해가스 구동 유정의 IPR.
use super::error::{check_pressures, ensure_finite, IprError};

/// Vogel 식의 괄호 항 `1 - 0.2 r - 0.8 r²` 를 계산한다.
/// r 이 [0, 1] 이면 결과는 [0, 1] 이며 r = 1 에서 정확히 0 이 된다.
pub fn pressure_ratio_bracket(ratio: f64) -> f64 {
    1.0 - 0.2 * ratio - 0.8 * ratio * ratio
}

/// Vogel IPR 로 유동 저부압 `p_wf` 에서의 원유 유량(STB/day)을 계산한다.
///
/// q = q_max · (1 − 0.2·(p_wf/p_r) − 0.8·(p_wf/p_r)²)
///
/// - p_wf: 유동 저부압(psia), 0 이상
/// - p_r: 평균 저류층 압력(psia), 0 초과
/// - q_max: 저부압 0 에서의 최대 유량(AOF, STB/day)
pub fn rate(p_wf: f64, p_r: f64, q_max: f64) -> Result<f64, IprError> {
    check_pressures("p_wf", p_wf, p_r)?;
    ensure_finite("q_max", q_max)?;
    let ratio = p_wf / p_r;
    Ok(q_max * pressure_ratio_bracket(ratio))
}

/// 시험 자료 한 점 (q1, p_wf1) 으로부터 Vogel 식을 역산해 q_max 를 구한다.
///
/// p_wf1 == p_r 이면 괄호 항이 0 이 되어 풀 수 없으므로 `DegenerateCalibration` 을 반환한다.
pub fn max_rate(q1: f64, p_wf1: f64, p_r: f64) -> Result<f64, IprError> {
    check_pressures("p_wf1", p_wf1, p_r)?;
    ensure_finite("q1", q1)?;
    let bracket = pressure_ratio_bracket(p_wf1 / p_r);
    if bracket <= 0.0 {
        return Err(IprError::DegenerateCalibration(
            "test pressure equals reservoir pressure, cannot solve for q_max",
        ));
    }
    Ok(q1 / bracket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_endpoints() {
        assert_eq!(pressure_ratio_bracket(0.0), 1.0);
        assert_eq!(pressure_ratio_bracket(1.0), 0.0);
    }

    #[test]
    fn bracket_at_half_reservoir_pressure() {
        // 1 - 0.1 - 0.2
        assert!((pressure_ratio_bracket(0.5) - 0.7).abs() < 1e-12);
        assert!(pressure_ratio_bracket(0.25) > pressure_ratio_bracket(0.5));
    }
}
