use serde::{Deserialize, Serialize};

use super::error::{
    check_ordering, check_positive_pressure, check_pressure_levels, ensure_finite, IprError,
};
use super::vogel::pressure_ratio_bracket;

/// 복합 IPR 에서 선택된 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    /// 기포점 이상: 선형 PI 단상 유동
    SinglePhase,
    /// 기포점 미만: Vogel/PI 혼합 2상 유동
    TwoPhase,
}

/// 복합 IPR 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeRates {
    pub regime: FlowRegime,
    /// 원유 유량(STB/day)
    pub q_oil: f64,
    /// 총 액체 유량(STB/day)
    pub q_liquid: f64,
}

/// 기포점 압력을 경계로 선형 PI 와 Vogel 곡선을 혼합한 복합 IPR 을 계산한다.
///
/// p_wf >= p_bubble 이면 q_L = PI·(p_r − p_wf) 이다.
/// p_wf < p_bubble 이면 기포점 유량 q_b = PI·(p_r − p_bubble) 을 기준으로
/// Vogel 원유 유량(기준압력 p_bubble)과 선형 액체 유량을 수분율로 가중 평균해 q_L 을 구한다.
/// 두 영역 모두 q_o = q_L·(1 − w_c) 이다. 2상 영역에서는 수분율이 두 번 적용되는 모델을 그대로 유지한다.
pub fn composite_rates(
    p_wf: f64,
    p_r: f64,
    p_bubble: f64,
    pi: f64,
    water_cut: f64,
) -> Result<CompositeRates, IprError> {
    check_pressure_levels("p_wf", p_wf, p_r)?;
    check_positive_pressure("p_bubble", p_bubble)?;
    check_ordering(p_wf, p_r)?;
    ensure_finite("pi", pi)?;
    ensure_finite("water_cut", water_cut)?;
    if !(0.0..=1.0).contains(&water_cut) {
        return Err(IprError::WaterCutOutOfRange(water_cut));
    }

    if p_wf >= p_bubble {
        let q_liquid = pi * (p_r - p_wf);
        return Ok(CompositeRates {
            regime: FlowRegime::SinglePhase,
            q_oil: q_liquid * (1.0 - water_cut),
            q_liquid,
        });
    }

    let q_bubble = pi * (p_r - p_bubble);
    let q_vogel_oil = q_bubble * pressure_ratio_bracket(p_wf / p_bubble);
    let q_pi_liquid = pi * (p_r - p_wf);
    let q_liquid = (1.0 - water_cut) * q_vogel_oil + water_cut * q_pi_liquid;
    Ok(CompositeRates {
        regime: FlowRegime::TwoPhase,
        q_oil: q_liquid * (1.0 - water_cut),
        q_liquid,
    })
}
