use serde::{Deserialize, Serialize};

use super::composite::composite_rates;
use super::error::IprError;
use super::{backpressure, productivity_index, vogel};

/// 곡선 분할 수 기본값.
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// 곡선 생성에 사용할 IPR 모델과 그 상수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum InflowModel {
    Vogel {
        p_r: f64,
        q_max: f64,
    },
    Linear {
        p_r: f64,
        pi: f64,
    },
    Composite {
        p_r: f64,
        p_bubble: f64,
        pi: f64,
        water_cut: f64,
    },
    Backpressure {
        p_r: f64,
        c: f64,
        n: f64,
    },
}

/// IPR 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IprPoint {
    /// 유동 저부압(psia)
    pub p_wf: f64,
    /// 원유 유량(STB/day)
    pub q_oil: f64,
    /// 총 액체 유량(STB/day). 수분율이 없는 모델은 원유 유량과 같다.
    pub q_liquid: f64,
}

impl InflowModel {
    pub fn reservoir_pressure(&self) -> f64 {
        match *self {
            InflowModel::Vogel { p_r, .. }
            | InflowModel::Linear { p_r, .. }
            | InflowModel::Composite { p_r, .. }
            | InflowModel::Backpressure { p_r, .. } => p_r,
        }
    }

    /// 주어진 유동 저부압에서 모델을 평가한다.
    pub fn evaluate(&self, p_wf: f64) -> Result<IprPoint, IprError> {
        let (q_oil, q_liquid) = match *self {
            InflowModel::Vogel { p_r, q_max } => {
                let q = vogel::rate(p_wf, p_r, q_max)?;
                (q, q)
            }
            InflowModel::Linear { p_r, pi } => {
                let q = productivity_index::rate(p_wf, p_r, pi)?;
                (q, q)
            }
            InflowModel::Composite {
                p_r,
                p_bubble,
                pi,
                water_cut,
            } => {
                let rates = composite_rates(p_wf, p_r, p_bubble, pi, water_cut)?;
                (rates.q_oil, rates.q_liquid)
            }
            InflowModel::Backpressure { p_r, c, n } => {
                let q = backpressure::rate(c, n, p_r, p_wf)?;
                (q, q)
            }
        };
        Ok(IprPoint {
            p_wf,
            q_oil,
            q_liquid,
        })
    }
}

/// 0 부터 p_r 까지 등간격 `points` 개의 유동 저부압에서 IPR 곡선을 생성한다. 양 끝점을 포함한다.
pub fn ipr_curve(model: &InflowModel, points: usize) -> Result<Vec<IprPoint>, IprError> {
    if points < 2 {
        return Err(IprError::InvalidCurvePoints(points));
    }
    let p_r = model.reservoir_pressure();
    let step = p_r / (points - 1) as f64;
    (0..points)
        .map(|i| {
            // 마지막 점은 누적 오차 없이 p_r 로 고정
            let p_wf = if i == points - 1 { p_r } else { step * i as f64 };
            model.evaluate(p_wf)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_spans_zero_to_reservoir_pressure() {
        let model = InflowModel::Vogel {
            p_r: 2500.0,
            q_max: 1000.0,
        };
        let curve = ipr_curve(&model, 11).unwrap();
        assert_eq!(curve.len(), 11);
        assert_eq!(curve[0].p_wf, 0.0);
        assert_eq!(curve[0].q_oil, 1000.0);
        assert_eq!(curve[10].p_wf, 2500.0);
        assert_eq!(curve[10].q_oil, 0.0);
    }

    #[test]
    fn single_point_curve_is_rejected() {
        let model = InflowModel::Linear { p_r: 100.0, pi: 1.0 };
        assert_eq!(
            ipr_curve(&model, 1).unwrap_err(),
            IprError::InvalidCurvePoints(1)
        );
    }

    #[test]
    fn invalid_reservoir_pressure_surfaces_as_pressure_error() {
        let model = InflowModel::Linear { p_r: -10.0, pi: 1.0 };
        assert!(matches!(
            ipr_curve(&model, 5).unwrap_err(),
            IprError::NegativeOrZeroPressure { .. } | IprError::PressureOrderingViolation { .. }
        ));
    }

    #[test]
    fn backpressure_curve_with_negative_exponent_fails_instead_of_diverging() {
        let model = InflowModel::Backpressure {
            p_r: 3000.0,
            c: 0.005,
            n: -0.47,
        };
        assert!(matches!(
            ipr_curve(&model, 5).unwrap_err(),
            IprError::DegenerateCalibration(_)
        ));
    }
}
