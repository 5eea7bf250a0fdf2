//! 복합 IPR(기포점 기준 선형/Vogel 혼합) 테스트.
use petroleum_engineering_toolbox::ipr::{composite_rates, FlowRegime, IprError};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn above_bubble_point_is_linear() {
    let res = composite_rates(2300.0, 2550.0, 2100.0, 2.0, 0.5).expect("composite");
    assert_eq!(res.regime, FlowRegime::SinglePhase);
    assert_eq!(res.q_liquid, 2.0 * (2550.0 - 2300.0));
    assert_eq!(res.q_oil, 2.0 * (2550.0 - 2300.0) * 0.5);
}

#[test]
fn exactly_at_bubble_point_is_linear() {
    let res = composite_rates(2100.0, 2550.0, 2100.0, 2.0, 0.3).unwrap();
    assert_eq!(res.regime, FlowRegime::SinglePhase);
    assert_eq!(res.q_liquid, 900.0);
    assert_close("q_oil", res.q_oil, 630.0, 1e-12);
}

#[test]
fn below_bubble_point_blends_vogel_and_pi() {
    // q_b = 900, r = 10/21 -> Vogel 항 = 319/441
    let res = composite_rates(1000.0, 2550.0, 2100.0, 2.0, 0.5).unwrap();
    assert_eq!(res.regime, FlowRegime::TwoPhase);
    assert_close("q_liquid", res.q_liquid, 1875.510_204_081_632_7, 1e-12);
    // 수분율이 q_L 에 이미 반영된 뒤 한 번 더 곱해진다
    assert_close("q_oil", res.q_oil, 937.755_102_040_816_3, 1e-12);
    assert_close("q_oil/q_liquid", res.q_oil / res.q_liquid, 0.5, 1e-12);
}

#[test]
fn zero_flowing_pressure_below_bubble_point() {
    // r = 0 이면 Vogel 원유 유량은 q_b 와 같다
    let res = composite_rates(0.0, 2550.0, 2100.0, 2.0, 0.0).unwrap();
    assert_eq!(res.regime, FlowRegime::TwoPhase);
    assert_close("q_liquid", res.q_liquid, 900.0, 1e-12);
    assert_close("q_oil", res.q_oil, 900.0, 1e-12);
}

#[test]
fn approaching_bubble_point_from_below_is_not_continuous() {
    // p_wf -> p_b⁻ 에서 Vogel 항이 0 이 되므로 q_L -> w_c·PI·(p_r − p_b)
    let (p_r, p_b, pi, wc) = (2550.0, 2100.0, 2.0, 0.4);
    let below = composite_rates(p_b - 1e-7, p_r, p_b, pi, wc).unwrap();
    let at = composite_rates(p_b, p_r, p_b, pi, wc).unwrap();
    assert_eq!(below.regime, FlowRegime::TwoPhase);
    assert_close("limit", below.q_liquid, wc * pi * (p_r - p_b), 1e-6);
    assert_close("linear", at.q_liquid, pi * (p_r - p_b), 1e-12);
    assert!(at.q_liquid - below.q_liquid > 100.0);
}

#[test]
fn all_water_is_continuous_at_bubble_point() {
    let (p_r, p_b, pi) = (2550.0, 2100.0, 2.0);
    let below = composite_rates(p_b - 1e-7, p_r, p_b, pi, 1.0).unwrap();
    let at = composite_rates(p_b, p_r, p_b, pi, 1.0).unwrap();
    assert_close("q_liquid", below.q_liquid, at.q_liquid, 1e-9);
    assert_eq!(below.q_oil, 0.0);
    assert_eq!(at.q_oil, 0.0);
}

#[test]
fn water_cut_out_of_range_rejected() {
    assert_eq!(
        composite_rates(50.0, 100.0, 80.0, 1.0, 1.5).unwrap_err(),
        IprError::WaterCutOutOfRange(1.5)
    );
    assert_eq!(
        composite_rates(50.0, 100.0, 80.0, 1.0, -0.1).unwrap_err(),
        IprError::WaterCutOutOfRange(-0.1)
    );
}

#[test]
fn each_pressure_rule_is_reported_distinctly() {
    assert!(matches!(
        composite_rates(-1.0, 100.0, 80.0, 1.0, 0.5).unwrap_err(),
        IprError::NegativeOrZeroPressure { name: "p_wf", .. }
    ));
    assert!(matches!(
        composite_rates(50.0, 0.0, 80.0, 1.0, 0.5).unwrap_err(),
        IprError::NegativeOrZeroPressure { name: "p_r", .. }
    ));
    assert!(matches!(
        composite_rates(50.0, 100.0, 0.0, 1.0, 0.5).unwrap_err(),
        IprError::NegativeOrZeroPressure { name: "p_bubble", .. }
    ));
    assert!(matches!(
        composite_rates(150.0, 100.0, 80.0, 1.0, 0.5).unwrap_err(),
        IprError::PressureOrderingViolation { .. }
    ));
}

#[test]
fn bubble_point_error_precedes_ordering_error() {
    assert_eq!(
        composite_rates(150.0, 100.0, -5.0, 1.0, 0.5).unwrap_err(),
        IprError::NegativeOrZeroPressure {
            name: "p_bubble",
            value: -5.0
        }
    );
    assert_eq!(
        composite_rates(50.0, 100.0, f64::NAN, 1.0, 0.5).unwrap_err(),
        IprError::NonFiniteInput("p_bubble")
    );
}
