//! CLI 명령 실행(단위 환산 포함) 테스트.
use petroleum_engineering_toolbox::app::{execute, AppError, Outcome};
use petroleum_engineering_toolbox::config::{Config, UnitSystem};
use petroleum_engineering_toolbox::ipr::{FlowRegime, IprError};
use petroleum_engineering_toolbox::quantity::QuantityKind;
use petroleum_engineering_toolbox::ui_cli::{CalcCommand, CurveModel};

fn metric() -> Config {
    let mut cfg = Config::default();
    cfg.apply_unit_system(UnitSystem::Metric);
    cfg
}

#[test]
fn field_units_pass_through() {
    let out = execute(
        &CalcCommand::VogelMaxRate {
            q1: 500.0,
            p_wf1: 1500.0,
            p_r: 2500.0,
        },
        &Config::default(),
    )
    .unwrap();
    match out {
        Outcome::MaxRate { q_max, rate_unit } => {
            assert!((q_max - 844.594_594_594_6).abs() < 1e-6, "{q_max}");
            assert_eq!(rate_unit, "STB/d");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn metric_inputs_are_converted_both_ways() {
    // Vogel 식은 압력비와 유량에 선형이므로 단위를 바꿔도 결과 비율은 같다
    let out = execute(
        &CalcCommand::VogelRate {
            p_wf: 40.0,
            p_r: 100.0,
            q_max: 100.0,
        },
        &metric(),
    )
    .unwrap();
    match out {
        Outcome::Rate { q_oil, rate_unit } => {
            assert!((q_oil - 79.2).abs() < 1e-9, "{q_oil}");
            assert_eq!(rate_unit, "m3/d");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn metric_productivity_index_round_trips() {
    let out = execute(
        &CalcCommand::ProductivityIndex {
            q1: 50.0,
            p_r: 200.0,
            p_wf1: 150.0,
        },
        &metric(),
    )
    .unwrap();
    match out {
        Outcome::ProductivityIndex { pi, pi_unit } => {
            assert!((pi - 1.0).abs() < 1e-9, "{pi}");
            assert_eq!(pi_unit, "m3/d/bar");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn composite_outcome_serializes_with_regime() {
    let out = execute(
        &CalcCommand::Composite {
            p_wf: 2300.0,
            p_r: 2550.0,
            p_bubble: 2100.0,
            pi: 2.0,
            water_cut: 0.5,
        },
        &Config::default(),
    )
    .unwrap();
    assert_eq!(
        out,
        Outcome::Composite {
            regime: FlowRegime::SinglePhase,
            q_oil: 250.0,
            q_liquid: 500.0,
            rate_unit: "STB/d",
        }
    );
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["kind"], "composite");
    assert_eq!(json["regime"], "single_phase");
    assert_eq!(json["q_liquid"], 500.0);
}

#[test]
fn validation_errors_surface_unchanged() {
    let err = execute(
        &CalcCommand::Composite {
            p_wf: 50.0,
            p_r: 100.0,
            p_bubble: 80.0,
            pi: 1.0,
            water_cut: 1.5,
        },
        &Config::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Ipr(IprError::WaterCutOutOfRange(w)) if w == 1.5
    ));
}

#[test]
fn curve_uses_configured_point_count() {
    let mut cfg = Config::default();
    cfg.curve_points = 6;
    let out = execute(
        &CalcCommand::Curve {
            points: None,
            model: CurveModel::Linear {
                p_r: 2500.0,
                pi: 2.0,
            },
        },
        &cfg,
    )
    .unwrap();
    match out {
        Outcome::Curve { points, .. } => {
            assert_eq!(points.len(), 6);
            assert_eq!(points[0].q_liquid, 5000.0);
            assert_eq!(points[5].q_liquid, 0.0);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn convert_command_reports_target_unit() {
    let out = execute(
        &CalcCommand::Convert {
            kind: QuantityKind::Pressure,
            value: 1.0,
            from: "MPa".into(),
            to: "kPa".into(),
        },
        &Config::default(),
    )
    .unwrap();
    match out {
        Outcome::Converted { value, unit } => {
            assert!((value - 1000.0).abs() < 1e-9);
            assert_eq!(unit, "kPa");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}
