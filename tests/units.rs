//! 단위 변환 회귀 테스트.
use petroleum_engineering_toolbox::conversion::{self, ConversionError};
use petroleum_engineering_toolbox::quantity::QuantityKind;
use petroleum_engineering_toolbox::units::{
    convert_flow_rate, convert_pressure, convert_productivity_index, FlowRateUnit, PressureUnit,
    ProductivityIndexUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn one_bar_in_psi() {
    let psi = convert_pressure(1.0, PressureUnit::Bar, PressureUnit::Psi);
    assert_close("psi", psi, 14.503_773_8, 1e-9);
    let kpa = convert_pressure(psi, PressureUnit::Psi, PressureUnit::KiloPascal);
    assert_close("kPa", kpa, 100.0, 1e-9);
}

#[test]
fn one_atm_in_psi() {
    assert_close(
        "atm",
        convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Psi),
        14.695_948_8,
        1e-9,
    );
}

#[test]
fn cubic_metre_per_day_in_barrels() {
    let stb = convert_flow_rate(1.0, FlowRateUnit::M3PerDay, FlowRateUnit::StbPerDay);
    assert_close("stb/d", stb, 6.289_810_77, 1e-8);
    let m3h = convert_flow_rate(24.0, FlowRateUnit::M3PerDay, FlowRateUnit::M3PerHour);
    assert_close("m3/h", m3h, 1.0, 1e-12);
}

#[test]
fn productivity_index_metric_to_field() {
    // 1 m3/d/bar = 6.2898 STB/d / 14.5038 psi
    let field = convert_productivity_index(
        1.0,
        ProductivityIndexUnit::M3PerDayPerBar,
        ProductivityIndexUnit::StbPerDayPerPsi,
    );
    assert_close("pi", field, 6.289_810_77 / 14.503_773_8, 1e-8);
    let per_kpa = convert_productivity_index(
        1.0,
        ProductivityIndexUnit::M3PerDayPerBar,
        ProductivityIndexUnit::M3PerDayPerKiloPascal,
    );
    assert_close("m3/d/kPa", per_kpa, 100.0, 1e-9);
}

#[test]
fn string_units_are_case_insensitive() {
    let v = conversion::convert(QuantityKind::Pressure, 100.0, "kPa", "BAR").unwrap();
    assert_close("bar", v, 1.0, 1e-12);
    let q = conversion::convert(QuantityKind::FlowRate, 1.0, "m3/d", "bbl/d").unwrap();
    assert_close("bbl/d", q, 6.289_810_77, 1e-8);
}

#[test]
fn unknown_unit_is_reported() {
    let err = conversion::convert(QuantityKind::Pressure, 1.0, "furlong", "psi").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("furlong".into()));
    assert_eq!(err.to_string(), "unknown unit: furlong");
}
