use vapor_chamber_toolbox::fluid::{self, if97};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * expected.abs(),
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn saturation_pressure_at_operating_point() {
    // 70 °C 포화압 약 31.2 kPa
    let p = if97::saturation_pressure_pa(343.15).expect("psat");
    assert_close("psat", p, 31_202.0, 1e-3);
}

#[test]
fn saturation_pressure_at_normal_boiling_point() {
    let p = if97::saturation_pressure_pa(373.15).expect("psat");
    assert_close("psat", p, 101_418.0, 2e-3);
}

#[test]
fn out_of_range_temperature() {
    assert!(matches!(
        if97::saturation_pressure_pa(200.0),
        Err(if97::If97Error::OutOfRange { .. })
    ));
    assert!(if97::saturation_pressure_pa(700.0).is_err());
}

#[test]
fn water_table_agrees_with_if97() {
    let water = fluid::water_at(343.15).expect("water row");
    let check = if97::cross_check(&water).expect("cross check");
    assert_eq!(check.rows.len(), 3);
    assert!(
        check.max_abs_deviation_percent() < 1.0,
        "max deviation {}",
        check.max_abs_deviation_percent()
    );
    assert_close("rho_l", check.saturation.liquid_density, 977.76, 2e-3);
    assert_close("h_fg", check.saturation.latent_heat, 2_333_000.0, 5e-3);
}
