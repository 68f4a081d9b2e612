use approx::assert_relative_eq;
use vapor_chamber_toolbox::chamber::capillary::{
    capillary_pressure, gravity_head, CapillaryVerdict, GRAVITY,
};
use vapor_chamber_toolbox::chamber::friction::{
    shah_london_rectangular, vapor_friction, DuctRegime, PARALLEL_PLATE_FRE,
};
use vapor_chamber_toolbox::chamber::{self, PressureBalance};
use vapor_chamber_toolbox::config::Config;
use vapor_chamber_toolbox::fluid;

fn reference_balance() -> PressureBalance {
    let input = Config::default().to_input().expect("reference input");
    chamber::evaluate(&input).expect("reference evaluation").pressure
}

#[test]
fn wide_duct_uses_parallel_plate_constant() {
    let friction = vapor_friction(0.07, 0.00192);
    assert_eq!(friction.regime, DuctRegime::ParallelPlate);
    assert_eq!(friction.constant, PARALLEL_PLATE_FRE);
    assert!(friction.aspect_ratio_used > 10.0);

    // 두께가 폭보다 큰 경우도 역수 종횡비로 판단
    let tall = vapor_friction(0.001, 0.05);
    assert_eq!(tall.constant, PARALLEL_PLATE_FRE);
}

#[test]
fn square_duct_uses_shah_london() {
    let friction = vapor_friction(0.01, 0.01);
    assert_eq!(friction.regime, DuctRegime::Rectangular);
    assert_relative_eq!(friction.constant, 14.2296, max_relative = 1e-9);
    assert_relative_eq!(shah_london_rectangular(0.0), 24.0);
}

#[test]
fn capillary_pressure_of_reference_wick() {
    let water = fluid::water_at(343.15).expect("water row");
    assert_relative_eq!(
        capillary_pressure(&water, 6.35e-5),
        2028.3464566929133,
        max_relative = 1e-9
    );
}

#[test]
fn gravity_head_vanishes_when_horizontal() {
    let water = fluid::water_at(343.15).expect("water row");
    assert_eq!(gravity_head(&water, 0.0225, 0.0), 0.0);
    assert_relative_eq!(
        gravity_head(&water, 0.0225, 90.0),
        977.8 * GRAVITY * 0.0225,
        max_relative = 1e-12
    );
}

#[test]
fn reference_pressure_breakdown() {
    let balance = reference_balance();
    assert_relative_eq!(balance.capillary_pa, 2028.3464566929133, max_relative = 1e-9);
    assert_relative_eq!(balance.liquid_pa, 130.4406525930045, max_relative = 1e-9);
    assert_relative_eq!(balance.vapor_pa, 2.0387405507501657, max_relative = 1e-9);
    assert_eq!(balance.gravity_pa, 0.0);
    assert_relative_eq!(balance.total_pa, 132.47939314375466, max_relative = 1e-9);
    assert_relative_eq!(balance.max_heat_load_w, 2296.598446626263, max_relative = 1e-9);
    assert_relative_eq!(
        balance.liquid_coefficient(),
        0.86960435062003,
        max_relative = 1e-9
    );
    assert_relative_eq!(balance.vapor_coefficient, 0.01359160367166777, max_relative = 1e-9);
}

#[test]
fn losses_at_max_heat_load_equal_capillary_pressure() {
    let balance = reference_balance();
    assert_relative_eq!(
        balance.total_at(balance.max_heat_load_w),
        balance.capillary_pa,
        max_relative = 1e-12
    );
    assert_relative_eq!(balance.total_at(balance.heat_load_w), balance.total_pa, max_relative = 1e-12);
}

#[test]
fn verdict_follows_pressure_comparison() {
    let mut balance = reference_balance();
    match balance.verdict() {
        CapillaryVerdict::Met { safety_factor } => {
            assert_relative_eq!(safety_factor, balance.capillary_pa / balance.total_pa);
        }
        other => panic!("expected Met, got {other:?}"),
    }

    // 경계값은 운전 가능으로 본다
    balance.total_pa = balance.capillary_pa;
    assert!(balance.is_operable());

    balance.total_pa = balance.capillary_pa + 1.0;
    assert_eq!(
        balance.verdict(),
        CapillaryVerdict::Failed {
            max_heat_load_w: balance.max_heat_load_w
        }
    );
}

#[test]
fn overload_fails_capillary_limit() {
    let mut cfg = Config::default();
    cfg.operating.heat_load_w = 3000.0;
    let perf = chamber::evaluate(&cfg.to_input().expect("input")).expect("evaluation");
    assert!(!perf.pressure.is_operable());
    assert!(perf.max_heat_load_w() < 3000.0);
}
