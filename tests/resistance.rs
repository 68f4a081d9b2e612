use approx::assert_relative_eq;
use vapor_chamber_toolbox::chamber::resistance::{
    conduction, interface_coefficient, saturation_slope, spreading_resistance,
};
use vapor_chamber_toolbox::chamber::{
    self, PhaseChangeModel, ResistanceKind, ResistanceNetwork, ResistanceTerm,
};
use vapor_chamber_toolbox::config::Config;
use vapor_chamber_toolbox::fluid;

fn evaluate(cfg: &Config) -> chamber::Performance {
    chamber::evaluate(&cfg.to_input().expect("input")).expect("evaluation")
}

#[test]
fn reference_network_terms() {
    let perf = evaluate(&Config::default());
    let net = &perf.network;
    let kinds: Vec<_> = net.terms.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ResistanceKind::EvaporatorWall,
            ResistanceKind::EvaporatorWick,
            ResistanceKind::PhaseChange,
            ResistanceKind::CondenserWick,
            ResistanceKind::CondenserWall,
        ]
    );
    let expected = [
        0.014802631578947368,
        0.995826731703995,
        0.01,
        0.22959996883726774,
        0.0013157894736842103,
    ];
    for (term, value) in net.terms.iter().zip(expected) {
        assert_relative_eq!(term.value, value, max_relative = 1e-9);
    }

    assert_relative_eq!(net.ideal_k_per_w, 1.2515451215938942, max_relative = 1e-9);
    assert_relative_eq!(net.corrected_k_per_w, 1.501854145912673, max_relative = 1e-9);
    assert_relative_eq!(perf.temperature_drop_k(), 225.27812188690095, max_relative = 1e-9);
    assert_relative_eq!(perf.evaporator_wick_conductivity, 1.2803432157502959, max_relative = 1e-9);
    assert_relative_eq!(perf.condenser_wick_conductivity, 1.4518004293353717, max_relative = 1e-9);
}

#[test]
fn totals_follow_terms() {
    let terms = vec![
        ResistanceTerm {
            kind: ResistanceKind::EvaporatorWall,
            value: 0.2,
        },
        ResistanceTerm {
            kind: ResistanceKind::PhaseChange,
            value: 0.05,
        },
        ResistanceTerm {
            kind: ResistanceKind::CondenserWall,
            value: 0.25,
        },
    ];
    let net = ResistanceNetwork::from_terms(terms, 1.5, 40.0);
    assert_relative_eq!(net.ideal_k_per_w, 0.5);
    assert_relative_eq!(net.corrected_k_per_w, 0.75);
    assert_relative_eq!(net.temperature_drop_k, 30.0);
    assert_eq!(net.get(ResistanceKind::PhaseChange), Some(0.05));
    assert_eq!(net.get(ResistanceKind::VaporCore), None);
}

#[test]
fn conduction_is_thickness_over_conductance() {
    assert_relative_eq!(conduction(2.25e-3, 380.0, 4e-4), 0.014802631578947368, max_relative = 1e-12);
}

#[test]
fn spreading_resistance_of_heat_source() {
    assert_relative_eq!(
        spreading_resistance(380.0, 4e-4),
        0.06301302530707599,
        max_relative = 1e-9
    );
}

#[test]
fn optional_terms_extend_network() {
    let mut cfg = Config::default();
    cfg.model.spreading = true;
    cfg.model.vapor_resistance = true;
    cfg.model.phase_change = PhaseChangeModel::Kinetic { accommodation: 1.0 };
    let perf = evaluate(&cfg);
    let net = &perf.network;

    assert_eq!(net.terms.len(), 8);
    assert_eq!(net.terms[0].kind, ResistanceKind::EvaporatorSpreading);
    assert_eq!(net.terms[7].kind, ResistanceKind::CondenserSpreading);
    assert_relative_eq!(
        net.get(ResistanceKind::CondenserSpreading).expect("cond spreading"),
        0.01878685440727153,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        net.get(ResistanceKind::PhaseChange).expect("phase change"),
        0.0004334434507869315,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        net.get(ResistanceKind::VaporCore).expect("vapor core"),
        1.0107544045042986e-05,
        max_relative = 1e-6
    );

    let sum: f64 = net.terms.iter().map(|t| t.value).sum();
    assert_relative_eq!(net.ideal_k_per_w, sum, max_relative = 1e-12);
    assert_relative_eq!(
        net.corrected_k_per_w,
        net.ideal_k_per_w * cfg.calibration.correction_factor,
        max_relative = 1e-12
    );
}

#[test]
fn kinetic_coefficient_increases_with_accommodation() {
    let water = fluid::water_at(343.15).expect("water row");
    let low = interface_coefficient(&water, 343.15, 0.1);
    let high = interface_coefficient(&water, 343.15, 1.0);
    assert!(high > low && low > 0.0);
}

#[test]
fn saturation_slope_is_positive() {
    let water = fluid::water_at(343.15).expect("water row");
    assert!(saturation_slope(&water, 343.15) > 0.0);
}
