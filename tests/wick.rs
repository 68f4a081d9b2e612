use approx::assert_relative_eq;
use vapor_chamber_toolbox::chamber::wick::{
    characterize, effective_conductivity, permeability, pore_radius, porosity, wick_thickness,
};
use vapor_chamber_toolbox::chamber::{ScreenMesh, WickConductivityModel, WickError};
use vapor_chamber_toolbox::units::wires_per_inch_to_per_meter;

fn evaporator_mesh() -> ScreenMesh {
    ScreenMesh::from_wpi(200.0, 51e-6, 5, 1.0)
}

fn condenser_mesh() -> ScreenMesh {
    ScreenMesh::from_wpi(80.0, 150e-6, 5, 1.0)
}

#[test]
fn mesh_count_converts_from_inch() {
    assert_relative_eq!(wires_per_inch_to_per_meter(200.0), 7874.015748031496, max_relative = 1e-12);
}

#[test]
fn reference_wicks_have_physical_properties() {
    let evap = characterize(&evaporator_mesh()).expect("evaporator wick");
    assert_relative_eq!(evap.thickness_m, 0.51e-3, max_relative = 1e-12);
    assert_relative_eq!(evap.porosity, 0.6846038871396074, max_relative = 1e-9);
    assert_relative_eq!(evap.permeability_m2, 6.876792665719205e-11, max_relative = 1e-9);
    assert_relative_eq!(evap.pore_radius_m, 6.35e-5, max_relative = 1e-9);

    let cond = characterize(&condenser_mesh()).expect("condenser wick");
    assert_relative_eq!(cond.thickness_m, 1.5e-3, max_relative = 1e-12);
    assert_relative_eq!(cond.porosity, 0.6289457495760087, max_relative = 1e-9);
    assert_relative_eq!(cond.permeability_m2, 3.3326325006680667e-10, max_relative = 1e-9);

    for wick in [evap, cond] {
        assert!(wick.porosity > 0.0 && wick.porosity < 1.0);
        assert!(wick.permeability_m2 > 0.0);
    }
}

#[test]
fn pore_radius_is_half_inverse_mesh_count() {
    let n = 3149.606299212598;
    assert_relative_eq!(pore_radius(n).expect("radius"), 1.0 / (2.0 * n));
}

#[test]
fn non_positive_mesh_count_is_rejected() {
    for n in [0.0, -10.0, f64::NAN] {
        assert!(matches!(
            pore_radius(n),
            Err(WickError::NonPositivePoreRadius { .. })
        ));
    }
    let mesh = ScreenMesh::from_wpi(0.0, 51e-6, 5, 1.0);
    assert!(characterize(&mesh).is_err());
}

#[test]
fn overfilled_mesh_has_no_porosity() {
    // 와이어가 피치보다 굵으면 기공률이 음수가 된다
    let mesh = ScreenMesh::from_wpi(400.0, 150e-6, 2, 1.0);
    assert!(porosity(&mesh) < 0.0);
    assert!(matches!(
        characterize(&mesh),
        Err(WickError::PorosityOutOfRange { .. })
    ));
}

#[test]
fn weave_factor_reduces_porosity() {
    let plain = evaporator_mesh();
    let crimped = ScreenMesh::from_wpi(200.0, 51e-6, 5, 1.05);
    assert!(porosity(&crimped) < porosity(&plain));
    assert_eq!(wick_thickness(&crimped), wick_thickness(&plain));
}

#[test]
fn permeability_grows_with_porosity() {
    assert!(permeability(51e-6, 0.7) > permeability(51e-6, 0.6));
}

#[test]
fn conductivity_models_bracket_each_other() {
    let (eps, k_s, k_l) = (0.6846038871396074, 380.0, 0.668);
    let maxwell = effective_conductivity(WickConductivityModel::Maxwell, eps, k_s, k_l);
    let parallel = effective_conductivity(WickConductivityModel::Parallel, eps, k_s, k_l);
    let series = effective_conductivity(WickConductivityModel::Series, eps, k_s, k_l);

    assert_relative_eq!(maxwell, 1.2803432157502959, max_relative = 1e-9);
    assert!(series < maxwell && maxwell < parallel);
}
