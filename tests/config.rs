use approx::assert_relative_eq;
use vapor_chamber_toolbox::chamber::{PhaseChangeModel, WickConductivityModel};
use vapor_chamber_toolbox::config::{self, Config, ConfigError};
use vapor_chamber_toolbox::fluid::{self, FluidError};
use vapor_chamber_toolbox::mesh_db::{self, MeshDbError};

#[test]
fn empty_file_is_reference_design() {
    let cfg = Config::from_toml_str("").expect("empty config");
    assert_eq!(cfg, Config::default());
    assert_eq!(config::load_or_default(None).expect("default"), Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = Config::from_toml_str(
        r#"
[operating]
heat_load_w = 80.0

[condenser_wick]
mesh_wpi = 200.0
wire_diameter_um = 51.0
layers = 3

[model]
wick_conductivity = "parallel"
spreading = true

[model.phase_change]
model = "kinetic"
accommodation = 0.5
"#,
    )
    .expect("partial config");

    assert_eq!(cfg.operating.heat_load_w, 80.0);
    assert_eq!(cfg.operating.temperature_c, 70.0);
    assert_eq!(cfg.condenser_wick.layers, 3);
    assert_eq!(cfg.condenser_wick.weave_factor, 1.0);
    assert_eq!(cfg.model.wick_conductivity, WickConductivityModel::Parallel);
    assert_eq!(
        cfg.model.phase_change,
        PhaseChangeModel::Kinetic { accommodation: 0.5 }
    );
    assert!(cfg.model.spreading);
    assert!(!cfg.model.vapor_resistance);
}

#[test]
fn engineering_units_convert_to_si() {
    let input = Config::default().to_input().expect("input");
    assert_relative_eq!(input.operating.temperature_k, 343.15, max_relative = 1e-12);
    assert_relative_eq!(input.envelope.length_m, 0.07, max_relative = 1e-12);
    assert_relative_eq!(input.evaporator_wick.wire_diameter_m, 51e-6, max_relative = 1e-12);
    assert_relative_eq!(input.evaporator_wick.mesh_per_m, 200.0 / 0.0254, max_relative = 1e-12);
    assert_eq!(input.condenser_wick.layers, 5);
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = Config::from_toml_str("[operating\nheat_load_w = 1").expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unsupported_temperature_is_reported() {
    let mut cfg = Config::default();
    cfg.operating.temperature_c = 100.0;
    let err = cfg.to_input().expect_err("no table row at 100 C");
    assert!(matches!(
        err,
        ConfigError::Fluid(FluidError::UnsupportedTemperature { .. })
    ));
    assert!(fluid::water_at(343.4).is_ok());
}

#[test]
fn fluid_section_overrides_table() {
    let mut cfg = Config::default();
    let mut props = fluid::water_at(343.15).expect("water row");
    props.surface_tension = 0.05;
    cfg.fluid = Some(props);
    cfg.operating.temperature_c = 100.0;

    let input = cfg.to_input().expect("override input");
    assert_eq!(input.fluid.surface_tension, 0.05);
}

#[test]
fn catalog_lookup() {
    let fine = mesh_db::lookup(200.0).expect("200 wpi");
    assert_eq!(fine.code, "CU-200");
    assert_eq!(mesh_db::available_list(), "80, 200");
    assert!(matches!(
        mesh_db::lookup(100.0),
        Err(MeshDbError::UnknownMesh { .. })
    ));
}

#[test]
fn catalog_selection_replaces_mesh_and_keeps_layers() {
    let mut cfg = Config::default();
    cfg.evaporator_wick.layers = 3;
    cfg.evaporator_wick
        .select_catalog_mesh(80.0)
        .expect("80 wpi in catalog");
    assert_eq!(cfg.evaporator_wick.mesh_wpi, 80.0);
    assert_relative_eq!(cfg.evaporator_wick.wire_diameter_um, 150.0, max_relative = 1e-12);
    assert_eq!(cfg.evaporator_wick.layers, 3);

    assert!(cfg.condenser_wick.select_catalog_mesh(150.0).is_err());
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chamber.toml");

    let mut cfg = Config::default();
    cfg.operating.tilt_deg = 30.0;
    cfg.model.phase_change = PhaseChangeModel::Fixed {
        resistance_k_per_w: 0.02,
    };
    cfg.save(&path).expect("save");

    let loaded = Config::load(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Config::load(&dir.path().join("absent.toml")).expect_err("must fail");
    assert!(matches!(err, ConfigError::Io(_)));
}
