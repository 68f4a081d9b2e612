//! 열원에서 응축면까지의 직렬 열저항 회로.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::fluid::FluidProperties;

use super::capillary::PressureBalance;
use super::geometry::FlowGeometry;

/// 일반 기체 상수 [J/mol·K].
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314_462_618;

/// 증발/응축 계면 저항 모델.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum PhaseChangeModel {
    /// 실험으로 정한 고정 저항 [K/W]
    Fixed { resistance_k_per_w: f64 },
    /// 분자 운동론 적응 계수 식
    Kinetic { accommodation: f64 },
}

impl Default for PhaseChangeModel {
    fn default() -> Self {
        Self::Fixed {
            resistance_k_per_w: 0.01,
        }
    }
}

/// 회로를 이루는 저항 종류. 선언 순서가 열 흐름 순서이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResistanceKind {
    EvaporatorSpreading,
    EvaporatorWall,
    EvaporatorWick,
    PhaseChange,
    VaporCore,
    CondenserWick,
    CondenserWall,
    CondenserSpreading,
}

impl ResistanceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResistanceKind::EvaporatorSpreading => "Evaporator Spreading (R_sp_evap)",
            ResistanceKind::EvaporatorWall => "Evaporator Wall (R_evap_wall)",
            ResistanceKind::EvaporatorWick => "Evaporator Wick (R_evap_wick)",
            ResistanceKind::PhaseChange => "Phase Change (R_phase_change)",
            ResistanceKind::VaporCore => "Vapor Core (R_vapor)",
            ResistanceKind::CondenserWick => "Condenser Wick (R_cond_wick)",
            ResistanceKind::CondenserWall => "Condenser Wall (R_cond_wall)",
            ResistanceKind::CondenserSpreading => "Condenser Spreading (R_sp_cond)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceTerm {
    pub kind: ResistanceKind,
    /// [K/W]
    pub value: f64,
}

/// 직렬 열저항 회로와 합계.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceNetwork {
    pub terms: Vec<ResistanceTerm>,
    /// 항 합계 R_ideal [K/W]
    pub ideal_k_per_w: f64,
    pub correction_factor: f64,
    /// R_ideal × 보정 계수 [K/W]
    pub corrected_k_per_w: f64,
    /// Q_in × R_corrected [K]
    pub temperature_drop_k: f64,
}

impl ResistanceNetwork {
    /// 항 목록으로 합계, 보정 저항, 온도차를 계산한다.
    pub fn from_terms(
        terms: Vec<ResistanceTerm>,
        correction_factor: f64,
        heat_load_w: f64,
    ) -> Self {
        let ideal: f64 = terms.iter().map(|t| t.value).sum();
        let corrected = ideal * correction_factor;
        Self {
            terms,
            ideal_k_per_w: ideal,
            correction_factor,
            corrected_k_per_w: corrected,
            temperature_drop_k: heat_load_w * corrected,
        }
    }

    pub fn get(&self, kind: ResistanceKind) -> Option<f64> {
        self.terms.iter().find(|t| t.kind == kind).map(|t| t.value)
    }
}

/// 1차원 전도 저항 t / (k·A).
pub fn conduction(thickness_m: f64, conductivity: f64, area_m2: f64) -> f64 {
    thickness_m / (conductivity * area_m2)
}

/// 무한 평판 위 유한 열원의 퍼짐 저항.
///
/// 같은 면적의 원형 등열유속 열원 평균온도 기준 8 / (3π²·k·a), a = √(A/π).
pub fn spreading_resistance(conductivity: f64, source_area_m2: f64) -> f64 {
    let radius = (source_area_m2 / PI).sqrt();
    8.0 / (3.0 * PI * PI * conductivity * radius)
}

/// 계면 열전달 계수 [W/m²·K].
///
/// h_i = (2α/(2−α))·h_fg²·ρ_v / T · √(M / (2π·R·T)), α = 적응 계수
pub fn interface_coefficient(
    fluid: &FluidProperties,
    temperature_k: f64,
    accommodation: f64,
) -> f64 {
    let kinetic = (fluid.molar_mass / (2.0 * PI * UNIVERSAL_GAS_CONSTANT * temperature_k)).sqrt();
    (2.0 * accommodation / (2.0 - accommodation)) * fluid.latent_heat.powi(2)
        * fluid.vapor_density
        / temperature_k
        * kinetic
}

/// 증발면과 응축면 두 계면의 저항 합.
pub fn phase_change_resistance(
    model: PhaseChangeModel,
    fluid: &FluidProperties,
    temperature_k: f64,
    geometry: &FlowGeometry,
) -> f64 {
    match model {
        PhaseChangeModel::Fixed { resistance_k_per_w } => resistance_k_per_w,
        PhaseChangeModel::Kinetic { accommodation } => {
            let h_i = interface_coefficient(fluid, temperature_k, accommodation);
            1.0 / (h_i * geometry.evaporator_area_m2) + 1.0 / (h_i * geometry.condenser_area_m2)
        }
    }
}

/// Clausius–Clapeyron 기울기 dT/dP = T·v_fg / h_fg [K/Pa].
pub fn saturation_slope(fluid: &FluidProperties, temperature_k: f64) -> f64 {
    temperature_k * fluid.specific_volume_change() / fluid.latent_heat
}

/// 증기 압력 손실에 대응하는 포화 온도 강하를 열량으로 나눈 값.
pub fn vapor_core_resistance(
    fluid: &FluidProperties,
    temperature_k: f64,
    vapor_pressure_drop_pa: f64,
    heat_load_w: f64,
) -> f64 {
    saturation_slope(fluid, temperature_k) * vapor_pressure_drop_pa / heat_load_w
}

/// 회로 구성 입력 묶음.
#[derive(Debug, Clone, Copy)]
pub struct NetworkInput<'a> {
    pub fluid: &'a FluidProperties,
    pub temperature_k: f64,
    pub heat_load_w: f64,
    pub shell_conductivity: f64,
    pub evaporator_wall_m: f64,
    pub condenser_wall_m: f64,
    pub correction_factor: f64,
    /// 증발부 윅 유효 열전도율 [W/m·K]
    pub evaporator_wick_conductivity: f64,
    /// 응축부 윅 유효 열전도율 [W/m·K]
    pub condenser_wick_conductivity: f64,
    pub phase_change: PhaseChangeModel,
    pub vapor_resistance: bool,
    pub spreading: bool,
}

/// 직렬 열저항 회로를 구성한다.
pub fn build(
    input: NetworkInput<'_>,
    geometry: &FlowGeometry,
    pressure: &PressureBalance,
) -> ResistanceNetwork {
    let k_shell = input.shell_conductivity;
    let k_wick_evap = input.evaporator_wick_conductivity;
    let k_wick_cond = input.condenser_wick_conductivity;

    let a_evap = geometry.evaporator_area_m2;
    let a_cond = geometry.condenser_area_m2;

    let mut terms = Vec::with_capacity(8);
    let mut push = |kind, value| terms.push(ResistanceTerm { kind, value });

    if input.spreading {
        push(
            ResistanceKind::EvaporatorSpreading,
            spreading_resistance(k_shell, a_evap),
        );
    }
    push(
        ResistanceKind::EvaporatorWall,
        conduction(input.evaporator_wall_m, k_shell, a_evap),
    );
    push(
        ResistanceKind::EvaporatorWick,
        conduction(geometry.evaporator_wick_thickness_m, k_wick_evap, a_evap),
    );
    push(
        ResistanceKind::PhaseChange,
        phase_change_resistance(input.phase_change, input.fluid, input.temperature_k, geometry),
    );
    if input.vapor_resistance {
        push(
            ResistanceKind::VaporCore,
            vapor_core_resistance(
                input.fluid,
                input.temperature_k,
                pressure.vapor_pa,
                input.heat_load_w,
            ),
        );
    }
    push(
        ResistanceKind::CondenserWick,
        conduction(geometry.condenser_wick_thickness_m, k_wick_cond, a_cond),
    );
    push(
        ResistanceKind::CondenserWall,
        conduction(input.condenser_wall_m, k_shell, a_cond),
    );
    if input.spreading {
        push(
            ResistanceKind::CondenserSpreading,
            spreading_resistance(k_shell, a_cond),
        );
    }

    ResistanceNetwork::from_terms(terms, input.correction_factor, input.heat_load_w)
}
