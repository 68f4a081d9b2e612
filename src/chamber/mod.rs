//! 베이퍼 챔버 1차원 정상상태 해석 파이프라인.
//!
//! 윅 특성 → 유로 형상 → 모세관 압력 수지 → 열저항 회로 순서로 한 번씩 계산한다.
//! 반복 계산이나 내부 상태는 없으며 같은 입력은 항상 같은 결과를 낸다.

pub mod capillary;
pub mod friction;
pub mod geometry;
pub mod resistance;
pub mod wick;

pub use capillary::{CapillaryVerdict, PressureBalance};
pub use geometry::{CondenserAreaModel, FlowGeometry, FlowPathModel, VaporCoreMode};
pub use resistance::{PhaseChangeModel, ResistanceKind, ResistanceNetwork, ResistanceTerm};
pub use wick::{ScreenMesh, WickCharacterization, WickConductivityModel, WickError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fluid::FluidProperties;

/// 해석 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// 설계점 작동 온도 [K]
    pub temperature_k: f64,
    /// 해석 열량 Q_in [W]
    pub heat_load_w: f64,
    /// 경사각 [deg] (0 = 수평)
    pub tilt_deg: f64,
}

/// 챔버 외형 치수 [m].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub length_m: f64,
    pub width_m: f64,
    pub evaporator_wall_m: f64,
    pub condenser_wall_m: f64,
    /// `VaporCoreMode::Fixed` 에서 쓰는 증기 공간 두께
    pub vapor_thickness_m: f64,
    /// `VaporCoreMode::Derived` 에서 쓰는 벽 사이 내부 두께
    pub internal_thickness_m: f64,
}

/// 열원(증발부) 접촉 면 치수 [m].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSource {
    pub length_m: f64,
    pub width_m: f64,
}

/// 관측된 설계 변형 중 어느 식을 쓸지 고르는 선택지.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    pub vapor_core: VaporCoreMode,
    pub condenser_area: CondenserAreaModel,
    pub flow_path: FlowPathModel,
    pub wick_conductivity: WickConductivityModel,
    pub phase_change: PhaseChangeModel,
    /// 증기 공간 저항(Clausius–Clapeyron)을 회로에 포함
    pub vapor_resistance: bool,
    /// 증발/응축부 퍼짐 저항을 회로에 포함
    pub spreading: bool,
}

/// SI 단위로 정리된 해석 입력 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct VaporChamberInput {
    pub operating: OperatingConditions,
    /// 충전율 (내부 공극 체적 대비 액체 체적)
    pub fill_ratio: f64,
    /// 제작 시 목표 초기 진공도 [Pa]
    pub target_vacuum_pa: f64,
    /// 실험 보정 계수 (R_corrected = R_ideal × 계수)
    pub correction_factor: f64,
    pub envelope: Envelope,
    pub heat_source: HeatSource,
    /// 외피(구리) 열전도율 [W/m·K]
    pub shell_conductivity: f64,
    pub evaporator_wick: ScreenMesh,
    pub condenser_wick: ScreenMesh,
    pub fluid: FluidProperties,
    pub options: ModelOptions,
}

/// 어느 쪽 윅인지 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WickSide {
    Evaporator,
    Condenser,
}

impl std::fmt::Display for WickSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WickSide::Evaporator => write!(f, "증발부"),
            WickSide::Condenser => write!(f, "응축부"),
        }
    }
}

/// 해석 중 발생 가능한 오류. 윅 설정 오류 한 가지뿐이다.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("{side} 윅 설정 오류: {source}")]
    InvalidWick {
        side: WickSide,
        #[source]
        source: WickError,
    },
}

/// 해석 결과 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    pub input: VaporChamberInput,
    pub evaporator_wick: WickCharacterization,
    pub condenser_wick: WickCharacterization,
    /// 증발부 윅 유효 열전도율 [W/m·K]
    pub evaporator_wick_conductivity: f64,
    /// 응축부 윅 유효 열전도율 [W/m·K]
    pub condenser_wick_conductivity: f64,
    pub geometry: FlowGeometry,
    pub pressure: PressureBalance,
    pub network: ResistanceNetwork,
}

impl Performance {
    pub fn verdict(&self) -> CapillaryVerdict {
        self.pressure.verdict()
    }

    pub fn max_heat_load_w(&self) -> f64 {
        self.pressure.max_heat_load_w
    }

    pub fn temperature_drop_k(&self) -> f64 {
        self.network.temperature_drop_k
    }
}

fn characterize(side: WickSide, mesh: &ScreenMesh) -> Result<WickCharacterization, ModelError> {
    wick::characterize(mesh).map_err(|source| ModelError::InvalidWick { side, source })
}

/// 입력 한 벌에 대해 전체 해석을 수행한다.
pub fn evaluate(input: &VaporChamberInput) -> Result<Performance, ModelError> {
    let options = input.options;
    let fluid = &input.fluid;

    let evaporator_wick = characterize(WickSide::Evaporator, &input.evaporator_wick)?;
    let condenser_wick = characterize(WickSide::Condenser, &input.condenser_wick)?;
    debug!(?evaporator_wick, ?condenser_wick, "윅 특성 계산 완료");

    let geometry = geometry::derive(
        geometry::GeometryInput {
            envelope: &input.envelope,
            heat_source: &input.heat_source,
            fill_ratio: input.fill_ratio,
            vapor_core: options.vapor_core,
            condenser_area: options.condenser_area,
            flow_path: options.flow_path,
        },
        &evaporator_wick,
        &condenser_wick,
    );
    debug!(?geometry, "유로 형상 계산 완료");

    let pressure = capillary::analyze(
        capillary::BalanceInput {
            fluid,
            heat_load_w: input.operating.heat_load_w,
            tilt_deg: input.operating.tilt_deg,
            chamber_width_m: input.envelope.width_m,
        },
        &evaporator_wick,
        &condenser_wick,
        &geometry,
    );
    debug!(
        capillary_pa = pressure.capillary_pa,
        total_pa = pressure.total_pa,
        max_heat_load_w = pressure.max_heat_load_w,
        friction_constant = pressure.friction.constant,
        "압력 수지 계산 완료"
    );
    if !pressure.is_operable() {
        warn!(
            heat_load_w = input.operating.heat_load_w,
            max_heat_load_w = pressure.max_heat_load_w,
            "모세관 한계 초과"
        );
    }

    let evaporator_wick_conductivity = wick::effective_conductivity(
        options.wick_conductivity,
        evaporator_wick.porosity,
        input.shell_conductivity,
        fluid.liquid_conductivity,
    );
    let condenser_wick_conductivity = wick::effective_conductivity(
        options.wick_conductivity,
        condenser_wick.porosity,
        input.shell_conductivity,
        fluid.liquid_conductivity,
    );

    let network = resistance::build(
        resistance::NetworkInput {
            fluid,
            temperature_k: input.operating.temperature_k,
            heat_load_w: input.operating.heat_load_w,
            shell_conductivity: input.shell_conductivity,
            evaporator_wall_m: input.envelope.evaporator_wall_m,
            condenser_wall_m: input.envelope.condenser_wall_m,
            correction_factor: input.correction_factor,
            evaporator_wick_conductivity,
            condenser_wick_conductivity,
            phase_change: options.phase_change,
            vapor_resistance: options.vapor_resistance,
            spreading: options.spreading,
        },
        &geometry,
        &pressure,
    );
    debug!(
        ideal_k_per_w = network.ideal_k_per_w,
        corrected_k_per_w = network.corrected_k_per_w,
        "열저항 회로 계산 완료"
    );

    Ok(Performance {
        input: input.clone(),
        evaporator_wick,
        condenser_wick,
        evaporator_wick_conductivity,
        condenser_wick_conductivity,
        geometry,
        pressure,
        network,
    })
}
