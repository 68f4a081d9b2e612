//! 챔버 치수로부터 유로 면적, 유로 길이, 수력 직경, 내부 체적을 유도한다.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::wick::WickCharacterization;
use super::{Envelope, HeatSource};

/// 증기 공간 두께를 정하는 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaporCoreMode {
    /// 입력된 증기 공간 두께를 그대로 사용
    #[default]
    Fixed,
    /// 내부 두께에서 양쪽 윅 두께를 뺀 값
    Derived,
}

/// 응축부 면적 산정 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CondenserAreaModel {
    /// 챔버 면적에서 열원 면적을 뺀 값
    #[default]
    ExcludingEvaporator,
    /// 챔버 전체 면적
    FullChamber,
}

/// 액체/증기 유로 길이와 단면적 산정 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPathModel {
    /// 유효 길이 L_eff와 챔버 폭 기준 단면적
    #[default]
    Effective,
    /// 열원 중심으로 향하는 반경 방향 흐름. 둘레 기준 단면적
    Radial,
}

/// 유도된 형상값. 모든 값은 SI 단위이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowGeometry {
    pub evaporator_wick_thickness_m: f64,
    pub condenser_wick_thickness_m: f64,
    pub vapor_thickness_m: f64,

    /// 열원(증발부) 접촉 면적
    pub evaporator_area_m2: f64,
    /// 응축부 면적
    pub condenser_area_m2: f64,

    pub evaporator_wick_flow_area_m2: f64,
    pub condenser_wick_flow_area_m2: f64,
    pub vapor_flow_area_m2: f64,
    /// 증기 공간 수력 직경
    pub hydraulic_diameter_m: f64,

    /// L_eff = (L + l_evap) / 4. 중력 수두 계산에도 쓴다.
    pub effective_length_m: f64,
    pub evaporator_flow_length_m: f64,
    pub condenser_flow_length_m: f64,
    pub vapor_flow_length_m: f64,

    pub vapor_volume_m3: f64,
    pub evaporator_pore_volume_m3: f64,
    pub condenser_pore_volume_m3: f64,
    /// 충전해야 할 액체 체적
    pub liquid_charge_m3: f64,
}

impl FlowGeometry {
    /// 증기 공간과 두 윅 기공 체적의 합.
    pub fn internal_void_volume_m3(&self) -> f64 {
        self.vapor_volume_m3 + self.evaporator_pore_volume_m3 + self.condenser_pore_volume_m3
    }
}

/// d_h = 2·t·W / (t + W)
pub fn hydraulic_diameter(thickness_m: f64, width_m: f64) -> f64 {
    2.0 * thickness_m * width_m / (thickness_m + width_m)
}

/// 증기 공간 두께를 결정한다.
pub fn vapor_core_thickness(
    mode: VaporCoreMode,
    envelope: &Envelope,
    evaporator_wick_thickness_m: f64,
    condenser_wick_thickness_m: f64,
) -> f64 {
    match mode {
        VaporCoreMode::Fixed => envelope.vapor_thickness_m,
        VaporCoreMode::Derived => {
            envelope.internal_thickness_m - evaporator_wick_thickness_m - condenser_wick_thickness_m
        }
    }
}

/// 형상 유도 입력 묶음.
#[derive(Debug, Clone, Copy)]
pub struct GeometryInput<'a> {
    pub envelope: &'a Envelope,
    pub heat_source: &'a HeatSource,
    pub fill_ratio: f64,
    pub vapor_core: VaporCoreMode,
    pub condenser_area: CondenserAreaModel,
    pub flow_path: FlowPathModel,
}

/// 윅 특성값과 치수로 유로 형상을 계산한다.
pub fn derive(
    input: GeometryInput<'_>,
    evaporator_wick: &WickCharacterization,
    condenser_wick: &WickCharacterization,
) -> FlowGeometry {
    let envelope = input.envelope;
    let source = input.heat_source;

    let t_evap_wick = evaporator_wick.thickness_m;
    let t_cond_wick = condenser_wick.thickness_m;
    let t_vapor = vapor_core_thickness(input.vapor_core, envelope, t_evap_wick, t_cond_wick);
    if t_vapor <= 0.0 {
        warn!(
            vapor_thickness_m = t_vapor,
            "윅 두께 합이 내부 두께 이상이라 증기 공간이 없습니다"
        );
    }

    let chamber_area = envelope.length_m * envelope.width_m;
    let evaporator_area = source.length_m * source.width_m;
    let condenser_area = match input.condenser_area {
        CondenserAreaModel::ExcludingEvaporator => chamber_area - evaporator_area,
        CondenserAreaModel::FullChamber => chamber_area,
    };

    let effective_length = (envelope.length_m + source.length_m) / 4.0;

    let (evap_len, cond_len, vapor_len, evap_flow_area, cond_flow_area, vapor_flow_area) =
        match input.flow_path {
            FlowPathModel::Effective => (
                effective_length / 2.0,
                effective_length / 2.0,
                effective_length,
                t_evap_wick * envelope.width_m,
                t_cond_wick * envelope.width_m,
                t_vapor * envelope.width_m,
            ),
            FlowPathModel::Radial => {
                let half_diagonal = source.length_m.hypot(source.width_m) / 2.0;
                let center_to_edge = envelope.length_m.max(envelope.width_m) / 2.0;
                let evaporator_perimeter = 2.0 * (source.length_m + source.width_m);
                let chamber_perimeter = 2.0 * (envelope.length_m + envelope.width_m);
                let evap_len = half_diagonal / 2.0;
                let cond_len = center_to_edge - half_diagonal;
                (
                    evap_len,
                    cond_len,
                    evap_len + cond_len,
                    t_evap_wick * evaporator_perimeter,
                    t_cond_wick * chamber_perimeter,
                    t_vapor * evaporator_perimeter,
                )
            }
        };

    // 윅은 챔버 전면에 깔려 있으므로 기공 체적은 챔버 면적 기준
    let vapor_volume = chamber_area * t_vapor;
    let evaporator_pore_volume = chamber_area * t_evap_wick * evaporator_wick.porosity;
    let condenser_pore_volume = chamber_area * t_cond_wick * condenser_wick.porosity;
    let liquid_charge = (vapor_volume + evaporator_pore_volume + condenser_pore_volume)
        * input.fill_ratio;

    FlowGeometry {
        evaporator_wick_thickness_m: t_evap_wick,
        condenser_wick_thickness_m: t_cond_wick,
        vapor_thickness_m: t_vapor,
        evaporator_area_m2: evaporator_area,
        condenser_area_m2: condenser_area,
        evaporator_wick_flow_area_m2: evap_flow_area,
        condenser_wick_flow_area_m2: cond_flow_area,
        vapor_flow_area_m2: vapor_flow_area,
        hydraulic_diameter_m: hydraulic_diameter(t_vapor, envelope.width_m),
        effective_length_m: effective_length,
        evaporator_flow_length_m: evap_len,
        condenser_flow_length_m: cond_len,
        vapor_flow_length_m: vapor_len,
        vapor_volume_m3: vapor_volume,
        evaporator_pore_volume_m3: evaporator_pore_volume,
        condenser_pore_volume_m3: condenser_pore_volume,
        liquid_charge_m3: liquid_charge,
    }
}
