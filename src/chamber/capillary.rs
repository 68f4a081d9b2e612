//! 모세관 압력 수지와 모세관 한계 열량.
//!
//! 액체/증기 손실은 모두 Q에 선형이므로 ΔP_loss = (c_l + c_v)·Q + ΔP_g 로 쓰고,
//! ΔP_cap 과 같아지는 Q를 바로 풀어 Q_max 로 삼는다.

use crate::fluid::FluidProperties;

use super::friction::{vapor_friction, VaporFriction};
use super::geometry::FlowGeometry;
use super::wick::WickCharacterization;

/// 중력 가속도 [m/s²].
pub const GRAVITY: f64 = 9.81;

/// 모세관 한계 판정.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapillaryVerdict {
    /// 구동 압력이 손실을 감당함. 안전율 ΔP_cap / ΔP_total
    Met { safety_factor: f64 },
    /// 건조(dry-out) 발생. 운전 상한 Q_max [W]
    Failed { max_heat_load_w: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureBalance {
    /// 해석 열량 [W]
    pub heat_load_w: f64,
    /// 모세관 구동 압력 [Pa]
    pub capillary_pa: f64,
    /// 증발부 윅 액체 손실 계수 [Pa/W]
    pub evaporator_liquid_coefficient: f64,
    /// 응축부 윅 액체 손실 계수 [Pa/W]
    pub condenser_liquid_coefficient: f64,
    /// 증기 손실 계수 [Pa/W]
    pub vapor_coefficient: f64,
    pub liquid_pa: f64,
    pub vapor_pa: f64,
    pub gravity_pa: f64,
    pub total_pa: f64,
    /// 모세관 한계 열량 [W]
    pub max_heat_load_w: f64,
    pub friction: VaporFriction,
}

impl PressureBalance {
    pub fn liquid_coefficient(&self) -> f64 {
        self.evaporator_liquid_coefficient + self.condenser_liquid_coefficient
    }

    /// 임의 열량에서의 총 압력 손실 [Pa].
    pub fn total_at(&self, heat_load_w: f64) -> f64 {
        (self.liquid_coefficient() + self.vapor_coefficient) * heat_load_w + self.gravity_pa
    }

    /// ΔP_cap ≥ ΔP_total 이면 운전 가능.
    pub fn is_operable(&self) -> bool {
        self.capillary_pa >= self.total_pa
    }

    pub fn verdict(&self) -> CapillaryVerdict {
        if self.is_operable() {
            CapillaryVerdict::Met {
                safety_factor: self.capillary_pa / self.total_pa,
            }
        } else {
            CapillaryVerdict::Failed {
                max_heat_load_w: self.max_heat_load_w,
            }
        }
    }
}

/// ΔP_cap = 2σ·cosθ / r_c
pub fn capillary_pressure(fluid: &FluidProperties, pore_radius_m: f64) -> f64 {
    2.0 * fluid.surface_tension * fluid.contact_angle_deg.to_radians().cos() / pore_radius_m
}

/// Darcy 식 액체 손실 계수 μ_l·L / (ρ_l·A·K·h_fg) [Pa/W].
pub fn liquid_loss_coefficient(
    fluid: &FluidProperties,
    flow_length_m: f64,
    flow_area_m2: f64,
    permeability_m2: f64,
) -> f64 {
    fluid.liquid_viscosity * flow_length_m
        / (fluid.liquid_density * flow_area_m2 * permeability_m2 * fluid.latent_heat)
}

/// 층류 증기 손실 계수 2·C·μ_v·L / (ρ_v·A·d_h²·h_fg) [Pa/W].
pub fn vapor_loss_coefficient(
    fluid: &FluidProperties,
    friction_constant: f64,
    flow_length_m: f64,
    flow_area_m2: f64,
    hydraulic_diameter_m: f64,
) -> f64 {
    2.0 * friction_constant * fluid.vapor_viscosity * flow_length_m
        / (fluid.vapor_density * flow_area_m2 * hydraulic_diameter_m.powi(2) * fluid.latent_heat)
}

/// ΔP_g = ρ_l·g·L·sin(φ)
pub fn gravity_head(fluid: &FluidProperties, length_m: f64, tilt_deg: f64) -> f64 {
    fluid.liquid_density * GRAVITY * length_m * tilt_deg.to_radians().sin()
}

/// 압력 수지 입력 묶음.
#[derive(Debug, Clone, Copy)]
pub struct BalanceInput<'a> {
    pub fluid: &'a FluidProperties,
    pub heat_load_w: f64,
    pub tilt_deg: f64,
    /// 증기 공간 폭 (마찰 상수 종횡비 계산용)
    pub chamber_width_m: f64,
}

/// 압력 수지를 계산한다. 모세관 반경은 증발부 윅 값을 쓴다.
pub fn analyze(
    input: BalanceInput<'_>,
    evaporator_wick: &WickCharacterization,
    condenser_wick: &WickCharacterization,
    geometry: &FlowGeometry,
) -> PressureBalance {
    let fluid = input.fluid;
    let capillary = capillary_pressure(fluid, evaporator_wick.pore_radius_m);

    let evaporator_liquid_coefficient = liquid_loss_coefficient(
        fluid,
        geometry.evaporator_flow_length_m,
        geometry.evaporator_wick_flow_area_m2,
        evaporator_wick.permeability_m2,
    );
    let condenser_liquid_coefficient = liquid_loss_coefficient(
        fluid,
        geometry.condenser_flow_length_m,
        geometry.condenser_wick_flow_area_m2,
        condenser_wick.permeability_m2,
    );

    let friction = vapor_friction(input.chamber_width_m, geometry.vapor_thickness_m);
    let vapor_coefficient = vapor_loss_coefficient(
        fluid,
        friction.constant,
        geometry.vapor_flow_length_m,
        geometry.vapor_flow_area_m2,
        geometry.hydraulic_diameter_m,
    );

    let liquid_coefficient = evaporator_liquid_coefficient + condenser_liquid_coefficient;
    let liquid = liquid_coefficient * input.heat_load_w;
    let vapor = vapor_coefficient * input.heat_load_w;
    let gravity = gravity_head(fluid, geometry.effective_length_m, input.tilt_deg);
    let total = liquid + vapor + gravity;
    let max_heat_load = (capillary - gravity) / (liquid_coefficient + vapor_coefficient);

    PressureBalance {
        heat_load_w: input.heat_load_w,
        capillary_pa: capillary,
        evaporator_liquid_coefficient,
        condenser_liquid_coefficient,
        vapor_coefficient,
        liquid_pa: liquid,
        vapor_pa: vapor,
        gravity_pa: gravity,
        total_pa: total,
        max_heat_load_w: max_heat_load,
        friction,
    }
}
