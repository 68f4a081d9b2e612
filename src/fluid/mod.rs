//! 작동 유체(물) 물성 테이블.
//!
//! 설계점 온도 한 점에 대한 고정 물성만 제공하며 보간은 하지 않는다.
//! 표 값의 타당성은 [`if97`] 모듈의 IAPWS-IF97 계산으로 교차 확인한다.

pub mod if97;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 표에서 온도 행을 찾을 때 허용하는 온도 차이 [K].
const LOOKUP_TOLERANCE_K: f64 = 0.5;

/// 물의 몰 질량 [kg/mol].
pub const WATER_MOLAR_MASS: f64 = 0.018_015;

/// 포화 상태 작동 유체의 물성. 모든 값은 SI 단위이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// 물성 기준 온도 [K]
    pub temperature_k: f64,
    /// 액체 밀도 [kg/m³]
    pub liquid_density: f64,
    /// 증기 밀도 [kg/m³]
    pub vapor_density: f64,
    /// 액체 점도 [Pa·s]
    pub liquid_viscosity: f64,
    /// 증기 점도 [Pa·s]
    pub vapor_viscosity: f64,
    /// 표면장력 [N/m]
    pub surface_tension: f64,
    /// 증발 잠열 [J/kg]
    pub latent_heat: f64,
    /// 액체 열전도율 [W/m·K]
    pub liquid_conductivity: f64,
    /// 윅과의 접촉각 [deg]
    pub contact_angle_deg: f64,
    /// 몰 질량 [kg/mol]
    pub molar_mass: f64,
}

impl FluidProperties {
    /// 증발에 따른 비체적 변화 v_fg [m³/kg].
    pub fn specific_volume_change(&self) -> f64 {
        1.0 / self.vapor_density - 1.0 / self.liquid_density
    }
}

/// 물성 조회 실패.
#[derive(Debug, Clone, Error)]
pub enum FluidError {
    /// 요청 온도에 해당하는 표 행이 없음
    #[error(
        "물성 테이블에 {requested_k:.2} K 행이 없습니다 (지원 온도: {supported})"
    )]
    UnsupportedTemperature { requested_k: f64, supported: String },
}

// 탈이온수, 70 °C 포화 상태.
const WATER_TABLE: [FluidProperties; 1] = [FluidProperties {
    temperature_k: 343.15,
    liquid_density: 977.8,
    vapor_density: 0.198,
    liquid_viscosity: 4.04e-4,
    vapor_viscosity: 1.09e-5,
    surface_tension: 0.0644,
    latent_heat: 2.33e6,
    liquid_conductivity: 0.668,
    contact_angle_deg: 0.0,
    molar_mass: WATER_MOLAR_MASS,
}];

/// 테이블에 수록된 물성 행 전체.
pub fn water_table() -> &'static [FluidProperties] {
    &WATER_TABLE
}

/// 작동 온도 [K]에 해당하는 물의 물성을 찾는다.
pub fn water_at(temperature_k: f64) -> Result<FluidProperties, FluidError> {
    WATER_TABLE
        .iter()
        .find(|row| (row.temperature_k - temperature_k).abs() <= LOOKUP_TOLERANCE_K)
        .copied()
        .ok_or_else(|| FluidError::UnsupportedTemperature {
            requested_k: temperature_k,
            supported: WATER_TABLE
                .iter()
                .map(|row| format!("{:.2} K", row.temperature_k))
                .collect::<Vec<_>>()
                .join(", "),
        })
}
