//! 평직 스크린 메쉬 윅의 기공률, 투과율, 모세관 반경 계산.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

use crate::units::wires_per_inch_to_per_meter;

/// 평직 스크린용 Kozeny–Carman 상수.
const KOZENY_CARMAN_SCREEN: f64 = 122.0;

/// 윅 입력값 오류. 발생하면 계산 전체를 중단한다.
#[derive(Debug, Clone, Error)]
pub enum WickError {
    /// 메쉬 수가 0 이하라 유효 모세관 반경을 만들 수 없음
    #[error("유효 모세관 반경이 양수가 아닙니다 (메쉬 수 {mesh_per_m} 1/m)")]
    NonPositivePoreRadius { mesh_per_m: f64 },
    /// 메쉬 수와 와이어 직경 조합으로 기공률이 (0, 1)을 벗어남
    #[error("기공률 {porosity:.4}가 (0, 1) 범위를 벗어났습니다")]
    PorosityOutOfRange { porosity: f64 },
}

/// 스크린 메쉬 윅 사양.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMesh {
    /// 메쉬 수 [1/m]
    pub mesh_per_m: f64,
    /// 와이어 직경 [m]
    pub wire_diameter_m: f64,
    /// 적층 수
    pub layers: u32,
    /// 평직 굴곡 보정 계수 (보정 없음 = 1.0)
    pub weave_factor: f64,
}

impl ScreenMesh {
    /// wires per inch 단위 메쉬 수로 사양을 만든다.
    pub fn from_wpi(wpi: f64, wire_diameter_m: f64, layers: u32, weave_factor: f64) -> Self {
        Self {
            mesh_per_m: wires_per_inch_to_per_meter(wpi),
            wire_diameter_m,
            layers,
            weave_factor,
        }
    }
}

/// 윅 특성값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WickCharacterization {
    /// 총 두께 [m]
    pub thickness_m: f64,
    /// 기공률 ε
    pub porosity: f64,
    /// 투과율 K [m²]
    pub permeability_m2: f64,
    /// 유효 모세관 반경 r_c [m]
    pub pore_radius_m: f64,
}

/// 와이어가 층마다 두 번 겹치므로 두께는 2·d·n이다.
pub fn wick_thickness(mesh: &ScreenMesh) -> f64 {
    2.0 * mesh.wire_diameter_m * f64::from(mesh.layers)
}

/// ε = 1 − (s·π·N·d) / 4
pub fn porosity(mesh: &ScreenMesh) -> f64 {
    1.0 - (mesh.weave_factor * PI * mesh.mesh_per_m * mesh.wire_diameter_m) / 4.0
}

/// K = d²·ε³ / (122·(1−ε)²)
pub fn permeability(wire_diameter_m: f64, porosity: f64) -> f64 {
    wire_diameter_m.powi(2) * porosity.powi(3)
        / (KOZENY_CARMAN_SCREEN * (1.0 - porosity).powi(2))
}

/// r_c = 1 / (2N)
pub fn pore_radius(mesh_per_m: f64) -> Result<f64, WickError> {
    if mesh_per_m.is_nan() || mesh_per_m <= 0.0 {
        return Err(WickError::NonPositivePoreRadius { mesh_per_m });
    }
    let r_c = 1.0 / (2.0 * mesh_per_m);
    if !r_c.is_finite() || r_c <= 0.0 {
        return Err(WickError::NonPositivePoreRadius { mesh_per_m });
    }
    Ok(r_c)
}

/// 윅 하나의 특성값을 계산한다.
pub fn characterize(mesh: &ScreenMesh) -> Result<WickCharacterization, WickError> {
    let pore_radius_m = pore_radius(mesh.mesh_per_m)?;
    let porosity = porosity(mesh);
    if porosity.is_nan() || porosity <= 0.0 || porosity >= 1.0 {
        return Err(WickError::PorosityOutOfRange { porosity });
    }
    Ok(WickCharacterization {
        thickness_m: wick_thickness(mesh),
        porosity,
        permeability_m2: permeability(mesh.wire_diameter_m, porosity),
        pore_radius_m,
    })
}

/// 액체로 포화된 윅의 유효 열전도율 모델.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WickConductivityModel {
    /// Maxwell 형 혼합식
    #[default]
    Maxwell,
    /// 병렬(산술 평균) 혼합
    Parallel,
    /// 직렬(조화 평균) 혼합
    Series,
}

/// 유효 열전도율 [W/m·K]. `k_solid`는 와이어, `k_liquid`는 작동 유체.
pub fn effective_conductivity(
    model: WickConductivityModel,
    porosity: f64,
    k_solid: f64,
    k_liquid: f64,
) -> f64 {
    let solid_fraction = 1.0 - porosity;
    match model {
        WickConductivityModel::Maxwell => {
            k_liquid
                * ((k_solid + k_liquid + solid_fraction * (k_solid - k_liquid))
                    / (k_solid + k_liquid - solid_fraction * (k_solid - k_liquid)))
        }
        WickConductivityModel::Parallel => porosity * k_liquid + solid_fraction * k_solid,
        WickConductivityModel::Series => 1.0 / (porosity / k_liquid + solid_fraction / k_solid),
    }
}
