use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::chamber::{
    Envelope, HeatSource, ModelOptions, OperatingConditions, ScreenMesh, VaporChamberInput,
};
use crate::fluid::{self, FluidError, FluidProperties};
use crate::mesh_db::{self, MeshDbError};
use crate::units::{convert_length, convert_temperature, LengthUnit, TemperatureUnit};

/// 운전 조건. 설정 파일은 엔지니어링 단위(°C, W, deg)를 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingSection {
    pub temperature_c: f64,
    pub heat_load_w: f64,
    pub tilt_deg: f64,
}

impl Default for OperatingSection {
    fn default() -> Self {
        Self {
            temperature_c: 70.0,
            heat_load_w: 150.0,
            tilt_deg: 0.0,
        }
    }
}

/// 제작 목표값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FabricationSection {
    pub fill_ratio: f64,
    pub target_vacuum_pa: f64,
}

impl Default for FabricationSection {
    fn default() -> Self {
        Self {
            fill_ratio: 0.30,
            target_vacuum_pa: 10.0,
        }
    }
}

/// 실험 보정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationSection {
    pub correction_factor: f64,
}

impl Default for CalibrationSection {
    fn default() -> Self {
        Self {
            correction_factor: 1.2,
        }
    }
}

/// 챔버 외형 [mm].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeSection {
    pub length_mm: f64,
    pub width_mm: f64,
    pub evaporator_wall_mm: f64,
    pub condenser_wall_mm: f64,
    pub vapor_thickness_mm: f64,
    /// 기본값은 증기 공간 + 두 윅 두께 합이라 두 증기 공간 모드가 같은 값을 낸다.
    pub internal_thickness_mm: f64,
}

impl Default for EnvelopeSection {
    fn default() -> Self {
        Self {
            length_mm: 70.0,
            width_mm: 70.0,
            evaporator_wall_mm: 2.25,
            condenser_wall_mm: 2.25,
            vapor_thickness_mm: 1.92,
            internal_thickness_mm: 3.93,
        }
    }
}

/// 열원 접촉 면 [mm].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatSourceSection {
    pub length_mm: f64,
    pub width_mm: f64,
}

impl Default for HeatSourceSection {
    fn default() -> Self {
        Self {
            length_mm: 20.0,
            width_mm: 20.0,
        }
    }
}

/// 외피 재질.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSection {
    pub conductivity_w_mk: f64,
}

impl Default for ShellSection {
    fn default() -> Self {
        Self {
            conductivity_w_mk: 380.0,
        }
    }
}

fn default_weave_factor() -> f64 {
    1.0
}

/// 스크린 메쉬 윅 사양. 굴곡 보정 계수 외에는 모두 적어야 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WickSection {
    pub mesh_wpi: f64,
    pub wire_diameter_um: f64,
    pub layers: u32,
    /// 평직 굴곡 보정. 문헌값은 약 1.05
    #[serde(default = "default_weave_factor")]
    pub weave_factor: f64,
}

impl WickSection {
    fn evaporator_default() -> Self {
        Self {
            mesh_wpi: 200.0,
            wire_diameter_um: 51.0,
            layers: 5,
            weave_factor: default_weave_factor(),
        }
    }

    fn condenser_default() -> Self {
        Self {
            mesh_wpi: 80.0,
            wire_diameter_um: 150.0,
            layers: 5,
            weave_factor: default_weave_factor(),
        }
    }

    /// 카탈로그 메쉬로 메쉬 수와 와이어 직경을 바꾼다. 적층 수는 유지한다.
    pub fn select_catalog_mesh(&mut self, wpi: f64) -> Result<(), MeshDbError> {
        let spec = mesh_db::lookup(wpi)?;
        self.mesh_wpi = spec.wires_per_inch;
        self.wire_diameter_um =
            convert_length(spec.wire_diameter_m, LengthUnit::Meter, LengthUnit::Micrometer);
        Ok(())
    }

    fn to_screen_mesh(&self) -> ScreenMesh {
        ScreenMesh::from_wpi(
            self.mesh_wpi,
            convert_length(self.wire_diameter_um, LengthUnit::Micrometer, LengthUnit::Meter),
            self.layers,
            self.weave_factor,
        )
    }
}

/// 해석 설정 전체. 기본값은 기준 설계(70×70 mm 챔버, 20×20 mm 열원, 150 W)이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub operating: OperatingSection,
    pub fabrication: FabricationSection,
    pub calibration: CalibrationSection,
    pub envelope: EnvelopeSection,
    pub heat_source: HeatSourceSection,
    pub shell: ShellSection,
    pub evaporator_wick: WickSection,
    pub condenser_wick: WickSection,
    pub model: ModelOptions,
    /// 지정하면 물성 테이블 대신 이 값을 쓴다 (SI 단위)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid: Option<FluidProperties>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operating: OperatingSection::default(),
            fabrication: FabricationSection::default(),
            calibration: CalibrationSection::default(),
            envelope: EnvelopeSection::default(),
            heat_source: HeatSourceSection::default(),
            shell: ShellSection::default(),
            evaporator_wick: WickSection::evaporator_default(),
            condenser_wick: WickSection::condenser_default(),
            model: ModelOptions::default(),
            fluid: None,
        }
    }
}

/// 설정 로드/저장 및 변환 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 메쉬 카탈로그 조회 실패
    #[error(transparent)]
    Mesh(#[from] MeshDbError),
    /// 물성 테이블 조회 실패
    #[error(transparent)]
    Fluid(#[from] FluidError),
}

impl Config {
    /// TOML 문자열을 파싱한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 설정 파일을 읽는다.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "설정 파일 로드");
        Ok(cfg)
    }

    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 엔지니어링 단위 설정을 SI 해석 입력으로 변환한다.
    pub fn to_input(&self) -> Result<VaporChamberInput, ConfigError> {
        let mm = |value: f64| convert_length(value, LengthUnit::Millimeter, LengthUnit::Meter);
        let temperature_k = convert_temperature(
            self.operating.temperature_c,
            TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin,
        );
        let fluid = match self.fluid {
            Some(props) => {
                debug!("설정 파일의 유체 물성을 사용");
                props
            }
            None => fluid::water_at(temperature_k)?,
        };

        Ok(VaporChamberInput {
            operating: OperatingConditions {
                temperature_k,
                heat_load_w: self.operating.heat_load_w,
                tilt_deg: self.operating.tilt_deg,
            },
            fill_ratio: self.fabrication.fill_ratio,
            target_vacuum_pa: self.fabrication.target_vacuum_pa,
            correction_factor: self.calibration.correction_factor,
            envelope: Envelope {
                length_m: mm(self.envelope.length_mm),
                width_m: mm(self.envelope.width_mm),
                evaporator_wall_m: mm(self.envelope.evaporator_wall_mm),
                condenser_wall_m: mm(self.envelope.condenser_wall_mm),
                vapor_thickness_m: mm(self.envelope.vapor_thickness_mm),
                internal_thickness_m: mm(self.envelope.internal_thickness_mm),
            },
            heat_source: HeatSource {
                length_m: mm(self.heat_source.length_mm),
                width_m: mm(self.heat_source.width_mm),
            },
            shell_conductivity: self.shell.conductivity_w_mk,
            evaporator_wick: self.evaporator_wick.to_screen_mesh(),
            condenser_wick: self.condenser_wick.to_screen_mesh(),
            fluid,
            options: self.model,
        })
    }
}

/// 경로가 주어지면 설정 파일을 읽고, 없으면 기준 설계를 쓴다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}
