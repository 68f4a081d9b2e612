//! IAPWS-IF97 포화 물성 계산. 포화압은 Region 4 식을 직접 계산하고,
//! 포화 액/증기 비체적과 엔탈피는 seuif97 크레이트로 위임한다.
//! 입력: 온도(K), 출력: SI 단위

use seuif97::{tx, OH, OV};
use thiserror::Error;

use super::FluidProperties;
use crate::units::{convert_pressure, convert_temperature, PressureUnit, TemperatureUnit};

// ---------------- Region 4 (포화) ----------------
const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

/// IF97 계산 오류.
#[derive(Debug, Clone, Error)]
pub enum If97Error {
    /// Region 4 유효 범위(삼중점~임계점) 밖
    #[error("IF97 Region4 유효 범위를 벗어났습니다: {temperature_k:.2} K (273.16~647.096 K)")]
    OutOfRange { temperature_k: f64 },
    /// seuif97가 NaN을 반환
    #[error("IF97 계산 실패: {quantity}")]
    NotANumber { quantity: &'static str },
}

/// IF97로 계산한 포화 상태.
#[derive(Debug, Clone, Copy)]
pub struct SaturationState {
    pub temperature_k: f64,
    /// 포화압 [Pa]
    pub pressure_pa: f64,
    /// 포화수 밀도 [kg/m³]
    pub liquid_density: f64,
    /// 포화증기 밀도 [kg/m³]
    pub vapor_density: f64,
    /// 증발 잠열 [J/kg]
    pub latent_heat: f64,
}

/// 표 값과 IF97 값의 비교 한 줄.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDeviation {
    pub label: &'static str,
    pub unit: &'static str,
    pub table: f64,
    pub if97: f64,
}

impl PropertyDeviation {
    /// (표 - IF97) / IF97 [%]
    pub fn deviation_percent(&self) -> f64 {
        (self.table - self.if97) / self.if97 * 100.0
    }
}

/// 물성 테이블 교차 확인 결과.
#[derive(Debug, Clone)]
pub struct PropertyCheck {
    pub saturation: SaturationState,
    pub rows: Vec<PropertyDeviation>,
}

impl PropertyCheck {
    /// 가장 큰 편차의 절댓값 [%].
    pub fn max_abs_deviation_percent(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| r.deviation_percent().abs())
            .fold(0.0, f64::max)
    }
}

/// 포화압(Pa) - 입력 온도는 K.
pub fn saturation_pressure_pa(temperature_k: f64) -> Result<f64, If97Error> {
    if !(273.16..=T4_STAR_K).contains(&temperature_k) {
        return Err(If97Error::OutOfRange { temperature_k });
    }
    let theta = 1.0 - temperature_k / T4_STAR_K;
    let exp_term = (T4_STAR_K / temperature_k)
        * (R4_N[0] * theta
            + R4_N[1] * theta.powf(1.5)
            + R4_N[2] * theta.powi(3)
            + R4_N[3] * theta.powf(3.5)
            + R4_N[4] * theta.powi(4)
            + R4_N[5] * theta.powf(7.5));
    let p_mpa = P4_STAR_MPA * exp_term.exp();
    Ok(convert_pressure(
        p_mpa,
        PressureUnit::MegaPascal,
        PressureUnit::Pascal,
    ))
}

fn checked(value: f64, quantity: &'static str) -> Result<f64, If97Error> {
    if value.is_nan() {
        Err(If97Error::NotANumber { quantity })
    } else {
        Ok(value)
    }
}

/// 온도(K)의 포화 상태를 계산한다.
pub fn saturation_state(temperature_k: f64) -> Result<SaturationState, If97Error> {
    let pressure_pa = saturation_pressure_pa(temperature_k)?;
    let t_c = convert_temperature(temperature_k, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
    let v_liquid = checked(tx(t_c, 0.0, OV), "포화수 비체적")?;
    let v_vapor = checked(tx(t_c, 1.0, OV), "포화증기 비체적")?;
    let h_liquid_kj = checked(tx(t_c, 0.0, OH), "포화수 엔탈피")?;
    let h_vapor_kj = checked(tx(t_c, 1.0, OH), "포화증기 엔탈피")?;
    Ok(SaturationState {
        temperature_k,
        pressure_pa,
        liquid_density: 1.0 / v_liquid,
        vapor_density: 1.0 / v_vapor,
        latent_heat: (h_vapor_kj - h_liquid_kj) * 1000.0,
    })
}

/// 고정 물성 테이블 값을 IF97 포화 물성과 비교한다.
pub fn cross_check(props: &FluidProperties) -> Result<PropertyCheck, If97Error> {
    let saturation = saturation_state(props.temperature_k)?;
    let rows = vec![
        PropertyDeviation {
            label: "Liquid Density (rho_l)",
            unit: "kg/m3",
            table: props.liquid_density,
            if97: saturation.liquid_density,
        },
        PropertyDeviation {
            label: "Vapor Density (rho_v)",
            unit: "kg/m3",
            table: props.vapor_density,
            if97: saturation.vapor_density,
        },
        PropertyDeviation {
            label: "Latent Heat (h_fg)",
            unit: "kJ/kg",
            table: props.latent_heat / 1000.0,
            if97: saturation.latent_heat / 1000.0,
        },
    ];
    Ok(PropertyCheck { saturation, rows })
}
