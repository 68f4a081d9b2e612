use serde::{Deserialize, Serialize};

/// 0 °C 의 절대온도 [K].
pub const CELSIUS_OFFSET_K: f64 = 273.15;

/// 설정 파일(°C)과 내부 계산(K) 사이의 온도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

impl TemperatureUnit {
    fn offset_k(self) -> f64 {
        match self {
            TemperatureUnit::Kelvin => 0.0,
            TemperatureUnit::Celsius => CELSIUS_OFFSET_K,
        }
    }
}

/// 온도를 변환한다. 두 단위의 눈금 간격이 같으므로 원점 이동만 한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    value + from.offset_k() - to.offset_k()
}
