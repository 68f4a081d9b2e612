//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod pressure;
pub mod temperature;
pub mod volume;

pub use length::{convert_length, wires_per_inch_to_per_meter, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
