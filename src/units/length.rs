use serde::{Deserialize, Serialize};

/// 챔버 치수와 와이어 직경에 쓰는 길이 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Micrometer,
    /// 메쉬 규격(wires per inch) 환산용
    Inch,
}

impl LengthUnit {
    /// 이 단위 1이 몇 m 인지.
    fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Inch => 0.0254,
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.meters() / to.meters()
}

/// 메쉬 수(wires per inch)를 미터당 와이어 수로 환산한다.
///
/// 선밀도는 길이의 역수이므로 1 inch를 미터로 바꾼 값으로 나눈다.
pub fn wires_per_inch_to_per_meter(wpi: f64) -> f64 {
    wpi / convert_length(1.0, LengthUnit::Inch, LengthUnit::Meter)
}
