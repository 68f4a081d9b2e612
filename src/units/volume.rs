use serde::{Deserialize, Serialize};

/// 충전량 표기에 쓰는 체적 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    /// 1 mL = 1 cm³
    Milliliter,
}

impl VolumeUnit {
    /// 이 단위 1이 몇 m³ 인지.
    fn cubic_meters(self) -> f64 {
        match self {
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::Milliliter => 1e-6,
        }
    }
}

/// 체적을 변환한다. 같은 단위면 값을 그대로 돌려준다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.cubic_meters() / to.cubic_meters()
}
