use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 절대압 Pa이다.
///
/// 챔버 내부는 포화 상태의 진공 용기이므로 게이지압은 다루지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
}

const PA_PER_BAR: f64 = 100_000.0;

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
