//! 증기 공간 층류 마찰 상수(Fanning f·Re) 선택.
//!
//! 종횡비가 크면 평행평판 극한값, 그렇지 않으면 Shah & London 의
//! 직사각형 덕트 5차 다항 근사를 쓴다.

/// 평행평판 사이 층류의 f·Re.
pub const PARALLEL_PLATE_FRE: f64 = 24.0;

/// 이 종횡비를 넘으면 평행평판으로 본다.
pub const PARALLEL_PLATE_ASPECT_LIMIT: f64 = 10.0;

// f·Re = 24 (1 + a1·α + a2·α² + a3·α³ + a4·α⁴ + a5·α⁵)
const SHAH_LONDON: [f64; 5] = [-1.3553, 1.9467, -1.7012, 0.9564, -0.2537];

/// 마찰 상수 산정에 사용한 덕트 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuctRegime {
    ParallelPlate,
    Rectangular,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporFriction {
    /// 폭 / 증기 공간 두께
    pub aspect_ratio: f64,
    /// max(AR, 1/AR)
    pub aspect_ratio_used: f64,
    /// Fanning f·Re
    pub constant: f64,
    pub regime: DuctRegime,
}

/// 직사각형 덕트 f·Re. `alpha`는 짧은 변 / 긴 변 (0 < α ≤ 1).
pub fn shah_london_rectangular(alpha: f64) -> f64 {
    let mut sum = 1.0;
    let mut power = 1.0;
    for coefficient in SHAH_LONDON {
        power *= alpha;
        sum += coefficient * power;
    }
    PARALLEL_PLATE_FRE * sum
}

/// 증기 공간 폭과 두께로 마찰 상수를 고른다.
pub fn vapor_friction(width_m: f64, thickness_m: f64) -> VaporFriction {
    let aspect_ratio = width_m / thickness_m;
    let aspect_ratio_used = aspect_ratio.max(1.0 / aspect_ratio);
    if aspect_ratio_used > PARALLEL_PLATE_ASPECT_LIMIT {
        VaporFriction {
            aspect_ratio,
            aspect_ratio_used,
            constant: PARALLEL_PLATE_FRE,
            regime: DuctRegime::ParallelPlate,
        }
    } else {
        VaporFriction {
            aspect_ratio,
            aspect_ratio_used,
            constant: shah_london_rectangular(1.0 / aspect_ratio_used),
            regime: DuctRegime::Rectangular,
        }
    }
}
