//! 상용 스크린 메쉬(구리 평직) 카탈로그.
//! 메쉬 수(wires per inch)로 조회하며, 값은 시편 제작에 사용한 규격이다.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSpec {
    pub code: &'static str,
    /// 메쉬 수 [wires/inch]
    pub wires_per_inch: f64,
    /// 와이어 직경 [m]
    pub wire_diameter_m: f64,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Error)]
pub enum MeshDbError {
    /// 카탈로그에 없는 메쉬 수
    #[error("카탈로그에 없는 메쉬 수입니다: {wpi} wpi (선택 가능: {available})")]
    UnknownMesh { wpi: f64, available: String },
}

const MESHES: &[MeshSpec] = &[
    MeshSpec {
        code: "CU-80",
        wires_per_inch: 80.0,
        wire_diameter_m: 150e-6,
        notes: "굵은 메쉬. 투과율이 커서 응축부 귀환 경로용",
    },
    MeshSpec {
        code: "CU-200",
        wires_per_inch: 200.0,
        wire_diameter_m: 51e-6,
        notes: "가는 메쉬. 기공 반경이 작아 증발부 모세관 압력용",
    },
];

pub fn meshes() -> &'static [MeshSpec] {
    MESHES
}

pub fn find_mesh(wpi: f64) -> Option<&'static MeshSpec> {
    MESHES
        .iter()
        .find(|m| (m.wires_per_inch - wpi).abs() < 1e-9)
}

/// 메쉬 수로 카탈로그 항목을 찾고, 없으면 설정 오류를 반환한다.
pub fn lookup(wpi: f64) -> Result<&'static MeshSpec, MeshDbError> {
    find_mesh(wpi).ok_or_else(|| MeshDbError::UnknownMesh {
        wpi,
        available: available_list(),
    })
}

/// "80, 200" 형태의 선택 가능 목록.
pub fn available_list() -> String {
    MESHES
        .iter()
        .map(|m| format!("{}", m.wires_per_inch))
        .collect::<Vec<_>>()
        .join(", ")
}
