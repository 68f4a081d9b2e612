use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::chamber::{self, ModelError, Performance};
use crate::config::{self, Config, ConfigError};
use crate::fluid::if97;
use crate::mesh_db::MeshDbError;
use crate::report;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 로드/저장/변환 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 메쉬 카탈로그 조회 오류
    #[error("메쉬 선택 오류: {0}")]
    Mesh(#[from] MeshDbError),
    /// 해석 입력 오류
    #[error("해석 오류: {0}")]
    Model(#[from] ModelError),
}

/// 명령행에서 받은 실행 옵션.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub evaporator_mesh_wpi: Option<f64>,
    pub condenser_mesh_wpi: Option<f64>,
    pub interactive: bool,
    pub dump_config: Option<PathBuf>,
}

/// 설정 파일과 메쉬 선택 옵션을 합쳐 최종 설정을 만든다.
///
/// 대화형 선택은 명령행 메쉬 값보다 나중에 적용된다.
pub fn resolve_config<R: BufRead, W: Write>(
    options: &RunOptions,
    input: &mut R,
    output: &mut W,
) -> Result<Config, AppError> {
    let mut cfg = config::load_or_default(options.config_path.as_deref())?;

    if let Some(wpi) = options.evaporator_mesh_wpi {
        cfg.evaporator_wick.select_catalog_mesh(wpi)?;
    }
    if let Some(wpi) = options.condenser_mesh_wpi {
        cfg.condenser_wick.select_catalog_mesh(wpi)?;
    }
    if options.interactive {
        let evap = ui_cli::prompt_mesh(input, output, "증발부")?;
        cfg.evaporator_wick.select_catalog_mesh(evap)?;
        let cond = ui_cli::prompt_mesh(input, output, "응축부")?;
        cfg.condenser_wick.select_catalog_mesh(cond)?;
    }
    Ok(cfg)
}

/// 설정 한 벌을 해석하고 보고서 문자열을 돌려준다.
pub fn analyze(cfg: &Config) -> Result<(Performance, String), AppError> {
    let input = cfg.to_input()?;
    let perf = chamber::evaluate(&input)?;

    // 물성 교차 검증은 보조 정보라 실패해도 보고서는 낸다
    let check = match if97::cross_check(&input.fluid) {
        Ok(check) => {
            let max_dev = check.max_abs_deviation_percent();
            if max_dev > 1.0 {
                warn!(max_dev, "물성 테이블과 IF97 값 차이가 큼");
            }
            Some(check)
        }
        Err(err) => {
            warn!(%err, "IF97 교차 검증 생략");
            None
        }
    };

    let text = report::render(&perf, check.as_ref());
    Ok((perf, text))
}

/// 설정 해석 → 보고서 출력까지 한 번 실행한다.
pub fn run(options: &RunOptions) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let cfg = resolve_config(options, &mut input, &mut stdout)?;

    if let Some(path) = &options.dump_config {
        cfg.save(path)?;
        info!(path = %path.display(), "설정 파일 저장");
        return Ok(());
    }

    let (_, text) = analyze(&cfg)?;
    write!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}
