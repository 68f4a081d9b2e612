use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use vapor_chamber_toolbox::app::{self, RunOptions};

/// 베이퍼 챔버 1차원 해석 모델. 기준 설계 또는 TOML 설정을 해석해 보고서를 출력한다.
#[derive(Debug, Parser)]
#[command(name = "vapor_chamber_toolbox", version, about)]
struct Cli {
    /// 해석 설정 TOML 파일 (생략 시 기준 설계)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 증발부 윅 카탈로그 메쉬 [wires/inch]
    #[arg(long = "evap-mesh", value_name = "WPI")]
    evap_mesh: Option<f64>,

    /// 응축부 윅 카탈로그 메쉬 [wires/inch]
    #[arg(long = "cond-mesh", value_name = "WPI")]
    cond_mesh: Option<f64>,

    /// 표준 입력으로 메쉬를 선택
    #[arg(long)]
    interactive: bool,

    /// 적용된 설정을 TOML로 저장하고 종료
    #[arg(long = "dump-config", value_name = "PATH")]
    dump_config: Option<PathBuf>,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            config_path: cli.config,
            evaporator_mesh_wpi: cli.evap_mesh,
            condenser_mesh_wpi: cli.cond_mesh,
            interactive: cli.interactive,
            dump_config: cli.dump_config,
        }
    }
}

/// 프로그램의 엔트리 포인트. 옵션을 해석한 뒤 해석 보고서를 출력한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    app::run(&cli.into())?;
    Ok(())
}

fn init_tracing() {
    // 보고서만 stdout 에 남도록 기본 레벨은 warn
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
