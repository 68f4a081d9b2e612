use std::io::Cursor;

use vapor_chamber_toolbox::app::{self, AppError, RunOptions};
use vapor_chamber_toolbox::ui_cli;

#[test]
fn prompt_reasks_until_catalog_mesh() {
    let mut input = Cursor::new("abc\n120\n 80 \n");
    let mut output = Vec::new();
    let wpi = ui_cli::prompt_mesh(&mut input, &mut output, "응축부").expect("mesh");
    assert_eq!(wpi, 80.0);

    let shown = String::from_utf8(output).expect("utf8");
    assert!(shown.contains("CU-200"));
    assert!(shown.contains("숫자를 입력하세요."));
    assert!(shown.contains("카탈로그에 없는 메쉬입니다. 사용 가능: 80, 200"));
}

#[test]
fn prompt_fails_on_end_of_input() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let err = ui_cli::prompt_mesh(&mut input, &mut output, "증발부").expect_err("eof");
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn interactive_selection_swaps_wicks() {
    let options = RunOptions {
        interactive: true,
        ..RunOptions::default()
    };
    let mut input = Cursor::new("80\n200\n");
    let mut output = Vec::new();
    let cfg = app::resolve_config(&options, &mut input, &mut output).expect("config");
    assert_eq!(cfg.evaporator_wick.mesh_wpi, 80.0);
    assert_eq!(cfg.condenser_wick.mesh_wpi, 200.0);
}

#[test]
fn command_line_mesh_outside_catalog_is_error() {
    let options = RunOptions {
        evaporator_mesh_wpi: Some(150.0),
        ..RunOptions::default()
    };
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let err = app::resolve_config(&options, &mut input, &mut output).expect_err("unknown mesh");
    assert!(matches!(err, AppError::Mesh(_)));
}
