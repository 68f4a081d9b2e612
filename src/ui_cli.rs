use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::mesh_db;
use crate::units::{convert_length, LengthUnit};

/// 카탈로그 메쉬 목록을 보여주고 메쉬 수 [wires/inch] 를 입력받는다.
///
/// 카탈로그에 없는 값이나 숫자가 아닌 입력은 다시 묻는다.
pub fn prompt_mesh<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    side: &str,
) -> Result<f64, AppError> {
    writeln!(output, "\n-- {side} 윅 메쉬 선택 --")?;
    for spec in mesh_db::meshes() {
        writeln!(
            output,
            "{:>4} wpi  ({}, 와이어 {:.0} um) {}",
            spec.wires_per_inch,
            spec.code,
            convert_length(spec.wire_diameter_m, LengthUnit::Meter, LengthUnit::Micrometer),
            spec.notes
        )?;
    }
    loop {
        let sel = read_line(input, output, "메쉬 수 입력: ")?;
        match sel.trim().parse::<f64>() {
            Ok(wpi) if mesh_db::find_mesh(wpi).is_some() => return Ok(wpi),
            Ok(_) => writeln!(
                output,
                "카탈로그에 없는 메쉬입니다. 사용 가능: {}",
                mesh_db::available_list()
            )?,
            Err(_) => writeln!(output, "숫자를 입력하세요.")?,
        }
    }
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "입력이 끝났습니다",
        )));
    }
    Ok(buf)
}
