//! 해석 결과를 사람이 읽는 텍스트 보고서로 만든다. 부수 효과는 없다.

use std::fmt::Write;

use crate::chamber::{CapillaryVerdict, Performance};
use crate::fluid::if97::PropertyCheck;
use crate::units::{
    convert_length, convert_pressure, convert_temperature, convert_volume, LengthUnit,
    PressureUnit, TemperatureUnit, VolumeUnit,
};

const RULE: &str = "====================================================";

fn mm(value_m: f64) -> f64 {
    convert_length(value_m, LengthUnit::Meter, LengthUnit::Millimeter)
}

fn um(value_m: f64) -> f64 {
    convert_length(value_m, LengthUnit::Meter, LengthUnit::Micrometer)
}

/// 보고서 전체 문자열을 만든다.
pub fn render(perf: &Performance, property_check: Option<&PropertyCheck>) -> String {
    let mut out = String::new();
    // String 에 대한 fmt::Write 는 실패하지 않는다
    let _ = write_report(&mut out, perf, property_check);
    out
}

fn write_report(
    out: &mut String,
    perf: &Performance,
    property_check: Option<&PropertyCheck>,
) -> std::fmt::Result {
    let input = &perf.input;
    let geometry = &perf.geometry;
    let pressure = &perf.pressure;
    let network = &perf.network;

    writeln!(out, "{RULE}")?;
    writeln!(out, "   VAPOR CHAMBER 1D ANALYTICAL MODEL - RESULTS")?;
    writeln!(out, "{RULE}\n")?;

    writeln!(out, "--- DERIVED WICK GEOMETRY ---")?;
    writeln!(
        out,
        "Total Evaporator Wick Thickness: {:.2} mm",
        mm(geometry.evaporator_wick_thickness_m)
    )?;
    writeln!(
        out,
        "Total Condenser Wick Thickness:  {:.2} mm",
        mm(geometry.condenser_wick_thickness_m)
    )?;
    writeln!(out, "Vapor Core Thickness:            {:.2} mm", mm(geometry.vapor_thickness_m))?;
    writeln!(
        out,
        "Evaporator Wick: porosity {:.4}, K {:.3e} m2, r_c {:.2} um",
        perf.evaporator_wick.porosity,
        perf.evaporator_wick.permeability_m2,
        um(perf.evaporator_wick.pore_radius_m)
    )?;
    writeln!(
        out,
        "Condenser Wick:  porosity {:.4}, K {:.3e} m2, r_c {:.2} um\n",
        perf.condenser_wick.porosity,
        perf.condenser_wick.permeability_m2,
        um(perf.condenser_wick.pore_radius_m)
    )?;

    writeln!(out, "--- FABRICATION TARGETS ---")?;
    writeln!(out, "Target Filling Ratio: {:.0} %", input.fill_ratio * 100.0)?;
    writeln!(
        out,
        "Required Liquid Charge Volume: {:.4} mL",
        convert_volume(
            geometry.liquid_charge_m3,
            VolumeUnit::CubicMeter,
            VolumeUnit::Milliliter
        )
    )?;
    writeln!(out, "Target Initial Vacuum: {:.2} Pa\n", input.target_vacuum_pa)?;

    writeln!(out, "--- ANALYSIS CONDITIONS ---")?;
    writeln!(
        out,
        "Operating Temperature: {:.1} C",
        convert_temperature(
            input.operating.temperature_k,
            TemperatureUnit::Kelvin,
            TemperatureUnit::Celsius
        )
    )?;
    writeln!(out, "Input Heat Load (Q_in): {:.1} W", input.operating.heat_load_w)?;
    writeln!(out, "Orientation Angle: {:.1} degrees\n", input.operating.tilt_deg)?;

    writeln!(out, "--- PRESSURE BALANCE ANALYSIS ---")?;
    writeln!(out, "Max Capillary Pressure (dP_cap):   {:.2} Pa", pressure.capillary_pa)?;
    writeln!(out, "Total Pressure Drop (dP_total):    {:.2} Pa", pressure.total_pa)?;
    writeln!(out, "  - Liquid Drop (dP_l):            {:.2} Pa", pressure.liquid_pa)?;
    writeln!(out, "  - Vapor Drop (dP_v):             {:.2} Pa", pressure.vapor_pa)?;
    writeln!(out, "  - Gravity Drop (dP_g):           {:.2} Pa", pressure.gravity_pa)?;
    writeln!(
        out,
        "Vapor Duct Aspect Ratio: {:.2} (friction constant fRe = {:.4})\n",
        pressure.friction.aspect_ratio_used, pressure.friction.constant
    )?;

    writeln!(out, "--- THERMAL RESISTANCE NETWORK ---")?;
    writeln!(
        out,
        "Effective Wick Conductivity: evap {:.4} W/m-K, cond {:.4} W/m-K",
        perf.evaporator_wick_conductivity, perf.condenser_wick_conductivity
    )?;
    for term in &network.terms {
        writeln!(out, "  - {:<36} {:.4} K/W", term.kind.label(), term.value)?;
    }
    writeln!(out)?;

    if let Some(check) = property_check {
        writeln!(out, "--- PROPERTY CROSS-CHECK (IAPWS-IF97) ---")?;
        writeln!(
            out,
            "Saturation Pressure at T_op: {:.2} kPa",
            convert_pressure(
                check.saturation.pressure_pa,
                PressureUnit::Pascal,
                PressureUnit::KiloPascal
            )
        )?;
        for row in &check.rows {
            writeln!(
                out,
                "{:<24} table {:.4} / IF97 {:.4} {} ({:+.2} %)",
                row.label,
                row.table,
                row.if97,
                row.unit,
                row.deviation_percent()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "--- PREDICTED PERFORMANCE METRICS ---")?;
    match perf.verdict() {
        CapillaryVerdict::Met { safety_factor } => {
            writeln!(
                out,
                "YES! CAPILLARY LIMIT: MET for the specified heat load ({:.1} W).",
                input.operating.heat_load_w
            )?;
            writeln!(out, "   Safety factor (dP_cap / dP_total): {safety_factor:.2}")?;
        }
        CapillaryVerdict::Failed { max_heat_load_w } => {
            writeln!(
                out,
                "NO! CAPILLARY LIMIT: FAILED. Wick cannot sustain the required flow."
            )?;
            writeln!(
                out,
                "   The design is limited to Q_max = {max_heat_load_w:.1} W under these conditions."
            )?;
        }
    }
    writeln!(out, "Maximum Heat Transport (Q_max): {:.1} W", perf.max_heat_load_w())?;
    writeln!(
        out,
        "Ideal Thermal Resistance (R_ideal): {:.4} K/W",
        network.ideal_k_per_w
    )?;
    writeln!(
        out,
        "Corrected Thermal Resistance (R_corrected): {:.4} K/W",
        network.corrected_k_per_w
    )?;
    writeln!(
        out,
        "Predicted Corrected Temp. Drop (\u{394}T): {:.2} C",
        perf.temperature_drop_k()
    )?;
    Ok(())
}
