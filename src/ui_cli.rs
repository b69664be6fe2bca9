use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::config::{Config, OutputFormat};
use crate::i18n::{keys, Translator};
use crate::purity::{self, CalculationResult, KaratBand};
use crate::units::{MassUnit, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    ReferenceTable,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_TABLE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::ReferenceTable),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 카랏 추정 메뉴를 처리한다. 계산 오류는 출력만 하고 메뉴로 돌아간다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    let mass = cfg.mass_unit.symbol();
    let air = read_line(&format!("{} [{mass}]: ", tr.t(keys::PROMPT_AIR_WEIGHT)))?;
    let water = read_line(&format!("{} [{mass}]: ", tr.t(keys::PROMPT_WATER_WEIGHT)))?;
    let temp = read_line(&format!(
        "{} [{}]: ",
        tr.t(keys::PROMPT_WATER_TEMPERATURE),
        cfg.temperature_unit.symbol()
    ))?;

    let request = app::CalcRequest {
        air: air.trim().to_string(),
        water: water.trim().to_string(),
        temperature: Some(temp.trim().to_string()).filter(|t| !t.is_empty()),
        mass_unit: cfg.mass_unit,
        temperature_unit: cfg.temperature_unit,
    };
    match app::calculate(&request, cfg) {
        Ok(result) => print_result(tr, &result, cfg.output)?,
        Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 기준 밀도표 메뉴를 처리한다.
pub fn handle_reference_table(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TABLE_HEADING));
    let query = read_line(tr.t(keys::TABLE_PROMPT_FILTER))?;
    let rows = purity::filter_bands(&query);
    print_table(tr, &rows, cfg.output)
}

/// 설정 메뉴를 처리한다. 변경 여부를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_CURRENT));
    println!(
        "  mass={} temperature={} default_water_temperature={}°C language={} output={:?}",
        cfg.mass_unit.symbol(),
        cfg.temperature_unit.symbol(),
        cfg.default_water_temperature_c,
        cfg.language,
        cfg.output
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => return Ok(false),
        "1" => match read_mass_unit(tr)? {
            Some(unit) => {
                cfg.mass_unit = unit;
                true
            }
            None => false,
        },
        "2" => match read_temperature_unit(tr)? {
            Some(unit) => {
                cfg.temperature_unit = unit;
                true
            }
            None => false,
        },
        "3" => {
            cfg.default_water_temperature_c = read_f64(tr, tr.t(keys::PROMPT_DEFAULT_TEMPERATURE))?;
            true
        }
        "4" => {
            let code = read_line(tr.t(keys::PROMPT_LANGUAGE))?;
            match code.trim().to_lowercase().as_str() {
                c @ ("auto" | "ko" | "en") => {
                    cfg.language = c.to_string();
                    true
                }
                _ => false,
            }
        }
        "5" => {
            println!("{}", tr.t(keys::OUTPUT_OPTIONS));
            match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => {
                    cfg.output = OutputFormat::Text;
                    true
                }
                "2" => {
                    cfg.output = OutputFormat::Json;
                    true
                }
                _ => false,
            }
        }
        _ => false,
    };
    if changed {
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    } else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(changed)
}

/// 계산 결과를 출력한다.
pub fn print_result(
    tr: &Translator,
    result: &CalculationResult,
    output: OutputFormat,
) -> Result<(), AppError> {
    match output {
        OutputFormat::Text => print!("{}", format_result(tr, result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

/// 기준 밀도표를 출력한다.
pub fn print_table(
    tr: &Translator,
    rows: &[&KaratBand],
    output: OutputFormat,
) -> Result<(), AppError> {
    match output {
        OutputFormat::Text => print!("{}", format_table(tr, rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}

/// 계산 결과를 텍스트로 만든다.
pub fn format_result(tr: &Translator, r: &CalculationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {:.3} g/cm³", tr.t(keys::RESULT_DENSITY), r.density);
    let _ = writeln!(
        out,
        "{} {:.4} g/cm³",
        tr.t(keys::RESULT_WATER_DENSITY),
        r.water_density
    );
    let _ = writeln!(out, "{} {:.2}%", tr.t(keys::RESULT_GOLD_PERCENT), r.gold_percent);
    let _ = writeln!(
        out,
        "{} {:.1}K",
        tr.t(keys::RESULT_KARAT_FROM_PERCENT),
        r.karat_from_percent
    );
    match (r.karat_from_density, r.karat_density_range.as_deref()) {
        (Some(k), Some(range)) => {
            let _ = writeln!(
                out,
                "{} {k}K ({range} g/cm³)",
                tr.t(keys::RESULT_KARAT_FROM_DENSITY)
            );
        }
        _ => {
            let _ = writeln!(
                out,
                "{} {}",
                tr.t(keys::RESULT_KARAT_FROM_DENSITY),
                tr.t(keys::RESULT_INDETERMINATE)
            );
        }
    }
    let _ = writeln!(out, "{} {}", tr.t(keys::RESULT_FINAL_RANGE), r.final_range_label);
    let _ = writeln!(
        out,
        "{} {} - {}",
        tr.t(keys::RESULT_CATEGORY),
        tr.category_label(r.category),
        tr.category_note(r.category)
    );
    let delta = r
        .delta_karat
        .map(|d| format!("{d:.1}K"))
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(
        out,
        "{} {delta} [{}] {}",
        tr.t(keys::RESULT_DELTA),
        r.delta_flag.as_str(),
        tr.delta_note(r.delta_flag, r.delta_karat.is_some())
    );
    let _ = writeln!(out, "{}", tr.t(keys::DISCLAIMER));
    out
}

/// 기준 밀도표를 텍스트로 만든다.
pub fn format_table(tr: &Translator, rows: &[&KaratBand]) -> String {
    if rows.is_empty() {
        return format!("{}\n", tr.t(keys::TABLE_EMPTY));
    }
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::TABLE_COLUMNS));
    for band in rows {
        let _ = writeln!(
            out,
            "{:<8} {:>6.1}    {}",
            band.label,
            band.percent,
            band.density_range_label()
        );
    }
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_mass_unit(tr: &Translator) -> Result<Option<MassUnit>, AppError> {
    println!("{}", tr.t(keys::MASS_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => Some(MassUnit::Gram),
        "2" => Some(MassUnit::Kilogram),
        "3" => Some(MassUnit::TroyOunce),
        "4" => Some(MassUnit::Carat),
        "5" => Some(MassUnit::Pound),
        _ => None,
    };
    Ok(unit)
}

fn read_temperature_unit(tr: &Translator) -> Result<Option<TemperatureUnit>, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => Some(TemperatureUnit::Celsius),
        "2" => Some(TemperatureUnit::Fahrenheit),
        "3" => Some(TemperatureUnit::Kelvin),
        _ => None,
    };
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purity::{compute_calculation, reference_table, MeasurementInput};

    #[test]
    fn text_result_shows_range_and_flag() {
        let tr = Translator::new("en");
        let r = compute_calculation(&MeasurementInput::new(10.5, 9.8, Some(20.0))).unwrap();
        let text = format_result(&tr, &r);
        assert!(text.contains("12K–18K"));
        assert!(text.contains("[WARN]"));
        assert!(text.contains("17K (14.70–15.20 g/cm³)"));
    }

    #[test]
    fn text_result_marks_indeterminate() {
        let tr = Translator::new("en");
        let r = compute_calculation(&MeasurementInput::new(5.0, 4.0, None)).unwrap();
        let text = format_result(&tr, &r);
        assert!(text.contains("indeterminate"));
        assert!(text.contains("Very Low"));
    }

    #[test]
    fn table_lists_every_row() {
        let tr = Translator::new("en");
        let rows: Vec<&KaratBand> = reference_table().iter().collect();
        let text = format_table(&tr, &rows);
        // 헤더 1줄 + 19행
        assert_eq!(text.lines().count(), 20);
        assert_eq!(format_table(&tr, &[]).trim(), "No matching rows.");
    }
}
