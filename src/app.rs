use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::purity::{self, CalculationError, CalculationResult, MeasurementInput};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::units::{to_celsius, to_grams, MassUnit, TemperatureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 카랏 계산 오류
    #[error("{0}")]
    Calculation(#[from] CalculationError),
    /// JSON 직렬화 오류
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 입력 단위 그대로의 계산 요청.
#[derive(Debug, Clone)]
pub struct CalcRequest {
    pub air: String,
    pub water: String,
    /// None이면 설정의 기본 수온을 쓴다
    pub temperature: Option<String>,
    pub mass_unit: MassUnit,
    pub temperature_unit: TemperatureUnit,
}

/// 입력 단위를 그램/섭씨로 환산한 측정값을 만든다.
///
/// 수온을 해석할 수 없으면 보정 없이 계산한다.
pub fn measurement_from_request(
    request: &CalcRequest,
    cfg: &Config,
) -> Result<MeasurementInput, CalculationError> {
    let raw = MeasurementInput::parse(
        &request.air,
        &request.water,
        request.temperature.as_deref(),
    )?;
    let water_temperature_c = match request.temperature {
        Some(_) => raw
            .water_temperature_c
            .map(|t| to_celsius(t, request.temperature_unit)),
        None => Some(cfg.default_water_temperature_c),
    };
    Ok(MeasurementInput::new(
        to_grams(raw.air_weight_g, request.mass_unit),
        to_grams(raw.water_weight_g, request.mass_unit),
        water_temperature_c,
    ))
}

/// 요청을 환산한 뒤 카랏을 계산한다.
pub fn calculate(request: &CalcRequest, cfg: &Config) -> Result<CalculationResult, CalculationError> {
    let input = measurement_from_request(request, cfg)?;
    debug!(?input, "calculation requested");
    purity::compute_calculation(&input)
}

/// 대화형 메뉴 루프를 실행한다. 설정이 바뀌면 `config_path`에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config)?,
            MenuChoice::ReferenceTable => ui_cli::handle_reference_table(tr, config)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save_to(config_path)?;
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
