//! 측정값 → 결과 레코드까지의 전체 계산 파이프라인.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::classifier::{classify, PurityCategory};
use super::consistency::{check_consistency, DeltaFlag};
use super::density::compute_density;
use super::percent_estimator::estimate_from_density;
use super::range::reconcile;
use super::table_lookup::estimate_from_table;

/// 입력값 중 어느 무게인지 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightField {
    Air,
    Water,
}

impl std::fmt::Display for WeightField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightField::Air => write!(f, "공기 중 무게"),
            WeightField::Water => write!(f, "수중 무게"),
        }
    }
}

/// 입력 검증 실패 사유.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputReason {
    #[error("{field}이(가) 숫자가 아닙니다: {raw:?}")]
    NotANumber { field: WeightField, raw: String },
    #[error("{field}은(는) 0보다 커야 합니다 (입력: {value})")]
    NotPositive { field: WeightField, value: f64 },
    #[error("공기 중 무게({air})가 수중 무게({water})보다 커야 합니다")]
    AirNotHeavier { air: f64, water: f64 },
}

/// 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// 계산 전에 걸러지는 입력 오류
    #[error("입력 오류: {0}")]
    InvalidInput(#[from] InvalidInputReason),
    /// 검증을 통과했는데도 체적이 0 이하/무한대가 된 경우
    #[error("체적 계산 오류: 체적이 유효하지 않습니다 ({volume})")]
    InvalidVolume { volume: f64 },
}

/// 정수압 칭량 측정값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// 공기 중 무게 [g]
    pub air_weight_g: f64,
    /// 수중 무게 [g]
    pub water_weight_g: f64,
    /// 수온 [°C]. 없으면 보정하지 않는다(20°C 취급).
    pub water_temperature_c: Option<f64>,
}

impl MeasurementInput {
    pub fn new(air_weight_g: f64, water_weight_g: f64, water_temperature_c: Option<f64>) -> Self {
        Self {
            air_weight_g,
            water_weight_g,
            water_temperature_c,
        }
    }

    /// 문자열 입력을 해석한다.
    ///
    /// 무게가 숫자가 아니면 오류, 수온은 비었거나 해석할 수 없으면 None으로 둔다.
    pub fn parse(air: &str, water: &str, temperature: Option<&str>) -> Result<Self, CalculationError> {
        let air_weight_g = parse_weight(air, WeightField::Air)?;
        let water_weight_g = parse_weight(water, WeightField::Water)?;
        let water_temperature_c = temperature
            .and_then(|t| t.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite());
        Ok(Self::new(air_weight_g, water_weight_g, water_temperature_c))
    }

    /// 무게가 양수이고 공기 중 무게가 더 무거운지 확인한다.
    pub fn validate(&self) -> Result<(), InvalidInputReason> {
        check_positive(self.air_weight_g, WeightField::Air)?;
        check_positive(self.water_weight_g, WeightField::Water)?;
        if self.air_weight_g <= self.water_weight_g {
            return Err(InvalidInputReason::AirNotHeavier {
                air: self.air_weight_g,
                water: self.water_weight_g,
            });
        }
        Ok(())
    }
}

fn parse_weight(raw: &str, field: WeightField) -> Result<f64, InvalidInputReason> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InvalidInputReason::NotANumber {
            field,
            raw: raw.to_string(),
        })
}

fn check_positive(value: f64, field: WeightField) -> Result<(), InvalidInputReason> {
    if value.is_nan() || value.is_infinite() {
        return Err(InvalidInputReason::NotANumber {
            field,
            raw: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(InvalidInputReason::NotPositive { field, value });
    }
    Ok(())
}

/// 한 번의 계산 결과. 매 계산마다 새로 만들어지며 수정하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// 온도 보정된 물의 밀도 [g/cm³]
    pub water_density: f64,
    /// 시료 체적 [cm³]
    pub volume: f64,
    /// 시료 밀도 [g/cm³]
    pub density: f64,
    pub gold_percent: f64,
    pub karat_from_percent: f64,
    /// 테이블에서 찾지 못하면 None
    pub karat_from_density: Option<f64>,
    /// 일치한 행의 밀도 구간 문자열
    pub karat_density_range: Option<String>,
    pub final_range_min: f64,
    pub final_range_max: f64,
    /// "12K–18K"
    pub final_range_label: String,
    pub category: PurityCategory,
    pub category_label: &'static str,
    pub category_note: &'static str,
    pub delta_karat: Option<f64>,
    pub delta_flag: DeltaFlag,
    pub delta_note: &'static str,
}

/// 측정값 하나로 전체 결과를 계산한다. 실패하면 부분 결과 없이 오류만 반환한다.
pub fn compute_calculation(input: &MeasurementInput) -> Result<CalculationResult, CalculationError> {
    let reading = compute_density(input)?;

    let percent = estimate_from_density(reading.density);
    let table = estimate_from_table(reading.density);
    let karat_from_density = table.map(|t| t.karat);
    debug!(
        gold_percent = percent.gold_percent,
        karat_from_percent = percent.karat,
        ?karat_from_density,
        "karat estimated"
    );

    let range = reconcile(percent.karat, karat_from_density);
    let category = classify(&range);
    let consistency = check_consistency(percent.karat, karat_from_density);
    debug!(
        min = range.min,
        max = range.max,
        category = category.label(),
        flag = consistency.flag.as_str(),
        "range reconciled"
    );

    Ok(CalculationResult {
        water_density: reading.water_density,
        volume: reading.volume,
        density: reading.density,
        gold_percent: percent.gold_percent,
        karat_from_percent: percent.karat,
        karat_from_density,
        karat_density_range: table.map(|t| t.band.density_range_label()),
        final_range_min: range.min,
        final_range_max: range.max,
        final_range_label: range.label(),
        category,
        category_label: category.label(),
        category_note: category.note(),
        delta_karat: consistency.delta,
        delta_flag: consistency.flag,
        delta_note: consistency.note,
    })
}
