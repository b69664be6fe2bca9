//! 밀도를 금 함량(%)과 카랏으로 선형 환산한다.
//!
//! 실제 합금의 밀도는 조성에 대해 비선형이므로 선별용 근사치이다.

use serde::Serialize;

use super::reference_table::{MAX_DENSITY, MIN_DENSITY};

/// 함량 기반 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentEstimate {
    /// 금 함량(0~100%)
    pub gold_percent: f64,
    /// 카랏(0~24)
    pub karat: f64,
}

/// 함량(%)을 카랏으로 바꾼다.
pub fn karat_from_percent(gold_percent: f64) -> f64 {
    gold_percent * 24.0 / 100.0
}

/// 테이블 최저/최고 밀도 사이를 0~100%로 보간한다.
pub fn estimate_from_density(density: f64) -> PercentEstimate {
    let ratio = (density - MIN_DENSITY) / (MAX_DENSITY - MIN_DENSITY);
    let gold_percent = (ratio * 100.0).clamp(0.0, 100.0);
    PercentEstimate {
        gold_percent,
        karat: karat_from_percent(gold_percent),
    }
}
