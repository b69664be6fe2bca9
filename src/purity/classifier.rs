//! 최종 범위의 중앙값으로 순도 등급을 매긴다.

use serde::Serialize;

use super::range::KaratRange;

/// 순도 등급. 높은 순서대로 정렬된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PurityCategory {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

/// (하한 중앙값, 등급) 쌍. 위에서부터 먼저 맞는 것을 쓴다.
const THRESHOLDS: &[(f64, PurityCategory)] = &[
    (22.0, PurityCategory::VeryHigh),
    (18.0, PurityCategory::High),
    (14.0, PurityCategory::Medium),
    (10.0, PurityCategory::Low),
];

impl PurityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PurityCategory::VeryHigh => "Very High",
            PurityCategory::High => "High",
            PurityCategory::Medium => "Medium",
            PurityCategory::Low => "Low",
            PurityCategory::VeryLow => "Very Low",
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            PurityCategory::VeryHigh => {
                "Consistent with high-purity gold (about 22K and above), typical of bullion and investment jewellery."
            }
            PurityCategory::High => {
                "Consistent with 18K-class fine jewellery alloys."
            }
            PurityCategory::Medium => {
                "Consistent with 14K-class alloys commonly used in everyday jewellery."
            }
            PurityCategory::Low => {
                "Consistent with 10K-class alloys; a large share of the piece is other metals."
            }
            PurityCategory::VeryLow => {
                "Below typical gold alloys; the piece may be plated, filled, or not gold at all."
            }
        }
    }
}

/// 범위 중앙값 기준으로 등급을 정한다.
pub fn classify(range: &KaratRange) -> PurityCategory {
    let avg = range.midpoint();
    THRESHOLDS
        .iter()
        .find(|(min_avg, _)| avg >= *min_avg)
        .map(|(_, category)| *category)
        .unwrap_or(PurityCategory::VeryLow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(avg: f64) -> PurityCategory {
        classify(&KaratRange { min: avg, max: avg })
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(at(22.0), PurityCategory::VeryHigh);
        assert_eq!(at(21.5), PurityCategory::High);
        assert_eq!(at(18.0), PurityCategory::High);
        assert_eq!(at(14.0), PurityCategory::Medium);
        assert_eq!(at(10.0), PurityCategory::Low);
        assert_eq!(at(9.5), PurityCategory::VeryLow);
    }

    #[test]
    fn uses_midpoint() {
        let r = KaratRange { min: 12.0, max: 18.0 };
        assert_eq!(classify(&r), PurityCategory::Medium);
    }
}
