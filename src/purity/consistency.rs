//! 두 카랏 추정값의 차이를 점검한다.

use serde::Serialize;
use tracing::debug;

/// 이 값 이상 차이 나면 경고한다(K).
pub const WARN_THRESHOLD: f64 = 2.0;

pub const NOTE_NO_COMPARATOR: &str = "no density-based comparator available.";
pub const NOTE_CONSISTENT: &str =
    "Both estimates agree within 2K; the measurement looks internally consistent.";
pub const NOTE_DIVERGENT: &str = "Estimates differ by 2K or more. Possible causes: gemstones or \
     non-gold inserts, solder joints, internal voids, trapped air bubbles, or weighing technique \
     (water surface tension, sample touching the container).";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeltaFlag {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "WARN")]
    Warn,
}

impl DeltaFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaFlag::Ok => "OK",
            DeltaFlag::Warn => "WARN",
        }
    }
}

/// 일관성 점검 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsistencyCheck {
    /// 0.1K 단위로 반올림한 차이. 비교 대상이 없으면 None.
    pub delta: Option<f64>,
    pub flag: DeltaFlag,
    pub note: &'static str,
}

/// 함량 기반 카랏과 테이블 기반 카랏을 비교한다.
pub fn check_consistency(
    karat_from_percent: f64,
    karat_from_density: Option<f64>,
) -> ConsistencyCheck {
    let Some(kd) = karat_from_density else {
        return ConsistencyCheck {
            delta: None,
            flag: DeltaFlag::Ok,
            note: NOTE_NO_COMPARATOR,
        };
    };
    let delta = ((karat_from_percent - kd).abs() * 10.0 + 0.5).floor() / 10.0;
    if delta >= WARN_THRESHOLD {
        debug!(delta, karat_from_percent, karat_from_density = kd, "karat estimates diverge");
        ConsistencyCheck {
            delta: Some(delta),
            flag: DeltaFlag::Warn,
            note: NOTE_DIVERGENT,
        }
    } else {
        ConsistencyCheck {
            delta: Some(delta),
            flag: DeltaFlag::Ok,
            note: NOTE_CONSISTENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_threshold_warns() {
        let c = check_consistency(17.0, Some(15.0));
        assert_eq!(c.delta, Some(2.0));
        assert_eq!(c.flag, DeltaFlag::Warn);
    }

    #[test]
    fn rounding_can_reach_threshold() {
        // 1.96 → 2.0
        let c = check_consistency(16.96, Some(15.0));
        assert_eq!(c.flag, DeltaFlag::Warn);
        let c = check_consistency(16.94, Some(15.0));
        assert_eq!(c.flag, DeltaFlag::Ok);
        assert_eq!(c.delta, Some(1.9));
    }

    #[test]
    fn missing_comparator_is_ok() {
        let c = check_consistency(3.0, None);
        assert_eq!(c.flag, DeltaFlag::Ok);
        assert_eq!(c.delta, None);
        assert_eq!(c.note, NOTE_NO_COMPARATOR);
    }
}
