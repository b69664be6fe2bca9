//! 두 추정값을 하나의 카랏 범위로 합친다.
//!
//! 각 추정값에 ±1K 여유를 두고 합집합을 취한다. 두 추정이 어긋나면
//! 범위가 넓어지도록 평균 대신 합집합을 쓴다.

use serde::Serialize;

/// 추정값 양쪽에 더하는 여유폭(K)
pub const KARAT_PADDING: f64 = 1.0;
/// 카랏 상한
pub const MAX_KARAT: f64 = 24.0;

/// 최종 카랏 범위(양 끝 포함).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaratRange {
    pub min: f64,
    pub max: f64,
}

impl KaratRange {
    /// 범위 중앙값
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// "12K–18K", "12.5K–14K" 형태의 표시 문자열.
    pub fn label(&self) -> String {
        format!("{}K–{}K", format_karat(self.min), format_karat(self.max))
    }
}

/// 0.5K 단위로 반올림한다(value×2 에 대해 half-up).
pub fn round_half_karat(value: f64) -> f64 {
    (value * 2.0 + 0.5).floor() / 2.0
}

/// 정수면 소수점 없이, 아니면 한 자리까지 표시한다.
pub fn format_karat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn padded(karat: f64) -> (f64, f64) {
    (
        (karat - KARAT_PADDING).clamp(0.0, MAX_KARAT),
        (karat + KARAT_PADDING).clamp(0.0, MAX_KARAT),
    )
}

/// 함량 기반 추정과(있다면) 테이블 기반 추정을 합쳐 최종 범위를 만든다.
pub fn reconcile(karat_from_percent: f64, karat_from_density: Option<f64>) -> KaratRange {
    let (mut lo, mut hi) = padded(karat_from_percent);
    if let Some(kd) = karat_from_density {
        let (d_lo, d_hi) = padded(kd);
        lo = lo.min(d_lo);
        hi = hi.max(d_hi);
    }
    let mut min = round_half_karat(lo);
    let mut max = round_half_karat(hi);
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    KaratRange { min, max }
}
