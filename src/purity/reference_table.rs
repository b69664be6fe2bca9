/// 카랏별 기준 밀도 테이블.
/// 값은 선별(screening)용 근사치이며 감정/인증 용도가 아니다.
use serde::Serialize;

/// 테이블 전체의 최저 밀도(g/cm³). 6K 하한과 같아야 한다.
pub const MIN_DENSITY: f64 = 9.7;
/// 테이블 전체의 최고 밀도(g/cm³). 24K 상한과 같아야 한다.
pub const MAX_DENSITY: f64 = 19.32;

/// 한 카랏 등급의 순도와 밀도 구간.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaratBand {
    /// 표시용 라벨 (예: "18K")
    pub label: &'static str,
    /// 금 함량(%)
    pub percent: f64,
    /// 밀도 하한 [g/cm³]
    pub min_density: f64,
    /// 밀도 상한 [g/cm³]
    pub max_density: f64,
}

impl KaratBand {
    const fn new(label: &'static str, percent: f64, min_density: f64, max_density: f64) -> Self {
        Self {
            label,
            percent,
            min_density,
            max_density,
        }
    }

    /// 라벨에서 카랏 숫자를 읽어낸다. "18K" → 18.0
    pub fn karat(&self) -> Option<f64> {
        self.label
            .trim()
            .trim_end_matches(['K', 'k'])
            .trim()
            .parse::<f64>()
            .ok()
    }

    /// 밀도가 구간 안(경계 포함)에 있는지 확인한다.
    pub fn contains(&self, density: f64) -> bool {
        self.min_density <= density && density <= self.max_density
    }

    /// "15.20–15.60" 형태의 밀도 구간 문자열.
    pub fn density_range_label(&self) -> String {
        format!("{:.2}–{:.2}", self.min_density, self.max_density)
    }
}

/// 기준 테이블을 카랏 내림차순으로 반환한다.
pub fn reference_table() -> &'static [KaratBand] {
    KARAT_BANDS
}

/// 라벨에 검색어가 포함된 행만 골라낸다(대소문자 무시). 빈 검색어는 전체.
pub fn filter_bands(query: &str) -> Vec<&'static KaratBand> {
    let q = query.trim().to_lowercase();
    KARAT_BANDS
        .iter()
        .filter(|b| q.is_empty() || b.label.to_lowercase().contains(&q))
        .collect()
}

static KARAT_BANDS: &[KaratBand] = &[
    KaratBand::new("24K", 100.0, 19.00, 19.32),
    KaratBand::new("23K", 95.8, 18.30, 19.00),
    KaratBand::new("22K", 91.7, 17.70, 18.30),
    KaratBand::new("21K", 87.5, 17.00, 17.70),
    KaratBand::new("20K", 83.3, 16.40, 17.00),
    KaratBand::new("19K", 79.2, 15.60, 16.40),
    KaratBand::new("18K", 75.0, 15.20, 15.60),
    KaratBand::new("17K", 70.8, 14.70, 15.20),
    KaratBand::new("16K", 66.7, 14.20, 14.70),
    KaratBand::new("15K", 62.5, 13.70, 14.20),
    KaratBand::new("14K", 58.3, 12.90, 13.70),
    KaratBand::new("13K", 54.2, 12.50, 12.90),
    KaratBand::new("12K", 50.0, 12.10, 12.50),
    KaratBand::new("11K", 45.8, 11.70, 12.10),
    KaratBand::new("10K", 41.7, 11.30, 11.70),
    KaratBand::new("9K", 37.5, 10.90, 11.30),
    KaratBand::new("8K", 33.3, 10.50, 10.90),
    KaratBand::new("7K", 29.2, 10.10, 10.50),
    KaratBand::new("6K", 25.0, 9.70, 10.10),
];
