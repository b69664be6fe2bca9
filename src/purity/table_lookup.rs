//! 기준 테이블에서 밀도가 속하는 카랏 구간을 찾는다.

use serde::Serialize;

use super::reference_table::{reference_table, KaratBand};

/// 테이블 조회 기반 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableEstimate {
    /// 라벨에서 읽은 카랏
    pub karat: f64,
    /// 일치한 테이블 행
    pub band: &'static KaratBand,
}

/// 밀도를 포함하는 첫 번째 행을 반환한다.
///
/// 테이블은 카랏 내림차순이라 경계값은 높은 카랏 쪽에 걸린다.
pub fn lookup_band(density: f64) -> Option<&'static KaratBand> {
    reference_table().iter().find(|band| band.contains(density))
}

/// 테이블 조회로 카랏을 추정한다. 범위 밖이면 판정 불가(None).
pub fn estimate_from_table(density: f64) -> Option<TableEstimate> {
    let band = lookup_band(density)?;
    let karat = band.karat()?;
    Some(TableEstimate { karat, band })
}
