//! 정수압 칭량 기반 금 순도(카랏) 추정 모듈 모음.

pub mod calculation;
pub mod classifier;
pub mod consistency;
pub mod density;
pub mod percent_estimator;
pub mod range;
pub mod reference_table;
pub mod table_lookup;

pub use calculation::*;
pub use classifier::{classify, PurityCategory};
pub use consistency::{check_consistency, ConsistencyCheck, DeltaFlag, WARN_THRESHOLD};
pub use density::{compute_density, density_from, water_density_at, DensityReading};
pub use percent_estimator::{estimate_from_density, PercentEstimate};
pub use range::{reconcile, round_half_karat, KaratRange};
pub use reference_table::{
    filter_bands, reference_table, KaratBand, MAX_DENSITY, MIN_DENSITY,
};
pub use table_lookup::{estimate_from_table, lookup_band, TableEstimate};
