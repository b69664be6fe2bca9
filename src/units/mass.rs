use serde::{Deserialize, Serialize};

/// 질량 단위. 계산은 그램 기준으로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum MassUnit {
    #[value(name = "g")]
    Gram,
    #[value(name = "kg")]
    Kilogram,
    /// 트로이 온스 (귀금속 거래 단위)
    #[value(name = "ozt")]
    TroyOunce,
    /// 캐럿(0.2 g). 순도 단위인 카랏과 다르다.
    #[value(name = "ct")]
    Carat,
    #[value(name = "lb")]
    Pound,
}

impl MassUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::TroyOunce => "ozt",
            MassUnit::Carat => "ct",
            MassUnit::Pound => "lb",
        }
    }
}

fn grams_per_unit(unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => 1.0,
        MassUnit::Kilogram => 1000.0,
        MassUnit::TroyOunce => 31.1034768,
        MassUnit::Carat => 0.2,
        MassUnit::Pound => 453.59237,
    }
}

/// 주어진 값을 그램으로 변환한다.
pub fn to_grams(value: f64, unit: MassUnit) -> f64 {
    value * grams_per_unit(unit)
}
