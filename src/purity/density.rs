//! 정수압 칭량(공기 중/수중 무게)으로 밀도를 구한다.

use serde::Serialize;
use tracing::debug;

use super::calculation::{CalculationError, MeasurementInput};

/// 10°C 미만 물의 밀도(g/cm³)
pub const WATER_DENSITY_COLD: f64 = 0.9997;
/// 10~30°C(또는 온도 미상) 물의 밀도(g/cm³)
pub const WATER_DENSITY_NOMINAL: f64 = 1.0;
/// 30°C 초과 물의 밀도(g/cm³)
pub const WATER_DENSITY_WARM: f64 = 0.9957;

/// 밀도 계산 중간값까지 담은 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityReading {
    /// 온도 보정된 물의 밀도 [g/cm³]
    pub water_density: f64,
    /// 시료 체적 [cm³]
    pub volume: f64,
    /// 시료 밀도 [g/cm³]
    pub density: f64,
}

/// 수온에 따른 물의 밀도. 3구간 근사만 사용한다.
///
/// 온도가 없거나 NaN이면 보정하지 않는다(1.0).
pub fn water_density_at(temperature_c: Option<f64>) -> f64 {
    match temperature_c {
        Some(t) if t < 10.0 => WATER_DENSITY_COLD,
        Some(t) if t > 30.0 => WATER_DENSITY_WARM,
        _ => WATER_DENSITY_NOMINAL,
    }
}

/// 부력으로 밀어낸 물의 체적을 구한다. 0 이하이거나 유한하지 않으면 오류.
pub fn volume_from(
    air_weight_g: f64,
    water_weight_g: f64,
    water_density: f64,
) -> Result<f64, CalculationError> {
    let volume = (air_weight_g - water_weight_g) / water_density;
    if !volume.is_finite() || volume <= 0.0 {
        return Err(CalculationError::InvalidVolume { volume });
    }
    Ok(volume)
}

/// 질량/체적으로 밀도를 구한다. 체적이 극단적으로 작아 무한대가 되면 오류.
pub fn density_from(air_weight_g: f64, volume: f64) -> Result<f64, CalculationError> {
    let density = air_weight_g / volume;
    if !density.is_finite() {
        return Err(CalculationError::InvalidVolume { volume });
    }
    Ok(density)
}

/// 입력을 검증한 뒤 밀도를 계산한다.
pub fn compute_density(input: &MeasurementInput) -> Result<DensityReading, CalculationError> {
    input.validate()?;
    let water_density = water_density_at(input.water_temperature_c);
    let volume = volume_from(input.air_weight_g, input.water_weight_g, water_density)?;
    let density = density_from(input.air_weight_g, volume)?;
    debug!(water_density, volume, density, "density computed");
    Ok(DensityReading {
        water_density,
        volume,
        density,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_density_buckets() {
        assert_eq!(water_density_at(Some(4.0)), WATER_DENSITY_COLD);
        assert_eq!(water_density_at(Some(10.0)), WATER_DENSITY_NOMINAL);
        assert_eq!(water_density_at(Some(20.0)), WATER_DENSITY_NOMINAL);
        assert_eq!(water_density_at(Some(30.0)), WATER_DENSITY_NOMINAL);
        assert_eq!(water_density_at(Some(30.5)), WATER_DENSITY_WARM);
        assert_eq!(water_density_at(None), WATER_DENSITY_NOMINAL);
        assert_eq!(water_density_at(Some(f64::NAN)), WATER_DENSITY_NOMINAL);
    }

    #[test]
    fn volume_guard_rejects_zero_and_negative() {
        assert!(matches!(
            volume_from(1.0, 1.0, 1.0),
            Err(CalculationError::InvalidVolume { .. })
        ));
        assert!(matches!(
            volume_from(1.0, 2.0, 1.0),
            Err(CalculationError::InvalidVolume { .. })
        ));
        assert!(matches!(
            volume_from(2.0, 1.0, 0.0),
            Err(CalculationError::InvalidVolume { .. })
        ));
    }

    #[test]
    fn infinite_density_is_rejected() {
        assert!(matches!(
            density_from(1e300, 1e-300),
            Err(CalculationError::InvalidVolume { .. })
        ));
        assert_eq!(density_from(10.5, 0.7).unwrap(), 10.5 / 0.7);
    }

    #[test]
    fn cold_water_increases_volume() {
        let nominal = volume_from(10.0, 9.0, WATER_DENSITY_NOMINAL).unwrap();
        let cold = volume_from(10.0, 9.0, WATER_DENSITY_COLD).unwrap();
        assert!(cold > nominal);
    }
}
