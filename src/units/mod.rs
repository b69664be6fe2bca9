//! 입력 단위 정의 및 변환 모듈 모음.

pub mod mass;
pub mod temperature;

pub use mass::{to_grams, MassUnit};
pub use temperature::{to_celsius, TemperatureUnit};
