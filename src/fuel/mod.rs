//! 연료 관련 계산 모듈 모음.

pub mod composition;
pub mod emissions;
pub mod fuel_db;
pub mod fuel_oil;

pub use composition::CompositionCalculator;
pub use emissions::EmissionCalculator;
pub use fuel_oil::FuelOilCalculator;
