//! 태양광 발전소 운영 계산.

pub mod profit;

pub use profit::SolarProfitCalculator;
