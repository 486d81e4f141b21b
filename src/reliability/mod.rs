//! 신뢰도 및 손실 계산 모듈 모음.

pub mod equipment_db;
pub mod losses;
pub mod outage;

pub use losses::LossesCalculator;
pub use outage::OutageCalculator;
