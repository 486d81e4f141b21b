//! 배전 계통 계산 모듈 모음.
//! 부하 산정, 케이블 단면 선정, 3상 단락 전류로 구성한다.

pub mod cable;
pub mod load;
pub mod short_circuit;

pub use cable::CableCalculator;
pub use load::LoadCalculator;
pub use short_circuit::ShortCircuitCalculator;
