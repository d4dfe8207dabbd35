//! 자전거 복리후생 과세 가치 계산 모듈.

pub mod calc;
pub mod inputs;

pub use calc::*;
pub use inputs::*;
