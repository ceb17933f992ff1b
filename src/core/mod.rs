//! 한국어 끝소리 분류 엔진

pub mod ending;
pub mod english;
pub mod tables;
pub mod unicode;

pub use ending::{classify, classify_char, classify_opt, EndingClass};
