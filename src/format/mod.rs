//! 조사 자동 선택 서식
//!
//! 템플릿의 `{0:은/는}`, `{1:(이)다}`처럼 조사 후보가 적힌 자리표시자를
//! 값의 끝소리에 맞는 조사로 치환합니다.
//!
//! ```
//! use josa::format::ParticleFormatter;
//! use josa::kformat;
//!
//! let f = ParticleFormatter::invariant();
//! assert_eq!(
//!     kformat!(f, "{0:은/는} {1:(이)다}.", "Korea", "republic").unwrap(),
//!     "Korea는 republic이다."
//! );
//! ```

pub mod argument;
pub mod particle;
pub mod pattern;
pub mod template;

pub use argument::Argument;
pub use particle::ParticleFormatter;
pub use pattern::{parse as parse_pattern, PostpositionAlternatives};

/// 인자를 `Argument`로 변환해 템플릿 치환
#[macro_export]
macro_rules! kformat {
    ($formatter:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $formatter.format($template, &[$($crate::format::Argument::from($arg)),*])
    };
}
