pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod locale;

pub use self::core::{classify, classify_char, EndingClass};
pub use error::FormatError;
pub use format::{Argument, ParticleFormatter, PostpositionAlternatives};

/// 템플릿 치환 (`{0:은/는}`)
pub fn format(
    formatter: &ParticleFormatter,
    template: &str,
    args: &[Argument],
) -> Result<String, FormatError> {
    format::template::format(formatter, template, args)
}
