//! 서식 에러

/// 서식 처리 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// 필수 인자가 비어 있음
    InvalidArgument(String),
    /// 알 수 없는 로케일 이름
    UnknownLocale(String),
    /// 템플릿 문법 오류
    MalformedTemplate { position: usize, reason: String },
    /// 템플릿이 참조한 인자가 없음
    ArgumentIndexOutOfRange { index: usize, count: usize },
    /// 숫자 서식 지정자를 해석할 수 없음
    UnsupportedNumberFormat(String),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::InvalidArgument(name) => write!(f, "잘못된 인자: {}", name),
            FormatError::UnknownLocale(name) => write!(f, "알 수 없는 로케일: {}", name),
            FormatError::MalformedTemplate { position, reason } => {
                write!(f, "템플릿 오류 (위치 {}): {}", position, reason)
            }
            FormatError::ArgumentIndexOutOfRange { index, count } => {
                write!(f, "인자 인덱스 {}가 범위를 벗어남 (인자 {}개)", index, count)
            }
            FormatError::UnsupportedNumberFormat(spec) => {
                write!(f, "지원하지 않는 숫자 서식: {}", spec)
            }
        }
    }
}

impl std::error::Error for FormatError {}
