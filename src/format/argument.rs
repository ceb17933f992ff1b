//! 템플릿 위치 인자

use crate::error::FormatError;
use crate::locale::number::{self, Number};
use crate::locale::NumberFormat;

/// 템플릿에 대입할 값
///
/// 숫자만 서식 지정자를 해석하고, 나머지는 값 자체의 문자열을 씁니다.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    /// 값 없음 (빈 문자열로 렌더링)
    Null,
    Text(String),
    Char(char),
    Bool(bool),
    Number(Number),
}

impl Argument {
    /// 로케일 서식으로 렌더링
    /// 숫자가 아닌 값은 서식 지정자를 무시
    pub fn render(&self, spec: Option<&str>, nfi: &NumberFormat) -> Result<String, FormatError> {
        match self {
            Argument::Null => Ok(String::new()),
            Argument::Text(s) => Ok(s.clone()),
            Argument::Char(c) => Ok(c.to_string()),
            Argument::Bool(true) => Ok("True".to_string()),
            Argument::Bool(false) => Ok("False".to_string()),
            Argument::Number(n) => number::render(*n, spec, nfi),
        }
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Text(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Argument::Text(value.clone())
    }
}

impl From<char> for Argument {
    fn from(value: char) -> Self {
        Argument::Char(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<Number> for Argument {
    fn from(value: Number) -> Self {
        Argument::Number(value)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Argument::Null, Into::into)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Argument {
            fn from(value: $t) -> Self {
                Argument::Number(Number::Signed(value as i64))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Argument {
            fn from(value: $t) -> Self {
                Argument::Number(Number::Unsigned(value as u64))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Argument {
    fn from(value: f32) -> Self {
        Argument::Number(Number::Single(value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Number(Number::Double(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Argument::from("국민"), Argument::Text("국민".into()));
        assert_eq!(Argument::from(-3i8), Argument::Number(Number::Signed(-3)));
        assert_eq!(Argument::from(3usize), Argument::Number(Number::Unsigned(3)));
        assert_eq!(Argument::from(1.5f32), Argument::Number(Number::Single(1.5)));
        assert_eq!(Argument::from(None::<&str>), Argument::Null);
        assert_eq!(Argument::from(Some(7i32)), Argument::Number(Number::Signed(7)));
    }

    #[test]
    fn test_render() {
        let nfi = NumberFormat::invariant();
        assert_eq!(Argument::Null.render(None, nfi).unwrap(), "");
        assert_eq!(Argument::Char('가').render(None, nfi).unwrap(), "가");
        assert_eq!(Argument::Bool(true).render(None, nfi).unwrap(), "True");
        assert_eq!(Argument::Bool(false).render(Some("N2"), nfi).unwrap(), "False");
        // 문자열은 서식 지정자 무시
        assert_eq!(Argument::from("xyz").render(Some("N2"), nfi).unwrap(), "xyz");
        assert_eq!(Argument::from(1234).render(Some("N0"), nfi).unwrap(), "1,234");
    }
}
