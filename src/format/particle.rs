//! 조사 선택 서식기
//!
//! 값을 로케일 서식으로 렌더링한 뒤 끝소리를 분류해 알맞은 조사를 붙입니다.
//!
//! ```
//! use josa::format::ParticleFormatter;
//! use josa::Argument;
//!
//! let f = ParticleFormatter::invariant();
//! assert_eq!(f.format_argument(Some("은/는"), &Argument::from("대한민국")).unwrap(), "대한민국은");
//! assert_eq!(f.format_argument(Some("(이)다"), &Argument::from("Korea")).unwrap(), "Korea다");
//! ```

use std::sync::LazyLock;

use super::argument::Argument;
use super::pattern::{self, PostpositionAlternatives};
use super::template;
use crate::core::{classify, EndingClass};
use crate::error::FormatError;
use crate::locale::culture::{self, Culture};
use crate::locale::NumberFormat;

static INVARIANT: LazyLock<ParticleFormatter> =
    LazyLock::new(|| ParticleFormatter::with_culture(culture::invariant().clone()));

static CURRENT: LazyLock<ParticleFormatter> =
    LazyLock::new(|| ParticleFormatter::with_culture(culture::current().clone()));

/// 조사 선택 서식기
#[derive(Clone, Debug)]
pub struct ParticleFormatter {
    culture: Culture,
}

impl ParticleFormatter {
    /// 불변 문화권 서식기
    pub fn invariant() -> &'static ParticleFormatter {
        &INVARIANT
    }

    /// 환경 변수로 정한 현재 문화권 서식기 (최초 호출 시 결정)
    pub fn current() -> &'static ParticleFormatter {
        &CURRENT
    }

    /// 이름으로 문화권 서식기 생성 (`ko-KR`)
    pub fn for_locale(name: &str) -> Result<Self, FormatError> {
        if name.trim().is_empty() {
            return Err(FormatError::InvalidArgument("locale".into()));
        }
        let culture = culture::find(name.trim())
            .ok_or_else(|| FormatError::UnknownLocale(name.to_string()))?;
        Ok(Self::with_culture(culture.clone()))
    }

    pub fn with_culture(culture: Culture) -> Self {
        Self { culture }
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.culture.number
    }

    /// 템플릿 치환 (`{0:은/는}`)
    pub fn format(&self, template: &str, args: &[Argument]) -> Result<String, FormatError> {
        template::format(self, template, args)
    }

    /// 인자 하나를 서식 지정자에 따라 렌더링
    /// 조사 패턴이 아니면 일반 값 서식으로 처리
    pub fn format_argument(
        &self,
        spec: Option<&str>,
        arg: &Argument,
    ) -> Result<String, FormatError> {
        let nfi = self.number_format();
        let Some(spec) = spec.filter(|s| !s.is_empty()) else {
            return arg.render(None, nfi);
        };
        let Some(alternatives) = pattern::parse(spec) else {
            log::trace!("조사 패턴 아님: {:?}", spec);
            return arg.render(Some(spec), nfi);
        };

        let (text, ending) = self.render_and_classify(arg, &alternatives)?;
        let particle = alternatives
            .select(ending)
            // 판단할 수 없으면 두 형태를 적힌 그대로 붙임
            .unwrap_or_else(|| alternatives.postposition());
        Ok(text + &particle)
    }

    fn render_and_classify(
        &self,
        arg: &Argument,
        alternatives: &PostpositionAlternatives,
    ) -> Result<(String, EndingClass), FormatError> {
        let sub_format = alternatives.sub_format.as_deref();
        match arg {
            Argument::Null => Ok((String::new(), EndingClass::Unknown)),
            Argument::Number(_) => {
                let text = arg.render(sub_format, self.number_format())?;
                let ending = self.classify_number(&text, sub_format);
                Ok((text, ending))
            }
            _ => {
                let text = arg.render(None, self.number_format())?;
                let ending = classify(&text);
                Ok((text, ending))
            }
        }
    }

    /// 통화/퍼센트 서식은 숫자가 아니라 단위 기호의 소리로 끝남
    fn classify_number(&self, text: &str, sub_format: Option<&str>) -> EndingClass {
        let nfi = self.number_format();
        if text == nfi.nan_symbol
            || text == nfi.positive_infinity_symbol
            || text == nfi.negative_infinity_symbol
        {
            return classify(text);
        }
        match sub_format.and_then(|f| f.chars().next()) {
            Some('c' | 'C') => classify(&nfi.currency_symbol),
            Some('p' | 'P') => classify(&nfi.percent_symbol),
            _ => classify(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(f: &ParticleFormatter, spec: &str, arg: impl Into<Argument>) -> String {
        f.format_argument(Some(spec), &arg.into()).unwrap()
    }

    #[test]
    fn test_hangul_values() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "은/는", "대한민국"), "대한민국은");
        assert_eq!(fmt(f, "은/는", "국토"), "국토는");
        assert_eq!(fmt(f, "(이)다", "민주공화국"), "민주공화국이다");
        assert_eq!(fmt(f, "과/와", "한반도"), "한반도와");
        assert_eq!(fmt(f, "(으)로", "그 부속도서"), "그 부속도서로");
        assert_eq!(fmt(f, "(으)로", "국민"), "국민으로");
    }

    #[test]
    fn test_english_values() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "은/는", "Korea"), "Korea는");
        assert_eq!(fmt(f, "(이)다", "republic"), "republic이다");
        assert_eq!(fmt(f, "과/와", "Korean Peninsula"), "Korean Peninsula와");
        assert_eq!(fmt(f, "은/는", true), "True는");
    }

    #[test]
    fn test_unknown_emits_both_forms() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "은/는", "?!"), "?!은/는");
        assert_eq!(fmt(f, "(이)다", ""), "(이)다");
        assert_eq!(f.format_argument(Some("을/를"), &Argument::Null).unwrap(), "을/를");
    }

    #[test]
    fn test_not_a_pattern_falls_back() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "xyz", "xyz"), "xyz");
        assert_eq!(fmt(f, "N0", 1234), "1,234");
        assert_eq!(f.format_argument(None, &Argument::from(5)).unwrap(), "5");
        assert_eq!(f.format_argument(Some(""), &Argument::from("국")).unwrap(), "국");
        assert_eq!(f.format_argument(None, &Argument::Null).unwrap(), "");
    }

    #[test]
    fn test_numbers() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "이/가", 2), "2가");
        assert_eq!(fmt(f, "이/가", 10), "10이");
        assert_eq!(fmt(f, "N0-을/를", 1234567), "1,234,567을");
        assert_eq!(fmt(f, "F1-(으)로", 2.5), "2.5로");
    }

    #[test]
    fn test_custom_number_format() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "xyz", 5), "xyz");
        assert_eq!(fmt(f, "#,##0-은/는", 1234), "1,234는");
        assert_eq!(fmt(f, "#,##0원-이/가", 15000), "15,000원이");
        assert_eq!(fmt(f, "0.0‰-이/가", 0.5), "500.0‰이");
    }

    #[test]
    fn test_special_float_symbols() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "은/는", f64::NAN), "NaN은");
        assert_eq!(fmt(f, "은/는", f64::INFINITY), "Infinity는");
        assert_eq!(fmt(f, "P-은/는", f64::NEG_INFINITY), "-Infinity는");
    }

    #[test]
    fn test_currency_and_percent_use_symbol() {
        let ko = ParticleFormatter::for_locale("ko-KR").unwrap();
        assert_eq!(fmt(&ko, "C-은/는", 1000), "₩1,000은");
        assert_eq!(fmt(&ko, "P0-이/가", 0.5), "50%가");

        let us = ParticleFormatter::for_locale("en-US").unwrap();
        assert_eq!(fmt(&us, "C-은/는", 1000), "$1,000.00는");

        let jp = ParticleFormatter::for_locale("ja-JP").unwrap();
        assert_eq!(fmt(&jp, "c0-(으)로", 500), "¥500으로");

        let inv = ParticleFormatter::invariant();
        assert_eq!(fmt(inv, "C-은/는", 1), "¤1.00는");
    }

    #[test]
    fn test_non_numeric_ignores_sub_format() {
        let f = ParticleFormatter::invariant();
        assert_eq!(fmt(f, "N2-은/는", "국민"), "국민은");
        assert_eq!(fmt(f, "C-은/는", "Korea"), "Korea는");
    }

    #[test]
    fn test_number_format_error_propagates() {
        let f = ParticleFormatter::invariant();
        assert_eq!(
            f.format_argument(Some("Z9-은/는"), &Argument::from(1)),
            Err(FormatError::UnsupportedNumberFormat("Z9".into()))
        );
    }

    #[test]
    fn test_for_locale_errors() {
        assert_eq!(
            ParticleFormatter::for_locale("").unwrap_err(),
            FormatError::InvalidArgument("locale".into())
        );
        assert_eq!(
            ParticleFormatter::for_locale("xx-XX").unwrap_err(),
            FormatError::UnknownLocale("xx-XX".into())
        );
        assert_eq!(ParticleFormatter::for_locale("ko_KR").unwrap().culture().name, "ko-KR");
    }

    #[test]
    fn test_idempotent() {
        let f = ParticleFormatter::invariant();
        let a = fmt(f, "은/는", "Korea");
        let b = fmt(f, "은/는", "Korea");
        assert_eq!(a, b);
    }
}
