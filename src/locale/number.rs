//! 문화권별 숫자 서식
//!
//! 표준 숫자 서식 지정자(`C`, `D`, `E`, `F`, `G`, `N`, `P`, `X`)를 지원합니다.
//! 지정자 뒤에는 0~99 자릿수를 붙일 수 있습니다 (`N2`, `D5`, `P0`).
//! 그 외 형태(`#,##0`, `0.0%`)는 사용자 정의 서식으로 처리합니다.

use super::culture::NumberFormat;
use super::picture;
use crate::error::FormatError;

/// 서식 대상 숫자
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Signed(i64),
    Unsigned(u64),
    Single(f32),
    Double(f64),
}

impl Number {
    pub(super) fn is_integer(&self) -> bool {
        matches!(self, Number::Signed(_) | Number::Unsigned(_))
    }

    pub(super) fn as_f64(&self) -> f64 {
        match *self {
            Number::Signed(v) => v as f64,
            Number::Unsigned(v) => v as f64,
            Number::Single(v) => f64::from(v),
            Number::Double(v) => v,
        }
    }

    /// NaN/무한대일 때 해당 기호
    fn special_symbol<'a>(&self, nfi: &'a NumberFormat) -> Option<&'a str> {
        let v = match *self {
            Number::Single(v) => f64::from(v),
            Number::Double(v) => v,
            _ => return None,
        };
        if v.is_nan() {
            Some(&nfi.nan_symbol)
        } else if v == f64::INFINITY {
            Some(&nfi.positive_infinity_symbol)
        } else if v == f64::NEG_INFINITY {
            Some(&nfi.negative_infinity_symbol)
        } else {
            None
        }
    }
}

/// 표준 서식 지정자 (문자 + 자릿수)
struct Specifier {
    letter: char,
    precision: Option<usize>,
}

/// 문자 하나와 0~2자리 숫자면 표준 지정자, 아니면 사용자 정의 서식
fn parse_specifier(spec: &str) -> Option<Specifier> {
    let mut chars = spec.chars();
    let letter = chars.next().filter(|c| c.is_ascii_alphabetic())?;
    let digits = chars.as_str();
    if digits.is_empty() {
        return Some(Specifier { letter, precision: None });
    }
    if digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let precision = digits.parse().ok()?;
    Some(Specifier { letter, precision: Some(precision) })
}

/// 숫자를 문화권 서식으로 렌더링
/// `spec`이 None이거나 비어 있으면 일반 서식(`G`)
pub fn render(
    number: Number,
    spec: Option<&str>,
    nfi: &NumberFormat,
) -> Result<String, FormatError> {
    if let Some(symbol) = number.special_symbol(nfi) {
        return Ok(symbol.to_string());
    }
    let Some(spec) = spec.filter(|s| !s.is_empty()) else {
        return Ok(general(number, None, nfi));
    };
    let Some(specifier) = parse_specifier(spec) else {
        return Ok(picture::render(number, spec, nfi));
    };
    let precision = specifier.precision;
    let text = match specifier.letter.to_ascii_uppercase() {
        'C' => {
            let digits = precision.unwrap_or(nfi.currency_decimal_digits);
            let (negative, body) = fixed(number, digits, false, Some(&nfi.group_separator), nfi);
            let body = apply_currency_pattern(&body, nfi);
            signed(negative, body, nfi)
        }
        'D' => {
            if !number.is_integer() {
                return Err(FormatError::UnsupportedNumberFormat(spec.to_string()));
            }
            let (negative, digits) = integer_digits(number);
            let width = precision.unwrap_or(0);
            signed(negative, format!("{:0>width$}", digits, width = width), nfi)
        }
        'E' => {
            let lowercase = specifier.letter.is_ascii_lowercase();
            exponential(number, precision.unwrap_or(6), lowercase, 3, nfi)
        }
        'F' => {
            let digits = precision.unwrap_or(nfi.number_decimal_digits);
            let (negative, body) = fixed(number, digits, false, None, nfi);
            signed(negative, body, nfi)
        }
        'G' => general(number, precision.filter(|p| *p > 0), nfi),
        'N' => {
            let digits = precision.unwrap_or(nfi.number_decimal_digits);
            let (negative, body) = fixed(number, digits, false, Some(&nfi.group_separator), nfi);
            signed(negative, body, nfi)
        }
        'P' => {
            let digits = precision.unwrap_or(nfi.percent_decimal_digits);
            let (negative, body) = fixed(number, digits, true, Some(&nfi.group_separator), nfi);
            let body = apply_percent_pattern(&body, nfi);
            signed(negative, body, nfi)
        }
        'X' => {
            let hex = match number {
                Number::Signed(v) => format!("{:X}", v as u64),
                Number::Unsigned(v) => format!("{:X}", v),
                _ => return Err(FormatError::UnsupportedNumberFormat(spec.to_string())),
            };
            let hex = if specifier.letter == 'x' { hex.to_lowercase() } else { hex };
            let width = precision.unwrap_or(0);
            format!("{:0>width$}", hex, width = width)
        }
        _ => return Err(FormatError::UnsupportedNumberFormat(spec.to_string())),
    };
    Ok(text)
}

pub(super) fn signed(negative: bool, body: String, nfi: &NumberFormat) -> String {
    if negative {
        format!("{}{}", nfi.negative_sign, body)
    } else {
        body
    }
}

/// 정수의 (음수 여부, 절댓값 자릿수)
pub(super) fn integer_digits(number: Number) -> (bool, String) {
    match number {
        Number::Signed(v) => (v < 0, v.unsigned_abs().to_string()),
        Number::Unsigned(v) => (false, v.to_string()),
        _ => (false, String::new()),
    }
}

/// 고정 소수점 표기 (부호 제외)
/// 반올림 결과가 0이면 음수로 보지 않음
fn fixed(
    number: Number,
    decimals: usize,
    percent: bool,
    group_separator: Option<&str>,
    nfi: &NumberFormat,
) -> (bool, String) {
    let (negative, int_part, frac_part) = if number.is_integer() {
        let (negative, mut digits) = integer_digits(number);
        if percent && digits != "0" {
            digits.push_str("00");
        }
        (negative, digits, "0".repeat(decimals))
    } else {
        let mut v = number.as_f64();
        if percent {
            v *= 100.0;
        }
        let text = format!("{:.*}", decimals, v.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (text.clone(), String::new()),
        };
        let nonzero = text.bytes().any(|b| (b'1'..=b'9').contains(&b));
        (v < 0.0 && nonzero, int_part, frac_part)
    };

    let int_part = match group_separator {
        Some(sep) => group_digits(&int_part, sep),
        None => int_part,
    };
    if frac_part.is_empty() {
        (negative, int_part)
    } else {
        (negative, format!("{}{}{}", int_part, nfi.decimal_separator, frac_part))
    }
}

/// 세 자리마다 구분자 삽입
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

fn apply_currency_pattern(body: &str, nfi: &NumberFormat) -> String {
    let symbol = &nfi.currency_symbol;
    match nfi.currency_positive_pattern {
        1 => format!("{}{}", body, symbol),
        2 => format!("{} {}", symbol, body),
        3 => format!("{} {}", body, symbol),
        _ => format!("{}{}", symbol, body),
    }
}

fn apply_percent_pattern(body: &str, nfi: &NumberFormat) -> String {
    let symbol = &nfi.percent_symbol;
    match nfi.percent_positive_pattern {
        1 => format!("{}{}", body, symbol),
        2 => format!("{}{}", symbol, body),
        3 => format!("{} {}", symbol, body),
        _ => format!("{} {}", body, symbol),
    }
}

/// 지수 표기: `1.234568E+004`
fn exponential(
    number: Number,
    decimals: usize,
    lowercase: bool,
    exp_width: usize,
    nfi: &NumberFormat,
) -> String {
    let v = number.as_f64();
    let text = format!("{:.*e}", decimals, v.abs());
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mantissa = mantissa.replace('.', &nfi.decimal_separator);
    let marker = if lowercase { 'e' } else { 'E' };
    let sign = if exponent < 0 { '-' } else { '+' };
    let body = format!(
        "{}{}{}{:0>width$}",
        mantissa,
        marker,
        sign,
        exponent.unsigned_abs(),
        width = exp_width
    );
    signed(v < 0.0, body, nfi)
}

/// 일반 서식: 가장 짧은 표기, 지수가 크거나 작으면 지수 표기
fn general(number: Number, precision: Option<usize>, nfi: &NumberFormat) -> String {
    if number.is_integer() && precision.is_none() {
        let (negative, digits) = integer_digits(number);
        return signed(negative, digits, nfi);
    }

    let v = number.as_f64();
    if v == 0.0 {
        return "0".into();
    }
    let (negative, shortest) = match (number, precision) {
        (Number::Single(f), None) => (f < 0.0, format!("{:e}", f.abs())),
        (_, None) => (v < 0.0, format!("{:e}", v.abs())),
        (_, Some(p)) => (v < 0.0, format!("{:.*e}", p - 1, v.abs())),
    };
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mantissa = trim_fraction(mantissa);
    let limit = precision.map(|p| p as i32).unwrap_or(15);

    let body = if exponent < -5 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{}{:0>2}",
            mantissa.replace('.', &nfi.decimal_separator),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        positional(&digits, exponent, &nfi.decimal_separator)
    };
    signed(negative, body, nfi)
}

/// 가수 소수부의 끝 0 제거
fn trim_fraction(mantissa: &str) -> String {
    if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        mantissa.to_string()
    }
}

/// 유효숫자(`digits`, 첫 자리 지수 `exponent`)를 위치 표기로
fn positional(digits: &str, exponent: i32, decimal_separator: &str) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0{}{}{}", decimal_separator, zeros, digits);
    }
    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        format!("{:0<width$}", digits, width = int_len)
    } else {
        format!("{}{}{}", &digits[..int_len], decimal_separator, &digits[int_len..])
    }
}
