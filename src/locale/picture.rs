//! 사용자 정의 숫자 서식 (`#,##0.00`, `0.#%`, `0;(0)`)
//!
//! - `0` : 자리 채움 (없으면 0)
//! - `#` : 자리 (없으면 생략)
//! - `.` : 소수점 (첫 번째만)
//! - `,` : 자리 사이면 세 자리 구분, 정수부 끝이면 1000으로 나눔
//! - `%`, `‰` : 100배, 1000배 후 기호 출력
//! - `'..'`, `".."`, `\x` : 그대로 출력
//! - `;` : 양수;음수;0 구역
//!
//! 그 외 문자는 그대로 출력합니다.

use std::ops::RangeInclusive;

use super::culture::NumberFormat;
use super::number::{integer_digits, signed, Number};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Zero,
    Digit,
    Point,
    Group,
    Percent,
    PerMille,
    Section,
    Literal(&'a str),
}

/// 서식 문자열을 토큰으로 분해
fn tokenize(picture: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = picture.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let token = match c {
            '0' => Token::Zero,
            '#' => Token::Digit,
            '.' => Token::Point,
            ',' => Token::Group,
            '%' => Token::Percent,
            '‰' => Token::PerMille,
            ';' => Token::Section,
            '\'' | '"' => {
                // 닫는 따옴표가 없으면 끝까지
                let rest = &picture[i + 1..];
                let end = rest.find(c).unwrap_or(rest.len());
                let close = i + 1 + end;
                while chars.next_if(|&(j, _)| j <= close).is_some() {}
                Token::Literal(&rest[..end])
            }
            '\\' => match chars.next() {
                Some((j, escaped)) => Token::Literal(&picture[j..j + escaped.len_utf8()]),
                None => continue,
            },
            _ => Token::Literal(&picture[i..i + c.len_utf8()]),
        };
        tokens.push(token);
    }
    tokens
}

/// 값에 맞는 구역 선택, 부호 출력 여부와 함께 반환
/// 음수/0 구역은 부호를 직접 적으므로 부호를 붙이지 않음
fn select_section<'t, 'a>(
    tokens: &'t [Token<'a>],
    negative: bool,
    zero: bool,
) -> (&'t [Token<'a>], bool) {
    let sections: Vec<&[Token<'a>]> = tokens.split(|t| *t == Token::Section).collect();
    let pick = |index: usize| sections.get(index).copied().filter(|s| !s.is_empty());
    if zero {
        if let Some(section) = pick(2) {
            return (section, false);
        }
    }
    if negative {
        if let Some(section) = pick(1) {
            return (section, false);
        }
    }
    (sections[0], true)
}

/// 구역 하나의 자리 배치
#[derive(Debug, Default, PartialEq, Eq)]
struct Layout {
    int_places: usize,
    min_int: usize,
    frac_places: usize,
    min_frac: usize,
    grouping: bool,
    /// 10의 거듭제곱 배율
    scale: i32,
}

fn analyze(section: &[Token<'_>]) -> Layout {
    let mut layout = Layout::default();
    let mut seen_point = false;
    let mut first_zero = None;
    let mut trailing_groups = 0;

    for token in section {
        match token {
            Token::Zero | Token::Digit if !seen_point => {
                if trailing_groups > 0 && layout.int_places > 0 {
                    layout.grouping = true;
                }
                trailing_groups = 0;
                if *token == Token::Zero && first_zero.is_none() {
                    first_zero = Some(layout.int_places);
                }
                layout.int_places += 1;
            }
            Token::Zero | Token::Digit => {
                layout.frac_places += 1;
                if *token == Token::Zero {
                    layout.min_frac = layout.frac_places;
                }
            }
            Token::Point => seen_point = true,
            Token::Group if !seen_point => trailing_groups += 1,
            Token::Percent => layout.scale += 2,
            Token::PerMille => layout.scale += 3,
            _ => {}
        }
    }
    if layout.int_places > 0 {
        layout.scale -= 3 * trailing_groups;
    }
    layout.min_int = first_zero.map_or(0, |z| layout.int_places - z);
    layout
}

/// (음수 여부, 정수부 자릿수, 소수부 자릿수)
fn digits(number: Number, layout: &Layout) -> (bool, String, String) {
    let exact = number.is_integer() && layout.scale >= 0;
    let (negative, mut int_digits, mut frac_digits) = if exact {
        let (negative, mut int_digits) = integer_digits(number);
        if int_digits != "0" {
            int_digits.push_str(&"0".repeat(layout.scale as usize));
        }
        (negative, int_digits, String::new())
    } else {
        let v = number.as_f64() * 10f64.powi(layout.scale);
        let text = format!("{:.*}", layout.frac_places, v.abs());
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let nonzero = text.bytes().any(|b| (b'1'..=b'9').contains(&b));
        (v < 0.0 && nonzero, int_part.to_string(), frac_part.to_string())
    };

    while frac_digits.len() > layout.min_frac && frac_digits.ends_with('0') {
        frac_digits.pop();
    }
    let frac_digits = format!("{:0<width$}", frac_digits, width = layout.min_frac);
    if int_digits == "0" && layout.min_int == 0 {
        int_digits.clear();
    }
    let int_digits = format!("{:0>width$}", int_digits, width = layout.min_int);
    (negative, int_digits, frac_digits)
}

fn push_digits(
    out: &mut String,
    digits: &[char],
    range: RangeInclusive<usize>,
    separator: Option<&str>,
) {
    for i in range {
        if let Some(sep) = separator {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(sep);
            }
        }
        out.push(digits[i]);
    }
}

/// 사용자 정의 서식으로 렌더링
pub(super) fn render(number: Number, picture: &str, nfi: &NumberFormat) -> String {
    let tokens = tokenize(picture);
    let value = number.as_f64();
    let (section, with_sign) = select_section(&tokens, value < 0.0, value == 0.0);
    let layout = analyze(section);
    let (negative, int_digits, frac_digits) = digits(number, &layout);

    let int_digits: Vec<char> = int_digits.chars().collect();
    let separator = Some(nfi.group_separator.as_str()).filter(|_| layout.grouping);
    let has_fraction = !frac_digits.is_empty();
    let mut frac_digits = frac_digits.chars();
    let mut out = String::new();
    let mut int_seen = 0;
    let mut seen_point = false;

    for token in section {
        match token {
            Token::Zero | Token::Digit if !seen_point => {
                // 자리표시자보다 긴 앞자리는 첫 자리표시자에서 모두 출력
                if let Some(last) = (int_seen + int_digits.len()).checked_sub(layout.int_places) {
                    let first = if int_seen == 0 { 0 } else { last };
                    push_digits(&mut out, &int_digits, first..=last, separator);
                }
                int_seen += 1;
            }
            Token::Zero | Token::Digit => out.extend(frac_digits.next()),
            Token::Point if !seen_point => {
                if layout.int_places == 0 && !int_digits.is_empty() {
                    push_digits(&mut out, &int_digits, 0..=int_digits.len() - 1, separator);
                }
                seen_point = true;
                if has_fraction {
                    out.push_str(&nfi.decimal_separator);
                }
            }
            Token::Percent => out.push_str(&nfi.percent_symbol),
            Token::PerMille => out.push_str(&nfi.per_mille_symbol),
            Token::Literal(text) => out.push_str(text),
            Token::Point | Token::Group | Token::Section => {}
        }
    }

    if with_sign {
        signed(negative, out, nfi)
    } else {
        out
    }
}
