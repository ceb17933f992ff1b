//! 끝소리 분류
//!
//! 문자열을 읽었을 때 마지막 소리가 받침으로 끝나는지, 모음으로 끝나는지
//! 판단합니다. 끝에서부터 라틴 문자 구간과 그 외 구간을 번갈아 훑으며,
//! 분류할 수 없는 문자(공백, 문장부호 등)는 건너뜁니다.

use super::english::ends_with_vowel_sound;
use super::tables::{ClassificationTables, TABLES};
use super::unicode::{has_jongseong, is_complete_hangul};

/// 끝소리 분류 결과
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndingClass {
    /// 받침으로 끝남
    ConsonantEnding,
    /// 모음으로 끝남
    VowelEnding,
    /// 판단 근거 없음
    Unknown,
}

impl EndingClass {
    fn from_has_jongseong(has_jongseong: bool) -> Self {
        if has_jongseong {
            EndingClass::ConsonantEnding
        } else {
            EndingClass::VowelEnding
        }
    }

    pub fn is_known(self) -> bool {
        self != EndingClass::Unknown
    }
}

/// 라틴 문자 구간 / 그 외 구간
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Run<'a> {
    Latin(&'a str),
    Other(&'a str),
}

/// ASCII 영문자 구간과 그 외 구간으로 나눔 (순서 유지)
fn split_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut latin = None;

    for (i, c) in text.char_indices() {
        let is_latin = c.is_ascii_alphabetic();
        match latin {
            Some(prev) if prev != is_latin => {
                runs.push(make_run(&text[start..i], prev));
                start = i;
            }
            _ => {}
        }
        latin = Some(is_latin);
    }
    if let Some(prev) = latin {
        runs.push(make_run(&text[start..], prev));
    }
    runs
}

fn make_run(slice: &str, latin: bool) -> Run<'_> {
    if latin {
        Run::Latin(slice)
    } else {
        Run::Other(slice)
    }
}

/// 한 글자의 끝소리 분류 (전역 테이블 사용)
pub fn classify_char(c: char) -> EndingClass {
    classify_char_with(&TABLES, c)
}

/// 문자열의 끝소리 분류 (전역 테이블 사용)
pub fn classify(text: &str) -> EndingClass {
    classify_with(&TABLES, text)
}

/// 값이 없을 수도 있는 문자열의 끝소리 분류
pub fn classify_opt(text: Option<&str>) -> EndingClass {
    text.map_or(EndingClass::Unknown, classify)
}

pub fn classify_char_with(tables: &ClassificationTables, c: char) -> EndingClass {
    if is_complete_hangul(c) {
        return EndingClass::from_has_jongseong(has_jongseong(c).unwrap_or(false));
    }
    if tables.is_digit_ending_vowel(c) {
        return EndingClass::VowelEnding;
    }
    if tables.is_digit_ending_consonant(c) {
        return EndingClass::ConsonantEnding;
    }
    EndingClass::Unknown
}

pub fn classify_with(tables: &ClassificationTables, text: &str) -> EndingClass {
    // 기호는 글자 단위로 분해하지 않음
    if tables.is_symbol_ending_vowel(text) {
        // 양쪽에 모두 있으면 판단 불가
        if tables.is_symbol_ending_consonant(text) {
            return EndingClass::Unknown;
        }
        return EndingClass::VowelEnding;
    }
    if tables.is_symbol_ending_consonant(text) {
        return EndingClass::ConsonantEnding;
    }

    for run in split_runs(text).into_iter().rev() {
        match run {
            // 영어 단어는 마지막 구간이 곧 결론
            Run::Latin(word) => {
                return EndingClass::from_has_jongseong(!ends_with_vowel_sound(word));
            }
            Run::Other(chars) => {
                if let Some(class) = chars
                    .chars()
                    .rev()
                    .map(|c| classify_char_with(tables, c))
                    .find(|class| class.is_known())
                {
                    return class;
                }
            }
        }
    }
    EndingClass::Unknown
}
