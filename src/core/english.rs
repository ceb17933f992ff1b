//! 영어 단어 끝소리 추정
//!
//! 철자만 보고 영어 단어의 마지막 음절이 모음으로 끝나게 읽히는지
//! (한국어 표기에서 받침이 없는지) 추정합니다. 근사치이며
//! 예외를 고치지 않고 아래 규칙 그대로 유지합니다.
//!
//! - `[aiuo]r*`               : 모음 / r 계열 모음 (korea, dollar, euro)
//! - `[^lmn]e`, `[^aeioubdg][lmn]e`, `[ptk]r[aeiou][lmn]e` : 묵음 e (rupee, krone)
//! - `(...)[ptk]`             : 장모음/이중모음 뒤 파열음 (baht, manat, forint)
//! - `[^m][bd]`, `[^n]g`      : 유성 파열음 (pound, rand)
//! - `[hry]`, `[zfv]`, `[ao]w`, `([^c]|[^n]c)s` : 그 외 받침 없이 읽히는 끝

use std::sync::LazyLock;

use regex::Regex;

static ENGLISH_ENDS_WITH_VOWEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(",
        r"[aiuo]r*",
        r"|[^lmn]e",
        r"|[^aeioubdg][lmn]e",
        r"|[ptk]r[aeiou][lmn]e",
        r"|([aeiou](h+y*|w+|y+)|[aeiu]{2}|[aeiu]o|o[aeiu]|[aeiou]{3,}|[aeiou]([bdglmnv]|th)[aeiou]|[a-z--aeiou])[ptk]",
        r"|[^m][bd]",
        r"|[^n]g",
        r"|[hry]",
        r"|([^c]|[^n]c)s",
        r"|[zfv]",
        r"|[ao]w",
        r")$"
    ))
    .unwrap()
});

/// 영어 단어(또는 영어 이름)가 모음 소리로 끝나는지 추정
pub fn ends_with_vowel_sound(word: &str) -> bool {
    ENGLISH_ENDS_WITH_VOWEL.is_match(word)
}
