//! 조사 패턴 파서
//!
//! ```text
//! pattern      := [ sub_format "-" ] postposition
//! postposition := "(" prefix ")" vowel | consonant "/" vowel
//! ```
//!
//! `prefix`, `consonant`, `vowel`은 한글 음절 블록 문자 1개 이상입니다.
//! 예: `은/는`, `(이)다`, `N0-(으)로`

use crate::core::unicode::in_hangul_syllables_block;
use crate::core::EndingClass;

/// 해석된 조사 패턴
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostpositionAlternatives {
    /// 값 서식 (`N0-은/는`의 `N0`)
    pub sub_format: Option<String>,
    /// 괄호 형식의 앞부분 (`(이)다`의 `이`)
    pub prefix: Option<String>,
    /// 빗금 형식의 받침 뒤 형태 (`은/는`의 `은`)
    pub consonant: Option<String>,
    /// 모음 뒤 형태
    pub vowel_form: String,
}

impl PostpositionAlternatives {
    /// 받침 뒤에 붙는 형태
    /// 괄호 형식이면 prefix + vowel (`(이)다` -> `이다`)
    pub fn consonant_form(&self) -> String {
        match (&self.consonant, &self.prefix) {
            (Some(consonant), _) => consonant.clone(),
            (None, Some(prefix)) => format!("{}{}", prefix, self.vowel_form),
            (None, None) => self.vowel_form.clone(),
        }
    }

    /// 패턴에 적힌 조사 부분 그대로 (`은/는`, `(이)다`)
    pub fn postposition(&self) -> String {
        match (&self.consonant, &self.prefix) {
            (Some(consonant), _) => format!("{}/{}", consonant, self.vowel_form),
            (None, Some(prefix)) => format!("({}){}", prefix, self.vowel_form),
            (None, None) => self.vowel_form.clone(),
        }
    }

    /// 끝소리에 맞는 조사 선택
    /// 판단 불가면 None
    pub fn select(&self, ending: EndingClass) -> Option<String> {
        match ending {
            EndingClass::ConsonantEnding => Some(self.consonant_form()),
            EndingClass::VowelEnding => Some(self.vowel_form.clone()),
            EndingClass::Unknown => None,
        }
    }
}

fn is_hangul_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(in_hangul_syllables_block)
}

/// 조사 패턴 해석
/// 문법에 맞지 않으면 None (일반 값 서식으로 처리할 것)
pub fn parse(pattern: &str) -> Option<PostpositionAlternatives> {
    // 조사 부분에는 '-'가 올 수 없으므로 마지막 '-'가 경계
    let (sub_format, postposition) = match pattern.rsplit_once('-') {
        Some((sub, rest)) => (Some(sub), rest),
        None => (None, pattern),
    };
    if sub_format.is_some_and(|s| s.contains('\n')) {
        return None;
    }

    let (prefix, consonant, vowel) = if let Some(rest) = postposition.strip_prefix('(') {
        let (prefix, vowel) = rest.split_once(')')?;
        (Some(prefix), None, vowel)
    } else {
        let (consonant, vowel) = postposition.split_once('/')?;
        (None, Some(consonant), vowel)
    };

    if !prefix.map_or(true, is_hangul_word)
        || !consonant.map_or(true, is_hangul_word)
        || !is_hangul_word(vowel)
    {
        return None;
    }

    Some(PostpositionAlternatives {
        sub_format: sub_format.map(str::to_string),
        prefix: prefix.map(str::to_string),
        consonant: consonant.map(str::to_string),
        vowel_form: vowel.to_string(),
    })
}
