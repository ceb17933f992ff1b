//! 끝소리 분류 테이블
//!
//! 숫자 한 글자와 기호(통화, 퍼센트, NaN 등)가 모음/받침 중 어느 쪽으로
//! 끝나게 읽히는지 정의합니다. 통화 기호는 알려진 모든 지역의 통화 영어 이름에
//! 영어 끝소리 추정을 적용해 최초 접근 시 한 번만 구성합니다.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::english::ends_with_vowel_sound;
use crate::locale::culture::NumberFormat;
use crate::locale::region::{self, RegionInfo};

/// 모음으로 끝나는 숫자: 이(2), 사(4), 오(5), 구(9)
pub const DIGITS_ENDING_VOWEL: [char; 4] = ['2', '4', '5', '9'];
/// 받침으로 끝나는 숫자: 영(0), 일(1), 삼(3), 육(6), 칠(7), 팔(8)
pub const DIGITS_ENDING_CONSONANT: [char; 6] = ['0', '1', '3', '6', '7', '8'];

/// 여러 지역이 공유해 추정 결과가 엇갈리는 통화 기호의 수동 보정
/// ¥: 엔(받침) / 위안 런민비(모음) -> 받침
const VOWEL_EXCEPTION: &str = "¥";
/// Br: 벨라루스 루블(받침) / 에티오피아 비르(모음) -> 모음
const CONSONANT_EXCEPTION: &str = "Br";

/// 전역 분류 테이블
pub static TABLES: LazyLock<ClassificationTables> =
    LazyLock::new(|| ClassificationTables::from_regions(&region::regions()));

/// 끝소리 분류 테이블 (구성 후 불변)
#[derive(Debug)]
pub struct ClassificationTables {
    digits_ending_vowel: HashSet<char>,
    digits_ending_consonant: HashSet<char>,
    symbols_ending_vowel: HashSet<String>,
    symbols_ending_consonant: HashSet<String>,
}

impl ClassificationTables {
    /// 지역 통화 정보로 테이블 구성
    pub fn from_regions(regions: &[RegionInfo]) -> Self {
        let nfi = NumberFormat::invariant();

        let mut symbols_ending_vowel: HashSet<String> = [
            // 화폐 (¤)
            &nfi.currency_symbol,
            // 음의 무한대
            &nfi.negative_infinity_symbol,
            // 퍼센트
            &nfi.percent_symbol,
            // 양의 무한대
            &nfi.positive_infinity_symbol,
        ]
        .into_iter()
        .cloned()
        .collect();
        let mut symbols_ending_consonant: HashSet<String> = [
            // 숫자가 아님
            &nfi.nan_symbol,
            // 퍼밀
            &nfi.per_mille_symbol,
        ]
        .into_iter()
        .cloned()
        .collect();

        for region in regions {
            let target = if ends_with_vowel_sound(&region.currency_english_name) {
                &mut symbols_ending_vowel
            } else {
                &mut symbols_ending_consonant
            };
            target.insert(region.currency_symbol.clone());
        }
        symbols_ending_vowel.remove(VOWEL_EXCEPTION);
        symbols_ending_consonant.remove(CONSONANT_EXCEPTION);

        log::debug!(
            "분류 테이블 구성: 지역 {}개, 모음 기호 {}개, 받침 기호 {}개",
            regions.len(),
            symbols_ending_vowel.len(),
            symbols_ending_consonant.len()
        );

        Self {
            digits_ending_vowel: DIGITS_ENDING_VOWEL.into_iter().collect(),
            digits_ending_consonant: DIGITS_ENDING_CONSONANT.into_iter().collect(),
            symbols_ending_vowel,
            symbols_ending_consonant,
        }
    }

    pub fn is_digit_ending_vowel(&self, c: char) -> bool {
        self.digits_ending_vowel.contains(&c)
    }

    pub fn is_digit_ending_consonant(&self, c: char) -> bool {
        self.digits_ending_consonant.contains(&c)
    }

    pub fn is_symbol_ending_vowel(&self, s: &str) -> bool {
        self.symbols_ending_vowel.contains(s)
    }

    pub fn is_symbol_ending_consonant(&self, s: &str) -> bool {
        self.symbols_ending_consonant.contains(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(symbol: &str, english_name: &str) -> RegionInfo {
        RegionInfo {
            name: "XX".into(),
            currency_symbol: symbol.into(),
            iso_currency_symbol: "XXX".into(),
            currency_english_name: english_name.into(),
        }
    }

    #[test]
    fn test_special_symbols() {
        let tables = ClassificationTables::from_regions(&[]);
        for s in ["¤", "-Infinity", "%", "Infinity"] {
            assert!(tables.is_symbol_ending_vowel(s), "{}", s);
            assert!(!tables.is_symbol_ending_consonant(s), "{}", s);
        }
        for s in ["NaN", "‰"] {
            assert!(tables.is_symbol_ending_consonant(s), "{}", s);
            assert!(!tables.is_symbol_ending_vowel(s), "{}", s);
        }
    }

    #[test]
    fn test_digit_sets() {
        let tables = ClassificationTables::from_regions(&[]);
        for c in DIGITS_ENDING_VOWEL {
            assert!(tables.is_digit_ending_vowel(c));
            assert!(!tables.is_digit_ending_consonant(c));
        }
        for c in DIGITS_ENDING_CONSONANT {
            assert!(tables.is_digit_ending_consonant(c));
            assert!(!tables.is_digit_ending_vowel(c));
        }
    }

    #[test]
    fn test_currency_heuristic() {
        let tables = ClassificationTables::from_regions(&[
            region("₩", "South Korean Won"),
            region("$", "US Dollar"),
        ]);
        assert!(tables.is_symbol_ending_consonant("₩"));
        assert!(tables.is_symbol_ending_vowel("$"));
    }

    #[test]
    fn test_shared_symbol_lands_in_both_sets() {
        let tables = ClassificationTables::from_regions(&[
            region("X$", "Fictional Dollar"),
            region("X$", "Fictional Won"),
        ]);
        assert!(tables.is_symbol_ending_vowel("X$"));
        assert!(tables.is_symbol_ending_consonant("X$"));
    }

    #[test]
    fn test_manual_exceptions() {
        let tables = ClassificationTables::from_regions(&[
            region("¥", "Japanese Yen"),
            region("¥", "Chinese Yuan Renminbi"),
            region("Br", "Belarusian Ruble"),
            region("Br", "Ethiopian Birr"),
        ]);
        assert!(!tables.is_symbol_ending_vowel("¥"));
        assert!(tables.is_symbol_ending_consonant("¥"));
        assert!(tables.is_symbol_ending_vowel("Br"));
        assert!(!tables.is_symbol_ending_consonant("Br"));
    }

    #[test]
    fn test_global_tables() {
        assert!(TABLES.is_symbol_ending_consonant("₩"));
        assert!(TABLES.is_symbol_ending_vowel("€"));
        assert!(TABLES.is_symbol_ending_consonant("¥"));
        assert!(TABLES.is_symbol_ending_vowel("Br"));
    }
}
