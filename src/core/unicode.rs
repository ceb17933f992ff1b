//! 유니코드 한글 음절 산술

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
/// 한글 음절 유니코드 블록 끝 (미할당 영역 포함)
pub const HANGUL_SYLLABLES_BLOCK_END: u32 = 0xD7AF;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 한글 음절 블록(U+AC00~U+D7AF)에 속하는지 확인
pub fn in_hangul_syllables_block(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLES_BLOCK_END).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_complete_hangul(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 받침(종성) 유무
/// 완성형 한글이 아니면 None
pub fn has_jongseong(c: char) -> Option<bool> {
    decompose_syllable(c).map(|(_, _, jong)| jong != 0)
}
