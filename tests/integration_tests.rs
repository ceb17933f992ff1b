//! 통합 테스트 - 템플릿 치환과 조사 선택

use josa::format::{parse_pattern, ParticleFormatter};
use josa::{classify, classify_char, kformat, Argument, EndingClass, FormatError};

#[test]
fn test_constitution_korean() {
    let f = ParticleFormatter::invariant();
    assert_eq!(
        kformat!(f, "{0:은/는} {1:(이)다}.", "대한민국", "민주공화국").unwrap(),
        "대한민국은 민주공화국이다."
    );
    assert_eq!(
        kformat!(
            f,
            "{0}의 {1:은/는} {2}에게 있고 모든 {3:은/는} {2:(으)로}부터 나온다.",
            "대한민국",
            "주권",
            "국민",
            "권력"
        )
        .unwrap(),
        "대한민국의 주권은 국민에게 있고 모든 권력은 국민으로부터 나온다."
    );
    assert_eq!(
        kformat!(
            f,
            "{0}의 {1:은/는} {2:과/와} {3:(으)로} 한다.",
            "대한민국",
            "국토",
            "한반도",
            "그 부속도서"
        )
        .unwrap(),
        "대한민국의 국토는 한반도와 그 부속도서로 한다."
    );
}

#[test]
fn test_constitution_english() {
    let f = ParticleFormatter::invariant();
    assert_eq!(
        kformat!(f, "{0:은/는} {1:(이)다}.", "Korea", "republic").unwrap(),
        "Korea는 republic이다."
    );
    assert_eq!(
        kformat!(
            f,
            "{0}의 {1:은/는} {2}에게 있고 모든 {3:은/는} {2:(으)로}부터 나온다.",
            "Korea",
            "sovereignty",
            "people",
            "power"
        )
        .unwrap(),
        "Korea의 sovereignty는 people에게 있고 모든 power는 people로부터 나온다."
    );
    assert_eq!(
        kformat!(
            f,
            "{0}의 {1:은/는} {2:과/와} {3:(으)로} 한다.",
            "Korea",
            "area",
            "Korean Peninsula",
            "its islands"
        )
        .unwrap(),
        "Korea의 area는 Korean Peninsula와 its islands로 한다."
    );
}

#[test]
fn test_unrecognized_pattern_is_plain() {
    let f = ParticleFormatter::invariant();
    assert_eq!(kformat!(f, "{0:xyz}", "xyz").unwrap(), "xyz");
    assert_eq!(kformat!(f, "{0:N0}", 1_000_000).unwrap(), "1,000,000");
    assert!(parse_pattern("xyz").is_none());
}

#[test]
fn test_custom_number_format() {
    let f = ParticleFormatter::invariant();
    assert_eq!(kformat!(f, "{0:xyz}", 5).unwrap(), "xyz");
    assert_eq!(kformat!(f, "{0:#,##0-은/는}", 1234).unwrap(), "1,234는");

    let de = ParticleFormatter::for_locale("de-DE").unwrap();
    assert_eq!(kformat!(de, "{0:#,##0.00-을/를}", 1234.5).unwrap(), "1.234,50을");
}

#[test]
fn test_null_argument() {
    let f = ParticleFormatter::invariant();
    assert_eq!(kformat!(f, "[{0:이/가}]", None::<&str>).unwrap(), "[이/가]");
    assert_eq!(kformat!(f, "[{0}]", None::<i32>).unwrap(), "[]");
}

#[test]
fn test_numbers_with_locale() {
    let ko = ParticleFormatter::for_locale("ko-KR").unwrap();
    assert_eq!(kformat!(ko, "{0:C-이/가} 들었다", 15000).unwrap(), "₩15,000이 들었다");
    assert_eq!(kformat!(ko, "{0:P0-(으)로} 올랐다", 0.05).unwrap(), "5%로 올랐다");
    assert_eq!(kformat!(ko, "{0:N0-을/를}", 2024).unwrap(), "2,024를");

    let de = ParticleFormatter::for_locale("de-DE").unwrap();
    assert_eq!(kformat!(de, "{0:C-(으)로}", 3.5).unwrap(), "3,50 €로");
}

#[test]
fn test_public_format_function() {
    let f = ParticleFormatter::invariant();
    let args = [Argument::from("국민"), Argument::from(3)];
    assert_eq!(josa::format(f, "{0:이/가} {1:을/를}", &args).unwrap(), "국민이 3을");
}

#[test]
fn test_errors() {
    let f = ParticleFormatter::invariant();
    assert_eq!(
        kformat!(f, "{1:은/는}", "a"),
        Err(FormatError::ArgumentIndexOutOfRange { index: 1, count: 1 })
    );
    assert!(matches!(
        kformat!(f, "{0:은/는", "a"),
        Err(FormatError::MalformedTemplate { .. })
    ));
    assert!(matches!(
        kformat!(f, "{0,-9223372036854775808}", "a"),
        Err(FormatError::MalformedTemplate { position: 1, .. })
    ));
    assert!(matches!(
        ParticleFormatter::for_locale(""),
        Err(FormatError::InvalidArgument(_))
    ));
}

#[test]
fn test_classifier_surface() {
    assert_eq!(classify_char('국'), EndingClass::ConsonantEnding);
    assert_eq!(classify_char('2'), EndingClass::VowelEnding);
    assert_eq!(classify(""), EndingClass::Unknown);
    assert_eq!(classify("Korea"), EndingClass::VowelEnding);
}

#[test]
fn test_concurrent_first_use() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let f = ParticleFormatter::invariant();
                let word = if i % 2 == 0 { "대한민국" } else { "Korea" };
                kformat!(f, "{0:은/는}", word).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { "대한민국은" } else { "Korea는" };
        assert_eq!(handle.join().unwrap(), expected);
    }
}
