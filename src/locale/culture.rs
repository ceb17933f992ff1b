//! 로케일(문화권) 정보
//!
//! 숫자 서식에 필요한 기호와 통화 정보를 담습니다.
//! 데이터는 `data/cultures.json`에 내장되어 최초 접근 시 한 번만 파싱됩니다.

use serde::Deserialize;
use std::sync::LazyLock;

/// 내장 문화권 데이터
const CULTURES_JSON: &str = include_str!("../../data/cultures.json");

/// 숫자 서식 기호
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NumberFormat {
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    #[serde(default = "default_negative_sign")]
    pub negative_sign: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_decimal_digits")]
    pub currency_decimal_digits: usize,
    /// 0: `¤n`, 1: `n¤`, 2: `¤ n`, 3: `n ¤`
    #[serde(default)]
    pub currency_positive_pattern: u8,
    #[serde(default = "default_decimal_digits")]
    pub number_decimal_digits: usize,
    #[serde(default = "default_decimal_digits")]
    pub percent_decimal_digits: usize,
    /// 0: `n %`, 1: `n%`, 2: `%n`, 3: `% n`
    #[serde(default)]
    pub percent_positive_pattern: u8,
    #[serde(default = "default_percent_symbol")]
    pub percent_symbol: String,
    #[serde(default = "default_per_mille_symbol")]
    pub per_mille_symbol: String,
    #[serde(default = "default_nan_symbol")]
    pub nan_symbol: String,
    #[serde(default = "default_positive_infinity_symbol")]
    pub positive_infinity_symbol: String,
    #[serde(default = "default_negative_infinity_symbol")]
    pub negative_infinity_symbol: String,
}

fn default_decimal_separator() -> String {
    ".".into()
}

fn default_group_separator() -> String {
    ",".into()
}

fn default_negative_sign() -> String {
    "-".into()
}

fn default_currency_symbol() -> String {
    "¤".into()
}

fn default_decimal_digits() -> usize {
    2
}

fn default_percent_symbol() -> String {
    "%".into()
}

fn default_per_mille_symbol() -> String {
    "‰".into()
}

fn default_nan_symbol() -> String {
    "NaN".into()
}

fn default_positive_infinity_symbol() -> String {
    "Infinity".into()
}

fn default_negative_infinity_symbol() -> String {
    "-Infinity".into()
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
            negative_sign: default_negative_sign(),
            currency_symbol: default_currency_symbol(),
            currency_decimal_digits: default_decimal_digits(),
            currency_positive_pattern: 0,
            number_decimal_digits: default_decimal_digits(),
            percent_decimal_digits: default_decimal_digits(),
            percent_positive_pattern: 0,
            percent_symbol: default_percent_symbol(),
            per_mille_symbol: default_per_mille_symbol(),
            nan_symbol: default_nan_symbol(),
            positive_infinity_symbol: default_positive_infinity_symbol(),
            negative_infinity_symbol: default_negative_infinity_symbol(),
        }
    }
}

impl NumberFormat {
    /// 불변 문화권의 숫자 서식
    pub fn invariant() -> &'static NumberFormat {
        &invariant().number
    }
}

/// 문화권
#[derive(Deserialize, Clone, Debug)]
pub struct Culture {
    /// `ko-KR` 형식의 이름 (불변 문화권은 빈 문자열)
    pub name: String,
    /// ISO 3166 지역 코드
    #[serde(default)]
    pub region: Option<String>,
    /// ISO 4217 통화 코드
    #[serde(default)]
    pub iso_currency_symbol: Option<String>,
    /// 통화의 영어 이름
    #[serde(default)]
    pub currency_english_name: Option<String>,
    #[serde(default)]
    pub number: NumberFormat,
}

impl Culture {
    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    /// 언어 코드 (`ko-KR` -> `ko`)
    pub fn language(&self) -> &str {
        self.name.split('-').next().unwrap_or("")
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    cultures: Vec<Culture>,
}

struct CultureCatalog {
    invariant: Culture,
    cultures: Vec<Culture>,
}

static CATALOG: LazyLock<CultureCatalog> = LazyLock::new(|| {
    let file: CatalogFile =
        serde_json::from_str(CULTURES_JSON).expect("내장 문화권 데이터 파싱 실패");
    log::debug!("문화권 {}개 로드", file.cultures.len());
    CultureCatalog {
        invariant: Culture {
            name: String::new(),
            region: None,
            iso_currency_symbol: None,
            currency_english_name: None,
            number: NumberFormat::default(),
        },
        cultures: file.cultures,
    }
});

/// 불변 문화권
pub fn invariant() -> &'static Culture {
    &CATALOG.invariant
}

/// 알려진 모든 특정 문화권 (불변 문화권 제외)
pub fn all() -> &'static [Culture] {
    &CATALOG.cultures
}

/// 이름으로 문화권 찾기
/// `ko-KR`, `ko_KR`, `KO-kr` 모두 허용
pub fn find(name: &str) -> Option<&'static Culture> {
    let normalized = name.replace('_', "-");
    all()
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(&normalized))
}

/// POSIX 로케일 값(`ko_KR.UTF-8@euro`)을 문화권 이름(`ko-KR`)으로 변환
/// `C`, `POSIX`, 빈 값은 None
pub fn posix_to_culture_name(value: &str) -> Option<String> {
    let base = value
        .split(['.', '@'])
        .next()
        .unwrap_or("")
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// 환경 변수(LC_ALL, LC_NUMERIC, LANG)로 현재 문화권 결정
/// 알 수 없으면 같은 언어의 첫 문화권, 그것도 없으면 불변 문화권
pub fn current() -> &'static Culture {
    let value = ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|v| !v.is_empty());
    resolve_posix(value.as_deref())
}

fn resolve_posix(value: Option<&str>) -> &'static Culture {
    let Some(name) = value.and_then(posix_to_culture_name) else {
        return invariant();
    };
    if let Some(culture) = find(&name) {
        return culture;
    }
    let language = name.split('-').next().unwrap_or("");
    if let Some(culture) = all()
        .iter()
        .find(|c| c.language().eq_ignore_ascii_case(language))
    {
        log::debug!("로케일 '{}' 대신 '{}' 사용", name, culture.name);
        return culture;
    }
    log::warn!("알 수 없는 로케일 '{}', 불변 문화권 사용", name);
    invariant()
}
