//! 지역(국가) 통화 정보 열거

use super::culture::{self, Culture};

/// 지역 통화 정보
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionInfo {
    /// ISO 3166 지역 코드
    pub name: String,
    pub currency_symbol: String,
    pub iso_currency_symbol: String,
    pub currency_english_name: String,
}

impl RegionInfo {
    /// 문화권에서 지역 정보 추출
    /// 지역이나 통화 정보가 없는 문화권(불변 문화권 등)은 None
    pub fn from_culture(culture: &Culture) -> Option<Self> {
        Some(Self {
            name: culture.region.clone()?,
            currency_symbol: culture.number.currency_symbol.clone(),
            iso_currency_symbol: culture.iso_currency_symbol.clone()?,
            currency_english_name: culture.currency_english_name.clone()?,
        })
    }
}

/// 알려진 모든 특정 문화권의 지역 정보 (ISO 통화 코드 순)
/// 같은 지역이 여러 문화권에 걸쳐 있으면 중복될 수 있음
pub fn regions() -> Vec<RegionInfo> {
    let mut regions: Vec<RegionInfo> = culture::all()
        .iter()
        .filter_map(RegionInfo::from_culture)
        .collect();
    regions.sort_by(|a, b| a.iso_currency_symbol.cmp(&b.iso_currency_symbol));
    regions
}
