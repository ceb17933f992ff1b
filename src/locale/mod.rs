//! 로케일 서식 정보
//!
//! 숫자 렌더링과 로케일 기호, 지역별 통화 정보를 제공합니다.

pub mod culture;
pub mod number;
mod picture;
pub mod region;

pub use culture::{Culture, NumberFormat};
pub use number::Number;
pub use region::RegionInfo;
