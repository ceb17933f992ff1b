//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::FormatError;
use crate::format::ParticleFormatter;

/// josa 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JosaConfig {
    /// 기본 로케일 (`ko-KR`). 없으면 환경 변수의 현재 로케일
    #[serde(default)]
    pub locale: Option<String>,
    /// 로그 필터 기본값 (RUST_LOG가 없을 때)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for JosaConfig {
    fn default() -> Self {
        Self {
            locale: None,
            log_level: default_log_level(),
        }
    }
}

impl JosaConfig {
    /// 설정된 로케일의 서식기
    /// 로케일이 없으면 현재 로케일
    pub fn formatter(&self) -> Result<ParticleFormatter, FormatError> {
        match self.locale.as_deref() {
            Some(name) => ParticleFormatter::for_locale(name),
            None => Ok(ParticleFormatter::current().clone()),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/josa/config.json (기본 ~/.config)
pub fn config_path() -> PathBuf {
    let absolute_dir = |key: &str| {
        std::env::var(key)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("josa").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> JosaConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            JosaConfig::default()
        }),
        Err(_) => JosaConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &JosaConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JosaConfig::default();
        assert_eq!(config.locale, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = JosaConfig {
            locale: Some("ko-KR".into()),
            log_level: "debug".into(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: JosaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: JosaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, JosaConfig::default());

        let config: JosaConfig = serde_json::from_str(r#"{"locale": "en-US"}"#).unwrap();
        assert_eq!(config.locale.as_deref(), Some("en-US"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_formatter_from_config() {
        let config = JosaConfig {
            locale: Some("ko-KR".into()),
            ..JosaConfig::default()
        };
        assert_eq!(config.formatter().unwrap().culture().name, "ko-KR");

        let config = JosaConfig {
            locale: Some("xx-XX".into()),
            ..JosaConfig::default()
        };
        assert!(config.formatter().is_err());
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("josa/config.json"));
    }
}
