use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 설정 파일 이름. 작업 디렉터리에서 찾는다.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 계산 입력값은 담지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드 (auto/sv/en)
    pub language: String,
    /// 언어팩 TOML 디렉터리
    pub language_pack_dir: Option<String>,
    /// 창 불투명도 (0.3~1.0)
    pub window_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            window_alpha: 1.0,
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("kunde inte läsa konfigurationen: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("ogiltig konfiguration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// TOML 문자열을 해석한다. 빠진 키는 기본값을 쓴다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 돌려준다. 파일은 만들지 않는다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        log::info!("{} not found, using default settings", path.display());
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let cfg = Config::from_toml_str(&content)?;
    log::info!("loaded settings from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let cfg = Config::from_toml_str("language = \"en\"\n").unwrap();
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.language_pack_dir, None);
        assert_eq!(cfg.window_alpha, 1.0);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn invalid_toml_is_error() {
        let err = Config::from_toml_str("window_alpha = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn absent_file_falls_back() {
        let cfg = load_from(Path::new("does/not/exist/config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
