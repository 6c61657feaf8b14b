use crate::error::{NlcmdError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// nlcmd 사용자 설정
///
/// 설정 파일은 ~/.nlcmd/config.toml에 저장됩니다. CLI 옵션이 항상 우선합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `--model` 미지정시 사용할 모델
    #[serde(default = "default_model")]
    pub default_model: String,

    /// `--timeout` 미지정시 사용할 실행 제한 시간 (초)
    #[serde(default = "default_timeout_secs")]
    pub default_timeout_secs: u64,

    /// Completion API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// 명령어 실행에 사용할 shell
    #[serde(default = "default_shell")]
    pub shell: String,

    /// 0이 아닌 exit code를 실패로 보고할지 여부
    #[serde(default)]
    pub fail_on_nonzero: bool,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_shell() -> String {
    "sh".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            default_timeout_secs: default_timeout_secs(),
            api_base_url: default_api_base_url(),
            shell: default_shell(),
            fail_on_nonzero: false,
        }
    }
}

impl Config {
    /// 설정 디렉토리 경로
    fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            NlcmdError::ConfigError("Could not find home directory".to_string())
        })?;

        Ok(home.join(".nlcmd"))
    }

    /// 설정 파일 경로 가져오기
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// 기본 경로에서 로드 (없으면 기본값 사용)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 지정한 경로에서 로드
    ///
    /// # Examples
    /// ```
    /// use nlcmd::config::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
    /// assert_eq!(config.default_model, "gpt-3.5-turbo");
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| NlcmdError::ConfigError(format!("{}: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    /// 설정 값 검증
    pub fn validate(&self) -> Result<()> {
        if self.default_timeout_secs == 0 {
            return Err(NlcmdError::ConfigError(
                "default_timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.shell.trim().is_empty() {
            return Err(NlcmdError::ConfigError("shell must not be empty".to_string()));
        }

        Ok(())
    }

    /// 기본 경로에 저장
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// 지정한 경로에 저장 (디렉토리가 없으면 생성)
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| NlcmdError::ConfigError(e.to_string()))?;

        fs::write(path, toml_string)?;

        Ok(())
    }

    /// 설정 파일 초기화 (기본값으로)
    pub fn init() -> Result<PathBuf> {
        Self::default().save()
    }
}
