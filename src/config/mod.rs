use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the Genius bearer token.
pub const TOKEN_ENV: &str = "GENIUS_API_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout in seconds. Unset keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Where the TUI writes its log file.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Last visited tab (restored on startup)
    pub last_tab: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::genius::GeniusClient::DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = project_dirs()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("songseek"));
        Self { data_dir }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "songseek", "songseek")
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = project_dirs().context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    write_private(&path, &raw)
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        write_private(&path, &raw)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_private(path: &Path, raw: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            tracing::warn!(path = %path.display(), error = %e, "failed to restrict config permissions");
        }
    }
    Ok(())
}

/// Read the API token, loading `.env` from the working directory first.
///
/// A missing or blank token is fatal: nothing can be searched without it.
pub fn api_token() -> anyhow::Result<String> {
    dotenvy::dotenv().ok();
    token_from(std::env::var(TOKEN_ENV).ok())
}

fn token_from(value: Option<String>) -> anyhow::Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => anyhow::bail!(
            "Genius API 키가 설정되지 않았습니다. 환경 변수 '{TOKEN_ENV}'를 설정하세요."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[api]
timeout_secs = 15

[ui]
last_tab = "artist"
"#,
        )
        .unwrap();
        assert_eq!(cfg.api.base_url, "https://api.genius.com");
        assert_eq!(cfg.api.timeout_secs, Some(15));
        assert!(cfg.input.mouse);
        assert_eq!(cfg.ui.last_tab.as_deref(), Some("artist"));
    }

    #[test]
    fn test_load_creates_then_reads_back() {
        let path = std::env::temp_dir()
            .join(format!("songseek-cfg-{}", std::process::id()))
            .join("config.toml");
        let _ = fs::remove_file(&path);

        let created = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(created, Config::default());

        let mut changed = created.clone();
        changed.ui.last_tab = Some("title".into());
        save(&changed, Some(&path)).unwrap();
        assert_eq!(load(Some(&path)).unwrap(), changed);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let path = std::env::temp_dir()
            .join(format!("songseek-perm-{}", std::process::id()))
            .join("config.toml");
        save(&Config::default(), Some(&path)).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_token_required() {
        assert!(token_from(None).is_err());
        assert!(token_from(Some("   ".into())).is_err());
        assert_eq!(token_from(Some(" abc \n".into())).unwrap(), "abc");
    }
}
