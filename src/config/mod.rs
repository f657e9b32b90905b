use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{ExpenseError, Result},
    filters::DEFAULT_YEAR_SPAN,
    ingest::DateBasis,
    utils,
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency_code: String,
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
    pub date_basis: DateBasis,
    pub year_span: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-PH".into(),
            currency_code: "PHP".into(),
            currency_symbol: "₱".into(),
            backend_url: None,
            date_basis: DateBasis::default(),
            year_span: DEFAULT_YEAR_SPAN,
        }
    }
}

impl Config {
    /// Joins the backend URL and `path` with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> Result<String> {
        let base = self
            .backend_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ExpenseError::Config("backend url is not configured".into()))?;
        let path = path.trim_start_matches('/');
        Ok(format!("{base}/{path}"))
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: utils::config_file_in(&base),
        })
    }

    /// Reads the stored configuration, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            tracing::debug!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if config.year_span == 0 {
            return Err(ExpenseError::Config("year_span must be at least 1".into()));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_avoids_double_slashes() {
        let config = Config {
            backend_url: Some("https://api.example.test/".into()),
            ..Config::default()
        };
        assert_eq!(
            config.endpoint("/api/expenses/v1").unwrap(),
            "https://api.example.test/api/expenses/v1"
        );
        assert_eq!(
            config.endpoint("api/vehicles").unwrap(),
            "https://api.example.test/api/vehicles"
        );
    }

    #[test]
    fn endpoint_requires_backend() {
        assert!(matches!(
            Config::default().endpoint("/api/expenses"),
            Err(ExpenseError::Config(_))
        ));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/x/config.json")),
            PathBuf::from("/x/config.json.tmp")
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency_symbol":"$"}"#).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.year_span, DEFAULT_YEAR_SPAN);
        assert_eq!(config.date_basis, DateBasis::Utc);
    }
}
