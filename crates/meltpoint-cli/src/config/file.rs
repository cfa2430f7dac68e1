use crate::error::{CliError, Result};
use meltpoint::core::models::result::AggregationPolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConditionsConfig {
    pub primer_conc: Option<f64>,
    pub salt_conc: Option<f64>,
    pub mg_conc: Option<f64>,
    pub dntp_conc: Option<f64>,
    pub polymerase: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileEngineConfig {
    pub expansion_cap: Option<usize>,
    pub annealing_offset: Option<f64>,
    pub gradient_span: Option<f64>,
    pub aggregation: Option<AggregationPolicy>,
    pub workers: Option<usize>,
    pub recommended_max_length: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub conditions: Option<FileConditionsConfig>,
    pub engine: Option<FileEngineConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_kebab_case_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meltpoint.toml");
        fs::write(
            &path,
            r#"
[conditions]
primer-conc = 0.25
salt-conc = 50
polymerase = "Q5 High-Fidelity DNA Polymerase"

[engine]
aggregation = "mean"
expansion-cap = 256
"#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let conditions = config.conditions.unwrap();
        assert_eq!(conditions.primer_conc, Some(0.25));
        assert_eq!(conditions.salt_conc, Some(50.0));
        assert_eq!(conditions.mg_conc, None);
        let engine = config.engine.unwrap();
        assert_eq!(engine.aggregation, Some(AggregationPolicy::Mean));
        assert_eq!(engine.expansion_cap, Some(256));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[conditions]\nsodium = 50\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
