use crate::error::{AligntabError, Result};
use crate::table::DEFAULT_SPACING;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "aligntab.toml";

/// aligntab.toml schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub table: TableSection,
    #[serde(default)]
    pub input: InputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSection {
    pub columns: usize,
    #[serde(default = "default_spacing")]
    pub spacing: usize,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputSection {
    /// Field separator, exactly one character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Treat the first input line as a label row
    #[serde(default)]
    pub label: bool,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            label: false,
        }
    }
}

fn default_spacing() -> usize {
    DEFAULT_SPACING
}

fn default_delimiter() -> String {
    "\t".to_string()
}

impl TableConfig {
    /// Config for `columns` columns with every other option at its default
    pub fn with_columns(columns: usize) -> Self {
        Self {
            table: TableSection {
                columns,
                spacing: DEFAULT_SPACING,
                header: String::new(),
                footer: String::new(),
            },
            input: InputSection::default(),
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate an aligntab.toml file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AligntabError::ConfigParseError(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AligntabError::ConfigParseError(e.to_string()))
    }

    /// Write as aligntab.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_toml()?)?;
        Ok(())
    }

    /// Check values that the TOML schema alone cannot express
    pub fn validate(&self) -> Result<()> {
        if self.table.columns == 0 {
            return Err(AligntabError::NoColumns);
        }
        self.delimiter()?;
        Ok(())
    }

    /// The input delimiter as a single character
    pub fn delimiter(&self) -> Result<char> {
        let mut chars = self.input.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(AligntabError::ConfigInvalidValue {
                field: "input.delimiter".to_string(),
                reason: format!(
                    "expected a single character, got {:?}",
                    self.input.delimiter
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[table]
columns = 3
"#;

        let config = TableConfig::from_toml(toml).unwrap();
        assert_eq!(config.table.columns, 3);
        assert_eq!(config.table.spacing, 2);
        assert_eq!(config.table.header, "");
        assert_eq!(config.table.footer, "");
        assert_eq!(config.delimiter().unwrap(), '\t');
        assert!(!config.input.label);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[table]
columns = 2
spacing = 4
header = "Inventory"
footer = "(end)"

[input]
delimiter = ","
label = true
"#;

        let config = TableConfig::from_toml(toml).unwrap();
        assert_eq!(config.table.spacing, 4);
        assert_eq!(config.table.header, "Inventory");
        assert_eq!(config.table.footer, "(end)");
        assert_eq!(config.delimiter().unwrap(), ',');
        assert!(config.input.label);
    }

    #[test]
    fn test_missing_columns_is_parse_error() {
        let result = TableConfig::from_toml("[table]\nspacing = 1\n");
        assert!(matches!(result, Err(AligntabError::ConfigParseError(_))));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let result = TableConfig::from_toml("[table]\ncolumns = 0\n");
        assert!(matches!(result, Err(AligntabError::NoColumns)));
    }

    #[test]
    fn test_multi_char_delimiter_rejected() {
        let toml = r#"
[table]
columns = 2

[input]
delimiter = "::"
"#;

        let result = TableConfig::from_toml(toml);
        match result {
            Err(AligntabError::ConfigInvalidValue { field, .. }) => {
                assert_eq!(field, "input.delimiter")
            }
            other => panic!("expected ConfigInvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let mut config = TableConfig::with_columns(4);
        config.table.header = "top".to_string();
        config.input.delimiter = "|".to_string();

        let text = config.to_toml().unwrap();
        assert_eq!(TableConfig::from_toml(&text).unwrap(), config);
    }
}
