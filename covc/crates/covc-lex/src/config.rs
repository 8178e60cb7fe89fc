//! Lexer configuration.
//!
//! Loads the charset, preprocessor markers and an optional operator table
//! override from TOML:
//!
//! ```toml
//! charset = "ascii"
//! preprocessor_markers = ["#"]
//!
//! [operators]
//! "+" = 1
//! "->" = 2
//! ```
//!
//! Every field is optional. Without an `[operators]` table the standard
//! operator set is used.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charset::{Charset, CharsetKind};
use crate::error::{ConfigError, TableError};
use crate::table::{OperatorKind, OperatorTable};

/// Code points that open a preprocessor line when no others are configured.
pub const DEFAULT_PREPROCESSOR_MARKERS: [char; 2] = ['#', '@'];

/// Lexer configuration.
///
/// # Example
///
/// ```
/// use covc_lex::{CharsetKind, Lexer, LexerConfig};
///
/// let config = LexerConfig::from_toml_str(
///     r##"
///     charset = "ascii"
///
///     [operators]
///     "+" = 1
///     "#" = 2
///     "##,
/// )
/// .unwrap();
/// assert_eq!(config.charset, CharsetKind::Ascii);
///
/// // `#` is still a preprocessor marker at the start of a line.
/// let lexer = Lexer::from_config(&config).unwrap();
/// assert_eq!(lexer.lex("#x\na # b").unwrap().len(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Source encoding.
    #[serde(default)]
    pub charset: CharsetKind,

    /// Code points that open a preprocessor line at the start of a line.
    #[serde(default = "default_markers")]
    pub preprocessor_markers: Vec<char>,

    /// Spelling to kind mapping replacing the standard operator set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<BTreeMap<String, u16>>,
}

fn default_markers() -> Vec<char> {
    DEFAULT_PREPROCESSOR_MARKERS.to_vec()
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            charset: CharsetKind::default(),
            preprocessor_markers: default_markers(),
            operators: None,
        }
    }
}

impl LexerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LexerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded lexer config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
        };
        write().map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the preprocessor markers.
    ///
    /// Whitespace and `;` are rejected because the main loop would treat
    /// them as separators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .preprocessor_markers
            .iter()
            .find(|&&c| c.is_whitespace() || c == ';')
        {
            Some(&marker) => Err(ConfigError::InvalidMarker(marker)),
            None => Ok(()),
        }
    }

    /// Builds the configured operator table.
    pub fn operator_table(&self) -> Result<OperatorTable, TableError> {
        let Some(operators) = &self.operators else {
            return Ok(OperatorTable::standard());
        };
        let mut table = OperatorTable::new();
        for (spelling, &kind) in operators {
            table.insert(spelling.as_str(), OperatorKind(kind))?;
        }
        Ok(table)
    }

    /// Instantiates the configured charset codec.
    pub fn charset(&self) -> Box<dyn Charset> {
        self.charset.codec()
    }
}
