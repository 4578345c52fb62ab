//! Resolved options for one invocation.
//!
//! [`ConfigOptions`] is built once (by the CLI, from flags and an optional
//! config file) and is read-only afterwards. All engine components borrow it.

use crate::alerts::LogLevel;
use crate::names::NameFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const EXPORT_TYPE_NAME_DEFAULT: &str = "ClassNames";
pub const EXPORT_TYPE_INTERFACE_DEFAULT: &str = "Styles";

/// How identifiers are exported from the declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    /// `export declare const foo: string;` per identifier
    #[default]
    Named,
    /// A record type plus a default-exported object
    Default,
}

impl FromStr for ExportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "named" => Ok(ExportType::Named),
            "default" => Ok(ExportType::Default),
            other => Err(format!("unknown export type '{other}' (expected named or default)")),
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportType::Named => "named",
            ExportType::Default => "default",
        })
    }
}

/// Quote character used for property keys in `default` export mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteType {
    #[default]
    Single,
    Double,
}

impl QuoteType {
    pub fn quote(self, value: &str) -> String {
        match self {
            QuoteType::Single => format!("'{value}'"),
            QuoteType::Double => format!("\"{value}\""),
        }
    }
}

impl FromStr for QuoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(QuoteType::Single),
            "double" => Ok(QuoteType::Double),
            other => Err(format!("unknown quote type '{other}' (expected single or double)")),
        }
    }
}

/// Fully resolved options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    // Rendering
    pub name_format: Vec<NameFormat>,
    pub export_type: ExportType,
    pub export_type_name: String,
    pub export_type_interface: String,
    pub quote_type: QuoteType,
    pub banner: String,
    pub allow_arbitrary_extensions: bool,

    // Behaviour
    pub watch: bool,
    pub ignore_initial: bool,
    pub list_different: bool,
    pub update_stale_only: bool,
    pub output_folder: Option<PathBuf>,
    pub ignore: Vec<String>,
    pub log_level: LogLevel,

    // Compiler-facing
    pub aliases: BTreeMap<String, String>,
    pub alias_prefixes: BTreeMap<String, String>,
    pub include_paths: Vec<PathBuf>,
    pub additional_data: Option<String>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            name_format: vec![NameFormat::default()],
            export_type: ExportType::default(),
            export_type_name: EXPORT_TYPE_NAME_DEFAULT.to_string(),
            export_type_interface: EXPORT_TYPE_INTERFACE_DEFAULT.to_string(),
            quote_type: QuoteType::default(),
            banner: String::new(),
            allow_arbitrary_extensions: false,
            watch: false,
            ignore_initial: false,
            list_different: false,
            update_stale_only: false,
            output_folder: None,
            ignore: Vec::new(),
            log_level: LogLevel::default(),
            aliases: BTreeMap::new(),
            alias_prefixes: BTreeMap::new(),
            include_paths: Vec::new(),
            additional_data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConfigOptions::default();
        assert_eq!(options.name_format, vec![NameFormat::Camel]);
        assert_eq!(options.export_type, ExportType::Named);
        assert_eq!(options.export_type_name, "ClassNames");
        assert_eq!(options.export_type_interface, "Styles");
        assert_eq!(options.quote_type, QuoteType::Single);
        assert_eq!(options.log_level, LogLevel::Verbose);
        assert!(options.output_folder.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: ConfigOptions = serde_json::from_value(serde_json::json!({
            "nameFormat": ["kebab", "snake"],
            "exportType": "default",
            "exportTypeName": "Classes",
            "exportTypeInterface": "AllStyles",
            "quoteType": "double",
            "banner": "// generated",
            "allowArbitraryExtensions": true,
            "watch": false,
            "ignoreInitial": false,
            "listDifferent": false,
            "updateStaleOnly": true,
            "outputFolder": "__generated__",
            "ignore": ["**/node_modules/**"],
            "logLevel": "silent",
            "aliases": { "~fancy": "complex" },
            "aliasPrefixes": { "~": "nested/" },
            "includePaths": ["styles"],
            "additionalData": "$red: red;"
        }))
        .unwrap();

        assert_eq!(options.name_format, vec![NameFormat::Kebab, NameFormat::Snake]);
        assert_eq!(options.export_type, ExportType::Default);
        assert_eq!(options.quote_type, QuoteType::Double);
        assert_eq!(options.log_level, LogLevel::Silent);
        assert_eq!(options.output_folder, Some(PathBuf::from("__generated__")));
        assert_eq!(options.aliases.get("~fancy").map(String::as_str), Some("complex"));
    }

    #[test]
    fn test_quote() {
        assert_eq!(QuoteType::Single.quote("a"), "'a'");
        assert_eq!(QuoteType::Double.quote("a"), "\"a\"");
    }
}
