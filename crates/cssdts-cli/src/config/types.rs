use cssdts::{ExportType, LogLevel, NameFormat, QuoteType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Options where "not given" is distinguishable from any value.
///
/// Field names are camelCase in config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_format: Option<OneOrMany<NameFormat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type: Option<ExportType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<QuoteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_arbitrary_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_initial: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_different: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_stale_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_folder: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_prefixes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_paths: Option<OneOrMany<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}

/// A config value written either as a single item or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}
