use serde::{Deserialize, Serialize};

use crate::codec::filter::FilterConfig;
use crate::codec::handler::HandlerTable;
use crate::persist::store::StorageScope;

/// Everything a caller can configure: identifier override, storage scope,
/// submit behavior, external-discovery toggle, name filters, and custom
/// restore handlers.
#[derive(Default)]
pub struct PersistOptions {
    /// Storage identifier used instead of the form's element id.
    pub uuid: Option<String>,
    pub scope: StorageScope,
    /// Save on submit when true; clear the stored record otherwise.
    pub save_on_submit: bool,
    /// Skip the document-wide externally-associated-control pass.
    pub skip_external: bool,
    pub filter: FilterConfig,
    pub handlers: HandlerTable,
}

impl PersistOptions {
    pub fn new() -> Self {
        PersistOptions::default()
    }

    pub fn with_uuid(mut self, uuid: &str) -> Self {
        self.uuid = Some(uuid.to_string());
        self
    }
}

// ============================================================================
// Options File Model (optional YAML)
// ============================================================================

/// The declarative subset of `PersistOptions` loadable from a YAML file.
/// Predicates and handlers are code and stay out of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionsFile {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub scope: StorageScope,
    #[serde(default)]
    pub save_on_submit: bool,
    #[serde(default)]
    pub skip_external: bool,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl OptionsFile {
    pub fn into_options(self) -> PersistOptions {
        PersistOptions {
            uuid: self.uuid,
            scope: self.scope,
            save_on_submit: self.save_on_submit,
            skip_external: self.skip_external,
            filter: FilterConfig {
                include: self.include,
                exclude: self.exclude,
                ..FilterConfig::default()
            },
            handlers: HandlerTable::new(),
        }
    }
}

/// Load options from a YAML file. Returns defaults if the file is missing or
/// malformed.
pub fn load_options(path: Option<&str>) -> PersistOptions {
    let options_path = path.unwrap_or("form-persistence.yaml");
    let file: OptionsFile = match std::fs::read_to_string(options_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => OptionsFile::default(),
    };
    file.into_options()
}
