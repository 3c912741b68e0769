//! TOML lexicon schema and loading

mod loader;
mod types;

pub use loader::{embedded_dictionary_config, load_dictionary_config, parse_dictionary_config};
pub use types::{
    ClosedClassConfig, DictionaryConfig, EndingConfig, FormConfig, LexemeConfig, MetadataConfig,
    ParadigmConfig,
};
