//! Detection of clichéd phrases against a reference pattern set

mod config;
mod matcher;
mod pattern;

pub use config::{
    embedded_cliche_config, load_cliche_config, parse_cliche_config, ClicheConfig, PatternConfig,
};
pub use matcher::{ClicheMatch, ClicheMatcher};
pub use pattern::{ClichePattern, Slot, SlotMatcher};
