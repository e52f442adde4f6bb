/// Errors in the configuration of nodes, raised eagerly when the
/// offending value is set, never at render time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid CSS {property} value {value:?}: must be auto, 0, or a number \
             followed by one of px, %, em, rem, vw, vh, vmin, vmax, ch")]
    InvalidCssUnit { property: &'static str, value: String },
    #[error("invalid DOM id {0:?}: must start with a letter and contain only \
             letters, digits, hyphens and underscores")]
    InvalidDomId(String),
    #[error("invalid attribute name {0:?}")]
    InvalidAttributeName(String),
    #[error("max modules per row must be at least 1, got {0}")]
    InvalidMaxModules(usize),
    #[error("column width must be between 1 and 12, got {0}")]
    InvalidColumnWidth(u32),
    #[error("{0} is required")]
    MissingField(&'static str),
}
