use ahtml::ConfigError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("row is full: at most {max} modules per row")]
    RowFull { max: usize },
}
