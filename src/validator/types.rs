use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("address has no '@' separator")]
    MissingAt,
}
