use thiserror::Error;

/// Errors surfaced by the data-fetching hooks.
///
/// Both variants are caught at the hook boundary and rendered as a message in
/// place of data; nothing here ever propagates past a fetcher.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The backend could not be reached or reported a failure.
    #[error("Falha na comunicação com o servidor: {0}")]
    Transport(String),
    /// The response was well-formed but lacked an expected field.
    #[error("Não encontrado: {0}")]
    MissingData(&'static str),
}
