#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("corrupt row in tasks.{column}: {detail}")]
    CorruptRow {
        column: &'static str,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(String),
}

impl StoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Database(_) => "Database",
            Self::CorruptRow { .. } => "CorruptRow",
            Self::Io(_) => "Io",
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}
