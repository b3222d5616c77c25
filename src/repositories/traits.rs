//! Trait comuni dei repository

/// Inserisce una nuova riga. Ogni chiamata crea un record nuovo, senza deduplicazione.
pub trait Create<Entity, CreateDTO> {
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Legge una riga per chiave primaria, `Ok(None)` se non esiste
pub trait Read<Entity, Id> {
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}
