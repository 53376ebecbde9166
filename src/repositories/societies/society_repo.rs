use std::sync::Arc;

use crate::db::{CollectionKey, Database};
use crate::domain::entities::societies::Society;
use crate::errors::{AppError, AppResult};

pub struct SocietyRepository {
    db: Arc<Database>,
}

impl SocietyRepository {
    const KEY: CollectionKey = CollectionKey::Societies;

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Society>> {
        self.db.load(Self::KEY).await
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Society>> {
        Ok(self.find_all().await?.into_iter().find(|s| s.id == id))
    }

    pub async fn insert(&self, society: Society) -> AppResult<Society> {
        let mut societies = self.find_all().await?;
        if societies.iter().any(|s| s.id == society.id) {
            return Err(AppError::ConflictError(format!(
                "Society '{}' already exists",
                society.id
            )));
        }
        societies.push(society.clone());
        self.db.save(Self::KEY, &societies).await?;
        Ok(society)
    }

    pub async fn update(&self, society: &Society) -> AppResult<()> {
        let mut societies = self.find_all().await?;
        let slot = societies
            .iter_mut()
            .find(|s| s.id == society.id)
            .ok_or_else(|| AppError::NotFound("Society not found".to_string()))?;
        *slot = society.clone();
        self.db.save(Self::KEY, &societies).await
    }
}
