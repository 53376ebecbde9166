//! 신청서 리포지토리
//!
//! `coopkonnect_society_applications` 컬렉션 전체를 읽고, 수정하고, 다시 씁니다.

use std::sync::Arc;

use crate::db::{CollectionKey, Database};
use crate::domain::entities::applications::SocietyApplication;
use crate::errors::{AppError, AppResult};

pub struct ApplicationRepository {
    db: Arc<Database>,
}

impl ApplicationRepository {
    const KEY: CollectionKey = CollectionKey::SocietyApplications;

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<SocietyApplication>> {
        self.db.load(Self::KEY).await
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<SocietyApplication>> {
        Ok(self.find_all().await?.into_iter().find(|app| app.id == id))
    }

    /// 컬렉션 끝에 추가합니다. 중복 검사는 하지 않습니다.
    pub async fn insert(&self, application: SocietyApplication) -> AppResult<SocietyApplication> {
        let mut applications = self.find_all().await?;
        applications.push(application.clone());
        self.db.save(Self::KEY, &applications).await?;
        Ok(application)
    }

    /// 같은 ID의 레코드를 교체합니다.
    pub async fn update(&self, application: &SocietyApplication) -> AppResult<()> {
        let mut applications = self.find_all().await?;
        let slot = applications
            .iter_mut()
            .find(|app| app.id == application.id)
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
        *slot = application.clone();
        self.db.save(Self::KEY, &applications).await
    }

    pub async fn replace_all(&self, applications: &[SocietyApplication]) -> AppResult<()> {
        self.db.save(Self::KEY, applications).await
    }
}
