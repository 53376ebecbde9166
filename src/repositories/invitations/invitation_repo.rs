use std::sync::Arc;

use crate::db::{CollectionKey, Database};
use crate::domain::entities::invitations::MemberInvitation;
use crate::errors::AppResult;

pub struct InvitationRepository {
    db: Arc<Database>,
}

impl InvitationRepository {
    const KEY: CollectionKey = CollectionKey::MemberInvitations;

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<MemberInvitation>> {
        self.db.load(Self::KEY).await
    }

    pub async fn find_by_society(&self, society_id: &str) -> AppResult<Vec<MemberInvitation>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|inv| inv.society_id == society_id)
            .collect())
    }

    pub async fn insert(&self, invitation: MemberInvitation) -> AppResult<MemberInvitation> {
        let mut invitations = self.find_all().await?;
        invitations.push(invitation.clone());
        self.db.save(Self::KEY, &invitations).await?;
        Ok(invitation)
    }
}
