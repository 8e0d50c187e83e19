//! Offers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, warn};

use crate::{
    database::Db,
    domain::offers::{
        data::NewOffer,
        errors::OffersServiceError,
        records::{OfferRecord, OfferUuid},
        repository::PgOffersRepository,
    },
};

/// `PostgreSQL` backed [`OffersService`].
#[derive(Debug, Clone)]
pub struct PgOffersService {
    db: Db,
    repository: PgOffersRepository,
}

impl PgOffersService {
    /// Create a service over a shared pool.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOffersRepository::new(),
        }
    }
}

#[async_trait]
impl OffersService for PgOffersService {
    async fn insert_offer(&self, offer: NewOffer) -> Result<OfferRecord, OffersServiceError> {
        let uuid = OfferUuid::new();

        let mut tx = self.db.begin().await?;

        let created = match self.repository.insert_offer(&mut tx, uuid, &offer).await {
            Ok(created) => created,
            Err(source) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!(offer = %uuid, "failed to roll back offer insert: {rollback}");
                }

                return Err(source.into());
            }
        };

        tx.commit().await?;

        debug!(offer = %uuid, "offer stored");

        Ok(created)
    }

    async fn find_offer(&self, offer: OfferUuid) -> Result<OfferRecord, OffersServiceError> {
        let found = self
            .repository
            .find_offer(self.db.pool(), offer)
            .await?;

        Ok(found)
    }
}

/// Offer persistence.
#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Stores a new offer under a freshly generated identifier.
    async fn insert_offer(&self, offer: NewOffer) -> Result<OfferRecord, OffersServiceError>;

    /// Retrieve a single offer.
    async fn find_offer(&self, offer: OfferUuid) -> Result<OfferRecord, OffersServiceError>;
}
