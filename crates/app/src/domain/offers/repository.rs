//! Offers Repository

use sqlx::{Error, FromRow, PgExecutor, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::offers::{
    data::NewOffer,
    records::{OfferRecord, OfferUuid},
};

const INSERT_OFFER_SQL: &str = include_str!("sql/insert_offer.sql");
const FIND_OFFER_SQL: &str = include_str!("sql/find_offer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOffersRepository;

impl PgOffersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        offer: OfferUuid,
        data: &NewOffer,
    ) -> Result<OfferRecord, Error> {
        query_as::<Postgres, OfferRecord>(INSERT_OFFER_SQL)
            .bind(offer.into_uuid())
            .bind(&data.customer)
            .bind(i32::from(data.age))
            .bind(&data.breed)
            .bind(&data.name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_offer<'e, E>(
        &self,
        executor: E,
        offer: OfferUuid,
    ) -> Result<OfferRecord, Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, OfferRecord>(FIND_OFFER_SQL)
            .bind(offer.into_uuid())
            .fetch_one(executor)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OfferRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let age_i32: i32 = row.try_get("age")?;

        let age = u16::try_from(age_i32).map_err(|e| Error::ColumnDecode {
            index: "age".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: OfferUuid::from_uuid(row.try_get("id")?),
            customer: row.try_get("customer")?,
            age,
            breed: row.try_get("breed")?,
            name: row.try_get("name")?,
        })
    }
}
