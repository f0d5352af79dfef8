//! [`Query`] collection related to the multiple [`Property`] records.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{landlord, Property},
    infra::{database, Database},
    read,
    Service,
};

use super::Query;

/// [`Query`] of all the [`Property`] records of a [`Landlord`],
/// search-filtered.
///
/// Listings stay bare records: leases are resolved on single-item retrieval
/// only (see [`super::property::ById`]).
///
/// [`Landlord`]: crate::domain::Landlord
#[derive(Clone, Debug)]
pub struct List {
    /// ID of the [`Landlord`] performing the query.
    ///
    /// [`Landlord`]: crate::domain::Landlord
    pub landlord_id: landlord::Id,

    /// [`Filter`] to narrow the listing with.
    ///
    /// [`Filter`]: read::property::list::Filter
    pub filter: read::property::list::Filter,
}

impl<Db> Query<List> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Property>, landlord::Id>>,
        Ok = Vec<Property>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Property>;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: List) -> Result<Self::Ok, Self::Err> {
        let List {
            landlord_id,
            filter,
        } = query;

        let mut properties = self
            .database()
            .execute(Select(By::<Vec<Property>, _>::new(landlord_id)))
            .await
            .map_err(tracerr::wrap!())?;
        properties.retain(|p| filter.matches(p));

        Ok(properties)
    }
}
