//! [`Query`] collection related to [`payment::Kind`]s.

use std::{collections::HashMap, convert::Infallible};

use strum::IntoEnumIterator as _;

use crate::{domain::payment, Service};

use super::Query;

/// [`Query`] of all the supported [`payment::Kind`]s, keyed by their stable
/// numeric ID with a human-readable label as the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct List;

impl<Db> Query<List> for Service<Db> {
    type Ok = HashMap<u8, String>;
    type Err = Infallible;

    async fn execute(&self, _: List) -> Result<Self::Ok, Self::Err> {
        Ok(payment::Kind::iter().map(|k| (k.u8(), k.to_string())).collect())
    }
}
