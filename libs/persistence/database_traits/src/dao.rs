use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// CRUD over one entity type.
///
/// Lookups by id report absence as `Ok(None)` and deletes report whether a
/// record was removed; `update` on a missing id is an error of the
/// implementor's choosing.
#[async_trait]
pub trait GenericDao {
    type Model: Send + Sync + 'static;
    type CreateRequest: Send + Sync + 'static;
    type UpdateRequest: Send + Sync + 'static;
    type Error: Send + 'static;
    type ID: Serialize + DeserializeOwned + Send + Sync + 'static;

    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Option<Self::Model>, Self::Error>;

    async fn all(&self) -> Result<Vec<Self::Model>, Self::Error>;

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, Self::Error>;

    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Model, Self::Error>;

    async fn delete(&self, id: Self::ID) -> Result<bool, Self::Error>;
}
