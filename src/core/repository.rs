use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // find by predicate, an empty predicate matches everything
    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;
}
