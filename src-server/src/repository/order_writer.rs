//! Order Writer
//!
//! Lets the ordering core persist moves straight into a repository, the same
//! way the browser client persists them over HTTP.

use std::marker::PhantomData;

use async_trait::async_trait;
use board_order::{OrderError, OrderUpdate, OrderWriter, OrderedItem};

use super::traits::OrderedRepository;
use crate::domain::{DomainError, Entity};

pub struct RepositoryOrderWriter<'a, R, T> {
    repo: &'a R,
    _item: PhantomData<fn() -> T>,
}

impl<'a, R, T> RepositoryOrderWriter<'a, R, T>
where
    R: OrderedRepository<T>,
    T: Entity + OrderedItem,
{
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            _item: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<'a, R, T> OrderWriter for RepositoryOrderWriter<'a, R, T>
where
    R: OrderedRepository<T>,
    T: Entity + OrderedItem,
{
    async fn update_order(&self, update: &OrderUpdate) -> Result<(), OrderError> {
        self.repo
            .reposition(update.item_id, update.new_parent_id, update.sort_key)
            .await
            .map(|_| ())
            .map_err(|e| match e {
                DomainError::NotFound(_) => OrderError::NotFound(update.item_id),
                other => OrderError::Transport(other.to_string()),
            })
    }
}
