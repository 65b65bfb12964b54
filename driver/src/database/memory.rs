use error_stack::Report;
use tokio::sync::RwLock;

use kernel::interface::query::RecordQuery;
use kernel::interface::update::RecordModifier;
use kernel::prelude::entity::Record;
use kernel::KernelError;

pub use self::sample::*;

mod sample;

/// Ordered, process-local collection of one record type.
///
/// Reads share the lock; `create`, `update` and `delete` each run under a single
/// write guard so a lookup and the mutation that follows it cannot interleave with
/// another writer.
pub struct InMemoryDatabase<R> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> InMemoryDatabase<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<R: SampleRecords> InMemoryDatabase<R> {
    pub fn seeded() -> Self {
        Self::new(R::samples())
    }
}

impl<R: Record> Default for InMemoryDatabase<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl<R: Record> RecordQuery<R> for InMemoryDatabase<R> {
    async fn find_all(&self) -> error_stack::Result<Vec<R>, KernelError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &R::Id) -> error_stack::Result<Option<R>, KernelError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl<R: Record> RecordModifier<R> for InMemoryDatabase<R> {
    async fn create(&self, record: &R) -> error_stack::Result<(), KernelError> {
        let mut records = self.records.write().await;
        if records.iter().any(|exist| exist.id() == record.id()) {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("Id {:?} is already in use", record.id())));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &R::Id,
        patch: R::Patch,
    ) -> error_stack::Result<Option<Vec<R>>, KernelError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        record.apply(patch);
        Ok(Some(records.clone()))
    }

    async fn delete(&self, id: &R::Id) -> error_stack::Result<(), KernelError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id() != id);
        tracing::trace!("Removed {} records", before - records.len());
        Ok(())
    }
}
