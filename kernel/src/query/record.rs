use crate::entity::Record;
use crate::KernelError;

#[async_trait::async_trait]
pub trait RecordQuery<R: Record>: Sync + Send + 'static {
    /// Every record in collection order.
    async fn find_all(&self) -> error_stack::Result<Vec<R>, KernelError>;

    async fn find_by_id(&self, id: &R::Id) -> error_stack::Result<Option<R>, KernelError>;
}

pub trait DependOnRecordQuery<R: Record>: Sync + Send + 'static {
    type RecordQuery: RecordQuery<R>;
    fn record_query(&self) -> &Self::RecordQuery;
}
