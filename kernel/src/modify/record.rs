use crate::entity::Record;
use crate::KernelError;

#[async_trait::async_trait]
pub trait RecordModifier<R: Record>: 'static + Sync + Send {
    /// Appends `record`. Fails with [`KernelError::Conflict`] when its id is already taken.
    async fn create(&self, record: &R) -> error_stack::Result<(), KernelError>;

    /// Merges `patch` onto the record with `id` in place and returns the whole
    /// collection afterwards, or `None` when nothing has that id.
    async fn update(
        &self,
        id: &R::Id,
        patch: R::Patch,
    ) -> error_stack::Result<Option<Vec<R>>, KernelError>;

    /// Removes every record with `id`. Removing an unknown id is not an error.
    async fn delete(&self, id: &R::Id) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRecordModifier<R: Record>: 'static + Sync + Send {
    type RecordModifier: RecordModifier<R>;
    fn record_modifier(&self) -> &Self::RecordModifier;
}
