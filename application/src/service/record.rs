use error_stack::Report;

use kernel::interface::identifier::{DependOnIdGenerator, IdGenerator};
use kernel::interface::query::{DependOnRecordQuery, RecordQuery};
use kernel::interface::update::{DependOnRecordModifier, RecordModifier};
use kernel::prelude::entity::Record;
use kernel::KernelError;

use crate::transfer::{
    CreateRecordDto, DeleteRecordDto, GetAllRecordDto, GetRecordDto, UpdateRecordDto,
};

fn not_found<R: Record>(id: &R::Id) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No record with id {id:?}"))
}

#[async_trait::async_trait]
pub trait GetRecordService<R: Record>: 'static + Sync + Send + DependOnRecordQuery<R> {
    async fn get_all_records(
        &self,
        _dto: GetAllRecordDto<R>,
    ) -> error_stack::Result<Vec<R>, KernelError> {
        let records = self.record_query().find_all().await?;
        tracing::debug!("Listed {} records", records.len());
        Ok(records)
    }

    async fn get_record(&self, dto: GetRecordDto<R>) -> error_stack::Result<R, KernelError> {
        let id = dto.id;
        self.record_query()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found::<R>(&id))
    }
}

impl<R: Record, T> GetRecordService<R> for T where T: DependOnRecordQuery<R> {}

#[async_trait::async_trait]
pub trait CreateRecordService<R: Record>:
    'static + Sync + Send + DependOnRecordModifier<R> + DependOnIdGenerator
{
    async fn create_record(&self, dto: CreateRecordDto<R>) -> error_stack::Result<R, KernelError> {
        let id = R::Id::from(self.id_generator().generate());
        let record = R::assemble(id, dto.draft);

        self.record_modifier().create(&record).await?;
        tracing::debug!("Created record {:?}", record.id());

        Ok(record)
    }
}

impl<R: Record, T> CreateRecordService<R> for T where
    T: DependOnRecordModifier<R> + DependOnIdGenerator
{
}

#[async_trait::async_trait]
pub trait UpdateRecordService<R: Record>:
    'static + Sync + Send + DependOnRecordQuery<R> + DependOnRecordModifier<R>
{
    async fn update_record(
        &self,
        dto: UpdateRecordDto<R>,
    ) -> error_stack::Result<Vec<R>, KernelError> {
        let UpdateRecordDto { id, patch } = dto;

        // An unknown id wins over a missing body.
        let Some(patch) = patch else {
            return match self.record_query().find_by_id(&id).await? {
                None => Err(not_found::<R>(&id)),
                Some(_) => Err(Report::new(KernelError::BadRequest)
                    .attach_printable(format!("Update of {id:?} carried no data"))),
            };
        };

        let records = self
            .record_modifier()
            .update(&id, patch)
            .await?
            .ok_or_else(|| not_found::<R>(&id))?;
        tracing::debug!("Updated record {id:?}");

        Ok(records)
    }
}

impl<R: Record, T> UpdateRecordService<R> for T where
    T: DependOnRecordQuery<R> + DependOnRecordModifier<R>
{
}

#[async_trait::async_trait]
pub trait DeleteRecordService<R: Record>:
    'static + Sync + Send + DependOnRecordModifier<R>
{
    async fn delete_record(&self, dto: DeleteRecordDto<R>) -> error_stack::Result<(), KernelError> {
        let id = dto.id;
        self.record_modifier().delete(&id).await?;
        tracing::debug!("Deleted record {id:?}");
        Ok(())
    }
}

impl<R: Record, T> DeleteRecordService<R> for T where T: DependOnRecordModifier<R> {}
