mod book;
mod product;

pub use self::{book::*, product::*};
use crate::controller::Intake;
use application::transfer::{DeleteRecordDto, GetAllRecordDto, GetRecordDto};
use kernel::prelude::entity::Record;
use std::marker::PhantomData;

#[derive(Debug)]
pub struct GetAllRecordRequest;

#[derive(Debug)]
pub struct GetRecordRequest {
    id: String,
}

impl GetRecordRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteRecordRequest {
    id: String,
}

impl DeleteRecordRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

/// `body` is `None` when the request body was missing or could not be read as JSON.
#[derive(Debug)]
pub struct UpdateRecordRequest<B> {
    id: String,
    body: Option<B>,
}

impl<B> UpdateRecordRequest<B> {
    pub fn new(id: String, body: Option<B>) -> Self {
        Self { id, body }
    }

    pub(crate) fn into_parts(self) -> (String, Option<B>) {
        (self.id, self.body)
    }
}

pub struct RecordTransformer<R>(PhantomData<fn() -> R>);

impl<R> Default for RecordTransformer<R> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<R: Record> Intake<GetAllRecordRequest> for RecordTransformer<R> {
    type To = GetAllRecordDto<R>;
    fn emit(&self, _: GetAllRecordRequest) -> Self::To {
        GetAllRecordDto::new()
    }
}

impl<R: Record> Intake<GetRecordRequest> for RecordTransformer<R> {
    type To = GetRecordDto<R>;
    fn emit(&self, input: GetRecordRequest) -> Self::To {
        GetRecordDto {
            id: R::Id::from(input.id),
        }
    }
}

impl<R: Record> Intake<DeleteRecordRequest> for RecordTransformer<R> {
    type To = DeleteRecordDto<R>;
    fn emit(&self, input: DeleteRecordRequest) -> Self::To {
        DeleteRecordDto {
            id: R::Id::from(input.id),
        }
    }
}
