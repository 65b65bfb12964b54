use std::marker::PhantomData;

use kernel::prelude::entity::Record;

pub struct GetAllRecordDto<R> {
    _record: PhantomData<R>,
}

impl<R> GetAllRecordDto<R> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<R> Default for GetAllRecordDto<R> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GetRecordDto<R: Record> {
    pub id: R::Id,
}

pub struct CreateRecordDto<R: Record> {
    pub draft: R::Draft,
}

pub struct UpdateRecordDto<R: Record> {
    pub id: R::Id,
    /// `None` when the request carried no usable body.
    pub patch: Option<R::Patch>,
}

pub struct DeleteRecordDto<R: Record> {
    pub id: R::Id,
}
