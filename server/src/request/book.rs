use crate::controller::Intake;
use crate::request::{RecordTransformer, UpdateRecordRequest};
use application::transfer::{CreateRecordDto, UpdateRecordDto};
use kernel::prelude::entity::{
    Book, BookDescription, BookDraft, BookId, BookName, BookPages, BookPatch,
};
use serde::Deserialize;

// Missing fields fall back to their defaults; a client-sent `id` is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateBookRequest {
    name: String,
    description: String,
    pages: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookRequest {
    name: Option<String>,
    description: Option<String>,
    pages: Option<f64>,
}

impl Intake<CreateBookRequest> for RecordTransformer<Book> {
    type To = CreateRecordDto<Book>;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateRecordDto {
            draft: BookDraft {
                name: BookName::new(input.name),
                description: BookDescription::new(input.description),
                pages: BookPages::new(input.pages),
            },
        }
    }
}

impl Intake<UpdateRecordRequest<UpdateBookRequest>> for RecordTransformer<Book> {
    type To = UpdateRecordDto<Book>;
    fn emit(&self, input: UpdateRecordRequest<UpdateBookRequest>) -> Self::To {
        let (id, body) = input.into_parts();
        UpdateRecordDto {
            id: BookId::new(id),
            patch: body.map(|body| BookPatch {
                name: body.name.map(BookName::new),
                description: body.description.map(BookDescription::new),
                pages: body.pages.map(BookPages::new),
            }),
        }
    }
}
