use crate::controller::Exhaust;
use crate::response::RecordPresenter;
use kernel::prelude::entity::{Book, DestructBook};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: String,
    name: String,
    description: String,
    pages: f64,
}

impl Exhaust<Book> for RecordPresenter<Book> {
    type To = BookResponse;
    fn emit(&self, input: Book) -> Self::To {
        let DestructBook {
            id,
            name,
            description,
            pages,
        } = input.into_destruct();
        BookResponse {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            pages: pages.into(),
        }
    }
}
