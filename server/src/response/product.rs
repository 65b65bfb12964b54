use crate::controller::Exhaust;
use crate::response::RecordPresenter;
use kernel::prelude::entity::{DestructProduct, Product};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    id: String,
    name: String,
    description: String,
    price: f64,
}

impl Exhaust<Product> for RecordPresenter<Product> {
    type To = ProductResponse;
    fn emit(&self, input: Product) -> Self::To {
        let DestructProduct {
            id,
            name,
            description,
            price,
        } = input.into_destruct();
        ProductResponse {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}
