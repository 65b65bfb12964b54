use crate::controller::Intake;
use crate::request::{RecordTransformer, UpdateRecordRequest};
use application::transfer::{CreateRecordDto, UpdateRecordDto};
use kernel::prelude::entity::{
    Product, ProductDescription, ProductDraft, ProductId, ProductName, ProductPatch, ProductPrice,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    name: String,
    description: String,
    price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl Intake<CreateProductRequest> for RecordTransformer<Product> {
    type To = CreateRecordDto<Product>;
    fn emit(&self, input: CreateProductRequest) -> Self::To {
        CreateRecordDto {
            draft: ProductDraft {
                name: ProductName::new(input.name),
                description: ProductDescription::new(input.description),
                price: ProductPrice::new(input.price),
            },
        }
    }
}

impl Intake<UpdateRecordRequest<UpdateProductRequest>> for RecordTransformer<Product> {
    type To = UpdateRecordDto<Product>;
    fn emit(&self, input: UpdateRecordRequest<UpdateProductRequest>) -> Self::To {
        let (id, body) = input.into_parts();
        UpdateRecordDto {
            id: ProductId::new(id),
            patch: body.map(|body| ProductPatch {
                name: body.name.map(ProductName::new),
                description: body.description.map(ProductDescription::new),
                price: body.price.map(ProductPrice::new),
            }),
        }
    }
}
