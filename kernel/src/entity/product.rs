mod description;
mod id;
mod name;
mod price;

pub use self::{description::*, id::*, name::*, price::*};
use crate::entity::common::Record;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure, Mutation)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    description: ProductDescription,
    price: ProductPrice,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: ProductName,
        description: ProductDescription,
        price: ProductPrice,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: ProductPrice,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<ProductName>,
    pub description: Option<ProductDescription>,
    pub price: Option<ProductPrice>,
}

impl Record for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn assemble(id: ProductId, draft: ProductDraft) -> Self {
        let ProductDraft {
            name,
            description,
            price,
        } = draft;
        Self::new(id, name, description, price)
    }

    fn apply(&mut self, patch: ProductPatch) {
        let ProductPatch {
            name,
            description,
            price,
        } = patch;
        self.substitute(|product| {
            if let Some(name) = name {
                *product.name = name;
            }
            if let Some(description) = description {
                *product.description = description;
            }
            if let Some(price) = price {
                *product.price = price;
            }
        })
    }
}
