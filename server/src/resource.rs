use crate::request::{
    CreateBookRequest, CreateProductRequest, UpdateBookRequest, UpdateProductRequest,
};
use kernel::prelude::entity::{Book, Product, Record};
use serde::de::DeserializeOwned;

/// Per-resource settings for the shared CRUD routes.
pub trait Resource: Record {
    /// Collection path. Item routes live at `{PATH}/:id`.
    const PATH: &'static str;
    const NOT_FOUND: &'static str;
    const REMOVED: &'static str;

    type CreateRequest: 'static + DeserializeOwned + Send;
    type UpdateRequest: 'static + DeserializeOwned + Send;
}

impl Resource for Book {
    const PATH: &'static str = "/api/v1/books";
    const NOT_FOUND: &'static str = "No book found";
    const REMOVED: &'static str = "Book removed";

    type CreateRequest = CreateBookRequest;
    type UpdateRequest = UpdateBookRequest;
}

impl Resource for Product {
    const PATH: &'static str = "/api/v1/products";
    const NOT_FOUND: &'static str = "No product found";
    const REMOVED: &'static str = "Product removed";

    type CreateRequest = CreateProductRequest;
    type UpdateRequest = UpdateProductRequest;
}
