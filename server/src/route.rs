mod record;

pub use self::record::*;
use crate::handler::AppModule;
use axum::Router;
use kernel::prelude::entity::{Book, Product};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        route_record::<Book>(self)
    }
}

pub trait ProductRouter {
    fn route_product(self) -> Self;
}

impl ProductRouter for Router<AppModule> {
    fn route_product(self) -> Self {
        route_record::<Product>(self)
    }
}
