mod book;
mod common;
mod product;

pub use self::{book::*, common::*, product::*};
