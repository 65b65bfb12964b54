use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ProductPrice(f64);

impl ProductPrice {
    pub fn new(price: impl Into<f64>) -> Self {
        Self(price.into())
    }
}
