use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookPages(f64);

impl BookPages {
    pub fn new(pages: impl Into<f64>) -> Self {
        Self(pages.into())
    }
}
