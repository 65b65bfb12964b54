use kernel::prelude::entity::{
    Book, BookDescription, BookId, BookName, BookPages, Product, ProductDescription, ProductId,
    ProductName, ProductPrice, Record,
};

/// Fixed records a collection holds at startup.
pub trait SampleRecords: Record {
    fn samples() -> Vec<Self>;
}

const SAMPLES: [(&str, &str, f64); 3] = [
    ("1", "One", 29.99),
    ("2", "Two", 39.99),
    ("3", "Three", 49.99),
];

impl SampleRecords for Book {
    fn samples() -> Vec<Self> {
        SAMPLES
            .iter()
            .map(|(id, ordinal, pages)| {
                Book::new(
                    BookId::new(*id),
                    BookName::new(format!("Book {ordinal}")),
                    BookDescription::new(format!("This is book {}", ordinal.to_lowercase())),
                    BookPages::new(*pages),
                )
            })
            .collect()
    }
}

impl SampleRecords for Product {
    fn samples() -> Vec<Self> {
        SAMPLES
            .iter()
            .map(|(id, ordinal, price)| {
                Product::new(
                    ProductId::new(*id),
                    ProductName::new(format!("Product {ordinal}")),
                    ProductDescription::new(format!("This is product {}", ordinal.to_lowercase())),
                    ProductPrice::new(*price),
                )
            })
            .collect()
    }
}
