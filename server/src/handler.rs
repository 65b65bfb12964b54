use driver::database::InMemoryDatabase;
use driver::identifier::UuidIdGenerator;
use kernel::interface::identifier::DependOnIdGenerator;
use kernel::interface::query::DependOnRecordQuery;
use kernel::interface::update::DependOnRecordModifier;
use kernel::prelude::entity::{Book, Product};
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> Self {
        Self(Arc::new(Handler::init()))
    }
}

impl Default for AppModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

/// Owns one collection per resource. Both live as long as the process.
#[derive(References)]
pub struct Handler {
    books: InMemoryDatabase<Book>,
    products: InMemoryDatabase<Product>,
    id_generator: UuidIdGenerator,
}

impl Handler {
    pub fn init() -> Self {
        Self {
            books: InMemoryDatabase::seeded(),
            products: InMemoryDatabase::seeded(),
            id_generator: UuidIdGenerator,
        }
    }
}

impl DependOnRecordQuery<Book> for Handler {
    type RecordQuery = InMemoryDatabase<Book>;
    fn record_query(&self) -> &Self::RecordQuery {
        self.books()
    }
}

impl DependOnRecordModifier<Book> for Handler {
    type RecordModifier = InMemoryDatabase<Book>;
    fn record_modifier(&self) -> &Self::RecordModifier {
        self.books()
    }
}

impl DependOnRecordQuery<Product> for Handler {
    type RecordQuery = InMemoryDatabase<Product>;
    fn record_query(&self) -> &Self::RecordQuery {
        self.products()
    }
}

impl DependOnRecordModifier<Product> for Handler {
    type RecordModifier = InMemoryDatabase<Product>;
    fn record_modifier(&self) -> &Self::RecordModifier {
        self.products()
    }
}

impl DependOnIdGenerator for Handler {
    type IdGenerator = UuidIdGenerator;
    fn id_generator(&self) -> &Self::IdGenerator {
        &self.id_generator
    }
}
