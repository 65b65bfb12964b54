/// Source of fresh record ids. Implementations must not hand out the same value twice.
pub trait IdGenerator: 'static + Sync + Send {
    fn generate(&self) -> String;
}

pub trait DependOnIdGenerator: 'static + Sync + Send {
    type IdGenerator: IdGenerator;
    fn id_generator(&self) -> &Self::IdGenerator;
}
