use std::fmt::Debug;

/// An entity stored in an ordered in-memory collection and addressed by a string id.
///
/// `Draft` is what a client supplies on creation (everything but the id), and
/// `Patch` is a partial update where every field is optional.
pub trait Record: 'static + Clone + Debug + Sync + Send {
    type Id: 'static + Clone + Debug + Eq + Sync + Send + From<String>;
    type Draft: 'static + Debug + Sync + Send;
    type Patch: 'static + Debug + Sync + Send;

    fn id(&self) -> &Self::Id;

    fn assemble(id: Self::Id, draft: Self::Draft) -> Self;

    /// Overwrites the fields present in `patch`. The id is never touched.
    fn apply(&mut self, patch: Self::Patch);
}
