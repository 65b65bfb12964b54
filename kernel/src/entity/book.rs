mod description;
mod id;
mod name;
mod pages;

pub use self::{description::*, id::*, name::*, pages::*};
use crate::entity::common::Record;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    name: BookName,
    description: BookDescription,
    pages: BookPages,
}

impl Book {
    pub fn new(
        id: BookId,
        name: BookName,
        description: BookDescription,
        pages: BookPages,
    ) -> Self {
        Self {
            id,
            name,
            description,
            pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub name: BookName,
    pub description: BookDescription,
    pub pages: BookPages,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub name: Option<BookName>,
    pub description: Option<BookDescription>,
    pub pages: Option<BookPages>,
}

impl Record for Book {
    type Id = BookId;
    type Draft = BookDraft;
    type Patch = BookPatch;

    fn id(&self) -> &BookId {
        &self.id
    }

    fn assemble(id: BookId, draft: BookDraft) -> Self {
        let BookDraft {
            name,
            description,
            pages,
        } = draft;
        Self::new(id, name, description, pages)
    }

    fn apply(&mut self, patch: BookPatch) {
        let BookPatch {
            name,
            description,
            pages,
        } = patch;
        self.substitute(|book| {
            if let Some(name) = name {
                *book.name = name;
            }
            if let Some(description) = description {
                *book.description = description;
            }
            if let Some(pages) = pages {
                *book.pages = pages;
            }
        })
    }
}
