mod book;
mod product;

pub use self::{book::*, product::*};
use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::Record;
use serde::Serialize;
use std::marker::PhantomData;

/// Body of every response: `success` plus either `data` or `msg`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    msg: Option<&'static str>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            msg: None,
        }
    }

    pub fn message(success: bool, msg: &'static str) -> Self {
        Self {
            success,
            data: None,
            msg: Some(msg),
        }
    }
}

#[derive(Debug)]
pub struct Found<T>(pub T);

impl<T: Serialize> IntoResponse for Found<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(Envelope::data(self.0))).into_response()
    }
}

#[derive(Debug)]
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(Envelope::data(self.0))).into_response()
    }
}

#[derive(Debug)]
pub struct Removed(pub &'static str);

impl IntoResponse for Removed {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(Envelope::<()>::message(true, self.0))).into_response()
    }
}

pub struct RecordPresenter<R>(PhantomData<fn() -> R>);

impl<R> Default for RecordPresenter<R> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<R> Exhaust<Vec<R>> for RecordPresenter<R>
where
    R: Record,
    RecordPresenter<R>: Exhaust<R>,
{
    type To = Vec<<RecordPresenter<R> as Exhaust<R>>::To>;
    fn emit(&self, input: Vec<R>) -> Self::To {
        input
            .into_iter()
            .map(|record| <Self as Exhaust<R>>::emit(self, record))
            .collect()
    }
}
