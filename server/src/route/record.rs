use crate::controller::{Controller, Exhaust, Intake};
use crate::error::ErrorStatus;
use crate::handler::{AppModule, Handler};
use crate::request::{
    DeleteRecordRequest, GetAllRecordRequest, GetRecordRequest, RecordTransformer,
    UpdateRecordRequest,
};
use crate::resource::Resource;
use crate::response::{Created, Found, RecordPresenter, Removed};
use application::service::{
    CreateRecordService, DeleteRecordService, GetRecordService, UpdateRecordService,
};
use application::transfer::{CreateRecordDto, UpdateRecordDto};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use error_stack::Report;
use kernel::interface::identifier::DependOnIdGenerator;
use kernel::interface::query::DependOnRecordQuery;
use kernel::interface::update::DependOnRecordModifier;
use kernel::KernelError;
use serde::Serialize;

fn failed<R: Resource>(report: Report<KernelError>) -> ErrorStatus {
    ErrorStatus::with_not_found(report, R::NOT_FOUND)
}

/// Registers list/create on `R::PATH` and get/update/delete on `R::PATH/:id`.
pub fn route_record<R>(router: Router<AppModule>) -> Router<AppModule>
where
    R: Resource,
    Handler: DependOnRecordQuery<R> + DependOnRecordModifier<R> + DependOnIdGenerator,
    RecordTransformer<R>: Intake<R::CreateRequest, To = CreateRecordDto<R>>
        + Intake<UpdateRecordRequest<R::UpdateRequest>, To = UpdateRecordDto<R>>,
    RecordPresenter<R>: Exhaust<R> + Exhaust<Vec<R>>,
    <RecordPresenter<R> as Exhaust<R>>::To: 'static + Serialize + Send,
    <RecordPresenter<R> as Exhaust<Vec<R>>>::To: 'static + Serialize + Send,
{
    router
        .route(
            R::PATH,
            get(|State(module): State<AppModule>| async move {
                Controller::new(RecordTransformer::<R>::default(), RecordPresenter::<R>::default())
                    .intake(GetAllRecordRequest)
                    .handle(|dto| async move {
                        GetRecordService::<R>::get_all_records(&*module, dto).await
                    })
                    .await
                    .map(Found)
                    .map_err(failed::<R>)
            })
            .post(
                |State(module): State<AppModule>,
                 body: Result<Json<R::CreateRequest>, JsonRejection>| async move {
                    let body = match body {
                        Ok(Json(body)) => body,
                        Err(rejection) => return Err(ErrorStatus::from(rejection)),
                    };
                    Controller::new(
                        RecordTransformer::<R>::default(),
                        RecordPresenter::<R>::default(),
                    )
                    .intake(body)
                    .handle(|dto| async move {
                        CreateRecordService::<R>::create_record(&*module, dto).await
                    })
                    .await
                    .map(Created)
                    .map_err(failed::<R>)
                },
            ),
        )
        .route(
            &format!("{}/:id", R::PATH),
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(
                        RecordTransformer::<R>::default(),
                        RecordPresenter::<R>::default(),
                    )
                    .intake(GetRecordRequest::new(id))
                    .handle(|dto| async move {
                        GetRecordService::<R>::get_record(&*module, dto).await
                    })
                    .await
                    .map(Found)
                    .map_err(failed::<R>)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 body: Result<Json<R::UpdateRequest>, JsonRejection>| async move {
                    // Whether the id exists is decided before the missing body matters.
                    let body = match body {
                        Ok(Json(body)) => Some(body),
                        Err(rejection) => {
                            tracing::debug!("Update body rejected: {}", rejection.body_text());
                            None
                        }
                    };
                    Controller::new(
                        RecordTransformer::<R>::default(),
                        RecordPresenter::<R>::default(),
                    )
                    .intake(UpdateRecordRequest::new(id, body))
                    .handle(|dto| async move {
                        UpdateRecordService::<R>::update_record(&*module, dto).await
                    })
                    .await
                    .map(Found)
                    .map_err(failed::<R>)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(RecordTransformer::<R>::default(), ())
                        .intake(DeleteRecordRequest::new(id))
                        .bypass(|dto| async move {
                            DeleteRecordService::<R>::delete_record(&*module, dto).await
                        })
                        .await
                        .map(|_| Removed(R::REMOVED))
                        .map_err(failed::<R>)
                },
            ),
        )
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::handler::AppModule;

    enum Payload {
        Empty,
        Json(Value),
        Raw(&'static str),
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        payload: Payload,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match payload {
            Payload::Empty => builder.body(Body::empty()),
            Payload::Json(value) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            Payload::Raw(raw) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(raw)),
        }
        .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn app() -> Router {
        crate::router(AppModule::default())
    }

    #[tokio::test]
    async fn lists_seeded_books() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/books", Payload::Empty).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(
            body["data"][0],
            json!({
                "id": "1",
                "name": "Book One",
                "description": "This is book one",
                "pages": 29.99
            })
        );
        assert!(body.get("msg").is_none());
    }

    #[tokio::test]
    async fn gets_single_book() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/books/3", Payload::Empty).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], json!("Book Three"));
        assert_eq!(body["data"]["pages"], json!(49.99));
    }

    #[tokio::test]
    async fn unknown_book_is_not_found() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/books/99", Payload::Empty).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "msg": "No book found" }));
    }

    #[tokio::test]
    async fn creates_book_with_fresh_id() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/books",
            Payload::Json(json!({ "name": "Book Four", "description": "d", "pages": 9.99 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], json!(true));
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert!(!["1", "2", "3", "4"].contains(&id.as_str()));
        assert_eq!(body["data"]["name"], json!("Book Four"));
        assert_eq!(body["data"]["pages"], json!(9.99));

        let (_, list) = send(&app, Method::GET, "/api/v1/books", Payload::Empty).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 4);
        assert_eq!(list["data"][3]["id"], json!(id));

        let uri = format!("/api/v1/books/{id}");
        let (status, found) = send(&app, Method::GET, &uri, Payload::Empty).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["data"], body["data"]);
    }

    #[tokio::test]
    async fn create_ignores_client_id_and_defaults_missing_fields() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/books",
            Payload::Json(json!({ "id": "1", "name": "Only a name" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(body["data"]["id"], json!("1"));
        assert_eq!(body["data"]["description"], json!(""));
        assert_eq!(body["data"]["pages"], json!(0.0));
    }

    #[tokio::test]
    async fn create_without_body_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/api/v1/books", Payload::Empty).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "msg": "No data" }));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/books",
            Payload::Raw("{not json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "msg": "No data" }));

        let (_, list) = send(&app, Method::GET, "/api/v1/books", Payload::Empty).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_merges_and_returns_whole_collection() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/books/2",
            Payload::Json(json!({ "id": "changed", "pages": 1.00 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let books = body["data"].as_array().unwrap();
        assert_eq!(books.len(), 3);
        assert_eq!(
            books[1],
            json!({
                "id": "2",
                "name": "Book Two",
                "description": "This is book two",
                "pages": 1.0
            })
        );
        assert_eq!(books[0]["pages"], json!(29.99));
    }

    #[tokio::test]
    async fn update_unknown_book_is_not_found_even_without_body() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/books/99",
            Payload::Json(json!({ "name": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "msg": "No book found" }));

        let (status, _) = send(&app, Method::PUT, "/api/v1/books/99", Payload::Empty).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_existing_book_without_body_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, Method::PUT, "/api/v1/books/1", Payload::Empty).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "msg": "No data" }));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/books/1",
            Payload::Raw("{not json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "msg": "No data" }));

        let (_, found) = send(&app, Method::GET, "/api/v1/books/1", Payload::Empty).await;
        assert_eq!(found["data"]["name"], json!("Book One"));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let app = app();
        for _ in 0..2 {
            let (status, body) =
                send(&app, Method::DELETE, "/api/v1/books/1", Payload::Empty).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "success": true, "msg": "Book removed" }));
        }

        let (status, _) = send(&app, Method::DELETE, "/api/v1/books/99", Payload::Empty).await;
        assert_eq!(status, StatusCode::OK);

        let (_, list) = send(&app, Method::GET, "/api/v1/books", Payload::Empty).await;
        let ids = list["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|book| book["id"].clone())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![json!("2"), json!("3")]);
    }

    #[tokio::test]
    async fn products_use_their_own_collection_and_messages() {
        let app = app();

        let (status, body) =
            send(&app, Method::GET, "/api/v1/products/2", Payload::Empty).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({
                "id": "2",
                "name": "Product Two",
                "description": "This is product two",
                "price": 39.99
            })
        );

        let (status, body) =
            send(&app, Method::GET, "/api/v1/products/99", Payload::Empty).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "msg": "No product found" }));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/products/3",
            Payload::Json(json!({ "price": 5.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][2]["price"], json!(5.5));
        assert_eq!(body["data"][2]["name"], json!("Product Three"));

        let (status, body) =
            send(&app, Method::DELETE, "/api/v1/products/1", Payload::Empty).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "msg": "Product removed" }));

        let (_, products) = send(&app, Method::GET, "/api/v1/products", Payload::Empty).await;
        assert_eq!(products["data"].as_array().unwrap().len(), 2);

        let (_, books) = send(&app, Method::GET, "/api/v1/books", Payload::Empty).await;
        assert_eq!(books["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn creates_product_with_fresh_id_and_default_price() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/products",
            Payload::Json(json!({ "name": "Product Four", "description": "d", "price": 12.5 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], json!(true));
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert!(!["1", "2", "3"].contains(&id.as_str()));
        assert_eq!(body["data"]["name"], json!("Product Four"));
        assert_eq!(body["data"]["price"], json!(12.5));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/products",
            Payload::Json(json!({ "name": "Free sample" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(body["data"]["id"], json!(id));
        assert_eq!(body["data"]["description"], json!(""));
        assert_eq!(body["data"]["price"], json!(0.0));

        let (_, products) = send(&app, Method::GET, "/api/v1/products", Payload::Empty).await;
        assert_eq!(products["data"].as_array().unwrap().len(), 5);
        assert_eq!(products["data"][3]["id"], json!(id));

        let (_, books) = send(&app, Method::GET, "/api/v1/books", Payload::Empty).await;
        assert_eq!(books["data"].as_array().unwrap().len(), 3);
    }
}
