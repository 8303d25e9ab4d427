//! RestPropertyApi against an in-process HTTP server exposing the
//! conventional REST resource shape.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use property_desk::api::{PropertyApi, RestPropertyApi};
use property_desk::models::{Property, PropertyDraft, PropertyId};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Store {
    rows: Vec<Property>,
    next_id: PropertyId,
}

type Db = Arc<Mutex<Store>>;

async fn list_properties(State(db): State<Db>) -> Json<Vec<Property>> {
    Json(db.lock().unwrap().rows.clone())
}

async fn get_property(
    State(db): State<Db>,
    Path(id): Path<PropertyId>,
) -> Result<Json<Property>, StatusCode> {
    db.lock()
        .unwrap()
        .rows
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_property(State(db): State<Db>, Json(draft): Json<PropertyDraft>) -> StatusCode {
    let mut store = db.lock().unwrap();
    store.next_id += 1;
    let id = store.next_id;
    store.rows.push(draft.with_id(id));
    StatusCode::CREATED
}

async fn update_property(
    State(db): State<Db>,
    Path(id): Path<PropertyId>,
    Json(body): Json<Property>,
) -> StatusCode {
    // the resource contract requires the body id to match the path
    if body.id != id {
        return StatusCode::BAD_REQUEST;
    }

    let mut store = db.lock().unwrap();
    match store.rows.iter_mut().find(|p| p.id == id) {
        Some(p) => {
            *p = body;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_property(State(db): State<Db>, Path(id): Path<PropertyId>) -> StatusCode {
    let mut store = db.lock().unwrap();
    let before = store.rows.len();
    store.rows.retain(|p| p.id != id);
    if store.rows.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

/// Bind an ephemeral port, serve the resource, return a configured client.
async fn spawn_server() -> RestPropertyApi {
    let db: Db = Db::default();

    let app = Router::new()
        .route("/api/properties", get(list_properties).post(create_property))
        .route(
            "/api/properties/:id",
            get(get_property).put(update_property).delete(delete_property),
        )
        .with_state(db);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    RestPropertyApi::new(format!("http://{}/api", addr)).unwrap()
}

fn draft(address: &str, price: f64, size: i32, description: &str) -> PropertyDraft {
    PropertyDraft {
        address: address.to_string(),
        price,
        size,
        description: description.to_string(),
    }
}

#[tokio::test]
async fn full_crud_cycle() {
    let api = spawn_server().await;

    assert!(api.list().await.unwrap().is_empty());

    api.create(&draft("Calle 45 #12-34", 250_000.0, 80, "Two bedrooms"))
        .await
        .unwrap();
    api.create(&draft("Carrera 9 #72-10", 310_000.0, 95, "Near the park"))
        .await
        .unwrap();

    let rows = api.list().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[0].address, "Calle 45 #12-34");

    let second = api.get(2).await.unwrap();
    assert_eq!(second.price, 310_000.0);
    assert_eq!(second.size, 95);

    // the update handler rejects a body whose id differs from the path,
    // so a passing update proves the client attaches the path id
    api.update(2, &draft("Carrera 9 #72-10", 299_000.0, 95, "Price drop"))
        .await
        .unwrap();

    let updated = api.get(2).await.unwrap();
    assert_eq!(updated.price, 299_000.0);
    assert_eq!(updated.description, "Price drop");

    api.delete(1).await.unwrap();
    let rows = api.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 2);
}

#[tokio::test]
async fn missing_record_surfaces_status() {
    let api = spawn_server().await;

    let err = api.get(42).await.unwrap_err();
    assert!(err.to_string().contains("404"));

    let err = api
        .update(42, &draft("Nowhere", 1.0, 1, ""))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("404"));

    let err = api.delete(42).await.unwrap_err();
    assert!(err.to_string().contains("404"));
}
