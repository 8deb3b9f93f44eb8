use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// One page holding every seeded user.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserPage {
    pub page: u32,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: u32,
    pub data: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleUser {
    pub data: User,
}

pub type Db = Arc<Vec<User>>;

const SEED: [(&str, &str); 12] = [
    ("George", "Bluth"),
    ("Janet", "Weaver"),
    ("Emma", "Wong"),
    ("Eve", "Holt"),
    ("Charles", "Morris"),
    ("Tracey", "Ramos"),
    ("Michael", "Lawson"),
    ("Lindsay", "Ferguson"),
    ("Tobias", "Funke"),
    ("Byron", "Fields"),
    ("George", "Edwards"),
    ("Rachel", "Howell"),
];

pub fn seed_users() -> Vec<User> {
    SEED.iter()
        .zip(1u64..)
        .map(|((first, last), id)| User {
            id,
            email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
            first_name: first.to_string(),
            last_name: last.to_string(),
        })
        .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed_users());
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<UserPage> {
    Json(UserPage {
        page: 1,
        per_page: db.len(),
        total: db.len(),
        total_pages: 1,
        data: db.as_ref().clone(),
    })
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<SingleUser>, (StatusCode, Json<Value>)> {
    db.iter()
        .find(|user| user.id == id)
        .cloned()
        .map(|data| Json(SingleUser { data }))
        .ok_or_else(|| (StatusCode::NOT_FOUND, Json(json!({}))))
}

/// Echoes the posted object. Nothing is stored, so later reads never see it.
async fn create_user(Json(mut input): Json<Map<String, Value>>) -> (StatusCode, Json<Value>) {
    input.entry("id").or_insert_with(|| json!("1"));
    (StatusCode::CREATED, Json(Value::Object(input)))
}
