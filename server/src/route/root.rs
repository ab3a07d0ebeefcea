use crate::handler::AppModule;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub trait RootRouter {
    fn route_root(self) -> Self;
}

impl RootRouter for Router<AppModule> {
    fn route_root(self) -> Self {
        self.route("/", get(welcome))
    }
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to Library API" }))
}
