//! Public informational endpoints and the OpenAPI document

use crate::state::AppState;
use axum::{Json, extract::State, response::Redirect};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
pub struct HelloWorldResponse {
    pub message: &'static str,
}

/// GET /hello
pub async fn hello_world() -> Json<HelloWorldResponse> {
    Json(HelloWorldResponse {
        message: "Hello, world!",
    })
}

/// GET /
pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/openapi.json")
}

/// GET /openapi.json
pub async fn openapi(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(&state.config.base_url))
}

fn server_description(base_url: &str) -> &'static str {
    if base_url.contains("run.app") {
        "Production server"
    } else {
        "Local server"
    }
}

fn openapi_document(base_url: &str) -> Value {
    let bearer = json!([{ "bearerAuth": [] }]);
    let item = json!({ "$ref": "#/components/schemas/Item" });
    let item_body = json!({ "application/json": { "schema": item } });
    let item_request = json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ItemRequest" } } }
    });
    let id_param = json!([{
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    }]);

    let hello = json!({
        "get": { "summary": "Hello world", "responses": { "200": { "description": "Greeting" } } }
    });

    let items = json!({
        "get": {
            "summary": "List items",
            "security": bearer,
            "responses": { "200": {
                "description": "All items",
                "content": { "application/json": { "schema": { "type": "array", "items": item } } }
            } }
        },
        "post": {
            "summary": "Create item",
            "security": bearer,
            "requestBody": item_request,
            "responses": { "201": { "description": "Created item", "content": item_body } }
        }
    });

    let item_by_id = json!({
        "put": {
            "summary": "Rename item",
            "security": bearer,
            "parameters": id_param,
            "requestBody": item_request,
            "responses": {
                "200": { "description": "Renamed item", "content": item_body },
                "404": { "description": "Item not found" }
            }
        },
        "delete": {
            "summary": "Delete item",
            "security": bearer,
            "parameters": id_param,
            "responses": { "200": { "description": "Deleted (also when absent)" } }
        }
    });

    let users = json!({
        "get": {
            "summary": "Fetch the caller's document",
            "security": bearer,
            "responses": { "200": { "description": "Document, or a status=error body when none is stored" } }
        },
        "post": {
            "summary": "Replace the caller's document",
            "security": bearer,
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": { "type": "object" } } }
            },
            "responses": { "200": { "description": "Stored document" } }
        }
    });

    let schemas = json!({
        "Item": {
            "type": "object",
            "required": ["id", "name"],
            "properties": {
                "id": { "type": "integer", "format": "int64" },
                "name": { "type": "string" }
            }
        },
        "ItemRequest": {
            "type": "object",
            "required": ["name"],
            "properties": { "name": { "type": "string" } }
        }
    });

    json!({
        "openapi": "3.1.0",
        "info": { "title": "Shop API", "version": env!("CARGO_PKG_VERSION") },
        "servers": [{ "url": base_url, "description": server_description(base_url) }],
        "paths": {
            "/hello": hello,
            "/items": items,
            "/items/{id}": item_by_id,
            "/users": users
        },
        "components": {
            "securitySchemes": { "bearerAuth": { "type": "http", "scheme": "bearer" } },
            "schemas": schemas
        }
    })
}
