#![allow(dead_code)]

//! Shared test fixtures for the SDK integration tests.
//!
//! Provides `spawn_fixture_server()` which serves canned API responses from
//! an in-process axum server bound to an ephemeral local port.

use axum::extract::{Path, RawQuery};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Start the fixture server and return its origin, e.g. `http://127.0.0.1:43121`.
///
/// The server runs on the test's runtime and stops when the test ends.
pub async fn spawn_fixture_server() -> String {
    let app = Router::new()
        .route("/v1/cards", get(cards))
        .route("/v1/sets", get(sets))
        .route("/v1/sets/{code}/booster", get(booster))
        .route("/status/not-found", get(not_found_with_json))
        .route("/status/server-error", get(server_error))
        .route("/body/empty", get(empty_body))
        .route("/body/not-json", get(not_json))
        .route("/body/array", get(json_array))
        .route("/body/object", get(json_object))
        .route("/echo/headers", get(echo_headers))
        .route("/images/card.png", get(png_image))
        .route("/images/broken.png", get(broken_image))
        .route("/images/missing.png", get(missing_image));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// An origin that refuses connections.
pub async fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn lightning_bolt() -> Value {
    json!({
        "name": "Lightning Bolt",
        "manaCost": "{R}",
        "cmc": 1,
        "colors": ["Red"],
        "colorIdentity": ["R"],
        "type": "Instant",
        "types": ["Instant"],
        "rarity": "Common",
        "set": "LEA",
        "setName": "Limited Edition Alpha",
        "text": "Lightning Bolt deals 3 damage to any target.",
        "artist": "Christopher Rush",
        "number": "161",
        "layout": "normal",
        "multiverseid": 209,
        "imageUrl": "http://gatherer.wizards.com/Handlers/Image.ashx?multiverseid=209&type=card",
        "rulings": [
            {"date": "2004-10-04", "text": "It can target a creature or player."}
        ],
        "foreignNames": [
            {"name": "Blitzschlag", "language": "German", "multiverseid": 148411}
        ],
        "printings": ["LEA", "LEB", "2ED"],
        "originalText": "Lightning Bolt does 3 damage to one target.",
        "originalType": "Instant",
        "legalities": [
            {"format": "Commander", "legality": "Legal"},
            {"format": "Standard", "legality": "Banned"}
        ],
        "id": "c9e7bd6c-4a0c-5dcd-8b6e-6d1a2a6b7c11"
    })
}

pub fn ktk_set() -> Value {
    json!({
        "code": "KTK",
        "name": "Khans of Tarkir",
        "type": "expansion",
        "border": "black",
        "releaseDate": "2014-09-26",
        "block": "Khans of Tarkir",
        "magicCardsInfoCode": "ktk",
        "booster": [
            ["rare", "mythic rare"],
            "uncommon",
            "common"
        ]
    })
}

async fn cards(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({
        "cards": [lightning_bolt()],
        "query": query.unwrap_or_default()
    }))
}

async fn sets(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({
        "sets": [ktk_set()],
        "query": query.unwrap_or_default()
    }))
}

async fn booster(Path(code): Path<String>) -> impl IntoResponse {
    if code == "KTK" {
        let mut second = lightning_bolt();
        second["name"] = json!("Mardu Hordechief");
        (
            StatusCode::OK,
            Json(json!({"cards": [lightning_bolt(), second]})),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "error": "Not Found"})),
        )
    }
}

async fn not_found_with_json() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"cards": [lightning_bolt()]})))
}

async fn server_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn empty_body() -> StatusCode {
    StatusCode::OK
}

async fn not_json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "definitely not json")
}

async fn json_array() -> Json<Value> {
    Json(json!([1, 2, 3]))
}

async fn json_object() -> Json<Value> {
    Json(json!({"hello": "world", "n": 3}))
}

/// Every request header as a `name -> value` object. Non-UTF-8 values are skipped.
async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let echoed: serde_json::Map<String, Value> = headers
        .iter()
        .filter_map(|(name, value)| {
            let value = value.to_str().ok()?;
            Some((name.as_str().to_string(), Value::String(value.to_string())))
        })
        .collect();
    Json(Value::Object(echoed))
}

async fn png_image() -> impl IntoResponse {
    let img = image::RgbImage::from_pixel(3, 2, image::Rgb([200, 30, 30]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    ([(header::CONTENT_TYPE, "image/png")], buf.into_inner())
}

async fn broken_image() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], "these bytes are not a png")
}

async fn missing_image() -> StatusCode {
    StatusCode::NOT_FOUND
}
