#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};
use std::time::Duration;

pub const PERSON_PATH: &str = "/api/people/1/";
pub const PLANET_PATH: &str = "/api/planets/1/";

pub fn film_path(index: usize) -> String {
    format!("/api/films/{}/", index + 1)
}

pub fn film_body(index: usize) -> Value {
    match index {
        0 => json!({
            "title": "A New Hope",
            "episode_id": 4,
            "director": "George Lucas",
            "producer": "Gary Kurtz, Rick McCallum",
            "release_date": "1977-05-25"
        }),
        1 => json!({
            "title": "The Empire Strikes Back",
            "episode_id": 5,
            "director": "Irvin Kershner",
            "producer": "Gary Kurtz, Rick McCallum",
            "release_date": "1980-05-17"
        }),
        n => json!({
            "title": format!("Film {}", n + 1),
            "director": "Richard Marquand",
            "release_date": "1983-05-25"
        }),
    }
}

pub fn person_body(server: &MockServer, height: &str, film_count: usize) -> Value {
    let films: Vec<String> = (0..film_count).map(|i| server.url(film_path(i))).collect();
    json!({
        "name": "Luke Skywalker",
        "height": height,
        "mass": "77",
        "gender": "male",
        "homeworld": server.url(PLANET_PATH),
        "films": films,
        "url": server.url(PERSON_PATH)
    })
}

pub async fn mount_json<'a>(server: &'a MockServer, path: &str, body: Value) -> Mock<'a> {
    let path = path.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(body);
        })
        .await
}

pub async fn mount_delayed_json<'a>(
    server: &'a MockServer,
    path: &str,
    body: Value,
    delay: Duration,
) -> Mock<'a> {
    let path = path.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("Content-Type", "application/json")
                .delay(delay)
                .json_body(body);
        })
        .await
}

pub async fn mount_status<'a>(server: &'a MockServer, path: &str, status: u16) -> Mock<'a> {
    let path = path.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(status).body("{\"detail\": \"Not found\"}");
        })
        .await
}

/// Mounts Luke, Tatooine and `film_count` films. Returns the person mock.
pub async fn mount_luke<'a>(
    server: &'a MockServer,
    height: &str,
    film_count: usize,
) -> Mock<'a> {
    mount_json(server, PLANET_PATH, json!({"name": "Tatooine", "climate": "arid"})).await;
    for index in 0..film_count {
        mount_json(server, &film_path(index), film_body(index)).await;
    }
    mount_json(server, PERSON_PATH, person_body(server, height, film_count)).await
}

pub fn expected_luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": 172,
        "gender": "male",
        "homeworld": "Tatooine",
        "films": [
            {
                "title": "A New Hope",
                "director": "George Lucas",
                "release_date": "1977-05-25"
            },
            {
                "title": "The Empire Strikes Back",
                "director": "Irvin Kershner",
                "release_date": "1980-05-17"
            }
        ]
    })
}
