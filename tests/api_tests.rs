//! API integration tests
//!
//! These run against a live server with a seeded admin account
//! (admin@vidrack.local / admin). Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated client
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@vidrack.local",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Seed a genre, a movie with the given stock/rate, and a customer;
/// returns (movie_id, customer_id)
async fn seed_movie_and_customer(
    client: &Client,
    token: &str,
    stock: i32,
    rate: f64,
) -> (i64, i64) {
    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let genre: Value = client
        .post(format!("{}/genres", BASE_URL))
        .bearer_auth(token)
        .json(&json!({ "name": format!("test-genre-{}", suffix) }))
        .send()
        .await
        .expect("Failed to create genre")
        .json()
        .await
        .expect("Failed to parse genre");

    let movie: Value = client
        .post(format!("{}/movies", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "title": format!("test-movie-{}", suffix),
            "genre_id": genre["id"],
            "number_in_stock": stock,
            "daily_rental_rate": rate
        }))
        .send()
        .await
        .expect("Failed to create movie")
        .json()
        .await
        .expect("Failed to parse movie");

    let customer: Value = client
        .post(format!("{}/customers", BASE_URL))
        .bearer_auth(token)
        .json(&json!({ "name": format!("test-customer-{}", suffix) }))
        .send()
        .await
        .expect("Failed to create customer")
        .json()
        .await
        .expect("Failed to parse customer");

    (
        movie["id"].as_i64().expect("movie id"),
        customer["id"].as_i64().expect("customer id"),
    )
}

async fn get_movie_stock(client: &Client, movie_id: i64) -> i64 {
    let movie: Value = client
        .get(format!("{}/movies/{}", BASE_URL, movie_id))
        .send()
        .await
        .expect("Failed to get movie")
        .json()
        .await
        .expect("Failed to parse movie");
    movie["number_in_stock"].as_i64().expect("stock")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@vidrack.local",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/rentals", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_rental_lifecycle() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (movie_id, customer_id) = seed_movie_and_customer(&client, &token, 1, 2.0).await;

    // Rent the only copy
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "customer_id": customer_id, "movie_id": movie_id }))
        .send()
        .await
        .expect("Failed to create rental");
    assert_eq!(response.status(), 201);

    let rental: Value = response.json().await.expect("Failed to parse rental");
    assert_eq!(rental["movie"]["id"].as_i64(), Some(movie_id));
    assert_eq!(rental["customer"]["id"].as_i64(), Some(customer_id));
    assert!(rental["date_returned"].is_null());
    assert!(rental["rental_fee"].is_null());

    assert_eq!(get_movie_stock(&client, movie_id).await, 0);

    // The shelf is now empty
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "customer_id": customer_id, "movie_id": movie_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    assert_eq!(get_movie_stock(&client, movie_id).await, 0);

    // Return it: same calendar day, so no fee is owed
    let response = client
        .post(format!("{}/returns", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "customer_id": customer_id, "movie_id": movie_id }))
        .send()
        .await
        .expect("Failed to finalize return");
    assert_eq!(response.status(), 200);

    let returned: Value = response.json().await.expect("Failed to parse rental");
    assert!(!returned["date_returned"].is_null());
    assert_eq!(returned["rental_fee"].as_f64(), Some(0.0));

    assert_eq!(get_movie_stock(&client, movie_id).await, 1);

    // A second return of the same rental must not compute a second fee
    let response = client
        .post(format!("{}/returns", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "customer_id": customer_id, "movie_id": movie_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    assert_eq!(get_movie_stock(&client, movie_id).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_return_without_rental() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (movie_id, customer_id) = seed_movie_and_customer(&client, &token, 3, 1.0).await;

    let response = client
        .post(format!("{}/returns", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "customer_id": customer_id, "movie_id": movie_id }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    assert_eq!(get_movie_stock(&client, movie_id).await, 3);
}

#[tokio::test]
#[ignore]
async fn test_rent_unknown_movie() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (_movie_id, customer_id) = seed_movie_and_customer(&client, &token, 1, 1.0).await;

    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "customer_id": customer_id, "movie_id": 999999999 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_movie_with_unknown_genre() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/movies", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "title": "orphan",
            "genre_id": 999999999,
            "daily_rental_rate": 1.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_user_email() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/users", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Admin Again",
            "email": "admin@vidrack.local",
            "password": "secret"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}
