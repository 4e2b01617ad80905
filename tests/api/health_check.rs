use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    // arrange
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // act
    let response = client
        .get(format!("{}/health_check", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn unknown_routes_get_a_json_error_envelope() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = reqwest::get(format!("{}/functions/v1/nowhere", app.address))
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Not Found");
}
