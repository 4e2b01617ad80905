use crate::helpers::spawn_app;
use reqwest::Method;

#[tokio::test]
async fn preflight_requests_get_an_empty_200_with_cors_headers() {
    // arrange
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let test_cases = vec![
        ("/send-enquiry", "", "the enquiry endpoint"),
        ("/send-enquiry", "{not json", "a garbage body"),
        ("/somewhere/else", "", "an unrelated path"),
    ];

    for (path, body, description) in test_cases {
        // act
        let response = client
            .request(Method::OPTIONS, format!("{}{}", app.address, path))
            .header("Origin", "https://kapahiproperties.example")
            .header("Access-Control-Request-Method", "POST")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.");

        // assert
        assert_eq!(
            200,
            response.status().as_u16(),
            "The preflight did not return 200 OK for {}.",
            description
        );
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(
            headers["access-control-allow-headers"],
            "authorization, x-client-info, apikey, content-type"
        );
        assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
        let body = response.bytes().await.unwrap();
        assert!(body.is_empty(), "The preflight for {} had a body.", description);
    }
    assert!(app.sent_emails().is_empty());
}
