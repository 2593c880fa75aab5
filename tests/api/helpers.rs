use std::time::Duration;

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use wiremock::MockServer;

use fishbowl_subscriber::{
    configuration::get_config,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    }
});

pub struct TestApp {
    pub addr: String,
    pub fishbowl_server: MockServer,
}

impl TestApp {
    pub async fn post_subscription(&self, body: &Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/subscriptions", self.addr))
            .json(body)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send the request")
    }

    pub async fn post_raw_subscription(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/subscriptions", self.addr))
            .header("Content-Type", "application/json")
            .body(body)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send the request")
    }
}

pub fn form_values() -> Value {
    json!({
        "firstName": "Ursula",
        "lastName": "Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "phoneNumber": "5555550100",
        "zipCode": "97201",
        "birthdayMonth": 10,
        "birthdayDay": 21,
        "birthdayYear": 1929,
        "receiveSms": true,
        "storeUuid": "7f1c2d4e-0000-4000-8000-000000000001",
        "joinLoyaltyProgram": true,
        "tag": null,
        "campaignUuid": null,
        "source": "website",
        "brandUuid": "7f1c2d4e-0000-4000-8000-000000000002",
        "listUuid": "7f1c2d4e-0000-4000-8000-000000000003"
    })
}

pub fn api_body() -> Value {
    json!({
        "success": true,
        "message": "Subscription created",
        "data": {
            "uuid": "7f1c2d4e-0000-4000-8000-000000000004",
            "type": "subscription",
            "attributes": { "emailAddress": "ursula_le_guin@gmail.com", "smsOptIn": true },
            "meta": { "authors": { "creator": null, "modifier": null } },
            "relationships": null
        },
        "errors": null,
        "error_code": null,
        "cache_hit": false
    })
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);
    let fishbowl_server = MockServer::start().await;
    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_config().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        // Talk to the mock instead of the real API
        c.fishbowl.base_url = fishbowl_server.uri();
        c
    };
    let app = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let addr = format!("http://{}:{}", app.addr(), app.port());
    let _ = tokio::spawn(app.run_forever());
    TestApp {
        addr,
        fishbowl_server,
    }
}
