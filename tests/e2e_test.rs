//! End-to-end tests against a running supplement-compliance server.
//!
//! Requires the server (and its PostgreSQL database) to be up; point
//! BASE_URL at it (defaults to http://localhost:3000).

use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore] // Run with: cargo test --test e2e_test -- --ignored
async fn test_validate_flow_over_http() {
    let client = reqwest::Client::new();
    let base = base_url();

    // Health first: fail fast if the server is not up
    let health = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("server unreachable");
    assert!(health.status().is_success(), "server not healthy");

    // Seed one approved and one banned record
    for (name, status, notes) in [
        ("e2e whey protein", "approved", Value::Null),
        ("e2e ephedrine", "banned", json!("Banned substance")),
    ] {
        let resp = client
            .post(format!("{base}/api/v1/compliance"))
            .json(&json!({
                "ingredient_name": name,
                "status": status,
                "authority": "E2E",
                "notes": notes,
            }))
            .send()
            .await
            .expect("upsert request failed");
        assert!(resp.status().is_success(), "upsert rejected for {name}");
    }

    // Explicit ingredient list: one pass, one violation, one unknown
    let body: Value = client
        .post(format!("{base}/api/v1/validate"))
        .json(&json!({
            "ingredients": ["e2e whey protein", "e2e ephedrine", "e2e mystery"],
            "authority": "E2E",
        }))
        .send()
        .await
        .expect("validate request failed")
        .json()
        .await
        .expect("invalid validate response");

    assert_eq!(body["valid"], json!(false));
    let violations = body["violations"].as_array().expect("violations array");
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0]["ingredient"], json!("e2e ephedrine"));
    assert!(violations[0]["reason"]
        .as_str()
        .unwrap()
        .contains("Banned by E2E"));
    assert_eq!(violations[1]["status"], json!("unknown"));

    // Free-text input runs through the extractor
    let body: Value = client
        .post(format!("{base}/api/v1/validate"))
        .json(&json!({
            "text": "Try WHEY PROTEIN and a little caffeine after workouts.",
        }))
        .send()
        .await
        .expect("validate request failed")
        .json()
        .await
        .expect("invalid validate response");

    let checked = body["ingredients"].as_array().expect("ingredients array");
    assert!(checked.contains(&json!("Whey Protein")));
    assert!(checked.contains(&json!("Caffeine")));

    // Record listing is severity-ordered and echoes the normalized key
    let body: Value = client
        .get(format!("{base}/api/v1/ingredients/e2e ephedrine"))
        .send()
        .await
        .expect("ingredient request failed")
        .json()
        .await
        .expect("invalid ingredient response");

    assert_eq!(body["normalized"], json!("e2e ephedrine"));
    let records = body["records"].as_array().expect("records array");
    assert!(!records.is_empty());

    println!("✅ All e2e tests passed!");
}

#[tokio::test]
#[ignore]
async fn test_validate_rejects_empty_request() {
    let client = reqwest::Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{base}/api/v1/validate"))
        .json(&json!({}))
        .send()
        .await
        .expect("validate request failed");

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}
