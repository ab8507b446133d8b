use serde_json::{json, Value};
use snp_lens::config::AnalysisEnv;
use snp_lens::server::{router, ANALYZE_PATH};

/// Start the router on an ephemeral port and return its base URL
async fn spawn_server(env: AnalysisEnv, max_body_bytes: usize) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(env, max_body_bytes))
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_options_preflight() {
    let base = spawn_server(AnalysisEnv::default(), 1024).await;
    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let base = spawn_server(AnalysisEnv::default(), 1024).await;
    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn test_post_scores_batch() {
    let base = spawn_server(AnalysisEnv::new(true), 1024 * 1024).await;
    let response = reqwest::Client::new()
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&json!({"snps": [
            {"rsId": "rs1", "chromosome": 1, "position": 500, "genotype": "AA"},
            {"rsId": "rs10", "chromosome": "10", "position": 999, "genotype": "GT"},
        ]}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["metadata"], json!({"total_variants": 2, "api_configured": true}));
    assert_eq!(body["results"][0]["predictions"]["pathogenicity"], json!(0.46));
    assert_eq!(body["results"][1]["chromosome"], json!("10"));
    assert_eq!(body["results"][1]["predictions"]["pathogenicity"], json!(0.899));
    assert_eq!(
        body["results"][1]["predictions"]["effect"],
        json!("High impact: Likely pathogenic variant affecting protein function")
    );
}

#[tokio::test]
async fn test_post_missing_field_is_500() {
    let base = spawn_server(AnalysisEnv::default(), 1024).await;
    let response = reqwest::Client::new()
        .post(format!("{}/", base))
        .body(r#"{"snps":[{"chromosome":1,"position":500,"genotype":"AA"}]}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("rsId"));
}

#[tokio::test]
async fn test_oversized_body_is_500() {
    let base = spawn_server(AnalysisEnv::default(), 16).await;
    let response = reqwest::Client::new()
        .post(format!("{}/", base))
        .body(r#"{"snps":[{"rsId":"rs1","chromosome":1,"position":500,"genotype":"AA"}]}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_health() {
    let base = spawn_server(AnalysisEnv::default(), 1024).await;
    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}
