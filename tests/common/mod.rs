use rck_sdk::Client;
use wiremock::MockServer;

/// Builds a client pointed at a wiremock server.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder("test-api-key")
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Returns the JSON bodies of every request the server received so far.
pub async fn received_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("request body should be JSON"))
        .collect()
}
