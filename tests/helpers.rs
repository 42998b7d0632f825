// Shared test helpers for mock redirect servers.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a GET handler answering `status` with a `Location` header.
#[allow(dead_code)] // Used by other test files
pub async fn mount_redirect(server: &MockServer, from: &str, status: u16, location: &str) {
    Mock::given(method("GET"))
        .and(path(from))
        .respond_with(ResponseTemplate::new(status).insert_header("Location", location))
        .mount(server)
        .await;
}

/// Mounts a GET handler answering `status` with a small body.
#[allow(dead_code)] // Used by other test files
pub async fn mount_final(server: &MockServer, at: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_string("OK"))
        .mount(server)
        .await;
}
