#![doc = include_str!("../README.md")]

use keyward_core::ClientSettings;

/// Helper for testing the Keyward identity client using wiremock.
///
/// Registers the given mocks and returns settings whose base URL points at
/// the mock server (the identity mount path keeps its default, so mocks
/// match on `/api/auth/...` paths).
///
/// Warning: when using `Mock::expect` ensure the server is not dropped
/// before the test completes.
pub async fn start_identity_mock(
    mocks: Vec<wiremock::Mock>,
) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        base_url: server.uri(),
        user_agent: "test-agent".to_string(),
        ..Default::default()
    };

    (server, settings)
}
