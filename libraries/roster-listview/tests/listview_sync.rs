//! End-to-end synchronization scenarios: a real directory client against
//! a mock directory service, driven through the list view.

use roster_core::UserId;
use roster_directory_client::{DirectoryClient, DirectoryConfig};
use roster_listview::{ListView, LoadState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn view_for(server: &MockServer) -> ListView<DirectoryClient> {
    let client = DirectoryClient::new(DirectoryConfig::new(server.uri())).unwrap();
    ListView::new(client)
}

#[tokio::test]
async fn single_row_render_with_action_targets() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Ann", "username": "ann1", "email": "a@x.com"}
        ])))
        .mount(&mock_server)
        .await;

    let mut view = view_for(&mock_server);
    view.activate().await.unwrap();

    let rows = view.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, UserId::new(1));
    assert_eq!(rows[0].name, "Ann");
    assert_eq!(rows[0].username, "ann1");
    assert_eq!(rows[0].email, "a@x.com");
    assert_eq!(rows[0].view_target(), "/viewuser/1");
    assert_eq!(rows[0].edit_target(), "/edituser/1");
}

#[tokio::test]
async fn delete_to_empty_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Ann", "username": "ann1", "email": "a@x.com"}
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/user/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    // After the delete, the directory reports an empty collection
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let mut view = view_for(&mock_server);
    view.activate().await.unwrap();
    assert_eq!(view.rows().len(), 1);

    view.delete(UserId::new(1)).await.unwrap();

    assert_eq!(view.rows().len(), 0);
    assert_eq!(view.state(), LoadState::Loaded);
}

#[tokio::test]
async fn initial_load_failure_shows_zero_rows() {
    let client = DirectoryClient::new(DirectoryConfig::new("http://127.0.0.1:9")).unwrap();
    let mut view = ListView::new(client);

    let result = view.activate().await;

    assert!(result.is_err());
    assert_eq!(view.state(), LoadState::LoadFailed);
    assert!(view.rows().is_empty());
}

#[tokio::test]
async fn server_error_on_reload_keeps_the_previous_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Ann", "username": "ann1", "email": "a@x.com"},
            {"id": 2, "name": "Bob", "username": "bob2", "email": "b@x.com"}
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let mut view = view_for(&mock_server);
    view.activate().await.unwrap();
    assert_eq!(view.rows().len(), 2);

    let result = view.reload().await;

    assert!(result.is_err());
    assert_eq!(view.state(), LoadState::LoadFailed);
    // No partial data corrupted the snapshot
    assert_eq!(view.rows().len(), 2);
}
