//! End-to-end command pipelines against a mocked GitHub API: export writes
//! the expected CSV, and the CSV drives follow/unfollow calls in file order.

use gh_follower::cli::commands;
use gh_follower::{Credentials, FollowClient};
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> FollowClient {
    FollowClient::with_base_url(Credentials::new("octocat", "mock-token"), server.uri())
        .expect("client builds")
}

async fn mount_following_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user/following"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "a", "html_url": "u/a" },
            { "login": "b", "html_url": "u/b" },
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/following"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn export_following_writes_header_and_rows() {
    let server = MockServer::start().await;
    mount_following_pages(&server).await;

    let dir = tempdir().unwrap();
    let out = dir.path().join("out.csv");
    commands::export_following(&test_client(&server), &out)
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(contents, "Username,URL\na,u/a\nb,u/b\n");
}

#[tokio::test]
async fn follow_from_csv_puts_each_row_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/following/a"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/user/following/b"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    std::fs::write(&csv_path, "Username,URL\na,u/a\nb,u/b\n").unwrap();

    commands::follow_from_csv(&test_client(&server), &csv_path, 0)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let put_paths: Vec<_> = requests
        .iter()
        .filter(|r| r.method.to_string() == "PUT")
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(put_paths, ["/user/following/a", "/user/following/b"]);
}

#[tokio::test]
async fn unfollow_from_csv_issues_deletes() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/following/a"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    std::fs::write(&csv_path, "Username,URL\na,u/a\n").unwrap();

    commands::unfollow_from_csv(&test_client(&server), &csv_path, 0)
        .await
        .unwrap();
}

#[tokio::test]
async fn follow_from_csv_succeeds_even_when_every_call_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    std::fs::write(&csv_path, "Username,URL\na,u/a\nb,u/b\n").unwrap();

    // Per-account failures are reported in the summary, not escalated.
    commands::follow_from_csv(&test_client(&server), &csv_path, 0)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests.iter().filter(|r| r.method.to_string() == "PUT").count(),
        2
    );
}

#[tokio::test]
async fn follow_org_members_fetches_then_follows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "m1", "html_url": "u/m1" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/user/following/m1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    commands::follow_org(&test_client(&server), "acme", 0)
        .await
        .unwrap();
}

#[tokio::test]
async fn export_org_members_writes_member_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "m1", "html_url": "u/m1" },
            { "login": "m2", "html_url": "u/m2" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let out = dir.path().join("members.csv");
    commands::export_org_members(&test_client(&server), "acme", &out)
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(contents, "Username,URL\nm1,u/m1\nm2,u/m2\n");
}

#[tokio::test]
async fn unfollow_org_members_fetches_then_unfollows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "m1", "html_url": "u/m1" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/user/following/m1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    commands::unfollow_org(&test_client(&server), "acme", 0)
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_csv_file_is_an_uncaught_failure() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();

    let result =
        commands::follow_from_csv(&test_client(&server), &dir.path().join("absent.csv"), 0).await;

    assert!(result.is_err());
}
