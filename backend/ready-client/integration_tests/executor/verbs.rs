use crate::helpers::{TEST_API_KEY, client_for};

use ready_client::executor::{DELETE_FAILED_MESSAGE, POST_FAILED_MESSAGE, PUT_FAILED_MESSAGE};
use ready_client::{CancellationToken, ErrorKind, QueryParams};

use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize)]
struct Note {
    text: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Created {
    id: i64,
}

#[tokio::test]
async fn given_json_body_when_posting_then_body_and_content_type_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ta/rest/v1/notes"))
        .and(header("content-type", "application/json"))
        .and(header("api-key", TEST_API_KEY))
        .and(body_json(json!({"text": "hello"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ID": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let note = Note {
        text: "hello".to_string(),
    };

    let created: Created = client
        .executor()
        .post("v1/notes", &note, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(created, Created { id: 9 });
}

/// **VALUE**: Verifies an empty success body reads as `None`.
///
/// **WHY THIS MATTERS**: Some endpoints acknowledge with 200 and nothing
/// else. Callers asking for `Option<T>` must get absence, not an error.
///
/// **BUG THIS CATCHES**: Would catch the blank body being fed to the parser.
#[tokio::test]
async fn given_empty_success_body_when_decoding_option_then_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ta/rest/v1/ping"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let result: Option<Created> = client
        .executor()
        .post_empty("v1/ping", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn given_leading_slash_when_resolving_then_base_path_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ta/rest/v1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let status: Created = client
        .executor()
        .get("/v1/status", &QueryParams::new(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(status.id, 1);
}

#[tokio::test]
async fn given_put_and_delete_when_issued_then_bodies_and_verbs_match() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ta/rest/v1/notes/9"))
        .and(body_json(json!({"text": "edited"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/ta/rest/v1/notes/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ta/rest/v1/notes/9/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let executor = client.executor();
    let cancel = CancellationToken::new();
    let edited = Note {
        text: "edited".to_string(),
    };

    executor.put("v1/notes/9", &edited, &cancel).await.unwrap();
    executor.delete("v1/notes/9", &cancel).await.unwrap();
    executor
        .post_empty_discard("v1/notes/9/archive", &cancel)
        .await
        .unwrap();
}

/// **VALUE**: Verifies each verb supplies its own fallback message.
///
/// **WHY THIS MATTERS**: For statuses outside the table the fallback is the
/// only hint which kind of call failed.
///
/// **BUG THIS CATCHES**: Would catch every verb reporting the GET fallback.
#[tokio::test]
async fn given_untabled_failures_when_each_verb_fails_then_verb_specific_fallback() {
    let server = MockServer::start().await;
    Mock::given(path("/ta/rest/v1/notes/9"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let executor = client.executor();
    let cancel = CancellationToken::new();
    let note = Note {
        text: "x".to_string(),
    };

    let post = executor
        .post_discard("v1/notes/9", &note, &cancel)
        .await
        .unwrap_err();
    let put = executor.put_empty("v1/notes/9", &cancel).await.unwrap_err();
    let delete = executor.delete("v1/notes/9", &cancel).await.unwrap_err();

    assert_eq!(post.kind(), ErrorKind::Operation);
    assert_eq!(post.message(), POST_FAILED_MESSAGE);
    assert_eq!(put.message(), PUT_FAILED_MESSAGE);
    assert_eq!(delete.message(), DELETE_FAILED_MESSAGE);
}
