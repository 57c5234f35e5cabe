mod common;

use axum::body::Bytes;
use axum::http::{StatusCode, header};
use axum_test::TestServer;

use common::{RecordingBackend, RecordingRenderer, app, create_test_state};
use feedback_controller::clients::PageTemplate;
use feedback_controller::mapper::DEFAULT_HOMEPAGE;

#[tokio::test]
async fn test_get_feedback_renders_form() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::ok();
    let server = TestServer::new(app(create_test_state(renderer.clone(), backend))).unwrap();

    let response = server
        .get("/feedback")
        .add_header(header::REFERER, "https://cy.ons.gov.uk/economy")
        .await;

    response.assert_status_ok();

    let calls = renderer.calls();
    assert_eq!(calls.len(), 1);
    let (page, template) = &calls[0];
    assert_eq!(*template, PageTemplate::Feedback);
    assert_eq!(page.form.url, "https://cy.ons.gov.uk/economy");
    assert!(page.errors.is_empty());
}

#[tokio::test]
async fn test_get_feedback_maps_service_description() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::ok();
    let server = TestServer::new(app(create_test_state(renderer.clone(), backend))).unwrap();

    server
        .get("/feedback")
        .add_query_param("service", "dev")
        .await
        .assert_status_ok();

    let calls = renderer.calls();
    assert_eq!(calls[0].0.service_description, "ONS developer");
}

#[tokio::test]
async fn test_add_feedback_submits_once_and_redirects() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::ok();
    let server =
        TestServer::new(app(create_test_state(renderer.clone(), backend.clone()))).unwrap();

    let response = server
        .post("/feedback")
        .form(&[("description", "testing1234"), ("type", "test")])
        .await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), DEFAULT_HOMEPAGE);

    // The renderer is not called; the backend is called exactly once.
    assert_eq!(renderer.calls().len(), 0);
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].feedback, "testing1234");
    assert_eq!(calls[0].ons_url, "Whole site");
    assert!(calls[0].is_general_feedback);
}

#[tokio::test]
async fn test_add_feedback_specific_page_redirects_to_thanks() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::ok();
    let server =
        TestServer::new(app(create_test_state(renderer.clone(), backend.clone()))).unwrap();

    let response = server
        .post("/feedback")
        .form(&[
            ("description", "broken chart"),
            ("type", "A specific page"),
            ("url", "https://cy.ons.gov.uk/path"),
        ])
        .await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location"),
        "/feedback/thanks?returnTo=https%3A%2F%2Fcy.ons.gov.uk%2Fpath"
    );

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].ons_url, "https://cy.ons.gov.uk/path");
    assert!(!calls[0].is_general_feedback);
}

#[tokio::test]
async fn test_add_feedback_empty_description_rerenders_form() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::ok();
    let server =
        TestServer::new(app(create_test_state(renderer.clone(), backend.clone()))).unwrap();

    let response = server
        .post("/feedback")
        .add_query_param("service", "dev")
        .form(&[("description", "")])
        .await;

    // The form is re-rendered inline with errors; the backend is never invoked.
    response.assert_status_ok();

    let calls = renderer.calls();
    assert_eq!(calls.len(), 1);
    let (page, template) = &calls[0];
    assert_eq!(*template, PageTemplate::Feedback);
    assert!(!page.errors.is_empty());
    assert_eq!(page.service_description, "ONS developer");
    assert_eq!(backend.calls().len(), 0);
}

#[tokio::test]
async fn test_add_feedback_malformed_body_is_bad_request() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::ok();
    let server =
        TestServer::new(app(create_test_state(renderer.clone(), backend.clone()))).unwrap();

    let response = server
        .post("/feedback")
        .content_type("application/x-www-form-urlencoded")
        .bytes(Bytes::from_static(b"description=%zz&type=test"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(renderer.calls().len(), 0);
    assert_eq!(backend.calls().len(), 0);
}

#[tokio::test]
async fn test_add_feedback_backend_client_error_propagates() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::failing(401);
    let server =
        TestServer::new(app(create_test_state(renderer.clone(), backend.clone()))).unwrap();

    let response = server
        .post("/feedback")
        .form(&[("description", "testing1234"), ("type", "test")])
        .await;

    // No redirect on backend failure; the API's status is propagated.
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.maybe_header("location").is_none());
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn test_add_feedback_backend_server_error_propagates() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::failing(500);
    let server = TestServer::new(app(create_test_state(renderer, backend.clone()))).unwrap();

    let response = server
        .post("/feedback")
        .form(&[("description", "testing1234"), ("type", "test")])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.maybe_header("location").is_none());
}

#[tokio::test]
async fn test_post_feedback_thanks_also_accepts_submissions() {
    let renderer = RecordingRenderer::new();
    let backend = RecordingBackend::ok();
    let server = TestServer::new(app(create_test_state(renderer, backend.clone()))).unwrap();

    let response = server
        .post("/feedback/thanks")
        .form(&[("description", "more feedback"), ("type", "Whole site")])
        .await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(backend.calls().len(), 1);
}
