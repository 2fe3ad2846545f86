//! Gallery and login endpoints against a wiremock server, through the
//! reqwest adapter.

use std::sync::Arc;

use folio::adapters::ReqwestHttpClient;
use folio::auth::SessionClient;
use folio::error::{AuthError, ErrorCategory, FolioError, NetworkError};
use folio::gallery::{GalleryClient, ImageId, UploadFile};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gallery(server: &MockServer) -> GalleryClient {
    GalleryClient::new(Arc::new(ReqwestHttpClient::new()), server.uri())
}

#[tokio::test]
async fn test_list_images_of_folder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/images"))
        .and(query_param("folder", "carbuild"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            "/api/image/4",
            "/api/image/2"
        ])))
        .mount(&server)
        .await;

    let images = gallery(&server).list_images("carbuild").await.unwrap();
    assert_eq!(images, vec!["/api/image/4", "/api/image/2"]);
}

#[tokio::test]
async fn test_list_images_null_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/images"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let err = gallery(&server).list_images("hero").await.unwrap_err();
    assert!(matches!(
        err,
        FolioError::Network(NetworkError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_list_images_server_error_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/images"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Database error\n"))
        .mount(&server)
        .await;

    let err = gallery(&server).list_images("hero").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Server);
    match err {
        FolioError::Network(NetworkError::HttpStatus { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/gallery/upload"))
        .and(header("Authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uploaded": 2,
            "images": [
                {"id": 10, "filename": "a.jpg", "folder": "gallery", "url": "/api/image/10"},
                {"id": 11, "filename": "b.png", "folder": "gallery", "url": "/api/image/11"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let files = vec![
        UploadFile::new("a.jpg", b"jpeg".to_vec()),
        UploadFile::new("b.png", b"png".to_vec()),
    ];
    let summary = gallery(&server)
        .upload_images("gallery", files, "admin-token")
        .await
        .unwrap();
    assert_eq!(summary.uploaded, 2);
    assert_eq!(summary.images[1].id, 11);
}

#[tokio::test]
async fn test_delete_by_url_hits_gallery_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/gallery/42"))
        .and(header("Authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let id = gallery(&server)
        .delete_image_by_url("/api/image/42", "admin-token")
        .await
        .unwrap();
    assert_eq!(id, ImageId::new(42).unwrap());
}

#[tokio::test]
async fn test_delete_unauthorized_is_auth_category() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = gallery(&server)
        .delete_image(ImageId::new(1).unwrap(), "stale")
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Auth);
}

#[tokio::test]
async fn test_login_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(serde_json::json!({
            "email": "owner@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "jwt",
            "user": {
                "id": 1,
                "email": "owner@example.com",
                "username": "owner",
                "is_admin": true,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let client = SessionClient::new(Arc::new(ReqwestHttpClient::new()), server.uri());
    let session = client.login("owner@example.com", "hunter2").await.unwrap();
    assert_eq!(session.token, "jwt");
    assert!(session.is_admin());

    let err = client.login("owner@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, FolioError::Auth(AuthError::InvalidCredentials)));
}
