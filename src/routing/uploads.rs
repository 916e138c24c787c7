use crate::{
    application::ApplicationState,
    auth::User,
    dto::output,
    error::Error,
    service::uploads_service::UploadsService,
};
use axum::{
    extract::{Multipart, Path, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

const FILE_FIELD: &str = "file";

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/upload", post(upload_file))
        .route("/uploads/:name", get(get_upload))
}

async fn upload_file(
    State(uploads_service): State<Arc<dyn UploadsService>>,
    Extension(user): Extension<User>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<output::Upload>), Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| Error::Validation("malformed multipart body"))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content = field
            .bytes()
            .await
            .map_err(|_| Error::Validation("malformed multipart body"))?;
        let upload = uploads_service.save(&user, content.to_vec()).await?;

        return Ok((StatusCode::CREATED, Json(upload)));
    }

    Err(Error::Validation("missing file field"))
}

async fn get_upload(
    State(uploads_service): State<Arc<dyn UploadsService>>,
    Extension(user): Extension<User>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (content_type, content) = uploads_service.find(&user, &name).await?;

    Ok(([(CONTENT_TYPE, content_type)], content))
}

#[cfg(test)]
mod test {
    use super::super::test::*;
    use crate::dto::output;
    use axum::{
        body::Body,
        http::{
            header::{AUTHORIZATION, CONTENT_TYPE},
            Method, Request, StatusCode,
        },
    };
    use tower::ServiceExt;

    const BOUNDARY: &str = "receipt-rocket-boundary";

    fn multipart_request(field_name: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"slip.png\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/api/upload")
            .header(AUTHORIZATION, bearer(&["sales"]))
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn upload_file_field() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .uploads_service
            .expect_save()
            .withf(|_, content| content.as_slice() == b"\x89PNG\r\n\x1a\nrest")
            .times(1)
            .returning(|_, _| {
                Ok(output::Upload {
                    path: "/uploads/slip.png".to_string(),
                })
            });
        let router = mocks.router();

        let response = router
            .oneshot(multipart_request("file", b"\x89PNG\r\n\x1a\nrest"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_string(response).await,
            r#"{"path":"/uploads/slip.png"}"#
        );
    }

    #[tokio::test]
    async fn upload_missing_file_field() {
        let mut mocks = Mocks::with_live_session();
        mocks.uploads_service.expect_save().never();
        let router = mocks.router();

        let response = router
            .oneshot(multipart_request("attachment", b"content"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_upload_content_type() {
        let mut mocks = Mocks::with_live_session();
        mocks
            .uploads_service
            .expect_find()
            .withf(|_, name| name.to_string() == "slip.pdf")
            .returning(|_, _| Ok(("application/pdf", b"%PDF-1.4".to_vec())));
        let router = mocks.router();

        let authorization = bearer(&["auditor"]);
        let response = router
            .oneshot(request(Method::GET, "/uploads/slip.pdf", Some(&authorization)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/pdf");
        assert_eq!(body_string(response).await, "%PDF-1.4");
    }
}
