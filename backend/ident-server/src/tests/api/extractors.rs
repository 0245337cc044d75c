use crate::AuthorizationHeader;

use axum::extract::FromRequestParts;
use http::Request;

async fn extract(request: Request<()>) -> AuthorizationHeader {
    let (mut parts, _) = request.into_parts();
    AuthorizationHeader::from_request_parts(&mut parts, &())
        .await
        .unwrap()
}

#[tokio::test]
async fn given_no_header_when_extracting_then_none() {
    let request = Request::builder().body(()).unwrap();

    let header = extract(request).await;

    assert_eq!(header.as_deref(), None);
}

#[tokio::test]
async fn given_bearer_header_when_extracting_then_raw_value_is_kept() {
    let request = Request::builder()
        .header("Authorization", "Bearer abc.def.ghi")
        .body(())
        .unwrap();

    let header = extract(request).await;

    assert_eq!(header.as_deref(), Some("Bearer abc.def.ghi"));
}

#[tokio::test]
async fn given_scheme_only_header_when_extracting_then_value_is_passed_through() {
    let request = Request::builder()
        .header("Authorization", "Bearer")
        .body(())
        .unwrap();

    let header = extract(request).await;

    assert_eq!(header.as_deref(), Some("Bearer"));
}
