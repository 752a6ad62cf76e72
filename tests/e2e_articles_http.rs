use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use tower::util::ServiceExt as _;

mod support;

use support::{JPEG_BYTES, MultipartBody, PNG_BYTES, TestContext, read_json};

fn multipart_request(method: Method, uri: &str, form: MultipartBody) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", "7")
        .header(header::CONTENT_TYPE, MultipartBody::content_type())
        .body(Body::from(form.finish()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// multipart での作成が 201 と記事 JSON を返すことを確認する
#[tokio::test]
async fn e2e_create_article_returns_201_with_image_name() {
    let ctx = TestContext::new();
    let app = ctx.router();

    let form = MultipartBody::new()
        .text("title", "Hello")
        .text("content", "World")
        .text("category_id", "2")
        .file("image", "cover.png", "image/png", PNG_BYTES);
    let resp = app
        .oneshot(multipart_request(Method::POST, "/api/v1/articles", form))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Hello");
    assert_eq!(json["content"], "World");
    assert_eq!(json["category_id"], 2);
    assert_eq!(json["user_id"], 7);
    assert_eq!(json["image"], "1704067200.png");
    assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
    assert!(ctx.blobs.contains("1704067200.png"));
}

/// 空のファイルパートと空のカテゴリは未指定として扱われることを確認する
#[tokio::test]
async fn e2e_create_ignores_empty_file_and_blank_category() {
    let ctx = TestContext::new();
    let form = MultipartBody::new()
        .text("title", "t")
        .text("content", "c")
        .text("category_id", "")
        .file("image", "", "application/octet-stream", b"");
    let resp = ctx
        .router()
        .oneshot(multipart_request(Method::POST, "/api/v1/articles", form))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    assert!(json["image"].is_null());
    assert!(json["category_id"].is_null());
    assert_eq!(ctx.blobs.len(), 0);
}

/// ファイル名の無い image パートはアップロードとして扱わないことを確認する
#[tokio::test]
async fn e2e_create_ignores_text_image_field() {
    let ctx = TestContext::new();
    let form = MultipartBody::new()
        .text("title", "t")
        .text("content", "c")
        .text("image", "not a file");
    let resp = ctx
        .router()
        .oneshot(multipart_request(Method::POST, "/api/v1/articles", form))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    assert!(json["image"].is_null());
    assert_eq!(ctx.blobs.len(), 0);
}

/// 作成・取得・更新・一覧・削除の一連の流れを HTTP 越しに確認する
#[tokio::test]
async fn e2e_full_article_lifecycle() {
    let ctx = TestContext::new();
    let app = ctx.router();

    let create = MultipartBody::new()
        .text("title", "first")
        .text("content", "body")
        .file("image", "a.png", "image/png", PNG_BYTES);
    let resp = app
        .clone()
        .oneshot(multipart_request(Method::POST, "/api/v1/articles", create))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    let first_image = created["image"].as_str().unwrap().to_string();

    let resp = app.clone().oneshot(get("/api/v1/articles/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["title"], "first");

    ctx.clock.advance(5);
    let update = MultipartBody::new()
        .text("title", "second")
        .text("content", "body 2")
        .text("category_id", "1")
        .file("image", "b.jpg", "image/jpeg", JPEG_BYTES);
    let resp = app
        .clone()
        .oneshot(multipart_request(Method::PUT, "/api/v1/articles/1", update))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["title"], "second");
    assert_eq!(updated["category_id"], 1);
    assert_eq!(updated["updated_at"], "2024-01-01T00:00:05Z");
    let second_image = updated["image"].as_str().unwrap().to_string();
    assert!(second_image.ends_with(".jpg"));
    assert!(ctx.blobs.contains(&first_image));

    let resp = app.clone().oneshot(get("/api/v1/articles")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page = read_json(resp).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["per_page"], 10);
    assert_eq!(page["last_page"], 1);
    assert_eq!(page["items"][0]["image"], second_image.as_str());

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/v1/articles/1")
                .header("x-user-id", "7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, serde_json::json!({ "status": "deleted" }));
    assert!(!ctx.blobs.contains(&second_image));
    assert!(ctx.blobs.contains(&first_image));

    let resp = app.oneshot(get("/api/v1/articles/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// 一覧のページ指定が効くことを確認する
#[tokio::test]
async fn e2e_list_second_page() {
    let ctx = TestContext::new();
    for i in 0..11 {
        let form = MultipartBody::new()
            .text("title", &format!("a{i}"))
            .text("content", "c");
        let resp = ctx
            .router()
            .oneshot(multipart_request(Method::POST, "/api/v1/articles", form))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        ctx.clock.advance(1);
    }

    let resp = ctx
        .router()
        .oneshot(get("/api/v1/articles?page=2"))
        .await
        .unwrap();
    let page = read_json(resp).await;
    assert_eq!(page["current_page"], 2);
    assert_eq!(page["last_page"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["items"][0]["title"], "a0");
}

/// 保存した画像が正しい Content-Type で配信されることを確認する
#[tokio::test]
async fn e2e_stored_image_is_served() {
    let ctx = TestContext::new();
    ctx.blobs.seed("1704067200.png", PNG_BYTES);

    let resp = ctx
        .router()
        .oneshot(get("/storage/images/1704067200.png"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    assert_eq!(&bytes[..], PNG_BYTES);
}

/// ヘルスチェック
#[tokio::test]
async fn e2e_health_returns_ok() {
    let ctx = TestContext::new();
    let resp = ctx.router().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, serde_json::json!({ "status": "ok" }));
}
