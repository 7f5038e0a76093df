//! Blog post CRUD handlers.

use actix_web::{HttpResponse, http::header, web};
use chrono::Utc;
use uuid::Uuid;

use blog_core::domain::BlogPostDraft;
use blog_core::{DomainError, RepoError};
use blog_shared::dto::{CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

/// GET /blog-posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blog-posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /blog-posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = BlogPostDraft {
        title: req.title,
        content: req.content,
        author: req.author,
        publish_date: req
            .publish_date
            .unwrap_or_else(|| Utc::now().date_naive()),
    };

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/blog-posts/{}", post.id)))
        .json(post))
}

/// PUT /blog-posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id.filter(|&body_id| body_id != id) {
        return Err(DomainError::Validation(format!(
            "Request path id ({}) and request body id ({}) must match",
            id, body_id
        ))
        .into());
    }

    let draft = BlogPostDraft {
        title: req.title,
        content: req.content,
        author: req.author,
        publish_date: req.publish_date,
    };

    state.posts.update(id, draft).await.map_err(|e| match e {
        RepoError::NotFound => AppError::from(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        }),
        other => AppError::from(other),
    })?;
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blog-posts/{id}
///
/// Answers 204 whether or not the post existed. An id that is not a UUID
/// names no post, so it gets the same answer.
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let Ok(id) = Uuid::parse_str(&path) else {
        tracing::debug!(post_id = %path.as_str(), "Delete of non-UUID blog post id ignored");
        return Ok(HttpResponse::NoContent().finish());
    };

    if state.posts.delete(id).await? {
        tracing::info!(post_id = %id, "Blog post deleted");
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{
        App,
        http::{StatusCode, header},
        test, web,
    };
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! init_app {
        ($seed:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new($seed).await.unwrap()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! list_posts {
        ($app:expr) => {{
            let req = test::TestRequest::get().uri("/blog-posts").to_request();
            let posts: Vec<Value> = test::call_and_read_body_json(&$app, req).await;
            posts
        }};
    }

    #[actix_web::test]
    async fn test_list_returns_posts_with_all_keys() {
        let app = init_app!(true);

        let req = test::TestRequest::get().uri("/blog-posts").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body: Vec<Value> = test::read_body_json(resp).await;
        assert!(!body.is_empty());
        for item in &body {
            let obj = item.as_object().unwrap();
            for key in ["id", "title", "content", "author", "publishDate"] {
                assert!(obj.contains_key(key), "missing key {key}");
            }
        }
    }

    #[actix_web::test]
    async fn test_list_empty_store() {
        let app = init_app!(false);
        assert!(list_posts!(app).is_empty());
    }

    #[actix_web::test]
    async fn test_create_returns_input_plus_id() {
        let app = init_app!(true);
        let new_item = json!({
            "title": "Interesting Article",
            "content": "This is a really interesting article written by will shaughnessy",
            "author": "Will Shaughnessy",
            "publishDate": "2019-01-28"
        });

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(&new_item)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let body: Value = test::read_body_json(resp).await;
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(location, format!("/blog-posts/{id}"));

        let mut expected = new_item.clone();
        expected["id"] = json!(id);
        assert_eq!(body, expected);

        let posts = list_posts!(app);
        assert_eq!(posts.last().unwrap(), &expected);
    }

    #[actix_web::test]
    async fn test_create_defaults_publish_date_to_today() {
        let app = init_app!(false);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({"title": "t", "content": "c", "author": "a"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let today = chrono::Utc::now().date_naive().to_string();
        assert_eq!(body["publishDate"], today);
    }

    #[actix_web::test]
    async fn test_create_missing_field_is_bad_request() {
        let app = init_app!(false);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({"content": "c", "author": "a", "publishDate": "2019-01-28"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert!(body["detail"].as_str().unwrap().contains("title"));

        assert!(list_posts!(app).is_empty());
    }

    #[actix_web::test]
    async fn test_get_by_id() {
        let app = init_app!(true);
        let first = list_posts!(app).remove(0);
        let id = first["id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/blog-posts/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, first);

        let req = test::TestRequest::get()
            .uri(&format!("/blog-posts/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_not_found() {
        let app = init_app!(true);

        let req = test::TestRequest::get()
            .uri("/blog-posts/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Not Found");
    }

    #[actix_web::test]
    async fn test_update_replaces_fields() {
        let app = init_app!(true);
        let before = list_posts!(app);
        let id = before[0]["id"].as_str().unwrap().to_string();

        let update = json!({
            "id": id,
            "title": "Will is Cool",
            "content": "Will is Cool",
            "author": "will",
            "publishDate": "2019-01-29"
        });
        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{id}"))
            .set_json(&update)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let after = list_posts!(app);
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], update);
        assert_eq!(after[1], before[1]);
    }

    #[actix_web::test]
    async fn test_update_without_body_id_uses_path() {
        let app = init_app!(true);
        let id = list_posts!(app)[1]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{id}"))
            .set_json(json!({
                "title": "Path wins",
                "content": "c",
                "author": "a",
                "publishDate": "2020-02-02"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let posts = list_posts!(app);
        assert_eq!(posts[1]["id"], id.as_str());
        assert_eq!(posts[1]["title"], "Path wins");
    }

    #[actix_web::test]
    async fn test_update_id_mismatch_is_bad_request() {
        let app = init_app!(true);
        let id = list_posts!(app)[0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{id}"))
            .set_json(json!({
                "id": uuid::Uuid::new_v4(),
                "title": "t",
                "content": "c",
                "author": "a",
                "publishDate": "2019-01-29"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_not_found() {
        let app = init_app!(false);

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{}", uuid::Uuid::new_v4()))
            .set_json(json!({
                "title": "t",
                "content": "c",
                "author": "a",
                "publishDate": "2019-01-29"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().contains("BlogPost"));
    }

    #[actix_web::test]
    async fn test_delete_removes_post() {
        let app = init_app!(true);
        let before = list_posts!(app);
        let id = before[0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/blog-posts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let after = list_posts!(app);
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|p| p["id"] != id.as_str()));

        // Deleting again is a no-op.
        let req = test::TestRequest::delete()
            .uri(&format!("/blog-posts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
    #[actix_web::test]
    async fn test_delete_non_uuid_id_is_no_content() {
        let app = init_app!(true);
        let before = list_posts!(app);

        let req = test::TestRequest::delete()
            .uri("/blog-posts/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(list_posts!(app), before);
    }

    #[actix_web::test]
    async fn test_create_malformed_json_is_bad_request() {
        let app = init_app!(false);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"title": "t", "content": "#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert!(list_posts!(app).is_empty());
    }

    #[actix_web::test]
    async fn test_create_wrong_content_type_is_bad_request() {
        let app = init_app!(false);

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .set_payload(
                r#"{"title": "t", "content": "c", "author": "a", "publishDate": "2019-01-28"}"#,
            )
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");
        assert!(list_posts!(app).is_empty());
    }

    #[actix_web::test]
    async fn test_update_bad_publish_date_is_bad_request() {
        let app = init_app!(true);
        let before = list_posts!(app);
        let id = before[0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/blog-posts/{id}"))
            .set_json(json!({
                "title": "t",
                "content": "c",
                "author": "a",
                "publishDate": "2019-02-30"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(list_posts!(app), before);
    }
}
