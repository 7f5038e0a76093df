//! HTTP handlers and route configuration.

mod blog_posts;
mod health;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blog-posts")
                .route("", web::get().to(blog_posts::list))
                .route("", web::post().to(blog_posts::create))
                .route("/{id}", web::get().to(blog_posts::get))
                .route("/{id}", web::put().to(blog_posts::update))
                .route("/{id}", web::delete().to(blog_posts::delete)),
        );
}
