use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::db::{PostStore, SqlitePool, UserStore};
use crate::handlers::{auth, index, posts, users};

/// Shared request state: one store per entity plus the signing secret.
/// Handed to every handler explicitly; there is no ambient global.
#[derive(Clone)]
pub struct QuillState {
    pub posts: PostStore,
    pub users: UserStore,
    pub jwt_secret: Arc<str>,
}

impl QuillState {
    pub fn new(pool: SqlitePool, jwt_secret: Arc<str>) -> Self {
        Self {
            posts: PostStore::new(pool.clone()),
            users: UserStore::new(pool),
            jwt_secret,
        }
    }
}

pub fn quill_router(state: QuillState) -> Router {
    Router::new()
        .route("/", get(index::index_page).post(index::about))
        .route("/create", post(posts::create_post))
        .route("/posts", get(posts::list_posts))
        .route(
            "/post/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/newuser", post(users::new_user))
        .route("/users", get(users::list_users))
        .route("/login", post(auth::login))
        .with_state(state)
}
