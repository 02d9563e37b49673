mod handlers;

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tokio::sync::watch;

use crate::config::Config;
use crate::engine::{RouteResolver, Session, SessionHandle};
use crate::entities::RenderInstruction;
use crate::server::handlers::{locations, render, selection};
use crate::store::LocationStore;

pub struct AppState {
    pub store: Arc<LocationStore>,
    pub session: SessionHandle,
    pub render: watch::Receiver<RenderInstruction>,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/locations", get(locations::list))
        .route("/cards/:index/click", post(selection::card_click))
        .route("/markers/:index/click", post(selection::marker_click))
        .route("/map/click", post(selection::map_click))
        .route("/selection/clear", post(selection::clear))
        .route("/render", get(render::current))
        .layer(Extension(state))
}

/// Starts the selection session and serves the browser-facing API until the
/// server stops.
pub async fn serve(config: &Config, store: Arc<LocationStore>, resolver: RouteResolver) {
    let (publisher, render) = watch::channel(RenderInstruction::default());

    let session = Session::new(store.clone(), resolver, publisher);
    let handle = session.handle();
    tokio::spawn(session.run());

    let state = Arc::new(AppState {
        store,
        session: handle.clone(),
        render,
    });

    let app = router(state);

    tracing::info!("listening on {}", config.listen_addr);

    if let Err(err) = axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", err);
    }

    handle.close();
}
