use axum::extract::{Extension, Path};
use axum::http::StatusCode;

use crate::engine::Event;
use crate::error::{invalid_input_error, Error};
use crate::server::SharedState;

fn checked_index(state: &SharedState, index: usize) -> Result<usize, Error> {
    if state.store.contains(index) {
        Ok(index)
    } else {
        Err(invalid_input_error())
    }
}

pub async fn card_click(
    Extension(state): Extension<SharedState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, Error> {
    let index = checked_index(&state, index)?;
    state.session.send(Event::CardClick(index)).await?;

    Ok(StatusCode::ACCEPTED)
}

pub async fn marker_click(
    Extension(state): Extension<SharedState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, Error> {
    let index = checked_index(&state, index)?;
    state.session.send(Event::MarkerClick(index)).await?;

    Ok(StatusCode::ACCEPTED)
}

pub async fn map_click(Extension(state): Extension<SharedState>) -> Result<StatusCode, Error> {
    state.session.send(Event::BackgroundClick).await?;

    Ok(StatusCode::ACCEPTED)
}

pub async fn clear(Extension(state): Extension<SharedState>) -> Result<StatusCode, Error> {
    state.session.send(Event::ClearAction).await?;

    Ok(StatusCode::ACCEPTED)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::watch;

    use super::*;
    use crate::engine::{RouteResolver, Session};
    use crate::entities::{Coordinates, RenderInstruction, Route};
    use crate::error::upstream_error;
    use crate::external::RoutingService;
    use crate::server::AppState;
    use crate::store::LocationStore;

    struct Offline;

    #[async_trait]
    impl RoutingService for Offline {
        async fn walking_route(&self, _: Coordinates, _: Coordinates) -> Result<Route, Error> {
            Err(upstream_error())
        }
    }

    fn state() -> SharedState {
        let store = Arc::new(
            LocationStore::from_json(
                r#"{"locations": [
                    {"name": "A", "lat": 45.535, "lon": -73.6145},
                    {"name": "B", "lat": 45.537, "lon": -73.61}
                ]}"#,
            )
            .unwrap(),
        );
        let (publisher, render) = watch::channel(RenderInstruction::default());
        let session = Session::new(store.clone(), RouteResolver::new(Arc::new(Offline)), publisher);
        let handle = session.handle();
        tokio::spawn(session.run());

        Arc::new(AppState {
            store,
            session: handle,
            render,
        })
    }

    #[tokio::test]
    async fn rejects_unknown_index_before_dispatch() {
        let state = state();

        let err = card_click(Extension(state.clone()), Path(2))
            .await
            .unwrap_err();
        assert_eq!(err.code, 101);

        let err = marker_click(Extension(state), Path(99)).await.unwrap_err();
        assert_eq!(err.code, 101);
    }

    #[tokio::test]
    async fn clicks_reach_the_session() {
        let state = state();
        let mut render = state.render.clone();

        let status = marker_click(Extension(state.clone()), Path(1)).await.unwrap();
        assert_eq!(status, StatusCode::ACCEPTED);

        while !render.borrow().is_selected(1) {
            render.changed().await.unwrap();
        }

        map_click(Extension(state.clone())).await.unwrap();
        while !render.borrow().selected.is_empty() {
            render.changed().await.unwrap();
        }

        state.session.close();
        let err = clear(Extension(state)).await.unwrap_err();
        assert_eq!(err.code, 8);
    }
}
