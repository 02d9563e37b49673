use axum::extract::{Extension, Json};
use serde::Serialize;

use crate::entities::Location;
use crate::server::SharedState;
use crate::ui::MarkerIcon;

#[derive(Serialize)]
pub struct LocationView {
    #[serde(flatten)]
    location: Location,
    icon: MarkerIcon,
}

pub async fn list(Extension(state): Extension<SharedState>) -> Json<Vec<LocationView>> {
    let views = state
        .store
        .locations()
        .iter()
        .map(|location| LocationView {
            location: location.clone(),
            icon: MarkerIcon::for_index(location.point.index),
        })
        .collect::<Vec<_>>();

    views.into()
}
