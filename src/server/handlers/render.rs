use axum::extract::{Extension, Json};

use crate::entities::RenderInstruction;
use crate::server::SharedState;

pub async fn current(Extension(state): Extension<SharedState>) -> Json<RenderInstruction> {
    let instruction = state.render.borrow().clone();

    instruction.into()
}
