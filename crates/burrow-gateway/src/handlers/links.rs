use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use burrow_service::Resolution;

use crate::error::Result;
use crate::handlers::pages::CREATE_PAGE;
use crate::model::{CreateLinkForm, LinkListResponse};
use crate::state::AppState;

pub async fn resolve_link_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    match state.resolver().resolve(&key).await? {
        // Redirect::to answers 303 See Other.
        Resolution::Redirect(destination) => Ok(Redirect::to(&destination).into_response()),
        Resolution::Listing(entries) => Ok(Json(LinkListResponse::from(entries)).into_response()),
        // A miss renders the same page as the root path, not a 404.
        Resolution::NotFound => Ok(Html(CREATE_PAGE).into_response()),
    }
}

pub async fn create_link_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateLinkForm>,
) -> Result<String> {
    let registration = state.registrar().register(&form.link, &form.dest).await?;
    Ok(format!(
        "Saved | /{} -> {}",
        registration.key, registration.destination
    ))
}
