use crate::error::{AppError, Result};
use crate::model::{CreateLinkResult, CreateLinksRequest, CreateLinksResponse, StatsResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use tracing::{debug, info, warn};

pub async fn create_links_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateLinksRequest>,
) -> Result<Json<CreateLinksResponse>> {
    let got = request.links.len();
    if got == 0 {
        return Err(AppError::EmptyBatch);
    }
    if got > state.max_batch_size() {
        return Err(AppError::BatchTooLarge {
            max: state.max_batch_size(),
            got,
        });
    }

    // only URLs that are valid Location header values reach the registry
    let mut rejected = Vec::with_capacity(got);
    let mut accepted = Vec::with_capacity(got);
    for link in request.links {
        if HeaderValue::try_from(link.long_url.as_str()).is_ok() {
            rejected.push(None);
            accepted.push(link);
        } else {
            debug!(long_url = ?link.long_url, "rejected url that cannot be a redirect target");
            rejected.push(Some(CreateLinkResult::unusable_url()));
        }
    }

    let mut submitted = state
        .service()
        .submit(accepted)
        .into_iter()
        .map(|result| CreateLinkResult::new(result, state.base_url()));
    // submit returns one result per accepted link, in order
    let results: Vec<_> = rejected
        .into_iter()
        .filter_map(|slot| slot.or_else(|| submitted.next()))
        .collect();

    let created = results
        .iter()
        .filter(|result| matches!(result, CreateLinkResult::Created(_)))
        .count();
    info!(submitted = got, created, "links shortened");

    Ok(Json(CreateLinksResponse { results }))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        links: state.service().statistics(),
    })
}

/// Redirects to the long URL, or back home when the code does not resolve.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let url = match state.service().resolve(&code) {
        Ok(url) => url,
        Err(err) => {
            debug!(code = %code, error = %err, "redirecting home");
            return Ok(Redirect::to("/").into_response());
        }
    };

    let location = HeaderValue::try_from(url.as_str()).map_err(|err| {
        warn!(code = %code, error = %err, "stored url is not a valid location header");
        AppError::UnusableTarget
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
