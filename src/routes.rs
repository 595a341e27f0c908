//! HTTP surface: warp filters, replies and rejection recovery.

use std::convert::Infallible;

use futures_util::{Stream, StreamExt};
use warp::http::StatusCode;
use warp::hyper::body::Buf;
use warp::reply::{self, Reply, Response};
use warp::{Filter, Rejection};

use crate::constants::MAX_BODY_BYTES;
use crate::error::AppError;
use crate::models::{CityInfos, CreateRecipeRequest, ErrorBody, Recipe, RecipeDraft};
use crate::service::CityService;

/// All routes, with error recovery and request tracing.
pub fn api(
    service: CityService,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    // Path before method, so unknown paths reject as not found rather than 405.
    let infos = warp::path!("cities" / String / "infos")
        .and(warp::get())
        .and(with_service(service.clone()))
        .and_then(get_city_infos);

    let create = warp::path!("cities" / String / "recipes")
        .and(warp::post())
        .and(warp::body::stream())
        .and(with_service(service.clone()))
        .and_then(create_recipe);

    let delete = warp::path!("cities" / String / "recipes" / String)
        .and(warp::delete())
        .and(with_service(service))
        .and_then(delete_recipe);

    let docs = warp::path!("documentation" / "json")
        .and(warp::get())
        .map(|| reply::json(&api_schemas()));

    infos
        .or(create)
        .or(delete)
        .or(docs)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

fn with_service(
    service: CityService,
) -> impl Filter<Extract = (CityService,), Error = Infallible> + Clone {
    warp::any().map(move || service.clone())
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: message.into(),
    };
    reply::with_status(reply::json(&body), status).into_response()
}

impl Reply for AppError {
    fn into_response(self) -> Response {
        error_reply(self.status_code(), self.to_string())
    }
}

async fn get_city_infos(city_id: String, service: CityService) -> Result<Response, Infallible> {
    let city_id = decode_segment(&city_id);
    Ok(match service.city_infos(&city_id).await {
        Ok(infos) => reply::json(&infos).into_response(),
        Err(e) => e.into_response(),
    })
}

/// Reads the body up to `MAX_BODY_BYTES`. No Content-Length is required; a
/// missing body reads as missing content.
async fn read_draft<S, B>(body: S) -> RecipeDraft
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    futures_util::pin_mut!(body);
    let mut buf = Vec::new();

    while let Some(chunk) = body.next().await {
        let mut chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("Failed to read request body: {}", e);
                return RecipeDraft::Content(None);
            }
        };
        if buf.len() + chunk.remaining() > MAX_BODY_BYTES {
            return RecipeDraft::Oversized;
        }
        let bytes = chunk.copy_to_bytes(chunk.remaining());
        buf.extend_from_slice(&bytes);
    }

    RecipeDraft::from_body(&buf)
}

async fn create_recipe<S, B>(
    city_id: String,
    body: S,
    service: CityService,
) -> Result<Response, Infallible>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    let city_id = decode_segment(&city_id);
    let draft = read_draft(body).await;

    Ok(match service.create_recipe(&city_id, draft).await {
        Ok(recipe) => reply::with_status(reply::json(&recipe), StatusCode::CREATED).into_response(),
        Err(e) => e.into_response(),
    })
}

async fn delete_recipe(
    city_id: String,
    recipe_id: String,
    service: CityService,
) -> Result<Response, Infallible> {
    let city_id = decode_segment(&city_id);
    Ok(match service.delete_recipe(&city_id, &recipe_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    })
}

/// JSON Schemas of the request and response bodies.
pub fn api_schemas() -> serde_json::Value {
    serde_json::json!({
        "cityInfos": schemars::schema_for!(CityInfos),
        "createRecipeRequest": schemars::schema_for!(CreateRecipeRequest),
        "recipe": schemars::schema_for!(Recipe),
        "error": schemars::schema_for!(ErrorBody),
    })
}

async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Route not found".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        tracing::error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(error_reply(status, message))
}
