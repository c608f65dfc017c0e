use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::RequestError;
use crate::models::JournalEntry;
use crate::routes::AppState;

/// Configure mood analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/analyze")
            .route(web::post().to(analyze_mood))
            .default_service(web::route().to(HttpResponse::MethodNotAllowed)),
    );
}

/// Analyze mood endpoint
///
/// POST /analyze
///
/// Request body:
/// ```json
/// {
///   "content": "string",
///   "title": "string"
/// }
/// ```
///
/// Response body:
/// ```json
/// {
///   "moodScore": 7.1,
///   "advice": "string"
/// }
/// ```
///
/// The body is decoded whatever its Content-Type; see
/// [`JournalEntry::from_body`] for what is accepted.
async fn analyze_mood(
    state: web::Data<AppState>,
    body: web::Bytes,
    http_req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let entry = JournalEntry::from_body(&body).map_err(|e| {
        tracing::info!("JSON payload error on {}: {}", http_req.path(), e);
        RequestError::from(e)
    })?;

    let analysis = state.analyzer.analyze(&entry);

    tracing::info!(
        "Analyzed entry ({} chars): mood score {:.2}",
        entry.content.chars().count(),
        analysis.mood_score
    );

    Ok(HttpResponse::Ok().json(analysis))
}
