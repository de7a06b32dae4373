use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{
    CheckInInput, CheckInUseCase, FetchUserCheckInsHistoryInput, FetchUserCheckInsHistoryUseCase,
    GetUserMetricsInput, GetUserMetricsUseCase,
};
use crate::models::{
    CheckInRequest, CheckInResponse, CheckInsHistoryResponse, HistoryQuery, UserMetricsResponse,
};
use crate::routes::{domain_error_response, validation_error_response, AppState};

/// Configure all check-in-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/gyms/{gym_id}/check-ins", web::post().to(create_check_in))
        .route(
            "/users/{user_id}/check-ins/history",
            web::get().to(check_ins_history),
        )
        .route("/users/{user_id}/metrics", web::get().to(user_metrics));
}

/// Record a check-in at a gym
///
/// POST /api/v1/gyms/{gym_id}/check-ins
///
/// The authenticated user id arrives in the body; authentication itself is
/// handled upstream of this service.
async fn create_check_in(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CheckInRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("check-in failed validation: {}", errors);
        return validation_error_response(&errors);
    }

    let gym_id = path.into_inner();
    let use_case = CheckInUseCase::new(
        state.check_ins.clone(),
        state.gyms.clone(),
        state.clock.clone(),
    );
    let input = CheckInInput {
        user_id: req.user_id.clone(),
        gym_id,
        user_latitude: req.latitude,
        user_longitude: req.longitude,
    };

    match use_case.execute(input).await {
        Ok(check_in) => HttpResponse::Created().json(CheckInResponse { check_in }),
        Err(err) => {
            tracing::info!("check-in rejected: {}", err);
            domain_error_response(&err)
        }
    }
}

/// Paginated check-in history for a user
///
/// GET /api/v1/users/{user_id}/check-ins/history?page=1
async fn check_ins_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<HistoryQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    let use_case = FetchUserCheckInsHistoryUseCase::new(state.check_ins.clone());
    let input = FetchUserCheckInsHistoryInput {
        user_id: path.into_inner(),
        page: query.page,
    };

    match use_case.execute(input).await {
        Ok(check_ins) => HttpResponse::Ok().json(CheckInsHistoryResponse { check_ins }),
        Err(err) => domain_error_response(&err),
    }
}

/// Total check-in count for a user
///
/// GET /api/v1/users/{user_id}/metrics
async fn user_metrics(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let use_case = GetUserMetricsUseCase::new(state.check_ins.clone());
    let input = GetUserMetricsInput {
        user_id: path.into_inner(),
    };

    match use_case.execute(input).await {
        Ok(count) => HttpResponse::Ok().json(UserMetricsResponse {
            check_ins_count: count,
        }),
        Err(err) => domain_error_response(&err),
    }
}
