use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{
    CreateGymInput, CreateGymUseCase, FetchNearbyGymsInput, FetchNearbyGymsUseCase,
    SearchGymsInput, SearchGymsUseCase,
};
use crate::models::{
    degrees_to_decimal, CreateGymRequest, GymResponse, GymsResponse, NearbyGymsQuery,
    SearchGymsQuery,
};
use crate::routes::{domain_error_response, validation_error_response, AppState};

/// Configure all gym-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/gyms", web::post().to(create_gym))
        .route("/gyms/search", web::get().to(search_gyms))
        .route("/gyms/nearby", web::get().to(nearby_gyms));
}

/// Register a gym
///
/// POST /api/v1/gyms
async fn create_gym(state: web::Data<AppState>, req: web::Json<CreateGymRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("gym registration failed validation: {}", errors);
        return validation_error_response(&errors);
    }

    let use_case = CreateGymUseCase::new(state.gyms.clone());
    let input = CreateGymInput {
        title: req.title.clone(),
        description: req.description.clone(),
        phone: req.phone.clone(),
        latitude: degrees_to_decimal(req.latitude),
        longitude: degrees_to_decimal(req.longitude),
    };

    match use_case.execute(input).await {
        Ok(gym) => HttpResponse::Created().json(GymResponse { gym }),
        Err(err) => domain_error_response(&err),
    }
}

/// Search gyms by title, paginated
///
/// GET /api/v1/gyms/search?q=Javascript&page=1
async fn search_gyms(
    state: web::Data<AppState>,
    query: web::Query<SearchGymsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    let use_case = SearchGymsUseCase::new(state.gyms.clone());
    let input = SearchGymsInput {
        query: query.q.clone(),
        page: query.page,
    };

    match use_case.execute(input).await {
        Ok(gyms) => HttpResponse::Ok().json(GymsResponse { gyms }),
        Err(err) => domain_error_response(&err),
    }
}

/// List gyms within the nearby radius of the given position
///
/// GET /api/v1/gyms/nearby?latitude=23.54&longitude=-46.63
async fn nearby_gyms(
    state: web::Data<AppState>,
    query: web::Query<NearbyGymsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    let use_case = FetchNearbyGymsUseCase::new(state.gyms.clone());
    let input = FetchNearbyGymsInput {
        user_latitude: query.latitude,
        user_longitude: query.longitude,
    };

    match use_case.execute(input).await {
        Ok(gyms) => HttpResponse::Ok().json(GymsResponse { gyms }),
        Err(err) => domain_error_response(&err),
    }
}
