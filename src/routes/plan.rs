use actix_web::{web, HttpResponse, Responder};
use log::info;

use crate::models::itinerary::ValidationFailure;
use crate::models::trip::TripRequest;
use crate::services::itinerary_service::ItineraryService;
use crate::services::validation_service::validate;

/*
    POST /api/plan
*/
pub async fn plan(
    service: web::Data<ItineraryService>,
    input: web::Json<TripRequest>,
) -> impl Responder {
    let request = input.into_inner();

    let errors = validate(&request);
    if !errors.is_empty() {
        info!("Rejected trip request: {}", errors.join("; "));
        return HttpResponse::BadRequest().json(ValidationFailure::new(errors));
    }

    let result = service.plan(&request).await;
    HttpResponse::Ok().json(result)
}
