use actix_web::{http::header, web, HttpResponse, Responder};
use log::error;
use serde_json::Value;

use crate::models::itinerary::ValidationFailure;
use crate::services::export_service::export_filename;

/*
    POST /api/plan/export
*/
pub async fn export(input: web::Json<Value>) -> impl Responder {
    let document = input.into_inner();

    let Some(itinerary) = document.as_object() else {
        return HttpResponse::BadRequest().json(ValidationFailure::new(vec![
            "Itinerary must be a JSON object".to_string(),
        ]));
    };
    if !itinerary.get("days").is_some_and(Value::is_array) {
        return HttpResponse::BadRequest()
            .json(ValidationFailure::new(vec!["days is required".to_string()]));
    }

    let filename = export_filename(itinerary);

    match serde_json::to_string_pretty(&document) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ))
            .body(body),
        Err(err) => {
            error!("Failed to serialize itinerary export: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to export itinerary")
        }
    }
}
