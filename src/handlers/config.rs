use actix_web::{get, web, HttpResponse, Responder};
use crate::models::AppState;
use log::info;

#[get("/config")]
pub async fn get_config(data: web::Data<AppState>) -> impl Responder {
    let config = data.config.as_ref();
    info!(
        "Serving scoring config ({} tiles in supply)",
        config.available_letters.values().iter().sum::<u32>()
    );
    HttpResponse::Ok().json(config)
}
