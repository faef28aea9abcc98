use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::error::ErrorResponse;

pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod guests;
pub mod hotels;
pub mod rooms;
pub mod staff;
pub mod tasks;
pub mod users;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Server is running!")
}

fn bad_request<E>(err: E, message: String) -> error::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    error::InternalError::from_response(err, response).into()
}

fn bad_path(err: error::PathError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid ID: {err}");
    bad_request(err, message)
}

fn bad_json(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid request body: {err}");
    bad_request(err, message)
}

fn bad_query(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid query: {err}");
    bad_request(err, message)
}

/// Registers every route of the API plus extractor error handlers that
/// answer malformed ids and bodies with a 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(bad_path))
        .app_data(web::JsonConfig::default().error_handler(bad_json))
        .app_data(web::QueryConfig::default().error_handler(bad_query))
        .route("/", web::get().to(health))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login))
                        .route("/signup", web::post().to(auth::signup)),
                )
                .route(
                    "/dashboard/stats/{hotel_id}",
                    web::get().to(dashboard::get_stats),
                )
                .service(
                    web::scope("/bookings")
                        .route("", web::post().to(bookings::create_booking))
                        .route(
                            "/recent/{hotel_id}",
                            web::get().to(bookings::get_recent_bookings),
                        )
                        .route(
                            "/hotel/{hotel_id}",
                            web::get().to(bookings::get_hotel_bookings),
                        )
                        .route("/{id}", web::get().to(bookings::get_booking))
                        .route(
                            "/{id}/status",
                            web::patch().to(bookings::update_booking_status),
                        ),
                )
                .service(
                    web::scope("/rooms")
                        .route("", web::post().to(rooms::create_room))
                        .route("/{hotel_id}", web::get().to(rooms::get_rooms))
                        .route("/{id}/status", web::patch().to(rooms::update_room_status)),
                )
                .route("/guests/{id}", web::get().to(guests::get_guest))
                .service(
                    web::scope("/staff")
                        .route("", web::post().to(staff::create_staff))
                        .route("/{hotel_id}", web::get().to(staff::get_staff)),
                )
                .service(
                    web::scope("/tasks")
                        .route("", web::post().to(tasks::create_task))
                        .route("/today/{hotel_id}", web::get().to(tasks::get_today_tasks))
                        .route("/{hotel_id}", web::get().to(tasks::get_tasks))
                        .route("/{id}/status", web::patch().to(tasks::update_task_status)),
                )
                .service(
                    web::scope("/hotels")
                        .route("", web::get().to(hotels::get_hotels))
                        .route("/{id}", web::get().to(hotels::get_hotel_by_id)),
                )
                .service(
                    web::scope("/users")
                        .route("/{id}", web::patch().to(users::update_profile))
                        .route("/{id}/password", web::patch().to(users::change_password)),
                ),
        );
}
