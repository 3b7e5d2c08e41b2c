//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod clock_in;
pub mod error;
pub mod health;
pub mod items;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the item and clock-in endpoints with their extractor settings.
///
/// Literal `/filter` and `/aggregate` routes are registered ahead of the
/// `/{id}` routes so they are not captured as identifiers.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use backend::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .app_data(error::path_config())
        .service(items::create_item)
        .service(items::filter_items)
        .service(items::aggregate_items)
        .service(items::get_item)
        .service(items::update_item)
        .service(items::delete_item)
        .service(clock_in::create_clock_in)
        .service(clock_in::filter_clock_in)
        .service(clock_in::get_clock_in)
        .service(clock_in::update_clock_in)
        .service(clock_in::delete_clock_in);
}
