use crate::types::response::json_config;
use crate::utils::webutils::{validate_admin_token, validate_token};
use actix_web::web;

pub mod admin;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin_token);

    cfg.app_data(json_config());

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/user")
            .service(
                web::scope("/create")
                    .service(user::create::create)
            )
            .service(
                web::scope("/token")
                    .service(user::token::token)
            )
            .service(
                web::scope("/me")
                    .service(user::me::me)
                    .service(user::me::update_me)
                    .wrap(user_auth.clone())
            )
            .service(
                web::scope("/logout")
                    .service(user::logout::logout)
                    .wrap(user_auth)
            )
    );
    cfg.service(
        web::scope("/admin/core/user")
            .service(admin::user::changelist)
            .service(admin::user::add_form)
            .service(admin::user::add)
            .service(admin::user::change_form)
            .service(admin::user::change)
            .wrap(admin_auth)
    );
}
