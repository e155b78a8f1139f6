use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{NewUser, RUserCreate, UserRes};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let body = body.into_inner();

    let user = db
        .create_user(NewUser {
            email: body.email,
            password: body.password,
            name: body.name,
            ..Default::default()
        })
        .await?;

    Ok(ApiResponse::Created(user.into()))
}
