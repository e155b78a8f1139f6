use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserRes};
use actix_web::{get, patch, web};
use std::sync::Arc;

#[get("")]
async fn me(
    user: web::ReqData<entity::user::Model>,
) -> ApiResult<UserRes> {
    Ok(ApiResponse::Ok(user.into_inner().into()))
}

#[patch("")]
async fn update_me(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<entity::user::Model>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    let updated = db.update_user(user.id, body.into_inner().into()).await?;

    Ok(ApiResponse::Ok(updated.into()))
}
