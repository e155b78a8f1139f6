use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn logout(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<entity::user::Model>,
) -> ApiResult<()> {
    db.revoke_token(&user.id).await?;

    Ok(ApiResponse::NoContent)
}
