use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RTokenCreate, TokenRes};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn token(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RTokenCreate>,
) -> ApiResult<TokenRes> {
    let token = db.issue_token(&body.email, &body.password).await?;

    Ok(ApiResponse::Ok(TokenRes { token }))
}
