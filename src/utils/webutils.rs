use std::sync::Arc;

use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;

async fn resolve_user(
    req: &ServiceRequest,
    credentials: &BearerAuth,
) -> Result<entity::user::Model, AppError> {
    let db = req
        .app_data::<web::Data<Arc<DatabaseService>>>()
        .ok_or_else(|| AppError::Internal("database service not registered".into()))?;
    db.authenticate(credentials.token()).await
}

/// Bearer validator for routes any active user may call. The resolved user
/// is stored in request extensions for `web::ReqData<entity::user::Model>`.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match resolve_user(&req, &credentials).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// Bearer validator for the admin console: active staff superusers only.
pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match resolve_user(&req, &credentials).await {
        Ok(user) if user.is_staff && user.is_superuser => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Ok(_) => Err((AppError::Forbidden.into(), req)),
        Err(e) => Err((e.into(), req)),
    }
}
