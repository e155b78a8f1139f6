//! Admin console views over the user table. Same pages a server-rendered
//! admin would have (changelist, add, change), answered as JSON.

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{
    AdminUserRes, ChangelistQuery, NewUser, RAdminUserAdd, RAdminUserChange, UserAddFormRes,
    UserChangeRes, UserChangelistRes,
};
use actix_web::{get, post, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub const LIST_PER_PAGE: u64 = 100;

const ADD_FIELDS: [&str; 3] = ["email", "password1", "password2"];
const CHANGE_FIELDS: [&str; 5] = ["email", "name", "is_active", "is_staff", "is_superuser"];

fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    // unknown ids and unparseable ids both read as "no such user"
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

#[get("/")]
async fn changelist(
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<ChangelistQuery>,
) -> ApiResult<UserChangelistRes> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(LIST_PER_PAGE).clamp(1, LIST_PER_PAGE);

    let (users, count) = db.list_users_paginated(page, per_page).await?;

    Ok(ApiResponse::Ok(UserChangelistRes {
        count,
        page,
        per_page,
        results: users.into_iter().map(AdminUserRes::from).collect(),
    }))
}

#[get("/add/")]
async fn add_form() -> ApiResult<UserAddFormRes> {
    Ok(ApiResponse::Ok(UserAddFormRes { fields: ADD_FIELDS.to_vec() }))
}

#[post("/add/")]
async fn add(
    db: web::Data<Arc<DatabaseService>>,
    admin: web::ReqData<entity::user::Model>,
    body: web::Json<RAdminUserAdd>,
) -> ApiResult<AdminUserRes> {
    let body = body.into_inner();
    if body.password1 != body.password2 {
        return Err(AppError::Validation("the two password fields didn't match".into()));
    }

    let user = db
        .create_user(NewUser {
            email: body.email,
            password: body.password1,
            name: body.name,
            is_staff: body.is_staff,
            is_superuser: body.is_superuser,
        })
        .await?;

    info!("Admin {} added user {}", admin.id, user.id);
    Ok(ApiResponse::Created(user.into()))
}

#[get("/{id}/change/")]
async fn change_form(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<UserChangeRes> {
    let id = parse_user_id(&path)?;
    let user = db.get_user_by_id(&id).await?;

    Ok(ApiResponse::Ok(UserChangeRes {
        user: user.into(),
        fields: CHANGE_FIELDS.to_vec(),
    }))
}

#[post("/{id}/change/")]
async fn change(
    db: web::Data<Arc<DatabaseService>>,
    admin: web::ReqData<entity::user::Model>,
    path: web::Path<String>,
    body: web::Json<RAdminUserChange>,
) -> ApiResult<UserChangeRes> {
    let id = parse_user_id(&path)?;
    let user = db.update_user(id, body.into_inner().into()).await?;

    info!("Admin {} changed user {}", admin.id, user.id);
    Ok(ApiResponse::Ok(UserChangeRes {
        user: user.into(),
        fields: CHANGE_FIELDS.to_vec(),
    }))
}
