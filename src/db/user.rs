use crate::db::database_service::DatabaseService;
use crate::{
    types::{
        error::AppError,
        user::{NewUser, UserPatch},
    },
    utils::{
        token::{self, encrypt, verify},
        validation::{normalize_email, validate_email, validate_name, validate_password},
    },
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::info;
use uuid::Uuid;

fn hash_password(password: &str) -> Result<String, AppError> {
    encrypt(password).map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Validates, hashes the password and inserts. The unique index on
    /// `email` backs the existence check against concurrent signups.
    pub async fn create_user(&self, payload: NewUser) -> Result<UserModel, AppError> {
        let email = normalize_email(&payload.email);
        validate_email(&email)?;
        validate_name(&payload.name)?;
        validate_password(&payload.password)?;

        if self.user_exists_by_email(&email).await? {
            return Err(AppError::Validation("user with this email already exists".into()));
        }

        let now = Utc::now();
        let user = UserActive {
            id: Set(token::new_id()),
            email: Set(email),
            password: Set(hash_password(&payload.password)?),
            name: Set(payload.name.trim().to_string()),
            is_active: Set(true),
            is_staff: Set(payload.is_staff),
            is_superuser: Set(payload.is_superuser),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await
        .map_err(AppError::from_user_write)?;

        info!("Created user {} (staff={}, superuser={})", user.id, user.is_staff, user.is_superuser);
        Ok(user)
    }

    pub async fn create_superuser(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        self.create_user(NewUser {
            email: email.to_string(),
            password: password.to_string(),
            is_staff: true,
            is_superuser: true,
            ..Default::default()
        })
        .await
    }

    pub fn check_password(&self, user: &UserModel, password: &str) -> bool {
        if password.is_empty() {
            return false;
        }
        verify(password, &user.password).unwrap_or(false)
    }

    pub async fn update_user(&self, user_id: Uuid, patch: UserPatch) -> Result<UserModel, AppError> {
        let current = self.get_user_by_id(&user_id).await?;
        let mut am: UserActive = current.clone().into();

        if let Some(email) = patch.email {
            let email = normalize_email(&email);
            validate_email(&email)?;
            if email != current.email {
                if self.user_exists_by_email(&email).await? {
                    return Err(AppError::Validation("user with this email already exists".into()));
                }
                am.email = Set(email);
            }
        }
        if let Some(name) = patch.name {
            validate_name(&name)?;
            am.name = Set(name.trim().to_string());
        }
        if let Some(password) = patch.password {
            validate_password(&password)?;
            am.password = Set(hash_password(&password)?);
        }
        if let Some(v) = patch.is_active {
            am.is_active = Set(v);
        }
        if let Some(v) = patch.is_staff {
            am.is_staff = Set(v);
        }
        if let Some(v) = patch.is_superuser {
            am.is_superuser = Set(v);
        }

        if !am.is_changed() {
            return Ok(current);
        }
        am.updated_at = Set(Utc::now());
        Ok(am
            .update(&self.database_connection)
            .await
            .map_err(AppError::from_user_write)?)
    }

    /// Page numbers are 1-based. Returns the page and the total row count;
    /// pages past the end come back empty.
    pub async fn list_users_paginated(&self, page: u64, per_page: u64)
        -> Result<(Vec<UserModel>, u64), AppError> {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let finder = User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .order_by_asc(entity::user::Column::Email);
        let total = finder.clone().count(&self.database_connection).await?;

        // keeps the paginator's offset multiplication in range
        if page > total.div_ceil(per_page) {
            return Ok((Vec::new(), total));
        }

        let items = finder
            .paginate(&self.database_connection, per_page)
            .fetch_page(page - 1)
            .await?;
        Ok((items, total))
    }
}
