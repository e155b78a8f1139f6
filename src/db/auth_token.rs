use crate::db::database_service::DatabaseService;
use crate::{
    types::{error::AppError, token::{extract_token_parts, TokenParts}},
    utils::token::{encrypt, new_token, verify},
};
use chrono::Utc;
use entity::auth_token::{ActiveModel as TokenActive, Entity as AuthToken};
use entity::user::Model as UserModel;
use sea_orm::{sea_query::OnConflict, EntityTrait, Set};
use std::sync::OnceLock;
use tracing::{info, warn};
use uuid::Uuid;

/// Hash checked when the email is unknown, so both failure paths pay for
/// one argon2 verify.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| encrypt(&new_token()).unwrap_or_default())
}

impl DatabaseService {
    /// Login. Every failure collapses into `InvalidCredentials` so callers
    /// cannot tell an unknown email from a wrong password.
    pub async fn issue_token(&self, email: &str, password: &str) -> Result<String, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let user = match self.get_user_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound) => {
                let _ = verify(password, dummy_hash());
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !self.check_password(&user, password) || !user.is_active {
            warn!("Rejected token request for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.replace_user_token(&user.id).await?;
        info!("Issued token for user {}", user.id);
        Ok(token)
    }

    /// Upserts the user's token row with a fresh secret and returns the
    /// encoded bearer token. Any previously issued token stops working.
    pub async fn replace_user_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        let secret = new_token();
        let token_hash = encrypt(&secret)
            .map_err(|e| AppError::Internal(format!("token hashing failed: {e}")))?;

        AuthToken::insert(TokenActive {
            user_id: Set(*user_id),
            token_hash: Set(token_hash),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::auth_token::Column::UserId)
                .update_columns([
                    entity::auth_token::Column::TokenHash,
                    entity::auth_token::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec(&self.database_connection)
        .await?;

        Ok(TokenParts { user_id: *user_id, secret }.encode())
    }

    /// Resolves a bearer token to its active owner.
    pub async fn authenticate(&self, token: &str) -> Result<UserModel, AppError> {
        let parts = extract_token_parts(token).ok_or(AppError::Unauthorized)?;

        let row = AuthToken::find_by_id(parts.user_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify(&parts.secret, &row.token_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }

        match self.get_user_by_id(&parts.user_id).await {
            Ok(user) if user.is_active => Ok(user),
            Ok(_) | Err(AppError::NotFound) => Err(AppError::Unauthorized),
            Err(e) => Err(e),
        }
    }

    pub async fn token_valid(&self, token: &str) -> bool {
        self.authenticate(token).await.is_ok()
    }

    pub async fn has_token(&self, user_id: &Uuid) -> Result<bool, AppError> {
        Ok(AuthToken::find_by_id(*user_id)
            .one(&self.database_connection)
            .await?
            .is_some())
    }

    pub async fn revoke_token(&self, user_id: &Uuid) -> Result<(), AppError> {
        AuthToken::delete_by_id(*user_id)
            .exec(&self.database_connection)
            .await?;
        info!("Revoked token for user {}", user_id);
        Ok(())
    }
}
