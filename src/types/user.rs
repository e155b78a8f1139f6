use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_PASSWORD_LENGTH: usize = 5;
pub const MAX_NAME_LENGTH: usize = 255;

/// Input to the user store. `password` is plaintext and is hashed before it
/// reaches the database.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

// public API bodies

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserCreate {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RTokenCreate {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl From<RUserUpdate> for UserPatch {
    fn from(r: RUserUpdate) -> Self {
        UserPatch {
            email: r.email,
            name: r.name,
            password: r.password,
            ..Default::default()
        }
    }
}

/// What the public API shows of a user. No id, no password.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRes {
    pub email: String,
    pub name: String,
}

impl From<entity::user::Model> for UserRes {
    fn from(u: entity::user::Model) -> Self {
        UserRes { email: u.email, name: u.name }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenRes {
    pub token: String,
}

// admin console bodies

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdminUserRes {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl From<entity::user::Model> for AdminUserRes {
    fn from(u: entity::user::Model) -> Self {
        AdminUserRes {
            id: u.id,
            email: u.email,
            name: u.name,
            is_active: u.is_active,
            is_staff: u.is_staff,
            is_superuser: u.is_superuser,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserChangelistRes {
    pub count: u64,
    pub page: u64,
    pub per_page: u64,
    pub results: Vec<AdminUserRes>,
}

#[derive(Serialize, Debug)]
pub struct UserChangeRes {
    pub user: AdminUserRes,
    pub fields: Vec<&'static str>,
}

#[derive(Serialize, Debug)]
pub struct UserAddFormRes {
    pub fields: Vec<&'static str>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RAdminUserAdd {
    pub email: String,
    pub password1: String,
    pub password2: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RAdminUserChange {
    pub email: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

impl From<RAdminUserChange> for UserPatch {
    fn from(r: RAdminUserChange) -> Self {
        UserPatch {
            email: r.email,
            name: r.name,
            password: None,
            is_active: r.is_active,
            is_staff: r.is_staff,
            is_superuser: r.is_superuser,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChangelistQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}
