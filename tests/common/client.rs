use actix_web::{web, App};
use std::sync::Arc;
use core_auth::{
    db::database_service::DatabaseService,
    types::user::NewUser,
};
use entity::user::Model as UserModel;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(core_auth::routes::configure_routes)
    }

    /// Returns the superuser and a bearer token for it.
    pub async fn create_test_superuser(&self) -> (UserModel, String) {
        let admin = self.db
            .create_superuser("admin@gmail.com", "admin123")
            .await
            .expect("Failed to create superuser");
        let token = self.db
            .issue_token("admin@gmail.com", "admin123")
            .await
            .expect("Failed to issue superuser token");
        (admin, token)
    }

    pub async fn create_test_user(&self, email: &str, password: &str, name: &str) -> UserModel {
        self.db
            .create_user(NewUser {
                email: email.to_string(),
                password: password.to_string(),
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .expect("Failed to create user")
    }

    /// Regular user plus a bearer token for it.
    pub async fn create_logged_in_user(&self, email: &str, password: &str) -> (UserModel, String) {
        let user = self.create_test_user(email, password, "Test User").await;
        let token = self.db
            .issue_token(email, password)
            .await
            .expect("Failed to issue token");
        (user, token)
    }
}
