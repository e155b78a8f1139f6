use core_auth::config::config;
use core_auth::db::database_service::DatabaseService;
use std::env;
use std::io::{self, BufRead};
use tracing::info;

const PASSWORD_ENV: &str = "SUPERUSER_PASSWORD";

/// The password never comes from argv: `SUPERUSER_PASSWORD` if set,
/// otherwise the first line of stdin.
fn resolve_password(from_env: Option<String>, mut input: impl BufRead) -> io::Result<String> {
    if let Some(password) = from_env.filter(|p| !p.is_empty()) {
        return Ok(password);
    }
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let email = match env::args().nth(1) {
        Some(email) => email,
        None => {
            return Err(format!(
                "usage: create_superuser <email>  (password from ${} or stdin)",
                PASSWORD_ENV
            )
            .into())
        }
    };

    if env::var(PASSWORD_ENV).is_err() {
        eprintln!("Password:");
    }
    let password = resolve_password(env::var(PASSWORD_ENV).ok(), io::stdin().lock())?;

    let config = config();
    let db = DatabaseService::new(&config.db_url, 1).await?;
    let user = db.create_superuser(&email, &password).await?;

    info!("Superuser {} created.", user.id);
    println!("Superuser created: {}", user.email);
    Ok(())
}
