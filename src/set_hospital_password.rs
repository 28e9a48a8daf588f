//! Sets the login password of a hospital account.
//!
//! ```text
//! HOSPITAL_PASSWORD=... set-hospital-password <hospital-id>
//! ```

use color_eyre::eyre::{eyre, Result, WrapErr};
use dotenv::dotenv;
use medibook_api::middleware::auth::hash_password;
use medibook_db::repositories::hospital::set_password_hash;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let hospital_id: i32 = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: set-hospital-password <hospital-id>"))?
        .parse()
        .wrap_err("hospital id must be an integer")?;

    let password = std::env::var("HOSPITAL_PASSWORD")
        .wrap_err("HOSPITAL_PASSWORD environment variable must be set")?;
    if password.len() < 8 {
        return Err(eyre!("HOSPITAL_PASSWORD must be at least 8 characters"));
    }

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;
    let db_pool = medibook_db::create_pool(&database_url, 1).await?;

    let password_hash = hash_password(&password)?;
    set_password_hash(&db_pool, hospital_id, &password_hash).await?;

    info!("Password updated for hospital {}", hospital_id);
    Ok(())
}
