use anyhow::{Context, Result};
use cafe::{
    cli::{self, StdPrompter},
    config::{Config, ConnectionManager, ConnectionPool},
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [database, port, user] = args.as_slice() else {
        eprintln!("Usage: cafe <dbname> <port> <user>");
        std::process::exit(2);
    };

    let config = Config::init(database, port, user).context("Failed to load configuration")?;

    println!("Connecting to database...");
    let pool = match ConnectionManager::new_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error - Unable to Connect to Database: {e:#}");
            eprintln!("Make sure postgres is running on {}:{}", config.host, config.port);
            std::process::exit(1);
        }
    };
    println!("Done");

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("✅ Migrations applied");
    }

    let state = AppState::new(pool.clone()).context("Failed to create AppState")?;

    let mut prompter = StdPrompter::new();
    let session_result = cli::run(&state.di_container, &mut prompter).await;

    // The pool is released on every exit path, error included.
    print!("Disconnecting from database...");
    pool.close().await;
    println!("Done\n\nBye !");

    session_result
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
