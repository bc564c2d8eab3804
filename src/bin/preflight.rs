use todo_api::infra::config::Config;
use todo_api::infra::db;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           BIND_ADDR, DB_MAX_CONNECTIONS, REQUEST_TIMEOUT_SECS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if missing)
    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.max_connections);
    println!("  REQUEST_TIMEOUT_SECS={}", config.request_timeout.as_secs());

    let pool = db::connect(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot connect to DATABASE_URL: {}", e))?;
    db::ping(&pool).await?;
    println!("  Database reachable.");

    let applied = db::applied_migrations(&pool).await?;
    let mut pending = 0;
    for migration in db::MIGRATOR.iter() {
        let state = if applied.contains(&migration.version) {
            "applied"
        } else {
            pending += 1;
            "pending"
        };
        println!(
            "  Migration {} ({}): {}",
            migration.version, migration.description, state
        );
    }
    if pending > 0 {
        println!("  {} migration(s) will be applied when api_server starts.", pending);
    }

    println!("> Preflight OK.");
    Ok(())
}
