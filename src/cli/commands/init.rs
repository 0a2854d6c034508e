use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rStopwatch…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open_initialized(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rStopwatch initialization completed!");
    Ok(())
}
