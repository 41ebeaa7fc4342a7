mod config;
mod db;
mod logging;
mod models;
mod run;
mod store;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (config, args) = config::Config::from_env(&args)?;
    logging::init(config.echo);

    config.ensure_db_dir()?;
    let mut db = db::Database::open(&config.db_path)?;

    let result = match args.len() {
        0 | 1 => run::as_demo(&mut db),
        _ => run::as_cli(&args, &mut db),
    };

    db.close()?;
    result
}
