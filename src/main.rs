use netaddr_summary::config::Config;
use netaddr_summary::get_address_list;
use netaddr_summary::print_address_list;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env(std::env::args().nth(1))?;
    log4rs::init_file(&config.log_config, Default::default())
        .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
    log::info!("#Start main()");

    let list = get_address_list(&config)?;
    print_address_list(&config, &list)?;

    Ok(())
}
