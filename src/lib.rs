//! Network addresses, address ranges and CIDR subnets as typed numeric values.
//!
//! - [`models`] - IPv4/IPv6 addresses, ranges, subnets and their merge rules
//! - [`processing`] - collapsing, gap finding, overlap detection and lookup
//! - [`input`] - reading address lists
//! - [`output`] - CSV and terminal reports

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::{Config, OutputFormat};
use processing::AddressList;
use std::error::Error;

pub use error::{AddressError, Result};

/// Read the configured address list and collapse it.
pub fn get_address_list(config: &Config) -> std::result::Result<AddressList, Box<dyn Error>> {
    let data = input::read_address_list(config.list_file.as_deref())?;
    processing::log_overlaps(&processing::find_overlaps(&data));
    let list = AddressList::new(&data);
    log::info!(
        "# Got {} entries, {} blocks after collapsing",
        data.len(),
        list.len()
    );
    Ok(list)
}

/// Print the report selected by `config` for `list`.
pub fn print_address_list(
    config: &Config,
    list: &AddressList,
) -> std::result::Result<(), Box<dyn Error>> {
    match config.output {
        OutputFormat::Csv => output::print_csv(list.blocks(), config.show_gaps),
        OutputFormat::Text => output::print_text(list.blocks(), config.show_gaps),
        OutputFormat::Json => output::print_json(list.blocks(), config.show_gaps)?,
    }
    if !config.lookup.is_empty() {
        output::print_lookup(&output::lookup_all(list, &config.lookup));
    }
    Ok(())
}
