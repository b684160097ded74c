//! JSON summary of a collapsed address list.

use crate::models::{AddressRange, Block};
use crate::processing::find_gaps;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Collapsed blocks plus the gaps between them.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<AddressRange>,
    /// Addresses covered, as text since it may exceed JSON number precision.
    pub size: String,
}

impl Summary {
    pub fn new(blocks: &[Block], show_gaps: bool) -> Summary {
        Summary {
            blocks: blocks.to_vec(),
            gaps: if show_gaps { find_gaps(blocks) } else { vec![] },
            size: blocks
                .iter()
                .fold(0u128, |total, b| total.saturating_add(b.size()))
                .to_string(),
        }
    }
}

/// Render the summary as pretty JSON.
pub fn summary_json(blocks: &[Block], show_gaps: bool) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(&Summary::new(blocks, show_gaps))
        .map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print the summary as JSON to stdout.
pub fn print_json(blocks: &[Block], show_gaps: bool) -> Result<(), Box<dyn Error>> {
    println!("{}", summary_json(blocks, show_gaps)?);
    Ok(())
}
