use allocmap_common::config::Config;
use allocmap_common::network::range::{self, Range};
use colored::*;
use tracing::error;

use crate::commands::inspect::address_color;
use crate::terminal::{colors, print};

pub fn cidr(blocks: &[String], cfg: &Config) -> anyhow::Result<()> {
    let mut failed: usize = 0;

    for (idx, block) in blocks.iter().enumerate() {
        match range::cidr(block) {
            Ok(range) if cfg.quiet > 1 => print::result_line(range),
            Ok(range) => {
                print::tree_head(idx, block);
                print::as_tree_one_level(bounds(&range));
            }
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} blocks could not be resolved", blocks.len());
    }
    Ok(())
}

fn bounds(range: &Range) -> Vec<(String, ColoredString)> {
    let (low_sql, high_sql) = range.to_sql();
    vec![
        ("Low".to_string(), range.low.to_string().color(address_color(&range.low))),
        ("High".to_string(), range.high.to_string().color(address_color(&range.high))),
        (
            "Low SQL".to_string(),
            format!("{}, {}", low_sql.first, low_sql.second).color(colors::NUMBER),
        ),
        (
            "High SQL".to_string(),
            format!("{}, {}", high_sql.first, high_sql.second).color(colors::NUMBER),
        ),
    ]
}
