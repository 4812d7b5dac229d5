use allocmap_common::Address;
use allocmap_common::config::Config;
use colored::*;
use tracing::error;

use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn inspect(inputs: &[String], cfg: &Config) -> anyhow::Result<()> {
    let mut failed: usize = 0;

    for (idx, input) in inputs.iter().enumerate() {
        match input.parse::<Address>() {
            Ok(addr) if cfg.quiet > 1 => print::result_line(addr),
            Ok(addr) => {
                print::tree_head(idx, input);
                print::as_tree_one_level(details(&addr));
            }
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} addresses could not be parsed", inputs.len());
    }
    Ok(())
}

pub fn family(addr: &Address) -> &'static str {
    if addr.is_ipv4() { "IPv4" } else { "IPv6" }
}

pub fn address_color(addr: &Address) -> Color {
    if addr.is_ipv4() {
        colors::IPV4_ADDR
    } else {
        colors::IPV6_ADDR
    }
}

fn details(addr: &Address) -> Vec<Detail> {
    let pair = addr.to_sql();
    let decoded = Address::from_sql(pair.first, pair.second);
    let bytes: Vec<String> = (0..16).map(|i| addr.get_byte(i).to_string()).collect();

    vec![
        ("Text".to_string(), addr.to_string().color(address_color(addr))),
        ("Family".to_string(), family(addr).color(colors::TEXT_DEFAULT)),
        (
            "SQL".to_string(),
            format!("{}, {}", pair.first, pair.second).color(colors::NUMBER),
        ),
        ("Decoded".to_string(), decoded.to_string().color(address_color(&decoded))),
        ("Bytes".to_string(), bytes.join(",").color(colors::NUMBER)),
    ]
}
