use allocmap_common::Address;
use allocmap_common::config::Config;
use colored::*;

use crate::commands::inspect::{address_color, family};
use crate::terminal::print;

pub fn sql(first: i64, second: i64, cfg: &Config) -> anyhow::Result<()> {
    let addr = Address::from_sql(first, second);

    if cfg.quiet > 1 {
        print::result_line(addr);
        return Ok(());
    }

    print::tree_head(0, &format!("{first}, {second}"));
    print::as_tree_one_level(vec![
        ("Text".to_string(), addr.to_string().color(address_color(&addr))),
        ("Family".to_string(), family(&addr).normal()),
    ]);
    Ok(())
}
