//! Types command implementation.
//!
//! Prints every registered star type with its palette.

use clap::Args;

use crate::error::Result;
use crate::surface::StarType;

/// Width of the name column.
const NAME_WIDTH: usize = 12;

/// List registered star types
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Print names only, one per line
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn run(args: TypesArgs) -> Result<()> {
    if args.quiet {
        println!("{}", StarType::names().join("\n"));
    } else {
        println!("{}", format_types()?);
    }
    Ok(())
}

/// One line per type: name, then `key=#RRGGBB` for each palette entry.
pub fn format_types() -> Result<String> {
    let mut lines = Vec::with_capacity(StarType::ALL.len());
    for star_type in StarType::ALL {
        let palette: Vec<String> = star_type
            .generator()
            .palette()?
            .iter()
            .map(|(name, colour)| format!("{}={}", name, colour))
            .collect();
        lines.push(format!("{:<NAME_WIDTH$}{}", star_type.name(), palette.join(" ")));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_types() {
        insta::assert_snapshot!(format_types().unwrap(), @r"
Regular     core=#FFFF66 surface=#FFFFCC corona=#FFFFDD
RedGiant    core=#FF2200 surface=#FF5500 corona=#FF8844
WhiteDwarf  core=#FFFFFF surface=#CCFFFF corona=#EEFFFF
");
    }
}
