//! Advance Calculator
//!
//! Computes, for every catalog window, the distribution of RNG advances
//! consumed by the NPCs in an area, and prints side-by-side tables ready
//! to paste into a spreadsheet.
//!
//! Options: --types, --style, --catalog, --window, -v
use advances::Calculator;
use advances::Catalog;
use advances::Code;
use advances::Style;
use advances::Table;
use clap::Parser;
use dialoguer::Input;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Type code of every NPC in the area, comma separated. Prompts when omitted.
    #[arg(short, long, value_delimiter = ',')]
    types: Vec<Code>,
    /// Table layout. Without a catalog, also picks the built-in window list.
    #[arg(short, long, value_enum, default_value = "rounded")]
    style: Style,
    /// JSON catalog of entity types, windows, and cooldowns.
    #[arg(short, long, env = "ADVANCES_CATALOG")]
    catalog: Option<PathBuf>,
    /// Only report these windows. Repeatable.
    #[arg(short, long)]
    window: Vec<String>,
    /// Log more detail to stderr. Repeatable.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    advances::log(args.level())?;
    let catalog = match (&args.catalog, args.style) {
        (Some(path), _) => Catalog::load(path)?,
        (None, Style::Full) => Catalog::default(),
        (None, Style::Rounded) => Catalog::rounded(),
    };
    let catalog = match args.window.is_empty() {
        true => catalog,
        false => catalog.restrict(&args.window)?,
    };
    let calculator = Calculator::new(catalog);
    println!("=== RNG Advance Distribution Calculator ===");
    let codes = match args.types.is_empty() {
        true => prompt(calculator.catalog())?,
        false => args.types,
    };
    let behaviors = calculator.entities(&codes)?;
    for (i, behavior) in behaviors.iter().enumerate() {
        log::info!("NPC {}: {}", i + 1, behavior);
    }
    let ref reports = calculator.reports(&behaviors);
    println!();
    println!("===================================================");
    println!("    RESULTS — SIDE-BY-SIDE TABLES (Sheets Ready)");
    println!("===================================================");
    println!();
    print!("{}", Table::new(reports, args.style));
    Ok(())
}

/// Asks for the NPC count, then each NPC's type code.
fn prompt(catalog: &Catalog) -> anyhow::Result<Vec<Code>> {
    let lo = catalog.codes().min().unwrap_or_default();
    let hi = catalog.codes().max().unwrap_or_default();
    let count = Input::<usize>::new()
        .with_prompt("Number of NPCs in area")
        .interact_text()?;
    (0..count)
        .map(|i| {
            Input::<Code>::new()
                .with_prompt(format!("NPC {} type ({}-{})", i + 1, lo, hi))
                .validate_with(|code: &Code| -> Result<(), String> {
                    catalog
                        .behavior(*code)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(anyhow::Error::from)
        })
        .collect()
}
