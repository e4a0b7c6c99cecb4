//! Print every range of a library as a text matrix with action shares.
//!
//! Usage: `rangeboard [LIBRARY_PATH]`. Without a path the library from the
//! settings (or the platform data dir) is used.

use anyhow::{Context, Result};
use clap::Parser;
use rangeboard::action::{ActionButton, find_action};
use rangeboard::constants::{FOLD_ACTION_ID, FOLD_ACTION_NAME};
use rangeboard::hand::HandGrid;
use rangeboard::settings::Settings;
use rangeboard::stats::RangeStats;
use rangeboard::store::{Range, RangeLibrary};
use std::path::PathBuf;

/// Print every range of a preflop range library.
#[derive(Parser, Debug)]
#[command(name = "rangeboard", version, about)]
struct Args {
    /// Library file to print; defaults to the configured library
    library: Option<PathBuf>,
}

fn action_name<'a>(id: &'a str, actions: &'a [ActionButton]) -> &'a str {
    if id == FOLD_ACTION_ID {
        return FOLD_ACTION_NAME;
    }
    find_action(id, actions).map_or(id, ActionButton::name)
}

fn print_range(range: &Range, actions: &[ActionButton]) {
    for row in HandGrid::standard().rows() {
        let line: Vec<String> = row
            .iter()
            .map(|hand| {
                let label = if range.hands.contains_key(hand) {
                    hand.notation()
                } else {
                    ".".to_string()
                };
                format!("{:<4}", label)
            })
            .collect();
        println!("  {}", line.join(" ").trim_end());
    }

    let stats = RangeStats::compute(&range.hands, actions);
    for (id, combos) in stats.iter() {
        println!(
            "  {:<12} {:>6.2}%  ({:.1} combos)",
            action_name(id, actions),
            stats.percent_of_total(id),
            combos
        );
    }
    println!("  {:<12} {:.1} combos unassigned", "", stats.unassigned_combos());
}

fn main() -> Result<()> {
    rangeboard::logging::init();

    let args = Args::parse();
    let settings = Settings::load();
    let path = args
        .library
        .or_else(|| settings.library_path())
        .context("no library path given and no data directory available")?;

    let library = RangeLibrary::load_from(&path)
        .with_context(|| format!("failed to load library {}", path.display()))?;

    for (folder, range) in library.ranges() {
        println!("{} / {}", folder.name, range.name);
        print_range(range, &library.action_buttons);
        println!();
    }
    Ok(())
}
