// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A two-section settings screen driven by `SectionMap`.
//!
//! This example shows the division of labor between the map and a host
//! widget: toggles flip external state, the host re-queries the map, and the
//! difference between two query rounds is what a real list widget would turn
//! into insert/delete updates.
//!
//! Run:
//! - `cargo run -p coppice_demos --example settings_list`

use std::cell::Cell;
use std::rc::Rc;

use coppice_section_map::SectionMap;

/// The static data source: everything that could ever be shown.
const SECTIONS: [(&str, &[&str]); 2] = [
    ("General", &["Name", "Language", "Diagnostics"]),
    ("Advanced", &["Proxy", "Flags"]),
];

/// Prints the compacted view the way a list widget would render it.
fn print_screen(map: &SectionMap) {
    for (section, (title, rows)) in SECTIONS.iter().enumerate() {
        let Some(dynamic_section) = map.dynamic_section(section).visible() else {
            continue;
        };
        println!("  [{dynamic_section}] {title}");
        for (row, label) in rows.iter().enumerate() {
            if let Some((_, dynamic_row)) = map.dynamic_row(section, row).visible() {
                println!("    [{dynamic_row}] {label}");
            }
        }
    }
}

fn main() {
    let advanced_enabled = Rc::new(Cell::new(false));
    let diagnostics_enabled = Rc::new(Cell::new(false));

    let mut map = SectionMap::new();
    {
        let advanced = advanced_enabled.clone();
        map.set_section_condition(1, move || advanced.get());
    }
    {
        let diagnostics = diagnostics_enabled.clone();
        map.set_row_condition(0, 2, move || diagnostics.get());
    }

    println!("Initial screen (advanced off, diagnostics off):");
    print_screen(&map);

    // The map does not watch these cells; flipping them and re-querying is
    // the host's job.
    advanced_enabled.set(true);
    diagnostics_enabled.set(true);
    println!("\nAfter enabling both toggles:");
    print_screen(&map);

    // Resolve a "tap" on the last visible section back to the data source.
    let tapped = 1;
    let section = map.static_section(tapped);
    println!(
        "\nA tap on visible section {tapped} lands on data-source section {section} ({}).",
        SECTIONS[section].0
    );
}
