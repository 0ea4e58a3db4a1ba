// src/utils/report.rs

use crate::catalog::ElementCatalog;
use crate::layout::{row_label, BohrLayout, PeriodicGrid, Tile};
use crate::model::{Category, ElementRecord};

/// Tabular listing of search results, truncated after `max_rows`.
pub fn search_table(results: &[&ElementRecord], max_rows: usize) -> String {
    if results.is_empty() {
        return "No matching elements.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("--------------------------------------------------------------\n");
    out.push_str(&format!(
        "{:<4} {:<4} {:<15} {:<22} {:>10}\n",
        "Z", "Sym", "Name", "Category", "Weight"
    ));
    out.push_str("--------------------------------------------------------------\n");

    for e in results.iter().take(max_rows) {
        out.push_str(&format!(
            "{:<4} {:<4} {:<15} {:<22} {:>10.3}\n",
            e.atomic_number, e.symbol, e.name, e.category.label(), e.atomic_weight
        ));
    }

    if results.len() > max_rows {
        out.push_str(&format!("... and {} more elements.\n", results.len() - max_rows));
    }
    out
}

/// Full description of one element.
pub fn element_detail(e: &ElementRecord) -> String {
    let pos = e.position();
    let mut out = String::new();
    out.push_str(&format!("{} ({}) - {}\n", e.name, e.symbol, e.category));
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!("Atomic Number:  {}\n", e.atomic_number));
    out.push_str(&format!("Atomic Weight:  {:.3}\n", e.atomic_weight));
    out.push_str(&format!("State:          {}\n", e.room_temp_state));
    out.push_str(&format!(
        "Group/Period:   {} / {}\n",
        pos.group,
        pos.chemical_period()
    ));
    out.push_str(&format!("Configuration:  {}\n", e.electron_configuration()));
    out.push_str(&format!("Shells:         {}\n", join_numbers(&e.shells())));

    if let Some(mp) = e.melting_point {
        out.push_str(&format!("Melting Point:  {:.2} K\n", mp));
    }
    if let Some(bp) = e.boiling_point {
        out.push_str(&format!("Boiling Point:  {:.2} K\n", bp));
    }
    if let Some(en) = e.electronegativity {
        out.push_str(&format!("Electroneg.:    {:.2}\n", en));
    }
    match (e.discovery_year, &e.discovered_by) {
        (Some(y), Some(who)) => out.push_str(&format!("Discovered:     {} by {}\n", y, who)),
        (Some(y), None) => out.push_str(&format!("Discovered:     {}\n", y)),
        _ => {}
    }

    section(&mut out, "Fact", std::slice::from_ref(&e.fact));
    section(&mut out, "History", std::slice::from_ref(&e.history));
    section(&mut out, "Applications", &e.applications);
    if let Some(facts) = &e.fun_facts {
        section(&mut out, "Fun Facts", facts);
    }
    if let Some(compounds) = &e.compounds {
        let lines: Vec<String> = compounds
            .iter()
            .map(|c| format!("{}: {}", c.name, c.description))
            .collect();
        section(&mut out, "Compounds", &lines);
    }
    if let Some(refs) = &e.cultural_references {
        section(&mut out, "In Culture", refs);
    }
    if let Some(notes) = &e.sustainability_notes {
        section(&mut out, "Sustainability", std::slice::from_ref(notes));
    }
    if !e.wikipedia_link.is_empty() {
        out.push_str(&format!("\nLearn more: {}\n", e.wikipedia_link));
    }
    out
}

fn section(out: &mut String, title: &str, lines: &[String]) {
    let lines: Vec<&String> = lines.iter().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}:\n", title));
    if lines.len() == 1 {
        out.push_str(&format!("  {}\n", lines[0]));
    } else {
        for l in lines {
            out.push_str(&format!("  • {}\n", l));
        }
    }
}

fn join_numbers(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text rendering of the periodic grid. Tiles outside `filter` print as dots.
pub fn grid_text(grid: &PeriodicGrid, filter: Option<Category>) -> String {
    let mut out = String::from("   ");
    for g in 1..=18 {
        out.push_str(&format!("{:>4}", g));
    }
    out.push('\n');

    for (row, tiles) in grid.rows() {
        out.push_str(&format!("{:>2} ", row_label(row)));
        for tile in tiles {
            let cell = match tile {
                Tile::Empty => String::new(),
                _ if !tile.matches(filter) => "·".to_string(),
                Tile::Element(e) => e.symbol.clone(),
                Tile::Placeholder { category, .. } => match category {
                    Category::Lanthanide => "*".to_string(),
                    _ => "**".to_string(),
                },
            };
            out.push_str(&format!("{:>4}", cell));
        }
        out.push('\n');
    }
    out.push_str("\n *  Lanthanides 57-71 (row L)\n ** Actinides 89-103 (row A)\n");
    out
}

/// Shell occupancy and orbit radii for a Bohr drawing.
pub fn bohr_summary(e: &ElementRecord, layout: &BohrLayout) -> String {
    let mut out = format!(
        "Bohr model of {} (Z = {}), outer radius {:.1}\n",
        e.name, e.atomic_number, layout.max_orbit_radius
    );
    out.push_str(&format!("{:<6} {:>9} {:>10}\n", "Ring", "Radius", "Electrons"));
    for ring in &layout.rings {
        out.push_str(&format!(
            "{:<6} {:>9.2} {:>10}\n",
            ring.index + 1,
            ring.radius,
            ring.electrons
        ));
    }
    out
}

/// Element counts per category.
pub fn category_summary(catalog: &ElementCatalog) -> String {
    let mut out = String::new();
    let mut categories = catalog.categories();
    categories.sort_by_key(|c| c.label());
    for c in categories {
        let members = catalog.in_category(c);
        let symbols: Vec<&str> = members.iter().map(|e| e.symbol.as_str()).collect();
        out.push_str(&format!("{:<22} {:>3}  {}\n", c.label(), members.len(), symbols.join(" ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ElementCatalog {
        ElementCatalog::build(crate::io::load_bundled().unwrap()).unwrap()
    }

    #[test]
    fn test_search_table_truncates() {
        let c = catalog();
        let results = c.search("");
        let table = search_table(&results, 5);
        assert!(table.contains("Hydrogen"));
        assert!(!table.contains("Carbon"));
        assert!(table.contains("... and 113 more elements."));
        assert_eq!(search_table(&[], 5), "No matching elements.\n");
    }

    #[test]
    fn test_detail_lists_derived_fields() {
        let c = catalog();
        let text = element_detail(c.by_symbol("Fe").unwrap());
        assert!(text.starts_with("Iron (Fe) - Transition Metal"));
        assert!(text.contains("Group/Period:   8 / 4"));
        assert!(text.contains("Shells:         2, 8, 14, 2"));
        assert!(text.contains("Applications:"));

        let ce = element_detail(c.by_symbol("Ce").unwrap());
        assert!(ce.contains("Group/Period:   4 / 6"));
    }

    #[test]
    fn test_grid_text_marks_filter() {
        let c = catalog();
        let grid = PeriodicGrid::build(c.records());
        let all = grid_text(&grid, None);
        assert!(all.contains("Fe"));
        assert!(all.contains(" L "));

        let noble = grid_text(&grid, Some(Category::NobleGas));
        assert!(noble.contains("He"));
        assert!(!noble.contains("Fe"));
    }

    #[test]
    fn test_category_summary_is_sorted() {
        let text = category_summary(&catalog());
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("Actinide"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_bohr_summary_lists_seven_rings() {
        let c = catalog();
        let na = c.by_symbol("Na").unwrap();
        let text = bohr_summary(na, &BohrLayout::for_element(na, 160.0));
        assert_eq!(text.lines().count(), 2 + 7);
    }
}
