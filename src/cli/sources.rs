use crate::core::data_source::{seed_sources, DataSource};

/// One line per source: checkbox, id, display name.
pub fn format_sources(sources: &[DataSource]) -> Vec<String> {
    let id_width = sources
        .iter()
        .map(|source| source.id.len())
        .max()
        .unwrap_or(0);
    sources
        .iter()
        .map(|source| {
            let mark = if source.enabled { "x" } else { " " };
            format!(
                "  [{mark}] {:<id_width$}  {}",
                source.id,
                source.name,
                id_width = id_width
            )
        })
        .collect()
}

pub fn list_sources() {
    println!("Available data sources:");
    for line in format_sources(&seed_sources()) {
        println!("{line}");
    }
    println!();
    println!("Sources marked [x] are enabled by default.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_enabled_sources_and_aligns_names() {
        let lines = format_sources(&[
            DataSource::new("web", "Web (comp analysis)", false),
            DataSource::new("reviews", "Customer reviews", true),
        ]);
        assert_eq!(
            lines,
            vec![
                "  [ ] web      Web (comp analysis)".to_string(),
                "  [x] reviews  Customer reviews".to_string(),
            ]
        );
    }

    #[test]
    fn empty_list_formats_to_nothing() {
        assert!(format_sources(&[]).is_empty());
    }
}
