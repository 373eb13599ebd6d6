use super::NameEntry;

/// Drops the header line and any blank lines; every remaining line is one
/// name. Commas are not interpreted.
pub fn parse_names(text: &str) -> Vec<NameEntry> {
    text.lines().skip(1).filter_map(NameEntry::new).collect()
}
