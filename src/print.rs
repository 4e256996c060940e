use std::fmt::Write;

use colored::Colorize;

use crate::record_store::Record;
use crate::search::DuplicateGroup;

pub const NO_RESULTS: &str = "Your query yielded no results";

/// One record per line, in the order they were matched.
pub fn render_matches(matches: &[&Record]) -> String {
    if matches.is_empty() {
        return NO_RESULTS.to_string();
    }

    matches
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Each group under a header with the shared value and member count,
/// members indented one level.
pub fn render_duplicates(groups: &[DuplicateGroup]) -> String {
    if groups.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{} ({} clients)",
            group.value.bold(),
            group.records.len()
        );
        for record in &group.records {
            let _ = writeln!(out, "  {record}");
        }
    }
    out.truncate(out.trim_end_matches('\n').len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_store::parse;
    use crate::search::{find_duplicates, find_matches};

    fn records() -> Vec<Record> {
        parse(
            r#"[
                {"name": "Jane Smith", "email": "jane.smith@yahoo.com"},
                {"name": "Another Jane Smith", "email": "jane.smith@yahoo.com"},
                {"name": "Joe Kelly", "email": "joe.kelly@yahoo.com"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_matches_render_the_no_results_message() {
        assert_eq!(render_matches(&[]), NO_RESULTS);
        assert_eq!(render_duplicates(&[]), NO_RESULTS);
    }

    #[test]
    fn matches_render_one_record_per_line() {
        let records = records();
        let matches = find_matches(&records, "name", "Jane");
        let rendered = render_matches(&matches);
        assert_eq!(
            rendered,
            "name: Jane Smith, email: jane.smith@yahoo.com\n\
             name: Another Jane Smith, email: jane.smith@yahoo.com"
        );
    }

    #[test]
    fn duplicate_groups_render_header_and_members() {
        colored::control::set_override(false);
        let records = records();
        let groups = find_duplicates(&records, "email");
        let rendered = render_duplicates(&groups);
        assert_eq!(
            rendered,
            "jane.smith@yahoo.com (2 clients)\n\
             \u{20}\u{20}name: Jane Smith, email: jane.smith@yahoo.com\n\
             \u{20}\u{20}name: Another Jane Smith, email: jane.smith@yahoo.com"
        );
        colored::control::unset_override();
    }
}
