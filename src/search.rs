use crate::record_store::Record;

/// Records sharing one value for the selected field, in file order.
#[derive(Debug, PartialEq)]
pub struct DuplicateGroup<'a> {
    pub value: &'a str,
    pub records: Vec<&'a Record>,
}

/// Records whose `field` value contains `value`, case-insensitively,
/// in file order. Records without the field never match.
pub fn find_matches<'a>(records: &'a [Record], field: &str, value: &str) -> Vec<&'a Record> {
    let needle = value.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .field(field)
                .is_some_and(|v| v.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Group records by exact `field` value and keep only the groups with two
/// or more members. Groups come out in first-seen order of their value;
/// records without the field are skipped.
pub fn find_duplicates<'a>(records: &'a [Record], field: &str) -> Vec<DuplicateGroup<'a>> {
    let mut groups: Vec<DuplicateGroup<'a>> = Vec::new();

    for record in records {
        let Some(value) = record.field(field) else {
            continue;
        };
        match groups.iter_mut().find(|group| group.value == value) {
            Some(group) => group.records.push(record),
            None => groups.push(DuplicateGroup {
                value,
                records: vec![record],
            }),
        }
    }

    groups.retain(|group| group.records.len() > 1);
    groups
}
