const GROUPS: &[(&str, &[&str])] = &[
    ("general", &["hello", "help", "exit", "close"]),
    (
        "contacts",
        &["addcontact", "editname", "removecontact", "search", "all", "backup"],
    ),
    (
        "phones",
        &["addphone", "changephone", "removephone", "showphone"],
    ),
    (
        "birthdays",
        &["addbday", "showbday", "editbday", "removebday", "upcomingbdays"],
    ),
    ("email", &["addemail", "editemail", "removeemail"]),
    ("address", &["addaddress", "editaddress", "removeaddress"]),
    (
        "notes",
        &[
            "addnote",
            "editnote",
            "removenote",
            "searchnote",
            "addtag",
            "removetag",
            "searchtag",
            "sorttag",
        ],
    ),
];

pub fn text() -> String {
    let width = GROUPS
        .iter()
        .map(|(group, _)| group.len())
        .max()
        .unwrap_or_default();
    let mut lines = vec!["available commands:".to_string()];
    lines.extend(
        GROUPS
            .iter()
            .map(|(group, names)| format!("  {group:<width$}  {}", names.join(", "))),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{text, GROUPS};
    use crate::commands::command_names;

    #[test]
    fn help_lists_every_command() {
        let listed: Vec<&str> = GROUPS.iter().flat_map(|(_, names)| names.iter().copied()).collect();
        for name in command_names() {
            assert!(listed.contains(&name), "{name} missing from help");
        }
        assert!(text().starts_with("available commands:"));
    }
}
