use super::{record_mut, require_tokens, resolve_contact, usage, OpResult, Outcome};
use crate::book::AddressBook;
use crate::domain::{normalize_tag_name, split_tags, Note, NoteInsert, TagName};
use crate::error::CommandError;
use crate::resolve::{resolve_note_prefix, resolve_prefix};

/// `addnote <name…> <text…>`; `#word` tokens become tags. A note whose
/// text already exists on the contact is not added again.
pub fn add_note(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 1, usage::ADD_NOTE)?;
    let note = Note::parse(&resolved.operand.join(" "))?;
    let tags = tag_list(&note);
    match record_mut(book, &resolved.name)?.add_note(note) {
        NoteInsert::Added => Ok(Outcome::changed(format!("added note with tags: {tags}"))),
        NoteInsert::AlreadyExists => Ok(Outcome::unchanged(
            "note already exists, use 'editnote' to change it",
        )),
    }
}

/// `editnote <name…> <old text…> <new text…>`; the shortest run of tokens
/// matching an existing note is the old text. Tags come from the new text
/// only.
pub fn edit_note(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 3, usage::EDIT_NOTE)?;
    let resolved = resolve_contact(book, tokens, 1, usage::EDIT_NOTE)?;
    let record = book
        .find(&resolved.name)
        .ok_or(CommandError::ContactNotFound)?;
    let (old_text, rest) =
        resolve_note_prefix(record, resolved.operand).ok_or(CommandError::NoteNotFound)?;
    let note = Note::parse(&rest.join(" "))?;
    let tags = tag_list(&note);
    record_mut(book, &resolved.name)?.edit_note(&old_text, note)?;
    Ok(Outcome::changed(format!("updated note with tags: {tags}")))
}

/// `removenote <name…> [text…]`; without text every note goes.
pub fn remove_note(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 0, usage::REMOVE_NOTE)?;
    let record = record_mut(book, &resolved.name)?;
    if resolved.operand.is_empty() {
        return match record.clear_notes() {
            0 => Ok(Outcome::unchanged(format!(
                "no notes to remove for {}",
                resolved.name
            ))),
            _ => Ok(Outcome::changed(format!(
                "removed all notes for {}",
                resolved.name
            ))),
        };
    }
    record.remove_note(&resolved.operand.join(" "))?;
    Ok(Outcome::changed(format!("removed note for {}", resolved.name)))
}

/// `searchnote <query…>`: notes whose text or owner's name contains the
/// query, case-insensitively.
pub fn search_notes(book: &AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 1, usage::SEARCH_NOTE)?;
    let query = tokens.join(" ").to_lowercase();
    let query = query.as_str();
    let lines: Vec<String> = book
        .iter()
        .flat_map(|record| {
            let name_matches = record.name().as_str().to_lowercase().contains(query);
            record
                .notes()
                .iter()
                .filter(move |note| name_matches || note.text().to_lowercase().contains(query))
                .map(move |note| format!("{}: {}", record.name(), note))
        })
        .collect();
    if lines.is_empty() {
        return Ok(Outcome::unchanged("no notes found"));
    }
    Ok(Outcome::unchanged(lines.join("\n")))
}

/// `addtag <name…> <note text…> <#tag>`
pub fn add_tag(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 2, usage::ADD_TAG)?;
    let Some((raw_tag, text)) = resolved.operand.split_last() else {
        return Err(CommandError::Usage(usage::ADD_TAG));
    };
    let tag = TagName::new(raw_tag)?;
    let note = record_mut(book, &resolved.name)?
        .find_note_mut(&text.join(" "))
        .ok_or(CommandError::NoteNotFound)?;
    let message = format!("added tag {tag} to note: {}", note.text());
    if !note.add_tag(tag.clone()) {
        return Err(CommandError::DuplicateTag(tag.as_str().to_string()));
    }
    Ok(Outcome::changed(message))
}

/// `removetag <name…> <note text…> [#tag]`; the first `#word` in the
/// operand is the tag, and without one every tag of the note is removed.
pub fn remove_tag(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 2, usage::REMOVE_TAG)?;
    let resolved = resolve_prefix(book, tokens, 0).ok_or(CommandError::ContactNotFound)?;
    if resolved.operand.is_empty() {
        return Err(CommandError::Usage(usage::REMOVE_TAG));
    }
    let (text, tags) = split_tags(&resolved.operand.join(" "));
    let note = record_mut(book, &resolved.name)?
        .find_note_mut(&text)
        .ok_or(CommandError::NoteNotFound)?;

    match tags.first().map(|raw| normalize_tag_name(raw)) {
        Some(tag) => {
            if !note.remove_tag(&tag) {
                return Err(CommandError::TagNotFound(tag));
            }
            Ok(Outcome::changed(format!(
                "removed tag #{tag} from note: {}",
                note.text()
            )))
        }
        None => match note.clear_tags() {
            0 => Ok(Outcome::unchanged("this note has no tags")),
            _ => Ok(Outcome::changed(format!(
                "removed all tags from note: {}",
                note.text()
            ))),
        },
    }
}

/// `searchtag <#tag>`
pub fn search_tag(book: &AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 1, usage::SEARCH_TAG)?;
    let tag = normalize_tag_name(&tokens[0]);
    let lines: Vec<String> = book
        .iter()
        .flat_map(|record| {
            record
                .notes_with_tag(&tag)
                .map(move |note| format!("{}: {}", record.name(), note))
        })
        .collect();
    if lines.is_empty() {
        return Ok(Outcome::unchanged(format!("no notes with tag #{tag} found")));
    }
    Ok(Outcome::unchanged(lines.join("\n")))
}

/// `sorttag`: tagged notes grouped under each tag, tags ascending. A note
/// with several tags appears under each of them.
pub fn sort_tags(book: &AddressBook) -> OpResult {
    let groups = book.notes_by_tag();
    if groups.is_empty() {
        return Ok(Outcome::unchanged("no tagged notes to sort"));
    }
    let blocks: Vec<String> = groups
        .iter()
        .map(|(tag, entries)| {
            let mut lines = vec![tag.to_string()];
            lines.extend(
                entries
                    .iter()
                    .map(|(record, note)| format!("{}: {}", record.name(), note)),
            );
            lines.join("\n")
        })
        .collect();
    Ok(Outcome::unchanged(blocks.join("\n\n")))
}

fn tag_list(note: &Note) -> String {
    if note.tags().is_empty() {
        return "none".to_string();
    }
    note.tags()
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{
        add_note, add_tag, edit_note, remove_note, remove_tag, search_notes, search_tag, sort_tags,
    };
    use crate::book::AddressBook;
    use crate::error::{CommandError, ErrorKind};
    use crate::ops::contacts::add_contact;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    fn book() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens("ivan petrov 0987654321")).expect("ivan");
        add_contact(&mut book, &tokens("olena 0661234567")).expect("olena");
        book
    }

    fn notes(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .expect("record")
            .notes()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn add_note_extracts_tags() {
        let mut book = book();
        let outcome =
            add_note(&mut book, &tokens("ivan petrov Meeting at 3 PM #urgent #Work")).expect("added");
        assert_eq!(outcome.message, "added note with tags: urgent, work");
        assert_eq!(
            notes(&book, "ivan petrov"),
            vec!["Meeting at 3 PM [#urgent, #work]"]
        );
    }

    #[test]
    fn duplicate_note_is_a_no_op() {
        let mut book = book();
        add_note(&mut book, &tokens("olena Call back #urgent")).expect("added");
        let outcome = add_note(&mut book, &tokens("olena call BACK #later")).expect("duplicate");
        assert!(!outcome.changed);
        assert_eq!(notes(&book, "olena"), vec!["Call back [#urgent]"]);
    }

    #[test]
    fn add_note_rejects_tag_only_text() {
        let mut book = book();
        let err = add_note(&mut book, &tokens("olena #urgent")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn edit_note_replaces_text_and_tags() {
        let mut book = book();
        add_note(&mut book, &tokens("olena Meeting at 3 #urgent")).expect("added");
        edit_note(&mut book, &tokens("olena meeting at 3 Meeting at 4 #moved")).expect("edited");
        assert_eq!(notes(&book, "olena"), vec!["Meeting at 4 [#moved]"]);
        assert_eq!(
            edit_note(&mut book, &tokens("olena unknown text here")),
            Err(CommandError::NoteNotFound)
        );
    }

    #[test]
    fn edit_note_rejects_collision() {
        let mut book = book();
        add_note(&mut book, &tokens("olena first")).expect("first");
        add_note(&mut book, &tokens("olena second")).expect("second");
        let err = edit_note(&mut book, &tokens("olena first second")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Duplicate);
    }

    #[test]
    fn remove_note_single_and_all() {
        let mut book = book();
        add_note(&mut book, &tokens("olena one #a")).expect("one");
        add_note(&mut book, &tokens("olena two")).expect("two");
        remove_note(&mut book, &tokens("olena one #ignored")).expect("removed");
        assert_eq!(notes(&book, "olena"), vec!["two"]);
        assert_eq!(
            remove_note(&mut book, &tokens("olena three")),
            Err(CommandError::NoteNotFound)
        );
        assert!(remove_note(&mut book, &tokens("olena")).expect("all").changed);
        assert!(!remove_note(&mut book, &tokens("olena")).expect("none").changed);
    }

    #[test]
    fn search_notes_matches_name_or_text() {
        let mut book = book();
        add_note(&mut book, &tokens("olena Buy milk")).expect("added");
        add_note(&mut book, &tokens("ivan petrov Call Olena")).expect("added");
        let outcome = search_notes(&book, &tokens("olena")).expect("search");
        assert_eq!(
            outcome.message,
            "Ivan Petrov: Call Olena\nOlena: Buy milk"
        );
        assert_eq!(
            search_notes(&book, &tokens("bread")).expect("search").message,
            "no notes found"
        );
    }

    #[test]
    fn add_tag_to_existing_note() {
        let mut book = book();
        add_note(&mut book, &tokens("olena Project planning")).expect("added");
        add_tag(&mut book, &tokens("olena project planning #Meeting")).expect("tagged");
        assert_eq!(notes(&book, "olena"), vec!["Project planning [#meeting]"]);
        assert_eq!(
            add_tag(&mut book, &tokens("olena project planning #meeting")),
            Err(CommandError::DuplicateTag("meeting".to_string()))
        );
        assert_eq!(
            add_tag(&mut book, &tokens("olena other note #meeting")),
            Err(CommandError::NoteNotFound)
        );
        let err = add_tag(&mut book, &tokens("olena project planning #bad-tag")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn remove_tag_without_argument_clears_tags() {
        let mut book = book();
        add_note(&mut book, &tokens("olena Meeting #urgent")).expect("added");
        let outcome = remove_tag(&mut book, &tokens("olena meeting")).expect("cleared");
        assert!(outcome.changed);
        assert_eq!(notes(&book, "olena"), vec!["Meeting"]);
        let outcome = remove_tag(&mut book, &tokens("olena meeting")).expect("nothing");
        assert!(!outcome.changed);
    }

    #[test]
    fn remove_specific_tag() {
        let mut book = book();
        add_note(&mut book, &tokens("olena Meeting #urgent #work")).expect("added");
        remove_tag(&mut book, &tokens("olena meeting #URGENT")).expect("removed");
        assert_eq!(notes(&book, "olena"), vec!["Meeting [#work]"]);
        assert_eq!(
            remove_tag(&mut book, &tokens("olena meeting #urgent")),
            Err(CommandError::TagNotFound("urgent".to_string()))
        );
        assert_eq!(
            remove_tag(&mut book, &tokens("olena")).unwrap_err().kind(),
            ErrorKind::Usage
        );
    }

    #[test]
    fn search_and_sort_by_tag() {
        let mut book = book();
        add_note(&mut book, &tokens("olena Report #work")).expect("added");
        add_note(&mut book, &tokens("ivan petrov Call #work #family")).expect("added");
        let outcome = search_tag(&book, &tokens("#WORK")).expect("search");
        assert_eq!(
            outcome.message,
            "Ivan Petrov: Call [#family, #work]\nOlena: Report [#work]"
        );
        let sorted = sort_tags(&book).expect("sort");
        assert_eq!(
            sorted.message,
            "#family\nIvan Petrov: Call [#family, #work]\n\n\
             #work\nIvan Petrov: Call [#family, #work]\nOlena: Report [#work]"
        );
    }
}
