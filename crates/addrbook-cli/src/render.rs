use addrbook_core::{AddressBook, Note, Phone, Record};

const HEADERS: [&str; 6] = ["Name", "Phones", "Birthday", "Email", "Address", "Notes"];
const EMPTY: &str = "-";

/// Plain-text table of every contact in display order. Each note takes its
/// own line inside the Notes column.
pub fn contacts_table(book: &AddressBook) -> String {
    if book.is_empty() {
        return "address book is empty".to_string();
    }

    let rows: Vec<[Vec<String>; 6]> = book.iter().map(row_cells).collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            for line in cell {
                *width = (*width).max(line.chars().count());
            }
        }
    }

    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");
    let mut lines = vec![format_line(&HEADERS.map(str::to_string), &widths), separator];
    for row in &rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for index in 0..height {
            let cells = [0, 1, 2, 3, 4, 5].map(|column| {
                row[column]
                    .get(index)
                    .cloned()
                    .unwrap_or_default()
            });
            lines.push(format_line(&cells, &widths));
        }
    }
    lines.join("\n")
}

fn row_cells(record: &Record) -> [Vec<String>; 6] {
    let phones = if record.phones().is_empty() {
        EMPTY.to_string()
    } else {
        record
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let notes = if record.notes().is_empty() {
        vec![EMPTY.to_string()]
    } else {
        record.notes().iter().map(note_cell).collect()
    };
    [
        vec![record.name().to_string()],
        vec![phones],
        vec![optional(record.birthday())],
        vec![optional(record.email())],
        vec![optional(record.address())],
        notes,
    ]
}

fn note_cell(note: &Note) -> String {
    let mut cell = note.text().to_string();
    for tag in note.tags() {
        cell.push(' ');
        cell.push_str(&tag.to_string());
    }
    cell
}

fn optional(value: Option<&impl ToString>) -> String {
    value
        .map(ToString::to_string)
        .unwrap_or_else(|| EMPTY.to_string())
}

fn format_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
