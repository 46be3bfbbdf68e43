//! "Did you mean" hints for mistyped command names.

const MIN_SIMILARITY: f64 = 0.6;
const MAX_SUGGESTIONS: usize = 5;

/// Commands starting with `input` win; otherwise up to five commands whose
/// similarity is at least 0.6, best first.
pub fn similar_commands<'a>(input: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    let prefixed: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.starts_with(input))
        .collect();
    if !prefixed.is_empty() {
        return prefixed;
    }

    let mut scored: Vec<(f64, &str)> = candidates
        .iter()
        .map(|candidate| (similarity(input, candidate), *candidate))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}

pub fn suggest_command(input: &str, candidates: &[&str]) -> String {
    match similar_commands(input, candidates).as_slice() {
        [] => format!("unknown command '{input}', type 'help' to see available commands"),
        [single] => format!("unknown command '{input}', did you mean '{single}'?"),
        several => {
            let quoted = several
                .iter()
                .map(|name| format!("'{name}'"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("unknown command '{input}', did you mean one of: {quoted}?")
        }
    }
}

/// `2 * common / total`, where `common` is the longest common subsequence.
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * longest_common_subsequence(&a, &b) as f64 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0; b.len() + 1];
    let mut current = vec![0; b.len() + 1];
    for &left in a {
        for (j, &right) in b.iter().enumerate() {
            current[j + 1] = if left == right {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::{similar_commands, similarity, suggest_command};

    const NAMES: &[&str] = &[
        "addcontact",
        "addphone",
        "addbday",
        "help",
        "hello",
        "search",
        "searchnote",
        "all",
    ];

    #[test]
    fn prefix_matches_come_first() {
        assert_eq!(
            similar_commands("add", NAMES),
            vec!["addcontact", "addphone", "addbday"]
        );
        assert_eq!(similar_commands("search", NAMES), vec!["search", "searchnote"]);
    }

    #[test]
    fn close_typos_are_suggested() {
        assert_eq!(similar_commands("adcontact", NAMES), vec!["addcontact"]);
        let hits = similar_commands("hepl", NAMES);
        assert_eq!(hits.first(), Some(&"help"));
        assert!(hits.len() <= 5);
    }

    #[test]
    fn unrelated_input_points_to_help() {
        assert!(similar_commands("xyz", NAMES).is_empty());
        assert_eq!(
            suggest_command("xyz", NAMES),
            "unknown command 'xyz', type 'help' to see available commands"
        );
        assert_eq!(
            suggest_command("adcontact", NAMES),
            "unknown command 'adcontact', did you mean 'addcontact'?"
        );
    }

    #[test]
    fn similarity_is_symmetric_and_bounded() {
        assert_eq!(similarity("help", "help"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("hepl", "help"), similarity("help", "hepl"));
    }
}
