//! Positional template filling.

/// Fill a template by substituting one word per `{category}` marker.
///
/// Markers are consumed strictly left to right: occurrence i receives
/// `words[i]`, regardless of whether categories repeat. Words are emitted
/// verbatim and never re-scanned, so a word containing marker syntax cannot
/// affect later substitutions.
///
/// Callers collect exactly one word per extracted placeholder, so the word
/// list and the marker count always match in practice. If the word list is
/// shorter anyway, the remaining markers are left untouched; extra words are
/// ignored. An unterminated `{...` tail or an empty `{}` (both rejected by
/// validation before a template reaches this point) pass through as literal
/// text.
pub fn fill<S: AsRef<str>>(template: &str, words: &[S]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut words = words.iter();
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            name.push(c);
        }

        if closed && !name.is_empty()
            && let Some(word) = words.next()
        {
            result.push_str(word.as_ref());
        } else {
            // Not a substitutable marker (or no word left): keep the text as-is.
            result.push('{');
            result.push_str(&name);
            if closed {
                result.push('}');
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_returns_template_unchanged() {
        let template = "Nothing to fill here.";
        assert_eq!(fill(template, &[] as &[&str]), template);
    }

    #[test]
    fn single_marker_is_replaced() {
        assert_eq!(fill("I saw a {noun} today.", &["cat"]), "I saw a cat today.");
    }

    #[test]
    fn positional_alignment_with_repeated_categories() {
        // First {adjective} -> "big", second {adjective} -> "red", {noun} -> "house".
        // Substitution is positional, never grouped by category.
        let result = fill("The {adjective} and {adjective} {noun}.", &["big", "red", "house"]);
        assert_eq!(result, "The big and red house.");
    }

    #[test]
    fn interleaved_categories_stay_positional() {
        let result = fill("{noun} {verb} {noun}", &["dog", "chases", "cat"]);
        assert_eq!(result, "dog chases cat");
    }

    #[test]
    fn word_containing_marker_syntax_is_not_rescanned() {
        let result = fill("{a} then {b}", &["{b}", "two"]);
        assert_eq!(result, "{b} then two");
    }

    #[test]
    fn adjacent_markers() {
        assert_eq!(fill("{a}{b}", &["x", "y"]), "xy");
    }

    #[test]
    fn marker_at_start_and_end() {
        assert_eq!(fill("{a} middle {b}", &["start", "end"]), "start middle end");
    }

    #[test]
    fn short_word_list_leaves_remaining_markers() {
        assert_eq!(fill("{a} {b}", &["only"]), "only {b}");
    }

    #[test]
    fn extra_words_are_ignored() {
        assert_eq!(fill("{a}", &["one", "two"]), "one");
    }

    #[test]
    fn empty_marker_passes_through_without_consuming_a_word() {
        assert_eq!(fill("{} {noun}", &["cat"]), "{} cat");
    }

    #[test]
    fn unterminated_tail_passes_through_without_consuming_a_word() {
        assert_eq!(fill("{noun} {oops", &["cat", "dog"]), "cat {oops");
    }

    #[test]
    fn multiline_template() {
        let template = "A {adjective} day.\nA {adjective} night.";
        assert_eq!(fill(template, &["bright", "dark"]), "A bright day.\nA dark night.");
    }

    #[test]
    fn unicode_words() {
        assert_eq!(fill("Hello {noun}!", &["日本語"]), "Hello 日本語!");
    }
}
