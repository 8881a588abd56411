/// Term substitution over static, per-domain tables.
///
/// Entries keep their declared order: the requirements rewrite replaces
/// substrings over every key in table order, so later entries may rewrite
/// text produced by earlier ones and the order is part of the contract.
#[derive(Debug, Clone)]
pub struct Dictionary {
    domain: &'static str,
    entries: Vec<(String, String)>,
}

impl Dictionary {
    pub fn new(domain: &'static str, pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(key, value)| (key.to_lowercase(), (*value).to_string()))
            .collect();
        Self { domain, entries }
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Trimmed, case-insensitive exact match.
    pub fn lookup(&self, term: &str) -> Option<&str> {
        let needle = term.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == needle)
            .map(|(_, value)| value.as_str())
    }

    /// Exact match with pass-through on miss.
    pub fn lookup_or_keep(&self, term: &str) -> String {
        match self.lookup(term) {
            Some(translated) => translated.to_string(),
            None => term.trim().to_string(),
        }
    }

    /// Substitute every element of a delimited list independently, keeping
    /// element order, then rejoin with the field's canonical separator.
    pub fn substitute_list(&self, text: &str, split: char, joiner: &str) -> String {
        text.split(split)
            .map(|element| self.lookup_or_keep(element))
            .collect::<Vec<_>>()
            .join(joiner)
    }

    /// Lowercase the term, then replace every occurrence of every key in
    /// declared table order. Deliberately not an exact match: partial phrases
    /// ("str 13 or higher") get each known piece rewritten in place.
    pub fn rewrite_substrings(&self, term: &str) -> String {
        let mut rewritten = term.trim().to_lowercase();
        for (key, value) in &self.entries {
            rewritten = rewritten.replace(key.as_str(), value);
        }
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Dictionary {
        Dictionary::new(
            "test",
            &[
                ("str", "FOR"),
                ("or higher", "ou plus"),
                ("dwarf", "Nain"),
            ],
        )
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let dict = table();
        assert_eq!(dict.lookup("  Dwarf "), Some("Nain"));
        assert_eq!(dict.lookup("DWARF"), Some("Nain"));
        assert_eq!(dict.lookup("gnome"), None);
    }

    #[test]
    fn miss_passes_through() {
        let dict = table();
        assert_eq!(dict.lookup_or_keep("unknown race"), "unknown race");
    }

    #[test]
    fn list_substitution_preserves_order_without_dedup() {
        let dict = table();
        assert_eq!(
            dict.substitute_list("dwarf; gnome; dwarf", ';', "; "),
            "Nain; gnome; Nain"
        );
    }

    #[test]
    fn substring_rewrite_applies_all_keys_in_order() {
        let dict = table();
        assert_eq!(dict.rewrite_substrings("Str 13 or higher"), "FOR 13 ou plus");
    }

    #[test]
    fn substring_rewrite_is_deterministic() {
        let dict = table();
        let first = dict.rewrite_substrings("str 13 or higher");
        for _ in 0..10 {
            assert_eq!(dict.rewrite_substrings("str 13 or higher"), first);
        }
    }
}
