/// Dictionary-substitution shape converters: alignments, damage and armor
/// phrase lists, languages, requirements, source citations, creature types.
use serde_json::Value;

use crate::dictionaries::{
    ALIGNMENTS, ARMORS, CREATURE_TYPES, DAMAGES, LANGUAGES, REQUIREMENTS, SOURCES,
};
use crate::report::{OverlayReport, OverlayWarning};

/// Alignment is a closed table: a miss is a data-completeness gap, reported
/// rather than silently kept.
pub fn alignment(value: &Value, report: &mut OverlayReport) -> Value {
    let Some(term) = value.as_str() else {
        return value.clone();
    };
    match ALIGNMENTS.lookup(term) {
        Some(translated) => Value::from(translated),
        None => {
            report.warn(OverlayWarning::MissingDictionaryEntry {
                domain: ALIGNMENTS.domain().to_string(),
                term: term.to_string(),
            });
            value.clone()
        }
    }
}

/// Semicolon-delimited damage/condition phrases, rejoined as `"; "`.
pub fn damage(value: &Value) -> Value {
    match value.as_str() {
        Some(text) => Value::from(DAMAGES.substitute_list(text, ';', "; ")),
        None => value.clone(),
    }
}

/// Semicolon-delimited armor restriction phrases.
pub fn armor(value: &Value) -> Value {
    match value.as_str() {
        Some(text) => Value::from(ARMORS.substitute_list(text, ';', "; ")),
        None => value.clone(),
    }
}

/// Spoken-language lists keep the source data's tight `";"` join.
pub fn languages(value: &Value) -> Value {
    match value.as_str() {
        Some(text) if !text.is_empty() => Value::from(LANGUAGES.substitute_list(text, ';', ";")),
        _ => value.clone(),
    }
}

/// Comma-delimited requirement phrases; each element goes through the
/// ordered substring rewrite rather than an exact match.
pub fn requirements(value: &Value) -> Value {
    let Some(text) = value.as_str() else {
        return value.clone();
    };
    let rewritten = text
        .split(',')
        .map(|element| REQUIREMENTS.rewrite_substrings(element))
        .collect::<Vec<_>>()
        .join(", ");
    Value::from(rewritten)
}

/// Source citation `{book, custom}`: both sub-fields looked up with
/// pass-through, siblings untouched.
pub fn source(value: &Value, _report: &mut OverlayReport) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    let mut out = obj.clone();
    for key in ["book", "custom"] {
        if let Some(term) = obj.get(key).and_then(Value::as_str) {
            if let Some(translated) = SOURCES.lookup(term) {
                out.insert(key.to_string(), Value::from(translated));
            }
        }
    }
    Value::Object(out)
}

/// Creature type `{custom, subtype, ...}`: the custom label is a single
/// lookup, the subtype a comma list. Empty sub-fields stay as they are.
pub fn creature_type(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    let mut out = obj.clone();

    if let Some(custom) = obj.get("custom").and_then(Value::as_str) {
        if !custom.is_empty() {
            out.insert("custom".into(), Value::from(CREATURE_TYPES.lookup_or_keep(custom)));
        }
    }
    if let Some(subtype) = obj.get("subtype").and_then(Value::as_str) {
        if !subtype.is_empty() {
            out.insert(
                "subtype".into(),
                Value::from(CREATURE_TYPES.substitute_list(subtype, ',', ", ")),
            );
        }
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn alignment_translates_known_phrases() {
        let mut report = OverlayReport::default();
        assert_eq!(
            alignment(&json!("Lawful Good"), &mut report),
            json!("Loyal Bon")
        );
        assert!(report.is_clean());
    }

    #[test]
    fn alignment_miss_is_a_completeness_warning() {
        let mut report = OverlayReport::default();
        let out = alignment(&json!("unknown phrase"), &mut report);
        assert_eq!(out, json!("unknown phrase"));
        assert!(matches!(
            report.warnings(),
            [OverlayWarning::MissingDictionaryEntry { domain, .. }] if domain == "alignment"
        ));
    }

    #[test]
    fn damage_list_substitutes_each_element() {
        let out = damage(&json!("magical sleep; damage from spells; acid"));
        assert_eq!(out, json!("sommeil magique; dégâts des sorts; acid"));
    }

    #[test]
    fn language_list_keeps_tight_join_and_passes_unknowns() {
        let out = languages(&json!("all; unknown tongue"));
        assert_eq!(out, json!("toutes;unknown tongue"));
    }

    #[test]
    fn creature_type_passes_unknown_race_through() {
        let out = creature_type(&json!({ "value": "humanoid", "subtype": "unknown race" }));
        assert_eq!(out["subtype"], "unknown race");
        assert_eq!(out["value"], "humanoid");
    }

    #[test]
    fn creature_type_translates_subtype_list_and_custom() {
        let out = creature_type(&json!({ "custom": "Shapechanger", "subtype": "elf, dwarf" }));
        assert_eq!(out["custom"], "Métamorphe");
        assert_eq!(out["subtype"], "Elfe, Nain");
    }

    #[test]
    fn requirements_rewrite_composes_substitutions() {
        let out = requirements(&json!("Str 13 or higher, Monk"));
        assert_eq!(out, json!("FOR 13 ou plus, Moine"));
    }

    #[test]
    fn source_book_is_translated_with_pass_through() {
        let mut report = OverlayReport::default();
        let out = source(
            &json!({ "book": "SRD 5.1", "custom": "", "page": 42 }),
            &mut report,
        );
        assert_eq!(out["book"], "DRS 5.1");
        assert_eq!(out["custom"], "");
        assert_eq!(out["page"], 42);
    }
}
