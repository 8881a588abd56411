/// Recursive merge converters for nested collections: status effects,
/// sub-activities, summon profiles. Each element resolves its own fragment
/// by id then name; unmatched elements are reported and left unmodified.
use serde_json::{Map, Value};

use crate::report::{OverlayReport, OverlayWarning};
use crate::translation::resolve_fragment;

fn merge_string(target: &mut Map<String, Value>, key: &str, translated: Option<&Value>) {
    if let Some(text) = translated.and_then(Value::as_str) {
        target.insert(key.to_string(), Value::from(text));
    }
}

fn merge_string_at(
    target: &mut Map<String, Value>,
    outer: &str,
    inner: &str,
    translated: Option<&Value>,
) {
    let Some(text) = translated.and_then(Value::as_str) else {
        return;
    };
    let nested = target
        .entry(outer.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(nested) = nested.as_object_mut() {
        nested.insert(inner.to_string(), Value::from(text));
    }
}

/// Status-effect list: match each effect by name, merge name and
/// description.
pub fn effects(value: &Value, translations: Option<&Value>, report: &mut OverlayReport) -> Value {
    let Some(translations) = translations.and_then(Value::as_object) else {
        return value.clone();
    };
    let Some(list) = value.as_array() else {
        return value.clone();
    };

    let merged = list
        .iter()
        .map(|effect| {
            let Some(obj) = effect.as_object() else {
                return effect.clone();
            };
            let name = obj.get("name").and_then(Value::as_str);
            let matched = resolve_fragment(translations, None, name);
            let Some(fragment) = matched.fragment().and_then(Value::as_object) else {
                report.warn(OverlayWarning::MissingTranslation {
                    id: String::new(),
                    name: name.unwrap_or_default().to_string(),
                });
                return effect.clone();
            };

            let mut out = obj.clone();
            merge_string(&mut out, "name", fragment.get("name"));
            merge_string(&mut out, "description", fragment.get("description"));
            Value::Object(out)
        })
        .collect();
    Value::Array(merged)
}

/// Sub-activity map keyed by activity id. The fragment key is the stable
/// id first, then the activity name, falling back to the activity type for
/// unnamed activities.
pub fn activities(
    value: &Value,
    translations: Option<&Value>,
    report: &mut OverlayReport,
) -> Value {
    let Some(translations) = translations.and_then(Value::as_object) else {
        return value.clone();
    };
    let Some(map) = value.as_object() else {
        return value.clone();
    };

    let mut out = map.clone();
    for activity in out.values_mut() {
        let Some(obj) = activity.as_object_mut() else {
            continue;
        };

        let id = obj.get("_id").and_then(Value::as_str).map(str::to_string);
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let name_key = name
            .clone()
            .or_else(|| obj.get("type").and_then(Value::as_str).map(str::to_string));
        let matched = resolve_fragment(translations, id.as_deref(), name_key.as_deref());
        let Some(fragment) = matched.fragment().and_then(Value::as_object).cloned() else {
            // Unnamed activities resolve through the type key; only a named
            // activity is expected to have a fragment.
            if let Some(name) = name {
                report.warn(OverlayWarning::MissingTranslation {
                    id: id.unwrap_or_default(),
                    name,
                });
            }
            continue;
        };

        merge_string(obj, "name", fragment.get("name"));
        merge_string_at(obj, "activation", "condition", fragment.get("condition"));
        merge_string_at(obj, "description", "chatFlavor", fragment.get("chatFlavor"));

        if let Some(profiles) = obj.get("profiles") {
            let merged = summon_profiles(profiles, fragment.get("profiles"), report);
            obj.insert("profiles".into(), merged);
        }
    }
    Value::Object(out)
}

/// Summon-profile list: match by name, merge the name only.
pub fn summon_profiles(
    value: &Value,
    translations: Option<&Value>,
    report: &mut OverlayReport,
) -> Value {
    let Some(translations) = translations.and_then(Value::as_object) else {
        return value.clone();
    };
    let Some(list) = value.as_array() else {
        return value.clone();
    };

    let merged = list
        .iter()
        .map(|profile| {
            let Some(obj) = profile.as_object() else {
                return profile.clone();
            };
            let name = obj.get("name").and_then(Value::as_str);
            let fragment = resolve_fragment(translations, None, name)
                .fragment()
                .and_then(Value::as_object);
            match fragment {
                Some(fragment) => {
                    let mut out = obj.clone();
                    merge_string(&mut out, "name", fragment.get("name"));
                    Value::Object(out)
                }
                None => {
                    report.warn(OverlayWarning::MissingTranslation {
                        id: String::new(),
                        name: name.unwrap_or_default().to_string(),
                    });
                    profile.clone()
                }
            }
        })
        .collect();
    Value::Array(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn effects_merge_by_name_and_keep_unmatched() {
        let mut report = OverlayReport::default();
        let translations = json!({
            "Rage": { "name": "Rage", "description": "Description traduite" }
        });
        let out = effects(
            &json!([
                { "name": "Rage", "description": "English", "icon": "rage.svg" },
                { "name": "Frenzy", "description": "English" }
            ]),
            Some(&translations),
            &mut report,
        );
        assert_eq!(out[0]["description"], "Description traduite");
        assert_eq!(out[0]["icon"], "rage.svg");
        assert_eq!(out[1]["description"], "English");
        assert_eq!(report.missing_translations(), 1);
    }

    #[test]
    fn effects_without_translations_pass_through() {
        let mut report = OverlayReport::default();
        let list = json!([{ "name": "Rage" }]);
        assert_eq!(effects(&list, None, &mut report), list);
        assert!(report.is_clean());
    }

    #[test]
    fn activities_resolve_by_id_then_name_then_type() {
        let mut report = OverlayReport::default();
        let translations = json!({
            "act001": { "name": "Frappe" },
            "attack": { "name": "Attaque", "condition": "en mêlée" }
        });
        let out = activities(
            &json!({
                "act001": { "_id": "act001", "name": "Strike", "type": "attack" },
                "act002": { "_id": "act002", "name": "", "type": "attack",
                            "activation": { "type": "action", "condition": "" } }
            }),
            Some(&translations),
            &mut report,
        );
        assert_eq!(out["act001"]["name"], "Frappe");
        assert_eq!(out["act002"]["name"], "Attaque");
        assert_eq!(out["act002"]["activation"]["condition"], "en mêlée");
        assert_eq!(out["act002"]["activation"]["type"], "action");
    }

    #[test]
    fn activities_recurse_into_summon_profiles() {
        let mut report = OverlayReport::default();
        let translations = json!({
            "Summon Beast": {
                "name": "Convocation de bête",
                "chatFlavor": "texte d'ambiance",
                "profiles": { "Bear": { "name": "Ours" } }
            }
        });
        let out = activities(
            &json!({
                "act001": {
                    "_id": "act001",
                    "name": "Summon Beast",
                    "type": "summon",
                    "description": { "chatFlavor": "" },
                    "profiles": [
                        { "name": "Bear", "level": 2 },
                        { "name": "Wolf", "level": 2 }
                    ]
                }
            }),
            Some(&translations),
            &mut report,
        );
        assert_eq!(out["act001"]["name"], "Convocation de bête");
        assert_eq!(out["act001"]["description"]["chatFlavor"], "texte d'ambiance");
        assert_eq!(out["act001"]["profiles"][0]["name"], "Ours");
        assert_eq!(out["act001"]["profiles"][0]["level"], 2);
        assert_eq!(out["act001"]["profiles"][1]["name"], "Wolf");
        assert_eq!(report.missing_translations(), 1);
    }

    #[test]
    fn named_activity_without_fragment_is_reported() {
        let mut report = OverlayReport::default();
        let translations = json!({ "act001": { "name": "Frappe" } });
        let out = activities(
            &json!({
                "act002": { "_id": "act002", "name": "Cleave", "type": "attack" },
                "act003": { "_id": "act003", "name": "", "type": "utility" }
            }),
            Some(&translations),
            &mut report,
        );
        // The named miss is reported, the type-keyed one is not.
        assert_eq!(out["act002"]["name"], "Cleave");
        assert_eq!(report.missing_translations(), 1);
    }

    #[test]
    fn summon_profile_without_fragment_is_reported() {
        let mut report = OverlayReport::default();
        let translations = json!({ "Bear": { "name": "Ours" } });
        let out = summon_profiles(
            &json!([{ "name": "Bear" }, { "name": "Wolf" }]),
            Some(&translations),
            &mut report,
        );
        assert_eq!(out[0]["name"], "Ours");
        assert_eq!(out[1]["name"], "Wolf");
        assert_eq!(report.missing_translations(), 1);
    }

    #[test]
    fn non_collection_shapes_pass_through() {
        let mut report = OverlayReport::default();
        let scalar = json!("not a list");
        let table = json!({});
        assert_eq!(effects(&scalar, Some(&table), &mut report), scalar);
        assert_eq!(activities(&scalar, Some(&table), &mut report), scalar);
        assert_eq!(summon_profiles(&scalar, Some(&table), &mut report), scalar);
    }
}
