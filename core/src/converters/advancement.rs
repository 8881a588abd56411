/// Advancement-rule rewrites: per-kind title and hint localization, plus the
/// size-hint converter for race advancement.
use serde_json::{Map, Value};

use crate::dictionaries::{ADVANCEMENT_HINTS, ADVANCEMENT_TITLES};
use crate::report::{OverlayReport, OverlayWarning};

/// Localized-string lookup supplied by the host, used for a small set of
/// fixed advancement-title keys. `None` means the key itself is the text.
pub trait Localize {
    fn localize(&self, key: &str) -> Option<String>;
}

/// Default seam when the host supplies no lookup: every key echoes back.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyEcho;

impl Localize for KeyEcho {
    fn localize(&self, _key: &str) -> Option<String> {
        None
    }
}

impl<F> Localize for F
where
    F: Fn(&str) -> Option<String>,
{
    fn localize(&self, key: &str) -> Option<String> {
        self(key)
    }
}

fn localize_or_key(localizer: &dyn Localize, key: &str) -> String {
    localizer.localize(key).unwrap_or_else(|| key.to_string())
}

fn set_title(adv: &mut Map<String, Value>, title: String) {
    adv.insert("title".into(), Value::from(title));
}

/// Type-dispatched rewrite of each rule's display title and hint text.
/// Unrecognized advancement kinds pass through untouched.
pub fn advancement(
    value: &Value,
    localizer: &dyn Localize,
    report: &mut OverlayReport,
) -> Value {
    let Some(rules) = value.as_array() else {
        return value.clone();
    };

    let rewritten = rules
        .iter()
        .map(|rule| {
            let Some(obj) = rule.as_object() else {
                return rule.clone();
            };
            let mut adv = obj.clone();
            let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();
            let title = obj.get("title").and_then(Value::as_str).unwrap_or_default();

            match kind {
                "HitPoints" => {
                    set_title(&mut adv, localize_or_key(localizer, "DND5E.HitPoints"));
                }
                "ItemGrant" => {
                    let translated = match ADVANCEMENT_TITLES.lookup(title) {
                        Some(known) => known.to_string(),
                        None => localize_or_key(localizer, &format!("DND5E.{title}")),
                    };
                    set_title(&mut adv, translated);
                }
                "AbilityScoreImprovement" => {
                    if title == "Ability Score Improvement" {
                        set_title(
                            &mut adv,
                            localize_or_key(
                                localizer,
                                "DND5E.ADVANCEMENT.AbilityScoreImprovement.Title",
                            ),
                        );
                    }
                }
                "ScaleValue" | "ItemChoice" | "Trait" => {
                    if !title.is_empty() {
                        match ADVANCEMENT_TITLES.lookup(title) {
                            Some(known) => set_title(&mut adv, known.to_string()),
                            None => report.warn(OverlayWarning::MissingAdvancementTitle {
                                title: title.to_string(),
                            }),
                        }
                    }
                    if let Some(hint) = obj.get("hint").and_then(Value::as_str) {
                        if !hint.is_empty() {
                            match ADVANCEMENT_HINTS.lookup(hint) {
                                Some(known) => {
                                    adv.insert("hint".into(), Value::from(known));
                                }
                                None => report.warn(OverlayWarning::MissingAdvancementHint {
                                    hint: hint.to_string(),
                                }),
                            }
                        }
                    }
                }
                _ => {}
            }
            Value::Object(adv)
        })
        .collect();
    Value::Array(rewritten)
}

/// Write a translated hint onto every size-related advancement rule. Only
/// runs when the owning document's translation actually supplied a hint.
pub fn size_hint(value: &Value, hint: Option<&Value>) -> Value {
    let Some(hint) = hint.and_then(Value::as_str) else {
        return value.clone();
    };
    let Some(rules) = value.as_array() else {
        return value.clone();
    };

    let rewritten = rules
        .iter()
        .map(|rule| {
            let Some(obj) = rule.as_object() else {
                return rule.clone();
            };
            if obj.get("type").and_then(Value::as_str) != Some("Size") {
                return rule.clone();
            }
            let mut adv = obj.clone();
            let mut configuration = obj
                .get("configuration")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            configuration.insert("hint".into(), Value::from(hint));
            adv.insert("configuration".into(), Value::Object(configuration));
            Value::Object(adv)
        })
        .collect();
    Value::Array(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo() -> KeyEcho {
        KeyEcho
    }

    #[test]
    fn hit_points_title_comes_from_the_localizer() {
        let localizer = |key: &str| {
            (key == "DND5E.HitPoints").then(|| "Points de vie".to_string())
        };
        let mut report = OverlayReport::default();
        let out = advancement(
            &json!([{ "type": "HitPoints", "title": "" }]),
            &localizer,
            &mut report,
        );
        assert_eq!(out[0]["title"], "Points de vie");
    }

    #[test]
    fn unresolvable_keys_echo_back() {
        let mut report = OverlayReport::default();
        let out = advancement(
            &json!([{ "type": "HitPoints" }]),
            &echo(),
            &mut report,
        );
        assert_eq!(out[0]["title"], "DND5E.HitPoints");
    }

    #[test]
    fn item_grant_prefers_the_title_table() {
        let mut report = OverlayReport::default();
        let out = advancement(
            &json!([{ "type": "ItemGrant", "title": "Pact Boon" }]),
            &echo(),
            &mut report,
        );
        assert_eq!(out[0]["title"], "Pacte [Occultiste]");
    }

    #[test]
    fn ability_score_improvement_only_rewrites_the_stock_title() {
        let mut report = OverlayReport::default();
        let out = advancement(
            &json!([
                { "type": "AbilityScoreImprovement", "title": "Ability Score Improvement" },
                { "type": "AbilityScoreImprovement", "title": "Custom ASI" }
            ]),
            &echo(),
            &mut report,
        );
        assert_eq!(
            out[0]["title"],
            "DND5E.ADVANCEMENT.AbilityScoreImprovement.Title"
        );
        assert_eq!(out[1]["title"], "Custom ASI");
    }

    #[test]
    fn scale_value_title_and_hint_miss_are_warnings() {
        let mut report = OverlayReport::default();
        let out = advancement(
            &json!([{
                "type": "ScaleValue",
                "title": "Totally Unknown Feature",
                "hint": "Totally unknown hint"
            }]),
            &echo(),
            &mut report,
        );
        assert_eq!(out[0]["title"], "Totally Unknown Feature");
        assert_eq!(out[0]["hint"], "Totally unknown hint");
        assert_eq!(report.warnings().len(), 2);
    }

    #[test]
    fn trait_title_and_hint_translate_when_known() {
        let mut report = OverlayReport::default();
        let out = advancement(
            &json!([{ "type": "Trait", "title": "Fighting Style", "hint": "Expertise" }]),
            &echo(),
            &mut report,
        );
        assert_eq!(out[0]["title"], "Style de combat");
        assert_eq!(out[0]["hint"], "Expertise");
        assert!(report.is_clean());
    }

    #[test]
    fn unknown_kinds_pass_through() {
        let mut report = OverlayReport::default();
        let rules = json!([{ "type": "Subclass", "title": "Martial Archetype" }]);
        assert_eq!(advancement(&rules, &echo(), &mut report), rules);
        assert!(report.is_clean());
    }

    #[test]
    fn size_hint_targets_only_size_rules() {
        let hint = json!("Votre taille est Moyenne.");
        let out = size_hint(
            &json!([
                { "type": "Size", "configuration": { "sizes": ["med"] } },
                { "type": "ItemGrant", "configuration": {} }
            ]),
            Some(&hint),
        );
        assert_eq!(out[0]["configuration"]["hint"], "Votre taille est Moyenne.");
        assert_eq!(out[0]["configuration"]["sizes"], json!(["med"]));
        assert_eq!(out[1]["configuration"], json!({}));
    }

    #[test]
    fn size_hint_without_translation_is_identity() {
        let rules = json!([{ "type": "Size", "configuration": {} }]);
        assert_eq!(size_hint(&rules, None), rules);
    }
}
