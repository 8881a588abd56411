//! End-to-end overlay tests over JSON fixtures
//!
//! Exercises the complete path: mapping registry loading, fragment
//! resolution by id and by name, mapped shape converters, nested activity
//! and effect merges, and partial-failure reporting.

use compendium_overlay_core::{
    MappingRegistry, OverlayEngine, OverlayOptions, OverlayWarning, TranslationTable,
};
use serde_json::{json, Value};

const FIXTURE_MAPPINGS: &str = include_str!("fixtures/mappings.json");
const FIXTURE_ITEMS: &str = include_str!("fixtures/monster_items.json");
const FIXTURE_ITEMS_FR: &str = include_str!("fixtures/monster_items_fr.json");

fn registry() -> MappingRegistry {
    MappingRegistry::from_value(serde_json::from_str(FIXTURE_MAPPINGS).unwrap()).unwrap()
}

fn items() -> Value {
    serde_json::from_str(FIXTURE_ITEMS).unwrap()
}

fn table() -> TranslationTable {
    TranslationTable::from_value(serde_json::from_str(FIXTURE_ITEMS_FR).unwrap()).unwrap()
}

#[test]
fn monster_batch_translates_and_converts() {
    let engine = OverlayEngine::new(registry(), OverlayOptions::default());
    let mut batch = items();

    let report = engine.apply_items(&mut batch, Some(&table()), true);

    // Three of four items have fragments; the fourth passes through with a
    // missing-translation warning.
    assert_eq!(report.translated_count(), 3);
    assert_eq!(report.missing_translations(), 1);
    assert!(report
        .warnings()
        .iter()
        .any(|w| matches!(w, OverlayWarning::MissingTranslation { name, .. } if name == "Shadow Stealth")));

    // Bite matched by display name after its id missed.
    assert_eq!(batch[0]["name"], "Morsure");
    assert_eq!(batch[0]["system"]["range"], json!({ "value": 1.5, "long": null, "units": "m" }));
    assert_eq!(batch[0]["translated"], true);

    // Sacred Flame: range and template converted, siblings preserved.
    assert_eq!(batch[1]["name"], "Flamme sacrée");
    assert_eq!(batch[1]["system"]["range"], json!({ "value": 18.0, "units": "m" }));
    assert_eq!(
        batch[1]["system"]["target"]["template"],
        json!({ "size": 6.0, "height": null, "width": null, "units": "m" })
    );
    assert_eq!(batch[1]["system"]["school"], "evo");

    // Claws: weight halved, nested activity and effect merged.
    assert_eq!(batch[2]["system"]["weight"], json!({ "value": 2.0, "units": "kg" }));
    let activity = &batch[2]["system"]["activities"]["act00000000slash"];
    assert_eq!(activity["name"], "Lacération");
    assert_eq!(activity["range"], json!({ "value": 3.0, "units": "m" }));
    assert_eq!(
        activity["target"]["template"],
        json!({ "size": 4.5, "units": "m" })
    );
    assert_eq!(batch[2]["effects"][0]["name"], "Saignement");
    assert_eq!(batch[2]["effects"][0]["icon"], "bleed.svg");

    // Untranslated item is untouched.
    assert_eq!(batch[3]["name"], "Shadow Stealth");
    assert!(batch[3].get("translated").is_none());
}

#[test]
fn disabled_conversion_still_merges_translations() {
    let engine = OverlayEngine::new(
        registry(),
        OverlayOptions {
            convert_units: false,
            ..Default::default()
        },
    );
    let mut batch = items();

    engine.apply_items(&mut batch, Some(&table()), true);

    assert_eq!(batch[0]["name"], "Morsure");
    // Measurements keep their imperial values and tags.
    assert_eq!(batch[0]["system"]["range"], json!({ "value": 5, "long": null, "units": "ft" }));
    assert_eq!(batch[2]["system"]["weight"], json!({ "value": 4, "units": "lb" }));
}

#[test]
fn overlay_is_stable_across_repeated_passes() {
    let engine = OverlayEngine::new(registry(), OverlayOptions::default());
    let mut batch = items();

    engine.apply_items(&mut batch, Some(&table()), true);
    let after_first = batch.clone();

    // A second pass finds the translated names no longer match, warns, and
    // leaves already-converted measurements alone for items with fragments
    // keyed by id.
    engine.apply_items(&mut batch, Some(&table()), true);
    assert_eq!(
        batch[2]["system"]["weight"],
        after_first[2]["system"]["weight"]
    );
}

#[test]
fn tables_load_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("items_fr.json");
    std::fs::write(&path, FIXTURE_ITEMS_FR).unwrap();

    let table = TranslationTable::from_file(&path).unwrap();
    assert!(table.get("Bite").is_some());
    assert!(table.get("weap0000000claws").is_some());
}
