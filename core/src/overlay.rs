/// Overlay orchestrator: applies a translation table over a batch of
/// documents, dispatching composite types through the mapping registry and
/// primitive shapes straight to their converters.
///
/// Every entry point is best-effort per document. A missing fragment, an
/// unrecognized type or a non-numeric measurement is recorded in the pass
/// report and never aborts the batch.
use serde_json::{Map, Value};

use crate::config::{ConversionMode, OverlayOptions};
use crate::converters::advancement::{self, KeyEcho, Localize};
use crate::converters::{measure, nested, text};
use crate::mapping::{Collection, ConverterKind, MappingRegistry, MappingSpec};
use crate::report::{OverlayReport, OverlayWarning};
use crate::translation::{FragmentMatch, TranslationTable};

pub struct OverlayEngine {
    mappings: MappingRegistry,
    options: OverlayOptions,
    localizer: Box<dyn Localize + Send + Sync>,
}

impl OverlayEngine {
    pub fn new(mappings: MappingRegistry, options: OverlayOptions) -> Self {
        Self {
            mappings,
            options,
            localizer: Box::new(KeyEcho),
        }
    }

    pub fn with_localizer(mut self, localizer: impl Localize + Send + Sync + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    fn mode(&self) -> ConversionMode {
        self.options.conversion_mode()
    }

    /// Journal pages: merge translated name, caption, body text, video
    /// dimensions and tooltip; mark each page translated.
    pub fn apply_pages(
        &self,
        pages: &mut Value,
        translations: Option<&TranslationTable>,
    ) -> OverlayReport {
        let mut report = OverlayReport::default();
        let Some(table) = translations else {
            return report;
        };
        let Some(list) = pages.as_array_mut() else {
            return report;
        };
        for page in list {
            self.apply_page(page, table, &mut report);
        }
        report
    }

    fn apply_page(&self, page: &mut Value, table: &TranslationTable, report: &mut OverlayReport) {
        let Some(fragment) = self.resolve(page, table, report) else {
            return;
        };

        // Until tooltips carry their own translations, a page tooltip falls
        // back to the translated body text.
        let tooltip = match fragment.get("tooltip") {
            Some(tooltip) => Some(tooltip.clone()),
            None => {
                let has_tooltip = path_str(page, &["system", "tooltip"])
                    .map(|t| !t.is_empty())
                    .unwrap_or(false);
                has_tooltip.then(|| fragment.get("text").cloned()).flatten()
            }
        };

        merge_field(page, &["name"], fragment.get("name"));
        merge_field(page, &["image", "caption"], fragment.get("caption"));
        merge_field(page, &["src"], fragment.get("src"));
        merge_field(page, &["text", "content"], fragment.get("text"));
        merge_field(page, &["video", "width"], fragment.get("width"));
        merge_field(page, &["video", "height"], fragment.get("height"));
        merge_field(page, &["system", "tooltip"], tooltip.as_ref());
        mark_translated(page, report);
    }

    /// Item batch: collection dispatch, mapping application, fragment merge.
    /// `monster_context` routes feats to monster-feature mappings.
    pub fn apply_items(
        &self,
        items: &mut Value,
        translations: Option<&TranslationTable>,
        monster_context: bool,
    ) -> OverlayReport {
        let mut report = OverlayReport::default();
        if let Some(table) = translations {
            self.apply_items_into(items, table, monster_context, &mut report);
        }
        report
    }

    fn apply_items_into(
        &self,
        items: &mut Value,
        table: &TranslationTable,
        monster_context: bool,
        report: &mut OverlayReport,
    ) {
        let Some(list) = items.as_array_mut() else {
            return;
        };
        for item in list {
            self.apply_item(item, table, monster_context, report);
        }
    }

    fn apply_item(
        &self,
        item: &mut Value,
        table: &TranslationTable,
        monster_context: bool,
        report: &mut OverlayReport,
    ) {
        let raw_type = item
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let collection = Collection::from_item_type(&raw_type, monster_context);
        if matches!(collection, Collection::Unrecognized(_)) {
            report.warn(OverlayWarning::UnrecognizedDocumentType { raw: raw_type });
            return;
        }

        let Some(fragment) = self.resolve(item, table, report) else {
            return;
        };

        if let Some(spec) = self.mappings.resolve(&collection) {
            self.apply_spec(item, &fragment, spec, report);
        }

        merge_field(item, &["name"], fragment.get("name"));
        merge_field(
            item,
            &["system", "description", "value"],
            fragment.get("description"),
        );
        merge_field(
            item,
            &["system", "materials", "value"],
            fragment.get("materials"),
        );

        // The requirements rewrite always reapplies, declared or not.
        let requirements = path_str(item, &["system", "requirements"]).map(str::to_string);
        if let Some(requirements) = requirements {
            if !requirements.is_empty() {
                let rewritten = text::requirements(&Value::from(requirements));
                set_field(item, &["system", "requirements"], rewritten);
            }
        }

        if let Some(activities) = item.pointer("/system/activities").cloned() {
            let merged = nested::activities(&activities, fragment.get("activities"), report);
            set_field(item, &["system", "activities"], merged);
        }
        if let Some(effects) = item.get("effects").cloned() {
            if effects.as_array().map(|l| !l.is_empty()).unwrap_or(false) {
                let merged = nested::effects(&effects, fragment.get("effects"), report);
                set_field(item, &["effects"], merged);
            }
        }
        mark_translated(item, report);
    }

    /// Status-effect batch entry point.
    pub fn apply_effects(
        &self,
        effects: &mut Value,
        translations: Option<&TranslationTable>,
    ) -> OverlayReport {
        let mut report = OverlayReport::default();
        if let Some(table) = translations {
            let table = Value::Object(table.entries().clone());
            *effects = nested::effects(effects, Some(&table), &mut report);
        }
        report
    }

    /// Sub-activity batch entry point.
    pub fn apply_activities(
        &self,
        activities: &mut Value,
        translations: Option<&TranslationTable>,
    ) -> OverlayReport {
        let mut report = OverlayReport::default();
        if let Some(table) = translations {
            let table = Value::Object(table.entries().clone());
            *activities = nested::activities(activities, Some(&table), &mut report);
        }
        report
    }

    fn resolve(
        &self,
        doc: &Value,
        table: &TranslationTable,
        report: &mut OverlayReport,
    ) -> Option<Map<String, Value>> {
        let id = doc.get("_id").and_then(Value::as_str);
        let name = doc.get("name").and_then(Value::as_str);
        let matched = table.resolve(id, name);
        if let FragmentMatch::ByName(_) = matched {
            if self.options.log_name_fallbacks {
                log::debug!(
                    "fragment for {} matched by name {:?}",
                    id.unwrap_or("<no id>"),
                    name.unwrap_or_default()
                );
            }
        }
        match matched.fragment().and_then(Value::as_object) {
            Some(fragment) => Some(fragment.clone()),
            None => {
                report.warn(OverlayWarning::MissingTranslation {
                    id: id.unwrap_or_default().to_string(),
                    name: name.unwrap_or_default().to_string(),
                });
                None
            }
        }
    }

    /// Apply an ordered mapping specification: for each entry, read the
    /// fragment value at the mapping key, run the converter against the
    /// document's current value at the field path, write the result back.
    fn apply_spec(
        &self,
        doc: &mut Value,
        fragment: &Map<String, Value>,
        spec: &MappingSpec,
        report: &mut OverlayReport,
    ) {
        for field in spec.fields() {
            let translated = fragment.get(&field.key);
            let path = field.rule.path();

            match field.rule.converter() {
                None => {
                    // Plain mappings are direct string copies.
                    if let Some(text) = translated.and_then(Value::as_str) {
                        path.set(doc, Value::from(text));
                    }
                }
                Some(kind) => {
                    let Some(current) = path.get(doc).cloned() else {
                        continue;
                    };
                    let converted = self.run_converter(kind, &current, translated, report);
                    path.set(doc, converted);
                }
            }
        }
    }

    fn run_converter(
        &self,
        kind: ConverterKind,
        current: &Value,
        translated: Option<&Value>,
        report: &mut OverlayReport,
    ) -> Value {
        let mode = self.mode();
        match kind {
            ConverterKind::Weight => measure::weight(current, mode, report),
            ConverterKind::Range => measure::range(current, mode, report),
            ConverterKind::RangeActivities => measure::activity_ranges(current, mode, report),
            ConverterKind::Target => measure::target(current, mode, report),
            ConverterKind::SightRange => measure::sight_range(current, mode, report),
            ConverterKind::Movement => measure::movement(current, mode, report),
            ConverterKind::Senses => measure::senses(current, mode, report),
            ConverterKind::Token => measure::token_vision(current, mode, report),
            ConverterKind::Alignment => text::alignment(current, report),
            ConverterKind::Damage => text::damage(current),
            ConverterKind::Armor => text::armor(current),
            ConverterKind::Languages => text::languages(current),
            ConverterKind::Requirements => text::requirements(current),
            ConverterKind::Source => text::source(current, report),
            ConverterKind::Type => text::creature_type(current),
            ConverterKind::Advancement => {
                advancement::advancement(current, self.localizer.as_ref(), report)
            }
            ConverterKind::AdvSizeHint => advancement::size_hint(current, translated),
            ConverterKind::Effects => nested::effects(current, translated, report),
            ConverterKind::Activities => nested::activities(current, translated, report),
            ConverterKind::Items | ConverterKind::ItemsMonster => {
                let mut value = current.clone();
                if let Some(obj) = translated.and_then(Value::as_object) {
                    let table = TranslationTable::new(obj.clone());
                    let monster = matches!(kind, ConverterKind::ItemsMonster);
                    self.apply_items_into(&mut value, &table, monster, report);
                }
                value
            }
            ConverterKind::Pages => {
                let mut value = current.clone();
                if let Some(obj) = translated.and_then(Value::as_object) {
                    let table = TranslationTable::new(obj.clone());
                    let sub = self.apply_pages(&mut value, Some(&table));
                    report.merge(sub);
                }
                value
            }
        }
    }
}

fn merge_field(doc: &mut Value, path: &[&str], translated: Option<&Value>) {
    if let Some(value) = translated {
        if !value.is_null() {
            set_field(doc, path, value.clone());
        }
    }
}

fn set_field(doc: &mut Value, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut current = doc;
    for segment in parents {
        let Some(map) = current.as_object_mut() else {
            return;
        };
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Some(map) = current.as_object_mut() {
        map.insert(last.to_string(), value);
    }
}

fn path_str<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = doc;
    for segment in path {
        current = current.as_object()?.get(*segment)?;
    }
    current.as_str()
}

fn mark_translated(doc: &mut Value, report: &mut OverlayReport) {
    if let Some(map) = doc.as_object_mut() {
        map.insert("translated".into(), Value::Bool(true));
        report.mark_translated();
    }
}
