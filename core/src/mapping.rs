/// Field mappings: which sub-fields of a document a translation replaces.
///
/// Mapping specifications are injected configuration, registered per
/// canonical collection; the engine resolves and applies them but never
/// defines their content. Each entry pairs a translation key with either a
/// plain field path (direct string copy) or a path plus a named shape
/// converter.
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Dot-separated path into a nested document, e.g. `system.range`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn get<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let mut current = doc;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Write `value` at this path, creating intermediate objects as needed.
    /// Refuses to descend through a non-object intermediate so an overlay
    /// can never clobber unrelated structure; returns whether it wrote.
    pub fn set(&self, doc: &mut Value, value: Value) -> bool {
        let Some((last, parents)) = self.segments.split_last() else {
            return false;
        };

        let mut current = doc;
        for segment in parents {
            let Some(map) = current.as_object_mut() else {
                return false;
            };
            current = map
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        match current.as_object_mut() {
            Some(map) => {
                map.insert(last.clone(), value);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Registered shape-converter names, as they appear in mapping data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConverterKind {
    Pages,
    Weight,
    Range,
    RangeActivities,
    Target,
    SightRange,
    // Historic mapping data carries the French spelling.
    #[serde(alias = "alignement")]
    Alignment,
    Movement,
    Senses,
    Damage,
    Armor,
    Languages,
    Token,
    Requirements,
    Source,
    Type,
    #[serde(rename = "adv_sizehint")]
    AdvSizeHint,
    Advancement,
    Items,
    ItemsMonster,
    Effects,
    Activities,
}

/// Right-hand side of one mapping entry: a bare path, or a path handled by
/// a shape converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappingRule {
    Path(FieldPath),
    Converted {
        path: FieldPath,
        converter: ConverterKind,
    },
}

impl MappingRule {
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::Path(path) => path,
            Self::Converted { path, .. } => path,
        }
    }

    pub fn converter(&self) -> Option<ConverterKind> {
        match self {
            Self::Path(_) => None,
            Self::Converted { converter, .. } => Some(*converter),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
    /// Key into the translation fragment.
    pub key: String,
    pub rule: MappingRule,
}

/// Ordered mapping entries for one collection. Deserializes from the
/// object form used by translation packs (`"range": {"path": ...,
/// "converter": "range"}`), keeping declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingSpec {
    fields: Vec<FieldMapping>,
}

impl MappingSpec {
    pub fn fields(&self) -> &[FieldMapping] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for MappingSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let mut fields = Vec::with_capacity(raw.len());
        for (key, rule) in raw {
            let rule: MappingRule = serde_json::from_value(rule)
                .map_err(|e| de::Error::custom(format!("mapping entry {key:?}: {e}")))?;
            fields.push(FieldMapping { key, rule });
        }
        Ok(Self { fields })
    }
}

/// Canonical collection kinds used to select a mapping specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Collection {
    Items,
    Spells,
    ClassFeatures,
    MonsterFeatures,
    Races,
    Classes,
    Subclasses,
    Backgrounds,
    TradeGoods,
    /// Declared type with no known mapping; kept verbatim for reporting.
    Unrecognized(String),
}

impl Collection {
    pub fn canonical_name(&self) -> &str {
        match self {
            Self::Items => "items",
            Self::Spells => "spells",
            Self::ClassFeatures => "classfeatures",
            Self::MonsterFeatures => "monsterfeatures",
            Self::Races => "races",
            Self::Classes => "classes",
            Self::Subclasses => "subclasses",
            Self::Backgrounds => "backgrounds",
            Self::TradeGoods => "tradegoods",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Fixed dispatch from a document's declared type. Feats resolve to
    /// monster features in monster context, class features otherwise; this
    /// is the only context-sensitive rule.
    pub fn from_item_type(raw: &str, monster_context: bool) -> Self {
        match raw {
            "loot" => Self::TradeGoods,
            "consumable" | "container" | "weapon" | "equipment" => Self::Items,
            "spell" => Self::Spells,
            "feat" if monster_context => Self::MonsterFeatures,
            "feat" => Self::ClassFeatures,
            "race" => Self::Races,
            "class" => Self::Classes,
            "subclass" => Self::Subclasses,
            "background" => Self::Backgrounds,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Injected per-collection mapping specifications, keyed by canonical
/// collection name. Pack-qualified keys ("dnd5e.items") are accepted and
/// normalized to their final segment.
#[derive(Debug, Clone, Default)]
pub struct MappingRegistry {
    specs: HashMap<String, MappingSpec>,
}

impl MappingRegistry {
    fn normalize(key: &str) -> String {
        key.rsplit('.').next().unwrap_or(key).to_lowercase()
    }

    pub fn insert(&mut self, collection: impl AsRef<str>, spec: MappingSpec) {
        self.specs.insert(Self::normalize(collection.as_ref()), spec);
    }

    pub fn resolve(&self, collection: &Collection) -> Option<&MappingSpec> {
        self.specs.get(collection.canonical_name())
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        let registry = serde_json::from_value(value)?;
        Ok(registry)
    }
}

impl<'de> Deserialize<'de> for MappingRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, MappingSpec>::deserialize(deserializer)?;
        let mut specs = HashMap::with_capacity(raw.len());
        for (key, spec) in raw {
            specs.insert(Self::normalize(&key), spec);
        }
        Ok(Self { specs })
    }
}
