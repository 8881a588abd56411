/// Unit-bearing shape converters: weights, ranges, templates, speeds,
/// senses and token vision.
use serde_json::{Map, Value};

use crate::config::ConversionMode;
use crate::dictionaries::SPECIAL_SENSES;
use crate::report::{OverlayReport, OverlayWarning};
use crate::units::{self, UnitFn};

/// Convert one sub-field in place when present, reporting (and keeping the
/// original) on a non-numeric value. Returns whether it wrote a converted
/// value; unit tags are only rewritten when at least one sub-field did.
fn convert_field(
    obj: &mut Map<String, Value>,
    key: &str,
    convert: UnitFn,
    shape: &str,
    report: &mut OverlayReport,
) -> bool {
    let Some(current) = obj.get(key) else {
        return false;
    };
    match units::convert_value(current, convert) {
        Ok(converted) => {
            obj.insert(key.to_string(), converted);
            true
        }
        Err(err) => {
            report.warn(OverlayWarning::Conversion {
                field: format!("{shape}.{key}"),
                detail: err.to_string(),
            });
            false
        }
    }
}

fn units_tag(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("units").and_then(Value::as_str)
}

/// Weight with `{value, units}` shape: pounds halve to kilograms. Already
/// metric values pass through.
pub fn weight(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    if !mode.is_enabled() || units_tag(obj) == Some("kg") {
        return value.clone();
    }

    let mut out = obj.clone();
    if convert_field(&mut out, "value", units::pounds_to_kilograms, "weight", report) {
        out.insert("units".into(), Value::from("kg"));
    }
    Value::Object(out)
}

/// Range with `{value, long, reach, units}` shape, branching on the unit
/// tag: feet convert to meters, miles to kilometers, anything else passes.
pub fn range(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    if !mode.is_enabled() {
        return value.clone();
    }

    let (convert, new_units): (UnitFn, &str) = match units_tag(obj) {
        Some("ft") => (units::feet_to_meters, "m"),
        Some("mi") => (units::miles_to_kilometers, "km"),
        _ => return value.clone(),
    };

    let mut out = obj.clone();
    let mut converted = false;
    for key in ["value", "long", "reach"] {
        converted |= convert_field(&mut out, key, convert, "range", report);
    }
    if converted {
        out.insert("units".into(), Value::from(new_units));
    }
    Value::Object(out)
}

/// Area-of-effect target: the same feet/miles branching applied to the
/// template dimensions and the affected-count radius.
pub fn target(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    if !mode.is_enabled() {
        return value.clone();
    }
    let Some(template) = obj.get("template").and_then(Value::as_object) else {
        return value.clone();
    };

    let (convert, new_units): (UnitFn, &str) = match units_tag(template) {
        Some("ft") => (units::feet_to_meters, "m"),
        Some("mi") => (units::miles_to_kilometers, "km"),
        _ => return value.clone(),
    };

    let mut out = obj.clone();
    let mut template = template.clone();
    let mut converted = false;
    for key in ["size", "height", "width"] {
        converted |= convert_field(&mut template, key, convert, "target.template", report);
    }
    if converted {
        template.insert("units".into(), Value::from(new_units));
    }
    out.insert("template".into(), Value::Object(template));

    if let Some(affects) = obj.get("affects").and_then(Value::as_object) {
        let mut affects = affects.clone();
        convert_field(&mut affects, "count", convert, "target.affects", report);
        out.insert("affects".into(), Value::Object(affects));
    }
    Value::Object(out)
}

/// Activity map: convert each activity's range in place, plus its target
/// template size when the template is measured in feet.
pub fn activity_ranges(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    if !mode.is_enabled() {
        return value.clone();
    }

    let mut out = obj.clone();
    for activity in out.values_mut() {
        let Some(activity_obj) = activity.as_object_mut() else {
            continue;
        };
        if let Some(activity_range) = activity_obj.get("range") {
            let converted = range(activity_range, mode, report);
            activity_obj.insert("range".into(), converted);
        }

        let template = activity_obj
            .get_mut("target")
            .and_then(|t| t.get_mut("template"))
            .and_then(Value::as_object_mut);
        if let Some(template) = template {
            if template.get("units").and_then(Value::as_str) == Some("ft")
                && convert_field(
                    template,
                    "size",
                    units::feet_to_meters,
                    "activity.target.template",
                    report,
                )
            {
                template.insert("units".into(), Value::from("m"));
            }
        }
    }
    Value::Object(out)
}

/// Bare sight radius in feet; gated only by the conversion mode.
pub fn sight_range(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    if !mode.is_enabled() {
        return value.clone();
    }
    match units::convert_value(value, units::feet_to_meters) {
        Ok(converted) => converted,
        Err(err) => {
            report.warn(OverlayWarning::Conversion {
                field: "sightRange".into(),
                detail: err.to_string(),
            });
            value.clone()
        }
    }
}

fn speeds_block(
    value: &Value,
    mode: ConversionMode,
    keys: &[&str],
    shape: &str,
    report: &mut OverlayReport,
) -> Option<Map<String, Value>> {
    let obj = value.as_object()?;
    if !mode.is_enabled() {
        return None;
    }

    // A null or absent unit tag means feet.
    let (convert, new_units): (UnitFn, &str) = match units_tag(obj) {
        None | Some("ft") => (units::feet_to_meters, "m"),
        Some("mi") | Some("ml") => (units::miles_to_kilometers, "km"),
        Some(_) => return None,
    };

    let mut out = obj.clone();
    let mut converted = false;
    for key in keys {
        converted |= convert_field(&mut out, key, convert, shape, report);
    }
    if converted {
        out.insert("units".into(), Value::from(new_units));
    }
    Some(out)
}

/// Movement speeds: one conversion applied uniformly across every named
/// sub-speed, with the unit tag updated to match.
pub fn movement(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    match speeds_block(
        value,
        mode,
        &["burrow", "climb", "fly", "swim", "walk"],
        "movement",
        report,
    ) {
        Some(out) => Value::Object(out),
        None => value.clone(),
    }
}

/// Senses: same uniform conversion as movement, plus dictionary
/// substitution of the free-text special-senses phrase.
pub fn senses(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    let Some(mut out) = speeds_block(
        value,
        mode,
        &["darkvision", "blindsight", "tremorsense", "truesight"],
        "senses",
        report,
    ) else {
        return value.clone();
    };

    if let Some(special) = out.get("special").and_then(Value::as_str) {
        if !special.is_empty() {
            let translated = SPECIAL_SENSES.lookup_or_keep(special);
            out.insert("special".into(), Value::from(translated));
        }
    }
    Value::Object(out)
}

/// Token vision: derive the sight radii from the raw vision-distance
/// fields. Applied whenever conversion is enabled, independent of any
/// translation fragment.
pub fn token_vision(value: &Value, mode: ConversionMode, report: &mut OverlayReport) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    if !mode.is_enabled() {
        return value.clone();
    }

    let mut out = obj.clone();
    if let Some(dim) = obj.get("dimSight") {
        match units::convert_value(dim, units::feet_to_meters) {
            Ok(converted) => {
                out.insert("sight".into(), converted);
            }
            Err(err) => report.warn(OverlayWarning::Conversion {
                field: "token.dimSight".into(),
                detail: err.to_string(),
            }),
        }
    }
    convert_field(&mut out, "brightSight", units::feet_to_meters, "token", report);
    Value::Object(out)
}
