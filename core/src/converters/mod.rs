/// Shape converters, one per recognized field shape.
///
/// Each converter is a pure function from the field's current value (plus,
/// where relevant, a translation fragment) to a new value. Disabled
/// conversion and absent fields or fragments pass through unchanged; only
/// the targeted sub-fields are ever replaced.
pub mod advancement;
pub mod measure;
pub mod nested;
pub mod text;
