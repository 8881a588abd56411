pub mod config;
pub mod converters;
pub mod dictionaries;
pub mod dictionary;
pub mod mapping;
pub mod overlay;
pub mod report;
pub mod translation;
pub mod units;

pub use config::{ConversionMode, OverlayOptions};
pub use converters::advancement::{KeyEcho, Localize};
pub use dictionary::Dictionary;
pub use mapping::{
    Collection, ConverterKind, FieldMapping, FieldPath, MappingRegistry, MappingRule, MappingSpec,
};
pub use overlay::OverlayEngine;
pub use report::{OverlayReport, OverlayWarning};
pub use translation::{resolve_fragment, FragmentMatch, TranslationFragment, TranslationTable};
pub use units::{
    convert_value, feet_to_meters, miles_to_kilometers, pounds_to_kilograms, ConversionError,
};
