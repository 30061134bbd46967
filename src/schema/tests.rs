use crate::schema::builtin::{self, content_types};
use crate::schema::registry::{TypeDefinition, TypeRegistry};
use crate::schema::types::{
    DateOptions, DifferenceUnit, FieldDefinition, ObjectTypeDefinition, ScalarKind, SchemaError,
    ValueType,
};
use crate::schema::validator::SchemaValidator;
use std::collections::BTreeSet;

/// Collects `type.field` paths for every deferred field in the registry.
fn deferred_fields(registry: &TypeRegistry) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for (type_name, definition) in registry.iter() {
        if let Some(fields) = definition.fields() {
            for (field_name, field) in fields {
                if field.is_deferred() {
                    found.insert(format!("{}.{}", type_name, field_name));
                }
            }
        }
    }
    found
}

#[test]
fn builtin_declares_all_contract_types() {
    let registry = content_types();
    for name in [
        "StructuredTextType",
        "GeoPointType",
        "EmbedType",
        "ImageDimensionsType",
        "ImageThumbnailType",
        "ImageType",
        "LinkTypesEnum",
        "LinkType",
        "SliceType",
        "ImageInterface",
        "Document",
    ] {
        assert!(registry.contains(name), "missing type {}", name);
    }
    assert_eq!(registry.len(), 11);
}

#[test]
fn link_types_enum_is_a_closed_set() {
    let def = content_types().get_enum("LinkTypesEnum").unwrap();
    assert_eq!(def.values, vec!["Any", "Document", "Media", "Web"]);
}

#[test]
fn document_requires_exactly_the_contract_fields() {
    let def = content_types().get_interface("Document").unwrap();
    let required: BTreeSet<&str> = def.required_fields().into_iter().collect();
    let expected: BTreeSet<&str> = [
        "dataRaw",
        "id",
        "lang",
        "tags",
        "alternate_languages",
        "type",
        "prismicId",
    ]
    .into_iter()
    .collect();
    assert_eq!(required, expected);

    // Everything else on the interface is optional.
    for (name, field) in &def.fields {
        if !expected.contains(name.as_str()) {
            assert!(!field.required, "field {} must be optional", name);
        }
    }
}

#[test]
fn deferred_references_sit_exactly_where_the_contract_says() {
    let found = deferred_fields(content_types());
    let expected: BTreeSet<String> = [
        "ImageInterface.localFile",
        "ImageThumbnailType.localFile",
        "ImageType.localFile",
        "LinkType.document",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(found, expected);
}

#[test]
fn date_accessors_declare_all_four_arguments() {
    let def = content_types().get_interface("Document").unwrap();
    for accessor in ["first_publication_date", "last_publication_date"] {
        let field = def.field(accessor).unwrap();
        assert_eq!(field.value_type, ValueType::Scalar(ScalarKind::Date));
        let names: Vec<&str> = field.arguments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["formatString", "fromNow", "difference", "locale"]);
    }
}

#[test]
fn date_options_accept_every_combination() {
    let all = DateOptions::new()
        .with_format_string("YYYY MMMM DD")
        .with_from_now(true)
        .with_difference(DifferenceUnit::Days)
        .with_locale("fr");
    assert!(!all.is_empty());

    let json = serde_json::to_string(&all).unwrap();
    let parsed: DateOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, all);

    // Wire names follow the accessor argument names.
    assert!(json.contains("formatString"));
    assert!(json.contains("fromNow"));

    assert!(DateOptions::new().is_empty());
    let only_locale = DateOptions::new().with_locale("de");
    assert_eq!(only_locale.locale.as_deref(), Some("de"));
    assert!(only_locale.format_string.is_none());
}

#[test]
fn difference_unit_parses_the_accepted_units() {
    for (text, unit) in [
        ("years", DifferenceUnit::Years),
        ("months", DifferenceUnit::Months),
        ("weeks", DifferenceUnit::Weeks),
        ("days", DifferenceUnit::Days),
        ("hours", DifferenceUnit::Hours),
        ("minutes", DifferenceUnit::Minutes),
        ("seconds", DifferenceUnit::Seconds),
        ("milliseconds", DifferenceUnit::Milliseconds),
    ] {
        assert_eq!(text.parse::<DifferenceUnit>().unwrap(), unit);
        assert_eq!(unit.to_string(), text);
    }

    assert_eq!(DifferenceUnit::default(), DifferenceUnit::Milliseconds);
    assert!(matches!(
        "fortnights".parse::<DifferenceUnit>(),
        Err(SchemaError::InvalidDifferenceUnit(_))
    ));
}

#[test]
fn structured_text_declares_raw_and_derived_values() {
    let def = content_types().get_object("StructuredTextType").unwrap();
    assert_eq!(
        def.field("raw").unwrap().value_type,
        ValueType::Scalar(ScalarKind::Json)
    );
    assert_eq!(
        def.field("html").unwrap().value_type,
        ValueType::Scalar(ScalarKind::String)
    );
    assert_eq!(
        def.field("text").unwrap().value_type,
        ValueType::Scalar(ScalarKind::String)
    );
    assert_eq!(def.fields.len(), 3);
}

#[test]
fn geo_point_declares_both_coordinates() {
    let def = content_types().get_object("GeoPointType").unwrap();
    for name in ["latitude", "longitude"] {
        let field = def.field(name).unwrap();
        assert_eq!(field.value_type, ValueType::Scalar(ScalarKind::Float));
        assert!(!field.required);
    }
    assert_eq!(def.fields.len(), 2);
}

#[test]
fn embed_carries_the_full_oembed_field_set() {
    let def = content_types().get_object("EmbedType").unwrap();
    let expected: BTreeSet<&str> = [
        "author_id",
        "author_name",
        "author_url",
        "cache_age",
        "embed_url",
        "html",
        "name",
        "provider_name",
        "provider_url",
        "thumbnail_height",
        "thumbnail_url",
        "thumbnail_width",
        "title",
        "type",
        "version",
        "url",
        "width",
        "height",
        "media_id",
    ]
    .into_iter()
    .collect();
    let found: BTreeSet<&str> = def.fields.keys().map(String::as_str).collect();
    assert_eq!(found, expected);

    // Presence depends entirely on the provider response.
    for field in def.fields.values() {
        assert!(!field.required);
    }
}

#[test]
fn image_interface_is_image_minus_thumbnails() {
    let registry = content_types();
    let image = registry.get_object("ImageType").unwrap();
    let interface = registry.get_interface("ImageInterface").unwrap();

    assert!(image.field("thumbnails").is_some());
    assert!(interface.field("thumbnails").is_none());

    for (name, field) in &interface.fields {
        assert_eq!(image.field(name), Some(field), "field {} diverges", name);
    }
    assert_eq!(interface.fields.len(), image.fields.len() - 1);
}

#[test]
fn image_and_thumbnail_share_the_base_contract() {
    let registry = content_types();
    let thumbnail = registry.get_object("ImageThumbnailType").unwrap();
    for name in ["alt", "copyright", "dimensions", "url", "localFile"] {
        assert!(thumbnail.field(name).is_some(), "missing field {}", name);
    }
    assert_eq!(
        thumbnail.field("dimensions").unwrap().value_type,
        ValueType::object("ImageDimensionsType")
    );
}

#[test]
fn link_type_requires_only_the_discriminator() {
    let def = content_types().get_object("LinkType").unwrap();
    for (name, field) in &def.fields {
        assert_eq!(field.required, name == "link_type", "field {}", name);
    }
    assert_eq!(
        def.field("link_type").unwrap().value_type,
        ValueType::enumeration("LinkTypesEnum")
    );
    assert_eq!(
        def.field("isBroken").unwrap().value_type,
        ValueType::Scalar(ScalarKind::Boolean)
    );
}

#[test]
fn slice_interface_discriminates_on_slice_type() {
    let def = content_types().get_interface("SliceType").unwrap();
    assert!(def.field("slice_type").unwrap().required);
    assert!(!def.field("slice_label").unwrap().required);
    assert_eq!(def.fields.len(), 2);
}

#[test]
fn data_string_is_deprecated_in_favor_of_data_raw() {
    let def = content_types().get_interface("Document").unwrap();
    let field = def.field("dataString").unwrap();
    assert!(field.deprecated.is_some());
    assert!(!field.required);
}

#[test]
fn registry_round_trips_through_json() {
    let registry = builtin::registry().unwrap();
    let json = registry.to_json().unwrap();
    let reparsed = TypeRegistry::from_json(&json).unwrap();
    assert_eq!(reparsed, registry);
    assert_eq!(reparsed.type_names(), registry.type_names());
    assert_eq!(
        reparsed.external_type_names(),
        registry.external_type_names()
    );
}

#[test]
fn builtin_passes_structural_validation() {
    SchemaValidator::new(content_types()).validate().unwrap();
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = builtin::registry().unwrap();
    let result = registry.register(TypeDefinition::Object(builtin::link_type()));
    assert!(matches!(result, Err(SchemaError::DuplicateType(name)) if name == "LinkType"));
}

#[test]
fn validator_flags_unresolved_references() {
    let mut registry = TypeRegistry::new();
    let def = ObjectTypeDefinition::new("Orphan").with_field(
        "target",
        FieldDefinition::object("NoSuchType"),
    );
    registry.register(TypeDefinition::Object(def)).unwrap();

    let result = SchemaValidator::new(&registry).validate();
    assert!(matches!(result, Err(SchemaError::UnresolvedReference(_))));
}

#[test]
fn validator_rejects_required_deferred_fields() {
    let mut registry = TypeRegistry::new();
    registry.register_external("File");
    let def = ObjectTypeDefinition::new("BadImage").with_field(
        "localFile",
        FieldDefinition::object("File").deferred().required(),
    );
    registry.register(TypeDefinition::Object(def)).unwrap();

    let result = SchemaValidator::new(&registry).validate();
    assert!(matches!(result, Err(SchemaError::InvalidField(_))));
}

#[test]
fn validator_enforces_name_rules() {
    let mut registry = TypeRegistry::new();
    let def = ObjectTypeDefinition::new("Dotted").with_field(
        "bad.name",
        FieldDefinition::scalar(ScalarKind::String),
    );
    registry.register(TypeDefinition::Object(def)).unwrap();
    assert!(SchemaValidator::new(&registry).validate().is_err());

    let mut registry = TypeRegistry::new();
    let def = ObjectTypeDefinition::new("Underscored").with_field(
        "_private",
        FieldDefinition::scalar(ScalarKind::String),
    );
    registry.register(TypeDefinition::Object(def)).unwrap();
    assert!(SchemaValidator::new(&registry).validate().is_err());
}

#[test]
fn sdl_renders_the_interface_contracts() {
    let sdl = crate::schema::sdl::render_interfaces(content_types());
    assert!(sdl.contains("interface Document {"));
    assert!(sdl.contains("interface SliceType {"));
    assert!(sdl.contains("interface ImageInterface {"));
    assert!(sdl.contains("slice_type: String!"));
    assert!(sdl.contains(
        "first_publication_date(formatString: String, fromNow: Boolean, difference: String, locale: String): Date"
    ));
    assert!(sdl.contains("tags: [String!]!"));
    assert!(sdl.contains("alternate_languages: [LinkType!]!"));
    assert!(sdl.contains("localFile: File @link"));
    assert!(sdl.contains("@deprecated(reason: \"Use `dataRaw` instead which returns JSON.\")"));
    // Object types are not part of the interface fragment.
    assert!(!sdl.contains("type LinkType {"));
}

#[test]
fn sdl_renders_enums_and_objects() {
    let sdl = crate::schema::sdl::render(content_types());
    assert!(sdl.contains("enum LinkTypesEnum {"));
    assert!(sdl.contains("type EmbedType {"));
    assert!(sdl.contains("link_type: LinkTypesEnum!"));
    assert!(sdl.contains("document: AllDocumentTypes @link"));
}

#[test]
fn scalar_kind_round_trips_through_display() {
    for kind in [
        ScalarKind::String,
        ScalarKind::Json,
        ScalarKind::Float,
        ScalarKind::Int,
        ScalarKind::Id,
        ScalarKind::Boolean,
        ScalarKind::Date,
    ] {
        assert_eq!(kind.to_string().parse::<ScalarKind>().unwrap(), kind);
    }
}
