//! The builtin content contribution: every type the CMS schema layer exposes
//!
//! This module declares the object types, the link-kind enum, and the three
//! polymorphic interfaces of the content schema. The declarations are pure
//! data; the host merges them into its own schema at startup and owns all
//! fetching, link resolution, image materialization, and date formatting.
//!
//! Type and field names are part of the external query surface and must not
//! change.

use crate::schema::registry::{TypeDefinition, TypeRegistry};
use crate::schema::types::{
    date_arguments, EnumTypeDefinition, FieldDefinition, InterfaceTypeDefinition,
    ObjectTypeDefinition, ScalarKind, SchemaError, ValueType,
};
use log::info;
use once_cell::sync::Lazy;

pub const STRUCTURED_TEXT_TYPE: &str = "StructuredTextType";
pub const GEO_POINT_TYPE: &str = "GeoPointType";
pub const EMBED_TYPE: &str = "EmbedType";
pub const IMAGE_DIMENSIONS_TYPE: &str = "ImageDimensionsType";
pub const IMAGE_THUMBNAIL_TYPE: &str = "ImageThumbnailType";
pub const IMAGE_TYPE: &str = "ImageType";
pub const LINK_TYPES_ENUM: &str = "LinkTypesEnum";
pub const LINK_TYPE: &str = "LinkType";
pub const SLICE_TYPE_INTERFACE: &str = "SliceType";
pub const IMAGE_INTERFACE: &str = "ImageInterface";
pub const DOCUMENT_INTERFACE: &str = "Document";

/// Host-provided type for locally materialized image files.
pub const FILE_EXTERNAL: &str = "File";
/// Host-provided union of all concrete document types.
pub const ALL_DOCUMENT_TYPES_EXTERNAL: &str = "AllDocumentTypes";
/// Host-provided container mapping thumbnail variant names to thumbnails.
pub const IMAGE_THUMBNAILS_EXTERNAL: &str = "ImageThumbnailsType";

pub fn structured_text_type() -> ObjectTypeDefinition {
    ObjectTypeDefinition::new(STRUCTURED_TEXT_TYPE)
        .with_description("A text field with formatting options.")
        .with_field(
            "html",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The HTML value of the text using the host's HTML serializer."),
        )
        .with_field(
            "text",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The plain text value of the text."),
        )
        .with_field(
            "raw",
            FieldDefinition::scalar(ScalarKind::Json).with_description(
                "The field's value without transformations exactly as it comes from the CMS API.",
            ),
        )
}

pub fn geo_point_type() -> ObjectTypeDefinition {
    ObjectTypeDefinition::new(GEO_POINT_TYPE)
        .with_description("A field for storing geo-coordinates.")
        .with_field(
            "latitude",
            FieldDefinition::scalar(ScalarKind::Float)
                .with_description("The latitude value of the geo-coordinate."),
        )
        .with_field(
            "longitude",
            FieldDefinition::scalar(ScalarKind::Float)
                .with_description("The longitude value of the geo-coordinate."),
        )
}

pub fn embed_type() -> ObjectTypeDefinition {
    ObjectTypeDefinition::new(EMBED_TYPE)
        .with_description("Embed videos, songs, tweets, slices, etc.")
        .with_field(
            "author_id",
            FieldDefinition::scalar(ScalarKind::Id)
                .with_description("The ID of the resource author. Fetched via oEmbed data."),
        )
        .with_field(
            "author_name",
            FieldDefinition::scalar(ScalarKind::String).with_description(
                "The name of the author/owner of the resource. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "author_url",
            FieldDefinition::scalar(ScalarKind::String).with_description(
                "A URL for the author/owner of the resource. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "cache_age",
            FieldDefinition::scalar(ScalarKind::String).with_description(
                "The suggested cache lifetime for this resource, in seconds. Consumers may choose to use this value or not. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "embed_url",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The URL of the resource."),
        )
        .with_field(
            "html",
            FieldDefinition::scalar(ScalarKind::String).with_description(
                "The HTML required to display the resource. The HTML should have no padding or margins. Consumers may wish to load the HTML in an off-domain iframe to avoid XSS vulnerabilities. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "name",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The name of the resource."),
        )
        .with_field(
            "provider_name",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The name of the resource provider. Fetched via oEmbed data."),
        )
        .with_field(
            "provider_url",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The URL of the resource provider. Fetched via oEmbed data."),
        )
        .with_field(
            "thumbnail_height",
            FieldDefinition::scalar(ScalarKind::Int).with_description(
                "The height of the resource's thumbnail. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "thumbnail_url",
            FieldDefinition::scalar(ScalarKind::String).with_description(
                "A URL to a thumbnail image representing the resource. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "thumbnail_width",
            FieldDefinition::scalar(ScalarKind::Int).with_description(
                "The width of the resource's thumbnail. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "title",
            FieldDefinition::scalar(ScalarKind::String).with_description(
                "A text title, describing the resource. Fetched via oEmbed data.",
            ),
        )
        .with_field(
            "type",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The resource type. Fetched via oEmbed data."),
        )
        .with_field(
            "version",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The oEmbed version number."),
        )
        .with_field(
            "url",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The source URL of the resource. Fetched via oEmbed data."),
        )
        .with_field(
            "width",
            FieldDefinition::scalar(ScalarKind::Int)
                .with_description("The width in pixels of the resource. Fetched via oEmbed data."),
        )
        .with_field(
            "height",
            FieldDefinition::scalar(ScalarKind::Int)
                .with_description("The height in pixels of the resource. Fetched via oEmbed data."),
        )
        .with_field(
            "media_id",
            FieldDefinition::scalar(ScalarKind::Id)
                .with_description("The ID of the resource media. Fetched via oEmbed data."),
        )
}

pub fn image_dimensions_type() -> ObjectTypeDefinition {
    ObjectTypeDefinition::new(IMAGE_DIMENSIONS_TYPE)
        .with_description("Dimensions for images.")
        .with_field(
            "width",
            FieldDefinition::scalar(ScalarKind::Int)
                .with_description("Width of the image in pixels."),
        )
        .with_field(
            "height",
            FieldDefinition::scalar(ScalarKind::Int)
                .with_description("Height of the image in pixels."),
        )
}

fn image_base_fields(def: ObjectTypeDefinition) -> ObjectTypeDefinition {
    def.with_field(
        "alt",
        FieldDefinition::scalar(ScalarKind::String)
            .with_description("The image's alternative text."),
    )
    .with_field(
        "copyright",
        FieldDefinition::scalar(ScalarKind::String).with_description("The image's copyright text."),
    )
    .with_field(
        "dimensions",
        FieldDefinition::object(IMAGE_DIMENSIONS_TYPE).with_description("The image's dimensions."),
    )
    .with_field(
        "url",
        FieldDefinition::scalar(ScalarKind::String)
            .with_description("The image's URL on the CMS CDN."),
    )
    .with_field(
        "localFile",
        FieldDefinition::object(FILE_EXTERNAL)
            .deferred()
            .with_description(
                "The locally downloaded image, populated only when image normalization is enabled on the host.",
            ),
    )
}

pub fn image_thumbnail_type() -> ObjectTypeDefinition {
    image_base_fields(
        ObjectTypeDefinition::new(IMAGE_THUMBNAIL_TYPE)
            .with_description("An image thumbnail with constraints."),
    )
}

pub fn image_type() -> ObjectTypeDefinition {
    image_base_fields(
        ObjectTypeDefinition::new(IMAGE_TYPE)
            .with_description("An image field with optional constrained thumbnails."),
    )
    .with_field(
        "thumbnails",
        FieldDefinition::object(IMAGE_THUMBNAILS_EXTERNAL)
            .with_description("The image's thumbnails."),
    )
}

pub fn link_types_enum() -> EnumTypeDefinition {
    EnumTypeDefinition::new(LINK_TYPES_ENUM)
        .with_description("Types of links.")
        .with_value("Any")
        .with_value("Document")
        .with_value("Media")
        .with_value("Web")
}

pub fn link_type() -> ObjectTypeDefinition {
    ObjectTypeDefinition::new(LINK_TYPE)
        .with_description("Link to web, media, and internal content.")
        .with_field(
            "link_type",
            FieldDefinition::new(ValueType::enumeration(LINK_TYPES_ENUM))
                .required()
                .with_description("The type of link."),
        )
        .with_field(
            "isBroken",
            FieldDefinition::scalar(ScalarKind::Boolean).with_description(
                "If a Document link, `true` if the linked document does not exist, `false` otherwise.",
            ),
        )
        .with_field(
            "url",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The document's URL derived via the link resolver."),
        )
        .with_field(
            "target",
            FieldDefinition::scalar(ScalarKind::String).with_description("The link's target."),
        )
        .with_field(
            "size",
            FieldDefinition::scalar(ScalarKind::Int)
                .with_description("If a Media link, the size of the file."),
        )
        .with_field(
            "id",
            FieldDefinition::scalar(ScalarKind::Id)
                .with_description("If a Document link, the linked document's ID."),
        )
        .with_field(
            "type",
            FieldDefinition::scalar(ScalarKind::String).with_description(
                "If a Document link, the linked document's custom type API ID.",
            ),
        )
        .with_field(
            "tags",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("If a Document link, the linked document's list of tags."),
        )
        .with_field(
            "lang",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("If a Document link, the linked document's language."),
        )
        .with_field(
            "slug",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("If a Document link, the linked document's slug."),
        )
        .with_field(
            "uid",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("If a Document link, the linked document's UID."),
        )
        .with_field(
            "document",
            FieldDefinition::object(ALL_DOCUMENT_TYPES_EXTERNAL)
                .deferred()
                .with_description("If a Document link, the linked document."),
        )
        .with_field(
            "raw",
            FieldDefinition::scalar(ScalarKind::Json).with_description(
                "The field's value without transformations exactly as it comes from the CMS API.",
            ),
        )
}

pub fn slice_type_interface() -> InterfaceTypeDefinition {
    InterfaceTypeDefinition::new(SLICE_TYPE_INTERFACE)
        .with_description("One entry in a composable content body.")
        .with_field(
            "slice_type",
            FieldDefinition::scalar(ScalarKind::String)
                .required()
                .with_description("The slice type API ID."),
        )
        .with_field(
            "slice_label",
            FieldDefinition::scalar(ScalarKind::String).with_description("The slice label."),
        )
}

pub fn image_interface() -> InterfaceTypeDefinition {
    // Structurally the image object type minus `thumbnails`.
    let base = image_thumbnail_type();
    let mut interface = InterfaceTypeDefinition::new(IMAGE_INTERFACE)
        .with_description("The common contract every concrete image type satisfies.");
    for (name, field) in base.fields {
        interface = interface.with_field(name, field);
    }
    interface
}

pub fn document_interface() -> InterfaceTypeDefinition {
    InterfaceTypeDefinition::new(DOCUMENT_INTERFACE)
        .with_description("A generic content entry.")
        .with_field(
            "dataRaw",
            FieldDefinition::scalar(ScalarKind::Json)
                .required()
                .with_description(
                    "The document's data object without transformations exactly as it comes from the CMS API.",
                ),
        )
        .with_field(
            "dataString",
            FieldDefinition::scalar(ScalarKind::String)
                .deprecated("Use `dataRaw` instead which returns JSON.")
                .with_description(
                    "The document's data object without transformations, stringified to eliminate the need to declare subfields.",
                ),
        )
        .with_field(
            "first_publication_date",
            FieldDefinition::scalar(ScalarKind::Date)
                .with_arguments(date_arguments())
                .with_description("The document's initial publication date."),
        )
        .with_field(
            "href",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The document's CMS API URL."),
        )
        .with_field(
            "url",
            FieldDefinition::scalar(ScalarKind::String)
                .with_description("The document's URL derived via the link resolver."),
        )
        .with_field(
            "id",
            FieldDefinition::scalar(ScalarKind::Id)
                .required()
                .with_description(
                    "Globally unique identifier. Note that this differs from the `prismicId` field.",
                ),
        )
        .with_field(
            "lang",
            FieldDefinition::scalar(ScalarKind::String)
                .required()
                .with_description("The document's language."),
        )
        .with_field(
            "last_publication_date",
            FieldDefinition::scalar(ScalarKind::Date)
                .with_arguments(date_arguments())
                .with_description("The document's most recent publication date."),
        )
        .with_field(
            "tags",
            FieldDefinition::new(ValueType::list(ValueType::Scalar(ScalarKind::String)))
                .required()
                .with_description("The document's list of tags."),
        )
        .with_field(
            "alternate_languages",
            FieldDefinition::new(ValueType::list(ValueType::object(LINK_TYPE)))
                .required()
                .with_description("Alternate languages for the document."),
        )
        .with_field(
            "type",
            FieldDefinition::scalar(ScalarKind::String)
                .required()
                .with_description("The document's custom type API ID."),
        )
        .with_field(
            "prismicId",
            FieldDefinition::scalar(ScalarKind::Id)
                .required()
                .with_description("The document's ID on the content platform."),
        )
}

/// Registers the full contribution, including the external host types its
/// cross-references point at, into the given registry.
pub fn contribute(registry: &mut TypeRegistry) -> Result<(), SchemaError> {
    registry.register_external(FILE_EXTERNAL);
    registry.register_external(ALL_DOCUMENT_TYPES_EXTERNAL);
    registry.register_external(IMAGE_THUMBNAILS_EXTERNAL);

    registry.register(TypeDefinition::Object(structured_text_type()))?;
    registry.register(TypeDefinition::Object(geo_point_type()))?;
    registry.register(TypeDefinition::Object(embed_type()))?;
    registry.register(TypeDefinition::Object(image_dimensions_type()))?;
    registry.register(TypeDefinition::Object(image_thumbnail_type()))?;
    registry.register(TypeDefinition::Object(image_type()))?;
    registry.register(TypeDefinition::Enum(link_types_enum()))?;
    registry.register(TypeDefinition::Object(link_type()))?;
    registry.register(TypeDefinition::Interface(slice_type_interface()))?;
    registry.register(TypeDefinition::Interface(image_interface()))?;
    registry.register(TypeDefinition::Interface(document_interface()))?;

    info!(
        "Registered content contribution: {} types, {} external",
        registry.len(),
        registry.external_type_names().len()
    );
    Ok(())
}

/// A fresh registry holding only the builtin contribution.
pub fn registry() -> Result<TypeRegistry, SchemaError> {
    let mut registry = TypeRegistry::new();
    contribute(&mut registry)?;
    Ok(registry)
}

static CONTENT_TYPES: Lazy<TypeRegistry> = Lazy::new(|| {
    registry().expect("builtin content types register cleanly")
});

/// The shared, memoized builtin registry.
pub fn content_types() -> &'static TypeRegistry {
    &CONTENT_TYPES
}
