//! # content-schema
//!
//! A declarative content type registry for CMS-backed static-site schema
//! layers.
//!
//! The crate declares the shape of a content-management system's data as a
//! set of immutable type descriptors: object types for rich text,
//! geo-points, oEmbed embeds, images with derived thumbnails, and typed
//! links, plus polymorphic interface contracts for content entries, slices,
//! and images. A host schema layer merges the contribution into its own
//! queryable schema at startup; the host owns all data fetching, link
//! resolution, image materialization, and date formatting.
//!
//! The registry is exposed as plain data so it can be adapted to whatever
//! schema-registration mechanism the host provides. It serializes to a JSON
//! description (round-trippable) and renders to a GraphQL-SDL fragment for
//! hosts that ingest text.
//!
//! ```
//! use content_schema::schema::{builtin, SchemaValidator};
//!
//! let registry = builtin::content_types();
//! assert!(registry.contains("Document"));
//! SchemaValidator::new(registry).validate().unwrap();
//! ```

pub mod schema;

pub use schema::{
    builtin, DateOptions, DifferenceUnit, SchemaError, SchemaValidator, TypeDefinition, TypeKind,
    TypeRegistry,
};
