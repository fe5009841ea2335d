//! Default content types and the message header seam.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::format::{PayloadFormat, PayloadKind};

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

pub const JSON_MINIMAL_METADATA: &str = "application/json;odata.metadata=minimal";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";
pub const MULTIPART_MIXED: &str = "multipart/mixed";
pub const TEXT_PLAIN: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Default content type for a payload kind written in `format`.
pub fn default_content_type(kind: PayloadKind, format: PayloadFormat) -> Result<&'static str> {
    use PayloadFormat as F;
    use PayloadKind as K;

    let content_type = match (kind, format) {
        (K::Value, F::Default | F::RawValue) => TEXT_PLAIN,
        (K::BinaryValue, F::Default | F::RawValue) => OCTET_STREAM,
        (K::MetadataDocument, F::Default | F::Metadata) => APPLICATION_XML,
        (K::MetadataDocument, F::Json) => APPLICATION_JSON,
        (K::Batch, F::Default | F::Batch) => MULTIPART_MIXED,
        (K::Batch, F::Json) => APPLICATION_JSON,
        (
            K::Resource
            | K::ResourceSet
            | K::Property
            | K::Collection
            | K::EntityReferenceLink
            | K::EntityReferenceLinks
            | K::ServiceDocument
            | K::Error
            | K::Parameter,
            F::Default | F::Json,
        ) => JSON_MINIMAL_METADATA,
        _ => return Err(Error::UnsupportedContentType { kind, format }),
    };
    Ok(content_type)
}

/// A message whose headers can be set.
pub trait MessageHeaders {
    fn set_header(&mut self, name: &str, value: &str);

    fn header(&self, name: &str) -> Option<&str>;
}

/// Set the `Content-Type` header of `message` to the default for `kind` and `format`.
pub fn set_default_content_type<M>(
    message: &mut M,
    kind: PayloadKind,
    format: PayloadFormat,
) -> Result<()>
where
    M: MessageHeaders + ?Sized,
{
    let content_type = default_content_type(kind, format)?;
    message.set_header(CONTENT_TYPE_HEADER, content_type);
    Ok(())
}

/// In-memory message for tests. Header names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestMessage {
    headers: IndexMap<String, String>,
}

impl TestMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl MessageHeaders for TestMessage {
    fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .keys()
            .position(|existing| existing.eq_ignore_ascii_case(name))
        {
            Some(index) => {
                if let Some((_, slot)) = self.headers.get_index_mut(index) {
                    *slot = value.to_string();
                }
            }
            None => {
                self.headers.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
