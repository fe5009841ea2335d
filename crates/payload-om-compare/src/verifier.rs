//! Payload and error verification driven by a [`VerificationConfig`].

use payload_om::PayloadElement;
use payload_om::PayloadFormat;
use payload_om::traversal::{normalize_for_format, strip_annotations};
use tracing::debug;

use crate::comparer::{ActualError, ErrorComparer, ExpectedError};
use crate::config::VerificationConfig;
use crate::error::{CompareError, Result};
use crate::registry::StrategyRegistry;

/// Compares actual payloads and errors against expected ones.
///
/// Each verifier owns its comparer instance; build one per test rather than
/// sharing across threads.
pub struct PayloadVerifier {
    format: PayloadFormat,
    normalize: bool,
    error_comparer: Box<dyn ErrorComparer>,
}

impl PayloadVerifier {
    pub fn new(format: PayloadFormat, error_comparer: Box<dyn ErrorComparer>) -> Self {
        Self {
            format,
            normalize: true,
            error_comparer,
        }
    }

    /// Resolve the configured comparer and build a verifier around it.
    pub fn from_config(
        config: &VerificationConfig,
        comparers: &StrategyRegistry<dyn ErrorComparer>,
    ) -> Result<Self> {
        let error_comparer = comparers.resolve(&config.error_comparer)?;
        Ok(Self {
            format: config.format,
            normalize: config.normalize,
            error_comparer,
        })
    }

    pub fn without_normalization(mut self) -> Self {
        self.normalize = false;
        self
    }

    pub fn format(&self) -> PayloadFormat {
        self.format
    }

    pub fn error_comparer(&self) -> &dyn ErrorComparer {
        self.error_comparer.as_ref()
    }

    /// Compare the structure of `actual` against a copy of `expected`.
    ///
    /// Annotations other than link expansions are dropped from both trees
    /// first, then both are normalized for the verifier's format. The baseline
    /// itself is never modified.
    pub fn verify_payload(
        &self,
        expected: &PayloadElement,
        mut actual: PayloadElement,
    ) -> Result<()> {
        let mut expected = expected.clone();
        strip_annotations(&mut expected);
        strip_annotations(&mut actual);
        if self.normalize {
            normalize_for_format(&mut expected, self.format);
            normalize_for_format(&mut actual, self.format);
        }

        if expected == actual {
            debug!(format = %self.format, root = actual.kind_name(), "payload verified");
            return Ok(());
        }

        debug!(format = %self.format, root = actual.kind_name(), "payload mismatch");
        Err(CompareError::PayloadMismatch {
            format: self.format,
            expected: format!("{expected:#?}"),
            actual: format!("{actual:#?}"),
        })
    }

    pub fn verify_error(&self, expected: &ExpectedError, actual: &ActualError) -> Result<()> {
        debug!(comparer = self.error_comparer.name(), "verifying error");
        self.error_comparer.compare(expected, actual)
    }
}

impl std::fmt::Debug for PayloadVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadVerifier")
            .field("format", &self.format)
            .field("normalize", &self.normalize)
            .field("error_comparer", &self.error_comparer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::ExactErrorComparer;
    use payload_om::{
        Annotated, ExpandedNavigationItem, FeedEntryCapture, NavigationLink, PrimitiveValue,
        Property, PropertyMetadata, Resource, ResourceSet,
    };

    fn customer(typed: bool) -> PayloadElement {
        let id = if typed {
            PrimitiveValue::typed(7, "Edm.Int32")
        } else {
            PrimitiveValue::new(7)
        };
        Resource::typed("NS.Customer")
            .with_property(Property::primitive("Id", id))
            .into()
    }

    #[test]
    fn test_json_normalization_hides_type_names() {
        let verifier = PayloadVerifier::new(PayloadFormat::Json, Box::new(ExactErrorComparer));
        assert!(verifier.verify_payload(&customer(true), customer(false)).is_ok());
    }

    #[test]
    fn test_without_normalization_type_names_matter() {
        let verifier = PayloadVerifier::new(PayloadFormat::Json, Box::new(ExactErrorComparer))
            .without_normalization();
        let result = verifier.verify_payload(&customer(true), customer(false));
        assert!(matches!(
            result,
            Err(CompareError::PayloadMismatch { format: PayloadFormat::Json, .. })
        ));
    }

    #[test]
    fn test_metadata_format_is_not_normalized() {
        let verifier = PayloadVerifier::new(PayloadFormat::Metadata, Box::new(ExactErrorComparer));
        assert!(verifier.verify_payload(&customer(true), customer(false)).is_err());
    }

    #[test]
    fn test_mismatch_renders_both_trees() {
        let verifier = PayloadVerifier::new(PayloadFormat::Json, Box::new(ExactErrorComparer));
        let other: PayloadElement = Resource::typed("NS.Supplier").into();
        match verifier.verify_payload(&customer(true), other) {
            Err(CompareError::PayloadMismatch { expected, actual, .. }) => {
                assert!(expected.contains("NS.Customer"));
                assert!(actual.contains("NS.Supplier"));
            }
            other => panic!("expected a payload mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_baseline_is_untouched() {
        let verifier = PayloadVerifier::new(PayloadFormat::Json, Box::new(ExactErrorComparer));
        let expected = customer(true);
        verifier.verify_payload(&expected, customer(false)).unwrap();
        assert_eq!(expected, customer(true));
    }

    #[test]
    fn test_authoring_metadata_is_not_compared() {
        let verifier = PayloadVerifier::new(PayloadFormat::Json, Box::new(ExactErrorComparer));
        let extra = |metadata: bool| {
            let property = Property::primitive("Extra", PrimitiveValue::typed("x", "Edm.String"));
            let property = if metadata {
                property.with_metadata(PropertyMetadata::open())
            } else {
                property
            };
            PayloadElement::from(Resource::typed("NS.Customer").with_property(property))
        };
        verifier.verify_payload(&extra(true), extra(false)).unwrap();
    }

    #[test]
    fn test_reader_captures_are_not_compared() {
        let verifier = PayloadVerifier::new(PayloadFormat::Metadata, Box::new(ExactErrorComparer));
        let expected: PayloadElement =
            ResourceSet::new().with_resource(Resource::typed("NS.A")).into();
        let mut actual = expected.clone();
        actual.set_annotation(FeedEntryCapture::feed());
        verifier.verify_payload(&expected, actual).unwrap();
    }

    #[test]
    fn test_expansion_content_is_still_compared() {
        let verifier = PayloadVerifier::new(PayloadFormat::Json, Box::new(ExactErrorComparer));
        let link = |type_name: &str| -> PayloadElement {
            NavigationLink::new("Friend", false)
                .expanded(ExpandedNavigationItem::resource(Resource::typed(type_name)))
                .into()
        };
        assert!(verifier.verify_payload(&link("NS.Person"), link("NS.Person")).is_ok());
        assert!(matches!(
            verifier.verify_payload(&link("NS.Person"), link("NS.Robot")),
            Err(CompareError::PayloadMismatch { .. })
        ));

        let deferred: PayloadElement = NavigationLink::new("Friend", false).into();
        assert!(verifier.verify_payload(&link("NS.Person"), deferred).is_err());
    }
}
