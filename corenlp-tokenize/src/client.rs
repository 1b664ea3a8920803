//! Annotation client contract
//!
//! Transport, request encoding and response decoding belong to the client.
//! The tokenizers only hand it text plus a property mapping and read the
//! returned document.

use crate::properties::AnnotationProperties;
use corenlp_doc::AnnotationDocument;
use std::rc::Rc;
use std::sync::Arc;

/// Something that can run an annotation request against a server
pub trait AnnotationClient {
    /// Decoded response document
    type Document: AnnotationDocument;
    /// Transport, protocol or server error
    type Error;

    /// Annotate `text` with the given properties
    ///
    /// Blocks until the full response has been received and decoded.
    fn annotate(
        &self,
        text: &str,
        properties: &AnnotationProperties,
    ) -> Result<Self::Document, Self::Error>;
}

impl<C: AnnotationClient + ?Sized> AnnotationClient for &C {
    type Document = C::Document;
    type Error = C::Error;

    fn annotate(
        &self,
        text: &str,
        properties: &AnnotationProperties,
    ) -> Result<Self::Document, Self::Error> {
        (**self).annotate(text, properties)
    }
}

impl<C: AnnotationClient + ?Sized> AnnotationClient for Box<C> {
    type Document = C::Document;
    type Error = C::Error;

    fn annotate(
        &self,
        text: &str,
        properties: &AnnotationProperties,
    ) -> Result<Self::Document, Self::Error> {
        (**self).annotate(text, properties)
    }
}

impl<C: AnnotationClient + ?Sized> AnnotationClient for Rc<C> {
    type Document = C::Document;
    type Error = C::Error;

    fn annotate(
        &self,
        text: &str,
        properties: &AnnotationProperties,
    ) -> Result<Self::Document, Self::Error> {
        (**self).annotate(text, properties)
    }
}

impl<C: AnnotationClient + ?Sized> AnnotationClient for Arc<C> {
    type Document = C::Document;
    type Error = C::Error;

    fn annotate(
        &self,
        text: &str,
        properties: &AnnotationProperties,
    ) -> Result<Self::Document, Self::Error> {
        (**self).annotate(text, properties)
    }
}
