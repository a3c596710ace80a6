//! Post-processing of responses.
//!
//! Every protocol session owns one [`ResponseTransform`] which turns a raw
//! [`Response`] into the value returned from the request operations.

use crate::error::Result;
use crate::sansio::Response;
use crate::xml::XmlElement;

pub trait ResponseTransform {
    type Output;

    fn transform(&self, response: Response) -> Result<Self::Output>;
}

/// Returns the response as text, decoding invalid UTF-8 lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrTransform;

impl ResponseTransform for StrTransform {
    type Output = String;

    fn transform(&self, response: Response) -> Result<String> {
        Ok(response.to_string())
    }
}

/// Returns the parsed root element.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlTransform;

impl ResponseTransform for XmlTransform {
    type Output = XmlElement;

    fn transform(&self, response: Response) -> Result<XmlElement> {
        response.xml().cloned()
    }
}

/// Fails with [`Error::Status`](crate::Error::Status) for non-success responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckStatusTransform;

impl ResponseTransform for CheckStatusTransform {
    type Output = Response;

    fn transform(&self, response: Response) -> Result<Response> {
        response.raise_for_status()?;
        Ok(response)
    }
}

/// [`CheckStatusTransform`] followed by [`XmlTransform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCheckStatusTransform;

impl ResponseTransform for XmlCheckStatusTransform {
    type Output = XmlElement;

    fn transform(&self, response: Response) -> Result<XmlElement> {
        response.raise_for_status()?.xml().cloned()
    }
}

/// Adapts a closure into a [`ResponseTransform`].
#[derive(Debug, Clone, Copy)]
pub struct FnTransform<F>(pub F);

impl<F, O> ResponseTransform for FnTransform<F>
where
    F: Fn(Response) -> Result<O>,
{
    type Output = O;

    fn transform(&self, response: Response) -> Result<O> {
        (self.0)(response)
    }
}
