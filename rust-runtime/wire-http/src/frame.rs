/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The transport neutral output of the marshaller.

use crate::query;
use bytes::Bytes;
use http::header::HeaderMap;
use http::{Method, Uri};

/// A marshalled request: everything the dispatcher needs to send it, apart from the endpoint.
#[derive(Debug, Clone)]
pub struct WireFrame {
    /// HTTP method
    pub method: Method,
    /// Path with its labels substituted and encoded
    pub path: String,
    /// Query parameters in order, unencoded. Keys may repeat.
    pub query: Vec<(String, String)>,
    /// Headers, including `Content-Type` and `Content-Length` when there is a body
    pub headers: HeaderMap,
    /// Serialized body
    pub body: Bytes,
}

impl WireFrame {
    /// An empty frame for `method` and `path`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        WireFrame {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// The first value of the query parameter `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The header `name`, if it is present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    /// The encoded query string, without the `?`.
    pub fn query_string(&self) -> String {
        query::render(&self.query)
    }

    /// The encoded path and query string.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }

    /// Renders the frame as a request against `endpoint`.
    ///
    /// The endpoint's scheme and authority are kept, and its path (if any) prefixes the frame's.
    pub fn into_http_request(self, endpoint: &Uri) -> Result<http::Request<Bytes>, http::Error> {
        let prefix = endpoint.path().trim_end_matches('/');
        let mut uri = Uri::builder();
        if let Some(scheme) = endpoint.scheme_str() {
            uri = uri.scheme(scheme);
        }
        if let Some(authority) = endpoint.authority() {
            uri = uri.authority(authority.as_str());
        }
        let uri = uri
            .path_and_query(format!("{}{}", prefix, self.path_and_query()))
            .build()?;
        let mut request = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(self.body)?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}
