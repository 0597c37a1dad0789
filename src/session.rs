// Copyright 2024 Wladimir Palant
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Minimal request and response capabilities required by the handler.
//!
//! The handler doesn't depend on any particular web framework, it merely needs to see the host
//! and path of the request along with the status and body of the completed response. The
//! traits here express exactly that; implementations for the `http` crate's types are
//! provided, adapters for other frameworks are expected to be just as small.

use http::header;
use http::{HeaderMap, Request, Response, StatusCode};
use std::borrow::Cow;

/// Request side of a completed exchange
pub trait RequestInfo {
    /// Host this request was made for
    ///
    /// Taken from the request URI if absolute, falling back to the `Host` header otherwise.
    fn host(&self) -> Option<Cow<'_, str>>;

    /// Path component of the request URI
    fn path(&self) -> &str;
}

/// Response side of a completed exchange
pub trait ResponseInfo {
    /// Response status code
    fn status(&self) -> StatusCode;

    /// Raw response body
    fn body(&self) -> &[u8];
}

fn host_from_headers(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    headers
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .map(Cow::Borrowed)
}

impl<B> RequestInfo for Request<B> {
    fn host(&self) -> Option<Cow<'_, str>> {
        self.uri()
            .host()
            .map(Cow::Borrowed)
            .or_else(|| host_from_headers(self.headers()))
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

impl<B> ResponseInfo for Response<B>
where
    B: AsRef<[u8]>,
{
    fn status(&self) -> StatusCode {
        Response::status(self)
    }

    fn body(&self) -> &[u8] {
        Response::body(self).as_ref()
    }
}
