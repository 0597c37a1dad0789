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

//! Handler for the response completion phase.

use http::StatusCode;
use log::{debug, trace};
use std::borrow::Cow;
use std::sync::Arc;

use crate::configuration::{StaticGeneratorConf, UrlPattern};
use crate::error::Error;
use crate::processor::{ProcessorRegistry, RequestProcessor};
use crate::publisher::Publisher;
use crate::session::{RequestInfo, ResponseInfo};

/// Handler deciding after each completed exchange whether the response should be published as
/// a static file
#[derive(Debug, Clone)]
pub struct StaticGeneratorHandler {
    urls: Vec<UrlPattern>,
    processor: Option<RequestProcessor>,
    publisher: Arc<dyn Publisher>,
}

impl StaticGeneratorHandler {
    /// Creates a new handler from its configuration
    ///
    /// A configured `request_processor` name is resolved against the registry here, exactly
    /// once; a name missing from the registry is a configuration error. The registry isn't
    /// needed afterwards.
    pub fn new(
        conf: StaticGeneratorConf,
        processors: &ProcessorRegistry,
        publisher: Arc<dyn Publisher>,
    ) -> Result<Self, Box<Error>> {
        debug!("Static generator configuration received: {conf:#?}");

        let processor = conf
            .request_processor
            .as_deref()
            .map(|name| processors.resolve(name))
            .transpose()?;

        Ok(Self {
            urls: conf.generator_urls,
            processor,
            publisher,
        })
    }

    /// Decides whether a static file should be generated for this particular exchange
    ///
    /// Without a configured request processor every exchange is approved.
    fn should_generate(&self, request: &dyn RequestInfo, response: &dyn ResponseInfo) -> bool {
        match self.processor {
            Some(processor) => processor(request, response),
            None => true,
        }
    }

    /// Handler to run once the response is complete
    ///
    /// Successful responses to requests whose path is selected by one of the configured URL
    /// patterns are handed to the publisher under the `host + path` key. In all other cases
    /// this is a no-op; the response itself is passed on unchanged either way. Publisher
    /// failures are propagated to the caller.
    pub fn response_filter(
        &self,
        request: &impl RequestInfo,
        response: &impl ResponseInfo,
    ) -> Result<(), Box<Error>> {
        if response.status() != StatusCode::OK {
            trace!(
                "Skipping static generation, response status is {}",
                response.status()
            );
            return Ok(());
        }

        if !self.should_generate(request, response) {
            trace!(
                "Request processor rejected static generation for {}",
                request.path()
            );
            return Ok(());
        }

        let path = request.path();
        if let Some(url) = self.urls.iter().find(|url| url.matches(path)) {
            // The host never carries a trailing slash while the path always leads with one,
            // so plain concatenation produces an unambiguous key.
            let host = request.host().unwrap_or(Cow::Borrowed(""));
            let key = format!("{host}{path}");
            debug!("Publishing static file {key} for pattern {url}");
            self.publisher.publish(&key, response.body())?;
        } else {
            trace!("No URL pattern selected path {path}");
        }

        Ok(())
    }
}
