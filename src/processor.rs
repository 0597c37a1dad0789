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

//! Registry connecting request processor names used in configuration files to the functions
//! implementing them.

use std::collections::HashMap;

use crate::error::Error;
use crate::session::{RequestInfo, ResponseInfo};

/// Per-request decision callback
///
/// Called with each exchange that passed the status and URL checks; returning `false` vetoes
/// static generation for this particular request.
pub type RequestProcessor = fn(&dyn RequestInfo, &dyn ResponseInfo) -> bool;

/// Registry of named request processors
///
/// Configuration files refer to processors by name, the application registers the actual
/// functions here during startup. The registry is only consulted when a handler is created,
/// it can be dropped afterwards.
#[derive(Debug, Default, Clone)]
pub struct ProcessorRegistry {
    processors: HashMap<String, RequestProcessor>,
}

impl ProcessorRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes a processor available under the given name
    ///
    /// Registering the same name twice replaces the earlier entry.
    pub fn register(&mut self, name: impl Into<String>, processor: RequestProcessor) {
        self.processors.insert(name.into(), processor);
    }

    /// Looks up a processor by its registered name
    pub fn resolve(&self, name: &str) -> Result<RequestProcessor, Box<Error>> {
        self.processors
            .get(name)
            .copied()
            .ok_or_else(|| Box::new(Error::UnknownProcessor(name.to_owned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use http::{Request, Response};
    use test_log::test;

    fn accept_all(_request: &dyn RequestInfo, _response: &dyn ResponseInfo) -> bool {
        true
    }

    fn reject_all(_request: &dyn RequestInfo, _response: &dyn ResponseInfo) -> bool {
        false
    }

    fn run(processor: RequestProcessor) -> bool {
        let request = Request::builder().uri("/").body(()).unwrap();
        let response = Response::builder().body(Vec::<u8>::new()).unwrap();
        processor(&request, &response)
    }

    #[test]
    fn resolves_registered_names() {
        let mut registry = ProcessorRegistry::new();
        registry.register("accept_all", accept_all);
        registry.register("reject_all", reject_all);

        assert!(run(registry.resolve("accept_all").unwrap()));
        assert!(!run(registry.resolve("reject_all").unwrap()));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = ProcessorRegistry::new();
        let err = registry.resolve("missing").unwrap_err();
        assert!(matches!(*err, Error::UnknownProcessor(ref name) if name == "missing"));
    }

    #[test]
    fn later_registration_wins() {
        let mut registry = ProcessorRegistry::new();
        registry.register("processor", accept_all);
        registry.register("processor", reject_all);

        assert!(!run(registry.resolve("processor").unwrap()));
    }
}
