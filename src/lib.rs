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

//! # Static Generator Module
//!
//! This crate turns successful responses into static files. Once the web application has
//! produced a response, the handler checks whether the request path is selected by one of the
//! configured URL patterns and, if so, hands the response body over to a publisher. Future
//! requests for the same path can then be served from disk without invoking the application
//! again. The list of patterns is defined in the configuration file, for example:
//!
//! ```yaml
//! generator_urls:
//! - ^/$
//! - ^/blog
//! ```
//!
//! ## Eligible responses
//!
//! Only `200 OK` responses are considered. Responses with any other status are passed on
//! unchanged, as are responses to requests whose path no pattern selects. The first matching
//! pattern wins, remaining patterns are not consulted.
//!
//! The published key is the request's host followed directly by its path, e.g.
//! `example.com/blog/post-1`. Keying by the incoming host allows maintaining separate static
//! trees for multiple sites behind the same server.
//!
//! ## Request processors
//!
//! A per-request veto can be configured via the `request_processor` setting. The value is a
//! name previously registered in a [`ProcessorRegistry`]; the corresponding function is called
//! with each eligible request/response pair and generation only proceeds if it returns `true`.
//! The name is resolved once when the handler is created, a name missing from the registry is
//! a configuration error. Without this setting every eligible response is generated.
//!
//! ## Code example
//!
//! The handler is framework-agnostic: anything able to present a completed exchange through
//! the [`RequestInfo`] and [`ResponseInfo`] traits can drive it. Implementations for the
//! `http` crate's request and response types are provided. The publisher performing the
//! actual file writes is supplied by the application:
//!
//! ```rust
//! use static_generator_module::{
//!     Error, FromYaml, ProcessorRegistry, Publisher, RequestInfo, ResponseInfo,
//!     StaticGeneratorConf, StaticGeneratorHandler,
//! };
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! /// Publishes generated files into the web root of the static files handler.
//! #[derive(Debug)]
//! struct WebRootPublisher {
//!     root: PathBuf,
//! }
//!
//! impl Publisher for WebRootPublisher {
//!     fn publish(&self, key: &str, content: &[u8]) -> Result<(), Box<Error>> {
//!         let target = self.root.join(key);
//!         if let Some(parent) = target.parent() {
//!             std::fs::create_dir_all(parent)
//!                 .map_err(|err| Error::because("failed creating target directory", err))?;
//!         }
//!         std::fs::write(&target, content)
//!             .map_err(|err| Error::because("failed writing static file", err))
//!     }
//! }
//!
//! fn skip_draft_pages(_request: &dyn RequestInfo, response: &dyn ResponseInfo) -> bool {
//!     !response.body().starts_with(b"<!-- draft -->")
//! }
//!
//! let conf = StaticGeneratorConf::from_yaml(
//!     r#"
//!         generator_urls:
//!         - ^/$
//!         - ^/blog
//!         request_processor: skip_draft_pages
//!     "#,
//! )
//! .unwrap();
//!
//! let mut processors = ProcessorRegistry::new();
//! processors.register("skip_draft_pages", skip_draft_pages);
//!
//! let publisher = Arc::new(WebRootPublisher {
//!     root: "generated".into(),
//! });
//! let handler = StaticGeneratorHandler::new(conf, &processors, publisher).unwrap();
//!
//! // Once a response has been produced, let the handler decide whether to keep it:
//! //
//! // handler.response_filter(&request, &response)?;
//! ```

use log::trace;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod configuration;
mod error;
mod handler;
mod processor;
mod publisher;
mod session;

pub use configuration::{StaticGeneratorConf, UrlPattern};
pub use error::Error;
pub use handler::StaticGeneratorHandler;
pub use processor::{ProcessorRegistry, RequestProcessor};
pub use publisher::Publisher;
pub use session::{RequestInfo, ResponseInfo};

/// Trait for configuration structures that can be loaded from YAML files. This trait has a
/// blanket implementation for any structure implementing [`serde::Deserialize`].
pub trait FromYaml {
    /// Parses configuration from a YAML string.
    fn from_yaml(yaml: &str) -> Result<Self, Box<Error>>
    where
        Self: Sized;

    /// Loads configuration from a YAML file.
    fn load_from_yaml<P>(path: P) -> Result<Self, Box<Error>>
    where
        P: AsRef<Path>,
        Self: Sized;
}

impl<D> FromYaml for D
where
    D: DeserializeOwned + Debug,
{
    fn from_yaml(yaml: &str) -> Result<Self, Box<Error>> {
        let conf = serde_yaml::from_str(yaml)
            .map_err(Error::from)
            .map_err(Box::new)?;
        trace!("Loaded configuration: {conf:#?}");

        Ok(conf)
    }

    fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<Error>> {
        let file = File::open(path.as_ref())
            .map_err(Error::from)
            .map_err(Box::new)?;
        let reader = BufReader::new(file);

        let conf = serde_yaml::from_reader(reader)
            .map_err(Error::from)
            .map_err(Box::new)?;
        trace!("Loaded configuration file: {conf:#?}");

        Ok(conf)
    }
}
