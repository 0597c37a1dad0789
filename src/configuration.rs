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

//! Structures required to deserialize Static Generator Module configuration from YAML
//! configuration files.

use regex::Regex;
use serde::Deserialize;
use std::fmt::{self, Display};

/// A URL pattern selecting request paths for static generation
///
/// The regular expression has to match at the beginning of the path but doesn't have to cover
/// it completely: `^/blog` selects `/blog` as well as `/blog/post-1`. A match starting further
/// into the path doesn't count, so the pattern `blog` selects nothing, the leading slash
/// already rules it out.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct UrlPattern {
    regex: Regex,
}

impl UrlPattern {
    /// Checks whether the given request path is selected by this pattern
    pub fn matches(&self, path: &str) -> bool {
        self.regex.find(path).is_some_and(|m| m.start() == 0)
    }
}

impl Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.regex.as_str().fmt(f)
    }
}

impl PartialEq for UrlPattern {
    fn eq(&self, other: &Self) -> bool {
        self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for UrlPattern {}

impl TryFrom<&str> for UrlPattern {
    type Error = regex::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self {
            regex: Regex::new(value)?,
        })
    }
}

impl TryFrom<String> for UrlPattern {
    type Error = regex::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().try_into()
    }
}

/// Configuration file settings of the static generator module
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaticGeneratorConf {
    /// Ordered list of URL patterns eligible for static generation
    ///
    /// Patterns are tried in the order they are listed, the first match wins. An empty list
    /// disables the module.
    pub generator_urls: Vec<UrlPattern>,

    /// Name of a request processor deciding per request whether generation should happen
    ///
    /// The name has to be registered in the [`ProcessorRegistry`](crate::ProcessorRegistry)
    /// handed to the handler. If omitted, every eligible response is generated.
    pub request_processor: Option<String>,
}
