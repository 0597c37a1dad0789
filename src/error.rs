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

//! Error type shared by configuration loading, handler setup and publishing.

use std::error;

/// Errors produced by this crate, boxed in all fallible signatures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file could not be opened or read
    #[error("failed reading configuration file: {0}")]
    ConfFile(#[from] std::io::Error),

    /// Configuration could not be deserialized
    #[error("failed parsing configuration: {0}")]
    ConfParse(#[from] serde_yaml::Error),

    /// The configured `request_processor` name is missing from the registry
    #[error("unknown request processor {0:?}")]
    UnknownProcessor(String),

    /// Failure reported by a publisher implementation
    #[error("{context}: {cause}")]
    Publish {
        /// Description of the failed operation
        context: &'static str,
        /// The underlying error
        cause: Box<dyn error::Error + Send + Sync>,
    },
}

impl Error {
    /// Wraps an underlying failure into a boxed publish error with some context.
    pub fn because(
        context: &'static str,
        cause: impl Into<Box<dyn error::Error + Send + Sync>>,
    ) -> Box<Self> {
        Box::new(Self::Publish {
            context,
            cause: cause.into(),
        })
    }
}
