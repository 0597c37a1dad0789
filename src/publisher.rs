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

//! Interface of the external publisher the handler delegates to.

use std::fmt::Debug;

use crate::error::Error;

/// External collaborator writing generated content out
///
/// The handler hands over a key derived from the incoming host and path together with the raw
/// response body. Everything beyond that point is the publisher's business: mapping the key to
/// a file system location, creating directories, replacing files atomically or maintaining
/// compressed variants.
pub trait Publisher: Debug + Send + Sync {
    /// Publishes the content under the given key
    ///
    /// The key is the request's host concatenated with its path, e.g.
    /// `example.com/blog/post-1`. Errors are passed back to the caller unmodified, the handler
    /// performs no retries.
    fn publish(&self, key: &str, content: &[u8]) -> Result<(), Box<Error>>;
}
