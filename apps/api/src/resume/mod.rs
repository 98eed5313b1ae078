// Resume data pipeline: parsed model <-> builder form data, and enhancement diffs.
// Everything here is pure and synchronous; handlers are thin JSON adapters.

pub mod converter;
pub mod differ;
pub mod handlers;
