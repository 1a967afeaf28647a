// Test modules for llm-arena
//
// Each source module has a matching test file that focuses on behaviour the
// rest of the crate relies on. Vendor wire formats are tested next to the
// providers; HTTP round trips live in the crate's tests/ directory.

// Shared fakes and fixtures
pub mod helpers;

pub mod error;
pub mod generation;
pub mod response_parser;
