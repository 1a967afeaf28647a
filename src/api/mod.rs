//! HTTP surface of the arena
//!
//! - `POST /api/llm`: one call to the fast model, text or JSON; same-origin
//!   or sandboxed (`Origin: null`) callers only, with open CORS headers
//! - `POST /api/generate`: fan a prompt out to many models behind the admission gate
//! - `GET /api/models`: the integrated catalogue and configured providers
//! - `GET /healthz`: liveness

mod error;
mod extractors;
mod handlers;
mod middleware;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use extractors::AppJson;
pub use middleware::CROSS_ORIGIN_MESSAGE;
pub use handlers::{
    FormatType, GenerateRequest, GenerateResponse, GenerationResultView, LlmRequest,
};
pub use routes::create_router;
pub use state::AppState;
