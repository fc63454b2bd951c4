//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame and referrer policy)
//! 5. Session layer (tower-sessions with in-memory store)
//!
//! Extractors for the customer identity and the session token cookies live
//! here as well.

pub mod identity;
pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod tokens;

pub use identity::{OptionalCustomer, clear_current_customer, set_current_customer};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use tokens::{OptionalSessionTokens, SessionTokens};
