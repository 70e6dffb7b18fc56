pub use self::error::ErrorMiddleware;
pub use self::security_headers::SecurityHeadersMiddleware;
pub use self::sentry::SentryMiddleware;
pub use self::timeit::TimeItMiddleware;

mod error;
mod security_headers;
mod sentry;
mod timeit;
