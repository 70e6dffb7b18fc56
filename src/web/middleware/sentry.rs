use std::collections::BTreeMap;

use poem::http::Method;
use poem::{Endpoint, Middleware, Request, Result};

/// Whether the request carries an observation form.
fn is_submission(request: &Request) -> bool {
    request.method() == Method::POST && matches!(request.uri().path(), "/" | "/api/submit")
}

/// Tags the Sentry scope with the request.
pub struct SentryMiddleware;

impl<E: Endpoint> Middleware<E> for SentryMiddleware {
    type Output = SentryMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SentryMiddlewareImpl { ep }
    }
}

pub struct SentryMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SentryMiddlewareImpl<E> {
    type Output = E::Output;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        sentry::configure_scope(|scope| {
            scope.set_tag("request.method", request.method().as_str());
            scope.set_tag("request.path", request.uri().path());
            scope.set_tag("request.remote_addr", request.remote_addr());

            let mut context = BTreeMap::new();
            context.insert(
                "content_type".to_string(),
                request.content_type().into(),
            );
            context.insert(
                "content_length".to_string(),
                request
                    .header("Content-Length")
                    .and_then(|value| value.parse::<u64>().ok())
                    .into(),
            );
            context.insert(
                "is_submission".to_string(),
                is_submission(&request).into(),
            );
            scope.set_context("request", sentry::protocol::Context::Other(context));
        });
        self.ep.call(request).await
    }
}
