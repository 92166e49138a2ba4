//! Logging middleware
//!
//! One `tracing` event per request, tagged with the acting user when an
//! inner `JwtAuthMiddleware` resolved one. Requests rejected by an inner
//! middleware are logged with the status their error renders to.

use crate::jwt_auth::UserId;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, StatusCode},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::time::Instant;

/// Middleware that logs HTTP requests and responses
#[derive(Clone, Default)]
pub struct Logging;

impl<S, B> Transform<S, ServiceRequest> for Logging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LoggingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggingService { inner: service }))
    }
}

pub struct LoggingService<S> {
    inner: S,
}

/// Request facts captured before the inner service consumes the request.
struct RequestLog {
    method: Method,
    path: String,
    started: Instant,
}

impl RequestLog {
    fn begin(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().clone(),
            path: req.path().to_string(),
            started: Instant::now(),
        }
    }

    fn finish(self, status: StatusCode, user_id: Option<i64>, outcome: &str) {
        tracing::info!(
            method = %self.method,
            path = %self.path,
            status = status.as_u16(),
            user_id = ?user_id,
            duration_ms = self.started.elapsed().as_millis() as u64,
            outcome,
            "HTTP request finished"
        );
    }
}

impl<S, B> Service<ServiceRequest> for LoggingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let log = RequestLog::begin(&req);
        let fut = self.inner.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let user_id = res.request().extensions().get::<UserId>().map(|u| u.0);
                    log.finish(res.status(), user_id, "completed");
                    Ok(res)
                }
                Err(err) => {
                    log.finish(err.as_response_error().status_code(), None, "rejected");
                    Err(err)
                }
            }
        })
    }
}
