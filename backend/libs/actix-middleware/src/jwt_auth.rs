use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// User ID extracted from JWT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

/// How the middleware treats requests without a usable token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Missing or invalid credentials are rejected with 401.
    Required,
    /// Missing or invalid credentials leave the request anonymous; handlers
    /// that need an identity reject it through the `UserId` extractor.
    Optional,
}

/// JWT Authentication Middleware
pub struct JwtAuthMiddleware {
    mode: AuthMode,
}

impl JwtAuthMiddleware {
    pub fn required() -> Self {
        Self {
            mode: AuthMode::Required,
        }
    }

    pub fn optional() -> Self {
        Self {
            mode: AuthMode::Optional,
        }
    }
}

impl Default for JwtAuthMiddleware {
    fn default() -> Self {
        Self::required()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = JwtAuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
    mode: AuthMode,
}

/// Resolve the `Authorization` header into a user id.
fn authenticate(req: &ServiceRequest) -> Result<Option<UserId>, &'static str> {
    let Some(header) = req.headers().get("Authorization") else {
        return Ok(None);
    };

    let auth_header = header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or("Invalid Authorization header format")?;

    let user_id = crypto_core::jwt::get_user_id_from_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        "Invalid or expired token"
    })?;

    Ok(Some(UserId(user_id)))
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            match (authenticate(&req), mode) {
                (Ok(Some(user_id)), _) => {
                    req.extensions_mut().insert(user_id);
                }
                (Ok(None), AuthMode::Required) => {
                    return Err(actix_web::error::ErrorUnauthorized(
                        "Missing Authorization header",
                    ));
                }
                (Err(reason), AuthMode::Required) => {
                    return Err(actix_web::error::ErrorUnauthorized(reason));
                }
                (Ok(None), AuthMode::Optional) => {}
                (Err(reason), AuthMode::Optional) => {
                    tracing::debug!(reason, "continuing without authenticated user");
                }
            }

            service.call(req).await
        })
    }
}

/// FromRequest implementation for UserId
impl actix_web::FromRequest for UserId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        match req.extensions().get::<UserId>() {
            Some(user_id) => ready(Ok(*user_id)),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "User not authenticated",
            ))),
        }
    }
}
