//! Request authenticator middleware.
//!
//! Runs once per request before any route logic. If the `Authorization`
//! header carries a bearer token that verifies, the decoded claims are
//! inserted into the request extensions as the authorization context for
//! the rest of the request. In every other case (no header, no `Bearer `
//! prefix, expired or invalid token) the request proceeds unauthenticated;
//! this middleware never terminates a request itself, the access guards
//! downstream decide.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::rc::Rc;

use crate::auth::{verify_token, TokenVerification};
use crate::configuration::JwtSettings;

pub struct DeserializeToken {
    jwt_config: JwtSettings,
}

impl DeserializeToken {
    pub fn new(jwt_config: JwtSettings) -> Self {
        Self { jwt_config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for DeserializeToken
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = DeserializeTokenService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(DeserializeTokenService {
            service: Rc::new(service),
            jwt_config: self.jwt_config.clone(),
        }))
    }
}

pub struct DeserializeTokenService<S> {
    service: Rc<S>,
    jwt_config: JwtSettings,
}

impl<S, B> Service<ServiceRequest> for DeserializeTokenService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let bearer = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_owned);

        if let Some(token) = bearer {
            match verify_token(&token, &self.jwt_config) {
                TokenVerification::Valid(claims) => {
                    tracing::debug!(
                        user_id = %claims.user_id,
                        email = %claims.email,
                        "Session token deserialized"
                    );
                    req.extensions_mut().insert(claims);
                }
                TokenVerification::Expired => {
                    tracing::debug!("Expired session token presented");
                }
                TokenVerification::Invalid => {
                    tracing::debug!("Invalid session token presented");
                }
            }
        }

        let service = self.service.clone();
        Box::pin(async move { service.call(req).await })
    }
}
