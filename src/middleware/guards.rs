//! Access guards for protected routes.
//!
//! Guards are extractors: they run strictly before the handler body, and a
//! rejection short-circuits the request with 403 before the handler can
//! produce any side effect. They only read the authorization context the
//! token deserializer attached; requests that arrived without a usable
//! token simply have no context and are rejected here.

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::Claims;
use crate::error::AppError;

/// Passes only when the request carries an authorization context.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Claims>()
                .cloned()
                .map(AuthenticatedUser)
                .ok_or(AppError::Forbidden),
        )
    }
}

/// Passes only when the request carries an authorization context whose
/// embedded role is admin. The role is the one snapshotted at token
/// issuance, not the current database state.
pub struct AdminUser(pub Claims);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.extensions().get::<Claims>() {
            Some(claims) if claims.is_admin() => Ok(AdminUser(claims.clone())),
            _ => Err(AppError::Forbidden),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;
    use crate::models::{Role, User};

    fn claims_for(role: Role) -> Claims {
        let user = User::new(
            "test@example.com".into(),
            "tester".into(),
            "$2b$10$somedigest".into(),
            role,
        );
        Claims::new(&user, 3600)
    }

    #[actix_web::test]
    async fn authenticated_guard_rejects_missing_context() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedUser::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[actix_web::test]
    async fn authenticated_guard_passes_any_role() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims_for(Role::Regular));

        let user = AuthenticatedUser::from_request(&req, &mut Payload::None)
            .await
            .expect("guard should pass");
        assert_eq!(user.0.email, "test@example.com");
    }

    #[actix_web::test]
    async fn admin_guard_rejects_missing_context() {
        let req = TestRequest::default().to_http_request();
        let result = AdminUser::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[actix_web::test]
    async fn admin_guard_rejects_regular_role() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims_for(Role::Regular));

        let result = AdminUser::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[actix_web::test]
    async fn admin_guard_passes_admin_role() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims_for(Role::Admin));

        let user = AdminUser::from_request(&req, &mut Payload::None)
            .await
            .expect("guard should pass");
        assert!(user.0.is_admin());
    }
}
