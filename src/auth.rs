use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::middleware::auth::AuthenticatedUser;

/// Claims carried by tokens from the identity provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct JwtVerifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &[u8], audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);

        Self {
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Checks signature, expiry and audience, then maps the claims to a user.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        let claims = token_data.claims;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sign_token, sign_token_with, TEST_AUDIENCE, TEST_JWT_SECRET};

    fn verifier() -> JwtVerifier {
        JwtVerifier::new(TEST_JWT_SECRET.as_bytes(), TEST_AUDIENCE)
    }

    #[test]
    fn accepts_a_valid_token() {
        let user = verifier().verify(&sign_token("user-1")).unwrap();
        assert_eq!(user.user_id, "user-1");
        assert_eq!(user.email.as_deref(), Some("user-1@example.com"));
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = sign_token_with("user-1", b"some-other-secret", TEST_AUDIENCE, 3600);
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn rejects_wrong_audience() {
        let token = sign_token_with("user-1", TEST_JWT_SECRET.as_bytes(), "anon", 3600);
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let token = sign_token_with("user-1", TEST_JWT_SECRET.as_bytes(), TEST_AUDIENCE, -7200);
        assert!(verifier().verify(&token).is_err());
    }
}
