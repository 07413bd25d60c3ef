//! Authentication services: static-credential login and JWT issuing/verification

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{JwtConfig, LoginConfig};
use crate::error::{AppError, AppResult};

/// Checks credentials against the single configured account
#[derive(Clone)]
pub struct LoginService {
    email: String,
    password: String,
}

impl LoginService {
    pub fn new(config: &LoginConfig) -> Self {
        Self {
            email: config.email.clone(),
            password: config.password.clone(),
        }
    }

    pub fn login(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub admin: bool,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
}

/// Why a token was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token cannot be parsed at all
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Parsed, but the signature, expiry or issuer check failed
    #[error("invalid token: {0}")]
    Invalid(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Malformed(err.to_string()),
            _ => TokenError::Invalid(err.to_string()),
        }
    }
}

/// Signs and verifies HS256 tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    token_expiry: i64,
}

impl JwtService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            token_expiry: config.token_expiry,
        }
    }

    pub fn generate_token(&self, subject: &str, admin: bool) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            admin,
            iss: self.issuer.clone(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "token generation failed");
            AppError::InternalServerError
        })
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}
