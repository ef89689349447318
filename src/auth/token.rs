//! Token Service - 签发与校验 JWT
//!
//! 密钥只在构造时注入，之后只读；过期时间由本服务自行判断，
//! 以便区分过期、签名无效与格式错误三种失败。

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 应用身份（app_key）
    pub sub: String,
    /// 签发方
    pub iss: String,
    /// 签发时间（unix 秒）
    pub iat: i64,
    /// 过期时间（unix 秒）
    pub exp: i64,
}

/// 签发失败
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningError {
    #[error("token identity must not be empty")]
    EmptyIdentity,

    #[error("signing key unavailable")]
    KeyUnavailable,

    #[error("token expiry out of range")]
    ExpiryOutOfRange,

    #[error("failed to encode token: {0}")]
    Encode(String),
}

/// 校验失败
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    #[error("malformed token")]
    Malformed,

    #[error("token expired")]
    Expired,

    #[error("invalid token signature")]
    SignatureInvalid,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Token 服务
pub struct TokenService {
    keys: Option<Keys>,
    issuer: String,
    ttl: Duration,
}

impl TokenService {
    /// 空密钥视为密钥不可用：签发失败，校验一律判为签名无效
    pub fn new(secret: &str, issuer: impl Into<String>, ttl: Duration) -> Self {
        let keys = (!secret.is_empty()).then(|| Keys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        });

        Self {
            keys,
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 为 identity 签发 token
    pub fn issue(&self, identity: &str) -> Result<String, SigningError> {
        self.issue_at(identity, Utc::now())
    }

    pub fn issue_at(&self, identity: &str, now: DateTime<Utc>) -> Result<String, SigningError> {
        if identity.is_empty() {
            return Err(SigningError::EmptyIdentity);
        }
        let keys = self.keys.as_ref().ok_or(SigningError::KeyUnavailable)?;
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(SigningError::ExpiryOutOfRange)?;

        let claims = Claims {
            sub: identity.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| SigningError::Encode(e.to_string()))
    }

    /// 校验 token，返回其中的 identity
    pub fn verify(&self, token: &str) -> Result<String, VerifyError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, VerifyError> {
        self.claims_at(token, now).map(|claims| claims.sub)
    }

    /// 签名先于过期时间检查：签名无效的 token 其 exp 不可信
    pub fn claims_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, VerifyError> {
        let keys = self.keys.as_ref().ok_or(VerifyError::SignatureInvalid)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.set_issuer(&[self.issuer.as_str()]);

        let data = decode::<Claims>(token, &keys.decoding, &validation).map_err(classify)?;

        if now.timestamp() > data.claims.exp {
            return Err(VerifyError::Expired);
        }

        Ok(data.claims)
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> VerifyError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm | ErrorKind::InvalidIssuer => {
            VerifyError::SignatureInvalid
        }
        ErrorKind::ExpiredSignature => VerifyError::Expired,
        _ => VerifyError::Malformed,
    }
}
