//! Signed token encoding and decoding
//!
//! Pure CPU-bound serialization of token payloads into tamper-evident,
//! self-expiring JWT strings. No side effects and no store access; the
//! revocation checks live in the token service.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::TokenPayload;
use crate::errors::{DomainError, TokenError};

/// Codec for signed, expiring token payloads
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec for a shared secret and HMAC algorithm
    ///
    /// Encode and decode must use the same secret and algorithm; a token
    /// signed under any other pair is rejected as invalid.
    pub fn new(secret: &str, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        // A token is expired the instant `exp` is reached
        validation.leeway = 0;
        // Payloads carry no audience claim
        validation.validate_aud = false;

        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Serializes a payload into a signed token string
    pub fn encode(&self, payload: &TokenPayload) -> Result<String, DomainError> {
        let header = Header::new(self.algorithm);
        encode(&header, payload, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a token string and returns its payload
    ///
    /// # Returns
    /// * `Ok(TokenPayload)` - Signature and expiry are valid
    /// * `Err(TokenError::ExpiredToken)` - Signature valid but past `exp`
    /// * `Err(TokenError::InvalidToken)` - Malformed or wrong signature
    pub fn decode(&self, token: &str) -> Result<TokenPayload, DomainError> {
        let data =
            decode::<TokenPayload>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::ExpiredToken)
                    }
                    _ => DomainError::Token(TokenError::InvalidToken),
                }
            })?;

        Ok(data.claims)
    }
}
