// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::AdminRepository,
    models::{admin::Admin, auth::Claims},
};

/// Emite um JWT HS256 com validade de 7 dias para o administrador.
pub fn create_token(admin_id: i32, jwt_secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::days(7);

    let claims = Claims {
        sub: admin_id,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

pub fn decode_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::InvalidToken)?;

    Ok(token_data.claims)
}

#[derive(Clone)]
pub struct AuthService {
    admin_repo: AdminRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(admin_repo: AdminRepository, jwt_secret: String) -> Self {
        Self {
            admin_repo,
            jwt_secret,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let admin = self
            .admin_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password = password.to_owned();
        let password_hash = admin.password_hash.clone();

        // bcrypt é caro; roda fora do runtime assíncrono.
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password, &password_hash))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        create_token(admin.id, &self.jwt_secret)
    }

    pub async fn validate_token(&self, token: &str) -> Result<Admin, AppError> {
        let claims = decode_token(token, &self.jwt_secret)?;

        self.admin_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "segredo-de-teste-suficientemente-longo";

    #[test]
    fn token_roundtrips_to_same_admin() {
        let token = create_token(42, SECRET).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Expirado além da tolerância padrão de 60s do jsonwebtoken.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            exp: (now - 120) as usize,
            iat: (now - 240) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        assert!(matches!(
            decode_token(&token, SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = create_token(7, SECRET).unwrap();
        assert!(matches!(
            decode_token(&token, "outro-segredo"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            decode_token("nao.eh.jwt", SECRET),
            Err(AppError::InvalidToken)
        ));
    }
}
