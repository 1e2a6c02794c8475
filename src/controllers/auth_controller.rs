use bcrypt::{hash, verify};
use tracing::{info, warn};

use crate::dto::auth_dto::CredentialsRequest;
use crate::dto::vehicle_dto::MessageResponse;
use crate::models::user::UserProfile;
use crate::repositories::SharedStore;
use crate::utils::errors::AppError;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Registro y login con contraseñas bcrypt
pub struct AuthController {
    store: SharedStore,
    bcrypt_cost: u32,
}

impl AuthController {
    pub fn new(store: SharedStore, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    pub async fn register(&self, request: CredentialsRequest) -> Result<MessageResponse, AppError> {
        let username = request.username.trim().to_string();
        let cost = self.bcrypt_cost;

        // bcrypt es costoso: fuera del runtime async
        let password_hash = tokio::task::spawn_blocking(move || hash(request.password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self.store.create_user(&username, &password_hash).await?;
        info!("👤 Usuario registrado: {} (id {})", user.username, user.id);

        Ok(MessageResponse::new("User registered successfully"))
    }

    pub async fn login(&self, request: CredentialsRequest) -> Result<UserProfile, AppError> {
        let username = request.username.trim();

        let Some(user) = self.store.find_by_username(username).await? else {
            warn!("🔒 Login con usuario desconocido: {}", username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        let stored_hash = user.password.clone();
        let valid = tokio::task::spawn_blocking(move || verify(request.password, &stored_hash))
            .await
            .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            warn!("🔒 Contraseña incorrecta para {}", user.username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        info!("🔓 Login correcto: {}", user.username);
        Ok(UserProfile::from(user))
    }
}
