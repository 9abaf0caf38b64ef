use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::info;

use super::db::UserDb;
use super::models::{
    BookingRecord, BookingRequest, LoginRequest, OceanScores, RegisterRequest, UserProfile,
};
use crate::core::error::{Result, YunoError};

const SEED_PASSWORD: &str = "password123";

/// Registration, login and booking on top of the SQLite user store.
/// Passwords are bcrypt-hashed; bookings never influence retrieval.
pub struct AuthService {
    db: UserDb,
}

impl AuthService {
    pub fn new(db: UserDb) -> Self {
        Self { db }
    }

    /// Seeds synthetic users on first start so a fresh deployment has
    /// accounts to log into. All seeded accounts share a default password.
    pub fn seed_if_empty(&self, seed: u64) -> Result<usize> {
        if self.db.user_count()? > 0 {
            return Ok(0);
        }
        let password_hash = hash(SEED_PASSWORD, DEFAULT_COST)?;
        self.db.seed_users_if_empty(&password_hash, seed)
    }

    pub fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
        if request.username.trim().is_empty() || request.password.is_empty() {
            return Err(YunoError::Validation(
                "username and password must not be empty".to_string(),
            ));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)?;
        let profile =
            self.db
                .create_user(&request.username, &password_hash, &request.education_level)?;

        info!("Registered user '{}'", profile.username);
        Ok(profile)
    }

    pub fn login(&self, request: &LoginRequest) -> Result<UserProfile> {
        let stored = self
            .db
            .fetch_by_username(&request.username)?
            .ok_or(YunoError::Unauthorized)?;

        if !verify(&request.password, &stored.password_hash)? {
            return Err(YunoError::Unauthorized);
        }

        let ocean_scores = serde_json::from_str::<OceanScores>(&stored.ocean_scores_json)
            .unwrap_or_default();

        Ok(UserProfile {
            user_id: stored.user_id,
            username: stored.username,
            education_level: stored.education_level,
            riasec_code: stored.riasec_code,
            ocean_scores,
        })
    }

    pub fn book(&self, request: &BookingRequest) -> Result<BookingRecord> {
        let booking =
            self.db
                .create_booking(request.user_id, &request.event_id, &request.event_type)?;
        info!(
            "Booking {} created for user {} ({})",
            booking.booking_id, booking.user_id, booking.event_id
        );
        Ok(booking)
    }

    pub fn bookings(&self, user_id: i64) -> Result<Vec<BookingRecord>> {
        self.db.bookings_for_user(user_id)
    }
}
