use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use super::models::{BookingRecord, OceanScores, UserProfile};
use crate::core::error::{Result, YunoError};

const RIASEC_LETTERS: [char; 6] = ['R', 'I', 'A', 'S', 'E', 'C'];
const EDUCATION_LEVELS: [&str; 2] = ["Secondary", "Post-Secondary"];
const SEED_USERNAMES: [&str; 15] = [
    "aisha_tan", "ben_lim", "clara_ng", "daniel_koh", "elena_goh", "farhan_yusof", "grace_lee",
    "harith_omar", "ivy_chua", "jun_wei", "kavya_raj", "liang_zhao", "mei_ling", "nadia_rahim",
    "oscar_teo",
];
/// Row as stored, before the password hash is checked and dropped.
pub struct StoredUser {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub education_level: String,
    pub riasec_code: String,
    pub ocean_scores_json: String,
}

/// SQLite-backed store for users, personality profiles and bookings.
/// The connection is mutex-guarded; every operation is a short transaction
/// against a small local file (or `:memory:` in tests).
pub struct UserDb {
    conn: Mutex<Connection>,
}

impl UserDb {
    pub fn open(path: &str) -> Result<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                education_level TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );
            CREATE TABLE IF NOT EXISTS user_profiles (
                user_id INTEGER PRIMARY KEY,
                riasec_code TEXT NOT NULL,
                ocean_scores TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id)
            );
            CREATE TABLE IF NOT EXISTS bookings (
                booking_id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                event_id TEXT NOT NULL,
                event_type TEXT NOT NULL,
                status TEXT DEFAULT 'confirmed',
                booking_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (user_id) REFERENCES users (id)
            );
            "#,
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn user_count(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Seeds a batch of synthetic students when the user table is empty.
    /// All seeded accounts share one default password; profiles get a
    /// random 3-letter RIASEC code and OCEAN scores in 1..=100.
    pub fn seed_users_if_empty(&self, password_hash: &str, seed: u64) -> Result<usize> {
        if self.user_count()? > 0 {
            return Ok(0);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut seeded = 0;
        let conn = self.conn.lock();

        for username in SEED_USERNAMES {
            let education = *EDUCATION_LEVELS.choose(&mut rng).unwrap();
            let riasec: String = RIASEC_LETTERS
                .choose_multiple(&mut rng, 3)
                .collect();
            let ocean = OceanScores {
                openness: rng.gen_range(1..=100),
                conscientiousness: rng.gen_range(1..=100),
                extraversion: rng.gen_range(1..=100),
                agreeableness: rng.gen_range(1..=100),
                neuroticism: rng.gen_range(1..=100),
            };

            conn.execute(
                "INSERT INTO users (username, password_hash, education_level) VALUES (?1, ?2, ?3)",
                params![username, password_hash, education],
            )?;
            let user_id = conn.last_insert_rowid();
            conn.execute(
                "INSERT INTO user_profiles (user_id, riasec_code, ocean_scores) VALUES (?1, ?2, ?3)",
                params![user_id, riasec, serde_json::to_string(&ocean)?],
            )?;
            seeded += 1;
        }

        info!("Seeded {} synthetic users", seeded);
        Ok(seeded)
    }

    /// Inserts a user plus a default profile (unknown RIASEC, neutral OCEAN)
    /// in one transaction. Fails if the username is taken.
    pub fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        education_level: &str,
    ) -> Result<UserProfile> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let taken: Option<i64> = tx
            .query_row(
                "SELECT id FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;
        if taken.is_some() {
            return Err(YunoError::Validation(
                "Username already registered".to_string(),
            ));
        }

        tx.execute(
            "INSERT INTO users (username, password_hash, education_level) VALUES (?1, ?2, ?3)",
            params![username, password_hash, education_level],
        )?;
        let user_id = tx.last_insert_rowid();

        let ocean = OceanScores::default();
        tx.execute(
            "INSERT INTO user_profiles (user_id, riasec_code, ocean_scores) VALUES (?1, 'UNK', ?2)",
            params![user_id, serde_json::to_string(&ocean)?],
        )?;
        tx.commit()?;

        Ok(UserProfile {
            user_id,
            username: username.to_string(),
            education_level: education_level.to_string(),
            riasec_code: "UNK".to_string(),
            ocean_scores: ocean,
        })
    }

    pub fn fetch_by_username(&self, username: &str) -> Result<Option<StoredUser>> {
        let conn = self.conn.lock();
        let user = conn
            .query_row(
                r#"
                SELECT u.id, u.username, u.password_hash, u.education_level,
                       p.riasec_code, p.ocean_scores
                FROM users u
                LEFT JOIN user_profiles p ON u.id = p.user_id
                WHERE u.username = ?1
                "#,
                params![username],
                |row| {
                    Ok(StoredUser {
                        user_id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                        education_level: row.get(3)?,
                        riasec_code: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                        ocean_scores_json: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    pub fn create_booking(
        &self,
        user_id: i64,
        event_id: &str,
        event_type: &str,
    ) -> Result<BookingRecord> {
        let booking_date = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO bookings (user_id, event_id, event_type, status, booking_date) VALUES (?1, ?2, ?3, 'confirmed', ?4)",
            params![user_id, event_id, event_type, booking_date],
        )?;

        Ok(BookingRecord {
            booking_id: conn.last_insert_rowid(),
            user_id,
            event_id: event_id.to_string(),
            event_type: event_type.to_string(),
            status: "confirmed".to_string(),
            booking_date,
        })
    }

    pub fn bookings_for_user(&self, user_id: i64) -> Result<Vec<BookingRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT booking_id, user_id, event_id, event_type, status, booking_date FROM bookings WHERE user_id = ?1",
        )?;
        let records = stmt
            .query_map(params![user_id], Self::booking_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn booking_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookingRecord> {
        Ok(BookingRecord {
            booking_id: row.get(0)?,
            user_id: row.get(1)?,
            event_id: row.get(2)?,
            event_type: row.get(3)?,
            status: row.get(4)?,
            booking_date: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> UserDb {
        UserDb::open(":memory:").unwrap()
    }

    #[test]
    fn test_create_user_and_fetch() {
        let db = memory_db();
        let profile = db.create_user("clara_ng", "hash", "Secondary").unwrap();
        assert_eq!(profile.riasec_code, "UNK");
        assert_eq!(profile.ocean_scores, OceanScores::default());

        let stored = db.fetch_by_username("clara_ng").unwrap().unwrap();
        assert_eq!(stored.user_id, profile.user_id);
        assert_eq!(stored.password_hash, "hash");
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let db = memory_db();
        db.create_user("clara_ng", "hash", "Secondary").unwrap();
        let result = db.create_user("clara_ng", "hash2", "Post-Secondary");
        assert!(matches!(result, Err(YunoError::Validation(_))));
    }

    #[test]
    fn test_unknown_user_is_none() {
        let db = memory_db();
        assert!(db.fetch_by_username("ghost").unwrap().is_none());
    }

    #[test]
    fn test_booking_round_trip() {
        let db = memory_db();
        let profile = db.create_user("ben_lim", "hash", "Secondary").unwrap();

        let booking = db
            .create_booking(profile.user_id, "EVENT_0001", "event")
            .unwrap();
        assert_eq!(booking.status, "confirmed");
        assert!(!booking.booking_date.is_empty());

        let bookings = db.bookings_for_user(profile.user_id).unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].event_id, "EVENT_0001");
    }

    #[test]
    fn test_seed_users_only_when_empty() {
        let db = memory_db();
        let seeded = db.seed_users_if_empty("hash", 42).unwrap();
        assert_eq!(seeded, SEED_USERNAMES.len());

        let again = db.seed_users_if_empty("hash", 42).unwrap();
        assert_eq!(again, 0);
        assert_eq!(db.user_count().unwrap() as usize, SEED_USERNAMES.len());
    }

    #[test]
    fn test_seeded_profiles_have_riasec_codes() {
        let db = memory_db();
        db.seed_users_if_empty("hash", 42).unwrap();
        let stored = db.fetch_by_username("aisha_tan").unwrap().unwrap();
        assert_eq!(stored.riasec_code.len(), 3);
        assert!(stored
            .riasec_code
            .chars()
            .all(|c| RIASEC_LETTERS.contains(&c)));
    }
}
