pub mod db;
pub mod models;
pub mod service;

pub use db::UserDb;
pub use models::{
    BookingRecord, BookingRequest, LoginRequest, OceanScores, RegisterRequest, UserProfile,
};
pub use service::AuthService;
