// Service exports
pub mod auth;
pub mod bookings;
pub mod firestore;
pub mod session;

pub use auth::{AuthError, CredentialVerifier, FallbackVerifier, IdentityToolkitVerifier, StaticCredentialVerifier};
pub use bookings::{fallback_bookings, load_bookings, submit_booking, BookingError, LoadedBookings};
pub use firestore::{BookingStore, FirestoreClient, FirestoreError};
pub use session::{SessionError, SessionIssuer};
