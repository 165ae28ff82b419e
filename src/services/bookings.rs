use crate::models::{Booking, BookingReceipt, BookingRequest, BookingSource, BookingStatus, Package, Session};
use crate::services::firestore::BookingStore;
use chrono::{NaiveDate, Utc};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Invalid booking request: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Preferred date {0} is in the past")]
    PastDate(NaiveDate),
}

/// Bookings shown on the profile page together with where they came from
#[derive(Debug, Clone)]
pub struct LoadedBookings {
    pub source: BookingSource,
    pub bookings: Vec<Booking>,
}

/// Fetch the session user's bookings, degrading to the example list on failure
///
/// There is no retry: one attempt per profile view. A failed fetch is logged
/// and never surfaced to the caller.
pub async fn load_bookings(store: &dyn BookingStore, session: &Session) -> LoadedBookings {
    if session.email.is_empty() {
        return LoadedBookings {
            source: BookingSource::Skipped,
            bookings: Vec::new(),
        };
    }

    match store.bookings_for(&session.email).await {
        Ok(bookings) => LoadedBookings {
            source: BookingSource::Remote,
            bookings,
        },
        Err(e) => {
            tracing::warn!("Failed to load bookings for {}, using example bookings: {}", session.email, e);
            LoadedBookings {
                source: BookingSource::Fallback,
                bookings: fallback_bookings(session),
            }
        }
    }
}

/// Fixed example bookings shown when the store cannot be reached
pub fn fallback_bookings(session: &Session) -> Vec<Booking> {
    vec![
        Booking {
            id: "1".to_string(),
            destination: "Goa Beach Paradise".to_string(),
            booking_date: "2024-12-15".to_string(),
            travel_date: "2025-03-15".to_string(),
            status: BookingStatus::Confirmed,
            price: "₹15,000".to_string(),
            number_of_people: 2,
            user_email: session.email.clone(),
            user_name: session.name.clone(),
        },
        Booking {
            id: "2".to_string(),
            destination: "Ooty Hill Station".to_string(),
            booking_date: "2024-11-20".to_string(),
            travel_date: "2024-12-10".to_string(),
            status: BookingStatus::Confirmed,
            price: "₹12,000".to_string(),
            number_of_people: 2,
            user_email: session.email.clone(),
            user_name: session.name.clone(),
        },
    ]
}

/// Accept a booking request for `package`
///
/// Requests are only logged and acknowledged; nothing is stored.
pub fn submit_booking(
    package: &Package,
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<BookingReceipt, BookingError> {
    request.validate()?;

    if request.preferred_date < today {
        return Err(BookingError::PastDate(request.preferred_date));
    }

    let receipt = BookingReceipt {
        booking_id: uuid::Uuid::new_v4().to_string(),
        package_id: package.id.to_string(),
        destination: package.title.to_string(),
        message: format!(
            "Thank you {}! Your booking request for {} has been submitted. We'll contact you soon at {}.",
            request.name, package.title, request.email
        ),
        submitted_at: Utc::now(),
    };

    tracing::info!(
        booking_id = %receipt.booking_id,
        package = package.id,
        name = %request.name,
        email = %request.email,
        phone = ?request.phone,
        preferred_date = %request.preferred_date,
        people = request.number_of_people,
        special_requests = ?request.special_requests,
        "Booking submitted"
    );

    Ok(receipt)
}
