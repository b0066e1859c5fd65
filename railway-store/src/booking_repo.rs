use chrono::Utc;
use railway_core::booking::BookingRequest;
use railway_core::models::{Booking, BookingStatus};
use railway_core::{pnr, BookingError};
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::{info, warn};

use crate::schedule_repo::ScheduleRepository;
use crate::user_repo::UserRepository;

/// Attempts before giving up on allocating a unique PNR. Collision odds per
/// draw are about N/36^10 against N existing codes, so a second attempt is
/// already vanishingly rare.
const PNR_INSERT_ATTEMPTS: u32 = 3;

enum CommitAttempt {
    Done(Booking),
    CodeTaken,
}

pub struct BookingRepository;

impl BookingRepository {
    /// Seat availability for one schedule: the parent train's capacity minus
    /// the sum of seats across confirmed bookings. Returns `None` when the
    /// schedule does not exist. The value is signed and not clamped, so
    /// externally oversold data reports negative availability.
    pub async fn available_seats<'e, E>(
        exec: E,
        schedule_id: i64,
    ) -> Result<Option<i64>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT t.total_seats - COALESCE((
                       SELECT SUM(b.seats) FROM bookings b
                       WHERE b.schedule_id = s.id AND b.status = ?
                   ), 0)
            FROM schedules s
            JOIN trains t ON s.train_id = t.id
            WHERE s.id = ?
            "#,
        )
        .bind(BookingStatus::Confirmed.as_str())
        .bind(schedule_id)
        .fetch_optional(exec)
        .await
    }

    /// The booking workflow: resolve the schedule, check availability,
    /// lazily create the user, and insert a confirmed booking with a fresh
    /// PNR. All steps run in one transaction, so the availability check and
    /// the insert commit atomically and concurrent requests cannot oversell
    /// a schedule.
    pub async fn commit_booking(
        pool: &SqlitePool,
        schedule_id: i64,
        req: &BookingRequest,
    ) -> Result<Booking, BookingError> {
        for _ in 0..PNR_INSERT_ATTEMPTS {
            match Self::try_commit(pool, schedule_id, req).await? {
                CommitAttempt::Done(booking) => {
                    info!(
                        pnr = %booking.pnr,
                        schedule_id,
                        seats = booking.seats,
                        "booking confirmed"
                    );
                    return Ok(booking);
                }
                CommitAttempt::CodeTaken => {
                    warn!(schedule_id, "reservation code collision, retrying");
                }
            }
        }
        Err(BookingError::Storage(format!(
            "could not allocate a unique reservation code after {} attempts",
            PNR_INSERT_ATTEMPTS
        )))
    }

    async fn try_commit(
        pool: &SqlitePool,
        schedule_id: i64,
        req: &BookingRequest,
    ) -> Result<CommitAttempt, BookingError> {
        let mut tx = pool.begin().await.map_err(storage)?;

        let schedule = ScheduleRepository::find_detail(&mut *tx, schedule_id)
            .await
            .map_err(storage)?
            .ok_or_else(|| BookingError::NotFound(format!("schedule {}", schedule_id)))?;

        let available = Self::available_seats(&mut *tx, schedule_id)
            .await
            .map_err(storage)?
            .unwrap_or(0);
        if req.seats > available {
            return Err(BookingError::InsufficientSeats {
                requested: req.seats,
                available,
            });
        }

        let user = match UserRepository::find_by_email(&mut *tx, &req.email)
            .await
            .map_err(storage)?
        {
            Some(user) => user,
            None => UserRepository::create(&mut *tx, &req.name, &req.email)
                .await
                .map_err(storage)?,
        };

        let code = pnr::generate();
        let booking_time = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO bookings (schedule_id, user_id, seats, booking_time, status, pnr) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(schedule.id)
        .bind(user.id)
        .bind(req.seats)
        .bind(booking_time)
        .bind(BookingStatus::Confirmed.as_str())
        .bind(&code)
        .execute(&mut *tx)
        .await;

        let result = match result {
            Ok(result) => result,
            // Either the PNR or the lazily created user row collided with a
            // concurrent insert; dropping the transaction rolls everything
            // back, and the retry re-resolves the user too.
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Ok(CommitAttempt::CodeTaken);
            }
            Err(err) => return Err(storage(err)),
        };

        let booking = Booking {
            id: result.last_insert_rowid(),
            schedule_id: schedule.id,
            user_id: user.id,
            seats: req.seats,
            booking_time,
            status: BookingStatus::Confirmed.as_str().to_string(),
            pnr: code,
        };

        tx.commit().await.map_err(storage)?;
        Ok(CommitAttempt::Done(booking))
    }
}

fn storage(err: sqlx::Error) -> BookingError {
    BookingError::Storage(err.to_string())
}
