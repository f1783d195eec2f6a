//! Health status evaluator — coarse check-up classification derived from
//! a patient's appointment history. Computed on every read, never stored.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Appointment, AppointmentStatus};

/// Completed appointments newer than this count as "recent".
pub const RECENT_WINDOW_DAYS: i64 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    #[serde(rename = "Check-up Due")]
    CheckupDue,
    #[serde(rename = "Healthy")]
    Healthy,
}

/// `CheckupDue` only when the patient has neither recent nor upcoming
/// appointments.
pub fn evaluate(recent_appointments: u32, upcoming_appointments: u32) -> HealthStatus {
    if recent_appointments == 0 && upcoming_appointments == 0 {
        HealthStatus::CheckupDue
    } else {
        HealthStatus::Healthy
    }
}

/// Appointment counts feeding [`evaluate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCounts {
    pub recent: u32,
    pub upcoming: u32,
}

impl AppointmentCounts {
    /// Count completed visits inside the recent window and scheduled visits
    /// dated today or later. Cancelled appointments count toward neither.
    pub fn tally(appointments: &[Appointment], today: NaiveDate) -> Self {
        let window_start = today - Duration::days(RECENT_WINDOW_DAYS);
        appointments
            .iter()
            .fold(Self::default(), |mut counts, appt| {
                match appt.status {
                    AppointmentStatus::Completed
                        if appt.date >= window_start && appt.date <= today =>
                    {
                        counts.recent += 1
                    }
                    AppointmentStatus::Scheduled if appt.date >= today => counts.upcoming += 1,
                    _ => {}
                }
                counts
            })
    }

    pub fn status(&self) -> HealthStatus {
        evaluate(self.recent, self.upcoming)
    }
}
