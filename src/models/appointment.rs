use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: String,
    pub doctor_id: Option<String>,
    pub date: NaiveDate,
    pub status: AppointmentStatus,
}
