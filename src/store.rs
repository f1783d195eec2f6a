//! Read-side data seams. The durable store lives outside this crate;
//! handlers only see the traits here. In-memory implementations back the
//! default binary and the tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::Appointment;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Source of a patient's appointment history.
pub trait AppointmentBook: Send + Sync {
    fn for_patient(&self, patient_id: &str) -> Result<Vec<Appointment>, StoreError>;
}

#[derive(Default)]
pub struct InMemoryAppointmentBook {
    by_patient: RwLock<HashMap<String, Vec<Appointment>>>,
}

impl InMemoryAppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, appointment: Appointment) -> Result<(), StoreError> {
        let mut map = self
            .by_patient
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        map.entry(appointment.patient_id.clone())
            .or_default()
            .push(appointment);
        Ok(())
    }
}

impl AppointmentBook for InMemoryAppointmentBook {
    fn for_patient(&self, patient_id: &str) -> Result<Vec<Appointment>, StoreError> {
        let map = self
            .by_patient
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(patient_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn appt(patient: &str) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            patient_id: patient.into(),
            doctor_id: Some("d1".into()),
            date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            status: AppointmentStatus::Scheduled,
        }
    }

    #[test]
    fn appointments_are_partitioned_by_patient() {
        let book = InMemoryAppointmentBook::new();
        book.add(appt("p1")).unwrap();
        book.add(appt("p1")).unwrap();
        book.add(appt("p2")).unwrap();

        assert_eq!(book.for_patient("p1").unwrap().len(), 2);
        assert_eq!(book.for_patient("p2").unwrap().len(), 1);
    }

    #[test]
    fn unknown_patient_has_empty_history() {
        let book = InMemoryAppointmentBook::new();
        assert!(book.for_patient("nobody").unwrap().is_empty());
    }
}
