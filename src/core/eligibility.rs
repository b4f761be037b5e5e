use std::collections::{HashMap, HashSet};

use crate::models::{Application, Volunteer};

/// Validated applications, keyed by request id
///
/// Only volunteers with a validated application to a request are scored for it.
#[derive(Debug, Clone, Default)]
pub struct Eligibility {
    validated: HashMap<String, HashSet<String>>,
}

impl Eligibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from application records, ignoring those not flagged valid
    pub fn from_applications(applications: &[Application]) -> Self {
        let mut eligibility = Self::new();
        for application in applications.iter().filter(|a| a.is_valid) {
            eligibility.insert(&application.request_id, &application.volunteer_id);
        }
        eligibility
    }

    pub fn insert(&mut self, request_id: &str, volunteer_id: &str) {
        self.validated
            .entry(request_id.to_string())
            .or_default()
            .insert(volunteer_id.to_string());
    }

    pub fn is_eligible(&self, request_id: &str, volunteer_id: &str) -> bool {
        self.validated
            .get(request_id)
            .is_some_and(|ids| ids.contains(volunteer_id))
    }

    /// Number of validated (request, volunteer) pairs
    pub fn len(&self) -> usize {
        self.validated.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Eligible volunteers for a request, in volunteer catalog order
    pub fn eligible_volunteers<'a>(
        &self,
        request_id: &str,
        volunteers: &'a [Volunteer],
    ) -> Vec<&'a Volunteer> {
        let Some(ids) = self.validated.get(request_id) else {
            return Vec::new();
        };

        volunteers
            .iter()
            .filter(|volunteer| ids.contains(&volunteer.id))
            .collect()
    }
}
