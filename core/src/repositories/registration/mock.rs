//! Mock implementation of RegistrationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::registration::Registration;
use crate::errors::{DomainError, RegistrationError};

use super::r#trait::RegistrationRepository;

/// First customer id handed out by the mock
const FIRST_CUSTOMER_ID: u64 = 2000;

#[derive(Default)]
struct State {
    registrations: HashMap<String, Registration>,
    usernames: HashSet<String>,
    /// customer_id -> username
    customers: HashMap<String, String>,
    customer_emails: HashSet<String>,
    next_customer_id: u64,
}

/// In-memory registrations, users and customers behind a single lock
#[derive(Clone, Default)]
pub struct MockRegistrationRepository {
    state: Arc<Mutex<State>>,
}

impl MockRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing user account
    pub async fn insert_user(&self, username: &str) {
        self.state.lock().await.usernames.insert(username.to_string());
    }

    /// Register an existing customer by email
    pub async fn insert_customer_email(&self, email: &str) {
        self.state
            .lock()
            .await
            .customer_emails
            .insert(email.to_string());
    }

    /// Number of stored registrations
    pub async fn registration_count(&self) -> usize {
        self.state.lock().await.registrations.len()
    }

    /// Number of provisioned customers
    pub async fn customer_count(&self) -> usize {
        self.state.lock().await.customers.len()
    }
}

#[async_trait]
impl RegistrationRepository for MockRegistrationRepository {
    async fn is_email_used(&self, email: &str) -> Result<bool, DomainError> {
        let state = self.state.lock().await;
        Ok(state.registrations.contains_key(email) || state.customer_emails.contains(email))
    }

    async fn is_username_taken(&self, username: &str) -> Result<bool, DomainError> {
        let state = self.state.lock().await;
        Ok(state.usernames.contains(username)
            || state
                .registrations
                .values()
                .any(|r| r.username == username))
    }

    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;

        if state.registrations.contains_key(&registration.email) {
            return Err(RegistrationError::EmailAlreadyUsed.into());
        }
        if state.usernames.contains(&registration.username)
            || state
                .registrations
                .values()
                .any(|r| r.username == registration.username)
        {
            return Err(RegistrationError::UsernameTaken.into());
        }

        state
            .registrations
            .insert(registration.email.clone(), registration.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError> {
        Ok(self.state.lock().await.registrations.get(email).cloned())
    }

    async fn update_last_emailed(
        &self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        match state.registrations.get_mut(email) {
            Some(registration) => {
                registration.mark_emailed(at);
                Ok(())
            }
            None => Err(RegistrationError::NotFound.into()),
        }
    }

    async fn create_necessary_accounts(
        &self,
        registration: &Registration,
    ) -> Result<String, DomainError> {
        let mut state = self.state.lock().await;

        if !state.usernames.insert(registration.username.clone()) {
            return Err(DomainError::internal(format!(
                "duplicate user {}",
                registration.username
            )));
        }

        let customer_id = (FIRST_CUSTOMER_ID + state.next_customer_id).to_string();
        state.next_customer_id += 1;
        state
            .customers
            .insert(customer_id.clone(), registration.username.clone());
        state.customer_emails.insert(registration.email.clone());
        Ok(customer_id)
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        match state.registrations.get_mut(&registration.email) {
            Some(stored) => {
                *stored = registration.clone();
                Ok(())
            }
            None => Err(RegistrationError::NotFound.into()),
        }
    }
}
