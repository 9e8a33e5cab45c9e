use log::info;
use serde::Deserialize;
use std::fmt;

use crate::db::store::{load_preferences, save_preferences, KeyValueStore, StoreError};
use crate::models::preferences::{Accessibility, Dietary, Transport, UserPreferences, UserType};
use crate::services::localization::{Language, Localizer};

#[derive(Debug)]
pub enum OnboardingError {
    NameRequired,
    AlreadySubmitted,
    AlreadyOnboarded,
    Storage(StoreError),
}

impl fmt::Display for OnboardingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnboardingError::NameRequired => write!(f, "Name is required"),
            OnboardingError::AlreadySubmitted => write!(f, "Onboarding form was already submitted"),
            OnboardingError::AlreadyOnboarded => write!(f, "Preferences already exist"),
            OnboardingError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for OnboardingError {}

impl From<StoreError> for OnboardingError {
    fn from(err: StoreError) -> Self {
        OnboardingError::Storage(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Collecting,
    Submitted,
}

/// Field values as posted by the onboarding screen. Missing choices take the
/// form defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingInput {
    #[serde(default)]
    pub name: String,
    pub user_type: Option<UserType>,
    pub dietary: Option<Dietary>,
    pub transport: Option<Transport>,
    pub accessibility: Option<Accessibility>,
}

#[derive(Debug, Clone)]
pub struct OnboardingForm {
    name: String,
    user_type: UserType,
    dietary: Dietary,
    transport: Transport,
    accessibility: Accessibility,
    state: FormState,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            user_type: UserType::Local,
            dietary: Dietary::NoPreference,
            transport: Transport::OwnVehicle,
            accessibility: Accessibility::NoPreference,
            state: FormState::Collecting,
        }
    }
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_input(input: OnboardingInput) -> Self {
        let defaults = Self::default();
        Self {
            name: input.name,
            user_type: input.user_type.unwrap_or(defaults.user_type),
            dietary: input.dietary.unwrap_or(defaults.dietary),
            transport: input.transport.unwrap_or(defaults.transport),
            accessibility: input.accessibility.unwrap_or(defaults.accessibility),
            state: FormState::Collecting,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
    }

    pub fn set_dietary(&mut self, dietary: Dietary) {
        self.dietary = dietary;
    }

    pub fn set_transport(&mut self, transport: Transport) {
        self.transport = transport;
    }

    pub fn set_accessibility(&mut self, accessibility: Accessibility) {
        self.accessibility = accessibility;
    }

    pub fn can_submit(&self) -> bool {
        self.state == FormState::Collecting && !self.name.trim().is_empty()
    }

    /// Emit the preferences to `on_complete` exactly once. A blank name leaves
    /// the form collecting and the callback uncalled.
    pub fn submit<F>(&mut self, on_complete: F) -> Result<(), OnboardingError>
    where
        F: FnOnce(UserPreferences),
    {
        if self.state == FormState::Submitted {
            return Err(OnboardingError::AlreadySubmitted);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(OnboardingError::NameRequired);
        }

        let preferences = UserPreferences {
            name: name.to_string(),
            user_type: self.user_type,
            dietary: self.dietary,
            transport: self.transport,
            accessibility: self.accessibility,
        };
        self.state = FormState::Submitted;
        on_complete(preferences);
        Ok(())
    }
}

/// Onboarding is offered only while nothing is stored.
pub fn is_onboarding_required(store: &dyn KeyValueStore) -> Result<bool, StoreError> {
    Ok(load_preferences(store)?.is_none())
}

/// Submit `form`, persist the result and seed the language from the user type
/// unless a language was already chosen explicitly.
pub fn complete_onboarding(
    store: &dyn KeyValueStore,
    localizer: &mut Localizer,
    mut form: OnboardingForm,
) -> Result<UserPreferences, OnboardingError> {
    if !is_onboarding_required(store)? {
        return Err(OnboardingError::AlreadyOnboarded);
    }

    let mut submitted = None;
    form.submit(|prefs| submitted = Some(prefs))?;
    let preferences = submitted.ok_or(OnboardingError::NameRequired)?;

    save_preferences(store, &preferences)?;
    if !localizer.has_stored_flag()? {
        localizer.set_language(Language::for_user_type(preferences.user_type))?;
    }
    info!(
        "Onboarding complete for {} ({:?})",
        preferences.name, preferences.user_type
    );
    Ok(preferences)
}
