use crate::impl_err;
use crate::places::error::PlacesError;

#[derive(Debug)]
pub enum SessionError {
    /// The upstream navigation supplied no triage result. A valid,
    /// handled input: the screen prompts for assessment instead.
    MissingTriage,
    /// Both search strategies came back empty.
    NoFacilitiesFound,
    Places(PlacesError),
}

impl From<PlacesError> for SessionError {
    fn from(value: PlacesError) -> Self {
        SessionError::Places(value)
    }
}

impl SessionError {
    /// The message shown on the screen; failures never propagate past
    /// it.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::MissingTriage => "complete the symptom assessment first",
            SessionError::NoFacilitiesFound => "no hospitals found nearby",
            SessionError::Places(PlacesError::MissingCredential(_)) => {
                "map service is not configured"
            }
            SessionError::Places(_) => "hospital search failed",
        }
    }
}

impl_err!(SessionError, Session);
