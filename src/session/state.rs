/// View-level lifecycle of the facility screen.
///
/// `AwaitingTriage → LocatingServices → Searching → Ready | Failed`,
/// with `ShowingDirections` overlaying the ranked list from `Ready`.
/// Clearing directions returns to `Ready` without re-running the
/// search.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ScreenState {
    #[default]
    AwaitingTriage,
    LocatingServices,
    Searching,
    Ready,
    ShowingDirections,
    Failed(String),
}

impl ScreenState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ScreenState::Ready | ScreenState::ShowingDirections)
    }
}
