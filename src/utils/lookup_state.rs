/// Outcome of resolving a route parameter against an in-memory collection
///
/// The lookup is synchronous, so `Resolving` is only ever the initial value
/// before `resolve` runs. `Found` and `NotFound` are terminal.
///
/// # Examples
///
/// ```
/// let state = LookupState::resolve(|| directory.find(&id).cloned());
///
/// match state {
///     LookupState::Found(talent) => { /* render profile */ }
///     LookupState::NotFound => { /* render not-found panel */ }
///     LookupState::Resolving => { /* unreachable after resolve */ }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState<T> {
    /// Initial state, lookup not run yet
    Resolving,

    /// A matching record exists
    Found(T),

    /// No record matched; a normal outcome, not an error
    NotFound,
}

impl<T> LookupState<T> {
    /// Run the lookup and move to a terminal state
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        lookup().into()
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, LookupState::Resolving)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupState::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupState::NotFound)
    }

    /// Returns the record if found, None otherwise
    pub fn found(&self) -> Option<&T> {
        match self {
            LookupState::Found(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for LookupState<T> {
    fn default() -> Self {
        LookupState::Resolving
    }
}

impl<T> From<Option<T>> for LookupState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => LookupState::Found(data),
            None => LookupState::NotFound,
        }
    }
}
