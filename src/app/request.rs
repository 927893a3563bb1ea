/// Lifecycle of one kind of asynchronous request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one started request within its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// A [`RequestState`] guarded by a monotonic request sequence.
///
/// Only the most recently started request may complete the lane; anything
/// older is reported as stale and dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestLane<T> {
    state: RequestState<T>,
    latest: u64,
}

impl<T> RequestLane<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    /// Start a request, superseding whatever was in flight.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.state = RequestState::Loading;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest && self.state.is_loading()
    }

    /// Apply an outcome. Returns `false` if `token` has been superseded.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<T, String>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.state = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(message) => RequestState::Failure(message),
        };
        true
    }

    /// Back to `Idle`; requests still in flight become stale.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.state = RequestState::Idle;
    }
}
