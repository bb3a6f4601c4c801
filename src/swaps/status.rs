use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Lifecycle of a swap request. `Pending` is the only initial state;
/// `Accepted` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Decision a responder can take on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAction {
    Accept,
    Reject,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Swap request already {0}")]
    AlreadyResolved(SwapStatus),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown swap status: {0}")]
pub struct UnknownStatus(pub String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid action")]
pub struct UnknownAction;

impl SwapStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, SwapStatus::Pending)
    }

    /// Transition table. Anything out of a terminal state is refused.
    pub fn apply(self, action: SwapAction) -> Result<SwapStatus, TransitionError> {
        if self.is_terminal() {
            return Err(TransitionError::AlreadyResolved(self));
        }
        Ok(match action {
            SwapAction::Accept => SwapStatus::Accepted,
            SwapAction::Reject => SwapStatus::Rejected,
        })
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SwapStatus::Pending),
            "accepted" => Ok(SwapStatus::Accepted),
            "rejected" => Ok(SwapStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl FromStr for SwapAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(SwapAction::Accept),
            "reject" => Ok(SwapAction::Reject),
            _ => Err(UnknownAction),
        }
    }
}
