//! ps error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// what went wrong, callers can match on it after `downcast_ref::<PSError>()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PSErrorKind {
    /// negative or NaN radius
    Radius,
    /// arc can not join its endpoints
    ArcSpan,
    /// shape points and radii disagree
    ShapeLayout,
    /// text not fit for a DSC comment
    Text,
}

#[derive(Debug)]
pub struct PSError {
    kind: PSErrorKind,
    /// `file:line` raising the error
    location: String,
    msg: String,
}

impl PSError {
    pub fn new(kind: PSErrorKind, location: &str, msg: &str) -> PSError {
        PSError {
            kind,
            location: location.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn kind(&self) -> PSErrorKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl Display for PSError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[PSError::{:?}] {}: {}", self.kind, self.location, self.msg)
    }
}

impl Error for PSError {}

/// `ps_err!(Radius, "message")`, stamps the calling `file:line`
#[macro_export]
macro_rules! ps_err {
    ( $kind:ident, $x:expr ) => {{
        $crate::ps_error::PSError::new(
            $crate::ps_error::PSErrorKind::$kind,
            &format!("{}:{}", file!(), line!()),
            &$x,
        )
    }};
}
