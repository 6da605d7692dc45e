use chromiumoxide::error::CdpError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("Timed out after {timeout:?} waiting for {what}")]
    ElementTimeout { what: String, timeout: Duration },

    #[error("Browser connection severed: {0}")]
    Connectivity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CdpError> for Error {
    fn from(err: CdpError) -> Self {
        // A dead websocket, a closed command channel, or a transport-level IO
        // failure all mean the browser is gone; the shutdown watcher relies
        // on this classification to detect the operator closing the window.
        match err {
            CdpError::Ws(e) => Error::Connectivity(e.to_string()),
            CdpError::ChannelSendError(e) => Error::Connectivity(e.to_string()),
            CdpError::Io(e) => Error::Connectivity(e.to_string()),
            other => Error::Cdp(other.to_string()),
        }
    }
}

impl Error {
    /// True when the browser-control connection itself is gone, as opposed
    /// to a command failing over a live connection.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Error::Connectivity(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_cdp_error_maps_to_connectivity() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = CdpError::Io(io).into();

        assert!(err.is_connectivity());
    }

    #[test]
    fn test_non_transport_cdp_error_is_not_connectivity() {
        let err: Error = CdpError::NoResponse.into();

        assert!(!err.is_connectivity());
        assert!(matches!(err, Error::Cdp(_)));
    }

    #[test]
    fn test_element_timeout_message_names_the_condition() {
        let err = Error::ElementTimeout {
            what: "username field".to_string(),
            timeout: Duration::from_secs(15),
        };

        assert!(err.to_string().contains("username field"));
    }
}
