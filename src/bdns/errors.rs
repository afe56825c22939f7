use crate::shared::dns;
use std::{error, fmt, io};

/// A resolver answered the query, but with a non-success response code.
/// Codes are kept raw so that unassigned values can still be reported.
// The authority section of the response could be carried here too and
// appended to the detail, it's not used yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsError {
    resp_code: u16,
    record_type: u16,
    hostname: String,
}

impl DnsError {
    pub fn new(resp_code: u16, record_type: u16, hostname: impl Into<String>) -> Self {
        DnsError {
            resp_code,
            record_type,
            hostname: hostname.into(),
        }
    }

    pub fn resp_code(&self) -> u16 {
        self.resp_code
    }

    pub fn record_type(&self) -> u16 {
        self.record_type
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}

impl fmt::Display for DnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dns_problem_detail(self.resp_code, self.record_type, &self.hostname))
    }
}

impl error::Error for DnsError {}

/// Render the detail of a failed query. Used both as the [`DnsError`]
/// textual representation and as the problem detail, they must match.
pub fn dns_problem_detail(resp_code: u16, record_type: u16, hostname: &str) -> String {
    format!(
        "DNS problem: {} looking up {} for {}",
        dns::RespCode::name_of(resp_code),
        dns::RecordType::name_of(record_type),
        hostname
    )
}

/// Check the response code of an answer to a query for `hostname` and
/// `record_type`. Anything but NOERROR becomes a [`DnsError`].
pub fn check_resp_code(resp_code: u16, record_type: u16, hostname: &str) -> Result<(), DnsError> {
    match dns::RespCode::from_num(resp_code) {
        Ok(code) if code.is_success() => Ok(()),
        _ => Err(DnsError::new(resp_code, record_type, hostname)),
    }
}

/// Errors a DNS lookup can end with. Network errors are split on whether
/// the operation timed out, the resolver ones carry the response data.
#[derive(Debug)]
pub enum LookupErr {
    Timeout(io::Error),
    Net(io::Error),
    Dns(DnsError),
    Other(String),
}

impl From<io::Error> for LookupErr {
    fn from(io_err: io::Error) -> Self {
        match io_err.kind() {
            // Sockets with a read timeout report WouldBlock on unix.
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => LookupErr::Timeout(io_err),
            _ => LookupErr::Net(io_err),
        }
    }
}

impl From<DnsError> for LookupErr {
    fn from(dns_err: DnsError) -> Self {
        LookupErr::Dns(dns_err)
    }
}

impl LookupErr {
    /// Tells if the lookup failed because the network operation timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupErr::Timeout(_))
    }
}

impl fmt::Display for LookupErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupErr::Timeout(err) => write!(f, "timed out: {}", err),
            LookupErr::Net(err) => write!(f, "network error: {}", err),
            LookupErr::Dns(err) => write!(f, "{}", err),
            LookupErr::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl error::Error for LookupErr {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LookupErr::Timeout(err) | LookupErr::Net(err) => Some(err),
            LookupErr::Dns(err) => Some(err),
            LookupErr::Other(_) => None,
        }
    }
}
