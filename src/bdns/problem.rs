use crate::bdns::errors::*;
use crate::probs::ProblemDetails;

const DETAIL_DNS_TIMEOUT: &str = "DNS query timed out";
const DETAIL_DNS_NET_FAILURE: &str = "DNS networking error";
const DETAIL_SERVER_FAILURE: &str = "Server failure at resolver";

/// Build the [`ProblemDetails`] reported when a lookup fails. The problem
/// type is always a connection problem: only the detail tells if the query
/// timed out, the network failed or the resolver answered with an error.
pub fn problem_details_from_lookup_err(err: &LookupErr) -> ProblemDetails {
    let detail = match err {
        LookupErr::Timeout(_) => DETAIL_DNS_TIMEOUT.to_string(),
        LookupErr::Net(_) => DETAIL_DNS_NET_FAILURE.to_string(),
        LookupErr::Dns(dns_err) => {
            dns_problem_detail(dns_err.resp_code(), dns_err.record_type(), dns_err.hostname())
        }
        LookupErr::Other(_) => DETAIL_SERVER_FAILURE.to_string(),
    };
    log::debug!("Lookup error '{}' reported as: {}.", err, detail);
    ProblemDetails::connection(detail)
}
