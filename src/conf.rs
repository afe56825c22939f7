use crate::bdns::{DnsError, LookupErr};
use crate::shared::dns;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fs, io};

/// Configuration values obtained parsing the configuration file.
#[derive(Debug, Serialize, Deserialize)]
pub struct Conf {
    pub log_level: log::Level,
    pub failures: Vec<FailureConf>,
}

/// A failed lookup to be reported, tagged by its `kind`. The record type
/// of `dns` entries is either its number or its mnemonic (`"CAA"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureConf {
    Timeout,
    Network {
        #[serde(default)]
        message: String,
    },
    Dns {
        resp_code: u16,
        #[serde(deserialize_with = "deserialize_record_type")]
        record_type: u16,
        hostname: String,
    },
    Other {
        message: String,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecordType {
    Num(u16),
    Name(String),
}

fn deserialize_record_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    match RawRecordType::deserialize(deserializer)? {
        RawRecordType::Num(n) => Ok(n),
        RawRecordType::Name(name) => match dns::RecordType::from_str(&name) {
            Ok(record_type) => Ok(record_type.to_num()),
            Err(s) => Err(de::Error::custom(format!("unknown record type '{}'", s))),
        },
    }
}

impl FailureConf {
    /// Build the [`LookupErr`] a lookup would have returned.
    pub fn to_lookup_err(&self) -> LookupErr {
        match self {
            FailureConf::Timeout => LookupErr::Timeout(io::Error::from(io::ErrorKind::TimedOut)),
            FailureConf::Network { message } => LookupErr::Net(io::Error::new(io::ErrorKind::Other, message.clone())),
            FailureConf::Dns { resp_code, record_type, hostname } => {
                LookupErr::Dns(DnsError::new(*resp_code, *record_type, hostname.clone()))
            }
            FailureConf::Other { message } => LookupErr::Other(message.clone()),
        }
    }
}

impl Conf {
    /// Read and parse the configuration values from a file. The file must
    /// be JSON-encoded and follow the organization of the [Conf] struct.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let file_str = match fs::read_to_string(path) {
            Err(err) => return Err(err.to_string()),
            Ok(v) => v,
        };
        Conf::from_json(&file_str)
    }

    /// Parse and validate the configuration values from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let conf = match serde_json::from_str::<Conf>(json) {
            Err(err) => return Err(err.to_string()),
            Ok(conf) => conf,
        };
        match conf.validate() {
            Ok(_) => Ok(conf),
            Err(err) => Err(err),
        }
    }

    /// Validate a configuration struct against some common errors.
    fn validate(&self) -> Result<(), String> {
        if self.failures.is_empty() {
            return Err("invalid 'failures': at least one is needed".to_string());
        }
        for (i, failure) in self.failures.iter().enumerate() {
            if let FailureConf::Dns { hostname, .. } = failure {
                if hostname.trim().is_empty() {
                    return Err(format!("invalid failure #{}: empty hostname", i));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bdns::problem_details_from_lookup_err;

    const CONF: &str = r#"{
        "log_level": "Info",
        "failures": [
            { "kind": "timeout" },
            { "kind": "network", "message": "connection refused" },
            { "kind": "dns", "resp_code": 3, "record_type": 1, "hostname": "example.com" },
            { "kind": "other", "message": "boom" }
        ]
    }"#;

    #[test]
    fn test_parse_conf() {
        let conf = Conf::from_json(CONF).unwrap();
        assert_eq!(conf.log_level, log::Level::Info);
        assert_eq!(conf.failures.len(), 4);

        let details: Vec<String> = conf
            .failures
            .iter()
            .map(|f| problem_details_from_lookup_err(&f.to_lookup_err()).detail)
            .collect();
        assert_eq!(
            details,
            vec![
                "DNS query timed out",
                "DNS networking error",
                "DNS problem: NXDOMAIN looking up A for example.com",
                "Server failure at resolver",
            ]
        );
    }

    #[test]
    fn test_record_type_mnemonic() {
        let json = r#"{"log_level": "Debug", "failures": [
            {"kind": "dns", "resp_code": 4, "record_type": "DNAME", "hostname": "example.com"},
            {"kind": "dns", "resp_code": 2, "record_type": "CAA", "hostname": "example.org"},
            {"kind": "dns", "resp_code": 3, "record_type": 52, "hostname": "_443._tcp.example.net"}
        ]}"#;
        let conf = Conf::from_json(json).unwrap();
        let details: Vec<String> = conf
            .failures
            .iter()
            .map(|f| problem_details_from_lookup_err(&f.to_lookup_err()).detail)
            .collect();
        assert_eq!(
            details,
            vec![
                "DNS problem: NOTIMPL looking up DNAME for example.com",
                "DNS problem: SERVFAIL looking up CAA for example.org",
                "DNS problem: NXDOMAIN looking up TLSA for _443._tcp.example.net",
            ]
        );
    }

    #[test]
    fn test_invalid_conf() {
        let err = Conf::from_json(r#"{"log_level": "Info", "failures": []}"#).unwrap_err();
        assert!(err.contains("at least one"));

        let json = r#"{"log_level": "Info", "failures": [
            {"kind": "dns", "resp_code": 2, "record_type": 1, "hostname": " "}
        ]}"#;
        let err = Conf::from_json(json).unwrap_err();
        assert!(err.contains("empty hostname"));

        assert!(Conf::from_json(r#"{"log_level": "Info", "failures": [{"kind": "bogus"}]}"#).is_err());

        let json = r#"{"log_level": "Info", "failures": [
            {"kind": "dns", "resp_code": 2, "record_type": "BOGUS", "hostname": "example.com"}
        ]}"#;
        let err = Conf::from_json(json).unwrap_err();
        assert!(err.contains("unknown record type 'BOGUS'"));
        assert!(Conf::from_file("/nonexistent/dns-probs.json").is_err());
    }
}
