/// The response code is returned by the resolver and informs the client
/// about the outcome of the query. Extended codes (above 15) only travel
/// in the OPT/TSIG/TKEY records, so the raw representation is 16 bits wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RespCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    YxDomain,
    YxRrSet,
    NxRrSet,
    NotAuth,
    NotZone,
    BadSig,
    BadKey,
    BadTime,
    BadMode,
    BadName,
    BadAlg,
    BadTrunc,
    BadCookie,
}

impl RespCode {
    /// Try to generate a [`RespCode`] from its raw number representation.
    pub fn from_num(n: u16) -> Result<Self, u16> {
        match n {
            0 => Ok(RespCode::NoError),
            1 => Ok(RespCode::FormErr),
            2 => Ok(RespCode::ServFail),
            3 => Ok(RespCode::NxDomain),
            4 => Ok(RespCode::NotImp),
            5 => Ok(RespCode::Refused),
            6 => Ok(RespCode::YxDomain),
            7 => Ok(RespCode::YxRrSet),
            8 => Ok(RespCode::NxRrSet),
            9 => Ok(RespCode::NotAuth),
            10 => Ok(RespCode::NotZone),
            16 => Ok(RespCode::BadSig),
            17 => Ok(RespCode::BadKey),
            18 => Ok(RespCode::BadTime),
            19 => Ok(RespCode::BadMode),
            20 => Ok(RespCode::BadName),
            21 => Ok(RespCode::BadAlg),
            22 => Ok(RespCode::BadTrunc),
            23 => Ok(RespCode::BadCookie),
            _ => Err(n),
        }
    }

    /// Convert a [`RespCode`] to its raw number representation.
    pub fn to_num(&self) -> u16 {
        match self {
            RespCode::NoError => 0,
            RespCode::FormErr => 1,
            RespCode::ServFail => 2,
            RespCode::NxDomain => 3,
            RespCode::NotImp => 4,
            RespCode::Refused => 5,
            RespCode::YxDomain => 6,
            RespCode::YxRrSet => 7,
            RespCode::NxRrSet => 8,
            RespCode::NotAuth => 9,
            RespCode::NotZone => 10,
            RespCode::BadSig => 16,
            RespCode::BadKey => 17,
            RespCode::BadTime => 18,
            RespCode::BadMode => 19,
            RespCode::BadName => 20,
            RespCode::BadAlg => 21,
            RespCode::BadTrunc => 22,
            RespCode::BadCookie => 23,
        }
    }

    /// Convert a [`RespCode`] to its mnemonic, as printed in lookup errors.
    pub fn to_str(&self) -> &'static str {
        match self {
            RespCode::NoError => "NOERROR",
            RespCode::FormErr => "FORMERR",
            RespCode::ServFail => "SERVFAIL",
            RespCode::NxDomain => "NXDOMAIN",
            RespCode::NotImp => "NOTIMPL",
            RespCode::Refused => "REFUSED",
            RespCode::YxDomain => "YXDOMAIN",
            RespCode::YxRrSet => "YXRRSET",
            RespCode::NxRrSet => "NXRRSET",
            RespCode::NotAuth => "NOTAUTH",
            RespCode::NotZone => "NOTZONE",
            RespCode::BadSig => "BADSIG",
            RespCode::BadKey => "BADKEY",
            RespCode::BadTime => "BADTIME",
            RespCode::BadMode => "BADMODE",
            RespCode::BadName => "BADNAME",
            RespCode::BadAlg => "BADALG",
            RespCode::BadTrunc => "BADTRUNC",
            RespCode::BadCookie => "BADCOOKIE",
        }
    }

    /// Name of a raw response code. Unassigned codes are rendered as `RCODE<n>`.
    pub fn name_of(n: u16) -> String {
        match RespCode::from_num(n) {
            Ok(code) => code.to_str().to_string(),
            Err(n) => format!("RCODE{}", n),
        }
    }

    /// Tells if the [`RespCode`] reports a successful query.
    pub fn is_success(&self) -> bool {
        *self == RespCode::NoError
    }
}
