// Declare the [`RecordType`] enum together with its number and mnemonic
// conversions, so the three stay aligned row by row.
macro_rules! record_types {
    ($($variant:ident = $num:literal => $name:literal,)+) => {
        /// Enum representing the assigned record types, with the mnemonics
        /// resolvers and zone files use for them.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RecordType {
            $($variant,)+
        }

        impl RecordType {
            /// Try to generate a [`RecordType`] from its raw number representation.
            pub fn from_num(n: u16) -> Result<RecordType, u16> {
                match n {
                    $($num => Ok(RecordType::$variant),)+
                    n => Err(n),
                }
            }

            /// Convert a [`RecordType`] to its raw number representation.
            pub fn to_num(&self) -> u16 {
                match self {
                    $(RecordType::$variant => $num,)+
                }
            }

            /// Try to generate a [`RecordType`] from its mnemonic. The
            /// wildcard `*` is accepted as an alias of `ANY`.
            pub fn from_str(s: &str) -> Result<RecordType, &str> {
                match s {
                    "*" => Ok(RecordType::ANY),
                    $($name => Ok(RecordType::$variant),)+
                    s => Err(s),
                }
            }

            /// Convert a [`RecordType`] to its mnemonic, as printed in lookup errors.
            pub fn to_str(&self) -> &'static str {
                match self {
                    $(RecordType::$variant => $name,)+
                }
            }
        }
    };
}

record_types! {
    NONE = 0 => "None",
    A = 1 => "A",
    NS = 2 => "NS",
    MD = 3 => "MD",
    MF = 4 => "MF",
    CNAME = 5 => "CNAME",
    SOA = 6 => "SOA",
    MB = 7 => "MB",
    MG = 8 => "MG",
    MR = 9 => "MR",
    NULL = 10 => "NULL",
    WKS = 11 => "WKS",
    PTR = 12 => "PTR",
    HINFO = 13 => "HINFO",
    MINFO = 14 => "MINFO",
    MX = 15 => "MX",
    TXT = 16 => "TXT",
    RP = 17 => "RP",
    AFSDB = 18 => "AFSDB",
    X25 = 19 => "X25",
    ISDN = 20 => "ISDN",
    RT = 21 => "RT",
    NSAPPTR = 23 => "NSAP-PTR",
    SIG = 24 => "SIG",
    KEY = 25 => "KEY",
    PX = 26 => "PX",
    GPOS = 27 => "GPOS",
    AAAA = 28 => "AAAA",
    LOC = 29 => "LOC",
    NXT = 30 => "NXT",
    EID = 31 => "EID",
    NIMLOC = 32 => "NIMLOC",
    SRV = 33 => "SRV",
    ATMA = 34 => "ATMA",
    NAPTR = 35 => "NAPTR",
    KX = 36 => "KX",
    CERT = 37 => "CERT",
    DNAME = 39 => "DNAME",
    OPT = 41 => "OPT",
    APL = 42 => "APL",
    DS = 43 => "DS",
    SSHFP = 44 => "SSHFP",
    IPSECKEY = 45 => "IPSECKEY",
    RRSIG = 46 => "RRSIG",
    NSEC = 47 => "NSEC",
    DNSKEY = 48 => "DNSKEY",
    DHCID = 49 => "DHCID",
    NSEC3 = 50 => "NSEC3",
    NSEC3PARAM = 51 => "NSEC3PARAM",
    TLSA = 52 => "TLSA",
    SMIMEA = 53 => "SMIMEA",
    HIP = 55 => "HIP",
    NINFO = 56 => "NINFO",
    RKEY = 57 => "RKEY",
    TALINK = 58 => "TALINK",
    CDS = 59 => "CDS",
    CDNSKEY = 60 => "CDNSKEY",
    OPENPGPKEY = 61 => "OPENPGPKEY",
    CSYNC = 62 => "CSYNC",
    ZONEMD = 63 => "ZONEMD",
    SVCB = 64 => "SVCB",
    HTTPS = 65 => "HTTPS",
    SPF = 99 => "SPF",
    UINFO = 100 => "UINFO",
    UID = 101 => "UID",
    GID = 102 => "GID",
    UNSPEC = 103 => "UNSPEC",
    NID = 104 => "NID",
    L32 = 105 => "L32",
    L64 = 106 => "L64",
    LP = 107 => "LP",
    EUI48 = 108 => "EUI48",
    EUI64 = 109 => "EUI64",
    TKEY = 249 => "TKEY",
    TSIG = 250 => "TSIG",
    IXFR = 251 => "IXFR",
    AXFR = 252 => "AXFR",
    MAILB = 253 => "MAILB",
    MAILA = 254 => "MAILA",
    ANY = 255 => "ANY",
    URI = 256 => "URI",
    CAA = 257 => "CAA",
    AVC = 258 => "AVC",
    AMTRELAY = 260 => "AMTRELAY",
    TA = 32768 => "TA",
    DLV = 32769 => "DLV",
    RESERVED = 65535 => "Reserved",
}

impl RecordType {
    /// Name of a raw record type number. Unassigned numbers are rendered
    /// in the generic `TYPE<n>` presentation of RFC 3597.
    pub fn name_of(n: u16) -> String {
        match RecordType::from_num(n) {
            Ok(t) => t.to_str().to_string(),
            Err(n) => format!("TYPE{}", n),
        }
    }
}
