use serde::Serialize;

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Franchise {
    pub code: &'static str,
    pub name: &'static str,
}

pub static FRANCHISES: [Franchise; 10] = [
    Franchise { code: "CSK", name: "Chennai Super Kings" },
    Franchise { code: "DC", name: "Delhi Capitals" },
    Franchise { code: "GT", name: "Gujarat Titans" },
    Franchise { code: "KKR", name: "Kolkata Knight Riders" },
    Franchise { code: "LSG", name: "Lucknow Super Giants" },
    Franchise { code: "MI", name: "Mumbai Indians" },
    Franchise { code: "PBKS", name: "Punjab Kings" },
    Franchise { code: "RR", name: "Rajasthan Royals" },
    Franchise { code: "RCB", name: "Royal Challengers Bengaluru" },
    Franchise { code: "SRH", name: "Sunrisers Hyderabad" },
];

impl Franchise {
    /// Case-insensitive lookup by short code.
    pub fn lookup(code: &str) -> Result<&'static Franchise, DomainError> {
        let code = code.trim();
        FRANCHISES
            .iter()
            .find(|f| f.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| DomainError::invalid_input(format!("unknown team code: {code:?}")))
    }

    /// Whether `label` names this franchise by code or full name.
    pub fn is_named(&self, label: &str) -> bool {
        let label = label.trim();
        label.eq_ignore_ascii_case(self.code) || label.eq_ignore_ascii_case(self.name)
    }
}

impl std::fmt::Display for Franchise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Franchise::lookup("csk").unwrap().name, "Chennai Super Kings");
        assert_eq!(Franchise::lookup(" RCB ").unwrap().code, "RCB");
    }

    #[test]
    fn test_lookup_rejects_unknown_code() {
        assert!(matches!(
            Franchise::lookup("XYZ"),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_is_named_matches_code_or_name() {
        let mi = Franchise::lookup("MI").unwrap();
        assert!(mi.is_named("MI"));
        assert!(mi.is_named("mumbai indians"));
        assert!(!mi.is_named("CSK"));
    }
}
