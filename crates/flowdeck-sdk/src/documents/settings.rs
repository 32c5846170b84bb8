use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProxyLocation {
    #[serde(rename = "US-CA")]
    UsCa,
    #[serde(rename = "US-NY")]
    UsNy,
    #[serde(rename = "US-TX")]
    UsTx,
    #[serde(rename = "US-FL")]
    UsFl,
    #[serde(rename = "US-WA")]
    UsWa,
    Residential,
    ResidentialEs,
    ResidentialIe,
    ResidentialGb,
    ResidentialIn,
    ResidentialJp,
    ResidentialFr,
    ResidentialDe,
    ResidentialNz,
    ResidentialZa,
    ResidentialAr,
    ResidentialIsp,
    None,
}

impl ProxyLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyLocation::UsCa => "US-CA",
            ProxyLocation::UsNy => "US-NY",
            ProxyLocation::UsTx => "US-TX",
            ProxyLocation::UsFl => "US-FL",
            ProxyLocation::UsWa => "US-WA",
            ProxyLocation::Residential => "RESIDENTIAL",
            ProxyLocation::ResidentialEs => "RESIDENTIAL_ES",
            ProxyLocation::ResidentialIe => "RESIDENTIAL_IE",
            ProxyLocation::ResidentialGb => "RESIDENTIAL_GB",
            ProxyLocation::ResidentialIn => "RESIDENTIAL_IN",
            ProxyLocation::ResidentialJp => "RESIDENTIAL_JP",
            ProxyLocation::ResidentialFr => "RESIDENTIAL_FR",
            ProxyLocation::ResidentialDe => "RESIDENTIAL_DE",
            ProxyLocation::ResidentialNz => "RESIDENTIAL_NZ",
            ProxyLocation::ResidentialZa => "RESIDENTIAL_ZA",
            ProxyLocation::ResidentialAr => "RESIDENTIAL_AR",
            ProxyLocation::ResidentialIsp => "RESIDENTIAL_ISP",
            ProxyLocation::None => "NONE",
        }
    }

    pub fn timezone(&self) -> Option<&'static str> {
        match self {
            ProxyLocation::None => None,
            ProxyLocation::UsCa => Some("America/Los_Angeles"),
            ProxyLocation::UsTx => Some("America/Chicago"),
            ProxyLocation::UsNy
            | ProxyLocation::UsFl
            | ProxyLocation::UsWa
            | ProxyLocation::Residential
            | ProxyLocation::ResidentialIsp => Some("America/New_York"),
            ProxyLocation::ResidentialEs => Some("Europe/Madrid"),
            ProxyLocation::ResidentialIe => Some("Europe/Dublin"),
            ProxyLocation::ResidentialGb => Some("Europe/London"),
            ProxyLocation::ResidentialIn => Some("Asia/Kolkata"),
            ProxyLocation::ResidentialJp => Some("Asia/Tokyo"),
            ProxyLocation::ResidentialFr => Some("Europe/Paris"),
            ProxyLocation::ResidentialDe => Some("Europe/Berlin"),
            ProxyLocation::ResidentialNz => Some("Pacific/Auckland"),
            ProxyLocation::ResidentialZa => Some("Africa/Johannesburg"),
            ProxyLocation::ResidentialAr => Some("America/Argentina/Buenos_Aires"),
        }
    }
}

impl Display for ProxyLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSettings {
    pub persist_browser_session: bool,
    pub proxy_location: Option<ProxyLocation>,
    pub webhook_callback_url: Option<String>,
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
