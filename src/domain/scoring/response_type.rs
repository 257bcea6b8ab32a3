use std::fmt::{Display, Formatter};

/// Treatment strategy chosen for a risk.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum ResponseType {
    #[default]
    Accept,
    Transfer,
    Mitigate,
    Avoid,
    Share,
    Exploit,
}

impl ResponseType {
    /// Share of the raw rating that remains once this response is applied.
    pub fn adjustment_factor(&self) -> f64 {
        match self {
            ResponseType::Accept => 1.0,
            ResponseType::Transfer => 0.35,
            ResponseType::Mitigate => 0.6,
            ResponseType::Share => 0.6,
            ResponseType::Avoid => 0.0,
            ResponseType::Exploit => -0.3,
        }
    }
}

impl From<&str> for ResponseType {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "transfer" => ResponseType::Transfer,
            "mitigate" => ResponseType::Mitigate,
            "avoid" => ResponseType::Avoid,
            "share" => ResponseType::Share,
            "exploit" => ResponseType::Exploit,
            _ => ResponseType::Accept,
        }
    }
}

impl From<Option<&str>> for ResponseType {
    fn from(value: Option<&str>) -> Self {
        value.map(ResponseType::from).unwrap_or_default()
    }
}

impl Display for ResponseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResponseType::Accept => "Accept",
                ResponseType::Transfer => "Transfer",
                ResponseType::Mitigate => "Mitigate",
                ResponseType::Avoid => "Avoid",
                ResponseType::Share => "Share",
                ResponseType::Exploit => "Exploit",
            }
        )
    }
}
