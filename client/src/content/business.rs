//! Business facts shared by hero, location panel and footer.

/// Opening hours for one group of days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Business {
    pub name: &'static str,
    pub tagline: &'static str,
    pub city: &'static str,
    /// Street address, also used to build the map search link.
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
    pub hours: &'static [OpeningHours],
}

pub const BUSINESS: Business = Business {
    name: "Navalha de Ouro",
    tagline: "Cortes clássicos e barba feita na navalha, com hora marcada e sem pressa.",
    city: "São Paulo",
    address: "Rua Augusta, 1500 - Consolação, São Paulo - SP, 01304-001",
    phone: "(11) 98765-4321",
    email: "contato@navalhadeouro.com.br",
    instagram: "https://instagram.com/navalhadeouro",
    hours: &[
        OpeningHours { days: "Terça a Sexta", hours: "09:00 - 20:00" },
        OpeningHours { days: "Sábado", hours: "08:00 - 18:00" },
        OpeningHours { days: "Domingo e Segunda", hours: "Fechado" },
    ],
};
