//! Navigation entries and the section identifiers they target.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::scroll::normalize_section_id;

/// In-page sections addressable by anchor id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Inicio,
    Servicos,
    Localizacao,
    Contato,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [Self::Inicio, Self::Servicos, Self::Localizacao, Self::Contato];

    /// Bare anchor identifier as rendered in the `id` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::Servicos => "servicos",
            Self::Localizacao => "localizacao",
            Self::Contato => "contato",
        }
    }

    /// Fragment href (`#servicos`) used as the no-script fallback.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Parse an identifier, tolerating a single leading `#`. Uses the same
    /// normalization as `util::scroll::scroll_to_section`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let id = normalize_section_id(raw)?;
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Início", target: SectionId::Inicio },
    NavLink { label: "Serviços", target: SectionId::Servicos },
    NavLink { label: "Localização", target: SectionId::Localizacao },
    NavLink { label: "Contato", target: SectionId::Contato },
];
