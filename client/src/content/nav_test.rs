use super::*;

#[test]
fn parse_accepts_bare_and_fragment_ids() {
    assert_eq!(SectionId::parse("servicos"), Some(SectionId::Servicos));
    assert_eq!(SectionId::parse("#contato"), Some(SectionId::Contato));
    assert_eq!(SectionId::parse("  #inicio "), Some(SectionId::Inicio));
}

#[test]
fn parse_rejects_unknown_ids() {
    assert_eq!(SectionId::parse(""), None);
    assert_eq!(SectionId::parse("#"), None);
    assert_eq!(SectionId::parse("precos"), None);
    assert_eq!(SectionId::parse("SERVICOS"), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for section in SectionId::ALL {
        assert_eq!(SectionId::parse(section.as_str()), Some(section));
        assert_eq!(SectionId::parse(&section.href()), Some(section));
    }
}

#[test]
fn href_prefixes_fragment_marker() {
    assert_eq!(SectionId::Localizacao.href(), "#localizacao");
}

#[test]
fn nav_links_cover_every_section_in_page_order() {
    let targets = NAV_LINKS.iter().map(|link| link.target).collect::<Vec<_>>();
    assert_eq!(targets, SectionId::ALL.to_vec());
    assert!(NAV_LINKS.iter().all(|link| !link.label.is_empty()));
}

#[test]
fn parse_agrees_with_scroll_normalization() {
    use crate::util::scroll::normalize_section_id;

    for raw in ["servicos", "#servicos", "##servicos", " #contato", "#", "", "#precos"] {
        let via_normalize = normalize_section_id(raw).and_then(|id| {
            SectionId::ALL.into_iter().find(|section| section.as_str() == id)
        });
        assert_eq!(SectionId::parse(raw), via_normalize, "{raw:?}");
    }
}

#[test]
fn parse_strips_only_one_fragment_marker() {
    assert_eq!(SectionId::parse("##servicos"), None);
}
