//! Service price list.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    /// Display string, already formatted for the locale.
    pub price: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub popular: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "corte",
        name: "Corte Clássico",
        price: "R$ 45",
        description: "Corte na tesoura ou máquina, lavagem e finalização com pomada.",
        image_url: "https://images.unsplash.com/photo-1599351431202-1e0f0137899a?w=800&q=80",
        popular: true,
    },
    Service {
        id: "barba",
        name: "Barba Completa",
        price: "R$ 35",
        description: "Toalha quente, navalha e hidratação com óleo para barba.",
        image_url: "https://images.unsplash.com/photo-1621605815971-fbc98d665033?w=800&q=80",
        popular: false,
    },
    Service {
        id: "combo",
        name: "Corte + Barba",
        price: "R$ 70",
        description: "O pacote completo para sair pronto de cabeça aos pés.",
        image_url: "https://images.unsplash.com/photo-1503951914875-452162b0f3f1?w=800&q=80",
        popular: true,
    },
    Service {
        id: "pigmentacao",
        name: "Pigmentação",
        price: "R$ 30",
        description: "Correção de falhas na barba ou no cabelo com acabamento natural.",
        image_url: "https://images.unsplash.com/photo-1622286342621-4bd786c2447c?w=800&q=80",
        popular: false,
    },
    Service {
        id: "sobrancelha",
        name: "Sobrancelha",
        price: "R$ 15",
        description: "Alinhamento na navalha ou pinça, discreto e rápido.",
        image_url: "https://images.unsplash.com/photo-1593702275687-f8b402bf1fb5?w=800&q=80",
        popular: false,
    },
    Service {
        id: "infantil",
        name: "Corte Infantil",
        price: "R$ 35",
        description: "Para os pequenos até 12 anos, com paciência e cuidado.",
        image_url: "https://images.unsplash.com/photo-1605497788044-5a32c7078486?w=800&q=80",
        popular: false,
    },
];
