// File: crates/crop-engine/src/crops.rs
// Summary: The built-in crop catalogue: display colour, unit price, seasonal profile and water use.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownCrop {
    Pomodoro,
    Limone,
    Uva,
    Olivo,
    GranoDuro,
    Nocciola,
    Pesche,
}

impl KnownCrop {
    /// Catalogue order; the simulator emits crops in this order.
    pub const ALL: [KnownCrop; 7] = [
        KnownCrop::Pomodoro,
        KnownCrop::Limone,
        KnownCrop::Uva,
        KnownCrop::Olivo,
        KnownCrop::GranoDuro,
        KnownCrop::Nocciola,
        KnownCrop::Pesche,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KnownCrop::Pomodoro => "Pomodoro",
            KnownCrop::Limone => "Limone",
            KnownCrop::Uva => "Uva",
            KnownCrop::Olivo => "Olivo",
            KnownCrop::GranoDuro => "Grano Duro",
            KnownCrop::Nocciola => "Nocciola",
            KnownCrop::Pesche => "Pesche",
        }
    }

    /// Exact, case-sensitive match on the display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|crop| crop.name() == name)
    }

    pub fn color(self) -> Rgba {
        match self {
            KnownCrop::Pomodoro => Rgba::opaque(0xFF, 0x00, 0x00),
            KnownCrop::Limone => Rgba::opaque(0xFF, 0xFF, 0x00),
            KnownCrop::Uva => Rgba::opaque(0x00, 0x00, 0x8B),
            KnownCrop::Olivo => Rgba::opaque(0x00, 0xBF, 0xFF),
            KnownCrop::GranoDuro => Rgba::opaque(0x00, 0x80, 0x00),
            KnownCrop::Nocciola => Rgba::opaque(0xC8, 0xA2, 0xC8),
            KnownCrop::Pesche => Rgba::opaque(0x00, 0x00, 0x00),
        }
    }

    /// Sale price per kg.
    pub fn unit_price(self) -> f64 {
        match self {
            KnownCrop::Pomodoro => 2.0,
            KnownCrop::Limone => 1.5,
            KnownCrop::Uva => 3.0,
            KnownCrop::Olivo => 5.0,
            KnownCrop::GranoDuro => 1.2,
            KnownCrop::Nocciola => 4.0,
            KnownCrop::Pesche => 2.5,
        }
    }

    /// Litres of water per kg harvested.
    pub fn water_per_unit(self) -> f64 {
        match self {
            KnownCrop::Pomodoro => 2.0,
            KnownCrop::Limone => 1.5,
            KnownCrop::Uva => 2.5,
            KnownCrop::Olivo => 3.0,
            KnownCrop::GranoDuro => 1.2,
            KnownCrop::Nocciola => 3.5,
            KnownCrop::Pesche => 2.8,
        }
    }

    /// Normalised (0..=1) harvest intensity for January..December.
    pub fn seasonal_profile(self) -> [f64; 12] {
        match self {
            KnownCrop::Pomodoro => [0.0, 0.0, 0.1, 0.3, 0.6, 1.0, 1.0, 0.9, 0.6, 0.3, 0.1, 0.0],
            KnownCrop::Limone => [0.2, 0.2, 0.3, 0.5, 0.7, 0.9, 0.9, 0.8, 0.7, 0.6, 0.4, 0.3],
            KnownCrop::Uva => [0.0, 0.0, 0.1, 0.2, 0.4, 0.7, 1.0, 1.0, 0.8, 0.5, 0.2, 0.0],
            KnownCrop::Olivo => [0.3, 0.3, 0.4, 0.5, 0.6, 0.8, 0.9, 0.8, 0.6, 0.5, 0.4, 0.3],
            KnownCrop::GranoDuro => [0.0, 0.1, 0.3, 0.6, 0.9, 1.0, 0.8, 0.5, 0.2, 0.1, 0.0, 0.0],
            KnownCrop::Nocciola => [0.1, 0.1, 0.2, 0.4, 0.5, 0.7, 0.8, 0.8, 0.6, 0.4, 0.2, 0.1],
            KnownCrop::Pesche => [0.0, 0.0, 0.2, 0.5, 0.8, 1.0, 1.0, 0.9, 0.6, 0.3, 0.1, 0.0],
        }
    }
}
