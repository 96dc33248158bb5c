// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Instant-noodle catalog with sodium content per package.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A catalog product. The set is fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Product {
    IndomieGoreng,
    IndomieRebus,
    MieSedaapGoreng,
    MieSedaapSoto,
    SarimiGoreng,
    SarimiKari,
    SupermiAyamBawang,
    SupermiSoto,
    PopMieAyam,
    PopMieKari,
    MieGelasAbcSoto,
    MieGelasAbcKari,
    MieSuksesAyamBawang,
    MieSuksesSoto,
    MieBurungDaraGoreng,
    MieBurungDaraSoto,
    MieGacoanPedas,
    MieGacoanAyam,
    NissinCupNoodles,
    MaruchanRamen,
}

impl Product {
    /// Every product, in display order.
    pub const ALL: [Product; 20] = [
        Product::IndomieGoreng,
        Product::IndomieRebus,
        Product::MieSedaapGoreng,
        Product::MieSedaapSoto,
        Product::SarimiGoreng,
        Product::SarimiKari,
        Product::SupermiAyamBawang,
        Product::SupermiSoto,
        Product::PopMieAyam,
        Product::PopMieKari,
        Product::MieGelasAbcSoto,
        Product::MieGelasAbcKari,
        Product::MieSuksesAyamBawang,
        Product::MieSuksesSoto,
        Product::MieBurungDaraGoreng,
        Product::MieBurungDaraSoto,
        Product::MieGacoanPedas,
        Product::MieGacoanAyam,
        Product::NissinCupNoodles,
        Product::MaruchanRamen,
    ];

    /// Sodium per package in milligrams.
    pub const fn sodium_mg(self) -> u64 {
        match self {
            Product::IndomieGoreng => 1000,
            Product::IndomieRebus => 900,
            Product::MieSedaapGoreng => 1100,
            Product::MieSedaapSoto => 950,
            Product::SarimiGoreng => 800,
            Product::SarimiKari => 850,
            Product::SupermiAyamBawang => 1200,
            Product::SupermiSoto => 1000,
            Product::PopMieAyam => 1300,
            Product::PopMieKari => 1250,
            Product::MieGelasAbcSoto => 900,
            Product::MieGelasAbcKari => 950,
            Product::MieSuksesAyamBawang => 1100,
            Product::MieSuksesSoto => 1050,
            Product::MieBurungDaraGoreng => 800,
            Product::MieBurungDaraSoto => 850,
            Product::MieGacoanPedas => 1400,
            Product::MieGacoanAyam => 1300,
            Product::NissinCupNoodles => 1000,
            Product::MaruchanRamen => 1200,
        }
    }

    /// Catalog key, as used in requests and storage.
    pub const fn id(self) -> &'static str {
        match self {
            Product::IndomieGoreng => "indomie_goreng",
            Product::IndomieRebus => "indomie_rebus",
            Product::MieSedaapGoreng => "mie_sedaap_goreng",
            Product::MieSedaapSoto => "mie_sedaap_soto",
            Product::SarimiGoreng => "sarimi_goreng",
            Product::SarimiKari => "sarimi_kari",
            Product::SupermiAyamBawang => "supermi_ayam_bawang",
            Product::SupermiSoto => "supermi_soto",
            Product::PopMieAyam => "pop_mie_ayam",
            Product::PopMieKari => "pop_mie_kari",
            Product::MieGelasAbcSoto => "mie_gelas_abc_soto",
            Product::MieGelasAbcKari => "mie_gelas_abc_kari",
            Product::MieSuksesAyamBawang => "mie_sukses_ayam_bawang",
            Product::MieSuksesSoto => "mie_sukses_soto",
            Product::MieBurungDaraGoreng => "mie_burung_dara_goreng",
            Product::MieBurungDaraSoto => "mie_burung_dara_soto",
            Product::MieGacoanPedas => "mie_gacoan_pedas",
            Product::MieGacoanAyam => "mie_gacoan_ayam",
            Product::NissinCupNoodles => "nissin_cup_noodles",
            Product::MaruchanRamen => "maruchan_ramen",
        }
    }

    /// Name shown in product pickers.
    pub const fn display_name(self) -> &'static str {
        match self {
            Product::IndomieGoreng => "Indomie Goreng",
            Product::IndomieRebus => "Indomie Rebus",
            Product::MieSedaapGoreng => "Mie Sedaap Goreng",
            Product::MieSedaapSoto => "Mie Sedaap Soto",
            Product::SarimiGoreng => "Sarimi Goreng",
            Product::SarimiKari => "Sarimi Kari",
            Product::SupermiAyamBawang => "Supermi Ayam Bawang",
            Product::SupermiSoto => "Supermi Soto",
            Product::PopMieAyam => "Pop Mie Ayam",
            Product::PopMieKari => "Pop Mie Kari",
            Product::MieGelasAbcSoto => "Mie Gelas ABC Soto",
            Product::MieGelasAbcKari => "Mie Gelas ABC Kari",
            Product::MieSuksesAyamBawang => "Mie Sukses Ayam Bawang",
            Product::MieSuksesSoto => "Mie Sukses Soto",
            Product::MieBurungDaraGoreng => "Mie Burung Dara Goreng",
            Product::MieBurungDaraSoto => "Mie Burung Dara Soto",
            Product::MieGacoanPedas => "Mie Gacoan Pedas",
            Product::MieGacoanAyam => "Mie Gacoan Ayam",
            Product::NissinCupNoodles => "Nissin Cup Noodles",
            Product::MaruchanRamen => "Maruchan Ramen",
        }
    }
}

impl FromStr for Product {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Product::ALL
            .into_iter()
            .find(|p| p.id() == key)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown product: '{}'", key)))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Catalog entry for API listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub sodium_mg: u64,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.display_name().to_string(),
            sodium_mg: product.sodium_mg(),
        }
    }
}
