//! Product catalog: ids, assets and the per-product detail page content.
//!
//! Product text lives in the translation tables; this module only knows which
//! keys make up each product and in which order. [`describe`] turns those
//! plans into a [`ProductDescriptor`] for the active locale. Descriptors are
//! cheap and rebuilt on every render.

use std::fmt;
use std::str::FromStr;

use crate::core::config::asset_path;
use crate::resolver::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductId {
    E3Hand,
    XHand,
    BHand,
    TBrush,
}

impl ProductId {
    /// Order of the product cards and download tiles.
    pub const ALL: [ProductId; 4] = [
        ProductId::E3Hand,
        ProductId::XHand,
        ProductId::BHand,
        ProductId::TBrush,
    ];

    /// Route segment (`/product/x-hand`).
    pub fn slug(self) -> &'static str {
        match self {
            ProductId::E3Hand => "e3-hand",
            ProductId::XHand => "x-hand",
            ProductId::BHand => "b-hand",
            ProductId::TBrush => "t-brush",
        }
    }

    /// Segment used in translation keys and the CMS document (`products.xhand.name`).
    pub fn key(self) -> &'static str {
        match self {
            ProductId::E3Hand => "e3hand",
            ProductId::XHand => "xhand",
            ProductId::BHand => "bhand",
            ProductId::TBrush => "tbrush",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ProductId> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    /// Technical sheet under `pdfs/`.
    pub fn pdf_file(self) -> &'static str {
        match self {
            ProductId::E3Hand => "Gripability_e_hand.pdf",
            ProductId::XHand => "Gripability_x_hand.pdf",
            ProductId::BHand => "Gripability_b_hand-.pdf",
            ProductId::TBrush => "Gripability_t_brush.pdf",
        }
    }

    /// Gallery images, first one doubles as the product card image.
    pub fn images(self) -> &'static [&'static str] {
        match self {
            ProductId::E3Hand => &["E3Photo1.jpg", "E3Photo2.jpg", "E3Photo3.jpg", "E3Photo4.jpg"],
            ProductId::XHand => &["XHand.jpg", "XHand2.jpg", "XHand3.jpg"],
            ProductId::BHand => &["BHand1.jpg", "BHand2.jpg"],
            ProductId::TBrush => &["TBrush.jpg"],
        }
    }

    pub fn card_image(self) -> String {
        asset_path(self.images()[0])
    }

    pub fn pdf_path(self) -> String {
        asset_path(&format!("pdfs/{}", self.pdf_file()))
    }

    pub fn name_key(self) -> String {
        format!("products.{}.name", self.key())
    }

    pub fn desc_key(self) -> String {
        format!("products.{}.desc", self.key())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product id `{0}`")]
pub struct UnknownProduct(pub String);

impl FromStr for ProductId {
    type Err = UnknownProduct;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownProduct(s.to_string()))
    }
}

/// PDF file name for a download tile. Unmapped ids are logged and yield `None`.
pub fn pdf_for_slug(slug: &str) -> Option<&'static str> {
    match ProductId::from_slug(slug) {
        Some(id) => Some(id.pdf_file()),
        None => {
            tracing::error!(product = slug, "no PDF mapped for product");
            None
        }
    }
}

/// How a detail section is laid out on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Title + description tiles in a grid.
    Cards,
    /// Numbered walkthrough.
    Steps,
    /// Icon rows with a title and description.
    Highlights,
    /// Plain bullet list, entries have no description.
    Bullets,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: String,
    pub intro: Option<String>,
    pub layout: Layout,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalSpecs {
    pub title: String,
    pub rows: Vec<SpecRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDescriptor {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub requires_consultation: bool,
    /// Asset paths, already prefixed with the base path.
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub how_it_works: Option<DetailSection>,
    pub indications: Option<DetailSection>,
    pub applications: Option<DetailSection>,
    /// Benefits (b-hand) or system components (e-hand).
    pub extras: Option<DetailSection>,
    pub technical_specs: Option<TechnicalSpecs>,
    pub pdf_path: String,
}

// ---------------------------------------------------------------------------
// Static plans
// ---------------------------------------------------------------------------

struct SectionPlan {
    title: &'static str,
    intro: Option<&'static str>,
    layout: Layout,
    /// `{prefix}.{item}` for bullets, `{prefix}.{item}.title|description` otherwise.
    prefix: &'static str,
    items: &'static [&'static str],
}

enum SpecValue {
    Literal(&'static str),
    Key(&'static str),
}

struct SpecPlan {
    title: &'static str,
    rows: &'static [(&'static str, SpecValue)],
}

struct ProductPlan {
    how_it_works: Option<SectionPlan>,
    indications: Option<SectionPlan>,
    applications: Option<SectionPlan>,
    extras: Option<SectionPlan>,
    specs: Option<SpecPlan>,
}

static E3_HAND: ProductPlan = ProductPlan {
    how_it_works: Some(SectionPlan {
        title: "e3hand.operation.title",
        intro: Some("e3hand.operation.description"),
        layout: Layout::Steps,
        prefix: "e3hand.operation",
        items: &["step1", "step2", "step3"],
    }),
    indications: Some(SectionPlan {
        title: "e3hand.medicalIndications.title",
        intro: Some("e3hand.medicalIndications.indication"),
        layout: Layout::Bullets,
        prefix: "e3hand.medicalIndications",
        items: &["tetraplegia", "hemiparesis", "postpolio", "muscle"],
    }),
    applications: Some(SectionPlan {
        title: "e3hand.lifeApplications",
        intro: None,
        layout: Layout::Cards,
        prefix: "e3hand.applications",
        items: &["daily", "education", "career", "leisure", "creative"],
    }),
    extras: Some(SectionPlan {
        title: "e3hand.components.title",
        intro: Some("e3hand.components.description"),
        layout: Layout::Cards,
        prefix: "e3hand.components",
        items: &["gripper", "control", "backpack", "compressor"],
    }),
    specs: Some(SpecPlan {
        title: "e3hand.technicalSpecs",
        rows: &[
            ("e3hand.specs.grippingOperations", SpecValue::Key("e3hand.specs.grippingOperations.value")),
            ("e3hand.specs.grippingForces", SpecValue::Key("e3hand.specs.grippingForces.value")),
            ("e3hand.specs.batteryLife", SpecValue::Key("e3hand.specs.batteryLife.value")),
            ("e3hand.specs.weight", SpecValue::Key("e3hand.specs.weight.value")),
            ("e3hand.specs.workingPressure", SpecValue::Key("e3hand.specs.workingPressure.value")),
            ("e3hand.specs.control", SpecValue::Key("e3hand.specs.control.value")),
            ("e3hand.specs.certification", SpecValue::Key("e3hand.specs.certification.value")),
        ],
    }),
};

static X_HAND: ProductPlan = ProductPlan {
    how_it_works: Some(SectionPlan {
        title: "xhand.howItWorks",
        intro: None,
        layout: Layout::Highlights,
        prefix: "xhand",
        items: &[
            "modularAssembly",
            "bodyAdaptationSystems",
            "intelligentControl",
            "pneumaticOperation",
        ],
    }),
    indications: None,
    applications: Some(SectionPlan {
        title: "xhand.whoUses",
        intro: None,
        layout: Layout::Cards,
        prefix: "xhand.applications",
        items: &["education", "therapy", "workplace", "workshop"],
    }),
    extras: None,
    specs: Some(SpecPlan {
        title: "xhand.technicalSpecs",
        rows: &[
            ("specs.grippingForce", SpecValue::Literal("22N - 110N")),
            ("operatingPressure", SpecValue::Literal("2-8 bar")),
            ("inputPressure", SpecValue::Literal("8-12 bar")),
            ("specs.weight", SpecValue::Literal("53g (gripper module)")),
            ("specs.dimensions", SpecValue::Literal("95 x 53 x 15 mm")),
            ("specs.powerSupply", SpecValue::Literal("24V DC")),
            ("specs.airConsumption", SpecValue::Key("specs.airConsumption.value")),
        ],
    }),
};

static B_HAND: ProductPlan = ProductPlan {
    how_it_works: Some(SectionPlan {
        title: "bhand.howItWorks",
        intro: None,
        layout: Layout::Steps,
        prefix: "bhand",
        items: &["step1", "step2", "step3"],
    }),
    indications: Some(SectionPlan {
        title: "bhand.medicalIndications",
        intro: Some("bhand.indications.description"),
        layout: Layout::Bullets,
        prefix: "bhand.indications",
        items: &["muscle", "paresis", "dystrophy", "bilateral"],
    }),
    applications: Some(SectionPlan {
        title: "bhand.applications",
        intro: None,
        layout: Layout::Cards,
        prefix: "bhand.applications",
        items: &["daily", "learning", "work", "therapy"],
    }),
    extras: Some(SectionPlan {
        title: "bhand.benefits",
        intro: None,
        layout: Layout::Cards,
        prefix: "bhand.benefits",
        items: &["compact", "simple", "individual", "immediate"],
    }),
    specs: None,
};

static T_BRUSH: ProductPlan = ProductPlan {
    how_it_works: Some(SectionPlan {
        title: "tbrush.howItWorks",
        intro: None,
        layout: Layout::Highlights,
        prefix: "tbrush",
        items: &["grip", "rotation", "independence", "hygiene"],
    }),
    indications: Some(SectionPlan {
        title: "tbrush.medicalIndications",
        intro: Some("tbrush.indications.description"),
        layout: Layout::Bullets,
        prefix: "tbrush.indications",
        items: &["tetraplegia", "hemiparesis", "postpolio", "muscle"],
    }),
    applications: Some(SectionPlan {
        title: "tbrush.applications",
        intro: None,
        layout: Layout::Cards,
        prefix: "tbrush.applications",
        items: &["daily", "therapy", "independence", "care"],
    }),
    extras: None,
    specs: None,
};

fn plan(id: ProductId) -> &'static ProductPlan {
    match id {
        ProductId::E3Hand => &E3_HAND,
        ProductId::XHand => &X_HAND,
        ProductId::BHand => &B_HAND,
        ProductId::TBrush => &T_BRUSH,
    }
}

impl SectionPlan {
    fn build(&self, tr: &Translator) -> DetailSection {
        let entries = self
            .items
            .iter()
            .map(|item| match self.layout {
                Layout::Bullets => Entry {
                    title: tr.t(&format!("{}.{item}", self.prefix)),
                    description: None,
                },
                _ => Entry {
                    title: tr.t(&format!("{}.{item}.title", self.prefix)),
                    description: Some(tr.t(&format!("{}.{item}.description", self.prefix))),
                },
            })
            .collect();
        DetailSection {
            title: tr.t(self.title),
            intro: self.intro.map(|key| tr.t(key)),
            layout: self.layout,
            entries,
        }
    }
}

impl SpecPlan {
    fn build(&self, tr: &Translator) -> TechnicalSpecs {
        TechnicalSpecs {
            title: tr.t(self.title),
            rows: self
                .rows
                .iter()
                .map(|(label, value)| SpecRow {
                    label: tr.t(label),
                    value: match value {
                        SpecValue::Literal(text) => (*text).to_string(),
                        SpecValue::Key(key) => tr.t(key),
                    },
                })
                .collect(),
        }
    }
}

/// Assemble the detail page content for `slug`, or `None` for an unknown id.
pub fn describe(slug: &str, tr: &Translator) -> Option<ProductDescriptor> {
    let Some(id) = ProductId::from_slug(slug) else {
        tracing::warn!(product = slug, "unknown product id");
        return None;
    };
    Some(describe_product(id, tr))
}

pub fn describe_product(id: ProductId, tr: &Translator) -> ProductDescriptor {
    let plan = plan(id);
    ProductDescriptor {
        id,
        name: tr.t(&id.name_key()),
        description: tr.t(&id.desc_key()),
        long_description: tr.t(&format!("product.{}.longDescription", id.key())),
        requires_consultation: true,
        images: id.images().iter().map(|file| asset_path(file)).collect(),
        features: tr.list(&format!("product.{}.features", id.key())),
        how_it_works: plan.how_it_works.as_ref().map(|s| s.build(tr)),
        indications: plan.indications.as_ref().map(|s| s.build(tr)),
        applications: plan.applications.as_ref().map(|s| s.build(tr)),
        extras: plan.extras.as_ref().map(|s| s.build(tr)),
        technical_specs: plan.specs.as_ref().map(|s| s.build(tr)),
        pdf_path: id.pdf_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use rstest::rstest;

    #[rstest]
    #[case("e3-hand", 5, 4, true)]
    #[case("x-hand", 7, 3, true)]
    #[case("b-hand", 5, 2, false)]
    #[case("t-brush", 5, 1, false)]
    fn descriptor_shape(
        #[case] slug: &str,
        #[case] features: usize,
        #[case] images: usize,
        #[case] has_specs: bool,
    ) {
        let product = describe(slug, &Translator::static_only(Locale::En)).expect("known product");
        assert_eq!(product.id.slug(), slug);
        assert_eq!(product.features.len(), features);
        assert_eq!(product.images.len(), images);
        assert_eq!(product.technical_specs.is_some(), has_specs);
        assert!(product.requires_consultation);
        assert!(product.pdf_path.ends_with(product.id.pdf_file()));
    }

    #[test]
    fn unknown_id_yields_none() {
        assert!(describe("not-a-real-id", &Translator::static_only(Locale::En)).is_none());
        assert!(describe("", &Translator::static_only(Locale::De)).is_none());
    }

    #[rstest]
    #[case(Locale::En)]
    #[case(Locale::De)]
    fn every_descriptor_string_resolves(#[case] locale: Locale) {
        let tr = Translator::static_only(locale);
        for id in ProductId::ALL {
            let p = describe_product(id, &tr);
            let mut texts = vec![p.name, p.description, p.long_description];
            texts.extend(p.features);
            for section in [p.how_it_works, p.indications, p.applications, p.extras]
                .into_iter()
                .flatten()
            {
                texts.push(section.title);
                texts.extend(section.intro);
                for entry in section.entries {
                    texts.push(entry.title);
                    texts.extend(entry.description);
                }
            }
            if let Some(specs) = p.technical_specs {
                texts.push(specs.title);
                for row in specs.rows {
                    texts.push(row.label);
                    texts.push(row.value);
                }
            }
            for text in texts {
                assert!(
                    !text.starts_with(id.key()) && !text.starts_with("product.") && !text.starts_with("specs."),
                    "{id}: unresolved key `{text}` in {locale}"
                );
            }
        }
    }

    #[test]
    fn x_hand_specs_keep_literal_values() {
        let specs = describe_product(ProductId::XHand, &Translator::static_only(Locale::De))
            .technical_specs
            .expect("x-hand specs");
        assert_eq!(specs.rows.len(), 7);
        assert_eq!(specs.rows[0].label, "Greifkraft");
        assert_eq!(specs.rows[0].value, "22N - 110N");
        assert_eq!(specs.rows[4].value, "95 x 53 x 15 mm");
    }

    #[test]
    fn slugs_round_trip_and_pdfs_are_mapped() {
        for id in ProductId::ALL {
            assert_eq!(id.slug().parse::<ProductId>(), Ok(id));
        }
        assert_eq!(pdf_for_slug("b-hand"), Some("Gripability_b_hand-.pdf"));
        assert_eq!(pdf_for_slug("e3-hand"), Some("Gripability_e_hand.pdf"));
        assert_eq!(pdf_for_slug("z-hand"), None);
    }

    #[test]
    fn card_order_matches_site() {
        let slugs: Vec<_> = ProductId::ALL.iter().map(|id| id.slug()).collect();
        assert_eq!(slugs, ["e3-hand", "x-hand", "b-hand", "t-brush"]);
    }
}
