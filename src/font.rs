use serde::{Deserialize, Serialize};

/// One of the two standard Type1 fonts every exported page declares. Fonts
/// are referred to by name only; no font program is embedded, so readers
/// substitute their own Helvetica metrics.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontId {
    #[default]
    Regular,
    Bold,
}

impl FontId {
    /// Every font in the order it is declared in a page's resources
    pub const ALL: [FontId; 2] = [FontId::Regular, FontId::Bold];

    /// The key under `/Resources /Font` that content streams select with `Tf`
    pub fn resource_name(self) -> &'static str {
        match self {
            FontId::Regular => "F1",
            FontId::Bold => "F2",
        }
    }

    /// The standard 14 font this resource maps to
    pub fn base_font(self) -> &'static str {
        match self {
            FontId::Regular => "Helvetica",
            FontId::Bold => "Helvetica-Bold",
        }
    }
}
