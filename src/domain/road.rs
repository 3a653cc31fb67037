use super::Path;

/// Road classification based on the stored `jenis` tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadClass {
    National,
    Provincial,
    Regency,
    Village,
    Neighbourhood,
    Footpath,
    /// Tag not in the known list, kept verbatim
    Other(String),
}

impl RoadClass {
    /// Classify a stored `jenis` value into a RoadClass
    pub fn from_tag(tag: &str) -> RoadClass {
        match tag {
            "jalan_nasional" => RoadClass::National,
            "jalan_provinsi" => RoadClass::Provincial,
            "jalan_kabupaten" => RoadClass::Regency,
            "jalan_desa" => RoadClass::Village,
            "jalan_lingkungan" => RoadClass::Neighbourhood,
            "jalan_setapak" => RoadClass::Footpath,
            other => RoadClass::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            RoadClass::National => "jalan_nasional",
            RoadClass::Provincial => "jalan_provinsi",
            RoadClass::Regency => "jalan_kabupaten",
            RoadClass::Village => "jalan_desa",
            RoadClass::Neighbourhood => "jalan_lingkungan",
            RoadClass::Footpath => "jalan_setapak",
            RoadClass::Other(tag) => tag,
        }
    }

    /// Human label, e.g. `jalan_desa` -> `Jalan Desa`
    pub fn label(&self) -> String {
        self.tag()
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A road with its centre line and classification
#[derive(Debug, Clone)]
pub struct Road {
    pub name: String,
    pub class: RoadClass,
    pub description: Option<String>,
    pub points: Path,
}

impl Road {
    pub fn new(name: impl Into<String>, class: RoadClass, points: Path) -> Self {
        Self {
            name: name.into(),
            class,
            description: None,
            points,
        }
    }
}
