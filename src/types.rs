use serde::{Deserialize, Deserializer, Serialize};

/// Accepts JSON numbers like `590` or `590.0` for u32 fields, since clients
/// frequently send whole numbers as floats.
pub fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = f64::deserialize(deserializer)?;
    if v < 0.0 || v > u32::MAX as f64 || v.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative whole number, got {v}"
        )));
    }
    Ok(v as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub length: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub width: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub height: u32,
}

impl Dims {
    pub fn new(length: u32, width: u32, height: u32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn volume(&self) -> u64 {
        self.length as u64 * self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

/// One of the six axis-aligned orientations of a box. Each variant names the
/// permutation of the nominal (length, width, height) triple that becomes
/// the active triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Lwh,
    Lhw,
    Wlh,
    Whl,
    Hlw,
    Hwl,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::Lwh,
        Orientation::Lhw,
        Orientation::Wlh,
        Orientation::Whl,
        Orientation::Hlw,
        Orientation::Hwl,
    ];

    /// Applies this orientation to a nominal dimension triple.
    pub fn apply(&self, nominal: Dims) -> Dims {
        let Dims {
            length: l,
            width: w,
            height: h,
        } = nominal;
        match self {
            Orientation::Lwh => Dims::new(l, w, h),
            Orientation::Lhw => Dims::new(l, h, w),
            Orientation::Wlh => Dims::new(w, l, h),
            Orientation::Whl => Dims::new(w, h, l),
            Orientation::Hlw => Dims::new(h, l, w),
            Orientation::Hwl => Dims::new(h, w, l),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Orientation::Lwh => "lwh",
            Orientation::Lhw => "lhw",
            Orientation::Wlh => "wlh",
            Orientation::Whl => "whl",
            Orientation::Hlw => "hlw",
            Orientation::Hwl => "hwl",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Position {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

fn default_orientations() -> Vec<Orientation> {
    vec![Orientation::Lwh]
}

fn default_true() -> bool {
    true
}

fn default_color() -> String {
    "#FF6B6B".to_string()
}

fn default_item_type() -> String {
    "box".to_string()
}

/// Caller-supplied description of one item kind: nominal geometry plus the
/// number of identical physical units requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    #[serde(flatten)]
    pub dims: Dims,
    pub weight: f64,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub quantity: u32,
    /// Orientations tried for each candidate position, in this order.
    #[serde(default = "default_orientations")]
    pub orientation_preference: Vec<Orientation>,
    #[serde(default)]
    pub fragile: bool,
    #[serde(default = "default_true")]
    pub can_stack: bool,
    #[serde(default = "default_true")]
    pub can_stack_same_type: bool,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_item_type")]
    pub item_type: String,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, dims: Dims, weight: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            dims,
            weight,
            quantity,
            orientation_preference: default_orientations(),
            fragile: false,
            can_stack: true,
            can_stack_same_type: true,
            color: default_color(),
            item_type: default_item_type(),
        }
    }

    pub fn with_orientations(mut self, orientations: Vec<Orientation>) -> Self {
        self.orientation_preference = orientations;
        self
    }
}

/// One physical instance produced by quantity expansion. Each unit owns its
/// geometry and flags outright; units derived from the same spec share no
/// mutable state.
#[derive(Debug, Clone)]
pub struct UnitItem {
    pub name: String,
    pub nominal: Dims,
    pub weight: f64,
    pub orientation_preference: Vec<Orientation>,
    pub fragile: bool,
    pub can_stack: bool,
    pub can_stack_same_type: bool,
    pub color: String,
    pub item_type: String,
}

impl UnitItem {
    /// Volume from the nominal triple, identical under every orientation.
    pub fn volume(&self) -> u64 {
        self.nominal.volume()
    }
}

/// A committed unit: identity, active dimensions, and where it sits.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedItem {
    pub name: String,
    pub dims: Dims,
    pub orientation: Orientation,
    pub position: Position,
    pub weight: f64,
    pub color: String,
    pub item_type: String,
}
