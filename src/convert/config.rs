#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Widest stroke a line ROI may have and still convert to a line.
    pub max_line_width: f32,
    /// Stroke width a polyline ROI must have to convert to a polyline.
    pub polyline_width: f32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_line_width: 1.0,
            polyline_width: 0.0,
        }
    }
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
