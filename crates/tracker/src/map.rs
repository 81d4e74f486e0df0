use model::LatLon;

/// Opaque reference to a marker owned by the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Opaque reference to a polyline owned by the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolylineHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSize {
    Small,
    Medium,
}

#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub title: String,
    pub icon: String,
    pub color: String,
    pub size: MarkerSize,
    pub rise_on_hover: bool,
    pub z_index_offset: i32,
}

impl MarkerStyle {
    /// Medium bicycle icon in the rider's color, raised on hover.
    pub fn rider(name: &str, color: &str) -> Self {
        Self {
            title: name.to_owned(),
            icon: "bicycle".to_owned(),
            color: color.to_owned(),
            size: MarkerSize::Medium,
            rise_on_hover: true,
            z_index_offset: 0,
        }
    }

    /// Small landmark icon, kept below the rider markers.
    pub fn landmark(title: &str, icon: Option<&str>, color: Option<&str>) -> Self {
        Self {
            title: title.to_owned(),
            icon: icon.unwrap_or("marker-stroked").to_owned(),
            color: color.unwrap_or("#FFFF00").to_owned(),
            size: MarkerSize::Small,
            rise_on_hover: false,
            z_index_offset: -10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub dash_array: Option<String>,
}

impl PolylineStyle {
    /// Dashed red line for a rider's recent positions.
    pub fn trace() -> Self {
        Self {
            color: "#ff0000".to_owned(),
            weight: 4,
            opacity: 0.9,
            dash_array: Some("3,7".to_owned()),
        }
    }

    /// Wide translucent line for a full route.
    pub fn route(color: &str) -> Self {
        Self {
            color: color.to_owned(),
            weight: 6,
            opacity: 0.5,
            dash_array: None,
        }
    }
}

pub type ClickCallback = Box<dyn Fn(LatLon) + Send + Sync>;

/// The external mapping collaborator. Everything this trait draws is owned
/// by the implementation; the tracker only keeps the returned handles.
/// Implementations must be callable from any polling task, so interior
/// mutability is their concern.
pub trait MapSurface: Send + Sync + 'static {
    fn create_marker(&self, position: LatLon, style: MarkerStyle) -> MarkerHandle;
    fn move_marker(&self, handle: MarkerHandle, position: LatLon);
    fn bind_popup(&self, handle: MarkerHandle, html: String);
    fn create_polyline(
        &self,
        points: Vec<LatLon>,
        style: PolylineStyle,
    ) -> PolylineHandle;
    fn update_polyline(&self, handle: PolylineHandle, points: Vec<LatLon>);
    fn fit_bounds_to(&self, handle: PolylineHandle);
    fn on_click(&self, handle: PolylineHandle, callback: ClickCallback);
    /// Open a transient popup at a position, not bound to any marker.
    fn open_popup(&self, position: LatLon, text: String);
}
